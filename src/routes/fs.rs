use crate::body::ResponseBody;
use crate::err::{Error, FatalError};
use crate::path::resolve;
use crate::routes::{no_content, text_response, State, TEXT_PLAIN};
use http_body_util::BodyExt;
use hyper::body::Body;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Request, Response, StatusCode};
use std::io;
use tokio::fs::{self, File};

pub async fn get<B>(
    req: Request<B>,
    state: &State,
) -> Result<Response<ResponseBody>, FatalError> {
    let path = resolve(&state.root, req.uri().path());

    let meta = match fs::metadata(&path).await {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("GET {} -> [not found]", req.uri());
            return Ok(text_response(StatusCode::NOT_FOUND, "File not found"));
        }
        Err(e) => return Err(e.into()),
    };

    if meta.is_dir() {
        let mut entries = fs::read_dir(&path).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        log::info!("GET {} -> [listing {} entries]", req.uri(), names.len());
        Ok(text_response(StatusCode::OK, names.join("\n")))
    } else {
        let file = File::open(&path).await?;
        let mime = mime_guess::from_path(&path).first_or_octet_stream();
        log::info!("GET {} -> [{} bytes, {}]", req.uri(), meta.len(), mime);

        let mut resp = Response::new(ResponseBody::from_file(file));
        resp.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_str(mime.essence_str()).unwrap_or(TEXT_PLAIN),
        );
        Ok(resp)
    }
}

pub async fn put<B>(req: Request<B>, state: &State) -> Result<Response<ResponseBody>, FatalError>
where
    B: Body,
    B::Error: Into<Error>,
{
    let (parts, body) = req.into_parts();
    let path = resolve(&state.root, parts.uri.path());

    // Drain the whole body before touching the file; no streaming
    // write-through.
    let data = body
        .collect()
        .await
        .map_err(|e| FatalError::from(e.into()))?
        .to_bytes();
    fs::write(&path, &data).await?;

    log::info!("PUT {} -> [wrote {} bytes]", parts.uri, data.len());
    Ok(no_content())
}

pub async fn delete<B>(
    req: Request<B>,
    state: &State,
) -> Result<Response<ResponseBody>, FatalError> {
    let path = resolve(&state.root, req.uri().path());

    let meta = match fs::metadata(&path).await {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            // Deleting something that is already gone counts as success.
            log::info!("DELETE {} -> [already gone]", req.uri());
            return Ok(no_content());
        }
        Err(e) => return Err(e.into()),
    };

    if meta.is_dir() {
        // remove_dir refuses non-empty directories; that failure propagates.
        fs::remove_dir(&path).await?;
    } else {
        fs::remove_file(&path).await?;
    }

    log::info!("DELETE {} -> [removed]", req.uri());
    Ok(no_content())
}

pub async fn mkcol<B>(
    req: Request<B>,
    state: &State,
) -> Result<Response<ResponseBody>, FatalError> {
    let path = resolve(&state.root, req.uri().path());

    // Non-recursive: a missing parent propagates as a failure.
    fs::create_dir(&path).await?;

    log::info!("MKCOL {} -> [created]", req.uri());
    Ok(no_content())
}
