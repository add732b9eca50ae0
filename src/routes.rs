use crate::body::ResponseBody;
use crate::err::{Error, FatalError};
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Request, Response, StatusCode};
use std::path::PathBuf;

mod fs;

pub struct State {
    pub root: PathBuf,
}

#[allow(clippy::declare_interior_mutable_const)]
const TEXT_PLAIN: HeaderValue = HeaderValue::from_static("text/plain");

pub async fn respond_to_request<B>(req: Request<B>, state: &State) -> Response<ResponseBody>
where
    B: Body,
    B::Error: Into<Error>,
{
    let method = req.method().clone();
    let uri = req.uri().clone();

    let result = match method.as_str() {
        "GET" => fs::get(req, state).await,
        "PUT" => fs::put(req, state).await,
        "DELETE" => fs::delete(req, state).await,
        "MKCOL" => fs::mkcol(req, state).await,
        _ => {
            log::warn!("{} {} -> [method not allowed]", method, uri);
            return text_response(
                StatusCode::METHOD_NOT_ALLOWED,
                format!("Method {} not allowed.", method),
            );
        }
    };

    match result {
        Ok(resp) => resp,
        Err(e) => {
            log::warn!("{} {} -> [error] {}", method, uri, e);
            render_error(e)
        }
    }
}

/// The single point where a handler failure becomes a response: the tagged
/// status if the error carries one, 500 otherwise, error text as the body.
fn render_error(e: FatalError) -> Response<ResponseBody> {
    text_response(
        e.status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        e.to_string(),
    )
}

fn text_response(status: StatusCode, body: impl Into<Bytes>) -> Response<ResponseBody> {
    let mut resp = Response::new(ResponseBody::full(body));
    *resp.status_mut() = status;
    resp.headers_mut().insert(CONTENT_TYPE, TEXT_PLAIN);
    resp
}

fn no_content() -> Response<ResponseBody> {
    let mut resp = Response::new(ResponseBody::empty());
    *resp.status_mut() = StatusCode::NO_CONTENT;
    resp
}
