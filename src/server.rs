use crate::err::Error;
use crate::routes::{respond_to_request, State};
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub async fn run(addr: SocketAddr, state: State) -> Result<(), Error> {
    let state = Arc::new(state);
    let listener = TcpListener::bind(addr).await?;
    log::info!("Listening on {}", listener.local_addr()?);

    loop {
        let (tcp, _) = listener.accept().await?;
        let io = TokioIo::new(tcp);

        let state = Arc::clone(&state);
        tokio::spawn(async move {
            let serve = service_fn(move |req| {
                let state = Arc::clone(&state);
                async move { Ok::<_, Infallible>(respond_to_request(req, &state).await) }
            });

            // A body that dies mid-stream (client hung up, read error from
            // the file) surfaces here; the connection is dropped and the
            // process keeps serving.
            if let Err(e) = auto::Builder::new(TokioExecutor::new())
                .serve_connection(io, serve)
                .await
            {
                log::error!("Error serving connection: {}", e);
            }
        });
    }
}
