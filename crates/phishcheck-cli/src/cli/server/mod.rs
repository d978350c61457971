//! HTTP front end: accept loop over a `TcpListener`, one request per
//! connection, dispatched to [`routes::route`].

mod page;
mod request;
mod response;
mod routes;

use std::sync::Arc;
use std::time::Duration;

use phishcheck_core::service::PhishChecker;
use tokio::io::BufReader;
use tokio::net::{TcpListener, TcpStream};

use request::{read_request, RequestError};
use response::Response;

/// How long a client may take to send its request.
const READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Accepts connections forever, spawning a task per connection.
pub async fn serve(listener: TcpListener, checker: Arc<PhishChecker>) {
    loop {
        match listener.accept().await {
            Ok((stream, peer)) => {
                let checker = Arc::clone(&checker);
                tokio::spawn(async move {
                    if let Err(e) = handle_connection(stream, &checker).await {
                        tracing::debug!(%peer, "connection: {}", e);
                    }
                });
            }
            Err(e) => tracing::warn!("accept: {}", e),
        }
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    checker: &PhishChecker,
) -> Result<(), RequestError> {
    let (read_half, mut write_half) = stream.split();
    let mut reader = BufReader::new(read_half);

    let request = match tokio::time::timeout(READ_TIMEOUT, read_request(&mut reader)).await {
        Ok(res) => res,
        Err(_) => Err(RequestError::Timeout),
    };

    let response = match request {
        Ok(req) => {
            let resp = routes::route(&req, checker);
            tracing::info!(method = %req.method, path = %req.path, status = resp.status, "request");
            resp
        }
        Err(e) if e.is_client_error() => {
            tracing::debug!("bad request: {}", e);
            Response::bad_request(&e)
        }
        Err(e) => return Err(e),
    };

    response.write_to(&mut write_half).await?;
    Ok(())
}

#[cfg(test)]
mod tests;
