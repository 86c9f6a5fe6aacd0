//! Lesson 10: API Design
//!
//! One endpoint, `/hello`, answering every method with a JSON message.
//! Everything else is a plain-text 404. There is no routing table, no
//! auth and no TLS; the point is the shape of a handler, not a framework.

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use http_body_util::Full;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::{TokioIo, TokioTimer};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::config::ServerConfig;

pub const HELLO_PATH: &str = "/hello";

const NOT_FOUND_BODY: &str = "404 page not found\n";

const ACCEPT_BACKOFF_START: Duration = Duration::from_millis(5);
const ACCEPT_BACKOFF_MAX: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Sum of two integers. Wraps on overflow instead of panicking.
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

fn response(status: StatusCode, content_type: &'static str, body: Bytes) -> Response<Full<Bytes>> {
    let mut resp = Response::new(Full::new(body));
    *resp.status_mut() = status;
    resp.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    resp
}

fn json_response(message: &Message) -> Response<Full<Bytes>> {
    match serde_json::to_vec(message) {
        Ok(mut body) => {
            // One JSON document per line, like a streaming encoder writes it.
            body.push(b'\n');
            response(StatusCode::OK, "application/json", Bytes::from(body))
        }
        Err(e) => {
            error!("failed to encode message: {}", e);
            response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "text/plain; charset=utf-8",
                Bytes::from_static(b"internal server error\n"),
            )
        }
    }
}

/// Answer `/hello` with `{"text": greeting}` regardless of method.
pub async fn hello(
    req: Request<impl hyper::body::Body>,
    greeting: Arc<str>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    debug!(method = %req.method(), path = req.uri().path(), "request");

    if req.uri().path() != HELLO_PATH {
        return Ok(response(
            StatusCode::NOT_FOUND,
            "text/plain; charset=utf-8",
            Bytes::from_static(NOT_FOUND_BODY.as_bytes()),
        ));
    }

    Ok(json_response(&Message {
        text: greeting.to_string(),
    }))
}

/// Call `accept` until it succeeds, doubling the pause after each failure.
///
/// Accept errors (out of file descriptors, aborted handshakes) are
/// transient for a listening socket, so none of them end the server.
async fn accept_retrying<T, F, Fut>(mut accept: F) -> T
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::io::Result<T>>,
{
    let mut delay = ACCEPT_BACKOFF_START;
    loop {
        match accept().await {
            Ok(conn) => return conn,
            Err(e) => {
                warn!("accept error: {}; retrying in {:?}", e, delay);
                tokio::time::sleep(delay).await;
                delay = (delay * 2).min(ACCEPT_BACKOFF_MAX);
            }
        }
    }
}

/// Serve HTTP/1 connections from `listener` forever.
pub async fn serve(listener: TcpListener, greeting: impl Into<Arc<str>>) {
    let greeting: Arc<str> = greeting.into();
    let listener = &listener;

    loop {
        let (tcp, peer) = accept_retrying(move || listener.accept()).await;
        let io = TokioIo::new(tcp);
        let greeting = Arc::clone(&greeting);

        // One task per connection so the accept loop keeps going.
        tokio::task::spawn(async move {
            let service = service_fn(move |req| hello(req, Arc::clone(&greeting)));
            if let Err(err) = http1::Builder::new()
                .timer(TokioTimer::new())
                .serve_connection(io, service)
                .await
            {
                warn!(%peer, "error serving connection: {:?}", err);
            }
        });
    }
}

/// Bind `config.addr` and serve forever. Failing to bind is fatal.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.addr,
            source,
        })?;

    let local = listener.local_addr().unwrap_or(config.addr);
    info!("Listening on {}", local);

    serve(listener, config.greeting).await;
    Ok(())
}
