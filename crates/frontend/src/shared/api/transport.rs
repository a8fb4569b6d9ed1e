use async_trait::async_trait;
use thiserror::Error;

/// Fixed request deadline applied at the transport level.
pub const REQUEST_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// One outgoing call, fully resolved: absolute URL, bearer already looked
/// up by the client.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after 5000 ms")]
    Timeout,
}

/// Seam between the gateway and the platform HTTP stack. The browser
/// implementation is [`FetchTransport`]; tests substitute a scripted mock.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

/// Browser fetch transport with the fixed 5-second deadline.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        use futures::future::{select, Either};
        use futures::pin_mut;

        let fetch = fetch(request);
        pin_mut!(fetch);
        let deadline = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS);
        pin_mut!(deadline);

        match select(fetch, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(TransportError::Timeout),
        }
    }
}

async fn fetch(request: TransportRequest) -> Result<TransportResponse, TransportError> {
    use gloo_net::http::Request;

    let mut builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Put => Request::put(&request.url),
        Method::Delete => Request::delete(&request.url),
    };

    if let Some(token) = &request.bearer {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let response = match request.body {
        Some(body) => builder
            .json(&body)
            .map_err(|e| TransportError::Network(format!("failed to serialize request: {e}")))?
            .send()
            .await,
        None => builder.send().await,
    }
    .map_err(|e| TransportError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| TransportError::Network(format!("failed to read response body: {e}")))?;

    Ok(TransportResponse { status, body })
}
