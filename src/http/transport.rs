use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Request};
use tracing::debug;

use crate::error::HttpError;
use crate::metrics::CallError;

use super::client::{TransportSettings, build_client};

/// Matrix coordinates of one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub client: usize,
    pub iteration: usize,
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "client {} iteration {}", self.client, self.iteration)
    }
}

/// A fully read response.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: Bytes,
}

/// Sends one request and reads its whole body. Implementations are shared
/// by all workers and must be safe for concurrent use.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, site: CallSite, request: Request) -> Result<Reply, CallError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn new(settings: &TransportSettings) -> Result<Self, HttpError> {
        Ok(Self {
            client: build_client(settings)?,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, site: CallSite, request: Request) -> Result<Reply, CallError> {
        debug!("{} sending {} {}", site, request.method(), request.url());
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|err| CallError::Transport {
                timed_out: err.is_timeout(),
                message: error_chain(&err),
            })?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|err| CallError::BodyRead {
            timed_out: err.is_timeout(),
            message: error_chain(&err),
        })?;
        Ok(Reply { status, body })
    }
}

/// reqwest hides the root cause (refused, reset, dns) behind `source()`.
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}
