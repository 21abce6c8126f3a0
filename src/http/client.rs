use std::time::Duration;

use reqwest::Client;
use tracing::{error, warn};

use crate::args::DEFAULT_USER_AGENT;
use crate::error::HttpError;

/// Transport options shared read-only by every worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportSettings {
    /// Bound on a single call; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub insecure: bool,
}

impl TransportSettings {
    /// `timeout_secs == 0` disables the timeout.
    #[must_use]
    pub const fn new(timeout_secs: u64, insecure: bool) -> Self {
        let timeout = if timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(timeout_secs))
        };
        Self { timeout, insecure }
    }
}

pub(super) fn build_client(settings: &TransportSettings) -> Result<Client, HttpError> {
    let mut client_builder = Client::builder().user_agent(DEFAULT_USER_AGENT);

    if let Some(timeout) = settings.timeout {
        client_builder = client_builder.timeout(timeout).connect_timeout(timeout);
    }

    if settings.insecure {
        warn!("TLS certificate and hostname verification is disabled.");
        client_builder = client_builder
            .danger_accept_invalid_certs(true)
            .danger_accept_invalid_hostnames(true);
    }

    client_builder.build().map_err(|err| {
        error!("Failed to build HTTP client: {}", err);
        HttpError::BuildClientFailed { source: err }
    })
}
