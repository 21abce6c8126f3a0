use reqwest::Request;
use tokio::time::Instant;
use tracing::{info, warn};

use crate::metrics::CallOutcome;

use super::transport::{CallSite, Transport};

/// Sends one request and times it from just before send until the body has
/// been read completely. Every outcome is logged, in completion order.
pub(crate) async fn execute_call(
    transport: &dyn Transport,
    site: CallSite,
    request: Request,
    expected_body: Option<&str>,
) -> CallOutcome {
    let start = Instant::now();
    let outcome = match transport.send(site, request).await {
        Ok(reply) => {
            let duration = start.elapsed();
            let verified = verify_body(&reply.body, expected_body);
            if !verified {
                warn!(
                    "{} unexpected body: {}",
                    site,
                    String::from_utf8_lossy(&reply.body)
                );
            }
            CallOutcome::completed(reply.status, verified, duration)
        }
        Err(err) => CallOutcome::failed(err),
    };
    log_outcome(site, &outcome);
    outcome
}

/// `true` when no expectation is set or the trimmed body equals the trimmed
/// expectation (case-sensitive).
pub(crate) fn verify_body(body: &[u8], expected_body: Option<&str>) -> bool {
    match expected_body {
        None | Some("") => true,
        Some(expected) => String::from_utf8_lossy(body).trim() == expected.trim(),
    }
}

fn log_outcome(site: CallSite, outcome: &CallOutcome) {
    let duration_ms = outcome.duration.as_millis();
    match outcome.error.as_ref() {
        Some(err) => warn!(
            "{} >> error: {} verified: {} {}ms",
            site, err, outcome.verified, duration_ms
        ),
        None => info!(
            "{} >> error: none verified: {} {}ms",
            site, outcome.verified, duration_ms
        ),
    }
}
