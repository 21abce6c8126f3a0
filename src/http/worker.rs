use std::sync::Arc;

use tokio::time::sleep;
use tracing::debug;

use crate::error::EngineError;
use crate::metrics::ClientLane;

use super::execution::execute_call;
use super::plan::RunPlan;
use super::transport::{CallSite, Transport};

/// Runs every iteration of one client, strictly in sequence, writing only to
/// the client's own lane.
pub(super) async fn run_client(
    mut lane: ClientLane,
    plan: Arc<RunPlan>,
    transport: Arc<dyn Transport>,
) -> Result<ClientLane, EngineError> {
    let client = lane.client();
    let iterations = plan.shape().iterations();
    let delay = plan.delay();
    let request_spec = plan.request();

    for iteration in 0..iterations {
        let site = CallSite { client, iteration };
        let request = request_spec.build_request();
        let outcome = execute_call(
            transport.as_ref(),
            site,
            request,
            request_spec.expected_body(),
        )
        .await;
        lane.record(iteration, outcome)?;

        let is_last = iteration.saturating_add(1) >= iterations;
        if !is_last && !delay.is_zero() {
            sleep(delay).await;
        }
    }

    debug!("client {} finished {} iterations", client, iterations);
    Ok(lane)
}
