use std::sync::Arc;

use tracing::info;

use crate::error::AppResult;
use crate::metrics::ResultMatrix;

use super::plan::RunPlan;
use super::transport::Transport;
use super::worker::run_client;

/// Starts one worker task per client and waits for all of them.
///
/// Failed calls are recorded in the matrix and never abort the run.
///
/// # Errors
///
/// Returns an error when the matrix cannot be allocated or a worker task
/// panics.
pub async fn run_clients(
    plan: Arc<RunPlan>,
    transport: Arc<dyn Transport>,
) -> AppResult<ResultMatrix> {
    let shape = plan.shape();
    let lanes = ResultMatrix::allocate_lanes(shape)?;

    info!(
        "Starting {} clients x {} iterations against {} {}",
        shape.clients(),
        shape.iterations(),
        plan.request().method(),
        plan.request().url()
    );

    let mut worker_handles = Vec::with_capacity(lanes.len());
    for lane in lanes {
        let plan = Arc::clone(&plan);
        let transport = Arc::clone(&transport);
        worker_handles.push(tokio::spawn(run_client(lane, plan, transport)));
    }

    let mut finished = Vec::with_capacity(worker_handles.len());
    for handle in worker_handles {
        finished.push(handle.await??);
    }

    Ok(ResultMatrix::from_lanes(shape, finished)?)
}
