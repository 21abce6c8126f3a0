use std::sync::Arc;

use tokio::time::Instant;
use tracing::info;

use crate::charts::write_report;
use crate::error::AppResult;
use crate::http::{ReqwestTransport, Transport, run_clients};
use crate::metrics::{MatrixSummary, summarize};

use super::export;
use super::plan::LocalRun;
use super::summary;

/// Runs the benchmark over HTTP and writes every requested artifact.
pub(crate) async fn run_local(run: LocalRun) -> AppResult<MatrixSummary> {
    let transport: Arc<dyn Transport> = Arc::new(ReqwestTransport::new(&run.transport)?);
    run_with_transport(run, transport).await
}

pub(crate) async fn run_with_transport(
    run: LocalRun,
    transport: Arc<dyn Transport>,
) -> AppResult<MatrixSummary> {
    let run_start = Instant::now();
    let matrix = run_clients(Arc::clone(&run.plan), transport).await?;
    let elapsed = run_start.elapsed();
    info!("All clients finished in {}ms", elapsed.as_millis());

    let summary = summarize(&matrix);
    summary::print_summary(&summary, elapsed);

    if let Some(path) = run.outputs.report.as_deref() {
        write_report(path, &summary).await?;
    }

    if let Some(path) = run.outputs.export_json.as_deref() {
        export::export_json(path, &matrix, &summary).await?;
        info!("JSON export written to {}", path.display());
    }

    if let Some(path) = run.outputs.export_csv.as_deref() {
        export::export_csv(path, &matrix).await?;
        info!("CSV export written to {}", path.display());
    }

    Ok(summary)
}
