//! The HTML performance report: one combined chart per run, rendered to SVG
//! with plotters and embedded inline.
mod html;
mod performance;

#[cfg(test)]
mod tests;

use std::path::Path;

use tokio::fs;
use tracing::{error, info};

use crate::error::ReportError;
use crate::metrics::MatrixSummary;

pub use html::render_report_html;
pub use performance::plot_performance_svg;

/// Renders the report for `summary` and writes it to `path`.
///
/// # Errors
///
/// Returns an error when the chart cannot be rendered or the file cannot be
/// written.
pub async fn write_report(path: &Path, summary: &MatrixSummary) -> Result<(), ReportError> {
    let html = render_report_html(summary)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && let Err(err) = fs::create_dir_all(parent).await
    {
        error!("Failed to create report directory '{}': {}", parent.display(), err);
        return Err(ReportError::Write {
            path: parent.to_path_buf(),
            source: err,
        });
    }
    fs::write(path, html)
        .await
        .map_err(|err| ReportError::Write {
            path: path.to_path_buf(),
            source: err,
        })?;
    info!("Report written to {}", path.display());
    Ok(())
}
