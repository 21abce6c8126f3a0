use std::fmt::Write as _;

use crate::error::ReportError;
use crate::metrics::MatrixSummary;

use super::performance::{plot_performance_svg, report_title};

/// A standalone HTML page holding the title and the inline chart.
///
/// # Errors
///
/// Returns an error when the chart cannot be rendered.
pub fn render_report_html(summary: &MatrixSummary) -> Result<String, ReportError> {
    let svg = plot_performance_svg(summary)?;
    let title = report_title(summary);

    let mut html = String::with_capacity(svg.len().saturating_add(512));
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    writeln!(html, "<title>{}</title>", title).map_err(render_error)?;
    html.push_str("<style>body{font-family:sans-serif;margin:24px}</style>\n");
    html.push_str("</head>\n<body>\n");
    writeln!(html, "<h2>{}</h2>", title).map_err(render_error)?;
    html.push_str("<div class=\"chart\">\n");
    html.push_str(&svg);
    html.push_str("\n</div>\n</body>\n</html>\n");
    Ok(html)
}

fn render_error(err: std::fmt::Error) -> ReportError {
    ReportError::Render {
        message: err.to_string(),
    }
}
