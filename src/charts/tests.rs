use std::time::Duration;

use tempfile::tempdir;

use super::performance::ms_label;
use super::{plot_performance_svg, render_report_html, write_report};
use crate::metrics::MatrixSummary;

fn sample_summary() -> MatrixSummary {
    MatrixSummary {
        clients: 2,
        iterations: 3,
        total_calls: 6,
        total_errors: 1,
        total_failures: 2,
        max_latency: Duration::from_millis(40),
        fail_count: vec![1, 0, 1],
        error_count: vec![1, 0, 0],
        avg_latency: vec![
            Duration::from_millis(20),
            Duration::from_millis(25),
            Duration::from_millis(30),
        ],
        client_avg_latency: vec![Duration::from_millis(25), Duration::from_millis(27)],
        client_series: vec![
            vec![
                Duration::ZERO,
                Duration::from_millis(20),
                Duration::from_millis(30),
            ],
            vec![
                Duration::from_millis(20),
                Duration::from_millis(30),
                Duration::from_millis(40),
            ],
        ],
    }
}

#[test]
fn svg_contains_title_and_axis() -> Result<(), String> {
    let svg = plot_performance_svg(&sample_summary()).map_err(|err| err.to_string())?;
    if !svg.contains("<svg") {
        return Err("Expected an SVG document".to_owned());
    }
    if !svg.contains("Clients: 2, Iterations: 3") {
        return Err("Missing chart title".to_owned());
    }
    if !svg.contains("Response Time(ms)") {
        return Err("Missing latency axis description".to_owned());
    }
    Ok(())
}

#[test]
fn svg_renders_when_everything_failed() -> Result<(), String> {
    let mut summary = sample_summary();
    summary.max_latency = Duration::ZERO;
    summary.avg_latency = vec![Duration::ZERO; 3];
    summary.client_series = vec![vec![Duration::ZERO; 3]; 2];
    summary.fail_count = vec![2, 2, 2];
    summary.error_count = vec![2, 2, 2];
    plot_performance_svg(&summary).map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn html_embeds_chart_inline() -> Result<(), String> {
    let html = render_report_html(&sample_summary()).map_err(|err| err.to_string())?;
    if !html.starts_with("<!DOCTYPE html>") {
        return Err("Expected an HTML document".to_owned());
    }
    if !html.contains("<title>Clients: 2, Iterations: 3</title>") {
        return Err("Missing page title".to_owned());
    }
    if !html.contains("<svg") || html.contains("<script") {
        return Err("Chart must be inline SVG without scripts".to_owned());
    }
    Ok(())
}

#[test]
fn write_report_creates_file() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("nested").join("performance.html");
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime
        .block_on(write_report(&path, &sample_summary()))
        .map_err(|err| err.to_string())?;
    let written =
        std::fs::read_to_string(&path).map_err(|err| format!("read report failed: {}", err))?;
    if !written.contains("Clients: 2, Iterations: 3") {
        return Err("Report content missing title".to_owned());
    }
    Ok(())
}

#[test]
fn latency_labels_keep_sub_millisecond_precision() -> Result<(), String> {
    for (us, expected) in [(0, "0.000"), (250, "0.250"), (999, "0.999"), (12_345, "12.345")] {
        let label = ms_label(us);
        if label != expected {
            return Err(format!("Expected {} for {}us, got {}", expected, us, label));
        }
    }
    Ok(())
}

#[test]
fn svg_renders_sub_millisecond_run() -> Result<(), String> {
    let mut summary = sample_summary();
    summary.max_latency = Duration::from_micros(800);
    summary.avg_latency = vec![Duration::from_micros(300); 3];
    summary.client_series = vec![vec![Duration::from_micros(300); 3]; 2];
    let svg = plot_performance_svg(&summary).map_err(|err| err.to_string())?;
    if !svg.contains("0.") {
        return Err("Expected fractional millisecond labels".to_owned());
    }
    Ok(())
}
