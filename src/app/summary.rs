use std::time::Duration;

use crate::metrics::MatrixSummary;

/// `12.345ms`, microsecond precision.
pub(crate) fn format_ms(duration: Duration) -> String {
    let micros = duration.as_micros();
    format!("{}.{:03}ms", micros / 1000, micros % 1000)
}

fn join_counts(values: &[usize]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_latencies(values: &[Duration]) -> String {
    values
        .iter()
        .map(|value| format_ms(*value))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn summary_lines(summary: &MatrixSummary, elapsed: Duration) -> Vec<String> {
    vec![
        format!(
            "Clients: {}, Iterations: {}",
            summary.clients, summary.iterations
        ),
        format!("Duration: {}", format_ms(elapsed)),
        format!("Total Calls: {}", summary.total_calls),
        format!("Errors: {}", summary.total_errors),
        format!("Failures: {}", summary.total_failures),
        format!("Max Latency: {}", format_ms(summary.max_latency)),
        format!("Fail Count: [{}]", join_counts(&summary.fail_count)),
        format!("Error Count: [{}]", join_counts(&summary.error_count)),
        format!("Avg Latency: [{}]", join_latencies(&summary.avg_latency)),
    ]
}

pub(crate) fn print_summary(summary: &MatrixSummary, elapsed: Duration) {
    for line in summary_lines(summary, elapsed) {
        println!("{}", line);
    }
}
