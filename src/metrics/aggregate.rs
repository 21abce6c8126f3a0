use std::time::Duration;

use super::{CallOutcome, ResultMatrix};

/// Series derived from a completed result matrix.
///
/// An error cell is never verified, so it counts toward both `fail_count`
/// and `error_count` of its iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixSummary {
    pub clients: usize,
    pub iterations: usize,
    pub total_calls: usize,
    pub total_errors: usize,
    pub total_failures: usize,
    /// Largest duration among error-free cells, zero when every cell failed.
    pub max_latency: Duration,
    pub fail_count: Vec<usize>,
    pub error_count: Vec<usize>,
    /// Mean duration of verified cells per iteration. Zero means nothing
    /// verified, not a measured latency.
    pub avg_latency: Vec<Duration>,
    /// Mean duration of verified cells per client, zero when nothing verified.
    pub client_avg_latency: Vec<Duration>,
    /// Raw `duration[client][iteration]`.
    pub client_series: Vec<Vec<Duration>>,
}

#[derive(Debug, Default, Clone, Copy)]
struct LatencyMean {
    sum_nanos: u128,
    count: u128,
}

impl LatencyMean {
    fn push(&mut self, outcome: &CallOutcome) {
        if outcome.verified {
            self.sum_nanos = self.sum_nanos.saturating_add(outcome.duration.as_nanos());
            self.count = self.count.saturating_add(1);
        }
    }

    fn mean(self) -> Duration {
        self.sum_nanos
            .checked_div(self.count)
            .map_or(Duration::ZERO, |nanos| {
                u64::try_from(nanos).map_or(Duration::MAX, Duration::from_nanos)
            })
    }
}

#[must_use]
pub fn summarize(matrix: &ResultMatrix) -> MatrixSummary {
    let shape = matrix.shape();
    let iterations = shape.iterations();

    let max_latency = matrix
        .cells()
        .iter()
        .filter(|outcome| !outcome.is_error())
        .map(|outcome| outcome.duration)
        .max()
        .unwrap_or(Duration::ZERO);

    let mut fail_count = Vec::with_capacity(iterations);
    let mut error_count = Vec::with_capacity(iterations);
    let mut avg_latency = Vec::with_capacity(iterations);
    for iteration in 0..iterations {
        let mut fails = 0usize;
        let mut errors = 0usize;
        let mut mean = LatencyMean::default();
        for outcome in matrix.column(iteration) {
            if !outcome.verified {
                fails = fails.saturating_add(1);
            }
            if outcome.is_error() {
                errors = errors.saturating_add(1);
            }
            mean.push(outcome);
        }
        fail_count.push(fails);
        error_count.push(errors);
        avg_latency.push(mean.mean());
    }

    let mut client_avg_latency = Vec::with_capacity(shape.clients());
    let mut client_series = Vec::with_capacity(shape.clients());
    for row in matrix.rows() {
        let mut mean = LatencyMean::default();
        for outcome in row {
            mean.push(outcome);
        }
        client_avg_latency.push(mean.mean());
        client_series.push(row.iter().map(|outcome| outcome.duration).collect());
    }

    MatrixSummary {
        clients: shape.clients(),
        iterations,
        total_calls: shape.cells(),
        total_errors: error_count.iter().sum(),
        total_failures: fail_count.iter().sum(),
        max_latency,
        fail_count,
        error_count,
        avg_latency,
        client_avg_latency,
        client_series,
    }
}
