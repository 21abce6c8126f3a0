use std::path::Path;
use std::time::Duration;

use tokio::io::{AsyncWriteExt, BufWriter};

use crate::error::ReportError;
use crate::metrics::{CallOutcome, MatrixSummary, ResultMatrix};

fn micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

fn duration_us(outcome: &CallOutcome) -> u64 {
    micros(outcome.duration)
}

fn write_error(path: &Path, err: std::io::Error) -> ReportError {
    ReportError::Write {
        path: path.to_path_buf(),
        source: err,
    }
}

pub(crate) async fn export_csv(path: &Path, matrix: &ResultMatrix) -> Result<(), ReportError> {
    let file = tokio::fs::File::create(path)
        .await
        .map_err(|err| write_error(path, err))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(b"client,iteration,error,verified,status,duration_us\n")
        .await
        .map_err(|err| write_error(path, err))?;
    for (client, iteration, outcome) in matrix.indexed() {
        let line = format!(
            "{},{},{},{},{},{}\n",
            client,
            iteration,
            outcome.error.as_ref().map_or("", |err| err.kind()),
            u8::from(outcome.verified),
            outcome
                .status
                .map_or_else(String::new, |status| status.to_string()),
            duration_us(outcome)
        );
        writer
            .write_all(line.as_bytes())
            .await
            .map_err(|err| write_error(path, err))?;
    }
    writer.flush().await.map_err(|err| write_error(path, err))?;
    Ok(())
}

pub(crate) async fn export_json(
    path: &Path,
    matrix: &ResultMatrix,
    summary: &MatrixSummary,
) -> Result<(), ReportError> {
    let cells_json: Vec<serde_json::Value> = matrix
        .indexed()
        .map(|(client, iteration, outcome)| {
            serde_json::json!({
                "client": client,
                "iteration": iteration,
                "error": outcome.error.as_ref().map(ToString::to_string),
                "verified": outcome.verified,
                "status": outcome.status,
                "duration_us": duration_us(outcome)
            })
        })
        .collect();

    let series_us =
        |values: &[Duration]| -> Vec<u64> { values.iter().copied().map(micros).collect() };

    let payload = serde_json::json!({
        "shape": {
            "clients": summary.clients,
            "iterations": summary.iterations
        },
        "summary": {
            "total_calls": summary.total_calls,
            "total_errors": summary.total_errors,
            "total_failures": summary.total_failures,
            "max_latency_us": micros(summary.max_latency),
            "fail_count": summary.fail_count,
            "error_count": summary.error_count,
            "avg_latency_us": series_us(&summary.avg_latency),
            "client_avg_latency_us": series_us(&summary.client_avg_latency)
        },
        "matrix": cells_json
    });

    let json = serde_json::to_vec_pretty(&payload)
        .map_err(|err| ReportError::Json { source: err })?;
    let file = tokio::fs::File::create(path)
        .await
        .map_err(|err| write_error(path, err))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&json)
        .await
        .map_err(|err| write_error(path, err))?;
    writer.flush().await.map_err(|err| write_error(path, err))?;
    Ok(())
}
