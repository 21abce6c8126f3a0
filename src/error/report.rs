use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to render chart: {message}")]
    Render { message: String },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to encode JSON export: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },
}
