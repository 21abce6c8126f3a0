use std::time::Duration;

use thiserror::Error;

/// Why a call produced no measurable response. Stored in the matrix, never propagated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    #[error("transport failure: {message}")]
    Transport { timed_out: bool, message: String },
    #[error("body read failure: {message}")]
    BodyRead { timed_out: bool, message: String },
}

impl CallError {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            CallError::Transport { .. } => "transport",
            CallError::BodyRead { .. } => "body_read",
        }
    }

    #[must_use]
    pub const fn timed_out(&self) -> bool {
        match self {
            CallError::Transport { timed_out, .. } | CallError::BodyRead { timed_out, .. } => {
                *timed_out
            }
        }
    }
}

/// One cell of the result matrix. `Default` is the zero state a cell holds
/// before its worker writes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOutcome {
    pub error: Option<CallError>,
    pub verified: bool,
    pub status: Option<u16>,
    pub duration: Duration,
}

impl CallOutcome {
    #[must_use]
    pub const fn failed(error: CallError) -> Self {
        Self {
            error: Some(error),
            verified: false,
            status: None,
            duration: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn completed(status: u16, verified: bool, duration: Duration) -> Self {
        Self {
            error: None,
            verified,
            status: Some(status),
            duration,
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
