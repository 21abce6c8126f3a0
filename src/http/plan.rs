use std::time::Duration;

use crate::metrics::MatrixShape;

use super::request::RequestSpec;

/// Everything a run needs, built once before any worker starts.
#[derive(Debug, Clone)]
pub struct RunPlan {
    shape: MatrixShape,
    delay: Duration,
    request: RequestSpec,
}

impl RunPlan {
    #[must_use]
    pub const fn new(shape: MatrixShape, delay: Duration, request: RequestSpec) -> Self {
        Self {
            shape,
            delay,
            request,
        }
    }

    #[must_use]
    pub const fn shape(&self) -> MatrixShape {
        self.shape
    }

    /// Pause between two consecutive calls of one client.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub const fn request(&self) -> &RequestSpec {
        &self.request
    }
}
