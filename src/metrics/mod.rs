//! Result matrix storage and aggregation.
mod aggregate;
mod matrix;
mod outcome;


pub use aggregate::{MatrixSummary, summarize};
pub use matrix::{ClientLane, MatrixShape, ResultMatrix};
pub use outcome::{CallError, CallOutcome};
