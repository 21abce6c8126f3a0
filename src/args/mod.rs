//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use cli::BenchArgs;
pub use types::{HttpMethod, PositiveUsize};

pub(crate) use defaults::{DEFAULT_REPORT_PATH, DEFAULT_USER_AGENT};
pub(crate) use parsers::parse_header;
