use super::types::{HttpMethod, PositiveUsize};
use crate::error::ValidationError;

/// Splits a `Name: Value` header at the first colon, trimming both sides.
///
/// # Errors
///
/// Returns an error when the header has no colon.
pub(crate) fn parse_header(s: &str) -> Result<(String, String), ValidationError> {
    match s.split_once(':') {
        Some((key, value)) => Ok((key.trim().to_owned(), value.trim().to_owned())),
        None => Err(ValidationError::InvalidHeaderFormat {
            value: s.to_owned(),
        }),
    }
}

/// Accepts any method token (`PROPFIND`, `trace`, ...); case is normalised.
pub(super) fn parse_method(s: &str) -> Result<HttpMethod, ValidationError> {
    s.parse()
}

pub(super) fn parse_positive_usize(s: &str) -> Result<PositiveUsize, ValidationError> {
    s.trim().parse::<PositiveUsize>()
}

pub(crate) fn parse_bool_env(s: &str) -> Result<bool, ValidationError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(ValidationError::InvalidBoolean {
            value: s.to_owned(),
        }),
    }
}
