use reqwest::Method;
use serde::{Deserialize, Deserializer};
use std::num::NonZeroUsize;

use crate::error::ValidationError;

/// Any HTTP method token, upper-cased (`PROPFIND`, `TRACE`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpMethod(Method);

impl HttpMethod {
    #[must_use]
    pub fn into_method(self) -> Method {
        self.0
    }
}

impl From<Method> for HttpMethod {
    fn from(method: Method) -> Self {
        Self(method)
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_uppercase();
        Method::from_bytes(token.as_bytes())
            .map(Self)
            .map_err(|_err| ValidationError::InvalidMethod {
                value: s.to_owned(),
            })
    }
}

impl<'de> Deserialize<'de> for HttpMethod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveUsize(NonZeroUsize);

impl PositiveUsize {
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for PositiveUsize {
    type Error = ValidationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(value)
            .map(PositiveUsize)
            .ok_or(ValidationError::ValueTooSmall { min: 1 })
    }
}

impl std::str::FromStr for PositiveUsize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s
            .parse()
            .map_err(|err| ValidationError::InvalidNumber { source: err })?;
        PositiveUsize::try_from(value)
    }
}

impl From<PositiveUsize> for usize {
    fn from(value: PositiveUsize) -> Self {
        value.get()
    }
}
