use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Body, Method, Request, Url};

use crate::args::HttpMethod;
use crate::error::HttpError;

/// Immutable description of the request every call sends.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Bytes>,
    expected_body: Option<String>,
}

impl RequestSpec {
    /// Validates the URL and headers once so building a request per call
    /// cannot fail. An empty `body` sends no body and an empty
    /// `expected_body` disables verification.
    ///
    /// # Errors
    ///
    /// Returns an error for an unparsable URL or an invalid header name/value.
    pub fn new(
        method: HttpMethod,
        url: &str,
        headers: &[(String, String)],
        body: &str,
        expected_body: &str,
    ) -> Result<Self, HttpError> {
        let url = Url::parse(url).map_err(|err| HttpError::InvalidUrl {
            url: url.to_owned(),
            source: err,
        })?;

        let mut header_map = HeaderMap::with_capacity(headers.len());
        for (name, value) in headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
                    HttpError::InvalidHeaderName {
                        name: name.clone(),
                        source: err,
                    }
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|err| HttpError::InvalidHeaderValue {
                    name: name.clone(),
                    source: err,
                })?;
            header_map.insert(header_name, header_value);
        }

        Ok(Self {
            method: method.into_method(),
            url,
            headers: header_map,
            body: (!body.is_empty()).then(|| Bytes::copy_from_slice(body.as_bytes())),
            expected_body: (!expected_body.is_empty()).then(|| expected_body.to_owned()),
        })
    }

    /// A fresh request for one call; requests are never shared between calls.
    #[must_use]
    pub fn build_request(&self) -> Request {
        let mut request = Request::new(self.method.clone(), self.url.clone());
        *request.headers_mut() = self.headers.clone();
        if let Some(body) = self.body.as_ref() {
            *request.body_mut() = Some(Body::from(body.clone()));
        }
        request
    }

    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn expected_body(&self) -> Option<&str> {
        self.expected_body.as_deref()
    }
}
