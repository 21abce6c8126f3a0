use serde::Deserialize;

use crate::args::HttpMethod;

/// Values accepted in `volley.toml` / `volley.json`. Every key mirrors a CLI flag.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    #[serde(alias = "request")]
    pub method: Option<HttpMethod>,
    pub data: Option<String>,
    pub headers: Option<Vec<String>>,
    pub clients: Option<usize>,
    pub iterations: Option<usize>,
    #[serde(alias = "delay")]
    pub delay_ms: Option<u64>,
    #[serde(alias = "connect_timeout")]
    pub connect_timeout_secs: Option<u64>,
    pub insecure: Option<bool>,
    pub verify_body: Option<String>,
    pub out: Option<String>,
    pub no_report: Option<bool>,
    pub export_json: Option<String>,
    pub export_csv: Option<String>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}
