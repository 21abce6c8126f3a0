use clap::Parser;

use super::defaults::DEFAULT_REPORT_PATH;
use super::parsers::{parse_bool_env, parse_header, parse_method, parse_positive_usize};
use super::types::{HttpMethod, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent HTTP load generator: N clients each issue M sequential timed requests, then an HTML latency report is written."
)]
pub struct BenchArgs {
    /// Target URL
    #[arg(long, short)]
    pub url: Option<String>,

    /// HTTP method to use
    #[arg(
        long = "request",
        short = 'X',
        alias = "method",
        default_value = "GET",
        value_parser = parse_method
    )]
    pub method: HttpMethod,

    /// Request body data (sent with every request when non-empty)
    #[arg(long, short, default_value = "")]
    pub data: String,

    /// HTTP headers in 'Name: Value' format (repeatable)
    #[arg(long = "header", short = 'H', value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Number of concurrent clients
    #[arg(long, short = 'c', default_value = "1", value_parser = parse_positive_usize)]
    pub clients: PositiveUsize,

    /// Number of sequential requests per client
    #[arg(long, short = 'n', default_value = "1", value_parser = parse_positive_usize)]
    pub iterations: PositiveUsize,

    /// Delay between the requests of one client (milliseconds)
    #[arg(long = "delay", default_value = "0")]
    pub delay_ms: u64,

    /// Maximum time allowed per request (seconds, 0 disables the timeout)
    #[arg(long = "connect-timeout", default_value = "0")]
    pub connect_timeout_secs: u64,

    /// Allow insecure server connections when using TLS
    #[arg(long, short = 'k')]
    pub insecure: bool,

    /// Expected response body; trimmed bodies must match exactly (empty disables the check)
    #[arg(long = "verify-body", default_value = "")]
    pub verify_body: String,

    /// Output path of the HTML report
    #[arg(long, short = 'o', default_value = DEFAULT_REPORT_PATH)]
    pub out: String,

    /// Skip writing the HTML report
    #[arg(long = "no-report")]
    pub no_report: bool,

    /// Export the result matrix and summary series as JSON
    #[arg(long = "export-json")]
    pub export_json: Option<String>,

    /// Export the result matrix as CSV
    #[arg(long = "export-csv")]
    pub export_csv: Option<String>,

    /// Path to config file (TOML/JSON). Defaults to ./volley.toml or ./volley.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by VOLLEY_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
