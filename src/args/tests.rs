use super::parsers::{parse_bool_env, parse_positive_usize};
use super::test_support::parse_test_args;
use super::*;
use crate::error::{AppError, AppResult};

#[test]
fn parse_header_valid() -> AppResult<()> {
    let parsed = parse_header("Content-Type: application/json");
    match parsed {
        Ok((key, value)) => {
            if key != "Content-Type" {
                return Err(AppError::validation(format!("Unexpected key: {}", key)));
            }
            if value != "application/json" {
                return Err(AppError::validation(format!("Unexpected value: {}", value)));
            }
            Ok(())
        }
        Err(err) => Err(AppError::validation(format!(
            "Expected Ok, got Err: {}",
            err
        ))),
    }
}

#[test]
fn parse_header_splits_at_first_colon_and_trims() -> AppResult<()> {
    let (key, value) = parse_header("  X-Origin :  http://example.com:8080  ")?;
    if key != "X-Origin" {
        return Err(AppError::validation(format!("Unexpected key: {}", key)));
    }
    if value != "http://example.com:8080" {
        return Err(AppError::validation(format!("Unexpected value: {}", value)));
    }
    Ok(())
}

#[test]
fn parse_header_invalid() -> AppResult<()> {
    let parsed = parse_header("MissingDelimiter");
    if parsed.is_err() {
        Ok(())
    } else {
        Err(AppError::validation("Expected Err for invalid header"))
    }
}

#[test]
fn parse_positive_usize_rejects_zero() -> AppResult<()> {
    if parse_positive_usize("0").is_ok() {
        return Err(AppError::validation("Expected Err for zero"));
    }
    if parse_positive_usize("abc").is_ok() {
        return Err(AppError::validation("Expected Err for non-number"));
    }
    let value = parse_positive_usize(" 12 ")?;
    if value.get() != 12 {
        return Err(AppError::validation(format!(
            "Unexpected value: {}",
            value.get()
        )));
    }
    Ok(())
}

#[test]
fn parse_bool_env_accepts_common_spellings() -> AppResult<()> {
    for value in ["1", "true", "YES", "on"] {
        if !parse_bool_env(value)? {
            return Err(AppError::validation(format!("Expected true for {}", value)));
        }
    }
    for value in ["0", "false", "No", "off"] {
        if parse_bool_env(value)? {
            return Err(AppError::validation(format!("Expected false for {}", value)));
        }
    }
    if parse_bool_env("maybe").is_ok() {
        return Err(AppError::validation("Expected Err for 'maybe'"));
    }
    Ok(())
}

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = parse_test_args(["volley", "-u", "http://localhost"])?;

    let checks = [
        (
            args.method == HttpMethod::from(reqwest::Method::GET),
            "Expected GET",
        ),
        (
            args.url.as_deref() == Some("http://localhost"),
            "Unexpected url",
        ),
        (args.headers.is_empty(), "Expected no headers"),
        (args.data.is_empty(), "Expected empty data"),
        (args.clients.get() == 1, "Expected one client"),
        (args.iterations.get() == 1, "Expected one iteration"),
        (args.delay_ms == 0, "Expected zero delay"),
        (args.connect_timeout_secs == 0, "Expected no timeout"),
        (!args.insecure, "Expected insecure to be false"),
        (args.verify_body.is_empty(), "Expected empty verify body"),
        (args.out == DEFAULT_REPORT_PATH, "Unexpected report path"),
        (!args.no_report, "Expected report to be enabled"),
        (args.export_json.is_none(), "Expected no JSON export"),
        (args.export_csv.is_none(), "Expected no CSV export"),
        (args.config.is_none(), "Expected no config"),
        (!args.verbose, "Expected verbose to be false"),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(AppError::validation(message));
        }
    }
    Ok(())
}

#[test]
fn parse_args_full_command_line() -> AppResult<()> {
    let args = parse_test_args([
        "volley",
        "--url",
        "https://example.com/ping",
        "-X",
        "POST",
        "--data",
        "{\"a\":1}",
        "-H",
        "Content-Type: application/json",
        "--header",
        "X-Trace:abc",
        "--clients",
        "5",
        "--iterations",
        "10",
        "--delay",
        "25",
        "--connect-timeout",
        "3",
        "--insecure",
        "--verify-body",
        "pong",
        "--out",
        "report.html",
    ])?;

    if args.method != HttpMethod::from(reqwest::Method::POST) {
        return Err(AppError::validation("Expected POST"));
    }
    let expected_headers = vec![
        ("Content-Type".to_owned(), "application/json".to_owned()),
        ("X-Trace".to_owned(), "abc".to_owned()),
    ];
    if args.headers != expected_headers {
        return Err(AppError::validation(format!(
            "Unexpected headers: {:?}",
            args.headers
        )));
    }
    let checks = [
        (args.data == "{\"a\":1}", "Unexpected data"),
        (args.clients.get() == 5, "Unexpected clients"),
        (args.iterations.get() == 10, "Unexpected iterations"),
        (args.delay_ms == 25, "Unexpected delay"),
        (args.connect_timeout_secs == 3, "Unexpected timeout"),
        (args.insecure, "Expected insecure"),
        (args.verify_body == "pong", "Unexpected verify body"),
        (args.out == "report.html", "Unexpected out"),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(AppError::validation(message));
        }
    }
    Ok(())
}

#[test]
fn parse_args_rejects_zero_clients() -> AppResult<()> {
    if parse_test_args(["volley", "-u", "http://localhost", "-c", "0"]).is_ok() {
        return Err(AppError::validation("Expected Err for zero clients"));
    }
    if parse_test_args(["volley", "-u", "http://localhost", "-n", "0"]).is_ok() {
        return Err(AppError::validation("Expected Err for zero iterations"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_header_without_colon() -> AppResult<()> {
    if parse_test_args(["volley", "-u", "http://localhost", "-H", "NoColon"]).is_ok() {
        return Err(AppError::validation("Expected Err for malformed header"));
    }
    Ok(())
}

#[test]
fn request_flag_accepts_any_method_token() -> AppResult<()> {
    let method: HttpMethod = "delete".parse()?;
    if method != HttpMethod::from(reqwest::Method::DELETE) {
        return Err(AppError::validation("Expected DELETE"));
    }

    let args = parse_test_args(["volley", "--url", "http://x/", "-X", "PROPFIND"])?;
    let propfind = reqwest::Method::from_bytes(b"PROPFIND")
        .map_err(|_err| AppError::validation("PROPFIND must be a valid token"))?;
    if args.method != HttpMethod::from(propfind) {
        return Err(AppError::validation(format!(
            "Unexpected method: {:?}",
            args.method
        )));
    }

    let args = parse_test_args(["volley", "--url", "http://x/", "--method", "trace"])?;
    if args.method != HttpMethod::from(reqwest::Method::TRACE) {
        return Err(AppError::validation("Expected lower-case trace to normalise"));
    }
    Ok(())
}

#[test]
fn request_flag_rejects_invalid_token() -> AppResult<()> {
    for token in ["BAD METHOD", ""] {
        if parse_test_args(["volley", "--url", "http://x/", "-X", token]).is_ok() {
            return Err(AppError::validation(format!(
                "Expected Err for method '{}'",
                token
            )));
        }
    }
    if "GE/T".parse::<HttpMethod>().is_ok() {
        return Err(AppError::validation("Expected Err for separator characters"));
    }
    Ok(())
}
