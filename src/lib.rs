//! Core library for the `volley` CLI.
//!
//! `volley` starts N concurrent clients that each send M sequential, timed
//! HTTP requests, collects every outcome into a client x iteration matrix
//! and derives per-iteration failure, error and latency series from it. The
//! crate exposes the building blocks used by the binary: CLI argument types,
//! configuration parsing, request execution, aggregation and the HTML report.
pub mod args;
pub mod charts;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
