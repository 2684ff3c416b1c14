//! Test Helper Utilities
//!
//! Shared utilities for testing ldgap-intervals

#![allow(dead_code)]

pub mod log_capture;
pub mod upstream;

pub use log_capture::{capture_logs, LogCapture};
pub use upstream::{literal, uri, FakeUpstream};
