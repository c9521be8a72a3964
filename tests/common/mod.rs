//! Common test utilities and logging infrastructure
//!
//! Library diagnostics go through the `log` facade; `tracing-subscriber`
//! picks them up through its log bridge, so a failing test shows the index
//! builds, resolutions and fallbacks that led up to it.
//!
//! # Environment Variables
//!
//! - `RUST_LOG=debug` - Enable debug logging in tests
//! - `RUST_LOG=prompt_theme::color=trace` - Trace every color resolution
//! - `TEST_LOG_JSON=1` - Output JSON format for CI parsing

#![allow(dead_code)]

pub mod env;

use std::io::Write;
use std::path::PathBuf;
use std::sync::Once;

use tempfile::TempDir;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Initialize test logging. Safe to call from every test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let use_json = std::env::var("TEST_LOG_JSON").is_ok();
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("prompt_theme=debug,test=info"));

        if use_json {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_test_writer())
                .try_init()
                .ok();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_ansi(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_target(true)
                        .compact(),
                )
                .try_init()
                .ok();
        }
    });
}

/// A test span guard that logs entry and exit.
pub fn test_phase(name: &str) -> tracing::span::EnteredSpan {
    let span = tracing::info_span!("test_phase", phase = name);
    tracing::info!(phase = name, "entering test phase");
    span.entered()
}

/// Log test context information.
pub fn log_test_context(test_name: &str, description: &str) {
    tracing::info!(
        test_name = test_name,
        description = description,
        "test context"
    );
}

/// Write `json` to a theme file inside a fresh temporary directory.
///
/// The directory is removed when the returned guard drops.
pub fn theme_file(json: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("theme.json");
    let mut file = std::fs::File::create(&path).expect("create theme file");
    file.write_all(json.as_bytes()).expect("write theme file");
    (dir, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_theme_file_round_trips() {
        let (_dir, path) = theme_file("[]");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "[]");
    }
}
