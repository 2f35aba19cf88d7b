//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the global subscriber. Safe to call multiple times; only the
/// first call wins.
///
/// Respects `RUST_LOG`; defaults to `info` (or `debug` under a test
/// harness). Output goes to stderr so hosts embedding this crate keep
/// stdout to themselves.
pub fn init() {
    INIT.call_once(|| {
        let under_test_harness = std::env::var_os("CARGO_TARGET_TMPDIR").is_some();
        let default_level = if under_test_harness {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };
        let filter = EnvFilter::from_default_env().add_directive(default_level.into());

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .compact();

        let result = if under_test_harness {
            builder.with_test_writer().try_init()
        } else {
            builder.with_writer(std::io::stderr).try_init()
        };
        if let Err(err) = result {
            eprintln!("Failed to initialize tracing: {err}");
        }
    });
}
