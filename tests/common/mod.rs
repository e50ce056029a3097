//! Shared helpers for integration tests.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use mastermind_core::core::Sequence;
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test-friendly tracing subscriber once per test binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Parse a compact symbol string such as `"RGBY"`.
pub fn seq(s: &str) -> Sequence {
    s.parse().expect("test sequence must parse")
}
