//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Once;

#[path = "../../crates/alsref-fileref/tests/fixtures/mod.rs"]
mod fixtures;

pub use fixtures::*;

static TRACING: Once = Once::new();

/// Install a fmt subscriber honouring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("alsref=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init();
    });
}
