//! Shared helpers for integration tests

#![allow(dead_code)]

use chrono::NaiveDateTime;
use widget_kit::ChronoAdapter;

/// Route `tracing` output through the test harness. Set `RUST_LOG` to see it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .with_target(true)
        .try_init();
}

/// Midnight on the given calendar day.
pub fn day(year: i32, month: u32, day: u32) -> NaiveDateTime {
    ChronoAdapter::ymd(year, month, day).unwrap()
}
