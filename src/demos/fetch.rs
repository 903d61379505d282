//! Delayed asynchronous computation.
//!
//! A stand-in for a remote call: the task suspends for a configurable
//! duration, then resolves with a fixed payload. The delay comes from
//! configuration ([`crate::config::Config::fetch_delay`]) rather than a
//! hard-coded constant.

use std::time::Duration;

use tokio::time;

/// Message resolved by [`fetch_data`] once the delay elapses.
pub const FETCH_MESSAGE: &str = "Data fetched successfully";

/// Suspends the current task for `duration` without blocking the runtime.
pub async fn delay(duration: Duration) {
    time::sleep(duration).await;
}

/// Simulates fetching remote data: waits out the delay, then resolves.
pub async fn fetch_data(delay_for: Duration) -> String {
    delay(delay_for).await;
    FETCH_MESSAGE.to_string()
}
