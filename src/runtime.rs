//! Cross-platform runtime glue (clock, sleep, interval, spawn) for native
//! and WASM targets

use std::future::Future;

pub use std::time::Duration;

/// Current time in milliseconds since the Unix epoch.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as u64
}

#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Whole seconds remaining until an absolute ms-epoch deadline, clamped at
/// zero once the deadline has passed.
pub fn remaining_secs(deadline_ms: u64) -> u64 {
    remaining_secs_at(deadline_ms, now_ms())
}

pub(crate) fn remaining_secs_at(deadline_ms: u64, now_ms: u64) -> u64 {
    deadline_ms.saturating_sub(now_ms) / 1000
}

/// Sleep for a duration.
///
/// On native platforms, uses `tokio::time::sleep`.
/// On WASM, uses `gloo_timers::future::sleep`.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Create an interval that ticks at the given duration.
///
/// On native platforms, uses `tokio::time::interval`.
/// On WASM, uses a custom implementation with gloo_timers.
#[cfg(not(target_arch = "wasm32"))]
pub fn interval(period: Duration) -> tokio::time::Interval {
    tokio::time::interval(period)
}

/// WASM-compatible interval
#[cfg(target_arch = "wasm32")]
pub struct Interval {
    period: Duration,
}

#[cfg(target_arch = "wasm32")]
impl Interval {
    pub async fn tick(&mut self) {
        gloo_timers::future::sleep(self.period).await;
    }
}

#[cfg(target_arch = "wasm32")]
pub fn interval(period: Duration) -> Interval {
    Interval { period }
}

/// Spawn a future to run in the background.
///
/// On native platforms, uses `tokio::spawn` (requires Send).
/// On WASM, uses `wasm_bindgen_futures::spawn_local` (no Send required).
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(future);
}

#[cfg(target_arch = "wasm32")]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
