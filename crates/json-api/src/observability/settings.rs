//! Request logging threshold, set once at startup.

use std::sync::atomic::{AtomicU64, Ordering};

static SLOW_REQUEST_THRESHOLD_MS: AtomicU64 = AtomicU64::new(1_000);

pub(super) fn set_slow_request_threshold_ms(threshold_ms: u64) {
    SLOW_REQUEST_THRESHOLD_MS.store(threshold_ms, Ordering::Relaxed);
}

pub(super) fn slow_request_threshold_ms() -> u64 {
    SLOW_REQUEST_THRESHOLD_MS.load(Ordering::Relaxed)
}
