//! Last-user-activity timestamp for inactivity expiry.

#[cfg(test)]
#[path = "activity_test.rs"]
mod activity_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Shared, overwrite-only record of the most recent pointer/key gesture,
/// in milliseconds since the Unix epoch.
#[derive(Clone, Debug, Default)]
pub struct ActivityClock {
    last_ms: Arc<AtomicU64>,
}

impl ActivityClock {
    pub fn touch(&self, now_ms: f64) {
        self.last_ms.store(now_ms.to_bits(), Ordering::Relaxed);
    }

    pub fn last_ms(&self) -> f64 {
        f64::from_bits(self.last_ms.load(Ordering::Relaxed))
    }

    /// Time elapsed since the last touch. Clock skew backwards reads as zero.
    pub fn idle_for(&self, now_ms: f64) -> Duration {
        let elapsed_ms = (now_ms - self.last_ms()).max(0.0);
        Duration::from_secs_f64(elapsed_ms / 1000.0)
    }

    /// Whether strictly more than `limit` has passed since the last touch.
    pub fn is_idle(&self, now_ms: f64, limit: Duration) -> bool {
        self.idle_for(now_ms) > limit
    }
}
