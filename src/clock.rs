use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Source of monotonically non-decreasing nanosecond timestamps.
///
/// Injected at construction so expiry logic can be tested deterministically
/// without sleeping.
pub trait Clock {
    fn now(&self) -> u64;
}

/// Production clock: nanoseconds elapsed since the clock was created, read
/// from the platform monotonic clock.
pub struct MonotonicClock {
    anchor: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            anchor: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> u64 {
        self.anchor.elapsed().as_nanos() as u64
    }
}

/// Manually driven clock for tests. Clones share the same underlying time, so
/// a test can keep a handle while the window owns another.
#[derive(Clone)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start_nanos: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start_nanos)),
        }
    }

    pub fn advance(&self, nanos: u64) {
        self.now.fetch_add(nanos, Ordering::Relaxed);
    }

    pub fn set(&self, nanos: u64) {
        self.now.store(nanos, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u64 {
        self.now.load(Ordering::Relaxed)
    }
}
