use crate::bucket::Bucket;
use crate::clock::{Clock, MonotonicClock};
use crate::rolling::{RollingWindow, RollingWindowOpts};
use std::sync::Mutex;

/// Mutex-wrapped [`RollingWindow`] for hosts that share one instance across
/// threads. The core primitive stays lock-free; this decorator serializes
/// every `add`/`reduce` call on a single instance.
pub struct SyncRollingWindow<C: Clock = MonotonicClock> {
    inner: Mutex<RollingWindow<C>>,
}

impl SyncRollingWindow<MonotonicClock> {
    pub fn new(opts: RollingWindowOpts) -> Self {
        Self {
            inner: Mutex::new(RollingWindow::new(opts)),
        }
    }
}

impl<C: Clock> SyncRollingWindow<C> {
    pub fn with_clock(opts: RollingWindowOpts, clock: C) -> Self {
        Self {
            inner: Mutex::new(RollingWindow::with_clock(opts, clock)),
        }
    }

    pub fn add(&self, v: f64) {
        self.inner.lock().unwrap().add(v);
    }

    pub fn reduce(&self, f: impl FnMut(&Bucket)) {
        self.inner.lock().unwrap().reduce(f);
    }

    pub fn size(&self) -> usize {
        self.inner.lock().unwrap().size()
    }
}
