use crate::bucket::Bucket;
use crate::clock::{Clock, MonotonicClock};
use crate::window::Window;
use spdlog::warn;

const NANOS_PER_MILLI: u64 = 1_000_000;

pub struct RollingWindowOpts {
    /// Number of buckets in the ring.
    pub size: usize,
    /// Duration of one bucket in milliseconds.
    pub interval_ms: u64,
    /// Exclude the bucket currently accumulating partial data from `reduce`.
    pub ignore_current: bool,
}

/// A rolling aggregator over a fixed ring of time buckets.
///
/// Samples land in the bucket covering "now"; buckets older than
/// `size * interval` fall out of `reduce` automatically. Eviction is lazy:
/// stale buckets are wiped on the write path the next time it advances, while
/// the read path derives a corrected view without mutating anything.
///
/// Single-writer: concurrent unsynchronized access is not supported. Wrap in
/// [`SyncRollingWindow`](crate::SyncRollingWindow) or an external lock when
/// shared across threads.
pub struct RollingWindow<C: Clock = MonotonicClock> {
    win: Window,
    size: usize,
    interval_ns: u64,
    ignore_current: bool,
    offset: usize,
    last_time: u64,
    clock: C,
}

impl RollingWindow<MonotonicClock> {
    pub fn new(opts: RollingWindowOpts) -> Self {
        Self::with_clock(opts, MonotonicClock::new())
    }
}

impl<C: Clock> RollingWindow<C> {
    pub fn with_clock(opts: RollingWindowOpts, clock: C) -> Self {
        assert!(opts.size >= 1, "size must be at least 1");
        assert!(opts.interval_ms > 0, "interval must be positive");

        let last_time = clock.now();
        Self {
            win: Window::new(opts.size),
            size: opts.size,
            interval_ns: opts.interval_ms * NANOS_PER_MILLI,
            ignore_current: opts.ignore_current,
            offset: 0,
            last_time,
            clock,
        }
    }

    /// Records one sample into the current bucket, wiping any buckets whose
    /// interval has elapsed since the last write.
    pub fn add(&mut self, v: f64) {
        self.update_offset();
        self.win.add(self.offset, v);
    }

    /// Visits the fresh buckets oldest-to-newest. Buckets belonging to
    /// elapsed-but-not-yet-wiped intervals are skipped, so a read after a
    /// long idle period reports an empty window without requiring a write.
    /// Never mutates `offset` or `last_time`.
    pub fn reduce(&self, f: impl FnMut(&Bucket)) {
        let span = self.span();
        // the current bucket only holds partial data for the open interval
        let diff = if span == 0 && self.ignore_current {
            self.size - 1
        } else {
            self.size - span
        };
        if diff > 0 {
            let start = (self.offset + span + 1) % self.size;
            self.win.reduce(start, diff, f);
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whole bucket intervals elapsed since `last_time`, clamped to `size`
    /// once the entire window has gone stale. A clock reading behind
    /// `last_time` takes the same clamp.
    fn span(&self) -> usize {
        let now = self.clock.now();
        let Some(elapsed) = now.checked_sub(self.last_time) else {
            warn!(
                "clock moved backwards ({} < {}), treating the whole window as expired",
                now, self.last_time
            );
            return self.size;
        };

        let spans = elapsed / self.interval_ns;
        if spans < self.size as u64 {
            spans as usize
        } else {
            self.size
        }
    }

    fn update_offset(&mut self) {
        let span = self.span();
        if span == 0 {
            return;
        }

        // wipe the buckets whose intervals have fully elapsed
        for i in 0..span {
            self.win.reset_bucket(self.offset + i + 1);
        }

        self.offset = (self.offset + span) % self.size;
        let now = self.clock.now();
        // re-align to the latest interval boundary, keeping the sub-interval
        // remainder so timing is not lost across successive calls
        self.last_time = now - now.saturating_sub(self.last_time) % self.interval_ns;
    }
}
