use crate::bucket::Bucket;
use bytemuck::Zeroable;

/// A fixed-size circular store of buckets addressed by `offset % size`.
///
/// Buckets are allocated once at construction and reset in place as slots are
/// reused; the ring never reallocates.
pub struct Window {
    buckets: Box<[Bucket]>,
}

impl Window {
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "window size must be at least 1");
        Self {
            buckets: vec![Bucket::zeroed(); size].into_boxed_slice(),
        }
    }

    pub fn add(&mut self, offset: usize, v: f64) {
        let size = self.buckets.len();
        self.buckets[offset % size].add(v);
    }

    pub fn reset_bucket(&mut self, offset: usize) {
        let size = self.buckets.len();
        self.buckets[offset % size].reset();
    }

    /// Visits `count` buckets starting at `start`, in ascending circular
    /// order. Callers must keep `count <= size`; the ring does not bound it
    /// and would revisit slots otherwise.
    pub fn reduce(&self, start: usize, count: usize, mut f: impl FnMut(&Bucket)) {
        let size = self.buckets.len();
        for i in 0..count {
            f(&self.buckets[(start + i) % size]);
        }
    }

    pub fn size(&self) -> usize {
        self.buckets.len()
    }
}
