use bytemuck::{Pod, Zeroable};

/// A single accumulator slot: running sum and sample count for one interval.
///
/// Plain old data so the ring can be allocated zeroed and slots wiped in place.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Bucket {
    pub sum: f64,
    pub count: u64,
}

impl Bucket {
    pub fn add(&mut self, v: f64) {
        self.sum += v;
        self.count += 1;
    }

    /// Wipes sum and count together; they are never reset independently.
    pub fn reset(&mut self) {
        *self = Bucket::zeroed();
    }
}
