mod bucket;
mod clock;
mod rolling;
mod sync;
mod window;

pub use crate::bucket::Bucket;
pub use crate::clock::{Clock, ManualClock, MonotonicClock};
pub use crate::rolling::{RollingWindow, RollingWindowOpts};
pub use crate::sync::SyncRollingWindow;
pub use crate::window::Window;
