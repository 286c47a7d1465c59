//! Frame timing.
//!
//! - one `FrameClock` per render loop; `tick()` once per presented frame
//! - `Cadence` answers "does this frame index fall on the interval"

mod cadence;
mod frame_clock;

pub use cadence::Cadence;
pub use frame_clock::{FrameClock, FrameTime};
