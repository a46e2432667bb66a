//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame timestamps (native clock; the browser uses requestAnimationFrame)
//! - Input events (keys and pointer, latched once per frame)

pub mod clock;
pub mod input;

pub use clock::IntervalClock;
pub use input::{Input, InputSnapshot, Keys};
