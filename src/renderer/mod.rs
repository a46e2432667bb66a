//! Software rendering
//!
//! Entities draw into small [`Surface`]s which the composer copies onto the
//! main surface; the platform presents the main surface's RGBA bytes.

pub mod surface;
pub mod viewport;

pub use surface::{Color, Surface, colors};
pub use viewport::Viewport;
