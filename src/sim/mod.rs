//! Simulation module
//!
//! Entity logic, composition and frame scheduling. Nothing in here touches a
//! platform API:
//! - Time arrives as frame timestamps
//! - Input arrives through the latched [`crate::platform::Input`]
//! - Output is a [`crate::renderer::Surface`]

pub mod ball;
pub mod composer;
pub mod entity;
pub mod geometry;
pub mod hit;
pub mod player;
pub mod relocating;
pub mod scheduler;

pub use ball::{BallPhase, SeekingBall};
pub use composer::Composer;
pub use entity::{FrameTime, GameElement, Spawner, Steppable};
pub use geometry::{Aabb, Point, Size, Vector};
pub use hit::HitTest;
pub use player::Player;
pub use relocating::RelocatingBall;
pub use scheduler::{CancelHandle, Scheduler};
