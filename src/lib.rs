//! Ball Mitosis - self-replicating balls on a 2D surface
//!
//! Core modules:
//! - `sim`: Entities, composition, geometry and frame scheduling
//! - `renderer`: Software surfaces and the shared viewport
//! - `platform`: Input state and native frame timing
//! - `settings`: Run configuration

pub mod app;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::build_composer;
pub use settings::{EntityKind, Settings};

use glam::Vec2;

/// Entity tuning constants
pub mod consts {
    /// Side of a newly created ball, in pixels
    pub const BALL_START_SIZE: u32 = 4;
    /// Starting speed, in world units per [`SPEED_TIME_UNITS`]
    pub const BALL_START_SPEED: f32 = 1.0;
    /// Time-units over which a ball covers `speed` world units
    pub const SPEED_TIME_UNITS: f32 = 60.0;
    /// A seeking ball wider than this is saturated
    pub const SATURATION_SIZE: u32 = 10;
    /// Siblings spawned by the catch that saturates a ball
    pub const SATURATION_SPAWN_COUNT: usize = 4;
    /// Side of the probe box placed on a ball's target
    pub const TARGET_PROBE_SIZE: f32 = 1.0;

    /// Time between relocations of a relocating ball
    pub const RELOCATE_INTERVAL: f64 = 1000.0;
    /// Relocation band around the world origin
    pub const RELOCATE_BAND_INNER: f32 = 40.0;
    pub const RELOCATE_BAND_OUTER: f32 = 160.0;
    /// Siblings spawned when the pointer pops a relocating ball
    pub const POP_SPAWN_COUNT: usize = 3;

    /// Player square side
    pub const PLAYER_SIZE: u32 = 16;
    /// Player speed in world units per time-unit
    pub const PLAYER_SPEED: f32 = 0.25;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
