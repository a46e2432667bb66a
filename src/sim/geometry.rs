//! 2D points, vectors and axis-aligned boxes
//!
//! World space has its origin at the world center with +y pointing down.
//! Nothing here signals errors: zero-length normalization and NaN centers
//! flow through as NaN/infinity and end up as boxes that never overlap.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A world-space coordinate
pub type Point = Vec2;

/// A directional quantity (same shape as [`Point`])
pub type Vector = Vec2;

/// Dimensions of a visual surface
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square size with equal sides
    pub const fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    /// Half extents as a vector
    #[inline]
    pub fn half(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

#[inline]
pub fn add(a: Point, b: Vector) -> Point {
    Vec2::new(a.x + b.x, a.y + b.y)
}

#[inline]
pub fn multiply(v: Vector, k: f32) -> Vector {
    Vec2::new(v.x * k, v.y * k)
}

#[inline]
pub fn divide(v: Vector, k: f32) -> Vector {
    multiply(v, 1.0 / k)
}

/// Unit vector in the direction of `v`
///
/// Unlike `Vec2::normalize_or_zero`, the zero vector is not special-cased:
/// it divides by zero and comes back as NaN.
#[inline]
pub fn normalize(v: Vector) -> Vector {
    divide(v, v.length())
}

/// Vector from `a` toward `b` with magnitude `length`
#[inline]
pub fn vector(a: Point, b: Point, length: f32) -> Vector {
    multiply(normalize(Vec2::new(b.x - a.x, b.y - a.y)), length)
}

/// Uniform draw in `[min, max)`
///
/// Computed as `min + u * (max - min)` so reversed or empty ranges are
/// accepted instead of panicking.
#[inline]
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.random::<f32>() * (max - min)
}

/// Point with independent uniform draws on each axis
pub fn random_point<R: Rng + ?Sized>(
    rng: &mut R,
    min_x: f32,
    max_x: f32,
    min_y: f32,
    max_y: f32,
) -> Point {
    Vec2::new(
        random_between(rng, min_x, max_x),
        random_between(rng, min_y, max_y),
    )
}

#[inline]
fn nan_or(value: f32, fallback: f32) -> f32 {
    if value.is_nan() { fallback } else { value }
}

/// Axis-aligned bounding box derived from a center and a size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x1: f32,
    pub x2: f32,
    pub y1: f32,
    pub y2: f32,
    pub position: Point,
    pub size: Size,
}

impl Aabb {
    /// Box centered on `position`
    ///
    /// A NaN extent is replaced by the degenerate bound (`+inf` for the
    /// minimum, `-inf` for the maximum), so a box built from an undefined
    /// center can never overlap anything.
    pub fn new(position: Point, size: Size) -> Self {
        let half = size.half();
        Self {
            x1: nan_or(position.x - half.x, f32::INFINITY),
            x2: nan_or(position.x + half.x, f32::NEG_INFINITY),
            y1: nan_or(position.y - half.y, f32::INFINITY),
            y2: nan_or(position.y + half.y, f32::NEG_INFINITY),
            position,
            size,
        }
    }

    /// True when the extents are inverted on either axis
    pub fn is_degenerate(&self) -> bool {
        self.x1 > self.x2 || self.y1 > self.y2
    }

    /// Strict interior overlap; boxes sharing only an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        !(self.x1 >= other.x2 || self.x2 <= other.x1)
            && !(self.y1 >= other.y2 || self.y2 <= other.y1)
    }
}
