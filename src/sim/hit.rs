//! Reusable hit tests over a live box provider

use std::fmt;
use std::rc::Rc;

use super::geometry::Aabb;

/// Compares a box against whatever box the provider currently reports
///
/// The provider is re-evaluated on every call, so a moving source (a ball,
/// the pointer) is always tested at its current position. Cloning shares the
/// provider.
#[derive(Clone)]
pub struct HitTest {
    source: Rc<dyn Fn() -> Aabb>,
}

impl HitTest {
    pub fn new(source: impl Fn() -> Aabb + 'static) -> Self {
        Self {
            source: Rc::new(source),
        }
    }

    /// Hit test against a fixed box
    pub fn fixed(aabb: Aabb) -> Self {
        Self::new(move || aabb)
    }

    /// The provider's current box
    pub fn current(&self) -> Aabb {
        (self.source)()
    }

    /// Whether the current box overlaps `other` (strict interior overlap)
    pub fn hits(&self, other: &Aabb) -> bool {
        self.current().overlaps(other)
    }
}

impl fmt::Debug for HitTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HitTest")
            .field("current", &self.current())
            .finish()
    }
}
