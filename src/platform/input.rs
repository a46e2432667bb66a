//! Keyboard and pointer state
//!
//! Platform callbacks write the live state whenever events arrive. Once per
//! frame the scheduler latches it, and entities only ever read the latched
//! copy, so every entity in a frame sees the same input.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;

use crate::renderer::Viewport;
use crate::sim::geometry::{Aabb, Size};
use crate::sim::hit::HitTest;

/// Directional key state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Keys {
    /// Apply a key press/release by `KeyboardEvent.key` name
    ///
    /// Arrows, `h/j/k/l` and `w/a/s/d` are recognized. Returns false for any
    /// other key.
    pub fn apply(&mut self, key: &str, pressed: bool) -> bool {
        let slot = match key.to_ascii_lowercase().as_str() {
            "arrowleft" | "h" | "a" => &mut self.left,
            "arrowright" | "l" | "d" => &mut self.right,
            "arrowdown" | "j" | "s" => &mut self.down,
            "arrowup" | "k" | "w" => &mut self.up,
            _ => return false,
        };
        *slot = pressed;
        true
    }

    /// Unit steps per axis; left wins over right and up over down
    pub fn direction(&self) -> Vec2 {
        let x = if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        };
        let y = if self.up {
            -1.0
        } else if self.down {
            1.0
        } else {
            0.0
        };
        Vec2::new(x, y)
    }
}

/// Input as seen by one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSnapshot {
    pub keys: Keys,
    /// Pointer position in screen pixels; NaN while no press is active
    pub pointer: Vec2,
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self {
            keys: Keys::default(),
            pointer: Vec2::NAN,
        }
    }
}

#[derive(Debug, Default)]
struct InputState {
    live: Cell<InputSnapshot>,
    frame: Cell<InputSnapshot>,
}

/// Shared input handle
#[derive(Debug, Clone, Default)]
pub struct Input {
    state: Rc<InputState>,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self, key: &str, pressed: bool) {
        let mut live = self.state.live.get();
        if live.keys.apply(key, pressed) {
            self.state.live.set(live);
        }
    }

    pub fn pointer_down(&self, x: f32, y: f32) {
        let mut live = self.state.live.get();
        live.pointer = Vec2::new(x, y);
        self.state.live.set(live);
    }

    pub fn pointer_up(&self) {
        let mut live = self.state.live.get();
        live.pointer = Vec2::NAN;
        self.state.live.set(live);
    }

    /// Copy live state into the frame snapshot
    pub fn latch(&self) {
        self.state.frame.set(self.state.live.get());
    }

    pub fn snapshot(&self) -> InputSnapshot {
        self.state.frame.get()
    }

    pub fn keys(&self) -> Keys {
        self.state.frame.get().keys
    }

    /// Hit test for the latched pointer, in world coordinates
    ///
    /// The box is 1×1 at the pointer; while nothing is pressed the NaN
    /// position makes it degenerate.
    pub fn pointer_hit_test(&self, viewport: &Viewport) -> HitTest {
        let input = self.clone();
        let viewport = viewport.clone();
        HitTest::new(move || {
            let screen = input.snapshot().pointer;
            let world = screen - viewport.size().half();
            Aabb::new(world, Size::square(1.0))
        })
    }
}
