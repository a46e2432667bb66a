//! The per-frame entity contract
//!
//! Every entity, and the composer itself, is a [`Steppable`]: it is called
//! once per frame with the frame's timing and answers with where it is and
//! what it looks like. Entities may mutate their own state freely inside
//! `step`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::renderer::Surface;

/// Timing passed to every entity for one frame (time-units are milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Platform timestamp of this frame
    pub timestamp: f64,
    /// Time since the previous frame (0 on the first frame)
    pub diff: f64,
    /// Time since the first frame
    pub total_progress: f64,
}

impl FrameTime {
    pub fn new(timestamp: f64, diff: f64, total_progress: f64) -> Self {
        Self {
            timestamp,
            diff,
            total_progress,
        }
    }
}

/// Output of one entity for one frame
#[derive(Debug, Clone, Copy)]
pub struct GameElement<'a> {
    /// World-space center
    pub x: f32,
    pub y: f32,
    pub visual: &'a Surface,
}

pub trait Steppable {
    fn step(&mut self, time: FrameTime) -> GameElement<'_>;
}

/// Append handle onto a composer's child collection
///
/// Spawned entities wait in a pending buffer until the composer finishes its
/// current pass, so they are first stepped on the following frame.
#[derive(Clone, Default)]
pub struct Spawner {
    pending: Rc<RefCell<Vec<Box<dyn Steppable>>>>,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&self, entity: Box<dyn Steppable>) {
        self.pending.borrow_mut().push(entity);
    }

    pub fn spawn_all(&self, entities: impl IntoIterator<Item = Box<dyn Steppable>>) {
        self.pending.borrow_mut().extend(entities);
    }

    /// Number of entities waiting to be appended
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Take everything spawned since the last drain, in spawn order
    pub fn drain(&self) -> Vec<Box<dyn Steppable>> {
        std::mem::take(&mut *self.pending.borrow_mut())
    }
}

impl fmt::Debug for Spawner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spawner")
            .field("pending", &self.pending())
            .finish()
    }
}
