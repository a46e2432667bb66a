//! Ball that hops around a ring and pops under the pointer
//!
//! Two independent triggers: a timer teleports the ball to a random spot in
//! the relocation band and grows it (no cap), and a pointer press over the
//! ball shrinks it back to the minimum size and spawns three siblings at
//! random spots in the band.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{FrameTime, GameElement, Spawner, Steppable};
use super::geometry::{self, Aabb, Point, Size};
use super::hit::HitTest;
use crate::consts::*;
use crate::polar_to_cartesian;
use crate::renderer::{Surface, colors};

pub struct RelocatingBall {
    position: Point,
    visual: Surface,
    /// Time accumulated since the last relocation
    since_relocation: f64,
    spawner: Spawner,
    pointer: HitTest,
    rng: Pcg32,
}

impl RelocatingBall {
    pub fn new(position: Point, spawner: Spawner, pointer: HitTest) -> Self {
        Self {
            position,
            visual: Surface::new(BALL_START_SIZE, BALL_START_SIZE),
            since_relocation: 0.0,
            spawner,
            pointer,
            rng: Pcg32::from_rng(&mut rand::rng()),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        Size::new(self.visual.width() as f32, self.visual.height() as f32)
    }

    pub fn hit_box(&self) -> Aabb {
        Aabb::new(self.position, self.size())
    }

    fn random_band_point(&mut self) -> Point {
        let r = geometry::random_between(&mut self.rng, RELOCATE_BAND_INNER, RELOCATE_BAND_OUTER);
        let theta = geometry::random_between(
            &mut self.rng,
            -std::f32::consts::PI,
            std::f32::consts::PI,
        );
        polar_to_cartesian(r, theta)
    }

    fn relocate(&mut self) {
        self.position = self.random_band_point();
        let side = self.visual.width() + 1;
        self.visual.resize(side, side);
    }

    fn pop(&mut self) {
        self.visual.resize(BALL_START_SIZE, BALL_START_SIZE);
        log::debug!(
            "Ball popped at ({:.1}, {:.1}), spawning {}",
            self.position.x,
            self.position.y,
            POP_SPAWN_COUNT
        );
        // Siblings land in the band, clear of the pointer that popped this one
        let offspring: Vec<Box<dyn Steppable>> = (0..POP_SPAWN_COUNT)
            .map(|_| {
                let at = self.random_band_point();
                Box::new(RelocatingBall::new(at, self.spawner.clone(), self.pointer.clone()))
                    as Box<dyn Steppable>
            })
            .collect();
        self.spawner.spawn_all(offspring);
    }
}

impl Steppable for RelocatingBall {
    fn step(&mut self, time: FrameTime) -> GameElement<'_> {
        self.since_relocation += time.diff;
        if self.since_relocation >= RELOCATE_INTERVAL {
            self.since_relocation -= RELOCATE_INTERVAL;
            self.relocate();
        }

        if self.pointer.hits(&self.hit_box()) {
            self.pop();
        }

        let (w, h) = (self.visual.width(), self.visual.height());
        self.visual.fill_rect(0, 0, w, h, colors::BALL_RELOCATING);
        GameElement {
            x: self.position.x,
            y: self.position.y,
            visual: &self.visual,
        }
    }
}
