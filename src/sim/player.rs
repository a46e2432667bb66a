//! Keyboard-driven square

use super::entity::{FrameTime, GameElement, Steppable};
use super::geometry::{self, Point};
use crate::consts::{PLAYER_SIZE, PLAYER_SPEED};
use crate::platform::Input;
use crate::renderer::{Surface, colors};

pub struct Player {
    position: Point,
    input: Input,
    visual: Surface,
}

impl Player {
    pub fn new(input: Input) -> Self {
        let mut visual = Surface::new(PLAYER_SIZE, PLAYER_SIZE);
        visual.fill(colors::PLAYER);
        Self {
            position: Point::ZERO,
            input,
            visual,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

impl Steppable for Player {
    fn step(&mut self, time: FrameTime) -> GameElement<'_> {
        let direction = self.input.keys().direction();
        let step = geometry::multiply(direction, PLAYER_SPEED * time.diff as f32);
        self.position = geometry::add(self.position, step);
        GameElement {
            x: self.position.x,
            y: self.position.y,
            visual: &self.visual,
        }
    }
}
