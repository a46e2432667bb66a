//! Steps a collection of entities and paints them onto one surface
//!
//! Children are stepped and painted in insertion order, so later children
//! paint over earlier ones. Entities spawned during a pass are appended after
//! it and first stepped on the next frame.

use super::entity::{FrameTime, GameElement, Spawner, Steppable};
use crate::renderer::{Color, Surface, Viewport, colors};

pub struct Composer {
    surface: Surface,
    viewport: Viewport,
    children: Vec<Box<dyn Steppable>>,
    spawner: Spawner,
    background: Color,
}

impl Composer {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            surface: Surface::new(viewport.width(), viewport.height()),
            viewport,
            children: Vec::new(),
            spawner: Spawner::new(),
            background: colors::BACKGROUND,
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Append handle for children that reproduce
    pub fn spawner(&self) -> Spawner {
        self.spawner.clone()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Append a child directly (outside a frame)
    pub fn push(&mut self, child: Box<dyn Steppable>) {
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }
}

impl Steppable for Composer {
    fn step(&mut self, time: FrameTime) -> GameElement<'_> {
        let (width, height) = (self.viewport.width(), self.viewport.height());
        if (self.surface.width(), self.surface.height()) != (width, height) {
            self.surface.resize(width, height);
        }
        self.surface.fill(self.background);

        let center_x = width as f32 / 2.0;
        let center_y = height as f32 / 2.0;
        for child in self.children.iter_mut() {
            let el = child.step(time);
            let visual = el.visual;
            self.surface.draw(
                visual,
                center_x + el.x - visual.width() as f32 / 2.0,
                center_y + el.y - visual.height() as f32 / 2.0,
            );
        }

        let spawned = self.spawner.drain();
        if !spawned.is_empty() {
            log::debug!(
                "Appending {} spawned entities ({} total)",
                spawned.len(),
                self.children.len() + spawned.len()
            );
            self.children.extend(spawned);
        }

        GameElement {
            x: 0.0,
            y: 0.0,
            visual: &self.surface,
        }
    }
}
