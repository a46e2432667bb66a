//! Shared main-surface dimensions
//!
//! The platform resizes the viewport on every resize event; the composer
//! follows it on its next frame and entities read it for spawn bounds.

use std::cell::Cell;
use std::rc::Rc;

use crate::sim::geometry::Size;

#[derive(Debug, Clone)]
pub struct Viewport {
    size: Rc<Cell<(u32, u32)>>,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Rc::new(Cell::new((width, height))),
        }
    }

    pub fn resize(&self, width: u32, height: u32) {
        if self.size.get() != (width, height) {
            log::debug!("Viewport resized to {}x{}", width, height);
        }
        self.size.set((width, height));
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.get().0
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.get().1
    }

    pub fn size(&self) -> Size {
        let (w, h) = self.size.get();
        Size::new(w as f32, h as f32)
    }
}
