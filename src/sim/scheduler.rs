//! Frame scheduler
//!
//! Turns a stream of platform frame timestamps into [`FrameTime`]s and
//! drives one [`Steppable`] per frame. The platform owns the actual frame
//! callback (`requestAnimationFrame` on the web, a sleeping clock natively);
//! the scheduler only does the bookkeeping and honors cancellation.

use std::cell::Cell;
use std::rc::Rc;

use super::entity::{FrameTime, GameElement, Steppable};
use crate::platform::Input;

/// Stops a scheduler from starting further frames
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    cancelled: Rc<Cell<bool>>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        if !self.cancelled.replace(true) {
            log::info!("Frame loop cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

pub struct Scheduler<S> {
    driven: S,
    start: Option<f64>,
    previous: f64,
    frames: u64,
    input: Option<Input>,
    cancel: CancelHandle,
}

impl<S: Steppable> Scheduler<S> {
    pub fn new(driven: S) -> Self {
        Self {
            driven,
            start: None,
            previous: 0.0,
            frames: 0,
            input: None,
            cancel: CancelHandle::default(),
        }
    }

    /// Latch this input at the top of every frame
    pub fn with_input(mut self, input: Input) -> Self {
        self.input = Some(input);
        self
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Frames driven so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn driven(&self) -> &S {
        &self.driven
    }

    pub fn driven_mut(&mut self) -> &mut S {
        &mut self.driven
    }

    /// Timing for a frame at `timestamp`, advancing the bookkeeping
    fn advance(&mut self, timestamp: f64) -> FrameTime {
        let start = *self.start.get_or_insert(timestamp);
        let diff = if self.frames == 0 {
            0.0
        } else {
            timestamp - self.previous
        };
        self.previous = timestamp;
        self.frames += 1;
        FrameTime::new(timestamp, diff, timestamp - start)
    }

    /// Timing, input latch and step for one frame
    fn drive(&mut self, timestamp: f64) -> (FrameTime, GameElement<'_>) {
        let time = self.advance(timestamp);
        if let Some(input) = &self.input {
            input.latch();
        }
        (time, self.driven.step(time))
    }

    /// Drive one frame
    ///
    /// This does not check cancellation. Platform callbacks that may fire
    /// after a cancel use [`Self::try_frame`] instead.
    pub fn frame(&mut self, timestamp: f64) -> GameElement<'_> {
        self.drive(timestamp).1
    }

    /// Drive one frame unless the loop was cancelled
    ///
    /// A frame callback requested before the cancel still fires; it gets
    /// `None` and must not present or request another frame.
    pub fn try_frame(&mut self, timestamp: f64) -> Option<GameElement<'_>> {
        if self.is_cancelled() {
            return None;
        }
        Some(self.drive(timestamp).1)
    }

    /// Drive frames from `timestamps` until it runs out or the loop is cancelled
    ///
    /// `present` sees every frame's output; it may cancel through a handle,
    /// in which case the current frame completes and no further frame starts.
    pub fn run<I, F>(&mut self, timestamps: I, mut present: F)
    where
        I: IntoIterator<Item = f64>,
        F: FnMut(FrameTime, GameElement<'_>),
    {
        let mut timestamps = timestamps.into_iter();
        while !self.is_cancelled() {
            let Some(timestamp) = timestamps.next() else {
                break;
            };
            let (time, el) = self.drive(timestamp);
            present(time, el);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Surface;
    use std::cell::RefCell;

    /// Records every frame time it is stepped with
    struct Recorder {
        seen: Rc<RefCell<Vec<FrameTime>>>,
        visual: Surface,
    }

    impl Recorder {
        fn new() -> (Self, Rc<RefCell<Vec<FrameTime>>>) {
            let seen = Rc::new(RefCell::new(Vec::new()));
            (
                Self {
                    seen: seen.clone(),
                    visual: Surface::new(1, 1),
                },
                seen,
            )
        }
    }

    impl Steppable for Recorder {
        fn step(&mut self, time: FrameTime) -> GameElement<'_> {
            self.seen.borrow_mut().push(time);
            GameElement {
                x: 0.0,
                y: 0.0,
                visual: &self.visual,
            }
        }
    }

    #[test]
    fn test_frame_timing() {
        let (recorder, seen) = Recorder::new();
        let mut scheduler = Scheduler::new(recorder);
        scheduler.run([1000.0, 1016.0, 1040.0, 1041.5], |_, _| {});

        let seen = seen.borrow();
        assert_eq!(
            *seen,
            vec![
                FrameTime::new(1000.0, 0.0, 0.0),
                FrameTime::new(1016.0, 16.0, 16.0),
                FrameTime::new(1040.0, 24.0, 40.0),
                FrameTime::new(1041.5, 1.5, 41.5),
            ]
        );
        assert_eq!(scheduler.frames(), 4);
    }

    #[test]
    fn test_zero_start_timestamp() {
        let (recorder, seen) = Recorder::new();
        let mut scheduler = Scheduler::new(recorder);
        scheduler.frame(0.0);
        scheduler.frame(16.0);
        assert_eq!(seen.borrow()[1], FrameTime::new(16.0, 16.0, 16.0));
    }

    #[test]
    fn test_cancel_finishes_current_frame() {
        let (recorder, seen) = Recorder::new();
        let mut scheduler = Scheduler::new(recorder);
        let cancel = scheduler.cancel_handle();

        let mut presented = 0;
        scheduler.run((0..100).map(|i| i as f64 * 16.0), |time, _| {
            presented += 1;
            if time.total_progress >= 32.0 {
                cancel.cancel();
            }
        });

        assert_eq!(presented, 3);
        assert_eq!(seen.borrow().len(), 3);
        assert!(scheduler.is_cancelled());

        // A cancelled scheduler never starts another frame
        scheduler.run([1000.0], |_, _| panic!("frame after cancel"));
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn test_try_frame_after_cancel_drives_nothing() {
        let (recorder, seen) = Recorder::new();
        let mut scheduler = Scheduler::new(recorder);
        let cancel = scheduler.cancel_handle();

        assert!(scheduler.try_frame(0.0).is_some());
        assert!(scheduler.try_frame(16.0).is_some());

        // Cancelled between frames; the already-requested callback still fires
        cancel.cancel();
        assert!(scheduler.try_frame(32.0).is_none());
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(scheduler.frames(), 2);
    }

    #[test]
    fn test_latches_input_each_frame() {
        let input = Input::new();
        let (recorder, _) = Recorder::new();
        let mut scheduler = Scheduler::new(recorder).with_input(input.clone());

        input.key("ArrowUp", true);
        assert!(!input.keys().up);
        scheduler.frame(0.0);
        assert!(input.keys().up);
    }
}
