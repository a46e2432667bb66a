//! Native frame timestamps
//!
//! Browsers hand us timestamps through `requestAnimationFrame`; natively the
//! [`IntervalClock`] plays that role as an iterator of millisecond
//! timestamps that the scheduler consumes.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct IntervalClock {
    interval: Duration,
    realtime: bool,
    started: Instant,
    /// Timestamp of the next frame in milliseconds since `started`
    next: f64,
}

impl IntervalClock {
    /// Frames every `interval_ms`; with `realtime` the iterator sleeps until
    /// each frame is due, otherwise timestamps advance without waiting
    pub fn new(interval_ms: f64, realtime: bool) -> Self {
        let interval_ms = if interval_ms.is_finite() && interval_ms > 0.0 {
            interval_ms
        } else {
            log::warn!("Invalid frame interval {}ms, using 16ms", interval_ms);
            16.0
        };
        Self {
            interval: Duration::from_secs_f64(interval_ms / 1000.0),
            realtime,
            started: Instant::now(),
            next: 0.0,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval.as_secs_f64() * 1000.0
    }
}

impl Iterator for IntervalClock {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let timestamp = self.next;
        self.next += self.interval_ms();

        if !self.realtime {
            return Some(timestamp);
        }

        let due = self.started + Duration::from_secs_f64(timestamp / 1000.0);
        let now = Instant::now();
        if due > now {
            std::thread::sleep(due - now);
            return Some(timestamp);
        }
        // Running behind: report the real time so diffs reflect it
        let elapsed = (now - self.started).as_secs_f64() * 1000.0;
        if elapsed > self.next {
            self.next = elapsed + self.interval_ms();
        }
        Some(elapsed)
    }
}
