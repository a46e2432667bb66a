//! Target-seeking ball that grows and splits
//!
//! A ball chases a random target. Each time its hit box reaches the target it
//! grows by one pixel, speeds up by one, picks a new target and spawns a
//! sibling. The growth that pushes it past the saturation size spawns four
//! siblings instead, and the ball freezes for good.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{FrameTime, GameElement, Spawner, Steppable};
use super::geometry::{self, Aabb, Point, Size};
use super::hit::HitTest;
use crate::consts::*;
use crate::renderer::{Surface, Viewport, colors};

/// Life stage of a [`SeekingBall`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallPhase {
    /// Moving toward its target, growing on each catch
    Seeking,
    /// Grew past the saturation size; never changes again
    Saturated,
}

pub struct SeekingBall {
    position: Point,
    target: Point,
    speed: f32,
    phase: BallPhase,
    visual: Surface,
    viewport: Viewport,
    spawner: Spawner,
    /// Not consulted by this variant; handed down to every offspring
    pointer: HitTest,
    rng: Pcg32,
}

impl SeekingBall {
    pub fn new(position: Point, viewport: Viewport, spawner: Spawner, pointer: HitTest) -> Self {
        let rng = Pcg32::from_rng(&mut rand::rng());
        let mut ball = Self {
            position,
            target: position,
            speed: BALL_START_SPEED,
            phase: BallPhase::Seeking,
            visual: Surface::new(BALL_START_SIZE, BALL_START_SIZE),
            viewport,
            spawner,
            pointer,
            rng,
        };
        ball.target = ball.random_target();
        ball
    }

    /// Start with a known target instead of a random one
    pub fn with_target(mut self, target: Point) -> Self {
        self.target = target;
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn phase(&self) -> BallPhase {
        self.phase
    }

    /// Current visual size (also the hit box size)
    pub fn size(&self) -> Size {
        Size::new(self.visual.width() as f32, self.visual.height() as f32)
    }

    pub fn hit_box(&self) -> Aabb {
        Aabb::new(self.position, self.size())
    }

    fn is_too_large(&self) -> bool {
        self.visual.width() > SATURATION_SIZE
    }

    /// Uniform point inside the viewport, inset by half this ball's size
    fn random_target(&mut self) -> Point {
        let half = (self.viewport.size().half() - self.size().half()).max(Vec2::ZERO);
        geometry::random_point(&mut self.rng, -half.x, half.x, -half.y, half.y)
    }

    fn offspring(&self) -> Box<dyn Steppable> {
        Box::new(SeekingBall::new(
            self.position,
            self.viewport.clone(),
            self.spawner.clone(),
            self.pointer.clone(),
        ))
    }

    /// Grow and split if the target was reached
    fn look_for_target(&mut self) {
        let probe = Aabb::new(self.target, Size::square(TARGET_PROBE_SIZE));
        if !self.hit_box().overlaps(&probe) {
            return;
        }

        let side = self.visual.width() + 1;
        self.visual.resize(side, side);
        self.speed += 1.0;

        if self.is_too_large() {
            self.phase = BallPhase::Saturated;
            log::debug!(
                "Ball saturated at ({:.1}, {:.1}), splitting into {}",
                self.position.x,
                self.position.y,
                SATURATION_SPAWN_COUNT
            );
            self.spawner
                .spawn_all((0..SATURATION_SPAWN_COUNT).map(|_| self.offspring()));
        } else {
            log::trace!("Ball reached target, size {}", side);
            self.spawner.spawn(self.offspring());
        }
        self.target = self.random_target();
    }

    fn advance(&mut self, diff: f64) {
        let distance = self.speed * diff as f32 / SPEED_TIME_UNITS;
        self.position = geometry::add(
            self.position,
            geometry::vector(self.position, self.target, distance),
        );
    }

    fn draw(&mut self) {
        let color = match self.phase {
            BallPhase::Seeking => colors::BALL_SEEKING,
            BallPhase::Saturated => colors::BALL_SATURATED,
        };
        let (w, h) = (self.visual.width(), self.visual.height());
        self.visual.fill_rect(0, 0, w, h, color);
    }
}

impl Steppable for SeekingBall {
    fn step(&mut self, time: FrameTime) -> GameElement<'_> {
        if self.phase == BallPhase::Seeking {
            self.look_for_target();
        }
        if self.phase == BallPhase::Seeking {
            self.advance(time.diff);
        }
        self.draw();
        GameElement {
            x: self.position.x,
            y: self.position.y,
            visual: &self.visual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(diff: f64) -> FrameTime {
        FrameTime::new(0.0, diff, 0.0)
    }

    fn ball_at(position: Point, spawner: &Spawner) -> SeekingBall {
        let viewport = Viewport::new(200, 200);
        let pointer = HitTest::fixed(Aabb::new(Vec2::NAN, Size::square(1.0)));
        SeekingBall::new(position, viewport, spawner.clone(), pointer)
    }

    #[test]
    fn test_initial_state() {
        let spawner = Spawner::new();
        let ball = ball_at(Vec2::ZERO, &spawner);
        assert_eq!(ball.size(), Size::square(4.0));
        assert_eq!(ball.speed(), 1.0);
        assert_eq!(ball.phase(), BallPhase::Seeking);
        // Target inset by half the ball: |t| <= 100 - 2
        assert!(ball.target().x.abs() <= 98.0 && ball.target().y.abs() <= 98.0);
    }

    #[test]
    fn test_moves_toward_target() {
        let spawner = Spawner::new();
        let mut ball = ball_at(Vec2::ZERO, &spawner).with_target(Vec2::new(60.0, 0.0));
        ball.step(frame(60.0));
        assert!((ball.position().x - 1.0).abs() < 1e-5);
        assert!(ball.position().y.abs() < 1e-5);
        assert_eq!(spawner.pending(), 0);
    }

    #[test]
    fn test_zero_diff_does_not_move() {
        let spawner = Spawner::new();
        let mut ball = ball_at(Vec2::ZERO, &spawner).with_target(Vec2::new(60.0, 0.0));
        ball.step(frame(0.0));
        assert_eq!(ball.position(), Vec2::ZERO);
    }

    #[test]
    fn test_spawn_count_policy() {
        let spawner = Spawner::new();
        let mut ball = ball_at(Vec2::ZERO, &spawner);
        let mut spawned_per_step = Vec::new();

        for _ in 0..12 {
            // Force the target under the ball so every update is a catch
            ball.target = ball.position;
            ball.step(frame(16.0));
            spawned_per_step.push(spawner.drain().len());
        }

        assert_eq!(spawned_per_step, vec![1, 1, 1, 1, 1, 1, 4, 0, 0, 0, 0, 0]);
        assert_eq!(ball.phase(), BallPhase::Saturated);
        assert_eq!(ball.size(), Size::square(11.0));
        assert_eq!(ball.speed(), 8.0);
    }

    #[test]
    fn test_growth_is_monotonic_and_freezes() {
        let spawner = Spawner::new();
        let mut ball = ball_at(Vec2::new(5.0, -5.0), &spawner);
        let mut last_size = ball.size();
        let mut last_speed = ball.speed();
        let mut frozen: Option<(Point, Point, Size, f32)> = None;

        for i in 0..400 {
            if i % 3 == 0 && ball.phase() == BallPhase::Seeking {
                ball.target = ball.position;
            }
            ball.step(frame(16.0));
            assert!(ball.size().width >= last_size.width);
            assert!(ball.size().height >= last_size.height);
            assert!(ball.speed() >= last_speed);
            last_size = ball.size();
            last_speed = ball.speed();

            if let Some(snapshot) = frozen {
                assert_eq!(spawner.pending(), 0);
                assert_eq!(
                    snapshot,
                    (ball.position(), ball.target(), ball.size(), ball.speed())
                );
            } else if ball.phase() == BallPhase::Saturated {
                spawner.drain();
                frozen = Some((ball.position(), ball.target(), ball.size(), ball.speed()));
            } else {
                spawner.drain();
            }
        }
        assert!(frozen.is_some());
    }

    #[test]
    fn test_color_signals_phase() {
        let spawner = Spawner::new();
        let mut ball = ball_at(Vec2::ZERO, &spawner).with_target(Vec2::new(50.0, 50.0));
        let el = ball.step(frame(16.0));
        assert_eq!(el.visual.pixel(0, 0), Some(colors::BALL_SEEKING));

        for _ in 0..7 {
            ball.target = ball.position;
            ball.step(frame(16.0));
        }
        let el = ball.step(frame(16.0));
        assert_eq!(el.visual.pixel(0, 0), Some(colors::BALL_SATURATED));
        assert_eq!(el.visual.width(), 11);
    }

    #[test]
    fn test_catch_needs_interior_overlap() {
        let spawner = Spawner::new();
        // 4x4 ball spans 0..4 around x = 2; probe at 4.5 spans 4..5
        let mut ball = ball_at(Vec2::new(2.0, 0.0), &spawner).with_target(Vec2::new(4.5, 0.0));
        ball.step(frame(0.0));
        assert_eq!(spawner.pending(), 0);
        assert_eq!(ball.size(), Size::square(4.0));

        ball.target = Vec2::new(4.4, 0.0);
        ball.step(frame(0.0));
        assert_eq!(spawner.pending(), 1);
        assert_eq!(ball.size(), Size::square(5.0));
    }

    #[test]
    fn test_offspring_start_at_parent() {
        let spawner = Spawner::new();
        let mut ball = ball_at(Vec2::new(12.0, 34.0), &spawner);
        ball.target = ball.position;
        ball.step(frame(0.0));
        let mut children = spawner.drain();
        assert_eq!(children.len(), 1);
        let el = children[0].step(frame(0.0));
        assert_eq!((el.x, el.y), (12.0, 34.0));
    }
}
