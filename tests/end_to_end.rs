use ball_mitosis::platform::Input;
use ball_mitosis::renderer::{Viewport, colors};
use ball_mitosis::sim::{Composer, FrameTime, Point, RelocatingBall, Scheduler, SeekingBall, Steppable};

fn count(pixels: &[ball_mitosis::renderer::Color], color: ball_mitosis::renderer::Color) -> usize {
    pixels.iter().filter(|p| **p == color).count()
}

#[test]
fn test_first_catch_spawns_one_sibling() {
    let viewport = Viewport::new(200, 200);
    let input = Input::new();
    let mut composer = Composer::new(viewport.clone());
    let ball = SeekingBall::new(
        Point::ZERO,
        viewport.clone(),
        composer.spawner(),
        input.pointer_hit_test(&viewport),
    )
    .with_target(Point::new(50.0, 50.0));
    composer.push(Box::new(ball));

    let mut caught_at = None;
    for i in 0..2000 {
        let t = i as f64 * 16.0;
        let seeking = {
            let el = composer.step(FrameTime::new(t, 16.0, t));
            count(el.visual.pixels(), colors::BALL_SEEKING)
        };
        if composer.len() > 1 {
            // The catching frame already paints the grown 5x5 ball, but not
            // the sibling, which is only appended after the pass
            assert_eq!(seeking, 25);
            caught_at = Some(i);
            break;
        }
        assert_eq!(seeking, 16, "frame {}", i);
    }

    let caught_at = caught_at.expect("ball never reached its target");
    assert!(caught_at > 200, "caught too early at frame {}", caught_at);
    assert_eq!(composer.len(), 2);
}

#[test]
fn test_population_only_grows() {
    let viewport = Viewport::new(120, 120);
    let input = Input::new();
    let mut composer = Composer::new(viewport.clone());
    composer.push(Box::new(SeekingBall::new(
        Point::ZERO,
        viewport.clone(),
        composer.spawner(),
        input.pointer_hit_test(&viewport),
    )));
    let mut scheduler = Scheduler::new(composer).with_input(input);

    let mut last = scheduler.driven().len();
    for i in 0..800 {
        scheduler.frame(i as f64 * 16.0);
        let now = scheduler.driven().len();
        assert!(now >= last);
        last = now;
    }
    assert!(last > 1, "no ball ever split");
}

#[test]
fn test_pointer_press_pops_relocating_ball() {
    let viewport = Viewport::new(100, 100);
    let input = Input::new();
    let mut composer = Composer::new(viewport.clone());
    composer.push(Box::new(RelocatingBall::new(
        Point::ZERO,
        composer.spawner(),
        input.pointer_hit_test(&viewport),
    )));
    let mut scheduler = Scheduler::new(composer).with_input(input.clone());

    scheduler.frame(0.0);
    scheduler.frame(16.0);
    assert_eq!(scheduler.driven().len(), 1);

    // Press on the screen center, which is the ball's world origin
    input.pointer_down(50.0, 50.0);
    scheduler.frame(32.0);
    assert_eq!(scheduler.driven().len(), 4);

    input.pointer_up();
    scheduler.frame(48.0);
    assert_eq!(scheduler.driven().len(), 4);
}

#[test]
fn test_held_pointer_pops_only_the_ball_under_it() {
    let viewport = Viewport::new(100, 100);
    let input = Input::new();
    let mut composer = Composer::new(viewport.clone());
    composer.push(Box::new(RelocatingBall::new(
        Point::ZERO,
        composer.spawner(),
        input.pointer_hit_test(&viewport),
    )));
    let mut scheduler = Scheduler::new(composer).with_input(input.clone());

    input.pointer_down(50.0, 50.0);
    let mut population = Vec::new();
    for i in 0..10 {
        scheduler.frame(i as f64 * 16.0);
        population.push(scheduler.driven().len());
    }
    assert_eq!(population, vec![4, 7, 10, 13, 16, 19, 22, 25, 28, 31]);
}

#[test]
fn test_composer_is_steppable_through_trait_object() {
    let viewport = Viewport::new(10, 10);
    let mut boxed: Box<dyn Steppable> = Box::new(Composer::new(viewport));
    let el = boxed.step(FrameTime::default());
    assert_eq!((el.x, el.y), (0.0, 0.0));
    assert_eq!(count(el.visual.pixels(), colors::BACKGROUND), 100);
}
