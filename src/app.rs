//! Builds the initial world from settings

use crate::platform::Input;
use crate::renderer::Viewport;
use crate::settings::{EntityKind, Settings};
use crate::sim::{Composer, Player, Point, RelocatingBall, SeekingBall};

/// Composer seeded with one ball of the configured kind at the origin
pub fn build_composer(settings: &Settings, viewport: Viewport, input: &Input) -> Composer {
    let mut composer = Composer::new(viewport.clone());
    let pointer = input.pointer_hit_test(&viewport);
    let spawner = composer.spawner();

    match settings.kind {
        EntityKind::Seeking => {
            composer.push(Box::new(SeekingBall::new(Point::ZERO, viewport, spawner, pointer)));
        }
        EntityKind::Relocating => {
            composer.push(Box::new(RelocatingBall::new(Point::ZERO, spawner, pointer)));
        }
    }
    if settings.player {
        composer.push(Box::new(Player::new(input.clone())));
    }

    log::info!(
        "World seeded with a {} ball{}",
        settings.kind.as_str(),
        if settings.player { " and a player" } else { "" }
    );
    composer
}
