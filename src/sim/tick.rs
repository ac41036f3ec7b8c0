//! Fixed-step simulation tick
//!
//! One call advances the world by exactly one frame's worth of motion; there
//! is no delta-time scaling.

use super::collision::circle_rect_collide;
use super::state::{GamePhase, World};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump key currently held
    pub jump: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Points awarded this tick
    pub points: u32,
    /// The run ended this tick
    pub ended: bool,
}

/// Advance the world by one fixed step: update entities, then detect collisions
pub fn tick(world: &mut World, input: &TickInput) -> TickReport {
    if world.phase == GamePhase::GameOver {
        return TickReport::default();
    }

    world.time_ticks += 1;
    world.player.is_jumping = input.jump;

    let floor_contact = world.update_entities();
    if floor_contact {
        world.phase = GamePhase::GameOver;
    }

    let points = detect_collisions(world);

    TickReport {
        points,
        ended: world.phase == GamePhase::GameOver,
    }
}

/// Check the player against every lane in index order.
///
/// Touching either obstacle ends the run; overlapping an armed scorer awards a
/// point and disarms it. Every lane is checked even once the run has ended.
/// Returns the number of points awarded.
pub fn detect_collisions(world: &mut World) -> u32 {
    let player = world.player.as_circle();
    let mut points = 0;

    for lane in &mut world.lanes {
        if circle_rect_collide(player, lane.top.as_rect())
            || circle_rect_collide(player, lane.bottom.as_rect())
        {
            world.phase = GamePhase::GameOver;
        }

        if lane.scorer.armed && circle_rect_collide(player, lane.scorer.as_rect()) {
            lane.scorer.armed = false;
            points += 1;
            log::debug!("lane {} cleared", lane.scorer.lane_index);
        }
    }

    world.score += points;
    points
}
