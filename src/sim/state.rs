//! Game state and core simulation types
//!
//! The world owns one player and a fixed ring of lanes. Each lane pairs a top
//! and bottom obstacle with the scorer gate in their gap; lane members find
//! their partners through the lane rather than through shared indices.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{Circle, Rect, Size};
use crate::consts::{LANE_COUNT, PLAY_AREA_HEIGHT, PLAY_AREA_MAX_WIDTH, PLAY_AREA_MIN_WIDTH};
use crate::renderer::surface::{RenderSurface, colors};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended; only a reset leaves this phase
    GameOver,
}

/// Dimensions of the visible play area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            width: PLAY_AREA_MAX_WIDTH,
            height: PLAY_AREA_HEIGHT,
        }
    }
}

impl PlayArea {
    /// Size the play area from the host window's outer width
    pub fn from_outer_width(outer_width: f32) -> Self {
        Self {
            width: outer_width.clamp(PLAY_AREA_MIN_WIDTH, PLAY_AREA_MAX_WIDTH),
            height: PLAY_AREA_HEIGHT,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Positions of the lane partners, refreshed as each lane member updates.
/// Only [`Lane::update`] fills these in.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaneAnchor {
    pub top: Vec2,
    pub bottom: Vec2,
}

/// Everything an entity may read or signal during its update
pub struct UpdateContext<'a> {
    pub area: PlayArea,
    pub tuning: &'a Tuning,
    pub rng: &'a mut Pcg32,
    /// Partner positions for the lane being updated; zeroed outside a lane
    pub anchor: LaneAnchor,
    /// Raised by the player when it reaches the floor
    pub floor_contact: bool,
}

/// Uniform per-tick behaviour shared by every world entity.
///
/// A bottom obstacle recycles below `ctx.anchor.top` and a scorer recycles
/// between both anchors, so lane members must be stepped through
/// [`Lane::update`] (or with the anchor set by hand), never on their own.
pub trait Entity {
    fn update(&mut self, ctx: &mut UpdateContext<'_>);
    fn draw(&self, surface: &mut dyn RenderSurface);
}

/// The player-controlled circle
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// True while the jump key is held
    pub is_jumping: bool,
    pub jump_velocity: f32,
}

impl Player {
    pub fn spawn(area: PlayArea, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_spawn_x, area.height / 2.0 - tuning.player_radius),
            vel: Vec2::ZERO,
            radius: tuning.player_radius,
            is_jumping: false,
            jump_velocity: tuning.jump_velocity,
        }
    }

    pub fn as_circle(&self) -> Circle {
        Circle {
            center: self.pos,
            radius: self.radius,
        }
    }
}

impl Entity for Player {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        self.pos += self.vel;

        // Soft ceiling: position is clamped, velocity is left alone
        if self.pos.y < self.radius {
            self.pos.y = self.radius;
        }

        if self.pos.y + self.radius <= ctx.area.height {
            if self.vel.y < ctx.tuning.gravity_cap {
                self.vel.y += ctx.tuning.gravity;
            }
        } else {
            self.pos.y = ctx.area.height - self.radius;
            ctx.floor_contact = true;
        }

        // Holding jump re-applies the impulse every tick
        if self.is_jumping {
            self.vel.y = self.jump_velocity;
        }
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        surface.fill_circle(self.pos, self.radius, colors::PLAYER);
    }
}

/// Which half of a lane's obstacle pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleRole {
    Top,
    Bottom,
}

/// A scrolling rectangle the player must avoid
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub lane_index: usize,
    pub pos: Vec2,
    pub size: Size,
    pub scroll_vel: Vec2,
    pub role: ObstacleRole,
}

impl Obstacle {
    pub fn as_rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Relaunch past the right edge with a fresh gap position
    fn recycle(&mut self, ctx: &mut UpdateContext<'_>) {
        self.pos.x = ctx.area.width + ctx.tuning.relaunch_offset;
        match self.role {
            ObstacleRole::Top => {
                self.pos.y = random_top_y(ctx.rng, ctx.tuning);
            }
            ObstacleRole::Bottom => {
                self.pos.y = ctx.anchor.top.y + ctx.area.height + ctx.tuning.gap_offset;
            }
        }
        log::debug!(
            "lane {} {:?} obstacle recycled to ({}, {})",
            self.lane_index,
            self.role,
            self.pos.x,
            self.pos.y
        );
    }
}

impl Entity for Obstacle {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        self.pos.x += self.scroll_vel.x;

        if self.pos.x + self.size.w < ctx.tuning.obstacle_recycle_edge {
            self.recycle(ctx);
        }
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        surface.fill_rect(self.pos, self.size, colors::OBSTACLE);
    }
}

/// Invisible gate inside a lane's gap that awards a point when crossed
#[derive(Debug, Clone, PartialEq)]
pub struct Scorer {
    pub lane_index: usize,
    pub pos: Vec2,
    pub size: Size,
    pub scroll_vel: Vec2,
    /// Eligible to award a point; cleared on scoring, set again on recycle
    pub armed: bool,
}

impl Scorer {
    pub fn as_rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

impl Entity for Scorer {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        self.pos.x += self.scroll_vel.x;

        if self.pos.x + self.size.w < ctx.tuning.scorer_recycle_edge {
            self.pos.x = ctx.anchor.top.x + ctx.tuning.scorer_offset_x;
            self.pos.y = ctx.anchor.bottom.y - ctx.tuning.scorer_height;
            self.armed = true;
        }
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        surface.fill_rect(self.pos, self.size, colors::SCORER);
    }
}

/// One obstacle pair plus the scorer gate in its gap
#[derive(Debug, Clone, PartialEq)]
pub struct Lane {
    pub top: Obstacle,
    pub bottom: Obstacle,
    pub scorer: Scorer,
}

impl Lane {
    /// Build lane `index` at its starting slot with a random gap height
    pub fn spawn(index: usize, area: PlayArea, tuning: &Tuning, rng: &mut Pcg32) -> Self {
        let scroll_vel = Vec2::new(tuning.scroll_speed, 0.0);
        let obstacle_size = Size::new(tuning.obstacle_width, tuning.obstacle_height(area.height));

        let top_pos = Vec2::new(
            tuning.first_lane_x + tuning.lane_spacing * index as f32,
            random_top_y(rng, tuning),
        );
        let bottom_pos = Vec2::new(top_pos.x, top_pos.y + area.height + tuning.gap_offset);
        let scorer_pos = Vec2::new(
            top_pos.x + tuning.scorer_offset_x,
            bottom_pos.y - tuning.scorer_height,
        );

        Self {
            top: Obstacle {
                lane_index: index,
                pos: top_pos,
                size: obstacle_size,
                scroll_vel,
                role: ObstacleRole::Top,
            },
            bottom: Obstacle {
                lane_index: index,
                pos: bottom_pos,
                size: obstacle_size,
                scroll_vel,
                role: ObstacleRole::Bottom,
            },
            scorer: Scorer {
                lane_index: index,
                pos: scorer_pos,
                size: Size::new(tuning.scorer_width, tuning.scorer_height),
                scroll_vel,
                armed: true,
            },
        }
    }

    /// Update members in partner order: top, then bottom (reads top), then scorer (reads both)
    pub fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        self.top.update(ctx);
        ctx.anchor.top = self.top.pos;
        self.bottom.update(ctx);
        ctx.anchor.bottom = self.bottom.pos;
        self.scorer.update(ctx);
    }

    pub fn draw(&self, surface: &mut dyn RenderSurface) {
        self.top.draw(surface);
        self.bottom.draw(surface);
        self.scorer.draw(surface);
    }
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct World {
    /// Seed the lanes were generated from
    pub seed: u64,
    pub area: PlayArea,
    pub tuning: Tuning,
    pub player: Player,
    pub lanes: [Lane; LANE_COUNT],
    pub score: u32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    rng: Pcg32,
}

impl World {
    /// Create a fresh world: player at spawn, lanes at their starting slots, score 0
    pub fn new(area: PlayArea, tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let lanes = std::array::from_fn(|i| Lane::spawn(i, area, &tuning, &mut rng));
        Self {
            seed,
            area,
            player: Player::spawn(area, &tuning),
            tuning,
            lanes,
            score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
            rng,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Advance the player and every lane by one step.
    /// Returns true if the player touched the floor.
    pub fn update_entities(&mut self) -> bool {
        let mut ctx = UpdateContext {
            area: self.area,
            tuning: &self.tuning,
            rng: &mut self.rng,
            anchor: LaneAnchor::default(),
            floor_contact: false,
        };

        self.player.update(&mut ctx);
        for lane in &mut self.lanes {
            lane.update(&mut ctx);
        }

        ctx.floor_contact
    }

    /// Draw every entity: lanes first, player on top
    pub fn draw_entities(&self, surface: &mut dyn RenderSurface) {
        for lane in &self.lanes {
            lane.draw(surface);
        }
        self.player.draw(surface);
    }
}

/// Uniform integer y for a top obstacle, inclusive on both ends
fn random_top_y(rng: &mut Pcg32, tuning: &Tuning) -> f32 {
    rng.random_range(tuning.top_y_min..=tuning.top_y_max) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_parts() -> (PlayArea, Tuning, Pcg32) {
        (PlayArea::default(), Tuning::default(), Pcg32::seed_from_u64(7))
    }

    #[test]
    fn test_play_area_clamp() {
        assert_eq!(PlayArea::from_outer_width(200.0).width, 350.0);
        assert_eq!(PlayArea::from_outer_width(420.0).width, 420.0);
        assert_eq!(PlayArea::from_outer_width(1920.0).width, 500.0);
        assert_eq!(PlayArea::from_outer_width(1920.0).height, 500.0);
    }

    #[test]
    fn test_player_spawn() {
        let (area, tuning, _) = ctx_parts();
        let player = Player::spawn(area, &tuning);
        assert_eq!(player.pos, Vec2::new(30.0, 235.0));
        assert_eq!(player.vel, Vec2::ZERO);
        assert_eq!(player.radius, 15.0);
        assert_eq!(player.jump_velocity, -7.0);
    }

    #[test]
    fn test_player_gravity_step() {
        let (area, tuning, mut rng) = ctx_parts();
        let mut player = Player::spawn(area, &tuning);
        let mut ctx = UpdateContext {
            area,
            tuning: &tuning,
            rng: &mut rng,
            anchor: LaneAnchor::default(),
            floor_contact: false,
        };

        // Velocity is applied before gravity, so position lags one tick
        player.update(&mut ctx);
        assert!((player.vel.y - 0.35).abs() < 1e-6);
        assert!((player.pos.y - 235.0).abs() < 1e-6);

        player.update(&mut ctx);
        assert!((player.pos.y - 235.35).abs() < 1e-4);
        assert!((player.vel.y - 0.70).abs() < 1e-5);
        assert!(!ctx.floor_contact);
    }

    #[test]
    fn test_player_floor_contact() {
        let (area, tuning, mut rng) = ctx_parts();
        let mut player = Player::spawn(area, &tuning);
        player.pos.y = 486.0; // 486 + 15 = 501 > 500
        let mut ctx = UpdateContext {
            area,
            tuning: &tuning,
            rng: &mut rng,
            anchor: LaneAnchor::default(),
            floor_contact: false,
        };
        player.update(&mut ctx);
        assert!(ctx.floor_contact);
        assert_eq!(player.pos.y, 485.0);
        // No gravity applied on the floor tick
        assert_eq!(player.vel.y, 0.0);
    }

    #[test]
    fn test_player_ceiling_is_soft() {
        let (area, tuning, mut rng) = ctx_parts();
        let mut player = Player::spawn(area, &tuning);
        player.pos.y = 16.0;
        player.vel.y = -7.0;
        player.is_jumping = true;
        let mut ctx = UpdateContext {
            area,
            tuning: &tuning,
            rng: &mut rng,
            anchor: LaneAnchor::default(),
            floor_contact: false,
        };
        player.update(&mut ctx);
        assert_eq!(player.pos.y, 15.0);
        assert_eq!(player.vel.y, -7.0);
    }

    #[test]
    fn test_lane_spawn_layout() {
        let (area, tuning, mut rng) = ctx_parts();
        for i in 0..LANE_COUNT {
            let lane = Lane::spawn(i, area, &tuning, &mut rng);
            let top = &lane.top;
            assert_eq!(top.pos.x, 500.0 + 220.0 * i as f32);
            assert!((-340.0..=-140.0).contains(&top.pos.y));
            assert_eq!(top.pos.y.fract(), 0.0);
            assert_eq!(top.size, Size::new(60.0, 420.0));
            assert_eq!(lane.bottom.pos.x, top.pos.x);
            assert_eq!(lane.bottom.pos.y, top.pos.y + 560.0);
            assert_eq!(lane.scorer.pos, Vec2::new(top.pos.x + 50.0, lane.bottom.pos.y - 140.0));
            assert!(lane.scorer.armed);

            // Scorer fills the gap exactly
            let gap_top = top.pos.y + top.size.h;
            assert_eq!(lane.scorer.pos.y, gap_top);
            assert_eq!(lane.scorer.pos.y + lane.scorer.size.h, lane.bottom.pos.y);
        }
    }

    #[test]
    fn test_obstacle_recycle() {
        let (area, tuning, mut rng) = ctx_parts();
        let mut lane = Lane::spawn(0, area, &tuning, &mut rng);
        // After scrolling, x + w = -41 < -40
        lane.top.pos.x = -96.0;
        lane.bottom.pos.x = -96.0;
        let mut ctx = UpdateContext {
            area,
            tuning: &tuning,
            rng: &mut rng,
            anchor: LaneAnchor::default(),
            floor_contact: false,
        };
        lane.update(&mut ctx);

        assert_eq!(lane.top.pos.x, 780.0);
        assert!((-340.0..=-140.0).contains(&lane.top.pos.y));
        assert_eq!(lane.bottom.pos.x, 780.0);
        assert_eq!(lane.bottom.pos.y, lane.top.pos.y + 560.0);
    }

    #[test]
    fn test_bottom_recycles_below_anchor() {
        let (area, tuning, mut rng) = ctx_parts();
        let mut lane = Lane::spawn(0, area, &tuning, &mut rng);
        lane.bottom.pos.x = -96.0;
        let mut ctx = UpdateContext {
            area,
            tuning: &tuning,
            rng: &mut rng,
            anchor: LaneAnchor {
                top: Vec2::new(780.0, -200.0),
                bottom: Vec2::ZERO,
            },
            floor_contact: false,
        };
        lane.bottom.update(&mut ctx);
        assert_eq!(lane.bottom.pos, Vec2::new(780.0, 360.0));
    }

    #[test]
    fn test_obstacle_not_recycled_at_edge() {
        let (area, tuning, mut rng) = ctx_parts();
        let mut lane = Lane::spawn(0, area, &tuning, &mut rng);
        // After scrolling, x + w = -40 exactly: still scrolling
        lane.top.pos.x = -95.0;
        let mut ctx = UpdateContext {
            area,
            tuning: &tuning,
            rng: &mut rng,
            anchor: LaneAnchor::default(),
            floor_contact: false,
        };
        lane.top.update(&mut ctx);
        assert_eq!(lane.top.pos.x, -100.0);
    }

    #[test]
    fn test_relaunch_tracks_play_width() {
        let area = PlayArea::from_outer_width(350.0);
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut lane = Lane::spawn(0, area, &tuning, &mut rng);
        lane.top.pos.x = -200.0;
        let mut ctx = UpdateContext {
            area,
            tuning: &tuning,
            rng: &mut rng,
            anchor: LaneAnchor::default(),
            floor_contact: false,
        };
        lane.top.update(&mut ctx);
        assert_eq!(lane.top.pos.x, 630.0);
    }

    #[test]
    fn test_scorer_recycle_rearms() {
        let (area, tuning, mut rng) = ctx_parts();
        let mut lane = Lane::spawn(0, area, &tuning, &mut rng);
        lane.top.pos.x = 400.0;
        lane.bottom.pos.x = 400.0;
        lane.scorer.pos.x = -96.0; // -101 + 10 < -90
        lane.scorer.armed = false;
        let mut ctx = UpdateContext {
            area,
            tuning: &tuning,
            rng: &mut rng,
            anchor: LaneAnchor::default(),
            floor_contact: false,
        };
        lane.update(&mut ctx);

        assert!(lane.scorer.armed);
        assert_eq!(lane.scorer.pos.x, lane.top.pos.x + 50.0);
        assert_eq!(lane.scorer.pos.y, lane.bottom.pos.y - 140.0);
    }

    #[test]
    fn test_world_new() {
        let world = World::new(PlayArea::default(), Tuning::default(), 42);
        assert!(world.is_running());
        assert_eq!(world.score, 0);
        for (i, lane) in world.lanes.iter().enumerate() {
            assert_eq!(lane.top.lane_index, i);
            assert_eq!(lane.bottom.lane_index, i);
            assert_eq!(lane.scorer.lane_index, i);
        }
    }

    #[test]
    fn test_same_seed_same_lanes() {
        let a = World::new(PlayArea::default(), Tuning::default(), 9);
        let b = World::new(PlayArea::default(), Tuning::default(), 9);
        assert_eq!(a.lanes, b.lanes);
    }
}
