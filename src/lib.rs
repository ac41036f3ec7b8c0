//! Gap Hopper - a one-button side-scrolling gap runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, scrolling lanes, collisions)
//! - `session`: Game loop controller (tick, render, frame scheduling, reset)
//! - `renderer`: Render surface contract, draw lists and the WebGPU pipeline
//! - `platform`: Input mapping, play-area sizing, frame scheduling
//! - `tuning`: Data-driven gameplay constants

pub mod error;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use error::{GameError, Result};
pub use session::GameSession;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Number of obstacle lanes kept alive at once
    pub const LANE_COUNT: usize = 4;

    /// Play area dimensions
    pub const PLAY_AREA_MIN_WIDTH: f32 = 350.0;
    pub const PLAY_AREA_MAX_WIDTH: f32 = 500.0;
    pub const PLAY_AREA_HEIGHT: f32 = 500.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 15.0;
    pub const PLAYER_SPAWN_X: f32 = 30.0;
    pub const JUMP_VELOCITY: f32 = -7.0;
    pub const GRAVITY: f32 = 0.35;
    /// Gravity stops accelerating the player once velocity.y reaches this
    pub const GRAVITY_CAP: f32 = 10.0;

    /// Horizontal scroll per tick for obstacles and scorers
    pub const SCROLL_SPEED: f32 = -5.0;

    /// Obstacle geometry
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    /// Obstacle height is the play area height minus this
    pub const OBSTACLE_HEIGHT_MARGIN: f32 = 80.0;
    /// Bottom obstacle y = top y + play height + this
    pub const GAP_OFFSET: f32 = 60.0;
    /// Obstacles relaunch at play width + this
    pub const RELAUNCH_OFFSET: f32 = 280.0;
    /// Obstacles recycle once their right edge passes this x
    pub const OBSTACLE_RECYCLE_EDGE: f32 = -40.0;
    /// Inclusive range for the top obstacle's random y
    pub const TOP_Y_MIN: i32 = -340;
    pub const TOP_Y_MAX: i32 = -140;

    /// Initial lane layout
    pub const FIRST_LANE_X: f32 = 500.0;
    pub const LANE_SPACING: f32 = 220.0;

    /// Scorer gate geometry
    pub const SCORER_WIDTH: f32 = 10.0;
    pub const SCORER_HEIGHT: f32 = 140.0;
    /// Scorer sits this far right of its lane's top obstacle
    pub const SCORER_OFFSET_X: f32 = 50.0;
    /// Scorers recycle once their right edge passes this x
    pub const SCORER_RECYCLE_EDGE: f32 = -90.0;

    /// HUD layout
    pub const SCORE_TEXT_Y: f32 = 50.0;
    pub const HUD_FONT_PX: f32 = 32.0;
    pub const HINT_FONT_PX: f32 = 19.2;
    pub const HINT_OFFSET_Y: f32 = 50.0;
}
