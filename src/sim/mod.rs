//! Deterministic game simulation
//!
//! Fixed-step, seeded RNG, and no host dependencies: the same seed and input
//! sequence always produce the same run.

pub mod autopilot;
pub mod collision;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_input;
pub use collision::{Circle, Rect, Size, circle_rect_collide};
pub use state::{
    Entity, GamePhase, Lane, Obstacle, ObstacleRole, PlayArea, Player, Scorer, World,
};
pub use tick::{TickInput, TickReport, detect_collisions, tick};
