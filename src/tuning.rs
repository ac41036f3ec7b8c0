//! Gameplay tuning
//!
//! Every constant the simulation reads lives here so a front end can load
//! alternative values from JSON. Defaults reproduce the reference gameplay.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};

/// Data-driven gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub player_radius: f32,
    pub player_spawn_x: f32,
    /// Vertical velocity applied every tick while jump is held (negative = up)
    pub jump_velocity: f32,
    pub gravity: f32,
    pub gravity_cap: f32,

    // === Scrolling ===
    pub scroll_speed: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub obstacle_height_margin: f32,
    pub gap_offset: f32,
    pub relaunch_offset: f32,
    pub obstacle_recycle_edge: f32,
    pub top_y_min: i32,
    pub top_y_max: i32,

    // === Lane layout ===
    pub first_lane_x: f32,
    pub lane_spacing: f32,

    // === Scorers ===
    pub scorer_width: f32,
    pub scorer_height: f32,
    pub scorer_offset_x: f32,
    pub scorer_recycle_edge: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_radius: PLAYER_RADIUS,
            player_spawn_x: PLAYER_SPAWN_X,
            jump_velocity: JUMP_VELOCITY,
            gravity: GRAVITY,
            gravity_cap: GRAVITY_CAP,

            scroll_speed: SCROLL_SPEED,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height_margin: OBSTACLE_HEIGHT_MARGIN,
            gap_offset: GAP_OFFSET,
            relaunch_offset: RELAUNCH_OFFSET,
            obstacle_recycle_edge: OBSTACLE_RECYCLE_EDGE,
            top_y_min: TOP_Y_MIN,
            top_y_max: TOP_Y_MAX,

            first_lane_x: FIRST_LANE_X,
            lane_spacing: LANE_SPACING,

            scorer_width: SCORER_WIDTH,
            scorer_height: SCORER_HEIGHT,
            scorer_offset_x: SCORER_OFFSET_X,
            scorer_recycle_edge: SCORER_RECYCLE_EDGE,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document. Missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would break simulation invariants
    pub fn validate(&self) -> Result<()> {
        if !self.real_fields().iter().all(|v| v.is_finite()) {
            return Err(GameError::InvalidTuning("values must be finite numbers"));
        }
        if self.player_radius <= 0.0 {
            return Err(GameError::InvalidTuning("player_radius must be positive"));
        }
        if self.jump_velocity >= 0.0 {
            return Err(GameError::InvalidTuning("jump_velocity must be negative"));
        }
        if self.gravity <= 0.0 || self.gravity_cap <= 0.0 {
            return Err(GameError::InvalidTuning("gravity and gravity_cap must be positive"));
        }
        // Lanes only ever recycle off the left edge
        if self.scroll_speed >= 0.0 {
            return Err(GameError::InvalidTuning("scroll_speed must be negative"));
        }
        if self.top_y_min > self.top_y_max {
            return Err(GameError::InvalidTuning("top_y_min must not exceed top_y_max"));
        }
        if self.obstacle_width < 0.0 || self.scorer_width < 0.0 || self.scorer_height < 0.0 {
            return Err(GameError::InvalidTuning("entity sizes must be non-negative"));
        }
        Ok(())
    }

    fn real_fields(&self) -> [f32; 17] {
        [
            self.player_radius,
            self.player_spawn_x,
            self.jump_velocity,
            self.gravity,
            self.gravity_cap,
            self.scroll_speed,
            self.obstacle_width,
            self.obstacle_height_margin,
            self.gap_offset,
            self.relaunch_offset,
            self.obstacle_recycle_edge,
            self.first_lane_x,
            self.lane_spacing,
            self.scorer_width,
            self.scorer_height,
            self.scorer_offset_x,
            self.scorer_recycle_edge,
        ]
    }

    /// Height of every obstacle rectangle for a given play area height
    #[inline]
    pub fn obstacle_height(&self, play_height: f32) -> f32 {
        (play_height - self.obstacle_height_margin).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.5 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.5);
        assert_eq!(tuning.jump_velocity, JUMP_VELOCITY);
        assert_eq!(tuning.top_y_min, TOP_Y_MIN);
    }

    #[test]
    fn test_inverted_random_range_rejected() {
        let result = Tuning::from_json(r#"{ "top_y_min": -100, "top_y_max": -200 }"#);
        assert!(matches!(result, Err(GameError::InvalidTuning(_))));
    }

    #[test]
    fn test_upward_jump_required() {
        let tuning = Tuning {
            jump_velocity: 3.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let tuning = Tuning {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(GameError::InvalidTuning(_))));

        let tuning = Tuning {
            lane_spacing: f32::INFINITY,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_forward_scroll_rejected() {
        for scroll_speed in [0.0, 5.0] {
            let tuning = Tuning {
                scroll_speed,
                ..Default::default()
            };
            assert!(tuning.validate().is_err());
        }
    }

    #[test]
    fn test_gravity_must_pull_down() {
        let result = Tuning::from_json(r#"{ "gravity": -0.35 }"#);
        assert!(matches!(result, Err(GameError::InvalidTuning(_))));
        let result = Tuning::from_json(r#"{ "gravity_cap": 0.0 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(GameError::TuningParse(_))
        ));
    }

    #[test]
    fn test_obstacle_height() {
        assert_eq!(Tuning::default().obstacle_height(500.0), 420.0);
    }
}
