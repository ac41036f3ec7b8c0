//! Render surface contract
//!
//! The simulation draws through this trait and never reads back from it.
//! Hosts bind it to whatever drawing facility they have; the crate ships a
//! recording [`DrawList`](super::DrawList) that feeds the WebGPU pipeline.

use glam::Vec2;

use crate::sim::Size;

/// Straight-alpha RGBA color
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const PLAYER: Color = [0.0, 0.0, 1.0, 1.0];
    /// CSS `green` (#008000)
    pub const OBSTACLE: Color = [0.0, 0.502, 0.0, 1.0];
    /// Scorer gates are collidable but never visible
    pub const SCORER: Color = [0.0, 0.0, 0.0, 0.0];
    pub const TEXT: Color = [0.0, 0.0, 0.0, 1.0];
    pub const BACKGROUND: Color = [1.0, 1.0, 1.0, 1.0];
}

/// Font used for overlay text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub family: &'static str,
    pub size_px: f32,
}

impl Font {
    /// Score line and "Game Over" banner
    pub const HUD: Font = Font {
        family: "Arial",
        size_px: crate::consts::HUD_FONT_PX,
    };
    /// Reset hint under the banner
    pub const HINT: Font = Font {
        family: "Arial",
        size_px: crate::consts::HINT_FONT_PX,
    };

    /// CSS shorthand, e.g. `32px Arial`
    pub fn css(&self) -> String {
        format!("{}px {}", self.size_px, self.family)
    }
}

/// Horizontal anchoring of text relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Drawing primitives the game needs from a host
pub trait RenderSurface {
    /// Start a new frame covering `size`
    fn clear(&mut self, size: Size);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Filled rectangle anchored at its top-left corner
    fn fill_rect(&mut self, top_left: Vec2, size: Size, color: Color);
    /// Filled text; `pos` is the baseline anchor
    fn fill_text(&mut self, text: &str, pos: Vec2, font: Font, align: TextAlign, color: Color);
    /// Outlined text; `pos` is the baseline anchor
    fn stroke_text(&mut self, text: &str, pos: Vec2, font: Font, align: TextAlign, color: Color);
}
