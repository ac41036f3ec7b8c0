//! Full-frame render pass

use glam::Vec2;

use super::surface::{Font, RenderSurface, TextAlign, colors};
use crate::consts::{HINT_OFFSET_Y, SCORE_TEXT_Y};
use crate::sim::World;

/// Draw the whole frame: entities, score, and the game-over overlay if the run ended
pub fn render_frame(world: &World, surface: &mut dyn RenderSurface) {
    surface.clear(world.area.size());

    world.draw_entities(surface);

    let center_x = world.area.width / 2.0;
    surface.stroke_text(
        &format!("Score: {}", world.score),
        Vec2::new(center_x, SCORE_TEXT_Y),
        Font::HUD,
        TextAlign::Center,
        colors::TEXT,
    );

    if !world.is_running() {
        let center = Vec2::new(center_x, world.area.height / 2.0);
        surface.fill_text("Game Over", center, Font::HUD, TextAlign::Center, colors::TEXT);
        surface.fill_text(
            "Press \"R\" to reset",
            center + Vec2::new(0.0, HINT_OFFSET_Y),
            Font::HINT,
            TextAlign::Center,
            colors::TEXT,
        );
    }
}
