//! Shape tessellation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::draw_list::{DrawCommand, DrawList};
use super::surface::Color;
use super::vertex::Vertex;
use crate::sim::Size;

/// Segments used for circles; enough for a 15px player to look round
pub const CIRCLE_SEGMENTS: u32 = 32;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle fan slice from the center
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(top_left: Vec2, size: Size, color: Color) -> Vec<Vertex> {
    let (x0, y0) = (top_left.x, top_left.y);
    let (x1, y1) = (top_left.x + size.w, top_left.y + size.h);

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Tessellate every visible shape in a draw list, preserving draw order.
/// Fully transparent fills and text commands produce no geometry.
pub fn tessellate(list: &DrawList) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for command in &list.commands {
        match command {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } if color[3] > 0.0 => {
                vertices.extend(circle(*center, *radius, *color, CIRCLE_SEGMENTS));
            }
            DrawCommand::Rect {
                top_left,
                size,
                color,
            } if color[3] > 0.0 => {
                vertices.extend(rect(*top_left, *size, *color));
            }
            _ => {}
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::surface::{RenderSurface, colors};

    #[test]
    fn test_circle_vertex_count() {
        let verts = circle(Vec2::ZERO, 10.0, colors::PLAYER, 8);
        assert_eq!(verts.len(), 24);
        // Every rim vertex sits on the radius
        for v in verts.iter().skip(1).step_by(3) {
            let len = Vec2::from(v.position).length();
            assert!((len - 10.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_rect_corners() {
        let verts = rect(Vec2::new(10.0, 20.0), Size::new(60.0, 420.0), colors::OBSTACLE);
        assert_eq!(verts.len(), 6);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 70.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 440.0);
    }

    #[test]
    fn test_transparent_fills_skipped() {
        let mut list = DrawList::new();
        list.clear(Size::new(500.0, 500.0));
        list.fill_rect(Vec2::ZERO, Size::new(10.0, 140.0), colors::SCORER);
        assert!(tessellate(&list).is_empty());

        list.fill_rect(Vec2::ZERO, Size::new(60.0, 420.0), colors::OBSTACLE);
        list.fill_circle(Vec2::new(30.0, 235.0), 15.0, colors::PLAYER);
        assert_eq!(tessellate(&list).len(), 6 + CIRCLE_SEGMENTS as usize * 3);
    }
}
