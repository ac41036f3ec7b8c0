//! Recording render surface
//!
//! Captures one frame of drawing commands. The WebGPU pipeline tessellates the
//! shape commands; text commands are handed to the host's text layer.

use glam::Vec2;

use super::surface::{Color, Font, RenderSurface, TextAlign};
use crate::sim::Size;

/// Fill or outline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Fill,
    Stroke,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    pub text: String,
    pub pos: Vec2,
    pub font: Font,
    pub align: TextAlign,
    pub color: Color,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Rect {
        top_left: Vec2,
        size: Size,
        color: Color,
    },
    Text(TextCommand),
}

/// One frame's worth of draw commands, in submission order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    /// Logical size passed to the last `clear`
    pub size: Size,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextCommand> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(t) => Some(t),
            _ => None,
        })
    }

    /// Whether any text command carries exactly this string
    pub fn has_text(&self, text: &str) -> bool {
        self.texts().any(|t| t.text == text)
    }

    fn push_text(
        &mut self,
        text: &str,
        pos: Vec2,
        font: Font,
        align: TextAlign,
        color: Color,
        style: TextStyle,
    ) {
        self.commands.push(DrawCommand::Text(TextCommand {
            text: text.to_string(),
            pos,
            font,
            align,
            color,
            style,
        }));
    }
}

impl RenderSurface for DrawList {
    fn clear(&mut self, size: Size) {
        self.size = size;
        self.commands.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, top_left: Vec2, size: Size, color: Color) {
        self.commands.push(DrawCommand::Rect {
            top_left,
            size,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: Font, align: TextAlign, color: Color) {
        self.push_text(text, pos, font, align, color, TextStyle::Fill);
    }

    fn stroke_text(&mut self, text: &str, pos: Vec2, font: Font, align: TextAlign, color: Color) {
        self.push_text(text, pos, font, align, color, TextStyle::Stroke);
    }
}
