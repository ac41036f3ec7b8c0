//! Text overlay styling
//!
//! The shape pipeline cannot draw glyphs, so web hosts show each text command
//! as an absolutely positioned element over the canvas. This module decides
//! the CSS; the host only applies it.

use super::draw_list::{TextCommand, TextStyle};
use super::surface::{Color, TextAlign};

/// CSS property/value pairs in application order
pub type Declarations = Vec<(&'static str, String)>;

/// Wrapper that takes the canvas's place in the layout. The text layer is
/// positioned against it, so canvas and text move together on reflow.
pub const WRAPPER_STYLE: &[(&str, &str)] = &[
    ("position", "relative"),
    ("display", "inline-block"),
    ("line-height", "0"),
];

/// Text layer covering the wrapper exactly
pub const LAYER_STYLE: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("left", "0"),
    ("top", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("overflow", "hidden"),
    ("pointer-events", "none"),
];

/// Style for one text element. Positions are play-area pixels, which match
/// CSS pixels because the canvas is laid out at the play-area size.
pub fn label_style(cmd: &TextCommand) -> Declarations {
    let shift_x = match cmd.align {
        TextAlign::Left => "0",
        TextAlign::Center => "-50%",
        TextAlign::Right => "-100%",
    };

    let mut decls: Declarations = vec![
        ("position", "absolute".into()),
        ("display", "block".into()),
        ("white-space", "pre".into()),
        ("line-height", "1".into()),
        ("left", format!("{}px", cmd.pos.x)),
        ("top", format!("{}px", cmd.pos.y)),
        // Canvas text hangs off its baseline
        ("transform", format!("translate({shift_x}, -100%)")),
        ("font", cmd.font.css()),
    ];

    match cmd.style {
        TextStyle::Fill => {
            decls.push(("color", css_color(cmd.color)));
            decls.push(("-webkit-text-stroke", "0".into()));
        }
        TextStyle::Stroke => {
            decls.push(("color", "transparent".into()));
            decls.push(("-webkit-text-stroke", format!("1px {}", css_color(cmd.color))));
        }
    }
    decls
}

pub fn css_color(c: Color) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        (c[0] * 255.0).round() as u8,
        (c[1] * 255.0).round() as u8,
        (c[2] * 255.0).round() as u8,
        c[3]
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::surface::{Font, colors};
    use glam::Vec2;

    fn lookup<'a>(decls: &'a Declarations, name: &str) -> Option<&'a str> {
        decls
            .iter()
            .rev()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    fn text(align: TextAlign, style: TextStyle) -> TextCommand {
        TextCommand {
            text: "Score: 3".into(),
            pos: Vec2::new(250.0, 50.0),
            font: Font::HUD,
            align,
            color: colors::TEXT,
            style,
        }
    }

    #[test]
    fn test_layer_tracks_wrapper_not_page_offsets() {
        assert!(WRAPPER_STYLE.contains(&("position", "relative")));
        assert!(LAYER_STYLE.contains(&("position", "absolute")));
        assert!(LAYER_STYLE.contains(&("left", "0")));
        assert!(LAYER_STYLE.contains(&("top", "0")));
        assert!(LAYER_STYLE.contains(&("width", "100%")));
        assert!(LAYER_STYLE.contains(&("height", "100%")));
    }

    #[test]
    fn test_label_anchor_and_alignment() {
        let decls = label_style(&text(TextAlign::Center, TextStyle::Fill));
        assert_eq!(lookup(&decls, "left"), Some("250px"));
        assert_eq!(lookup(&decls, "top"), Some("50px"));
        assert_eq!(lookup(&decls, "transform"), Some("translate(-50%, -100%)"));
        assert_eq!(lookup(&decls, "font"), Some("32px Arial"));

        let decls = label_style(&text(TextAlign::Right, TextStyle::Fill));
        assert_eq!(lookup(&decls, "transform"), Some("translate(-100%, -100%)"));
    }

    #[test]
    fn test_stroke_is_outline_only() {
        let decls = label_style(&text(TextAlign::Center, TextStyle::Stroke));
        assert_eq!(lookup(&decls, "color"), Some("transparent"));
        assert_eq!(lookup(&decls, "-webkit-text-stroke"), Some("1px rgba(0, 0, 0, 1)"));
    }

    #[test]
    fn test_css_color() {
        assert_eq!(css_color(colors::OBSTACLE), "rgba(0, 128, 0, 1)");
        assert_eq!(css_color(colors::SCORER), "rgba(0, 0, 0, 0)");
    }
}
