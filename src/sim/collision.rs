//! Circle vs axis-aligned rectangle overlap
//!
//! The only geometric query the game needs: the player is a circle, every
//! obstacle and scorer gate is a rectangle anchored at its top-left corner.

use glam::Vec2;

/// Rectangle dimensions
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub const fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}

/// A circle in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

/// An axis-aligned rectangle; `pos` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Size,
}

impl Rect {
    pub const fn new(pos: Vec2, size: Size) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.size.w / 2.0, self.size.h / 2.0)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.half_extents()
    }
}

/// Check whether a circle overlaps a rectangle (touching counts)
///
/// Works on the distance from the circle center to the rectangle center:
/// anything beyond the rectangle grown by the radius is a miss, anything
/// inside the rectangle's extended cross is a hit, and the remaining corner
/// regions compare against the corner distance.
pub fn circle_rect_collide(circle: Circle, rect: Rect) -> bool {
    let half = rect.half_extents();
    let dist_x = (circle.center.x - rect.pos.x - half.x).abs();
    let dist_y = (circle.center.y - rect.pos.y - half.y).abs();

    if dist_x > half.x + circle.radius {
        return false;
    }
    if dist_y > half.y + circle.radius {
        return false;
    }

    if dist_x <= half.x {
        return true;
    }
    if dist_y <= half.y {
        return true;
    }

    let dx = dist_x - half.x;
    let dy = dist_y - half.y;
    dx * dx + dy * dy <= circle.radius * circle.radius
}
