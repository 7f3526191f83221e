//! 2-D geometry in display space.
//!
//! Coordinates are `f32` in the same unit the level geometry was authored in
//! (the layout tool's pixel space).  All positions, door centers, and room
//! rectangles use this space; the engine never rescales.

use std::ops::{Add, Mul, Neg, Sub};

// ── Vec2 ─────────────────────────────────────────────────────────────────────

/// A 2-D point or displacement.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Unit vector in the same direction, or `ZERO` for a (near-)zero vector.
    pub fn normalized(self) -> Vec2 {
        let len = self.length();
        if len <= f32::EPSILON {
            Vec2::ZERO
        } else {
            Vec2::new(self.x / len, self.y / len)
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

// ── Rect ─────────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle: `(left, top)` corner plus extents.
///
/// Matches the layout data's `{left, top, width, height}` shape; `top` grows
/// downward (screen convention).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left:   f32,
    pub top:    f32,
    pub width:  f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// Geometric center of the rectangle.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Clamp `p` to lie inside the rectangle inset by `margin` on all sides.
    ///
    /// A rectangle thinner than `2 * margin` collapses to its center line.
    pub fn clamp_inset(&self, p: Vec2, margin: f32) -> Vec2 {
        let lo_x = self.left + margin;
        let hi_x = (self.left + self.width - margin).max(lo_x);
        let lo_y = self.top + margin;
        let hi_y = (self.top + self.height - margin).max(lo_y);
        Vec2::new(p.x.clamp(lo_x, hi_x), p.y.clamp(lo_y, hi_y))
    }

    /// `true` if `p` lies inside the rectangle inset by `margin`.
    pub fn contains_inset(&self, p: Vec2, margin: f32) -> bool {
        p.x >= self.left + margin
            && p.x <= self.left + self.width - margin
            && p.y >= self.top + margin
            && p.y <= self.top + self.height - margin
    }
}
