use std::ops::{Add, Mul, Sub};

/// A point or direction in the planar map coordinate system
///
/// Coordinates are usually map meters, with the x axis pointing east and the
/// y axis pointing north. `Vec2` is a plain value type; all operations return
/// new values and never fail. NaN and infinite components propagate according
/// to IEEE-754 rules.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// The zero vector, also used as "no direction" by [`Vec2::normalize`]
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Componentwise `self - other`
    pub fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }

    /// Componentwise `self + other`
    pub fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }

    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length
    ///
    /// Uses [`f64::hypot`], which does not overflow for large components.
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn scale(self, factor: f64) -> Vec2 {
        Vec2::new(self.x * factor, self.y * factor)
    }

    /// Scale to unit length
    ///
    /// Returns [`Vec2::ZERO`] for the zero vector, so callers must treat a
    /// zero-length result as "no direction".
    pub fn normalize(self) -> Vec2 {
        let length = self.length();
        if length == 0.0 {
            return Vec2::ZERO;
        }

        Vec2::new(self.x / length, self.y / length)
    }

    /// Straight-line distance between two points
    pub fn distance_to(self, other: Vec2) -> f64 {
        other.sub(self).length()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::add(self, rhs)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::sub(self, rhs)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        self.scale(rhs)
    }
}
