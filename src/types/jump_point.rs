use crate::types::Vec2;

/// A candidate bail-out position on the flight path
///
/// The target lies exactly at the glide radius from `position`. Results are
/// produced fresh by every solver call and are never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JumpPoint {
    /// Position on the path in map coordinates
    pub position: Vec2,
    /// Arclength from the path start, always within `[0, path length]`
    pub distance: f64,
    /// `true` for the earliest candidate along the direction of flight
    pub is_recommended: bool,
}

impl JumpPoint {
    /// Distance from this jump point to the given landing target
    pub fn glide_distance(&self, target: Vec2) -> f64 {
        self.position.distance_to(target)
    }
}
