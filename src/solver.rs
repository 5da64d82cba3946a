//! Geometric jump-point solver
//!
//! All functions in this module are pure: they allocate only their own
//! outputs, never fail, and return bit-identical results for identical inputs.

use crate::types::{JumpPoint, Vec2};

/// Maximum separation of the two roots returned for a tangent circle
///
/// When the glide circle just touches the flight path, rounding may produce
/// two nearly coincident jump points instead of one. Both are valid results.
pub const TANGENCY_EPSILON: f64 = 1e-3;

/// Relative tolerance for values that are exact up to floating-point rounding
///
/// Scaled by the magnitude of the coordinates involved. Applied to the
/// target's distance from the path line (so a true tangent is not lost to
/// rounding) and to roots that land a few ULPs outside the path segment.
pub const ROUNDING_EPSILON: f64 = 1e-12;

/// Find the points on the flight path from which `target` is exactly
/// `jump_distance` away
///
/// The path is the segment from `start` to `end`, flown in that direction.
/// The result holds zero, one or two jump points ordered by their distance
/// from `start`. The first one is marked as recommended since it is reached
/// first.
///
/// A zero-length path has no direction and always yields an empty result,
/// as does a glide circle that does not reach the segment.
///
/// # Example
///
/// ```
/// use jump_planner::{Vec2, solve_jump_points};
///
/// let points = solve_jump_points(
///     Vec2::new(0.0, 0.0),
///     Vec2::new(100.0, 0.0),
///     Vec2::new(50.0, 0.0),
///     25.0,
/// );
///
/// assert_eq!(points.len(), 2);
/// assert!(points[0].is_recommended);
/// ```
pub fn solve_jump_points(
    start: Vec2,
    end: Vec2,
    target: Vec2,
    jump_distance: f64,
) -> Vec<JumpPoint> {
    let path_length = end.sub(start).length();
    if path_length == 0.0 {
        return Vec::new();
    }

    let direction = end.sub(start).normalize();

    // |start + direction * t - target| = jump_distance
    // <=> t^2 + 2bt + c = 0, with c = |start - target|^2 - jump_distance^2
    let offset = start.sub(target);
    let radius_sq = jump_distance * jump_distance;
    let b = direction.dot(offset);

    // 4b^2 - 4c == 4(d^2 - p^2), with p the distance from the target to the
    // line through the path. The second form keeps precision near tangency.
    let perpendicular = offset.sub(direction.scale(b));
    let tolerance = ROUNDING_EPSILON * rounding_scale(start, target, offset);
    if perpendicular.length() - jump_distance.abs() > tolerance {
        return Vec::new();
    }

    // Only a tangent within rounding error gets here with a negative value
    let mut discriminant = 4.0 * (radius_sq - perpendicular.dot(perpendicular));
    if discriminant < 0.0 {
        discriminant = 0.0;
    }

    let sqrt_discriminant = discriminant.sqrt();
    let t1 = (-2.0 * b - sqrt_discriminant) / 2.0;
    let t2 = (-2.0 * b + sqrt_discriminant) / 2.0;

    let slack = ROUNDING_EPSILON * path_length.max(offset.length()).max(1.0);
    let mut roots: Vec<f64> = [t1, t2]
        .into_iter()
        .filter_map(|t| clip_to_segment(t, path_length, slack))
        .collect();

    roots.sort_by(f64::total_cmp);

    roots
        .into_iter()
        .enumerate()
        .map(|(index, t)| JumpPoint {
            position: start.add(direction.scale(t)),
            distance: t,
            is_recommended: index == 0,
        })
        .collect()
}

/// Magnitude that bounds the absolute rounding error of the target's
/// distance to the path line
fn rounding_scale(start: Vec2, target: Vec2, offset: Vec2) -> f64 {
    offset
        .length()
        .max(start.length())
        .max(target.length())
        .max(1.0)
}

/// Keep `t` if it lies on the segment `[0, length]`
///
/// Roots at most `slack` outside the segment are snapped onto the nearest
/// endpoint. NaN is always rejected.
fn clip_to_segment(t: f64, length: f64, slack: f64) -> Option<f64> {
    if (0.0..=length).contains(&t) {
        Some(t)
    } else if (-slack..0.0).contains(&t) {
        Some(0.0)
    } else if t > length && t <= length + slack {
        Some(length)
    } else {
        None
    }
}

/// Smallest glide distance that reaches `target` from anywhere on the path
///
/// This is the distance from `target` to the closest point of the segment
/// `start`..`end`. For a zero-length path the only candidate is `start`.
///
/// Passing the result back into [`solve_jump_points`] yields at least one
/// jump point.
pub fn minimum_jump_distance(start: Vec2, end: Vec2, target: Vec2) -> f64 {
    let path = end.sub(start);
    let path_length = path.length();

    if path_length == 0.0 {
        return target.sub(start).length();
    }

    let direction = path.normalize();
    // `f64::clamp` would panic on a NaN path length
    let projection = target.sub(start).dot(direction);
    let projection = if projection < 0.0 {
        0.0
    } else if projection > path_length {
        path_length
    } else {
        projection
    };

    let closest = start.add(direction.scale(projection));
    target.sub(closest).length()
}

/// Time needed to cover `distance` at `speed`
///
/// No validation is done: a zero speed yields `f64::INFINITY`, which callers
/// should present as "unreachable".
pub fn time_to_cover(distance: f64, speed: f64) -> f64 {
    distance / speed
}

/// Convert a speed in km/h to m/s
pub fn kmh_to_mps(speed: f64) -> f64 {
    speed / 3.6
}
