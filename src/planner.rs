//! Stateful jump planning on top of the solver
//!
//! [`JumpPlanner`] keeps the inputs a player picks on the map (flight path,
//! landing target, glide distance and plane speed) and keeps the resulting
//! jump points up to date whenever one of them changes.

use crate::maps::{DEFAULT_JUMP_DISTANCE, DEFAULT_PLANE_SPEED_KMH, MapId};
use crate::solver::{kmh_to_mps, minimum_jump_distance, solve_jump_points, time_to_cover};
use crate::types::{JumpPoint, Vec2};
use log::debug;

/// Summary of the current plan for display
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    /// Flight path or target not chosen yet
    Incomplete,
    /// The glide distance is too short for any point on the path
    Unreachable {
        /// Glide distance that would just reach the target
        minimum_distance: f64,
    },
    Reachable {
        recommended: JumpPoint,
        /// Later jump points, in flight order
        alternatives: Vec<JumpPoint>,
        /// Flight time from the path start to the recommended point
        seconds_to_jump: f64,
    },
}

/// Flight path, target and the jump points derived from them
///
/// Setters return `&mut Self` to allow method chaining. Every setter
/// recomputes the jump points, so queries are cheap.
///
/// # Example
///
/// ```
/// use jump_planner::{JumpPlanner, Vec2};
///
/// let mut planner = JumpPlanner::new();
/// planner
///     .set_plane_start(Vec2::new(0.0, 0.0))
///     .set_plane_end(Vec2::new(4000.0, 0.0))
///     .set_target(Vec2::new(2000.0, 1000.0));
///
/// assert!(planner.recommended().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct JumpPlanner {
    map: MapId,
    plane_start: Option<Vec2>,
    plane_end: Option<Vec2>,
    target: Option<Vec2>,
    jump_distance: f64,
    plane_speed_kmh: f64,
    jump_points: Vec<JumpPoint>,
}

impl JumpPlanner {
    /// Create an empty planner on the default map
    pub fn new() -> Self {
        Self::with_map(MapId::default())
    }

    pub fn with_map(map: MapId) -> Self {
        Self {
            map,
            plane_start: None,
            plane_end: None,
            target: None,
            jump_distance: DEFAULT_JUMP_DISTANCE,
            plane_speed_kmh: DEFAULT_PLANE_SPEED_KMH,
            jump_points: Vec::new(),
        }
    }

    pub fn map(&self) -> MapId {
        self.map
    }

    /// Switch to another map
    ///
    /// Coordinates picked on one map mean nothing on another, so this also
    /// clears the flight path and target. Selecting the current map is a
    /// no-op.
    pub fn select_map(&mut self, map: MapId) -> &mut Self {
        if map != self.map {
            debug!("Switching map from {} to {}", self.map, map);
            self.map = map;
            self.reset();
        }
        self
    }

    pub fn plane_start(&self) -> Option<Vec2> {
        self.plane_start
    }

    pub fn plane_end(&self) -> Option<Vec2> {
        self.plane_end
    }

    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    pub fn jump_distance(&self) -> f64 {
        self.jump_distance
    }

    pub fn plane_speed_kmh(&self) -> f64 {
        self.plane_speed_kmh
    }

    pub fn set_plane_start(&mut self, point: Vec2) -> &mut Self {
        self.plane_start = Some(point);
        self.recalculate();
        self
    }

    pub fn set_plane_end(&mut self, point: Vec2) -> &mut Self {
        self.plane_end = Some(point);
        self.recalculate();
        self
    }

    pub fn set_target(&mut self, point: Vec2) -> &mut Self {
        self.target = Some(point);
        self.recalculate();
        self
    }

    /// Set the maximum glide distance in meters
    pub fn set_jump_distance(&mut self, meters: f64) -> &mut Self {
        self.jump_distance = meters;
        self.recalculate();
        self
    }

    /// Set the plane speed in km/h
    ///
    /// Only affects [`JumpPlanner::time_to_recommended`]; jump points do not
    /// depend on speed.
    pub fn set_plane_speed_kmh(&mut self, speed: f64) -> &mut Self {
        self.plane_speed_kmh = speed;
        self
    }

    /// Forget the flight path and target
    ///
    /// Glide distance, plane speed and map are kept.
    pub fn reset(&mut self) -> &mut Self {
        self.plane_start = None;
        self.plane_end = None;
        self.target = None;
        self.jump_points.clear();
        self
    }

    fn route(&self) -> Option<(Vec2, Vec2, Vec2)> {
        Some((self.plane_start?, self.plane_end?, self.target?))
    }

    fn recalculate(&mut self) {
        self.jump_points = match self.route() {
            Some((start, end, target)) => {
                let points = solve_jump_points(start, end, target, self.jump_distance);
                debug!(
                    "Found {} jump point(s) for target {:?} at {} m",
                    points.len(),
                    target,
                    self.jump_distance
                );
                points
            }
            None => Vec::new(),
        };
    }

    /// Current jump points, ordered along the flight path
    pub fn jump_points(&self) -> &[JumpPoint] {
        &self.jump_points
    }

    pub fn recommended(&self) -> Option<&JumpPoint> {
        self.jump_points.iter().find(|point| point.is_recommended)
    }

    /// Glide distance that would just reach the target
    ///
    /// Returns `None` until the flight path and target are set.
    pub fn minimum_distance(&self) -> Option<f64> {
        let (start, end, target) = self.route()?;
        Some(minimum_jump_distance(start, end, target))
    }

    /// Seconds of flight from the path start to the recommended jump point
    ///
    /// A zero plane speed yields `f64::INFINITY`.
    pub fn time_to_recommended(&self) -> Option<f64> {
        let recommended = self.recommended()?;
        Some(time_to_cover(
            recommended.distance,
            kmh_to_mps(self.plane_speed_kmh),
        ))
    }

    pub fn outcome(&self) -> PlanOutcome {
        let Some(minimum_distance) = self.minimum_distance() else {
            return PlanOutcome::Incomplete;
        };

        match self.jump_points.split_first() {
            None => PlanOutcome::Unreachable { minimum_distance },
            Some((recommended, alternatives)) => PlanOutcome::Reachable {
                recommended: *recommended,
                alternatives: alternatives.to_vec(),
                seconds_to_jump: time_to_cover(
                    recommended.distance,
                    kmh_to_mps(self.plane_speed_kmh),
                ),
            },
        }
    }
}

impl Default for JumpPlanner {
    fn default() -> Self {
        Self::new()
    }
}
