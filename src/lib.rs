#![doc = include_str!("../README.md")]

pub use crate::error::{Error, Result};
pub use crate::maps::{MapConfig, MapId};
pub use crate::planner::{JumpPlanner, PlanOutcome};
pub use crate::solver::{kmh_to_mps, minimum_jump_distance, solve_jump_points, time_to_cover};
pub use crate::types::*;
pub use crate::view::{MapView, Size};

mod error;
pub mod maps;
mod planner;
pub mod solver;
mod types;
pub mod view;
