//! Cadence-driven replanning against a movable goal.
//!
//! [`GoalController`] owns the current goal binding and a tick counter. On
//! scheduled ticks it re-runs all three search variants against the frozen
//! maze topology and stores the results; it performs no pathfinding logic
//! of its own.

pub mod controller;

pub use controller::{GoalController, PlanSet};
