//! Deterministic single-ball simulation
//!
//! The engine jumps from bounce to bounce rather than integrating over a
//! fixed timestep:
//! - `state`: table, ball, motion model and status
//! - `collision`: per-axis wall candidates and tie-breaking
//! - `solver`: time-to-wall under friction
//! - `tick`: the `advance` step
//! - `trajectory`: waypoint recording for replay

pub mod collision;
pub mod solver;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use collision::{Candidate, Edge};
pub use solver::solve;
pub use state::{Ball, MotionModel, Simulation, Status};
pub use trajectory::{Sample, Trajectory};
