//! Pool Sim - a single ball bouncing on a rectangular table
//!
//! Core modules:
//! - `sim`: Deterministic collision-step simulation (engine, solver, trajectories)
//! - `settings`: Physical constants and tolerances
//! - `error`: Validation and recording errors

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{Result, SimError};
pub use settings::PhysicsConfig;
pub use sim::{Edge, MotionModel, Simulation, Status, Trajectory};

/// Default physical constants
pub mod consts {
    /// Speed lost at every bounce in the constant-decrement model
    pub const BOUNCE_DECREMENT: f64 = 5.0;
    /// Coefficient of rolling friction for the friction model
    pub const FRICTION: f64 = 0.1;
    /// Gravitational acceleration
    pub const GRAVITY: f64 = 9.8;
    /// Two friction-model wall times closer than this count as simultaneous
    pub const TIE_TOLERANCE: f64 = 1e-3;

    /// Upper bound on steps when recording a trajectory
    pub const MAX_RECORDED_STEPS: usize = 100_000;
}
