//! Physical constants and tolerances
//!
//! Defaults match the classic table; every value can be overridden and
//! round-trips through JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SimError};

/// Tunable physics for a simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Speed lost per bounce (constant-decrement model)
    pub bounce_decrement: f64,
    /// Friction coefficient (friction model)
    pub friction: f64,
    /// Gravitational acceleration (friction model)
    pub gravity: f64,
    /// Window within which two friction-model wall times are a tie
    pub tie_tolerance: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            bounce_decrement: BOUNCE_DECREMENT,
            friction: FRICTION,
            gravity: GRAVITY,
            tie_tolerance: TIE_TOLERANCE,
        }
    }
}

impl PhysicsConfig {
    /// Deceleration under friction (`f·g`)
    #[inline]
    pub fn deceleration(&self) -> f64 {
        self.friction * self.gravity
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!("Loaded physics config: {:?}", config);
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject constants that would stall or reverse the ball
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("bounce_decrement", self.bounce_decrement),
            ("friction", self.friction),
            ("gravity", self.gravity),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::InvalidConfiguration(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        if !self.tie_tolerance.is_finite() || self.tie_tolerance < 0.0 {
            return Err(SimError::InvalidConfiguration(format!(
                "tie_tolerance must be non-negative and finite, got {}",
                self.tie_tolerance
            )));
        }
        Ok(())
    }
}
