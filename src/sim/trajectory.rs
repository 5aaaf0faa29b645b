//! Recorded ball trajectories
//!
//! A trajectory is the list of waypoints a replay viewer needs: the start
//! position, every bounce point and the rest point, plus the table size.
//! Consecutive waypoints are joined by straight segments.

use serde::{Deserialize, Serialize};

use super::state::{Simulation, Status};
use crate::error::{Result, SimError};

/// One recorded ball position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub table_width: i32,
    pub table_height: i32,
    /// Waypoints in the order they were reached (start first, rest last)
    pub samples: Vec<Sample>,
    /// Status after the last recorded step
    pub status: Status,
}

fn sample(sim: &Simulation) -> Option<Sample> {
    sim.ball().map(|b| Sample {
        x: b.pos.x,
        y: b.pos.y,
        radius: b.radius,
    })
}

impl Trajectory {
    /// Drive `sim` to rest, recording the ball after every step
    ///
    /// Fails if the simulation was never started, or if the ball is still
    /// moving after `max_steps` calls to `advance`.
    pub fn record(sim: &mut Simulation, max_steps: usize) -> Result<Self> {
        let first = sample(sim).ok_or(SimError::NotStarted)?;
        let mut samples = vec![first];

        while !sim.status().is_stationary() {
            if samples.len() > max_steps {
                return Err(SimError::StepLimitExceeded(max_steps));
            }
            let status = sim.advance();
            log::debug!("{status}");
            samples.extend(sample(sim));
        }

        log::info!("Recorded {} waypoints", samples.len());
        Ok(Self {
            table_width: sim.table_width(),
            table_height: sim.table_height(),
            samples,
            status: sim.status(),
        })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Where the ball came to rest
    pub fn rest(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Polyline segments between consecutive waypoints
    pub fn segments(&self) -> impl Iterator<Item = (&Sample, &Sample)> + '_ {
        self.samples.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Total path length of the ball's center
    pub fn path_length(&self) -> f64 {
        self.segments()
            .map(|(a, b)| (b.x - a.x).hypot(b.y - a.y))
            .sum()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
