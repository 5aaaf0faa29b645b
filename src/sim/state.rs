//! Simulation state and core types
//!
//! Everything `advance` reads or mutates lives on [`Simulation`].

use std::fmt;
use std::str::FromStr;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::collision::Edge;
use crate::error::{Result, SimError};
use crate::settings::PhysicsConfig;

/// Deceleration law applied to the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionModel {
    /// Fixed speed loss per bounce, independent of elapsed time
    ConstantDecrement,
    /// Continuous deceleration at `f·g`
    Friction,
}

impl MotionModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MotionModel::ConstantDecrement => "simple",
            MotionModel::Friction => "friction",
        }
    }
}

impl FromStr for MotionModel {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(MotionModel::ConstantDecrement),
            "friction" => Ok(MotionModel::Friction),
            other => Err(SimError::InvalidConfiguration(format!(
                "unknown motion model {other:?}"
            ))),
        }
    }
}

/// Most recent engine transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    NotStarted,
    Started,
    HitTop,
    HitBottom,
    HitLeft,
    HitRight,
    /// Terminal: the ball has come to rest
    Stationary,
}

impl Status {
    #[inline]
    pub fn is_stationary(&self) -> bool {
        *self == Status::Stationary
    }

    /// Edge struck by the last step, if the last step was a bounce
    pub fn edge(&self) -> Option<Edge> {
        match self {
            Status::HitTop => Some(Edge::Top),
            Status::HitBottom => Some(Edge::Bottom),
            Status::HitLeft => Some(Edge::Left),
            Status::HitRight => Some(Edge::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Status::NotStarted => "Ball not set up",
            Status::Started => "Simulation started",
            Status::HitTop => "Ball hit top edge",
            Status::HitBottom => "Ball hit bottom edge",
            Status::HitLeft => "Ball hit left edge",
            Status::HitRight => "Ball hit right edge",
            Status::Stationary => "Ball is stationary",
        };
        write!(f, "Status: {text}")
    }
}

/// The ball's kinematic state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: DVec2,
    /// Unit direction of travel
    pub dir: DVec2,
    pub speed: f64,
    pub radius: f64,
}

impl Ball {
    #[inline]
    pub fn velocity(&self) -> DVec2 {
        self.dir * self.speed
    }
}

/// A single-ball table simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    width: i32,
    height: i32,
    model: MotionModel,
    config: PhysicsConfig,
    /// `None` until `start` succeeds
    pub(crate) ball: Option<Ball>,
    pub(crate) status: Status,
}

impl Simulation {
    /// Create a simulation with default physics
    pub fn new(width: i32, height: i32, model: MotionModel) -> Result<Self> {
        Self::with_config(width, height, model, PhysicsConfig::default())
    }

    /// Create a simulation selecting the model by tag (`"simple"` or `"friction"`)
    pub fn from_tag(width: i32, height: i32, tag: &str) -> Result<Self> {
        Self::check_dimensions(width, height)?;
        Self::new(width, height, tag.parse()?)
    }

    pub fn with_config(
        width: i32,
        height: i32,
        model: MotionModel,
        config: PhysicsConfig,
    ) -> Result<Self> {
        Self::check_dimensions(width, height)?;
        config.validate()?;
        Ok(Self {
            width,
            height,
            model,
            config,
            ball: None,
            status: Status::NotStarted,
        })
    }

    fn check_dimensions(width: i32, height: i32) -> Result<()> {
        if width < 0 || height < 0 {
            return Err(SimError::InvalidConfiguration(format!(
                "invalid table size {width}x{height}"
            )));
        }
        Ok(())
    }

    /// Place the ball and set it moving
    ///
    /// The direction need not be normalized but must have a non-zero,
    /// finite magnitude. Calling `start` again restarts the run.
    pub fn start(&mut self, x: i32, y: i32, radius: i32, speed: i32, dx: f64, dy: f64) -> Result<()> {
        if radius < 0 {
            return Err(SimError::InvalidRadius(radius));
        }
        if speed <= 0 {
            return Err(SimError::InvalidSpeed(speed));
        }
        let (x, y, r) = (i64::from(x), i64::from(y), i64::from(radius));
        if x - r < 0 || x + r > i64::from(self.width) || y - r < 0 || y + r > i64::from(self.height) {
            return Err(SimError::BallOutsideTable);
        }
        let dir = DVec2::new(dx, dy)
            .try_normalize()
            .ok_or(SimError::InvalidDirection(dx, dy))?;

        self.ball = Some(Ball {
            pos: DVec2::new(x as f64, y as f64),
            dir,
            speed: f64::from(speed),
            radius: r as f64,
        });
        self.status = Status::Started;
        log::info!(
            "{} ({}): ball at ({x}, {y}) r={radius} speed={speed} dir=({:.3}, {:.3})",
            self.status,
            self.model.as_str(),
            dir.x,
            dir.y
        );
        Ok(())
    }

    pub fn table_width(&self) -> i32 {
        self.width
    }

    pub fn table_height(&self) -> i32 {
        self.height
    }

    /// Table size as a vector (upper-right corner)
    pub fn table_size(&self) -> DVec2 {
        DVec2::new(f64::from(self.width), f64::from(self.height))
    }

    pub fn model(&self) -> MotionModel {
        self.model
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn ball(&self) -> Option<&Ball> {
        self.ball.as_ref()
    }

    pub fn ball_position_x(&self) -> Option<f64> {
        self.ball.map(|b| b.pos.x)
    }

    pub fn ball_position_y(&self) -> Option<f64> {
        self.ball.map(|b| b.pos.y)
    }

    pub fn ball_radius(&self) -> Option<f64> {
        self.ball.map(|b| b.radius)
    }

    pub fn ball_velocity_x(&self) -> Option<f64> {
        self.ball.map(|b| b.velocity().x)
    }

    pub fn ball_velocity_y(&self) -> Option<f64> {
        self.ball.map(|b| b.velocity().y)
    }

    pub fn speed(&self) -> Option<f64> {
        self.ball.map(|b| b.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative_dimensions() {
        assert!(matches!(
            Simulation::new(-10, 2, MotionModel::ConstantDecrement),
            Err(SimError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Simulation::new(10, -2, MotionModel::Friction),
            Err(SimError::InvalidConfiguration(_))
        ));
        assert!(Simulation::new(0, 0, MotionModel::Friction).is_ok());
    }

    #[test]
    fn test_from_tag() {
        let sim = Simulation::from_tag(10, 10, "simple").unwrap();
        assert_eq!(sim.model(), MotionModel::ConstantDecrement);
        let sim = Simulation::from_tag(10, 10, "Friction").unwrap();
        assert_eq!(sim.model(), MotionModel::Friction);
        assert!(matches!(
            Simulation::from_tag(10, 10, "xyz"),
            Err(SimError::InvalidConfiguration(_))
        ));
        // Bad dimensions are reported even with a bad tag
        assert!(matches!(
            Simulation::from_tag(-10, 2, "xyz"),
            Err(SimError::InvalidConfiguration(msg)) if msg.contains("table size")
        ));
    }

    #[test]
    fn test_not_started_queries() {
        let sim = Simulation::new(10, 10, MotionModel::ConstantDecrement).unwrap();
        assert_eq!(sim.status(), Status::NotStarted);
        assert_eq!(sim.table_width(), 10);
        assert_eq!(sim.table_height(), 10);
        assert!(sim.ball().is_none());
        assert!(sim.ball_position_x().is_none());
        assert!(sim.ball_velocity_y().is_none());
        assert_eq!(sim.status().to_string(), "Status: Ball not set up");
    }

    #[test]
    fn test_start_validation_order() {
        let mut sim = Simulation::new(10, 10, MotionModel::ConstantDecrement).unwrap();
        assert!(matches!(sim.start(2, 3, -4, 5, 0.0, 2.0), Err(SimError::InvalidRadius(-4))));
        // Radius is checked before speed
        assert!(matches!(sim.start(2, 3, -4, 0, 0.0, 2.0), Err(SimError::InvalidRadius(_))));
        assert!(matches!(sim.start(2, 3, 4, -95, 0.0, 2.0), Err(SimError::InvalidSpeed(-95))));
        assert!(matches!(sim.start(2, 3, 4, 0, 0.0, 2.0), Err(SimError::InvalidSpeed(0))));
        assert!(matches!(sim.start(2, 3, 74, 5, 0.0, 2.0), Err(SimError::BallOutsideTable)));
        assert!(matches!(sim.start(2, 2, 1, 5, 0.0, 0.0), Err(SimError::InvalidDirection(..))));
        // Failed starts leave the simulation untouched
        assert_eq!(sim.status(), Status::NotStarted);
        assert!(sim.ball().is_none());
    }

    #[test]
    fn test_start_outside_on_y() {
        let mut sim = Simulation::new(10, 2, MotionModel::Friction).unwrap();
        assert!(matches!(sim.start(2, 3, 4, 5, 0.0, 2.0), Err(SimError::BallOutsideTable)));
        // Touching every edge is allowed
        let mut sim = Simulation::new(10, 10, MotionModel::Friction).unwrap();
        assert!(sim.start(5, 5, 5, 5, 1.0, 1.0).is_ok());
    }

    #[test]
    fn test_start_normalizes_direction() {
        let mut sim = Simulation::new(10, 10, MotionModel::ConstantDecrement).unwrap();
        sim.start(2, 2, 1, 10, 2.0, 1.0).unwrap();
        let ball = sim.ball().unwrap();
        assert!((ball.dir.length() - 1.0).abs() < 1e-9);
        assert!((ball.dir.x - 0.894).abs() < 0.001);
        assert!((ball.dir.y - 0.447).abs() < 0.001);
        assert_eq!(sim.status(), Status::Started);
        assert_eq!(sim.status().to_string(), "Status: Simulation started");
        assert_eq!(sim.ball_position_x(), Some(2.0));
        assert_eq!(sim.ball_radius(), Some(1.0));
        assert!((sim.ball_velocity_x().unwrap() - 8.944).abs() < 0.001);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::HitTop.to_string(), "Status: Ball hit top edge");
        assert_eq!(Status::HitBottom.to_string(), "Status: Ball hit bottom edge");
        assert_eq!(Status::HitLeft.to_string(), "Status: Ball hit left edge");
        assert_eq!(Status::HitRight.to_string(), "Status: Ball hit right edge");
        assert_eq!(Status::Stationary.to_string(), "Status: Ball is stationary");
        assert_eq!(Status::HitLeft.edge(), Some(Edge::Left));
        assert_eq!(Status::Started.edge(), None);
    }
}
