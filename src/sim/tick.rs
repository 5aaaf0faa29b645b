//! One collision step
//!
//! `advance` moves the ball straight to its next wall contact (or to rest),
//! reflects it and applies the motion model's speed loss.

use glam::DVec2;

use super::collision::{Candidate, Edge, approaches, soonest};
use super::solver::time_to_cover;
use super::state::{Ball, MotionModel, Simulation, Status};
use crate::settings::PhysicsConfig;

/// Outcome of planning a step
#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    /// Reach `edge` after `time`
    Bounce { edge: Edge, time: f64 },
    /// No wall is reachable; slide for `time` and stop
    Rest { time: f64 },
}

impl MotionModel {
    /// Distance covered along the direction of travel after `t`
    fn travel(&self, speed: f64, t: f64, config: &PhysicsConfig) -> f64 {
        match self {
            MotionModel::ConstantDecrement => speed * t,
            MotionModel::Friction => speed * t - config.deceleration() / 2.0 * t * t,
        }
    }

    /// Speed remaining after a step of duration `t`
    fn slow_down(&self, speed: f64, t: f64, config: &PhysicsConfig) -> f64 {
        match self {
            MotionModel::ConstantDecrement => speed - config.bounce_decrement,
            MotionModel::Friction => speed - config.deceleration() * t,
        }
    }

    fn plan(&self, ball: &Ball, table: DVec2, config: &PhysicsConfig) -> Step {
        // A zero-time bounce costs no speed under friction, so an axis the
        // ball exactly fills would bounce forever
        let skip_pinned = *self == MotionModel::Friction;
        let approaching = approaches(ball, table, skip_pinned).into_iter().flatten();
        match self {
            MotionModel::ConstantDecrement => {
                let candidates = approaching.map(|a| Candidate {
                    edge: a.edge,
                    time: a.distance / (ball.speed * a.component),
                });
                match soonest(candidates, 0.0) {
                    Some(c) => Step::Bounce { edge: c.edge, time: c.time },
                    None => Step::Rest { time: 0.0 },
                }
            }
            MotionModel::Friction => {
                let decel = config.deceleration();
                let candidates = approaching.filter_map(|a| {
                    time_to_cover(a.distance, ball.speed * a.component, decel * a.component)
                        .map(|time| Candidate { edge: a.edge, time })
                });
                match soonest(candidates, config.tie_tolerance) {
                    Some(c) => Step::Bounce { edge: c.edge, time: c.time },
                    None => Step::Rest { time: ball.speed / decel },
                }
            }
        }
    }
}

/// Keep the ball's bounding circle on the table
fn clamp_to_table(pos: DVec2, table: DVec2, radius: f64) -> DVec2 {
    let low = DVec2::splat(radius);
    let high = (table - low).max(low);
    pos.clamp(low, high)
}

impl Simulation {
    /// Advance the ball to its next bounce, or to rest
    ///
    /// Before `start` this logs a warning and does nothing. Once the ball
    /// is stationary further calls change nothing.
    pub fn advance(&mut self) -> Status {
        let Some(mut ball) = self.ball else {
            log::warn!("advance() called before start(); ignoring");
            return self.status;
        };
        if self.status.is_stationary() {
            return self.status;
        }

        let model = self.model();
        let config = *self.config();
        let table = self.table_size();

        let step = model.plan(&ball, table, &config);
        let time = match step {
            Step::Bounce { time, .. } | Step::Rest { time } => time,
        };
        let travel = model.travel(ball.speed, time, &config);
        let mut pos = clamp_to_table(ball.pos + ball.dir * travel, table, ball.radius);

        match step {
            Step::Bounce { edge, time } => {
                let contact = edge.contact(table, ball.radius);
                if edge.is_vertical() {
                    pos.x = contact;
                } else {
                    pos.y = contact;
                }
                ball.pos = pos;
                ball.dir = edge.reflect(ball.dir);
                ball.speed = model.slow_down(ball.speed, time, &config);
                self.status = edge.status();
                log::debug!(
                    "{} at ({:.3}, {:.3}) after t={:.4}, speed now {:.3}",
                    self.status,
                    pos.x,
                    pos.y,
                    time,
                    ball.speed
                );
            }
            Step::Rest { time } => {
                log::debug!("No wall reachable, sliding to rest over t={time:.4}");
                ball.pos = pos;
                ball.speed = 0.0;
            }
        }

        if ball.speed <= 0.0 {
            ball.speed = 0.0;
            self.status = Status::Stationary;
            log::info!("{} at ({:.3}, {:.3})", self.status, ball.pos.x, ball.pos.y);
        }
        self.ball = Some(ball);
        self.status
    }
}
