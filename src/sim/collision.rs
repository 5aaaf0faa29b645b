//! Wall candidates for the next bounce
//!
//! Each axis with a non-zero direction component heads toward exactly one
//! wall. The two models differ only in how long the ball takes to get there,
//! so candidate generation and selection are shared.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Status};

/// A table edge. `Bottom` is `y = 0`, `Top` is `y = height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// Left and right edges stop horizontal motion
    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self, Edge::Left | Edge::Right)
    }

    /// Unit normal pointing into the table
    pub fn inward_normal(&self) -> DVec2 {
        match self {
            Edge::Top => DVec2::NEG_Y,
            Edge::Bottom => DVec2::Y,
            Edge::Left => DVec2::X,
            Edge::Right => DVec2::NEG_X,
        }
    }

    /// Center coordinate (on this edge's axis) of a ball touching the edge
    pub fn contact(&self, table: DVec2, radius: f64) -> f64 {
        match self {
            Edge::Top => table.y - radius,
            Edge::Bottom | Edge::Left => radius,
            Edge::Right => table.x - radius,
        }
    }

    /// Negate the direction component perpendicular to this edge
    #[inline]
    pub fn reflect(&self, dir: DVec2) -> DVec2 {
        if self.is_vertical() {
            DVec2::new(-dir.x, dir.y)
        } else {
            DVec2::new(dir.x, -dir.y)
        }
    }

    pub fn status(&self) -> Status {
        match self {
            Edge::Top => Status::HitTop,
            Edge::Bottom => Status::HitBottom,
            Edge::Left => Status::HitLeft,
            Edge::Right => Status::HitRight,
        }
    }
}

/// The wall one axis is heading toward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Approach {
    pub edge: Edge,
    /// Distance the ball's center must travel along the axis
    pub distance: f64,
    /// |direction component| on this axis
    pub component: f64,
}

/// A wall together with the time the ball reaches it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub edge: Edge,
    pub time: f64,
}

fn axis_approach(
    pos: f64,
    dir: f64,
    extent: f64,
    radius: f64,
    edges: (Edge, Edge),
    skip_pinned: bool,
) -> Option<Approach> {
    if dir == 0.0 {
        return None;
    }
    // No room to move along this axis
    if skip_pinned && extent - 2.0 * radius <= 0.0 {
        return None;
    }
    let (low, high) = edges;
    let (edge, distance) = if dir > 0.0 {
        (high, extent - radius - pos)
    } else {
        (low, pos - radius)
    };
    Some(Approach {
        edge,
        distance: distance.max(0.0),
        component: dir.abs(),
    })
}

/// Walls the ball is heading toward, in tie-break order
///
/// When the ball moves up and to the right the top edge is listed first;
/// otherwise the left/right edge is. With `skip_pinned`, an axis the ball
/// exactly fills yields no approach.
pub fn approaches(ball: &Ball, table: DVec2, skip_pinned: bool) -> [Option<Approach>; 2] {
    let horizontal = axis_approach(
        ball.pos.x,
        ball.dir.x,
        table.x,
        ball.radius,
        (Edge::Left, Edge::Right),
        skip_pinned,
    );
    let vertical = axis_approach(
        ball.pos.y,
        ball.dir.y,
        table.y,
        ball.radius,
        (Edge::Bottom, Edge::Top),
        skip_pinned,
    );
    if ball.dir.x > 0.0 && ball.dir.y > 0.0 {
        [vertical, horizontal]
    } else {
        [horizontal, vertical]
    }
}

/// Soonest candidate
///
/// A later candidate replaces the current pick only when it is sooner by
/// more than `tolerance`, so near-ties go to the earlier-listed wall.
pub fn soonest<I>(candidates: I, tolerance: f64) -> Option<Candidate>
where
    I: IntoIterator<Item = Candidate>,
{
    candidates.into_iter().fold(None, |best, c| match best {
        Some(b) if c.time >= b.time - tolerance => Some(b),
        _ => Some(c),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(x: f64, y: f64, dx: f64, dy: f64) -> Ball {
        Ball {
            pos: DVec2::new(x, y),
            dir: DVec2::new(dx, dy).normalize(),
            speed: 10.0,
            radius: 1.0,
        }
    }

    const TABLE: DVec2 = DVec2::new(10.0, 10.0);

    #[test]
    fn test_axis_aligned_has_one_approach() {
        let [first, second] = approaches(&ball(2.0, 2.0, 0.0, 1.0), TABLE, false);
        assert!(first.is_none());
        let second = second.unwrap();
        assert_eq!(second.edge, Edge::Top);
        assert!((second.distance - 7.0).abs() < 1e-12);

        let found: Vec<_> = approaches(&ball(2.0, 2.0, 0.0, -1.0), TABLE, true)
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].edge, Edge::Bottom);

        let [first, second] = approaches(&ball(2.0, 2.0, -1.0, 0.0), TABLE, false);
        assert_eq!(first.unwrap().edge, Edge::Left);
        assert!((first.unwrap().distance - 1.0).abs() < 1e-12);
        assert!(second.is_none());
    }

    #[test]
    fn test_diagonal_ordering() {
        let order = |dx, dy| {
            let [a, b] = approaches(&ball(5.0, 5.0, dx, dy), TABLE, false);
            (a.unwrap().edge, b.unwrap().edge)
        };
        assert_eq!(order(1.0, 1.0), (Edge::Top, Edge::Right));
        assert_eq!(order(1.0, -1.0), (Edge::Right, Edge::Bottom));
        assert_eq!(order(-1.0, -1.0), (Edge::Left, Edge::Bottom));
        assert_eq!(order(-1.0, 1.0), (Edge::Left, Edge::Top));
    }

    #[test]
    fn test_pinned_axis() {
        // Ball exactly as wide as the table
        let b = Ball {
            pos: DVec2::new(5.0, 2.0),
            dir: DVec2::new(1.0, 1.0).normalize(),
            speed: 10.0,
            radius: 5.0,
        };
        let table = DVec2::new(10.0, 20.0);

        let [first, second] = approaches(&b, table, true);
        assert_eq!(first.unwrap().edge, Edge::Top);
        assert!(second.is_none());

        // Without skipping, the pinned axis touches its wall at distance 0
        let [first, second] = approaches(&b, table, false);
        assert_eq!(first.unwrap().edge, Edge::Top);
        let second = second.unwrap();
        assert_eq!(second.edge, Edge::Right);
        assert_eq!(second.distance, 0.0);
    }

    #[test]
    fn test_soonest_strict_and_tolerant() {
        let top = Candidate { edge: Edge::Top, time: 1.0 };
        let right = Candidate { edge: Edge::Right, time: 0.9995 };
        assert_eq!(soonest([top, right], 0.0).unwrap().edge, Edge::Right);
        assert_eq!(soonest([top, right], 1e-3).unwrap().edge, Edge::Top);
        // Exact tie keeps the first
        let right = Candidate { edge: Edge::Right, time: 1.0 };
        assert_eq!(soonest([top, right], 0.0).unwrap().edge, Edge::Top);
        assert_eq!(soonest([right, top], 0.0).unwrap().edge, Edge::Right);
        assert!(soonest(std::iter::empty(), 0.0).is_none());
    }

    #[test]
    fn test_reflect_and_contact() {
        let dir = DVec2::new(0.6, 0.8);
        assert_eq!(Edge::Right.reflect(dir), DVec2::new(-0.6, 0.8));
        assert_eq!(Edge::Top.reflect(dir), DVec2::new(0.6, -0.8));
        assert_eq!(Edge::Top.contact(TABLE, 1.0), 9.0);
        assert_eq!(Edge::Left.contact(TABLE, 1.0), 1.0);
        // Reflection agrees with v - 2(v·n)n
        for edge in [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right] {
            let n = edge.inward_normal();
            let expected = dir - 2.0 * dir.dot(n) * n;
            assert!((edge.reflect(dir) - expected).length() < 1e-12);
        }
    }
}
