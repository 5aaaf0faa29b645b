//! Time-to-wall under constant deceleration
//!
//! The friction model moves the ball `s·t − (k/2)·t²` along an axis, so the
//! time to cover a distance is a root of a quadratic. Roots are taken in the
//! `2c / (−b ± √disc)` form, which stays accurate when `b²` dwarfs `4ac`.

/// Solve `a·t² + b·t + c = 0`
///
/// Returns the root of smaller magnitude, the double root when the
/// discriminant is zero, or `None` when there is no real root.
/// Negative roots are returned as-is; callers decide whether they count.
pub fn solve(a: f64, b: f64, c: f64) -> Option<f64> {
    let disc = b * b - 4.0 * a * c;
    let root = if disc > 0.0 {
        let sqrt_disc = disc.sqrt();
        let root1 = (2.0 * c) / (-b + sqrt_disc);
        let root2 = (2.0 * c) / (-b - sqrt_disc);
        if root1.abs() <= root2.abs() { root1 } else { root2 }
    } else if disc == 0.0 {
        (2.0 * c) / -b
    } else {
        return None;
    };
    root.is_finite().then_some(root)
}

/// Earliest time at which a decelerating ball covers `distance`
///
/// `speed` and `deceleration` are along the axis of travel (both positive).
/// `None` when the ball stops short.
pub fn time_to_cover(distance: f64, speed: f64, deceleration: f64) -> Option<f64> {
    if distance <= 0.0 {
        return Some(0.0);
    }
    solve(deceleration / 2.0, -speed, distance).filter(|t| *t >= 0.0)
}
