//! Goal oscillation
//!
//! The goal ping-pongs vertically between two turn points derived from the
//! current viewport height. Turn points are recomputed on every call, so a
//! resize moves them immediately.

use crate::clamp_range;

/// Vertical range the goal centre is confined to: `[margin, height - margin]`.
///
/// Viewports shorter than `2 * margin` collapse the band to the centre line.
pub fn oscillation_band(viewport_height: f32, margin: f32) -> (f32, f32) {
    if viewport_height < margin * 2.0 {
        let mid = viewport_height.max(0.0) / 2.0;
        (mid, mid)
    } else {
        (margin, viewport_height - margin)
    }
}

/// Vertical velocity the goal should have this tick.
///
/// Above the band it heads down, below the band it heads up, and a stopped
/// goal is kicked off downward. Otherwise the current velocity is kept.
pub fn next_goal_velocity(
    y: f32,
    viewport_height: f32,
    velocity: f32,
    goal_speed: f32,
    margin: f32,
) -> f32 {
    let (lo, hi) = oscillation_band(viewport_height, margin);
    if y < lo {
        goal_speed
    } else if y > hi {
        -goal_speed
    } else if velocity == 0.0 {
        goal_speed
    } else {
        velocity
    }
}

/// Move the goal by `velocity * dt`, reflecting at the band edges.
///
/// Returns the new `(y, velocity)`. Position never leaves the band.
pub fn step_goal(
    y: f32,
    velocity: f32,
    dt: f32,
    viewport_height: f32,
    margin: f32,
) -> (f32, f32) {
    let (lo, hi) = oscillation_band(viewport_height, margin);
    let next = y + velocity * dt;
    if next < lo {
        (lo, velocity.abs())
    } else if next > hi {
        (hi, -velocity.abs())
    } else {
        (clamp_range(next, lo, hi), velocity)
    }
}
