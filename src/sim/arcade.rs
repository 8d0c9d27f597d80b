//! Arcade physics helpers
//!
//! Linear motion, world-bounds bounce and box overlap. Nothing here knows
//! about goals or scores; the session composes these per tick.

use glam::Vec2;

use super::body::PhysicsBody;

/// Velocity that moves `from` toward `to` at `speed`.
///
/// Zero if the two points coincide.
pub fn velocity_toward(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    (to - from).normalize_or_zero() * speed
}

/// Advance a body along its velocity
pub fn integrate<B: PhysicsBody>(body: &mut B, dt: f32) {
    let pos = body.position() + body.velocity() * dt;
    body.set_position(pos);
}

/// Keep a body's box inside `[0, world]`, reflecting velocity by its bounce.
///
/// Returns true if the body touched a wall. Bodies that do not collide with
/// world bounds are left alone.
pub fn collide_world_bounds<B: PhysicsBody>(body: &mut B, world: Vec2) -> bool {
    if !body.collides_world_bounds() {
        return false;
    }

    let half = body.half_extents();
    let bounce = body.bounce();
    let mut pos = body.position();
    let mut vel = body.velocity();
    let mut hit = false;

    // Boxes larger than the world get centred on that axis
    let (lo_x, hi_x) = axis_range(half.x, world.x);
    let (lo_y, hi_y) = axis_range(half.y, world.y);

    if pos.x < lo_x {
        pos.x = lo_x;
        vel.x = vel.x.abs() * bounce.x;
        hit = true;
    } else if pos.x > hi_x {
        pos.x = hi_x;
        vel.x = -vel.x.abs() * bounce.x;
        hit = true;
    }

    if pos.y < lo_y {
        pos.y = lo_y;
        vel.y = vel.y.abs() * bounce.y;
        hit = true;
    } else if pos.y > hi_y {
        pos.y = hi_y;
        vel.y = -vel.y.abs() * bounce.y;
        hit = true;
    }

    if hit {
        body.set_position(pos);
        body.set_velocity(vel);
    }
    hit
}

fn axis_range(half: f32, extent: f32) -> (f32, f32) {
    if extent < half * 2.0 {
        let mid = extent / 2.0;
        (mid, mid)
    } else {
        (half, extent - half)
    }
}

/// True if two bodies' boxes overlap
pub fn overlaps<A: PhysicsBody, B: PhysicsBody>(a: &A, b: &B) -> bool {
    a.bounds().overlaps(&b.bounds())
}
