//! Physics body port
//!
//! The session never touches engine objects directly. It drives anything
//! that implements [`PhysicsBody`]; [`ArcadeBody`] is the built-in arcade
//! implementation used by the browser build and the tests.

use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// True if the two boxes share any area (touching edges count)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// What the session needs from a physics body
pub trait PhysicsBody {
    fn position(&self) -> Vec2;
    fn set_position(&mut self, pos: Vec2);
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, vel: Vec2);
    /// Collision half extents, already scaled
    fn half_extents(&self) -> Vec2;

    fn set_collide_world_bounds(&mut self, collide: bool);
    fn collides_world_bounds(&self) -> bool;
    /// Restitution applied when bouncing off world bounds
    fn set_bounce(&mut self, bounce: Vec2);
    fn bounce(&self) -> Vec2;
    fn set_immovable(&mut self, immovable: bool);
    fn is_immovable(&self) -> bool;
    /// Scale the collision box (and the sprite, for renderers that care)
    fn set_scale(&mut self, scale: f32);

    /// Collision box in world space
    fn bounds(&self) -> Aabb {
        Aabb::from_center(self.position(), self.half_extents())
    }

    fn set_velocity_y(&mut self, vy: f32) {
        let vel = self.velocity();
        self.set_velocity(Vec2::new(vel.x, vy));
    }
}

/// Arcade-style body: a box with linear velocity
#[derive(Debug, Clone, PartialEq)]
pub struct ArcadeBody {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Unscaled half extents
    pub size: Vec2,
    pub scale: f32,
    pub bounce: Vec2,
    pub collide_world_bounds: bool,
    pub immovable: bool,
}

impl ArcadeBody {
    pub fn new(pos: Vec2, half_extents: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size: half_extents,
            scale: 1.0,
            bounce: Vec2::ZERO,
            collide_world_bounds: false,
            immovable: false,
        }
    }
}

impl PhysicsBody for ArcadeBody {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    fn velocity(&self) -> Vec2 {
        self.vel
    }

    fn set_velocity(&mut self, vel: Vec2) {
        self.vel = vel;
    }

    fn half_extents(&self) -> Vec2 {
        self.size * self.scale
    }

    fn set_collide_world_bounds(&mut self, collide: bool) {
        self.collide_world_bounds = collide;
    }

    fn collides_world_bounds(&self) -> bool {
        self.collide_world_bounds
    }

    fn set_bounce(&mut self, bounce: Vec2) {
        self.bounce = bounce;
    }

    fn bounce(&self) -> Vec2 {
        self.bounce
    }

    fn set_immovable(&mut self, immovable: bool) {
        self.immovable = immovable;
    }

    fn is_immovable(&self) -> bool {
        self.immovable
    }

    fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::from_center(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let b = Aabb::from_center(Vec2::new(15.0, 5.0), Vec2::splat(10.0));
        let c = Aabb::from_center(Vec2::new(25.0, 0.0), Vec2::splat(4.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_scale_grows_bounds() {
        let mut body = ArcadeBody::new(Vec2::new(100.0, 100.0), Vec2::new(10.0, 20.0));
        body.set_scale(1.5);
        let bounds = body.bounds();
        assert_eq!(bounds.min, Vec2::new(85.0, 70.0));
        assert_eq!(bounds.max, Vec2::new(115.0, 130.0));
    }

    #[test]
    fn test_set_velocity_y_keeps_x() {
        let mut body = ArcadeBody::new(Vec2::ZERO, Vec2::ONE);
        body.set_velocity(Vec2::new(3.0, 4.0));
        body.set_velocity_y(-7.0);
        assert_eq!(body.velocity(), Vec2::new(3.0, -7.0));
    }
}
