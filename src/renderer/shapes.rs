//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::{MatchSession, PhysicsBody};

/// Thickness of the goal frame (pixels)
const POST_THICKNESS: f32 = 6.0;
/// Segments used for the ball
const BALL_SEGMENTS: u32 = 24;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Goal: net fill with a frame open toward the player
fn goal(min: Vec2, max: Vec2) -> Vec<Vertex> {
    let t = POST_THICKNESS;
    let mut vertices = rect(min, max, colors::GOAL_NET);
    // Crossbar, bottom bar, back post
    vertices.extend(rect(min, Vec2::new(max.x, min.y + t), colors::GOAL_POST));
    vertices.extend(rect(Vec2::new(min.x, max.y - t), max, colors::GOAL_POST));
    vertices.extend(rect(Vec2::new(max.x - t, min.y), max, colors::GOAL_POST));
    vertices
}

/// All vertices for one frame, in viewport pixel coordinates
pub fn scene<B: PhysicsBody>(session: &MatchSession<B>) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    // Halfway line
    let mid = session.viewport.width / 2.0;
    vertices.extend(rect(
        Vec2::new(mid - 1.0, 0.0),
        Vec2::new(mid + 1.0, session.viewport.height),
        colors::PITCH_LINE,
    ));

    let bounds = session.goal.bounds();
    vertices.extend(goal(bounds.min, bounds.max));

    let bounds = session.player.bounds();
    vertices.extend(rect(bounds.min, bounds.max, colors::PLAYER));

    let radius = session.ball.half_extents().x;
    vertices.extend(circle(
        session.ball.position(),
        radius,
        colors::BALL,
        BALL_SEGMENTS,
    ));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use crate::platform::Viewport;

    #[test]
    fn test_rect_is_two_triangles() {
        let v = rect(Vec2::ZERO, Vec2::new(10.0, 5.0), colors::BALL);
        assert_eq!(v.len(), 6);
        assert!(v.iter().all(|v| v.position[0] >= 0.0 && v.position[0] <= 10.0));
    }

    #[test]
    fn test_circle_vertex_count() {
        let v = circle(Vec2::new(5.0, 5.0), 3.0, colors::BALL, 12);
        assert_eq!(v.len(), 36);
    }

    #[test]
    fn test_scene_contains_every_entity() {
        let session = MatchSession::new(MatchConfig::default(), Viewport::new(800.0, 600.0).unwrap());
        let v = scene(&session);
        // line + goal (4 rects) + player + ball
        assert_eq!(v.len(), 6 + 24 + 6 + (BALL_SEGMENTS * 3) as usize);
    }
}
