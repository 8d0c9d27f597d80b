//! Fixed timestep simulation tick
//!
//! One call per simulation step. Input handlers only set flags on
//! [`TickInput`]; all state changes happen here.

use super::arcade::{collide_world_bounds, integrate, overlaps};
use super::body::PhysicsBody;
use super::goal::{next_goal_velocity, step_goal};
use super::session::{BallState, MatchSession};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame the clock will simulate (seconds)
const MAX_FRAME_DT: f32 = 0.1;

/// Splits animation-frame time into fixed simulation steps
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    accumulator: f32,
}

impl FrameClock {
    /// Add one frame's elapsed time and return how many ticks to run.
    ///
    /// At most `MAX_SUBSTEPS` per frame. Time the cap leaves behind is
    /// dropped so a slow frame cannot pile up a backlog.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        self.accumulator = self.accumulator.min(SIM_DT);
        steps
    }

    /// Unsimulated time carried into the next frame
    pub fn pending(&self) -> f32 {
        self.accumulator
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Shoot button pressed (tap/click/space)
    pub shoot: bool,
}

/// Advance the match by one fixed timestep
pub fn tick<B: PhysicsBody>(session: &mut MatchSession<B>, input: &TickInput, dt: f32) {
    if input.shoot {
        session.shoot();
    }

    update_goal(session, dt);
    update_ball(session, dt);

    if session.ball_state == BallState::InFlight && overlaps(&session.ball, &session.goal) {
        session.on_goal_scored();
    }
}

fn update_goal<B: PhysicsBody>(session: &mut MatchSession<B>, dt: f32) {
    let height = session.viewport.height;
    let margin = session.config.goal_margin;

    let pos = session.goal.position();
    let vy = next_goal_velocity(
        pos.y,
        height,
        session.goal.velocity().y,
        session.goal_speed,
        margin,
    );
    let (y, vy) = step_goal(pos.y, vy, dt, height, margin);

    session.goal.set_position(glam::Vec2::new(pos.x, y));
    session.goal.set_velocity_y(vy);
}

fn update_ball<B: PhysicsBody>(session: &mut MatchSession<B>, dt: f32) {
    match session.ball_state {
        BallState::Attached => {
            // Keep it glued to the player
            let rest = session.ball_rest_position();
            session.ball.set_position(rest);
        }
        BallState::InFlight => {
            integrate(&mut session.ball, dt);
            collide_world_bounds(&mut session.ball, session.viewport.size());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use crate::platform::Viewport;
    use crate::sim::SessionEvent;
    use glam::Vec2;
    use proptest::prelude::*;

    fn session() -> MatchSession {
        MatchSession::new(MatchConfig::default(), Viewport::new(800.0, 600.0).unwrap())
    }

    fn shoot() -> TickInput {
        TickInput { shoot: true }
    }

    #[test]
    fn test_clock_runs_whole_steps() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.advance(SIM_DT * 2.5), 2);
        assert!((clock.pending() - SIM_DT * 0.5).abs() < 1e-6);
        assert_eq!(clock.advance(SIM_DT), 1);
    }

    #[test]
    fn test_clock_drops_backlog_after_slow_frames() {
        let mut clock = FrameClock::default();
        // 0.1 s is twelve steps; only eight run
        assert_eq!(clock.advance(1.0), MAX_SUBSTEPS);
        assert!(clock.pending() <= SIM_DT);

        // Normal frames afterwards stay at one or two steps
        for _ in 0..10 {
            assert!(clock.advance(1.0 / 60.0) <= 3);
            assert!(clock.pending() <= SIM_DT);
        }
    }

    #[test]
    fn test_clock_ignores_negative_time() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.pending(), 0.0);
    }

    #[test]
    fn test_goal_starts_moving_down() {
        let mut s = session();
        assert_eq!(s.goal.velocity().y, 0.0);
        tick(&mut s, &TickInput::default(), SIM_DT);
        assert_eq!(s.goal.velocity().y, 100.0);
        assert!(s.goal.position().y > 300.0);
    }

    #[test]
    fn test_goal_turns_at_bottom() {
        let mut s = session();
        s.goal.set_position(Vec2::new(700.0, 549.5));
        s.goal.set_velocity(Vec2::new(0.0, 100.0));
        tick(&mut s, &TickInput::default(), SIM_DT);
        assert_eq!(s.goal.position().y, 550.0);
        assert_eq!(s.goal.velocity().y, -100.0);

        tick(&mut s, &TickInput::default(), SIM_DT);
        assert!(s.goal.position().y < 550.0);
    }

    #[test]
    fn test_attached_ball_stays_with_player() {
        let mut s = session();
        for _ in 0..10 {
            tick(&mut s, &TickInput::default(), SIM_DT);
        }
        assert_eq!(s.ball.position(), Vec2::new(150.0, 300.0));
        assert_eq!(s.ball_state, BallState::Attached);
    }

    #[test]
    fn test_shot_scores() {
        let mut s = session();
        // Nearly parked goal so the straight shot connects
        s.goal_speed = 1.0;
        tick(&mut s, &shoot(), SIM_DT);
        assert_eq!(s.ball_state, BallState::InFlight);

        let mut ticks = 0;
        while s.score == 0 && ticks < 600 {
            tick(&mut s, &TickInput::default(), SIM_DT);
            ticks += 1;
        }

        assert_eq!(s.score, 1);
        assert_eq!(s.ball_state, BallState::Attached);
        assert_eq!(s.ball.velocity(), Vec2::ZERO);
        assert_eq!(s.ball.position(), s.ball_rest_position());
        assert_eq!(s.goal_speed, 1.0);
        assert_eq!(s.ball_speed, 500.0);

        let events = s.drain_events();
        assert!(matches!(events[0], SessionEvent::Shot { .. }));
        assert!(events.contains(&SessionEvent::GoalScored { score: 1 }));
    }

    #[test]
    fn test_overlap_while_attached_does_not_score() {
        let mut s = session();
        // Goal parked right on top of the resting ball
        s.goal.set_position(s.ball_rest_position());
        tick(&mut s, &TickInput::default(), SIM_DT);
        assert_eq!(s.score, 0);
    }

    #[test]
    fn test_five_shots_ramp_difficulty() {
        let mut s = session();
        s.goal_speed = 1.0;
        for _ in 0..5 {
            tick(&mut s, &shoot(), SIM_DT);
            let mut ticks = 0;
            while s.ball_state == BallState::InFlight && ticks < 1200 {
                tick(&mut s, &TickInput::default(), SIM_DT);
                ticks += 1;
            }
        }
        assert_eq!(s.score, 5);
        assert_eq!(s.goal_speed, 21.0);
        assert_eq!(s.ball_speed, 550.0);
        assert_eq!(s.previous_score, 5);
    }

    #[test]
    fn test_ball_bounces_off_top() {
        let mut s = session();
        s.shoot();
        s.ball.set_position(Vec2::new(300.0, 12.0));
        s.ball.set_velocity(Vec2::new(0.0, -500.0));
        tick(&mut s, &TickInput::default(), SIM_DT);
        assert_eq!(s.ball.position().y, 10.0);
        assert_eq!(s.ball.velocity().y, 500.0);
    }

    proptest! {
        #[test]
        fn prop_goal_stays_in_band(
            steps in prop::collection::vec((any::<bool>(), prop::option::of(0usize..4)), 1..400),
            start_y in 0.0f32..600.0,
        ) {
            let mut s = session();
            s.goal.set_position(Vec2::new(700.0, start_y));
            s.resize(Viewport::new(800.0, 600.0).unwrap());

            let sizes = [(800.0, 600.0), (400.0, 300.0), (1024.0, 768.0), (320.0, 90.0)];
            for (shoot, resize) in steps {
                if let Some(i) = resize {
                    let (w, h) = sizes[i];
                    s.resize(Viewport::new(w, h).unwrap());
                }
                let input = TickInput { shoot };
                tick(&mut s, &input, SIM_DT);

                let (lo, hi) = crate::sim::goal::oscillation_band(s.viewport.height, s.config.goal_margin);
                let y = s.goal.position().y;
                prop_assert!(y >= lo && y <= hi, "goal y {} outside [{}, {}]", y, lo, hi);
            }
        }

        #[test]
        fn prop_ramp_fires_once_per_multiple(goals in 0u32..60) {
            let mut s = session();
            for _ in 0..goals {
                s.on_goal_scored();
                // Repeated overlap callbacks in the same window
                s.apply_difficulty_ramp();
            }
            let ramps = (goals / 5) as f32;
            prop_assert_eq!(s.goal_speed, 100.0 + 20.0 * ramps);
            prop_assert_eq!(s.ball_speed, 500.0 + 50.0 * ramps);
        }

        #[test]
        fn prop_resize_idempotent(
            w in 1.0f32..2000.0,
            h in 1.0f32..2000.0,
            goal_y in -100.0f32..2000.0,
            player_y in -100.0f32..2000.0,
        ) {
            let mut s = session();
            s.goal.set_position(Vec2::new(700.0, goal_y));
            s.player.set_position(Vec2::new(100.0, player_y));
            let vp = Viewport::new(w, h).unwrap();

            s.resize(vp);
            let once = (s.goal.position(), s.player.position(), s.ball.position(), s.hud);
            s.resize(vp);
            prop_assert_eq!(once, (s.goal.position(), s.player.position(), s.ball.position(), s.hud));
        }
    }
}
