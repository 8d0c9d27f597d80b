//! Match session
//!
//! Owns everything that changes during a match: score, speeds, the three
//! bodies and the HUD anchors. One session lives for the whole page; there
//! is no save/restore.

use glam::Vec2;

use super::arcade::velocity_toward;
use super::body::{ArcadeBody, PhysicsBody};
use super::goal::oscillation_band;
use crate::clamp_range;
use crate::config::MatchConfig;
use crate::consts::{BALL_RADIUS, GOAL_HALF_EXTENTS, GOAL_SCALE, PLAYER_HALF_EXTENTS};
use crate::platform::Viewport;
use crate::ui::HudLayout;

/// Ball lifecycle. "Scored" collapses straight back to `Attached`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallState {
    /// Resting next to the player, waiting for a shot
    Attached,
    /// Travelling toward the goal
    InFlight,
}

/// Things that happened during a tick, for the host to react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    Shot { velocity: Vec2 },
    GoalScored { score: u32 },
    DifficultyRaised { goal_speed: f32, ball_speed: f32 },
    Resized { width: f32, height: f32 },
}

/// A single match
#[derive(Debug, Clone)]
pub struct MatchSession<B: PhysicsBody = ArcadeBody> {
    pub config: MatchConfig,
    pub viewport: Viewport,
    pub score: u32,
    /// Goal vertical speed (pixels/s)
    pub goal_speed: f32,
    /// Ball launch speed (pixels/s)
    pub ball_speed: f32,
    /// Score at which the difficulty ramp last fired
    pub previous_score: u32,
    pub goal: B,
    pub player: B,
    pub ball: B,
    pub ball_state: BallState,
    pub hud: HudLayout,
    events: Vec<SessionEvent>,
}

impl MatchSession<ArcadeBody> {
    /// New match with arcade bodies sized for the default sprites
    pub fn new(config: MatchConfig, viewport: Viewport) -> Self {
        let goal = ArcadeBody::new(Vec2::ZERO, GOAL_HALF_EXTENTS.into());
        let player = ArcadeBody::new(Vec2::ZERO, PLAYER_HALF_EXTENTS.into());
        let ball = ArcadeBody::new(Vec2::ZERO, Vec2::splat(BALL_RADIUS));
        Self::with_bodies(config, viewport, goal, player, ball)
    }
}

impl<B: PhysicsBody> MatchSession<B> {
    /// New match driving caller-supplied bodies.
    ///
    /// Bodies are positioned and configured here; whatever state they carry
    /// in is overwritten.
    pub fn with_bodies(
        config: MatchConfig,
        viewport: Viewport,
        mut goal: B,
        mut player: B,
        mut ball: B,
    ) -> Self {
        let (w, h) = (viewport.width, viewport.height);

        goal.set_position(Vec2::new(w - config.goal_inset, h / 2.0));
        goal.set_scale(GOAL_SCALE);
        goal.set_immovable(true);
        goal.set_velocity(Vec2::ZERO);

        player.set_position(Vec2::new(config.player_x, h / 2.0));
        player.set_collide_world_bounds(true);
        player.set_velocity(Vec2::ZERO);

        ball.set_collide_world_bounds(true);
        ball.set_bounce(Vec2::ONE);

        let mut session = Self {
            goal_speed: config.initial_goal_speed,
            ball_speed: config.initial_ball_speed,
            config,
            viewport,
            score: 0,
            previous_score: 0,
            goal,
            player,
            ball,
            ball_state: BallState::Attached,
            hud: HudLayout::for_viewport(&viewport),
            events: Vec::new(),
        };
        session.attach_ball();
        session
    }

    /// Where the ball rests when attached
    pub fn ball_rest_position(&self) -> Vec2 {
        self.player.position() + Vec2::new(self.config.ball_offset, 0.0)
    }

    /// Put the ball back next to the player, stopped
    pub fn attach_ball(&mut self) {
        let rest = self.ball_rest_position();
        self.ball.set_position(rest);
        self.ball.set_velocity(Vec2::ZERO);
        self.ball_state = BallState::Attached;
    }

    /// Fire the ball from the player straight at the goal's current position.
    ///
    /// Re-fires from the player if the ball is already in flight.
    pub fn shoot(&mut self) {
        let from = self.ball_rest_position();
        self.ball.set_position(from);
        let velocity = velocity_toward(from, self.goal.position(), self.ball_speed);
        self.ball.set_velocity(velocity);
        self.ball_state = BallState::InFlight;
        self.events.push(SessionEvent::Shot { velocity });
    }

    /// Ball reached the goal
    pub fn on_goal_scored(&mut self) {
        self.score += 1;
        self.attach_ball();
        log::debug!("Goal! score = {}", self.score);
        self.events.push(SessionEvent::GoalScored { score: self.score });
        self.apply_difficulty_ramp();
    }

    /// Raise both speeds once per ramp threshold.
    ///
    /// Returns true if the ramp fired.
    pub fn apply_difficulty_ramp(&mut self) -> bool {
        let score = self.score;
        if score == 0 || score % self.config.ramp_every != 0 || score == self.previous_score {
            return false;
        }

        self.goal_speed += self.config.goal_speed_step;
        self.ball_speed += self.config.ball_speed_step;
        self.previous_score = score;
        log::info!(
            "Difficulty raised at {} goals: goal speed {}, ball speed {}",
            score,
            self.goal_speed,
            self.ball_speed
        );
        self.events.push(SessionEvent::DifficultyRaised {
            goal_speed: self.goal_speed,
            ball_speed: self.ball_speed,
        });
        true
    }

    /// Reposition everything for a new viewport size. Idempotent.
    pub fn resize(&mut self, viewport: Viewport) {
        let (w, h) = (viewport.width, viewport.height);
        self.viewport = viewport;

        let (lo, hi) = oscillation_band(h, self.config.goal_margin);
        let goal_y = clamp_range(self.goal.position().y, lo, hi);
        self.goal.set_position(Vec2::new(w - self.config.goal_inset, goal_y));

        let player_y = clamp_range(
            self.player.position().y,
            0.0,
            h - self.config.player_bottom_margin,
        );
        self.player.set_position(Vec2::new(self.config.player_x, player_y));

        // Ball moves with the player; a shot in flight keeps its velocity
        let rest = self.ball_rest_position();
        self.ball.set_position(rest);
        self.hud = HudLayout::for_viewport(&viewport);

        log::debug!("Resized to {}x{}", w, h);
        self.events.push(SessionEvent::Resized { width: w, height: h });
    }

    /// Take all events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Score label text
    pub fn score_text(&self) -> String {
        crate::ui::score_label(self.score)
    }
}
