//! Kickshot - kick the ball into a moving goal
//!
//! Core modules:
//! - `sim`: Match session (goal motion, scoring, difficulty ramp, resize)
//! - `config`: Data-driven match tuning
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser/native platform abstraction
//! - `ui`: HUD layout

pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod ui;

pub use config::{ConfigError, MatchConfig};
pub use platform::{PlatformError, Viewport};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Viewport used before the host reports its real size
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;

    /// Goal speed at kickoff (pixels/s)
    pub const GOAL_START_SPEED: f32 = 100.0;
    /// Ball launch speed at kickoff (pixels/s)
    pub const BALL_START_SPEED: f32 = 500.0;

    /// Difficulty ramps every this many goals
    pub const RAMP_EVERY: u32 = 5;
    pub const GOAL_SPEED_STEP: f32 = 20.0;
    pub const BALL_SPEED_STEP: f32 = 50.0;

    /// Distance from top/bottom edge where the goal turns around
    pub const GOAL_MARGIN: f32 = 50.0;
    /// Goal sits this far in from the right edge
    pub const GOAL_INSET: f32 = 100.0;
    /// Player stands at this x
    pub const PLAYER_X: f32 = 100.0;
    /// Player centre stays at least this far above the bottom edge
    pub const PLAYER_BOTTOM_MARGIN: f32 = 50.0;
    /// Ball rests this far to the right of the player
    pub const BALL_OFFSET: f32 = 50.0;

    /// Sprite half extents (goal image is drawn at 1.5x)
    pub const GOAL_HALF_EXTENTS: (f32, f32) = (16.0, 48.0);
    pub const GOAL_SCALE: f32 = 1.5;
    pub const PLAYER_HALF_EXTENTS: (f32, f32) = (16.0, 24.0);
    pub const BALL_RADIUS: f32 = 10.0;
}

/// Clamp `value` into `[lo, hi]`, collapsing to `lo` if the range is inverted
#[inline]
pub fn clamp_range(value: f32, lo: f32, hi: f32) -> f32 {
    value.min(hi).max(lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_range() {
        assert_eq!(clamp_range(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp_range(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp_range(11.0, 0.0, 10.0), 10.0);
        // Inverted range pins to the lower bound
        assert_eq!(clamp_range(3.0, 5.0, 2.0), 5.0);
    }
}
