//! Match tuning
//!
//! Every knob has a default matching the classic game, so an empty JSON
//! object is a valid config. Hosts can override any subset.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors produced while loading a [`MatchConfig`]
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The JSON could not be parsed
    Parse(String),
    /// A field holds a value the simulation cannot work with
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "match config parse error: {msg}"),
            ConfigError::Invalid(field) => write!(f, "match config has invalid {field}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Tuning for a single match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    // === Speeds ===
    /// Goal vertical speed at kickoff (pixels/s)
    pub initial_goal_speed: f32,
    /// Ball launch speed at kickoff (pixels/s)
    pub initial_ball_speed: f32,

    // === Difficulty ramp ===
    /// Ramp fires at every multiple of this score
    pub ramp_every: u32,
    pub goal_speed_step: f32,
    pub ball_speed_step: f32,

    // === Layout ===
    /// Goal turns around this far from the top and bottom edges
    pub goal_margin: f32,
    /// Goal x is `width - goal_inset`
    pub goal_inset: f32,
    pub player_x: f32,
    /// Player y is clamped to `height - player_bottom_margin`
    pub player_bottom_margin: f32,
    /// Ball rests at `player + (ball_offset, 0)`
    pub ball_offset: f32,

    // === Viewport before the host reports one ===
    pub default_width: f32,
    pub default_height: f32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            initial_goal_speed: GOAL_START_SPEED,
            initial_ball_speed: BALL_START_SPEED,

            ramp_every: RAMP_EVERY,
            goal_speed_step: GOAL_SPEED_STEP,
            ball_speed_step: BALL_SPEED_STEP,

            goal_margin: GOAL_MARGIN,
            goal_inset: GOAL_INSET,
            player_x: PLAYER_X,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,
            ball_offset: BALL_OFFSET,

            default_width: DEFAULT_WIDTH,
            default_height: DEFAULT_HEIGHT,
        }
    }
}

impl MatchConfig {
    /// Parse and validate a config from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break the session invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.initial_goal_speed) {
            return Err(ConfigError::Invalid("initial_goal_speed"));
        }
        if !positive(self.initial_ball_speed) {
            return Err(ConfigError::Invalid("initial_ball_speed"));
        }
        if self.ramp_every == 0 {
            return Err(ConfigError::Invalid("ramp_every"));
        }
        // Steps may be zero (no ramp) but never shrink the speeds
        if !non_negative(self.goal_speed_step) {
            return Err(ConfigError::Invalid("goal_speed_step"));
        }
        if !non_negative(self.ball_speed_step) {
            return Err(ConfigError::Invalid("ball_speed_step"));
        }
        if !non_negative(self.goal_margin) {
            return Err(ConfigError::Invalid("goal_margin"));
        }
        if !non_negative(self.player_bottom_margin) {
            return Err(ConfigError::Invalid("player_bottom_margin"));
        }
        if !positive(self.default_width) || !positive(self.default_height) {
            return Err(ConfigError::Invalid("default viewport"));
        }
        Ok(())
    }

    /// Load from JSON if present, falling back to defaults on any error
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json {
            Some(json) => match Self::from_json(json) {
                Ok(config) => {
                    log::info!("Loaded match config");
                    config
                }
                Err(e) => {
                    log::warn!("{e}; using default match config");
                    Self::default()
                }
            },
            None => {
                log::info!("Using default match config");
                Self::default()
            }
        }
    }
}

/// Strictly above zero; NaN fails
fn positive(x: f32) -> bool {
    x.partial_cmp(&0.0) == Some(Ordering::Greater)
}

/// Zero or above; NaN fails
fn non_negative(x: f32) -> bool {
    matches!(x.partial_cmp(&0.0), Some(Ordering::Greater | Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = MatchConfig::from_json("{}").unwrap();
        assert_eq!(config, MatchConfig::default());
        assert_eq!(config.initial_goal_speed, 100.0);
        assert_eq!(config.initial_ball_speed, 500.0);
        assert_eq!(config.ramp_every, 5);
    }

    #[test]
    fn test_partial_override() {
        let config = MatchConfig::from_json(r#"{"ramp_every": 3, "ball_speed_step": 75}"#).unwrap();
        assert_eq!(config.ramp_every, 3);
        assert_eq!(config.ball_speed_step, 75.0);
        assert_eq!(config.goal_speed_step, 20.0);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            MatchConfig::from_json(r#"{"ramp_every": 0}"#),
            Err(ConfigError::Invalid("ramp_every"))
        );
        assert_eq!(
            MatchConfig::from_json(r#"{"initial_goal_speed": -1}"#),
            Err(ConfigError::Invalid("initial_goal_speed"))
        );
        assert!(matches!(
            MatchConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_nan() {
        let config = MatchConfig {
            initial_ball_speed: f32::NAN,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Invalid("initial_ball_speed"))
        );

        let config = MatchConfig {
            goal_margin: f32::NAN,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::Invalid("goal_margin")));
    }

    #[test]
    fn test_zero_steps_allowed() {
        let config = MatchConfig {
            goal_speed_step: 0.0,
            ball_speed_step: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        assert_eq!(MatchConfig::load_or_default(None), MatchConfig::default());
        assert_eq!(
            MatchConfig::load_or_default(Some("{broken")),
            MatchConfig::default()
        );
        let custom = MatchConfig::load_or_default(Some(r#"{"goal_margin": 30}"#));
        assert_eq!(custom.goal_margin, 30.0);
    }
}
