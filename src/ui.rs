//! HUD layout
//!
//! The score label hugs the top-left corner and the shoot button sits
//! centred near the bottom edge. Both anchors are recomputed from the
//! viewport on every resize.

use glam::Vec2;

use crate::platform::Viewport;

/// Score label offset from the top-left corner
pub const SCORE_TEXT_POS: Vec2 = Vec2::new(10.0, 10.0);
/// Shoot button centre sits this far above the bottom edge
pub const SHOOT_BUTTON_BOTTOM: f32 = 80.0;

/// Screen anchors for the HUD widgets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudLayout {
    /// Top-left of the score label
    pub score_text: Vec2,
    /// Centre of the shoot button
    pub shoot_button: Vec2,
}

impl HudLayout {
    pub fn for_viewport(viewport: &Viewport) -> Self {
        Self {
            score_text: SCORE_TEXT_POS,
            shoot_button: Vec2::new(viewport.width / 2.0, viewport.height - SHOOT_BUTTON_BOTTOM),
        }
    }
}

/// Text for the score label
pub fn score_label(score: u32) -> String {
    format!("Goals: {}", score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_follows_viewport() {
        let layout = HudLayout::for_viewport(&Viewport::new(800.0, 600.0).unwrap());
        assert_eq!(layout.score_text, Vec2::new(10.0, 10.0));
        assert_eq!(layout.shoot_button, Vec2::new(400.0, 520.0));

        let layout = HudLayout::for_viewport(&Viewport::new(1280.0, 720.0).unwrap());
        assert_eq!(layout.shoot_button, Vec2::new(640.0, 640.0));
    }

    #[test]
    fn test_score_label() {
        assert_eq!(score_label(0), "Goals: 0");
        assert_eq!(score_label(12), "Goals: 12");
    }
}
