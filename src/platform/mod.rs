//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Viewport size
//! - Screen orientation lock
//! - Reading host-supplied match config

use std::fmt;

use glam::Vec2;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Visible play area in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// `None` for empty or non-finite sizes (minimised windows report 0x0)
    pub fn new(width: f32, height: f32) -> Option<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(width) && valid(height) {
            Some(Self { width, height })
        } else {
            None
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Failures from host requests. None of them are fatal.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformError {
    /// The host has no orientation API (desktop browsers, native)
    OrientationLockUnavailable,
    /// The host refused the lock request
    OrientationLockRejected(String),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::OrientationLockUnavailable => {
                write!(f, "screen orientation lock is not supported")
            }
            PlatformError::OrientationLockRejected(reason) => {
                write!(f, "screen orientation lock rejected: {reason}")
            }
        }
    }
}

impl std::error::Error for PlatformError {}

/// Log a failed orientation lock and carry on
pub fn report_orientation_lock(result: Result<(), PlatformError>) {
    match result {
        Ok(()) => log::info!("Screen locked to landscape"),
        Err(e) => log::error!("Failed to lock orientation: {e}"),
    }
}

/// Native builds have no screen orientation to lock
#[cfg(not(target_arch = "wasm32"))]
pub fn lock_landscape() -> Result<(), PlatformError> {
    Err(PlatformError::OrientationLockUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_rejects_empty() {
        assert!(Viewport::new(0.0, 600.0).is_none());
        assert!(Viewport::new(800.0, -1.0).is_none());
        assert!(Viewport::new(f32::NAN, 600.0).is_none());
        assert_eq!(
            Viewport::new(800.0, 600.0).map(|v| v.size()),
            Some(Vec2::new(800.0, 600.0))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PlatformError::OrientationLockRejected("NotSupportedError".into()).to_string(),
            "screen orientation lock rejected: NotSupportedError"
        );
        assert_eq!(
            PlatformError::OrientationLockUnavailable.to_string(),
            "screen orientation lock is not supported"
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_native_lock_is_unavailable() {
        assert_eq!(lock_landscape(), Err(PlatformError::OrientationLockUnavailable));
        // Logged, never panics
        report_orientation_lock(lock_landscape());
    }
}
