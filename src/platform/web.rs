//! Browser glue: window size, orientation lock, config element

use wasm_bindgen_futures::JsFuture;
use web_sys::OrientationLockType;

use super::{PlatformError, Viewport};

/// Current window inner size, if the window has one
pub fn window_viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Viewport::new(width as f32, height as f32)
}

/// Ask the browser to keep the screen in landscape
pub async fn lock_landscape() -> Result<(), PlatformError> {
    let screen = web_sys::window()
        .and_then(|w| w.screen().ok())
        .ok_or(PlatformError::OrientationLockUnavailable)?;

    let promise = screen
        .orientation()
        .lock(OrientationLockType::Landscape)
        .map_err(|e| PlatformError::OrientationLockRejected(format!("{:?}", e)))?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| PlatformError::OrientationLockRejected(format!("{:?}", e)))
}

/// Text of the `#match-config` element, if the page provides one
pub fn config_json() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let text = document.get_element_by_id("match-config")?.text_content()?;
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
