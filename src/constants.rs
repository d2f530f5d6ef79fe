// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use std::time::Duration;

/// Success transition timings
///
/// These only mask the gap between scan completion and the browser hand-off.
pub mod transition {
    use super::Duration;

    /// Pause after swapping to the "found" artwork
    pub const FOUND_DELAY: Duration = Duration::from_millis(400);

    /// Pause after swapping to the "opening" artwork, right before launching the browser
    pub const OPENING_DELAY: Duration = Duration::from_millis(150);
}

/// Default lifetime of a transient toast message
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Frames larger than this (in either dimension) are downscaled before decoding
pub const DEFAULT_MAX_SCAN_DIMENSION: u32 = 1280;

/// Polling interval while following an image source for a code to appear
pub const DEFAULT_FOLLOW_INTERVAL: Duration = Duration::from_millis(500);

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "qrscan";

/// Config file name inside [`APP_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Supported UI languages, in matching priority order
///
/// The first entry that appears as a token of the device language code wins.
pub const SUPPORTED_LANGUAGES: [&str; 2] = ["es", "en"];

/// Language used when the device language matches nothing supported
pub const FALLBACK_LANGUAGE: &str = "en";
