//! Application configuration: compile-time constants and runtime [`Settings`].
//!
//! Layout values are `const` so draw code never recomputes them per frame.
//! Anything the user can change from the command line lives in [`Settings`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use embedded_graphics::geometry::Size;

// =============================================================================
// Viewport Configuration
// =============================================================================

/// Width the logo scale and speed values are authored against.
pub const REFERENCE_WIDTH: u32 = 1280;

/// Default viewport (and window) size.
pub const DEFAULT_VIEWPORT: Size = Size::new(1280, 720);

/// Viewport presets cycled with the `V` key to simulate window resizes.
pub const VIEWPORT_PRESETS: [Size; 3] = [Size::new(1280, 720), Size::new(960, 540), Size::new(640, 360)];

/// Settings window width as a fraction of the viewport width.
pub const SETTINGS_WIDTH_RATIO: f32 = 0.4;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~60 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(16);

/// Boot sequence timing, all values in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BootTiming {
    /// Interval between revealed characters in the Text stage.
    pub time_per_letter: f32,
    /// Interval between revealed characters in the FolderName stage.
    pub folder_time_per_letter: f32,
    /// How long the logo stays on screen.
    pub logo_duration: f32,
    /// Pause with blinking cursor after the folder name is complete.
    pub folder_wait: f32,
}

impl BootTiming {
    pub const DEFAULT: Self = Self {
        time_per_letter: 0.01,
        folder_time_per_letter: 0.4,
        logo_duration: 5.0,
        folder_wait: 2.0,
    };
}

impl Default for BootTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// =============================================================================
// Runtime Settings
// =============================================================================

/// Asset locations and boot parameters.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Directory all asset file names are resolved against.
    pub asset_dir: PathBuf,
    /// Boot text, one display line per file line. Required.
    pub boot_text: String,
    /// Font glyph atlas (PNG). Optional, falls back to `ProFont`.
    pub font_atlas: String,
    /// Logo image (PNG). Optional, missing images draw nothing.
    pub logo: String,
    /// Folder name typed out at the end of the boot sequence.
    pub folder_name: String,
    pub timing: BootTiming,
}

impl Settings {
    /// Full path of an asset file name.
    pub fn asset_path(&self, name: &str) -> PathBuf {
        self.asset_dir.join(name)
    }

    pub fn with_asset_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.asset_dir = dir.as_ref().to_path_buf();
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("./assets"),
            boot_text: "boot.txt".to_owned(),
            font_atlas: "Montserrat-Bold.png".to_owned(),
            logo: "lumon-logo.png".to_owned(),
            folder_name: "Cold Harbor".to_owned(),
            timing: BootTiming::DEFAULT,
        }
    }
}
