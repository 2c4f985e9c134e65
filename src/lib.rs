//! MDR shell: boot sequence, idle screen and numbers panel.
//!
//! This crate contains everything except the SDL2 window loop, so the screen
//! logic can be unit tested on the host against
//! [`MockDisplay`](embedded_graphics::mock_display::MockDisplay):
//!
//! - [`ui`]: top-level [`UiManager`] and its [`UiState`] switcher
//! - [`screens`]: boot sequence, idle screen and numbers panel
//! - [`image_display`]: shared image loading/drawing collaborator
//! - [`assets`]: boot text and font atlas loading
//! - [`frame`]: per-frame context and polled input
//! - [`viewport`]: width-relative rescaling of scale/speed
//! - [`animations`]: reveal, blink and jiggle helpers
//! - [`config`], [`colors`], [`styles`]: constants and pre-computed styles

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod assets;
pub mod colors;
pub mod config;
pub mod error;
pub mod frame;
pub mod image_display;
pub mod screens;
pub mod styles;
pub mod timing;
pub mod ui;
pub mod viewport;
pub mod widgets;

// Re-export commonly used items
pub use config::Settings;
pub use error::AssetError;
pub use frame::{Frame, Input, SettingsNav};
pub use ui::{UiManager, UiState};
