// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->u32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32->f32 in graphics calculations

//! MDR desktop shell.
//!
//! Opens an SDL2 window through `embedded-graphics-simulator` and drives the
//! [`UiManager`] once per frame:
//!
//! 1. Poll window events into an [`Input`]
//! 2. Tick the frame clock
//! 3. Update the active screen
//! 4. Draw into the current viewport and present
//!
//! # Keys
//!
//! | Key         | Action                                        |
//! |-------------|-----------------------------------------------|
//! | `Tab`       | Show/hide the settings window                 |
//! | `I`         | Switch between idle screen and numbers panel  |
//! | Left click  | Leave the idle screen with the load animation |
//! | Arrows      | Navigate settings (while shown)               |
//! | `V`         | Cycle viewport sizes                          |
//! | `Escape`    | Quit                                          |
//!
//! Set `RUST_LOG=debug` for state transitions and asset diagnostics.

use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use mdr_shell::colors::BLACK;
use mdr_shell::config::{DEFAULT_VIEWPORT, FRAME_TIME, VIEWPORT_PRESETS};
use mdr_shell::timing::FrameClock;
use mdr_shell::{Input, Settings, SettingsNav, UiManager};

#[derive(Parser, Debug)]
#[command(name = "mdr", version, about = "MDR numbers display shell")]
struct Cli {
    /// Directory holding boot.txt, the font atlas and the logo
    #[arg(long, default_value = "./assets")]
    assets: PathBuf,

    /// Folder name typed at the end of the boot sequence
    #[arg(long)]
    folder_name: Option<String>,

    /// Window pixel scale
    #[arg(long, default_value_t = 1)]
    scale: u32,
}

impl Cli {
    fn settings(&self) -> Settings {
        let mut settings = Settings::default().with_asset_dir(&self.assets);
        if let Some(name) = &self.folder_name {
            settings.folder_name.clone_from(name);
        }
        settings
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = cli.settings();
    log::info!("Assets from {}", settings.asset_dir.display());

    let mut ui = UiManager::new(&settings).context("failed to load boot assets")?;
    ui.init();

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(DEFAULT_VIEWPORT);
    let output_settings = OutputSettingsBuilder::new().scale(cli.scale.max(1)).build();
    let mut window = Window::new("MDR", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let mut clock = FrameClock::new();
    let mut viewport = DEFAULT_VIEWPORT;
    let mut preset = 0;

    // =========================================================================
    // Main Loop
    // =========================================================================

    loop {
        let frame_start = Instant::now();
        let mut input = Input::default();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    ..
                } => input.left_click = true,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Arrows may repeat, toggles may not
                    let nav = match keycode {
                        Keycode::Up => Some(SettingsNav::Up),
                        Keycode::Down => Some(SettingsNav::Down),
                        Keycode::Left => Some(SettingsNav::Left),
                        Keycode::Right => Some(SettingsNav::Right),
                        _ => None,
                    };
                    if nav.is_some() {
                        input.settings_nav = nav;
                        continue;
                    }
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Escape => return Ok(()),
                        Keycode::Tab => input.toggle_settings = true,
                        Keycode::I => input.toggle_idle = true,
                        Keycode::V => {
                            preset = (preset + 1) % VIEWPORT_PRESETS.len();
                            viewport = VIEWPORT_PRESETS[preset];
                            log::info!("Viewport {}x{}", viewport.width, viewport.height);
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        if !input.is_empty() {
            log::trace!("{input:?}");
        }

        let frame = clock.tick(viewport, input);
        ui.update(&frame);

        display.clear(BLACK).ok();
        ui.draw(&mut display.cropped(&Rectangle::new(Point::zero(), viewport)), &frame);
        window.update(&display);

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}
