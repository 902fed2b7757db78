extern crate pollster;
extern crate sdl2;

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use sdl2::event::Event;
use sim_config::MenuConfig;
use sim_core::OverlayPlugin;
use tracing::info;
use ultraviolet::UVec2;

mod demo;
mod egui_platform;
mod overlay_runner;
mod sdl2_system;
mod system;

use overlay_runner::OverlayRunner;
use sdl2_system::ToSystemEventExt;

/// Opens a window with the overlay menu over an empty scene.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Menu config (JSON). Defaults are used when omitted.
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 800)]
    width: u32,
    #[arg(long, default_value_t = 600)]
    height: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut plugin = match &args.config {
        Some(path) => OverlayPlugin::awake_from_path(path)?,
        None => OverlayPlugin::awake(MenuConfig::default()),
    };
    demo::add_demo_tabs(plugin.menu_mut());
    info!(
        toggle_key = %plugin.menu().toggle_key(),
        "Press the toggle key to show the menu"
    );

    let sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let sdl_window = sdl
        .video()
        .map_err(|e| anyhow!(e))?
        .window("SimMenu", args.width, args.height)
        .position_centered()
        .resizable()
        .metal_view()
        .build()?;

    let drawable_size = sdl_window.drawable_size();
    let mut runner = pollster::block_on(OverlayRunner::from_system_window(
        &sdl_window,
        UVec2 {
            x: drawable_size.0,
            y: drawable_size.1,
        },
        plugin,
    ))
    .context("Failed to create overlay runner")?;

    // We update at 60fps; VSync paces the draws.
    let tick_rate = Duration::from_millis(1000 / 60);
    let mut last_tick = Instant::now();

    let mut event_pump = sdl.event_pump().map_err(|e| anyhow!(e))?;
    'running: loop {
        // Step 1: Handle events.
        for event in event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                break 'running;
            }

            if let Some(system_event) = event.to_system_event(&sdl_window) {
                runner
                    .handle_event(system_event)
                    .context("Failed to handle event")?;
            }
        }

        // Step 2: Update.
        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
            runner.think();
        }

        // Step 3: Draw.
        runner.draw().context("Failed to draw")?;
    }

    let menu = runner.plugin().menu();
    info!(
        god_mode = ?menu.switch_value("player_god"),
        speed = ?menu.slider_value("player_speed"),
        "Closing viewer"
    );

    Ok(())
}
