//! RetroWeb headless host.
//!
//! Replays a scripted input session against the built-in demo site.
//!
//! Usage: `retroweb-app [config.toml] [script.toml]`. Without a script
//! the bundled demo session runs.

mod app;
mod nav;
mod script;
mod site;
mod video;

use std::path::Path;

use anyhow::Result;

use app::DemoApp;
use retroweb_shell::{Application, Interface, VideoBackend};
use retroweb_types::config::ShellConfig;
use script::ScriptedInput;
use video::HeadlessVideo;

const DEMO_SCRIPT: &str = include_str!("../scripts/demo.toml");

/// After a page load the engine must forget the old page's widgets and
/// show the new address.
fn sync_page(ui: &mut Interface, video: &mut HeadlessVideo, app: &mut DemoApp) {
    if let Some(url) = app.take_loaded() {
        ui.forget_page_widgets();
        ui.update_address_bar(&url, video, app);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => ShellConfig::load(Path::new(&path))?,
        None => ShellConfig::default(),
    };
    let mut input = match args.next() {
        Some(path) => ScriptedInput::load(Path::new(&path))?,
        None => ScriptedInput::from_toml_str(DEMO_SCRIPT)?,
    };

    let mut video = HeadlessVideo::new();
    log::info!(
        "Starting RetroWeb ({}x{}), {} scripted ticks",
        video.screen_width(),
        video::SCREEN_HEIGHT,
        input.remaining(),
    );

    let mut app = DemoApp::new(site::demo_site(), video.window_top(), video.window_height());
    let mut ui = Interface::new(config.clone(), &mut video);
    ui.draw_interface_widgets(&mut video, &mut app);

    app.open_url(&config.bookmark_url);
    sync_page(&mut ui, &mut video, &mut app);

    let mut ticks = 0;
    while !app.is_closed() && input.advance() {
        ui.update(&mut input, &mut video, &mut app);
        sync_page(&mut ui, &mut video, &mut app);
        ticks += 1;
    }

    log::info!(
        "Stopped after {ticks} ticks at {} (scroll {}, inverted {}, {} renders, closed {})",
        ui.address_text(),
        app.scroll_y(),
        video.is_inverted(),
        app.renders(),
        app.is_closed(),
    );
    if !app.status().is_empty() {
        log::info!("Status: {}", app.status());
    }
    log::debug!(
        "History at {:?} back={} forward={}, cursor {:?}, pointer visible {}, {} lines, {} clears",
        app.history().current_url(),
        app.history().can_go_back(),
        app.history().can_go_forward(),
        input.cursor(),
        input.pointer_visible(),
        video.lines_drawn(),
        video.rects_cleared(),
    );
    Ok(())
}
