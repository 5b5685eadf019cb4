use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;
use std::sync::Arc;
use std::time::{Duration, Instant};

mod controller;
mod fullscreen;
mod input;
mod media;
mod overlay;
mod progress;
mod utils;
mod view;

use controller::PlaybackController;
use fullscreen::SimulatedFullscreen;
use input::ControlEvent;
use media::{MediaElement, SimulatedMedia};
use progress::HttpProgressSink;
use utils::Config;
use view::LogSurface;

/// Cinema Controls - headless movie playback controller harness
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Simulated media duration in seconds
    #[arg(short, long, default_value = "120")]
    duration: f64,

    /// Set initial volume (0-100)
    #[arg(short, long, value_name = "VOLUME", default_value = "100")]
    volume: u8,

    /// Movie server base URL for progress persistence
    #[arg(long, value_name = "URL")]
    server_url: Option<String>,

    /// Filename reported in progress snapshots
    #[arg(long, value_name = "NAME")]
    filename: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration, letting CLI flags win over file and env
    let mut config = Config::load()?;
    if let Some(url) = args.server_url {
        config.persistence.server_url = url;
    }
    if let Some(name) = args.filename {
        config.persistence.filename = Some(name);
    }

    // Initialize logging; --debug overrides the configured level
    let log_level = resolve_log_level(args.debug, &config.general.log_level);
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("Starting cinema-controls v{}", env!("CARGO_PKG_VERSION"));

    let media = Arc::new(SimulatedMedia::new(args.duration));
    media.set_volume(f64::from(args.volume.min(100)) / 100.0);

    let sink = HttpProgressSink::new(
        &config.persistence.server_url,
        &config.persistence.endpoint_path,
        tokio::runtime::Handle::current(),
    )?;

    let mut controller = PlaybackController::new(
        media.clone(),
        Box::new(LogSurface),
        Box::new(SimulatedFullscreen::new()),
        Box::new(sink),
        config,
        Instant::now(),
    )?;

    media.play();

    // Drive the simulation until the ending sequence navigates away
    let tick = Duration::from_millis(250);
    let mut last = Instant::now();
    while !controller.is_shut_down() {
        tokio::time::sleep(tick).await;

        let now = Instant::now();
        media.advance(now.duration_since(last).as_secs_f64());
        last = now;

        for event in media.take_events() {
            controller.handle_event(ControlEvent::Media(event), now)?;
        }
        controller.tick(now);
    }

    info!("Playback finished, exiting");
    Ok(())
}

/// Default log filter: `--debug` wins, otherwise the configured level
fn resolve_log_level(debug: bool, configured: &str) -> &str {
    if debug {
        "debug"
    } else {
        configured
    }
}
