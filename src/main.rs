mod audio;
mod config;
mod controller;
mod logging;
mod model;
mod playlist;
mod view;

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;

use audio::LocalPlayer;
use config::Cli;
use controller::{PlaybackController, SystemClock};
use model::PlayerEvent;
use playlist::Playlist;
use view::AppView;

/// Longest wait for input before timers and player events are checked again
const MAX_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(&cli.log_dir) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Dropbeat TUI Starting ===");

    let tracks = match &cli.playlist {
        Some(path) => config::load_playlist(path)?,
        None => config::demo_playlist(),
    };
    tracing::info!(tracks = tracks.len(), "Playlist loaded");

    let player = LocalPlayer::new();
    let playlist = Arc::new(Playlist::new(tracks));
    let mut controller =
        PlaybackController::new(Arc::new(player.clone()), playlist, Arc::new(SystemClock));

    let events = controller
        .init(&player)
        .context("Playback controller initialized twice")?;
    player.start();

    let device_name = LocalPlayer::get_device_name();

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut controller, events, &device_name, cli.autoplay);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Dropbeat TUI shutting down");
    res
}

/// Single run loop: lifecycle events, due refresh cycles, drawing, then
/// input. Each handler finishes before the next one starts.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut PlaybackController,
    mut events: UnboundedReceiver<PlayerEvent>,
    device_name: &str,
    autoplay: bool,
) -> Result<()> {
    loop {
        while let Ok(event) = events.try_recv() {
            let ready = event == PlayerEvent::Ready;
            controller.handle_player_event(event);
            if ready && autoplay {
                controller.next_track();
            }
        }

        controller.on_timer();

        terminal.draw(|frame| {
            let layout = view::compute_layout(frame.area());
            controller.apply_layout(&layout);
            AppView::render(frame, &layout, controller, device_name);
        })?;

        if controller.should_quit() {
            break;
        }

        let timeout = controller
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(MAX_POLL_INTERVAL)
            .min(MAX_POLL_INTERVAL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => controller.handle_key_event(key),
                Event::Mouse(mouse) => controller.handle_mouse_event(mouse),
                _ => {}
            }
        }
    }

    Ok(())
}
