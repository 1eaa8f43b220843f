#![warn(clippy::all, clippy::pedantic)]

use std::io;
use std::os::fd::AsRawFd;
use std::time::Duration;

use blockdrop::Time;
use blockdrop::app::{App, AppResult};
use blockdrop::config::{self, GameConfig};
use blockdrop::input::map_key;
use blockdrop::ui;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, error, info};
use ratatui::{Terminal, prelude::*};

fn main() -> AppResult<()> {
    // Create log file and redirect stderr to it
    let log_path = "blockdrop.log";
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;

    // Safety: We're redirecting stderr to our log file using standard POSIX operations
    unsafe {
        libc::dup2(log_file.as_raw_fd(), io::stderr().as_raw_fd());
    }

    // Set RUST_BACKTRACE environment variable for detailed panic messages
    unsafe {
        std::env::set_var("RUST_BACKTRACE", "1");
    }

    // Configure the logger to use stderr (which is now redirected to our file)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    info!("Starting Blockdrop");

    let config = match config::loader::load_config_from_file() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {e}");
            GameConfig::default()
        }
    };

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(config);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Ok(score) => {
            info!("Session ended with score {score}");
            println!("Final score: {score}");
        }
        Err(err) => error!("Game error: {err:?}"),
    }

    Ok(())
}

/// Drives the frame loop until the player quits or the game over hold ends.
/// Returns the final score.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> AppResult<u32> {
    let frame_duration = app.config.frame_duration();
    let mut time = Time::new();

    // Flush any pending input events that might be in the buffer
    while event::poll(Duration::from_millis(0))? {
        let _ = event::read()?;
    }

    debug!("Frame loop starting at {frame_duration:?} per frame");

    loop {
        // Drain every pending input event
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                debug!("Key event: {key:?}");
                if let Some(command) = map_key(key) {
                    app.handle_command(command);
                }
            }
        }

        if app.should_quit {
            return Ok(app.session.score());
        }

        time.update();
        app.on_tick(time.delta_seconds());

        terminal.draw(|f| ui::render(f, &mut app))?;

        // Wait out the rest of the frame, waking early for input
        let remaining = frame_duration.saturating_sub(time.since_update());
        event::poll(remaining)?;
    }
}
