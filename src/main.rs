#![warn(clippy::all, clippy::pedantic)]

use std::io;
use std::os::fd::AsRawFd;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use log::{debug, error, info, warn};
use ratatui::{Terminal, prelude::*};

use retroblocks::app::{App, AppResult};
use retroblocks::config::{self, Config};
use retroblocks::input::KeyTracker;
use retroblocks::ui;

fn main() -> AppResult<()> {
    // Create log file and redirect stderr to it
    let log_path = "retroblocks.log";
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .with_context(|| format!("failed to create log file {log_path}"))?;

    // Safety: both descriptors are open for the duration of the call
    unsafe {
        libc::dup2(log_file.as_raw_fd(), io::stderr().as_raw_fd());
    }

    // Configure the logger to use stderr (which is now redirected to our file)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    info!("Starting Retro Blocks");

    let config = match config::loader::load_config_from_file() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {e}");
            Config::default()
        }
    };

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Ask for key release events so held keys are tracked exactly
    let enhanced_keys = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced_keys {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    } else {
        warn!("Terminal does not report key releases, falling back to hold timeout");
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::with_config(&config);
    let res = run_app(&mut terminal, app, &config);

    // Restore terminal
    if enhanced_keys {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("Game error: {err:?}");
    }

    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App, config: &Config) -> AppResult<()> {
    let frame_duration = Duration::from_secs(1) / config.timing.frame_rate;
    let mut keys = KeyTracker::new(config.input.hold_timeout_ms);

    // Explicitly flush any pending input events that might be in the buffer
    while event::poll(Duration::ZERO)? {
        let _ = event::read()?;
    }

    debug!("Running at {} frames per second", config.timing.frame_rate);

    loop {
        let frame_start = Instant::now();

        app.update_clock();
        let input = keys.snapshot(app.now_millis());
        app.frame(input);
        terminal.draw(|f| ui::render(f, &mut app))?;

        // Collect key events until the next frame is due
        let deadline = frame_start + frame_duration;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !event::poll(remaining)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                app.update_clock();
                keys.handle_event(&key, app.now_millis());
            }
        }

        if keys.quit_requested() {
            app.should_quit = true;
        }
        if app.should_quit {
            info!("Quit requested");
            return Ok(());
        }
    }
}
