//! Valentine CLI - binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`valentine_engine`] (card state) and [`valentine_tui`]
//! (rendering), providing RAII-based terminal management with guaranteed
//! cleanup.
//!
//! # Event Loop
//!
//! A fixed ~60 FPS render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`valentine_tui::InputPump`])
//! 3. Advance the presentation (`app.tick()`)
//! 4. Ring the bell for firework bursts, if sound was enabled
//! 5. Render frame

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::{Backend, CrosstermBackend, Terminal};
use std::{
    fs::{self, OpenOptions},
    io::{Stdout, Write, stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use valentine_engine::{App, CardConfig};
use valentine_tui::{InputPump, draw, handle_events};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
    let candidates = log_file_candidates();
    let mut warnings = Vec::new();

    for candidate in candidates {
        if let Some(parent) = candidate.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warnings.push(format!(
                    "Failed to create log dir {}: {e}",
                    parent.display()
                ));
                continue;
            }
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.valentine/logs/valentine.log
    if let Some(config_path) = CardConfig::path() {
        if let Some(config_dir) = config_path.parent() {
            candidates.push(config_dir.join("logs").join("valentine.log"));
        }
    }

    // Fallback: ./.valentine/logs/valentine.log (constrained environments)
    candidates.push(PathBuf::from(".valentine").join("logs").join("valentine.log"));

    candidates
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Manages raw mode, the alternate screen, and mouse capture (needed so
/// hovering the decline button makes it run away). On drop, all terminal
/// state is restored even after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
            return Err(err.into());
        }

        let backend = CrosstermBackend::new(out);
        let terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let mut out = stdout();
                let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let mut app = App::new()?;

    let result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut app).await
    };

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

const FRAME_DURATION: Duration = Duration::from_millis(16);

async fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend + Write,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result: Result<()> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        let quit_now = match handle_events(app, &mut input) {
            Ok(q) => q,
            Err(e) => break Err(e),
        };
        if quit_now {
            break Ok(());
        }

        app.tick();

        // Audio is just the terminal bell, and only after the explicit
        // sound gesture - the platform analog of unmuting autoplay.
        if app.take_booms() > 0 {
            let _ = terminal.backend_mut().write_all(b"\x07");
        }

        if let Err(e) = terminal.draw(|frame| draw(frame, app)) {
            break Err(e.into());
        }
    };

    input.shutdown().await;
    result
}
