// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Movie List TUI.
//!
//! A terminal-based browser for a remote movie list.
//!
//! The whole collection is fetched once from a JSON API, filtered locally as
//! the user types a search term, and revealed a page at a time as the user
//! scrolls towards the bottom of the grid.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns all application state, manages the terminal
//!   lifecycle and renders the UI.
//! * A **Background Worker** performs blocking work, such as the HTTP
//!   request, via asynchronous task processing.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod api;
mod components;
mod config;
mod events;
mod model;
mod render;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    api::HttpMovieSource,
    components::MovieListView,
    config::{AppConfig, Args},
    events::{AppEvent, process_events},
    model::{listing::MovieListing, paginator::Paginator},
    tasks::AppTask,
    theme::Theme,
    util::term::ScrollSubscription,
};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub listing: MovieListing,
    pub movie_list_view: MovieListView,

    pub status_message: Option<String>,
    pub tick: usize,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let paginator = Paginator::new(config.page_size, config.scroll_threshold);

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            task_tx,
            listing: MovieListing::new(paginator),
            movie_list_view: MovieListView::new(),
            status_message: None,
            tick: 0,
        }
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, initializes the
/// application state, manages the terminal lifecycle, and returns an error if
/// any part of the execution fails.
fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::load_config().with_args(args);

    // The UI is still usable without a log file
    if let Err(e) = util::logging::init_logging(&config.log_path()) {
        eprintln!("Logging disabled: {:#}", e);
    }
    tracing::info!(api_url = %config.api_url, "starting");

    let source = HttpMovieSource::from_config(&config).context("Failed to create HTTP client")?;

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    tasks::spawn_task_worker(Box::new(source), task_rx, app.event_tx.clone());

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        tracing::error!(error = %format!("{:#}", e), "application error");
    }
    tracing::info!("exiting");

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).ok();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads, requests the movie list and enters the
/// main event loop.
///
/// The scroll subscription is held for exactly the duration of the event
/// loop, however it ends.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(event::Event::Key(key)) if key.kind != KeyEventKind::Release => {
                    AppEvent::Key(key)
                }
                Ok(event::Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(event::Event::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    tracing::error!(error = %e, "failed to read terminal event");
                    break;
                }
            };

            if tx_input.send(event).is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    let _scroll = ScrollSubscription::acquire().context("Failed to enable mouse capture")?;

    // Initial trigger to fetch the movie list
    events::start_fetch(app)?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
