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

//! Application events and the main event loop.
//!
//! Every state change happens here, on the main thread, in response to an
//! [`AppEvent`] arriving from the input thread, the tick thread or the task
//! worker. After each event the whole interface is redrawn.

mod handlers;
use handlers::*;

pub(crate) use handlers::start_fetch;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, model::Movie, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,

    MoviesLoaded(Vec<Movie>),
    MoviesFailed(String),

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
        app.listing.frame_rendered();
    }

    Ok(())
}

fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => handle_key_event(app, key)?,
        AppEvent::Mouse(mouse) => handle_mouse_event(app, mouse)?,
        AppEvent::MoviesLoaded(movies) => handle_movies_loaded(app, movies),
        AppEvent::MoviesFailed(detail) => handle_movies_failed(app, detail),
        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::Tick => handle_tick(app),
        AppEvent::Resize | AppEvent::ExitApplication => {}
    }

    Ok(())
}
