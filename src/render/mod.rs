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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every application event. What is drawn depends on the fetch state:
//!
//! * **Loading** with nothing fetched yet: a full screen loading indicator.
//! * **Errored**: the error message, nothing else.
//! * Otherwise the search field and movie grid.

pub(crate) mod icons;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
};

use crate::{
    App,
    components::Focus,
    model::listing::FetchStatus,
    render::icons::LOADING_FRAMES,
};

/// Renders the user interface to the terminal frame.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the view
///   to record the size of its scrollable area.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: main, status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    match app.listing.status() {
        FetchStatus::Loading if app.listing.movies().is_empty() => draw_loading(f, outer[0], app),
        FetchStatus::Errored(message) => draw_error(f, outer[0], message, app),
        _ => app.movie_list_view.draw(
            f,
            outer[0],
            &app.listing,
            &app.config.poster_path,
            &app.theme,
        ),
    }

    draw_status_bar(f, outer[1], app);
}

fn draw_loading(f: &mut Frame, area: Rect, app: &App) {
    let frame = LOADING_FRAMES[app.tick % LOADING_FRAMES.len()];

    let middle = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(frame)
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.accent_colour)),
        middle[1],
    );
}

fn draw_error(f: &mut Frame, area: Rect, message: &str, app: &App) {
    f.render_widget(
        Paragraph::new(format!("Error: {}", message))
            .style(Style::default().fg(app.theme.error_colour))
            .block(Block::default().padding(Padding::uniform(1))),
        area,
    );
}

fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let style = Style::default().bg(app.theme.status_bar_colour);

    let hints = match app.movie_list_view.focus {
        Focus::Search => " esc: done ",
        Focus::Grid => " /: search  n: more  o: imdb  q: quit ",
    };

    let mut spans = vec![Span::styled(
        hints,
        Style::default().add_modifier(Modifier::DIM),
    )];

    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            format!(" {} ", message),
            Style::default().fg(app.theme.error_colour),
        ));
    }

    let counts = if app.listing.error().is_none() && !app.listing.is_loading() {
        format!(
            " {} of {} ",
            app.listing.displayed_len(),
            app.listing.filtered_len()
        )
    } else {
        String::new()
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(counts.len() as u16)])
        .split(area);

    f.render_widget(Paragraph::new(Line::from(spans)).style(style), chunks[0]);
    f.render_widget(
        Paragraph::new(counts)
            .alignment(Alignment::Right)
            .style(style.fg(app.theme.accent_colour)),
        chunks[1],
    );
}
