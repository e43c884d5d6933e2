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

//! UI rendering logic for the movie list view.
//!
//! This module draws the search field, the grid of movie cards for the
//! displayed slice, and the empty result message.

use std::borrow::Cow;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{
        MovieListView,
        movie_list::{CARD_HEIGHT, COLUMNS, Focus},
    },
    model::{Movie, listing::MovieListing},
    render::icons::{ICON_POSTER, ICON_SEARCH},
    theme::Theme,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SEARCH_PLACEHOLDER: &str = "Search";

impl MovieListView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        listing: &MovieListing,
        poster_path: &str,
        theme: &Theme,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.draw_search(f, chunks[0], theme);
        self.draw_grid(f, chunks[1], listing, poster_path, theme);
    }

    fn draw_search(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_colour = match self.focus {
            Focus::Search => theme.accent_colour,
            Focus::Grid => theme.border_colour,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(format!(" {} ", ICON_SEARCH))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);

        let value = self.search_input.value();
        let text = if value.is_empty() {
            Paragraph::new(SEARCH_PLACEHOLDER).style(Style::default().fg(theme.placeholder_fg))
        } else {
            Paragraph::new(value)
        };

        f.render_widget(text.block(block), area);

        if self.focus == Focus::Search {
            let cursor_x = inner.x + self.search_input.visual_cursor() as u16;
            f.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
        }
    }

    fn draw_grid(
        &mut self,
        f: &mut Frame,
        area: Rect,
        listing: &MovieListing,
        poster_path: &str,
        theme: &Theme,
    ) {
        self.set_viewport_lines(area.height);

        let displayed = listing.displayed_len();
        if displayed == 0 {
            let message = format!("No movies found for \"{}\"", listing.search_term());
            f.render_widget(
                Paragraph::new(message).block(Block::default().padding(Padding::new(1, 1, 1, 0))),
                area,
            );
            return;
        }

        self.clamp(displayed);

        let mut y = area.y;
        let mut row = self.first_row();
        while y < area.bottom() {
            let start = row * COLUMNS;
            if start >= displayed {
                break;
            }

            let height = CARD_HEIGHT.min(area.bottom() - y);
            let row_area = Rect::new(area.x, y, area.width, height);
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
                .split(row_area);

            for (column, movie) in listing.displayed().skip(start).take(COLUMNS).enumerate() {
                let selected = self.focus == Focus::Grid && start + column == self.selected();
                draw_card(f, cells[column], movie, poster_path, selected, theme);
            }

            y += height;
            row += 1;
        }
    }
}

fn draw_card(f: &mut Frame, area: Rect, movie: &Movie, poster_path: &str, selected: bool, theme: &Theme) {
    let border_style = if selected {
        Style::default()
            .fg(theme.card_selected_border)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border_colour)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    // One line each, anything wider than the card is cut short with an ellipsis
    let width = usize::from(block.inner(area).width);
    let poster = format!("{} {}", ICON_POSTER, poster_path);

    let lines = vec![
        Line::styled(
            ellipsize(&movie.movie, width),
            Style::default()
                .fg(theme.card_title_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            ellipsize(&format!("Rating: {}", movie.rating), width).into_owned(),
            Style::default().fg(theme.card_rating_fg),
        ),
        Line::styled(
            ellipsize(&poster, width),
            Style::default().fg(theme.card_poster_fg),
        ),
        Line::styled(
            ellipsize("View on IMDb", width),
            Style::default()
                .fg(theme.card_link_fg)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn ellipsize(text: &str, max_width: usize) -> Cow<'_, str> {
    if text.width() <= max_width {
        return Cow::Borrowed(text);
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }

    if max_width > 0 {
        out.push('\u{2026}');
    }
    Cow::Owned(out)
}
