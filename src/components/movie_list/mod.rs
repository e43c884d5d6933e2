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

//! Movie grid view and search field.
//!
//! This module holds the view-only state of the movie list: the search input,
//! which part of the view has keyboard focus, the selected card and how far
//! the grid has been scrolled. The movies themselves live in
//! [`MovieListing`](crate::model::listing::MovieListing), the view only ever
//! sees the length of the displayed slice.
//!
//! Cards are laid out [`COLUMNS`] to a row and the grid scrolls a whole row
//! at a time. Scroll positions are reported to the paginator in abstract
//! units, [`UNITS_PER_LINE`] to each terminal line.

mod event;
mod render;

use tui_input::Input;

use crate::model::paginator::ScrollMetrics;

pub(crate) const COLUMNS: usize = 3;
pub(crate) const CARD_HEIGHT: u16 = 6;
pub(crate) const UNITS_PER_LINE: u32 = 20;

const WHEEL_ROWS: usize = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Focus {
    #[default]
    Grid,
    Search,
}

/// Something the view wants the application to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MovieListAction {
    /// The search text changed, carrying the new text.
    SearchChanged(String),
    /// The grid was scrolled, or an attempt was made to scroll it.
    Scrolled,
    LoadMore,
    /// Open the link of the displayed movie at this position.
    OpenLink(usize),
}

#[derive(Default)]
pub(crate) struct MovieListView {
    pub(crate) search_input: Input,
    pub(crate) focus: Focus,
    selected: usize,
    first_row: usize,
    viewport_lines: u16,
}

impl MovieListView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn is_searching(&self) -> bool {
        self.focus == Focus::Search
    }

    pub(crate) fn selected(&self) -> usize {
        self.selected
    }

    pub(crate) fn first_row(&self) -> usize {
        self.first_row
    }

    /// Go back to the top of the grid, used whenever the filtered list is
    /// replaced.
    pub(crate) fn reset_position(&mut self) {
        self.selected = 0;
        self.first_row = 0;
    }

    /// Record the height of the grid area, in lines, as last drawn.
    pub(crate) fn set_viewport_lines(&mut self, lines: u16) {
        self.viewport_lines = lines;
    }

    /// The number of card rows that fit entirely in the viewport, never less
    /// than one.
    pub(crate) fn visible_rows(&self) -> usize {
        usize::from(self.viewport_lines / CARD_HEIGHT).max(1)
    }

    /// The current scroll position for a grid showing `displayed` cards.
    pub(crate) fn scroll_metrics(&self, displayed: usize) -> ScrollMetrics {
        let row_units = u32::from(CARD_HEIGHT) * UNITS_PER_LINE;
        let content_rows = u32::try_from(total_rows(displayed)).unwrap_or(u32::MAX);
        let first_row = u32::try_from(self.first_row).unwrap_or(u32::MAX);

        ScrollMetrics {
            viewport_height: u32::from(self.viewport_lines).saturating_mul(UNITS_PER_LINE),
            scroll_offset: first_row.saturating_mul(row_units),
            content_height: content_rows.saturating_mul(row_units),
        }
    }

    fn max_first_row(&self, displayed: usize) -> usize {
        total_rows(displayed).saturating_sub(self.visible_rows())
    }

    /// Select the card at `position`, clamped to the displayed slice, and
    /// scroll so that its row is visible.
    fn select(&mut self, position: usize, displayed: usize) {
        if displayed == 0 {
            self.reset_position();
            return;
        }

        self.selected = position.min(displayed - 1);

        let row = self.selected / COLUMNS;
        let visible = self.visible_rows();
        if row < self.first_row {
            self.first_row = row;
        } else if row >= self.first_row + visible {
            self.first_row = row + 1 - visible;
        }
    }

    /// Pull the selection and scroll position back inside a grid of
    /// `displayed` cards, they may be stale if the slice shrank.
    fn clamp(&mut self, displayed: usize) {
        self.selected = self.selected.min(displayed.saturating_sub(1));
        self.first_row = self.first_row.min(self.max_first_row(displayed));
    }

    fn select_by(&mut self, delta: isize, displayed: usize) {
        let position = self.selected.saturating_add_signed(delta);
        self.select(position, displayed);
    }

    /// Scroll the grid without moving the selection, as the mouse wheel does.
    fn scroll_rows_by(&mut self, delta: isize, displayed: usize) {
        let max = self.max_first_row(displayed);
        self.first_row = self.first_row.saturating_add_signed(delta).min(max);
    }

    fn page_cards(&self) -> isize {
        isize::try_from(self.visible_rows() * COLUMNS).unwrap_or(isize::MAX)
    }
}

fn total_rows(displayed: usize) -> usize {
    displayed.div_ceil(COLUMNS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_with_viewport(lines: u16) -> MovieListView {
        let mut view = MovieListView::new();
        view.set_viewport_lines(lines);
        view
    }

    #[test]
    fn metrics_for_a_short_grid() {
        // 9 cards, 3 rows of 6 lines, viewport of 24 lines
        let view = view_with_viewport(24);
        let metrics = view.scroll_metrics(9);

        assert_eq!(metrics.viewport_height, 24 * 20);
        assert_eq!(metrics.scroll_offset, 0);
        assert_eq!(metrics.content_height, 3 * 6 * 20);
        assert!(metrics.near_bottom(200));
    }

    #[test]
    fn metrics_for_a_scrolled_grid() {
        let mut view = view_with_viewport(12);
        view.select(17, 18);

        // Row 5 selected with 2 visible rows, so rows 4 and 5 are showing
        assert_eq!(view.first_row(), 4);

        let metrics = view.scroll_metrics(18);
        assert_eq!(metrics.scroll_offset, 4 * 6 * 20);
        assert_eq!(metrics.content_height, 6 * 6 * 20);
    }

    #[test]
    fn selection_is_clamped() {
        let mut view = view_with_viewport(24);

        view.select(100, 9);
        assert_eq!(view.selected(), 8);

        view.select_by(-100, 9);
        assert_eq!(view.selected(), 0);

        view.select(4, 0);
        assert_eq!(view.selected(), 0);
    }

    #[test]
    fn selecting_upwards_scrolls_back() {
        let mut view = view_with_viewport(12);
        view.select(26, 27);
        assert_eq!(view.first_row(), 7);

        view.select(3, 27);
        assert_eq!(view.first_row(), 1);
    }

    #[test]
    fn wheel_scroll_is_bounded() {
        let mut view = view_with_viewport(12);

        view.scroll_rows_by(100, 18);
        assert_eq!(view.first_row(), 4);

        view.scroll_rows_by(-100, 18);
        assert_eq!(view.first_row(), 0);
    }

    #[test]
    fn clamp_keeps_wheel_position() {
        let mut view = view_with_viewport(12);
        view.scroll_rows_by(3, 27);

        view.clamp(27);
        assert_eq!(view.first_row(), 3);
        assert_eq!(view.selected(), 0);

        view.select(20, 27);
        view.clamp(6);
        assert_eq!(view.selected(), 5);
        assert_eq!(view.first_row(), 0);
    }

    #[test]
    fn at_least_one_row_is_visible() {
        let view = view_with_viewport(0);
        assert_eq!(view.visible_rows(), 1);
    }
}
