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

//! Movie listing state.
//!
//! This module provides the state behind the movie list view: the full list
//! as last fetched, the current search term, the filtered list derived from
//! both, and the displayed slice bounded by the [`Paginator`].
//!
//! The filtered list is recomputed whenever the full list or the search term
//! changes. The displayed slice is always a prefix of the filtered list, so a
//! change in display count only moves the end of the slice.
//!
//! # Fetch lifecycle
//!
//! ```text
//! Idle -> Loading -> Loaded
//!                 -> Errored
//! ```
//!
//! `Loaded` may be re-entered by further display count increases. `Errored`
//! is terminal.

use crate::model::{
    Movie,
    paginator::{Paginator, ScrollMetrics},
};

/// The one and only message shown for a failed fetch, whatever the cause.
pub(crate) const FETCH_ERROR_MESSAGE: &str = "Failed to load movies";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FetchStatus {
    Idle,
    Loading,
    Loaded,
    Errored(String),
}

#[derive(Debug)]
pub(crate) struct MovieListing {
    status: FetchStatus,
    movies: Vec<Movie>,
    search_term: String,
    filtered: Vec<usize>,
    paginator: Paginator,
}

impl MovieListing {
    pub(crate) fn new(paginator: Paginator) -> Self {
        Self {
            status: FetchStatus::Idle,
            movies: vec![],
            search_term: String::new(),
            filtered: vec![],
            paginator,
        }
    }

    pub(crate) fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub(crate) fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Loading)
    }

    pub(crate) fn is_loaded(&self) -> bool {
        matches!(self.status, FetchStatus::Loaded)
    }

    pub(crate) fn error(&self) -> Option<&str> {
        match &self.status {
            FetchStatus::Errored(message) => Some(message),
            _ => None,
        }
    }

    /// Mark a fetch as in progress.
    ///
    /// Returns `false`, leaving the state untouched, if a fetch has already
    /// been started: the list is only ever fetched once per view.
    pub(crate) fn begin_fetch(&mut self) -> bool {
        if !matches!(self.status, FetchStatus::Idle) {
            return false;
        }

        self.status = FetchStatus::Loading;
        true
    }

    /// Replace the full list with a freshly fetched collection.
    pub(crate) fn fetch_succeeded(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
        self.status = FetchStatus::Loaded;
        self.refilter();
    }

    /// Record a failed fetch, the full list is left empty.
    pub(crate) fn fetch_failed(&mut self) {
        self.movies.clear();
        self.status = FetchStatus::Errored(FETCH_ERROR_MESSAGE.to_string());
        self.refilter();
    }

    pub(crate) fn search_term(&self) -> &str {
        &self.search_term
    }

    pub(crate) fn set_search_term(&mut self, term: &str) {
        if self.search_term == term {
            return;
        }

        self.search_term = term.to_string();
        self.refilter();
    }

    pub(crate) fn display_count(&self) -> usize {
        self.paginator.display_count()
    }

    /// Reveal one more page of movies, returning `true` if the display count
    /// grew. Only a loaded list grows.
    pub(crate) fn load_more(&mut self) -> bool {
        if !self.is_loaded() {
            return false;
        }

        self.paginator.load_more();
        true
    }

    /// Handle a scroll signal from the view, returning `true` if more movies
    /// are now displayed.
    pub(crate) fn on_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        let blocked = !self.is_loaded();
        self.paginator.on_scroll(metrics, blocked)
    }

    pub(crate) fn frame_rendered(&mut self) {
        self.paginator.frame_rendered();
    }

    /// The full list, as last fetched.
    pub(crate) fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub(crate) fn filtered(&self) -> impl ExactSizeIterator<Item = &Movie> + '_ {
        self.filtered.iter().map(|&idx| &self.movies[idx])
    }

    pub(crate) fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// The prefix of the filtered list that is actually rendered.
    pub(crate) fn displayed(&self) -> impl ExactSizeIterator<Item = &Movie> + '_ {
        self.filtered().take(self.display_count())
    }

    pub(crate) fn displayed_len(&self) -> usize {
        self.display_count().min(self.filtered.len())
    }

    /// Get a displayed movie by its position in the displayed slice.
    pub(crate) fn displayed_movie(&self, position: usize) -> Option<&Movie> {
        if position >= self.displayed_len() {
            return None;
        }

        self.filtered.get(position).map(|&idx| &self.movies[idx])
    }

    fn refilter(&mut self) {
        let needle = self.search_term.to_lowercase();
        self.filtered = self
            .movies
            .iter()
            .enumerate()
            .filter(|(_, movie)| movie.title_contains(&needle))
            .map(|(idx, _)| idx)
            .collect();
    }
}
