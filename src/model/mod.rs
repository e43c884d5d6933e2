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

//! Domain models and core data structures.
//!
//! This module defines the movie record as delivered by the remote API, and
//! the view state built on top of it:
//!
//! * [`listing`]: the full list, the search term and the derived filtered
//!   list and displayed slice.
//! * [`paginator`]: the display count and the scroll trigger that grows it.

pub(crate) mod listing;
pub(crate) mod paginator;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A movie identifier, the API is not strict about whether this is a number
/// or a string so either is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum MovieId {
    Number(i64),
    Text(String),
}

/// A movie score, numeric or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum Rating {
    Number(f64),
    Text(String),
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovieId::Number(n) => write!(f, "{}", n),
            MovieId::Text(s) => f.write_str(s),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Number(n) => write!(f, "{}", n),
            Rating::Text(s) => f.write_str(s),
        }
    }
}

/// A single movie record, received verbatim from the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Movie {
    pub(crate) id: MovieId,
    pub(crate) movie: String,
    pub(crate) rating: Rating,
    pub(crate) imdb_url: String,
}

impl Movie {
    /// Does the title contain `needle`, ignoring case?
    ///
    /// The needle is expected to be lowercased already, so callers filtering
    /// a whole list only lowercase the search term once.
    pub(crate) fn title_contains(&self, needle: &str) -> bool {
        needle.is_empty() || self.movie.to_lowercase().contains(needle)
    }
}
