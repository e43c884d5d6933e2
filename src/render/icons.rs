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

//! Unicode symbols for the TUI.
//!
//! These are selected for compatibility with most modern terminal emulators
//! and fonts.

pub(crate) const ICON_SEARCH: &str = "\u{2315}";
pub(crate) const ICON_POSTER: &str = "\u{25A3}";

// Frames of the loading indicator, cycled on every tick.
pub(crate) const LOADING_FRAMES: [&str; 4] = [
    "\u{25CF} \u{25CB} \u{25CB}",
    "\u{25CB} \u{25CF} \u{25CB}",
    "\u{25CB} \u{25CB} \u{25CF}",
    "\u{25CB} \u{25CF} \u{25CB}",
];
