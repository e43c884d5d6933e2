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

//! Terminal environment utilities.
//!
//! This module provides functions to manipulate the terminal emulator's
//! background colour using OSC (Operating System Command) escape sequences,
//! and the scoped subscription that delivers mouse scroll events.
//!
//! # Compatibility
//!
//! The OSC codes are supported by most modern terminals (XTerm, iTerm2,
//! Alacritty, Kitty). Others silently ignore them.

use std::io::{self, Write};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};

/// Sets the terminal background color using an OSC 11 escape sequence.
pub(crate) fn set_terminal_bg(hex_color: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]11;{}\x07", hex_color)?;
    stdout.flush()
}

/// Resets the terminal background to the user's configured colour (OSC 111).
pub(crate) fn reset_terminal_bg() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]111\x07")?;
    stdout.flush()
}

/// Mouse capture held for as long as the movie list is on screen.
///
/// Acquiring the subscription asks the terminal to report mouse events,
/// wheel scrolling included. Dropping it always hands the mouse back, even
/// when the event loop exits with an error.
pub(crate) struct ScrollSubscription {
    _private: (),
}

impl ScrollSubscription {
    pub(crate) fn acquire() -> io::Result<Self> {
        execute!(io::stdout(), EnableMouseCapture)?;
        tracing::debug!("scroll subscription acquired");
        Ok(Self { _private: () })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), DisableMouseCapture) {
            tracing::warn!(error = %e, "failed to release mouse capture");
        } else {
            tracing::debug!("scroll subscription released");
        }
    }
}
