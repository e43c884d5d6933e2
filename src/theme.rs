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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) status_bar_colour: Color,
    pub(crate) error_colour: Color,

    pub(crate) card_title_fg: Color,
    pub(crate) card_rating_fg: Color,
    pub(crate) card_poster_fg: Color,
    pub(crate) card_link_fg: Color,
    pub(crate) card_selected_border: Color,

    pub(crate) placeholder_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(24, 24, 37),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            status_bar_colour: Color::Rgb(40, 40, 60),
            error_colour: Color::Rgb(235, 87, 87),

            card_title_fg: Color::Rgb(255, 255, 255),
            card_rating_fg: Color::Rgb(162, 161, 166),
            card_poster_fg: Color::Rgb(120, 120, 135),
            card_link_fg: Color::Rgb(96, 165, 250),
            card_selected_border: Color::Rgb(250, 189, 47),

            placeholder_fg: Color::Rgb(120, 120, 135),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Non-RGB colours have no fixed value, so `None`
    /// is returned for those.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_to_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(24, 24, 37)), Some("#181825".to_string()));
        assert_eq!(Theme::to_hex(Color::Rgb(255, 0, 16)), Some("#ff0010".to_string()));
    }

    #[test]
    fn named_colour_has_no_hex() {
        assert_eq!(Theme::to_hex(Color::Blue), None);
    }
}
