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

//! Input handling for the movie list view.
//!
//! This module maps raw terminal keyboard and mouse events to grid
//! navigation, search input editing, and the actions the application has to
//! carry out in response.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEventKind};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{
    MovieListView,
    movie_list::{COLUMNS, Focus, MovieListAction, WHEEL_ROWS},
};

impl MovieListView {
    /// Process an input event for a grid currently showing `displayed`
    /// cards.
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        displayed: usize,
    ) -> Option<MovieListAction> {
        match event {
            Event::Key(key_event) => match self.focus {
                Focus::Search => self.process_search_key(event, key_event),
                Focus::Grid => self.process_grid_key(key_event, displayed),
            },

            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::ScrollDown => {
                    self.scroll_rows_by(WHEEL_ROWS as isize, displayed);
                    Some(MovieListAction::Scrolled)
                }
                MouseEventKind::ScrollUp => {
                    self.scroll_rows_by(-(WHEEL_ROWS as isize), displayed);
                    Some(MovieListAction::Scrolled)
                }
                _ => None,
            },

            _ => None,
        }
    }

    fn process_search_key(&mut self, event: &Event, key_event: &KeyEvent) -> Option<MovieListAction> {
        match key_event.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
                self.focus = Focus::Grid;
                None
            }

            _ => {
                // Delegate everything else to the managed input component,
                // every edit is a new search term
                let before = self.search_input.value().to_string();
                self.search_input.handle_event(event);

                let after = self.search_input.value().to_string();
                if after != before {
                    self.reset_position();
                    Some(MovieListAction::SearchChanged(after))
                } else {
                    None
                }
            }
        }
    }

    fn process_grid_key(&mut self, key_event: &KeyEvent, displayed: usize) -> Option<MovieListAction> {
        let columns = COLUMNS as isize;

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('/'), _) => {
                self.focus = Focus::Search;
                None
            }

            (KeyCode::Char('j'), _) | (KeyCode::Down, _) => {
                self.select_by(columns, displayed);
                Some(MovieListAction::Scrolled)
            }
            (KeyCode::Char('k'), _) | (KeyCode::Up, _) => {
                self.select_by(-columns, displayed);
                Some(MovieListAction::Scrolled)
            }
            (KeyCode::Char('l'), _) | (KeyCode::Right, _) => {
                self.select_by(1, displayed);
                Some(MovieListAction::Scrolled)
            }
            (KeyCode::Char('h'), _) | (KeyCode::Left, _) => {
                self.select_by(-1, displayed);
                Some(MovieListAction::Scrolled)
            }

            (KeyCode::Char('g'), _) | (KeyCode::Home, _) => {
                self.select(0, displayed);
                Some(MovieListAction::Scrolled)
            }
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => {
                self.select(displayed.saturating_sub(1), displayed);
                Some(MovieListAction::Scrolled)
            }

            (KeyCode::Char('f'), KeyModifiers::CONTROL) | (KeyCode::PageDown, _) => {
                self.select_by(self.page_cards(), displayed);
                Some(MovieListAction::Scrolled)
            }
            (KeyCode::Char('b'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => {
                self.select_by(-self.page_cards(), displayed);
                Some(MovieListAction::Scrolled)
            }

            (KeyCode::Char('n'), _) => Some(MovieListAction::LoadMore),

            (KeyCode::Char('o'), _) | (KeyCode::Enter, _) => {
                (displayed > 0).then_some(MovieListAction::OpenLink(self.selected))
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, MouseEvent};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn wheel(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn grid_view() -> MovieListView {
        let mut view = MovieListView::new();
        view.set_viewport_lines(12);
        view
    }

    #[test]
    fn typing_updates_the_search_term() {
        let mut view = grid_view();

        assert_eq!(view.process_event(&key(KeyCode::Char('/')), 9), None);
        assert!(view.is_searching());

        assert_eq!(
            view.process_event(&key(KeyCode::Char('a')), 9),
            Some(MovieListAction::SearchChanged("a".into()))
        );
        assert_eq!(
            view.process_event(&key(KeyCode::Char('B')), 9),
            Some(MovieListAction::SearchChanged("aB".into()))
        );
        assert_eq!(
            view.process_event(&key(KeyCode::Backspace), 9),
            Some(MovieListAction::SearchChanged("a".into()))
        );
    }

    #[test]
    fn grid_keys_are_text_while_searching() {
        let mut view = grid_view();
        view.process_event(&key(KeyCode::Char('/')), 9);

        assert_eq!(
            view.process_event(&key(KeyCode::Char('j')), 9),
            Some(MovieListAction::SearchChanged("j".into()))
        );
        assert_eq!(view.selected(), 0);
    }

    #[test]
    fn typing_resets_grid_position() {
        let mut view = grid_view();
        view.process_event(&key(KeyCode::Char('G')), 9);
        assert_eq!(view.selected(), 8);

        view.process_event(&key(KeyCode::Char('/')), 9);
        assert_eq!(
            view.process_event(&key(KeyCode::Char('z')), 9),
            Some(MovieListAction::SearchChanged("z".into()))
        );
        assert_eq!(view.selected(), 0);
        assert_eq!(view.first_row(), 0);
    }

    #[test]
    fn cursor_moves_are_not_searches() {
        let mut view = grid_view();
        view.process_event(&key(KeyCode::Char('/')), 9);
        view.process_event(&key(KeyCode::Char('x')), 9);

        assert_eq!(view.process_event(&key(KeyCode::Left), 9), None);
    }

    #[test]
    fn escape_returns_to_the_grid() {
        let mut view = grid_view();
        view.process_event(&key(KeyCode::Char('/')), 9);
        view.process_event(&key(KeyCode::Esc), 9);

        assert!(!view.is_searching());
        assert_eq!(
            view.process_event(&key(KeyCode::Char('j')), 9),
            Some(MovieListAction::Scrolled)
        );
        assert_eq!(view.selected(), 3);
    }

    #[test]
    fn navigation_moves_by_row_and_column() {
        let mut view = grid_view();

        view.process_event(&key(KeyCode::Down), 9);
        view.process_event(&key(KeyCode::Right), 9);
        assert_eq!(view.selected(), 4);

        view.process_event(&key(KeyCode::Up), 9);
        assert_eq!(view.selected(), 1);

        view.process_event(&key(KeyCode::Char('G')), 9);
        assert_eq!(view.selected(), 8);

        view.process_event(&key(KeyCode::Char('g')), 9);
        assert_eq!(view.selected(), 0);
    }

    #[test]
    fn moving_past_the_end_is_still_a_scroll() {
        let mut view = grid_view();
        view.process_event(&key(KeyCode::Char('G')), 9);

        assert_eq!(
            view.process_event(&key(KeyCode::Down), 9),
            Some(MovieListAction::Scrolled)
        );
        assert_eq!(view.selected(), 8);
    }

    #[test]
    fn mouse_wheel_scrolls() {
        let mut view = grid_view();

        assert_eq!(
            view.process_event(&wheel(MouseEventKind::ScrollDown), 18),
            Some(MovieListAction::Scrolled)
        );
        assert_eq!(view.first_row(), 1);

        view.process_event(&wheel(MouseEventKind::ScrollUp), 18);
        assert_eq!(view.first_row(), 0);

        assert_eq!(view.process_event(&wheel(MouseEventKind::Moved), 18), None);
    }

    #[test]
    fn open_link_needs_a_movie() {
        let mut view = grid_view();

        assert_eq!(view.process_event(&key(KeyCode::Char('o')), 0), None);

        view.process_event(&key(KeyCode::Right), 9);
        assert_eq!(
            view.process_event(&key(KeyCode::Enter), 9),
            Some(MovieListAction::OpenLink(1))
        );
    }

    #[test]
    fn load_more_key() {
        let mut view = grid_view();

        assert_eq!(
            view.process_event(&key(KeyCode::Char('n')), 9),
            Some(MovieListAction::LoadMore)
        );
    }
}
