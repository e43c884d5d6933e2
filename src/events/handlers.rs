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

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent};

use crate::{
    App,
    components::MovieListAction,
    events::AppEvent,
    model::Movie,
    tasks::AppTask,
};

/// Request the movie list, unless it has already been requested.
pub(crate) fn start_fetch(app: &mut App) -> Result<()> {
    if app.listing.begin_fetch() {
        tracing::info!(url = %app.config.api_url, "fetching movie list");
        app.task_tx.send(AppTask::FetchMovies)?;
    }

    Ok(())
}

pub(super) fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            return Ok(());
        }

        (KeyCode::Char('q'), _) if !app.movie_list_view.is_searching() => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            return Ok(());
        }

        _ => {}
    }

    app.status_message = None;

    let event = Event::Key(key);
    let displayed = app.listing.displayed_len();
    if let Some(action) = app.movie_list_view.process_event(&event, displayed) {
        handle_view_action(app, action)?;
    }

    Ok(())
}

pub(super) fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    let event = Event::Mouse(mouse);
    let displayed = app.listing.displayed_len();
    if let Some(action) = app.movie_list_view.process_event(&event, displayed) {
        handle_view_action(app, action)?;
    }

    Ok(())
}

fn handle_view_action(app: &mut App, action: MovieListAction) -> Result<()> {
    match action {
        MovieListAction::SearchChanged(term) => {
            app.listing.set_search_term(&term);
            tracing::debug!(term, matches = app.listing.filtered_len(), "search changed");
        }

        MovieListAction::Scrolled => {
            let metrics = app
                .movie_list_view
                .scroll_metrics(app.listing.displayed_len());
            if app.listing.on_scroll(metrics) {
                tracing::debug!(
                    display_count = app.listing.display_count(),
                    "scrolled near bottom, showing more"
                );
            }
        }

        MovieListAction::LoadMore => {
            if app.listing.load_more() {
                tracing::debug!(display_count = app.listing.display_count(), "showing more");
            }
        }

        MovieListAction::OpenLink(position) => {
            if let Some(movie) = app.listing.displayed_movie(position) {
                app.task_tx.send(AppTask::OpenUrl(movie.imdb_url.clone()))?;
            }
        }
    }

    Ok(())
}

pub(super) fn handle_movies_loaded(app: &mut App, movies: Vec<Movie>) {
    app.listing.fetch_succeeded(movies);
    app.movie_list_view.reset_position();
}

pub(super) fn handle_movies_failed(app: &mut App, detail: String) {
    tracing::warn!(detail, "movie list unavailable");
    app.listing.fetch_failed();
}

pub(super) fn handle_error(app: &mut App, message: String) {
    app.status_message = Some(message);
}

pub(super) fn handle_tick(app: &mut App) {
    app.tick = app.tick.wrapping_add(1);
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use crossterm::event::{KeyEvent, MouseEventKind};

    use super::*;
    use crate::{
        config::AppConfig,
        events::handle_event,
        model::{fixtures, listing::FetchStatus},
    };

    fn test_app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        let mut app = App::new(AppConfig::default(), task_tx);
        app.movie_list_view.set_viewport_lines(30);
        (app, task_rx)
    }

    fn loaded_app(count: i64) -> (App, Receiver<AppTask>) {
        let (mut app, task_rx) = test_app();
        start_fetch(&mut app).unwrap();
        handle_event(&mut app, AppEvent::MoviesLoaded(fixtures::numbered(count))).unwrap();
        (app, task_rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn fetch_is_requested_once() {
        let (mut app, task_rx) = test_app();

        start_fetch(&mut app).unwrap();
        start_fetch(&mut app).unwrap();

        assert!(matches!(task_rx.try_recv(), Ok(AppTask::FetchMovies)));
        assert!(task_rx.try_recv().is_err());
        assert!(app.listing.is_loading());
    }

    #[test]
    fn loaded_movies_show_first_page() {
        let (app, _task_rx) = loaded_app(20);

        assert_eq!(app.listing.status(), &FetchStatus::Loaded);
        assert_eq!(app.listing.displayed_len(), 9);
    }

    #[test]
    fn failed_fetch_shows_error() {
        let (mut app, _task_rx) = test_app();
        start_fetch(&mut app).unwrap();

        handle_event(&mut app, AppEvent::MoviesFailed("connection refused".into())).unwrap();

        assert!(!app.listing.is_loading());
        assert_eq!(app.listing.error(), Some("Failed to load movies"));
        assert!(app.listing.movies().is_empty());
    }

    #[test]
    fn scrolling_to_the_bottom_loads_more() {
        let (mut app, _task_rx) = loaded_app(20);

        // Five rows of cards fit in the viewport, so the first two pages are
        // always near the bottom
        press(&mut app, KeyCode::Down);
        assert_eq!(app.listing.display_count(), 18);

        // Nothing more until the larger slice has been drawn
        press(&mut app, KeyCode::Down);
        assert_eq!(app.listing.display_count(), 18);

        app.listing.frame_rendered();
        press(&mut app, KeyCode::Down);
        assert_eq!(app.listing.display_count(), 27);
        assert_eq!(app.listing.displayed_len(), 20);
    }

    #[test]
    fn scrolling_far_from_the_bottom_does_not_load_more() {
        let (mut app, _task_rx) = loaded_app(100);
        for _ in 0..10 {
            app.listing.load_more();
        }
        app.listing.frame_rendered();
        let count = app.listing.display_count();

        // 99 cards, 33 rows, nowhere near the bottom of the first screen
        press(&mut app, KeyCode::Right);
        assert_eq!(app.listing.display_count(), count);
    }

    #[test]
    fn mouse_wheel_loads_more() {
        let (mut app, _task_rx) = loaded_app(20);

        handle_event(
            &mut app,
            AppEvent::Mouse(MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            }),
        )
        .unwrap();

        assert_eq!(app.listing.display_count(), 18);
    }

    #[test]
    fn scrolling_while_loading_does_nothing() {
        let (mut app, _task_rx) = test_app();
        start_fetch(&mut app).unwrap();

        press(&mut app, KeyCode::Down);

        assert_eq!(app.listing.display_count(), 9);
    }

    #[test]
    fn scrolling_after_a_failed_fetch_does_nothing() {
        let (mut app, _task_rx) = test_app();
        start_fetch(&mut app).unwrap();
        handle_event(&mut app, AppEvent::MoviesFailed("connection refused".into())).unwrap();

        for _ in 0..3 {
            press(&mut app, KeyCode::Down);
            app.listing.frame_rendered();
        }
        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.listing.display_count(), 9);
        assert_eq!(app.listing.error(), Some("Failed to load movies"));
    }

    #[test]
    fn load_more_key_waits_for_the_list() {
        let (mut app, _task_rx) = test_app();
        start_fetch(&mut app).unwrap();

        press(&mut app, KeyCode::Char('n'));
        handle_event(&mut app, AppEvent::MoviesLoaded(fixtures::numbered(20))).unwrap();
        assert_eq!(app.listing.displayed_len(), 9);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.listing.displayed_len(), 18);
    }

    #[test]
    fn search_filters_on_every_keystroke() {
        let (mut app, _task_rx) = loaded_app(20);

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "movie 1");
        assert_eq!(app.listing.search_term(), "movie 1");
        assert_eq!(app.listing.filtered_len(), 11);

        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.listing.filtered_len(), 1);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.listing.filtered_len(), 11);
    }

    #[test]
    fn unmatched_search_displays_nothing() {
        let (mut app, _task_rx) = loaded_app(20);

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "abc");

        assert_eq!(app.listing.displayed_len(), 0);
    }

    #[test]
    fn quit_key() {
        let (mut app, _task_rx) = loaded_app(3);

        press(&mut app, KeyCode::Char('q'));

        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }

    #[test]
    fn quit_key_is_text_while_searching() {
        let (mut app, _task_rx) = loaded_app(3);

        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('q'));

        assert!(app.event_rx.try_recv().is_err());
        assert_eq!(app.listing.search_term(), "q");
    }

    #[test]
    fn open_link_sends_imdb_url() {
        let (mut app, task_rx) = loaded_app(3);
        let _ = task_rx.try_recv();

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('o'));

        match task_rx.try_recv() {
            Ok(AppTask::OpenUrl(url)) => assert_eq!(url, "https://www.imdb.com/title/tt0000002/"),
            other => panic!("unexpected task {:?}", other),
        }
    }

    #[test]
    fn task_errors_show_in_status_bar_until_next_key() {
        let (mut app, _task_rx) = loaded_app(3);

        handle_event(&mut app, AppEvent::Error("Failed to open link".into())).unwrap();
        assert_eq!(app.status_message.as_deref(), Some("Failed to open link"));

        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.status_message, None);
    }
}
