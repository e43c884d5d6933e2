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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking work,
//! the movie list request and launching the system browser, from the main UI
//! thread. A dedicated worker loop translates [`AppTask`] requests into those
//! operations and broadcasts the results back to the application via
//! [`AppEvent`]s.
//!
//! Only actions that may block should be implemented as tasks. Everything
//! else is handled directly by events.
//!
//! If the application has already gone away when a task completes, the send
//! of the result fails and the result is simply dropped.

mod handlers;

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{api::MovieSource, events::AppEvent};

#[derive(Debug)]
pub(crate) enum AppTask {
    FetchMovies,
    OpenUrl(String),
}

/// Spawns a background thread to process application tasks.
///
/// # Arguments
///
/// * `source` - Where the movie list is fetched from.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    source: Box<dyn MovieSource>,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            let ctx = TaskContext {
                source: source.as_ref(),
                event_tx: &event_tx,
            };

            if let Err(e) = handle_task(task, &ctx) {
                tracing::warn!(error = %e, "task failed");
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }

        tracing::debug!("task worker finished");
    })
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    source: &'a dyn MovieSource,
    event_tx: &'a Sender<AppEvent>,
}

fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::FetchMovies => handlers::fetch_movies(ctx),
        AppTask::OpenUrl(url) => handlers::open_url(ctx, &url),
    }
}
