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

use anyhow::{Context, Result};

use crate::{events::AppEvent, tasks::TaskContext};

pub(super) fn fetch_movies(ctx: &TaskContext) -> Result<()> {
    match ctx.source.fetch_movies() {
        Ok(movies) => {
            tracing::info!(count = movies.len(), "movie list fetched");
            ctx.event_tx.send(AppEvent::MoviesLoaded(movies))?;
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch movie list");
            ctx.event_tx.send(AppEvent::MoviesFailed(e.to_string()))?;
        }
    }

    Ok(())
}

pub(super) fn open_url(_ctx: &TaskContext, url: &str) -> Result<()> {
    tracing::info!(url, "opening link");
    open::that(url).with_context(|| format!("Failed to open {}", url))
}
