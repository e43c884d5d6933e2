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

//! Remote movie API access.
//!
//! The whole collection is requested in one `GET`, there is no server side
//! paging, filtering or query parameters. Requests are blocking and are only
//! ever made from the background task worker.

use std::time::Duration;

use reqwest::{StatusCode, blocking::Client};
use thiserror::Error;

use crate::{config::AppConfig, model::Movie};

#[derive(Error, Debug)]
pub(crate) enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected HTTP status: {0}")]
    Status(StatusCode),
    #[error("Malformed movie list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Somewhere the full movie collection can be fetched from.
pub(crate) trait MovieSource: Send {
    fn fetch_movies(&self) -> Result<Vec<Movie>, FetchError>;
}

pub(crate) struct HttpMovieSource {
    client: Client,
    url: String,
}

impl HttpMovieSource {
    pub(crate) fn new(url: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    pub(crate) fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        let timeout = config.request_timeout_secs.map(Duration::from_secs);
        Self::new(&config.api_url, timeout)
    }
}

impl MovieSource for HttpMovieSource {
    fn fetch_movies(&self) -> Result<Vec<Movie>, FetchError> {
        tracing::debug!(url = %self.url, "requesting movie list");

        let response = self.client.get(&self.url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text()?;
        let movies: Vec<Movie> = serde_json::from_str(&body)?;

        tracing::debug!(count = movies.len(), "movie list decoded");
        Ok(movies)
    }
}
