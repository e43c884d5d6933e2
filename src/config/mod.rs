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

//! Application configuration.
//!
//! This module manages the application configuration file, and the command
//! line arguments that may override it.

use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::model::paginator::{DEFAULT_PAGE_SIZE, DEFAULT_SCROLL_THRESHOLD};

pub(crate) const CONFIG_NAME: &str = "movielist";

const DEFAULT_API_URL: &str = "https://dummyapi.online/api/movies";
const DEFAULT_POSTER_PATH: &str = "ShawshankRedemptionMoviePoster.jpg";
const LOG_FILE_NAME: &str = "movielist.log";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub version: u32,
    pub api_url: String,
    pub page_size: usize,
    pub scroll_threshold: u32,
    pub poster_path: String,
    pub request_timeout_secs: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            poster_path: DEFAULT_POSTER_PATH.to_string(),
            request_timeout_secs: None,
            log_file: None,
        }
    }
}

/// Browse a remote movie list in the terminal.
#[derive(Parser, Debug, Default)]
#[command(name = "movielist", version, about, long_about = None)]
pub(crate) struct Args {
    /// Fetch the movie list from this URL instead of the configured one
    #[arg(long)]
    pub(crate) url: Option<String>,

    /// Write the log to this file instead of the configured one
    #[arg(long)]
    pub(crate) log_file: Option<PathBuf>,
}

impl AppConfig {
    /// Apply command line overrides on top of the loaded configuration.
    pub(crate) fn with_args(mut self, args: Args) -> Self {
        if let Some(url) = args.url {
            self.api_url = url;
        }
        if let Some(log_file) = args.log_file {
            self.log_file = Some(log_file);
        }
        self
    }

    /// Where the log should be written.
    ///
    /// An explicitly configured file wins, otherwise the log sits beside the
    /// configuration file, or in the temp directory if even that location
    /// can't be determined.
    pub(crate) fn log_path(&self) -> PathBuf {
        if let Some(path) = &self.log_file {
            return path.clone();
        }

        confy::get_configuration_file_path(CONFIG_NAME, None)
            .ok()
            .and_then(|path| path.parent().map(|dir| dir.join(LOG_FILE_NAME)))
            .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME))
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}
