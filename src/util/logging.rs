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

//! Diagnostic logging.
//!
//! The terminal belongs to the UI, so log output goes to a file. The filter
//! is taken from `RUST_LOG` when set.

use std::{
    env,
    fs::{self, File, OpenOptions},
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "movielist=info";
const FALLBACK_FILE_NAME: &str = "movielist.log";

/// Install the log subscriber, writing to `path` or, if that cannot be
/// opened, to the same file name in the temporary directory.
///
/// Returns the path actually written to.
pub(crate) fn init_logging(path: &Path) -> Result<PathBuf> {
    let (file, used) = open_log_file(path)?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    if used != path {
        tracing::warn!(requested = %path.display(), used = %used.display(), "log file moved to temporary directory");
    }

    Ok(used)
}

fn open_log_file(path: &Path) -> Result<(File, PathBuf)> {
    match open_append(path) {
        Ok(file) => Ok((file, path.to_path_buf())),
        Err(e) => {
            let name = path.file_name().unwrap_or(FALLBACK_FILE_NAME.as_ref());
            let fallback = env::temp_dir().join(name);
            let file = open_append(&fallback).with_context(|| format!("{:#}", e))?;
            Ok((file, fallback))
        }
    }
}

fn open_append(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::process;

    use super::*;

    #[test]
    fn opens_the_requested_file() {
        let path = env::temp_dir()
            .join(format!("movielist-log-{}", process::id()))
            .join("requested.log");

        let (_file, used) = open_log_file(&path).unwrap();

        assert_eq!(used, path);
        assert!(path.exists());
        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn unwritable_directory_falls_back_to_temp() {
        // A regular file where the log directory should be
        let blocker = env::temp_dir().join(format!("movielist-blocker-{}", process::id()));
        fs::write(&blocker, b"").unwrap();
        let name = format!("movielist-fallback-{}.log", process::id());

        let (_file, used) = open_log_file(&blocker.join(&name)).unwrap();

        assert_eq!(used, env::temp_dir().join(&name));
        fs::remove_file(&used).ok();
        fs::remove_file(&blocker).ok();
    }
}
