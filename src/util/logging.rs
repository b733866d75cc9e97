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

//! Logger setup.
//!
//! Log records go through the [`log`] facade and are written by
//! `env_logger`. The terminal is owned by the UI while the application runs,
//! so records are only written to stderr when `RUST_LOG` asks for them;
//! otherwise they go to the configured log file, or nowhere.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::config::AppConfig;

/// Installs the global logger according to `config`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a logger has
/// already been installed.
pub(crate) fn init_logging(config: &AppConfig) -> Result<()> {
    let mut builder = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
            builder.target(Target::Pipe(Box::new(file)));
            builder
        }
        None => Builder::from_env(Env::default().default_filter_or("off")),
    };

    builder.try_init().context("Failed to initialise logging")?;

    Ok(())
}
