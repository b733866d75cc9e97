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

//! Handlers for the application events that change state.

use anyhow::{Context, Result};

use crate::{App, ViewDirection, events::Status};

pub(super) fn handle_add_song(app: &mut App, title: String, artist: String) -> Result<()> {
    let entry = app
        .playlist
        .append(title, artist)
        .context("Failed to add song")?;

    let message = format!("Added song: {entry}");
    log::info!("{message}");
    app.status = Some(Status::Info(message));

    Ok(())
}

pub(super) fn handle_remove_song(app: &mut App, title: &str) {
    app.status = match app.playlist.remove_by_title(title) {
        Some(entry) => {
            log::info!("Removed song: {entry}");
            Some(Status::Info(format!("Removed song: {title}")))
        }
        None => {
            log::info!("Song not found: {title}");
            Some(Status::Error(format!("Song not found: {title}")))
        }
    };
}

pub(super) fn handle_set_view(app: &mut App, view: ViewDirection) {
    log::debug!("Showing playlist ({})", view.label());
    app.view = view;
}

pub(super) fn handle_exit(app: &mut App) {
    app.playlist.clear();
    app.commander.cancel();
    log::info!("Exiting...");
}
