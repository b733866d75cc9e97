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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework.
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every event processed by the event loop.

mod commander;
mod playlist;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    App,
    render::{
        commander::draw_commander,
        playlist::draw_playlist,
        status::{draw_menu, draw_status},
    },
};

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the playlist, a menu line, a status line and the
/// prompt line.
pub(crate) fn draw(f: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_playlist(f, outer[0], &app.playlist, app.view, &app.theme);
    draw_menu(f, outer[1], &app.theme);
    draw_status(f, outer[2], app.status.as_ref(), &app.theme);
    draw_commander(f, outer[3], app);
}
