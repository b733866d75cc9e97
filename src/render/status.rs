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

//! Render the menu and status lines.

use ratatui::{Frame, layout::Rect, style::Style, widgets::Paragraph};

use crate::{events::Status, theme::Theme};

const MENU: &str =
    " 1/a Add song   2/r Remove song by title   3/f Forward   4/b Reverse   5/q Exit";

pub(crate) fn draw_menu(f: &mut Frame, area: Rect, theme: &Theme) {
    f.render_widget(
        Paragraph::new(MENU).style(Style::default().fg(theme.menu_fg)),
        area,
    );
}

pub(crate) fn draw_status(f: &mut Frame, area: Rect, status: Option<&Status>, theme: &Theme) {
    let (text, colour) = match status {
        Some(Status::Info(text)) => (text.as_str(), theme.status_fg),
        Some(Status::Error(text)) => (text.as_str(), theme.error_fg),
        None => ("", theme.status_fg),
    };

    f.render_widget(
        Paragraph::new(format!(" {text}")).style(Style::default().fg(colour)),
        area,
    );
}
