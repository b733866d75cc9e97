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

//! Render the playlist.
//!
//! Songs are listed in the current view direction, each with its position in
//! the playlist counted from the first song.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::{
    ViewDirection,
    playlist::{Entry, Playlist},
    theme::Theme,
    util::format::format_count,
};

pub(crate) fn draw_playlist(
    f: &mut Frame,
    area: Rect,
    playlist: &Playlist,
    view: ViewDirection,
    theme: &Theme,
) {
    let block = Block::default()
        .title(format!(
            " Playlist ({}) - {} ",
            view.label(),
            format_count(playlist.len())
        ))
        .title_style(
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour));

    if playlist.is_empty() {
        let empty = Paragraph::new("Playlist is empty")
            .style(Style::default().fg(theme.status_fg))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let len = playlist.len();
    let items: Vec<ListItem> = match view {
        ViewDirection::Forward => playlist
            .forward()
            .enumerate()
            .map(|(i, entry)| entry_item(i + 1, entry, theme))
            .collect(),
        ViewDirection::Backward => playlist
            .backward()
            .enumerate()
            .map(|(i, entry)| entry_item(len - i, entry, theme))
            .collect(),
    };

    f.render_widget(List::new(items).block(block), area);
}

fn entry_item<'a>(position: usize, entry: &'a Entry, theme: &Theme) -> ListItem<'a> {
    ListItem::new(Line::from(vec![
        Span::styled(format!("{position:>3}. "), Style::default().fg(theme.position_fg)),
        Span::styled(entry.title.as_str(), Style::default().fg(theme.title_fg)),
        Span::styled(" by ", Style::default().fg(theme.position_fg)),
        Span::styled(entry.artist.as_str(), Style::default().fg(theme.artist_fg)),
    ]))
}
