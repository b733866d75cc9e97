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

/// Cleans up a line of user input for use as a song title or artist name.
///
/// Leading whitespace and any trailing line break are dropped and the result
/// is cut to at most `max_chars` characters. Returns `None` when nothing is
/// left, so blank input can be ignored by the caller. For example
/// `"  Imagine\n"` becomes `"Imagine"` and `"   "` becomes `None`.
pub(crate) fn clean_name(raw: &str, max_chars: usize) -> Option<String> {
    let trimmed = raw.trim_start().trim_end_matches(['\r', '\n']);
    if trimmed.is_empty() || max_chars == 0 {
        return None;
    }
    Some(trimmed.chars().take(max_chars).collect())
}

/// Formats a song count, e.g. `"1 song"` or `"3 songs"`.
pub(crate) fn format_count(count: usize) -> String {
    match count {
        1 => "1 song".to_string(),
        n => format!("{n} songs"),
    }
}
