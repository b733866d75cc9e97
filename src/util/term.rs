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

//! Terminal environment and styling utilities.
//!
//! This module owns the terminal lifecycle (raw mode and the alternate
//! screen) and sets the terminal emulator's background colour with OSC escape
//! sequences. Most modern terminals (XTerm, iTerm2, Alacritty, Kitty) support
//! these sequences; others ignore them.

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, style::Color};

use crate::theme::Theme;

pub(crate) type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Prepares the terminal for the TUI application.
///
/// Sets the terminal background from the theme, enables raw mode and
/// switches to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
pub(crate) fn setup_terminal(theme: &Theme) -> Result<Tui> {
    // Without this the terminal shows a thin outline in its own colour
    if let Err(e) = set_terminal_bg(theme.background_colour) {
        log::warn!("Failed to set terminal background: {e}");
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Failed to create terminal")
}

/// Restores the terminal to its original state.
///
/// Best-effort: this runs during cleanup, so failures are ignored.
pub(crate) fn restore_terminal(terminal: &mut Tui) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

// OSC 11 sets the background, the colour must be an RGB value.
fn set_terminal_bg(colour: Color) -> io::Result<()> {
    match Theme::to_hex(colour) {
        Some(hex) => write_osc(&format!("11;{hex}")),
        None => Ok(()),
    }
}

// OSC 111 reverts the background to the user's own configuration.
fn reset_terminal_bg() -> io::Result<()> {
    write_osc("111")
}

fn write_osc(body: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]{body}\x07")?;
    stdout.flush()
}
