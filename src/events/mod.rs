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

//! Application events and the main event loop.
//!
//! Every change to the application state goes through an [`AppEvent`]. Input
//! and tick threads only send events; the loop in [`process_events`] is the
//! single place that receives them, so the playlist is only ever touched from
//! the main thread.
//!
//! Key presses are offered to the [`Commander`](crate::commander::Commander)
//! first. Keys it does not consume are treated as menu choices.

mod handlers;
use handlers::*;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::{App, ViewDirection, render::draw, util::term::Tui};

const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Tick,

    AddSong { title: String, artist: String },
    RemoveSong(String),

    SetView(ViewDirection),

    ExitApplication,
}

/// The message shown on the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Status {
    Info(String),
    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed. Errors raised while handling a single event are shown on the
/// status line rather than ending the loop.
pub(crate) fn process_events(terminal: &mut Tui, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            handle_exit(app);
            break;
        }

        if let Err(e) = handle_event(app, event) {
            log::error!("{e:#}");
            app.status = Some(Status::Error(format!("{e:#}")));
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::AddSong { title, artist } => handle_add_song(app, title, artist)?,
        AppEvent::RemoveSong(title) => handle_remove_song(app, &title),
        AppEvent::SetView(view) => handle_set_view(app, view),
        AppEvent::ExitApplication => handle_exit(app),
        AppEvent::Tick => {}
    }

    Ok(())
}

/// Routes a key press to the prompt, or to the menu when no prompt is open.
///
/// # Errors
///
/// Returns an error if a resulting event cannot be sent to the event loop.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);
    if app.commander.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    process_menu_key_event(app, key)
}

fn process_menu_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char('1' | 'a'), _) => {
            app.status = None;
            app.commander.begin_add();
        }
        (KeyCode::Char('2' | 'r'), _) => {
            app.status = None;
            app.commander.begin_remove();
        }

        (KeyCode::Char('3' | 'f'), _) => app
            .event_tx
            .send(AppEvent::SetView(ViewDirection::Forward))?,
        (KeyCode::Char('4' | 'b'), _) => app
            .event_tx
            .send(AppEvent::SetView(ViewDirection::Backward))?,

        (KeyCode::Char('5' | 'q'), _) | (KeyCode::Esc, _) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char(_), _) => app.status = Some(Status::Error(INVALID_CHOICE.to_string())),

        _ => {}
    }

    Ok(())
}
