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

//! # Playlist Manager.
//!
//! A terminal-based manager for an in-memory playlist of songs.
//!
//! Songs can be added, removed by title, and listed from first to last or
//! from last to first. The playlist lives only for the lifetime of the
//! process and is cleared on exit.
//!
//! ## Architecture
//!
//! * The **Main Thread** owns the application state, including the playlist,
//!   and runs the event loop that updates state and renders the UI.
//! * An **Input Thread** translates terminal key presses into application
//!   events.
//! * A **Tick Thread** sends periodic events so the UI is redrawn, for
//!   example after the terminal is resized.
//!
//! Communication between the threads is handled via `std::sync::mpsc`
//! channels. The application follows a strict setup-run-teardown pattern so
//! the terminal state is restored even when the event loop fails.

mod commander;
mod config;
mod events;
mod playlist;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use serde::{Deserialize, Serialize};
use std::{
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    commander::Commander,
    config::AppConfig,
    events::{AppEvent, Status, process_events},
    playlist::Playlist,
    theme::Theme,
    util::term::{self, Tui},
};

const TICK_RATE: Duration = Duration::from_millis(250);

/// The order in which the playlist is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum ViewDirection {
    Forward,
    Backward,
}

impl ViewDirection {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ViewDirection::Forward => "Forward",
            ViewDirection::Backward => "Reverse",
        }
    }
}

/// Application state.
pub(crate) struct App {
    pub(crate) theme: Theme,
    pub(crate) view: ViewDirection,

    pub(crate) event_tx: Sender<AppEvent>,
    pub(crate) event_rx: Receiver<AppEvent>,

    pub(crate) playlist: Playlist,

    pub(crate) commander: Commander,
    pub(crate) status: Option<Status>,
}

impl App {
    /// Create a new instance of application state around `playlist`.
    pub(crate) fn new(config: &AppConfig, playlist: Playlist) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            theme: Theme::default(),
            view: config.default_view,
            event_tx,
            event_rx,
            playlist,
            commander: Commander::new(config.max_name_length),
            status: None,
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, sets up logging and the terminal, runs the event
/// loop, and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    util::logging::init_logging(&config)?;
    log::info!("Starting playlist manager");

    let mut app = App::new(&config, Playlist::new());

    let mut terminal = term::setup_terminal(&app.theme)?;
    let res = run(&mut terminal, &mut app);
    term::restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Starts the input and tick threads and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop fails to render.
fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    // Translate raw key presses to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let sent = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    tx_keys.send(AppEvent::Key(key))
                }
                Ok(Event::Resize(..)) => tx_keys.send(AppEvent::Tick),
                Ok(_) => Ok(()),
                Err(e) => {
                    log::error!("Failed to read terminal input: {e}");
                    let _ = tx_keys.send(AppEvent::ExitApplication);
                    break;
                }
            };

            if sent.is_err() {
                break;
            }
        }
    });

    // The tick is effectively the minimum "frame rate" of the UI.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_RATE);
        }
    });

    process_events(terminal, app)
}
