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

//! Command-line input logic and state management.
//!
//! This module implements the prompt shown at the bottom of the screen. A
//! prompt is opened from the menu, collects one or more lines of text through
//! a managed text input component, and dispatches the corresponding
//! application event once the last line is submitted.

use std::{mem, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyModifiers};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{events::AppEvent, util::format::clean_name};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Prompt {
    Idle,
    AddTitle,
    AddArtist { title: String },
    RemoveTitle,
}

pub(crate) struct Commander {
    prompt: Prompt,
    pub(crate) input: Input,
    max_name_length: usize,
}

impl Commander {
    pub(crate) fn new(max_name_length: usize) -> Self {
        Self {
            prompt: Prompt::Idle,
            input: Input::default(),
            max_name_length,
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.prompt != Prompt::Idle
    }

    /// Starts collecting the title and artist of a song to add.
    pub(crate) fn begin_add(&mut self) {
        self.open(Prompt::AddTitle);
    }

    /// Starts collecting the title of a song to remove.
    pub(crate) fn begin_remove(&mut self) {
        self.open(Prompt::RemoveTitle);
    }

    pub(crate) fn cancel(&mut self) {
        self.open(Prompt::Idle);
    }

    pub(crate) fn label(&self) -> &'static str {
        match self.prompt {
            Prompt::Idle => "",
            Prompt::AddTitle => "Enter song title: ",
            Prompt::AddArtist { .. } => "Enter artist name: ",
            Prompt::RemoveTitle => "Enter song title to remove: ",
        }
    }

    /// Feeds a terminal event to the prompt.
    ///
    /// Returns `true` if the prompt consumed the event, in which case it must
    /// not be handled anywhere else.
    ///
    /// # Errors
    ///
    /// Returns an error if a completed request cannot be sent to the event
    /// loop.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        if !self.active() {
            return Ok(false);
        }

        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        // Ctrl-C is left to the menu so it can always exit.
        if key_event.code == KeyCode::Char('c') && key_event.modifiers == KeyModifiers::CONTROL {
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => self.cancel(),

            KeyCode::Enter => self.submit(event_tx)?,

            // Delegate everything else to the managed input component.
            _ => {
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }

    fn open(&mut self, prompt: Prompt) {
        self.prompt = prompt;
        self.input.reset();
    }

    fn submit(&mut self, event_tx: &Sender<AppEvent>) -> Result<()> {
        // Blank lines are ignored and the prompt keeps waiting.
        let Some(value) = clean_name(self.input.value(), self.max_name_length) else {
            return Ok(());
        };

        self.input.reset();

        match mem::replace(&mut self.prompt, Prompt::Idle) {
            Prompt::Idle => {}
            Prompt::AddTitle => self.prompt = Prompt::AddArtist { title: value },
            Prompt::AddArtist { title } => event_tx.send(AppEvent::AddSong {
                title,
                artist: value,
            })?,
            Prompt::RemoveTitle => event_tx.send(AppEvent::RemoveSong(value))?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use crossterm::event::KeyEvent;

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_line(commander: &mut Commander, tx: &Sender<AppEvent>, text: &str) {
        for c in text.chars() {
            assert!(commander.handle_event(&key(KeyCode::Char(c)), tx).unwrap());
        }
        assert!(commander.handle_event(&key(KeyCode::Enter), tx).unwrap());
    }

    fn setup() -> (Commander, Sender<AppEvent>, Receiver<AppEvent>) {
        let (tx, rx) = mpsc::channel();
        (Commander::new(99), tx, rx)
    }

    #[test]
    fn idle_commander_ignores_keys() {
        let (mut commander, tx, rx) = setup();
        assert!(!commander.handle_event(&key(KeyCode::Char('x')), &tx).unwrap());
        assert!(!commander.handle_event(&key(KeyCode::Enter), &tx).unwrap());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn add_prompt_asks_for_title_then_artist() {
        let (mut commander, tx, rx) = setup();

        commander.begin_add();
        assert_eq!(commander.label(), "Enter song title: ");

        type_line(&mut commander, &tx, "Imagine");
        assert!(commander.active());
        assert_eq!(commander.label(), "Enter artist name: ");
        assert!(rx.try_recv().is_err());

        type_line(&mut commander, &tx, "John Lennon");
        assert!(!commander.active());

        match rx.try_recv().unwrap() {
            AppEvent::AddSong { title, artist } => {
                assert_eq!(title, "Imagine");
                assert_eq!(artist, "John Lennon");
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn remove_prompt_sends_title() {
        let (mut commander, tx, rx) = setup();

        commander.begin_remove();
        assert_eq!(commander.label(), "Enter song title to remove: ");
        type_line(&mut commander, &tx, "Yesterday");

        assert!(!commander.active());
        assert!(matches!(rx.try_recv().unwrap(), AppEvent::RemoveSong(t) if t == "Yesterday"));
    }

    #[test]
    fn blank_submission_keeps_prompt_open() {
        let (mut commander, tx, rx) = setup();

        commander.begin_remove();
        type_line(&mut commander, &tx, "   ");

        assert!(commander.active());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn escape_cancels_prompt() {
        let (mut commander, tx, rx) = setup();

        commander.begin_add();
        type_line(&mut commander, &tx, "Imagine");
        assert!(commander.handle_event(&key(KeyCode::Esc), &tx).unwrap());

        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn ctrl_c_is_not_consumed_by_open_prompt() {
        let (mut commander, tx, rx) = setup();

        commander.begin_add();
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert!(!commander.handle_event(&ctrl_c, &tx).unwrap());
        assert_eq!(commander.input.value(), "");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn long_text_is_truncated() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new(5);

        commander.begin_remove();
        type_line(&mut commander, &tx, "Bohemian Rhapsody");

        assert!(matches!(rx.try_recv().unwrap(), AppEvent::RemoveSong(t) if t == "Bohem"));
    }
}
