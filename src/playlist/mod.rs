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

//! The playlist engine.
//!
//! A [`Playlist`] is an ordered collection of [`Entry`] values that can be
//! walked in either direction. Entries live in an arena of slots addressed by
//! stable indices, and each slot records the indices of its neighbours, so
//! removing an entry only has to repair the links around it.
//!
//! Slots freed by removal are kept on a free list and reused by later appends.
//! Capacity for both the arena and the free list is reserved before anything
//! is changed, so an append either completes or leaves the playlist exactly
//! as it was.
//!
//! Traversal views borrow the playlist, which means it cannot be mutated while
//! a view is alive.

mod entry;
mod error;

pub(crate) use entry::Entry;
pub(crate) use error::PlaylistError;

use error::Result;

use std::{
    fmt,
    iter::{FusedIterator, Rev},
};

#[derive(Debug)]
struct Node {
    entry: Entry,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Default)]
pub(crate) struct Playlist {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl Playlist {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds a song to the end of the playlist.
    ///
    /// Returns the newly added entry so the caller can report it.
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError::AllocationFailure`] if storage for the new
    /// entry cannot be allocated, in which case the playlist is unchanged.
    pub(crate) fn append(
        &mut self,
        title: impl Into<String>,
        artist: impl Into<String>,
    ) -> Result<&Entry> {
        self.reserve()?;

        let entry = Entry::new(title, artist);
        log::debug!("Added song: {entry}");

        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.slots.push(None);
                self.slots.len() - 1
            }
        };

        let prev = self.tail.replace(index);
        match prev {
            Some(prev) => {
                if let Some(node) = self.slots[prev].as_mut() {
                    node.next = Some(index);
                }
            }
            None => self.head = Some(index),
        }
        self.len += 1;

        let node = self.slots[index].insert(Node {
            entry,
            prev,
            next: None,
        });

        Ok(&node.entry)
    }

    /// Removes the first song whose title exactly matches `title`.
    ///
    /// Later songs with the same title are left in place. Returns the removed
    /// entry, or `None` if no song has that title.
    pub(crate) fn remove_by_title(&mut self, title: &str) -> Option<Entry> {
        let Some(index) = self.position(title) else {
            log::debug!("Song not found: {title}");
            return None;
        };

        let node = self.slots[index].take()?;

        match node.prev {
            Some(prev) => {
                if let Some(prev) = self.slots[prev].as_mut() {
                    prev.next = node.next;
                }
            }
            None => self.head = node.next,
        }

        match node.next {
            Some(next) => {
                if let Some(next) = self.slots[next].as_mut() {
                    next.prev = node.prev;
                }
            }
            None => self.tail = node.prev,
        }

        self.len -= 1;
        if self.len == 0 {
            self.slots.clear();
            self.free.clear();
        } else {
            // Capacity for this was reserved when the slot was created.
            self.free.push(index);
        }

        log::debug!("Removed song: {}", node.entry);

        Some(node.entry)
    }

    /// Walks the playlist from the first song to the last.
    pub(crate) fn forward(&self) -> Iter<'_> {
        Iter {
            slots: &self.slots,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Walks the playlist from the last song to the first.
    pub(crate) fn backward(&self) -> Rev<Iter<'_>> {
        self.forward().rev()
    }

    /// Removes every song. Clearing an empty playlist does nothing.
    pub(crate) fn clear(&mut self) {
        if self.len > 0 {
            log::debug!("Cleared {} songs", self.len);
        }

        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // Makes sure the next append and the removal that might follow it need no
    // further allocation.
    fn reserve(&mut self) -> Result<()> {
        if self.free.is_empty() {
            self.slots
                .try_reserve(1)
                .map_err(PlaylistError::AllocationFailure)?;
            let wanted = self.slots.len() + 1;
            self.free
                .try_reserve(wanted)
                .map_err(PlaylistError::AllocationFailure)?;
        }
        Ok(())
    }

    fn position(&self, title: &str) -> Option<usize> {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = self.slots[index].as_ref()?;
            if node.entry.title == title {
                return Some(index);
            }
            cursor = node.next;
        }
        None
    }
}

impl fmt::Debug for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.forward()).finish()
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.forward()
    }
}

/// A read-only view over the entries of a [`Playlist`].
///
/// Created by [`Playlist::forward`] and, reversed, by [`Playlist::backward`].
pub(crate) struct Iter<'a> {
    slots: &'a [Option<Node>],
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<&'a Entry> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.slots.get(self.front?)?.as_ref()?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.slots.get(self.back?)?.as_ref()?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.entry)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles<'a>(entries: impl Iterator<Item = &'a Entry>) -> Vec<&'a str> {
        entries.map(|entry| entry.title.as_str()).collect()
    }

    fn playlist_of(titles: &[&str]) -> Playlist {
        let mut playlist = Playlist::new();
        for title in titles {
            playlist.append(*title, "Artist").unwrap();
        }
        playlist
    }

    fn assert_views(playlist: &Playlist, expected: &[&str]) {
        assert_eq!(titles(playlist.forward()), expected);

        let mut reversed = expected.to_vec();
        reversed.reverse();
        assert_eq!(titles(playlist.backward()), reversed);

        assert_eq!(playlist.len(), expected.len());
    }

    #[test]
    fn new_playlist_is_empty() {
        let playlist = Playlist::new();
        assert!(playlist.is_empty());
        assert_eq!(playlist.forward().count(), 0);
        assert_eq!(playlist.backward().count(), 0);
    }

    #[test]
    fn append_keeps_insertion_order_in_both_directions() {
        let playlist = playlist_of(&["One", "Two", "Three", "Four"]);
        assert_views(&playlist, &["One", "Two", "Three", "Four"]);
    }

    #[test]
    fn append_returns_the_added_entry() {
        let mut playlist = Playlist::new();
        let added = playlist.append("Yesterday", "Beatles").unwrap();
        assert_eq!(added, &Entry::new("Yesterday", "Beatles"));
    }

    #[test]
    fn removing_the_only_song_empties_the_playlist() {
        let mut playlist = Playlist::new();
        playlist.append("Solo", "Artist").unwrap();

        let removed = playlist.remove_by_title("Solo");
        assert_eq!(removed, Some(Entry::new("Solo", "Artist")));
        assert_views(&playlist, &[]);

        assert_eq!(playlist.remove_by_title("Solo"), None);
    }

    #[test]
    fn removing_head_tail_and_middle_keeps_links_intact() {
        let mut playlist = playlist_of(&["A", "B", "C", "D", "E"]);

        playlist.remove_by_title("A").unwrap();
        assert_views(&playlist, &["B", "C", "D", "E"]);

        playlist.remove_by_title("E").unwrap();
        assert_views(&playlist, &["B", "C", "D"]);

        playlist.remove_by_title("C").unwrap();
        assert_views(&playlist, &["B", "D"]);
    }

    #[test]
    fn removing_unknown_title_changes_nothing() {
        let mut playlist = playlist_of(&["A", "B"]);
        assert_eq!(playlist.remove_by_title("Z"), None);
        assert_views(&playlist, &["A", "B"]);
    }

    #[test]
    fn title_match_is_exact() {
        let mut playlist = playlist_of(&["Imagine"]);
        assert_eq!(playlist.remove_by_title("imagine"), None);
        assert_eq!(playlist.remove_by_title("Imagine "), None);
        assert_views(&playlist, &["Imagine"]);
    }

    #[test]
    fn removing_from_empty_playlist_is_not_found() {
        let mut playlist = Playlist::new();
        assert_eq!(playlist.remove_by_title("X"), None);
        assert!(playlist.is_empty());
    }

    #[test]
    fn only_first_duplicate_is_removed() {
        let mut playlist = Playlist::new();
        playlist.append("Imagine", "John Lennon").unwrap();
        playlist.append("Yesterday", "Beatles").unwrap();
        playlist.append("Imagine", "Cover Artist").unwrap();

        let expected = vec![
            Entry::new("Imagine", "John Lennon"),
            Entry::new("Yesterday", "Beatles"),
            Entry::new("Imagine", "Cover Artist"),
        ];
        assert_eq!(playlist.forward().cloned().collect::<Vec<_>>(), expected);

        let removed = playlist.remove_by_title("Imagine");
        assert_eq!(removed, Some(Entry::new("Imagine", "John Lennon")));

        let expected = vec![
            Entry::new("Yesterday", "Beatles"),
            Entry::new("Imagine", "Cover Artist"),
        ];
        assert_eq!(playlist.forward().cloned().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn clear_empties_and_is_idempotent() {
        let mut playlist = playlist_of(&["A", "B", "C"]);

        playlist.clear();
        assert_views(&playlist, &[]);

        playlist.clear();
        assert_views(&playlist, &[]);

        playlist.append("D", "Artist").unwrap();
        assert_views(&playlist, &["D"]);
    }

    #[test]
    fn freed_slots_are_reused_without_disturbing_order() {
        let mut playlist = playlist_of(&["A", "B", "C"]);

        playlist.remove_by_title("B").unwrap();
        playlist.append("D", "Artist").unwrap();

        assert_eq!(playlist.slots.len(), 3);
        assert_views(&playlist, &["A", "C", "D"]);

        playlist.remove_by_title("A").unwrap();
        playlist.append("E", "Artist").unwrap();
        assert_views(&playlist, &["C", "D", "E"]);
    }

    #[test]
    fn views_are_restartable() {
        let playlist = playlist_of(&["A", "B"]);
        let first: Vec<_> = playlist.forward().collect();
        let second: Vec<_> = playlist.forward().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn views_can_be_consumed_from_both_ends() {
        let playlist = playlist_of(&["A", "B", "C"]);
        let mut view = playlist.forward();

        assert_eq!(view.len(), 3);
        assert_eq!(view.next().map(|e| e.title.as_str()), Some("A"));
        assert_eq!(view.next_back().map(|e| e.title.as_str()), Some("C"));
        assert_eq!(view.next().map(|e| e.title.as_str()), Some("B"));
        assert_eq!(view.next_back(), None);
        assert_eq!(view.next(), None);
    }

    #[test]
    fn iterating_a_reference_walks_forward() {
        let playlist = playlist_of(&["A", "B"]);
        let mut seen = vec![];
        for entry in &playlist {
            seen.push(entry.title.clone());
        }
        assert_eq!(seen, ["A", "B"]);
    }

    #[test]
    fn removals_never_outgrow_the_reserved_free_list() {
        let mut playlist = Playlist::new();
        let mut expected: Vec<String> = vec![];
        let mut seed: u32 = 0x2545_f491;

        for step in 0..5000 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let roll = (seed >> 16) as usize;

            if expected.is_empty() || roll % 3 != 0 {
                let title = format!("Song {}", roll % 40);
                playlist.append(title.clone(), "Artist").unwrap();
                expected.push(title);
            } else {
                let title = expected[roll % expected.len()].clone();
                let removed = playlist.remove_by_title(&title).unwrap();
                assert_eq!(removed.title, title);
                let first = expected.iter().position(|t| *t == title).unwrap();
                expected.remove(first);
            }

            assert!(
                playlist.free.capacity() >= playlist.slots.len(),
                "free list capacity {} below {} slots at step {step}",
                playlist.free.capacity(),
                playlist.slots.len()
            );

            let forward: Vec<_> = titles(playlist.forward());
            let mut backward: Vec<_> = titles(playlist.backward());
            backward.reverse();
            assert_eq!(forward, backward);
            assert_eq!(forward, expected);
        }
    }

    #[test]
    fn allocation_failure_message() {
        let err = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        let err = PlaylistError::AllocationFailure(err);
        assert_eq!(err.to_string(), "Memory allocation failed");
    }
}
