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

//! Song and album browser.
//!
//! Shows the entries of the current view, as a grid of cards or as a table
//! depending on the display density, and keeps a cursor over them. The
//! entries themselves are owned by the view coordinator and passed in on
//! every call, so the browser only ever holds a position.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::{SongId, view::BrowserEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BrowserAction {
    Play(SongId),
    OpenAlbum(String),
    ShowAlbumOf(SongId),
    PreviewVideo(SongId),
}

pub(crate) struct BrowserView {
    cursor: usize,
    // Cards per grid row at the last render
    columns: usize,
    // First grid row on screen
    scroll_row: usize,
    table_state: TableState,
}

impl BrowserView {
    pub(crate) fn new() -> Self {
        Self {
            cursor: 0,
            columns: 1,
            scroll_row: 0,
            table_state: TableState::new(),
        }
    }

    pub(crate) fn reset(&mut self) {
        self.cursor = 0;
        self.scroll_row = 0;
        self.table_state = TableState::new();
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn selected<'a>(&self, entries: &'a [BrowserEntry]) -> Option<&'a BrowserEntry> {
        entries.get(self.cursor)
    }

    /// Moves the cursor onto the given entry, if present.
    pub(crate) fn focus(&mut self, entries: &[BrowserEntry], entry: &BrowserEntry) {
        if let Some(index) = entries.iter().position(|e| e == entry) {
            self.cursor = index;
        }
    }

    fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor >= len - 1 { 0 } else { self.cursor + 1 };
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
    }

    // Grid movement stops at the edges instead of wrapping
    fn move_by(&mut self, delta: isize, len: usize) {
        let target = self.cursor as isize + delta;
        if target >= 0 && (target as usize) < len {
            self.cursor = target as usize;
        }
    }

    fn goto_first(&mut self) {
        self.cursor = 0;
    }

    fn goto_last(&mut self, len: usize) {
        self.cursor = len.saturating_sub(1);
    }
}
