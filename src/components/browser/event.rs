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

//! Input handling for the browser.
//!
//! In list density the cursor moves one row at a time and wraps around. In
//! grid density vertical movement jumps a whole row of cards and stops at the
//! edges.

use crossterm::event::{Event, KeyCode};

use crate::{
    components::{BrowserAction, BrowserView},
    model::view::{BrowserEntry, Density},
};

impl BrowserView {
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        entries: &[BrowserEntry],
        density: Density,
    ) -> Option<BrowserAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        let len = entries.len();
        self.clamp(len);
        let columns = self.columns.max(1) as isize;

        match (key_event.code, density) {
            (KeyCode::Char('j') | KeyCode::Down, Density::List) => self.goto_next(len),
            (KeyCode::Char('k') | KeyCode::Up, Density::List) => self.goto_previous(len),
            (KeyCode::Char('j') | KeyCode::Down, Density::Grid) => self.move_by(columns, len),
            (KeyCode::Char('k') | KeyCode::Up, Density::Grid) => self.move_by(-columns, len),
            (KeyCode::Char('l') | KeyCode::Right, Density::Grid) => self.move_by(1, len),
            (KeyCode::Char('h') | KeyCode::Left, Density::Grid) => self.move_by(-1, len),
            (KeyCode::Char('g') | KeyCode::Home, _) => self.goto_first(),
            (KeyCode::Char('G') | KeyCode::End, _) => self.goto_last(len),

            (KeyCode::Enter, _) => {
                return self.selected(entries).map(|entry| match entry {
                    BrowserEntry::Song(id) => BrowserAction::Play(id.clone()),
                    BrowserEntry::Album(name) => BrowserAction::OpenAlbum(name.clone()),
                });
            }
            (KeyCode::Char('a'), _) => {
                return match self.selected(entries) {
                    Some(BrowserEntry::Song(id)) => Some(BrowserAction::ShowAlbumOf(id.clone())),
                    _ => None,
                };
            }
            (KeyCode::Char('v'), _) => {
                return match self.selected(entries) {
                    Some(BrowserEntry::Song(id)) => Some(BrowserAction::PreviewVideo(id.clone())),
                    _ => None,
                };
            }

            _ => {}
        }

        None
    }
}
