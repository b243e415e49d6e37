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

//! Free-text search input.
//!
//! The search box edits the search text of the active filter selection. Every
//! edit is reported so the visible songs follow the typing.

mod event;
mod render;

use tui_input::Input;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SearchAction {
    Changed(String),
}

pub(crate) struct SearchBox {
    active: bool,
    pub(crate) input: Input,
}

impl SearchBox {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn activate(&mut self) {
        self.active = true;
    }

    pub(crate) fn clear(&mut self) {
        self.active = false;
        self.input.reset();
    }

    /// Shows search text set from elsewhere, such as the command line.
    pub(crate) fn set_text(&mut self, text: &str) {
        if self.input.value() != text {
            self.input = Input::new(text.to_string());
        }
    }
}
