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

//! Filter value picker.
//!
//! A popup listing the filter dimensions as tabs and, for the focused one,
//! "All" followed by the values of the filter vocabulary. Choosing a value
//! applies it immediately; the popup stays open until dismissed so several
//! dimensions can be set in one go.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::model::{TagValue, catalog::FilterVocabulary, filter::FilterDimension};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FilterPickerAction {
    Select(FilterDimension, Option<String>),
}

pub(crate) struct FilterPicker {
    active: bool,
    dimension: usize,
    list_state: ListState,
}

impl FilterPicker {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            dimension: 0,
            list_state: ListState::default(),
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn open(&mut self) {
        self.active = true;
        self.list_state.select(Some(0));
    }

    fn close(&mut self) {
        self.active = false;
    }

    pub(crate) fn dimension(&self) -> FilterDimension {
        FilterDimension::ALL[self.dimension]
    }

    fn cycle_dimension(&mut self, forward: bool) {
        let len = FilterDimension::ALL.len();
        self.dimension = if forward {
            (self.dimension + 1) % len
        } else {
            (self.dimension + len - 1) % len
        };
        self.list_state.select(Some(0));
    }

    /// The choices for the focused dimension, `None` standing for "All".
    fn choices<'a>(&self, vocabulary: &'a FilterVocabulary) -> Vec<Option<&'a TagValue>> {
        std::iter::once(None)
            .chain(vocabulary.values(self.dimension()).iter().map(Some))
            .collect()
    }
}
