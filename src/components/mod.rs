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

//! Reusable interactive UI components.
//!
//! Each component owns its transient UI state (cursor, input text, scroll
//! position), maps raw terminal events to a component action, and renders
//! itself. Components never change application state directly, the caller
//! turns their actions into application events.

mod browser;
mod filter_picker;
mod search;

pub(crate) use browser::{BrowserAction, BrowserView};
pub(crate) use filter_picker::{FilterPicker, FilterPickerAction};
pub(crate) use search::{SearchAction, SearchBox};
