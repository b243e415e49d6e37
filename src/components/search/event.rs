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

//! Input handling for the search box.
//!
//! Enter keeps the text and leaves the box, Esc clears the text and leaves.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{SearchAction, SearchBox};

impl SearchBox {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SearchAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Enter => {
                self.active = false;
                None
            }

            KeyCode::Esc => {
                let had_text = !self.input.value().is_empty();
                self.clear();
                had_text.then(|| SearchAction::Changed(String::new()))
            }

            _ => {
                let before = self.input.value().to_string();
                self.input.handle_event(event);

                let after = self.input.value();
                (after != before).then(|| SearchAction::Changed(after.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_typing_reports_each_change() {
        let mut search = SearchBox::new();
        search.activate();

        assert_eq!(
            search.process_event(&key(KeyCode::Char('b'))),
            Some(SearchAction::Changed("b".into()))
        );
        assert_eq!(
            search.process_event(&key(KeyCode::Char('o'))),
            Some(SearchAction::Changed("bo".into()))
        );
        assert_eq!(
            search.process_event(&key(KeyCode::Backspace)),
            Some(SearchAction::Changed("b".into()))
        );
    }

    #[test]
    fn test_cursor_keys_report_nothing() {
        let mut search = SearchBox::new();
        search.activate();
        search.process_event(&key(KeyCode::Char('x')));

        assert_eq!(search.process_event(&key(KeyCode::Left)), None);
    }

    #[test]
    fn test_enter_keeps_text_escape_clears() {
        let mut search = SearchBox::new();
        search.activate();
        search.process_event(&key(KeyCode::Char('x')));

        assert_eq!(search.process_event(&key(KeyCode::Enter)), None);
        assert!(!search.is_active());
        assert_eq!(search.input.value(), "x");

        search.activate();
        assert_eq!(
            search.process_event(&key(KeyCode::Esc)),
            Some(SearchAction::Changed(String::new()))
        );
        assert!(!search.is_active());
        assert_eq!(search.input.value(), "");
    }

    #[test]
    fn test_typing_continues_from_text_set_elsewhere() {
        let mut search = SearchBox::new();
        search.activate();
        search.process_event(&key(KeyCode::Char('x')));
        search.process_event(&key(KeyCode::Enter));

        search.set_text("foo");
        assert_eq!(search.input.value(), "foo");

        search.activate();
        assert_eq!(
            search.process_event(&key(KeyCode::Char('d'))),
            Some(SearchAction::Changed("food".into()))
        );
    }
}
