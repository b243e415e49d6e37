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

use crossterm::event::{Event, KeyCode};

use crate::{
    components::{FilterPicker, FilterPickerAction},
    model::catalog::FilterVocabulary,
};

impl FilterPicker {
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        vocabulary: &FilterVocabulary,
    ) -> Option<FilterPickerAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        let len = self.choices(vocabulary).len();

        match key_event.code {
            KeyCode::Esc | KeyCode::Char('f') | KeyCode::Char('q') => self.close(),

            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => self.cycle_dimension(true),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => self.cycle_dimension(false),

            KeyCode::Down | KeyCode::Char('j') => {
                let i = self.list_state.selected().map_or(0, |i| (i + 1) % len);
                self.list_state.select(Some(i));
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let i = self.list_state.selected().map_or(0, |i| (i + len - 1) % len);
                self.list_state.select(Some(i));
            }

            KeyCode::Enter => {
                let index = self.list_state.selected().unwrap_or(0);
                let value = self
                    .choices(vocabulary)
                    .get(index)
                    .copied()
                    .flatten()
                    .map(|v| v.to_string());

                return Some(FilterPickerAction::Select(self.dimension(), value));
            }

            _ => {}
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::filter::FilterDimension;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn vocabulary() -> FilterVocabulary {
        serde_json::from_str(r#"{ "languages": ["Telugu", "Tamil"], "genres": ["Melody"] }"#)
            .unwrap()
    }

    #[test]
    fn test_select_value_and_all() {
        let vocab = vocabulary();
        let mut picker = FilterPicker::new();
        picker.open();

        assert_eq!(
            picker.process_event(&key(KeyCode::Enter), &vocab),
            Some(FilterPickerAction::Select(FilterDimension::Language, None))
        );

        picker.process_event(&key(KeyCode::Down), &vocab);
        picker.process_event(&key(KeyCode::Down), &vocab);
        assert_eq!(
            picker.process_event(&key(KeyCode::Enter), &vocab),
            Some(FilterPickerAction::Select(FilterDimension::Language, Some("Tamil".into())))
        );
        assert!(picker.is_active());
    }

    #[test]
    fn test_switch_dimension_resets_cursor() {
        let vocab = vocabulary();
        let mut picker = FilterPicker::new();
        picker.open();
        picker.process_event(&key(KeyCode::Down), &vocab);

        picker.process_event(&key(KeyCode::Tab), &vocab);
        picker.process_event(&key(KeyCode::Down), &vocab);

        assert_eq!(
            picker.process_event(&key(KeyCode::Enter), &vocab),
            Some(FilterPickerAction::Select(FilterDimension::Genre, Some("Melody".into())))
        );

        picker.process_event(&key(KeyCode::BackTab), &vocab);
        picker.process_event(&key(KeyCode::BackTab), &vocab);
        assert_eq!(picker.dimension(), FilterDimension::Composer);
    }

    #[test]
    fn test_cursor_wraps_over_choices() {
        let vocab = vocabulary();
        let mut picker = FilterPicker::new();
        picker.open();

        // Language choices: All, Telugu, Tamil
        picker.process_event(&key(KeyCode::Up), &vocab);
        assert_eq!(
            picker.process_event(&key(KeyCode::Enter), &vocab),
            Some(FilterPickerAction::Select(FilterDimension::Language, Some("Tamil".into())))
        );
    }

    #[test]
    fn test_escape_closes() {
        let mut picker = FilterPicker::new();
        picker.open();

        assert_eq!(picker.process_event(&key(KeyCode::Esc), &vocabulary()), None);
        assert!(!picker.is_active());
    }
}
