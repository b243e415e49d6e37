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
//! This module implements a command-line component: a text input activated
//! with `:` that parses the submitted line and dispatches the corresponding
//! application event.
//!
//! | Command                         | Effect                              |
//! |---------------------------------|-------------------------------------|
//! | `lang`, `genre`, `year`, `singer`, `musicby` `[value]` | Set or clear a filter |
//! | `search [text]`                 | Set or clear the search text        |
//! | `reset`                         | Clear every filter and the search   |
//! | `view songs\|albums`            | Switch the browser view             |
//! | `style grid\|list`              | Switch the display density          |
//! | `album <name>`, `back`          | Open or leave an album              |
//! | `play`, `next`, `prev`, `random`, `shuffle` | Playback control        |
//! | `seek <percent>`, `vol <0-100>` | Absolute seek and volume            |
//! | `theme <name>`, `player`, `q`   | Theme, full player, quit            |

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    events::AppEvent,
    model::{
        filter::FilterDimension,
        view::{BrowseMode, Density},
    },
};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles a terminal event, returning `true` if it was consumed.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.active = false;
                self.input.reset();

                if !buffer.is_empty() {
                    let event = parse_command(&buffer).unwrap_or_else(AppEvent::Error);
                    event_tx.send(event)?;
                }
            }

            _ => {
                // Delegate all other keys to the managed input component
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }
}

/// Parses a submitted command line into the event it stands for.
pub(crate) fn parse_command(buffer: &str) -> Result<AppEvent, String> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let rest = |args: &[&str]| {
        let value = args.join(" ");
        (!value.is_empty()).then_some(value)
    };

    let event = match parts.as_slice() {
        ["q"] | ["quit"] => AppEvent::ExitApplication,

        ["lang" | "language", args @ ..] => AppEvent::SetFilter(FilterDimension::Language, rest(args)),
        ["genre", args @ ..] => AppEvent::SetFilter(FilterDimension::Genre, rest(args)),
        ["year", args @ ..] => AppEvent::SetFilter(FilterDimension::Year, rest(args)),
        ["singer", args @ ..] => AppEvent::SetFilter(FilterDimension::Singer, rest(args)),
        ["musicby" | "composer", args @ ..] => {
            AppEvent::SetFilter(FilterDimension::Composer, rest(args))
        }
        ["search", args @ ..] => AppEvent::SearchChanged(args.join(" ")),
        ["reset"] => AppEvent::ResetFilters,

        ["view", "songs"] | ["songs"] => AppEvent::SetViewMode(BrowseMode::Songs),
        ["view", "albums"] | ["albums"] => AppEvent::SetViewMode(BrowseMode::Albums),
        ["style", "grid"] | ["grid"] => AppEvent::SetDensity(Density::Grid),
        ["style", "list"] | ["list"] => AppEvent::SetDensity(Density::List),

        ["album", args @ ..] if !args.is_empty() => AppEvent::EnterAlbum(args.join(" ")),
        ["back"] => AppEvent::ExitAlbum,

        ["play"] | ["pause"] => AppEvent::TogglePlay,
        ["next"] => AppEvent::Next,
        ["prev"] => AppEvent::Previous,
        ["random"] => AppEvent::PlayRandom,
        ["shuffle"] => AppEvent::ToggleShuffle,

        ["seek", percent] => {
            let percent: f64 = percent
                .trim_end_matches('%')
                .parse()
                .map_err(|_| format!("Invalid seek position: {}", percent))?;
            AppEvent::SeekTo((percent / 100.0).clamp(0.0, 1.0))
        }
        ["vol", volume] => {
            let volume: u32 = volume
                .parse()
                .map_err(|_| format!("Invalid volume: {}", volume))?;
            AppEvent::SetVolume(volume.min(100))
        }

        ["theme", name] => AppEvent::SetTheme(name.to_string()),
        ["player"] => AppEvent::TogglePlayerOverlay,

        [cmd, ..] => return Err(format!("Unknown command: {}", cmd)),
        [] => return Err("Empty command".to_string()),
    };

    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use std::sync::mpsc;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_filter_commands() {
        assert_eq!(
            parse_command("lang Telugu"),
            Ok(AppEvent::SetFilter(FilterDimension::Language, Some("Telugu".into())))
        );
        assert_eq!(
            parse_command("musicby  A R  Rahman"),
            Ok(AppEvent::SetFilter(FilterDimension::Composer, Some("A R Rahman".into())))
        );
        assert_eq!(
            parse_command("singer"),
            Ok(AppEvent::SetFilter(FilterDimension::Singer, None))
        );
    }

    #[test]
    fn test_view_commands() {
        assert_eq!(parse_command("view albums"), Ok(AppEvent::SetViewMode(BrowseMode::Albums)));
        assert_eq!(parse_command("style list"), Ok(AppEvent::SetDensity(Density::List)));
        assert_eq!(parse_command("album Pushpa The Rise"), Ok(AppEvent::EnterAlbum("Pushpa The Rise".into())));
        assert!(parse_command("album").is_err());
    }

    #[test]
    fn test_seek_and_volume() {
        assert_eq!(parse_command("seek 25%"), Ok(AppEvent::SeekTo(0.25)));
        assert_eq!(parse_command("seek 150"), Ok(AppEvent::SeekTo(1.0)));
        assert_eq!(parse_command("vol 250"), Ok(AppEvent::SetVolume(100)));
        assert!(parse_command("vol loud").is_err());
    }

    #[test]
    fn test_search_command() {
        assert_eq!(parse_command("search  foo bar"), Ok(AppEvent::SearchChanged("foo bar".into())));
        assert_eq!(parse_command("search"), Ok(AppEvent::SearchChanged(String::new())));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(parse_command("dance"), Err("Unknown command: dance".to_string()));
    }

    #[test]
    fn test_typed_command_is_dispatched() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(!commander.handle_event(&key(KeyCode::Char('n')), &tx).unwrap());
        assert!(commander.handle_event(&key(KeyCode::Char(':')), &tx).unwrap());
        assert!(commander.active());

        for c in "next".chars() {
            commander.handle_event(&key(KeyCode::Char(c)), &tx).unwrap();
        }
        commander.handle_event(&key(KeyCode::Enter), &tx).unwrap();

        assert_eq!(rx.try_recv(), Ok(AppEvent::Next));
        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
    }

    #[test]
    fn test_escape_abandons_command() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(&key(KeyCode::Char(':')), &tx).unwrap();
        commander.handle_event(&key(KeyCode::Char('q')), &tx).unwrap();
        commander.handle_event(&key(KeyCode::Esc), &tx).unwrap();

        assert!(rx.try_recv().is_err());
        assert!(!commander.active());
    }
}
