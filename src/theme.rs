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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the named colour palettes the user can pick from and
//! provides utilities for converting colors between Ratatui's internal
//! representation and the hexadecimal strings used for terminal emulator
//! styling.

use ratatui::style::Color;

/// Names of the selectable palettes, in the order they are offered.
pub(crate) const THEME_NAMES: [&str; 5] = ["default", "ocean", "sunset", "forest", "gold"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,

    pub(crate) title_fg: Color,
    pub(crate) artist_fg: Color,
    pub(crate) album_fg: Color,
    pub(crate) tag_fg: Color,
    pub(crate) muted_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::palette(Color::Rgb(0, 0, 0), Color::Rgb(138, 43, 226))
    }
}

impl Theme {
    /// Looks up a palette by name.
    pub(crate) fn named(name: &str) -> Option<Self> {
        let (background, accent) = match name {
            "default" => return Some(Self::default()),
            "ocean" => (Color::Rgb(0, 26, 26), Color::Rgb(0, 191, 255)),
            "sunset" => (Color::Rgb(26, 5, 0), Color::Rgb(255, 69, 0)),
            "forest" => (Color::Rgb(5, 26, 5), Color::Rgb(50, 205, 50)),
            "gold" => (Color::Rgb(26, 26, 0), Color::Rgb(255, 215, 0)),
            _ => return None,
        };

        Some(Self::palette(background, accent))
    }

    // Palettes only differ in background and accent
    const fn palette(background: Color, accent: Color) -> Self {
        Self {
            background_colour: background,
            accent_colour: accent,
            border_colour: Color::Rgb(102, 102, 102),
            gauge_track_colour: Color::Rgb(50, 50, 50),

            title_fg: Color::Rgb(255, 255, 255),
            artist_fg: Color::Rgb(179, 179, 179),
            album_fg: Color::Rgb(179, 157, 219),
            tag_fg: accent,
            muted_fg: Color::Rgb(162, 161, 166),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Only `Rgb` colours have a hex form.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_offered_theme_exists() {
        for name in THEME_NAMES {
            assert!(Theme::named(name).is_some(), "{}", name);
        }
        assert_eq!(Theme::named("neon"), None);
    }

    #[test]
    fn test_palette_colours() {
        let ocean = Theme::named("ocean").unwrap();

        assert_eq!(Theme::to_hex(ocean.background_colour).as_deref(), Some("#001a1a"));
        assert_eq!(Theme::to_hex(ocean.accent_colour).as_deref(), Some("#00bfff"));
        assert_eq!(Theme::to_hex(Theme::default().accent_colour).as_deref(), Some("#8a2be2"));
        assert_eq!(Theme::to_hex(Color::Reset), None);
    }
}
