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

//! Keyboard input routing.
//!
//! Keys go to the first interested party: the command line, then whichever
//! input component or overlay has focus, then the song browser, and finally
//! the global key bindings.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::{
    App, Overlay,
    components::{BrowserAction, FilterPickerAction, SearchAction},
    events::AppEvent,
    model::view::BrowseMode,
};

const FINE_VOLUME_DELTA: i32 = 1;
const VOLUME_DELTA: i32 = 5;

const FINE_SEEK_DELTA: i32 = 5;
const SEEK_DELTA: i32 = 20;

/// Maps keyboard input to application actions and playback commands.
///
/// # Errors
///
/// Returns an error if a command fails to send to a background worker or if
/// a requested action cannot be executed.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    // Any key acknowledges the last message
    app.status = None;

    let event = Event::Key(key);
    if !app.search_box.is_active() && app.commander.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    if app.search_box.is_active() {
        if let Some(SearchAction::Changed(text)) = app.search_box.process_event(&event) {
            app.event_tx.send(AppEvent::SearchChanged(text))?;
        }
        return Ok(());
    }

    if app.filter_picker.is_active() {
        let action = app
            .filter_picker
            .process_event(&event, app.catalog.vocabulary());
        if let Some(FilterPickerAction::Select(dimension, value)) = action {
            app.event_tx.send(AppEvent::SetFilter(dimension, value))?;
        }
        return Ok(());
    }

    match app.overlay {
        Overlay::Video(_) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('v') | KeyCode::Enter) {
                app.event_tx.send(AppEvent::CloseOverlay)?;
            }
            return Ok(());
        }
        Overlay::Player => {
            if matches!(key.code, KeyCode::Esc) {
                app.event_tx.send(AppEvent::CloseOverlay)?;
                return Ok(());
            }
        }
        Overlay::None => {
            let entries = app.view.entries(app.catalog.songs());
            let density = app.view.density();

            if let Some(action) = app.browser.process_event(&event, &entries, density) {
                let event = match action {
                    BrowserAction::Play(id) => AppEvent::PlaySong(id),
                    BrowserAction::OpenAlbum(name) => AppEvent::EnterAlbum(name),
                    BrowserAction::ShowAlbumOf(id) => AppEvent::ShowAlbumOf(id),
                    BrowserAction::PreviewVideo(id) => AppEvent::PreviewVideo(id),
                };
                app.event_tx.send(event)?;
                return Ok(());
            }
        }
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = match key.code {
        KeyCode::Char('q') => Some(AppEvent::ExitApplication),

        KeyCode::Char('/') => {
            app.search_box.activate();
            None
        }
        KeyCode::Char('f') => {
            app.filter_picker.open();
            None
        }
        KeyCode::Char('r') => Some(AppEvent::ResetFilters),

        KeyCode::Char('1') => Some(AppEvent::SetViewMode(BrowseMode::Songs)),
        KeyCode::Char('2') => Some(AppEvent::SetViewMode(BrowseMode::Albums)),
        KeyCode::Char('d') => Some(AppEvent::ToggleDensity),
        KeyCode::Esc | KeyCode::Backspace => Some(AppEvent::ExitAlbum),

        KeyCode::Char('o') => Some(AppEvent::TogglePlayerOverlay),
        KeyCode::Char('t') => Some(AppEvent::CycleTheme),

        KeyCode::Char(' ') => Some(AppEvent::TogglePlay),
        KeyCode::Char('n') => Some(AppEvent::Next),
        KeyCode::Char('p') | KeyCode::Char('b') => Some(AppEvent::Previous),
        KeyCode::Char('x') => Some(AppEvent::ToggleShuffle),
        KeyCode::Char('z') => Some(AppEvent::PlayRandom),

        KeyCode::Char(',') => {
            app.audio_player.seek(-FINE_SEEK_DELTA)?;
            None
        }
        KeyCode::Char('.') => {
            app.audio_player.seek(FINE_SEEK_DELTA)?;
            None
        }
        KeyCode::Char('<') => {
            app.audio_player.seek(-SEEK_DELTA)?;
            None
        }
        KeyCode::Char('>') => {
            app.audio_player.seek(SEEK_DELTA)?;
            None
        }
        KeyCode::Char('-') => {
            app.audio_player.adjust_volume(-FINE_VOLUME_DELTA)?;
            None
        }
        KeyCode::Char('=') => {
            app.audio_player.adjust_volume(FINE_VOLUME_DELTA)?;
            None
        }
        KeyCode::Char('_') => {
            app.audio_player.adjust_volume(-VOLUME_DELTA)?;
            None
        }
        KeyCode::Char('+') => {
            app.audio_player.adjust_volume(VOLUME_DELTA)?;
            None
        }
        KeyCode::Char('m') => {
            app.audio_player.toggle_mute()?;
            None
        }

        _ => None,
    };

    if let Some(event) = event {
        app.event_tx.send(event)?;
    }

    Ok(())
}
