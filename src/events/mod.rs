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

//! Application logic, event handling, and command dispatching.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. Every input (keys, commands, background worker results and
//! audio engine notifications) arrives as an [`AppEvent`] on a single channel
//! and is applied to the application state on the main thread, after which
//! the UI is redrawn.
//!
//! # Organization
//!
//! * [`handlers`]: State transitions for each application event.
//! * [`key_handlers`]: Translation of keyboard input into application events.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::{debug, error};

use crate::{
    App,
    model::{
        Song, SongId,
        catalog::FilterVocabulary,
        filter::FilterDimension,
        playback::PlayRequest,
        view::{BrowseMode, Density},
    },
    render::draw,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    CatalogLoaded {
        songs: Vec<Song>,
        vocabulary: FilterVocabulary,
    },
    CatalogFailed(String),

    PlaySong(SongId),
    TogglePlay,
    Next,
    Previous,
    PlayRandom,
    ToggleShuffle,

    SetFilter(FilterDimension, Option<String>),
    SearchChanged(String),
    ResetFilters,

    SetViewMode(BrowseMode),
    SetDensity(Density),
    ToggleDensity,
    EnterAlbum(String),
    ShowAlbumOf(SongId),
    ExitAlbum,

    TogglePlayerOverlay,
    PreviewVideo(SongId),
    CloseOverlay,

    SetTheme(String),
    CycleTheme,
    SetVolume(u32),
    SeekTo(f64),

    PlaybackStarted(PlayRequest),
    PlaybackFailed(PlayRequest, String),
    ProgressChanged { elapsed: f64, duration: f64 },
    VolumeChanged(u32),
    MuteChanged(bool),
    TrackFinished(PlayRequest),

    Tick,

    Error(String),
    FatalError(String),

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed. A fatal error ends the loop with that error.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if !matches!(event, AppEvent::Tick | AppEvent::ProgressChanged { .. }) {
            debug!(event = ?event, "Processing event");
        }

        match event {
            AppEvent::ExitApplication => break,
            AppEvent::FatalError(message) => {
                error!(message = %message, "Fatal error");
                anyhow::bail!(message);
            }
            event => {
                // A failing handler is reported, it never ends the loop
                if let Err(e) = process_event(app, event) {
                    error!(error = ?e, "Event handling failed");
                    app.status = Some(format!("{:#}", e));
                }
            }
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

fn process_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,

        AppEvent::CatalogLoaded { songs, vocabulary } => {
            handle_catalog_loaded(app, songs, vocabulary)
        }
        AppEvent::CatalogFailed(reason) => handle_catalog_failed(app, reason),

        AppEvent::PlaySong(id) => handle_play_song(app, id)?,
        AppEvent::TogglePlay => handle_toggle_play(app)?,
        AppEvent::Next => handle_next(app)?,
        AppEvent::Previous => handle_previous(app)?,
        AppEvent::PlayRandom => handle_play_random(app)?,
        AppEvent::ToggleShuffle => handle_toggle_shuffle(app)?,

        AppEvent::SetFilter(dimension, value) => handle_set_filter(app, dimension, value),
        AppEvent::SearchChanged(text) => handle_search_changed(app, text),
        AppEvent::ResetFilters => handle_reset_filters(app),

        AppEvent::SetViewMode(mode) => handle_set_view_mode(app, mode),
        AppEvent::SetDensity(density) => handle_set_density(app, density),
        AppEvent::ToggleDensity => handle_toggle_density(app),
        AppEvent::EnterAlbum(name) => handle_enter_album(app, name),
        AppEvent::ShowAlbumOf(id) => handle_show_album_of(app, id),
        AppEvent::ExitAlbum => handle_exit_album(app),

        AppEvent::TogglePlayerOverlay => handle_toggle_player_overlay(app),
        AppEvent::PreviewVideo(id) => handle_preview_video(app, id)?,
        AppEvent::CloseOverlay => handle_close_overlay(app),

        AppEvent::SetTheme(name) => handle_set_theme(app, name)?,
        AppEvent::CycleTheme => handle_cycle_theme(app)?,
        AppEvent::SetVolume(volume) => app.audio_player.set_volume(volume)?,
        AppEvent::SeekTo(ratio) => handle_seek_to(app, ratio)?,

        AppEvent::PlaybackStarted(request) => handle_playback_started(app, request),
        AppEvent::PlaybackFailed(request, reason) => handle_playback_failed(app, request, reason),
        AppEvent::ProgressChanged { elapsed, duration } => {
            app.playback.on_media_time_update(elapsed, duration)
        }
        AppEvent::VolumeChanged(volume) => app.volume = Some(volume),
        AppEvent::MuteChanged(muted) => app.muted = muted,
        AppEvent::TrackFinished(request) => handle_track_finished(app, request)?,

        AppEvent::Error(message) => handle_error(app, message),

        AppEvent::Tick | AppEvent::FatalError(_) | AppEvent::ExitApplication => {}
    }

    Ok(())
}
