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

//! State transitions for application events.
//!
//! Playback transitions are computed by the playback controller against the
//! current catalog and visible songs; whatever command results is handed to
//! the audio player.

use anyhow::Result;
use tracing::{error, info, warn};

use crate::{
    App, Overlay,
    config,
    model::{
        Song, SongId,
        catalog::FilterVocabulary,
        filter::FilterDimension,
        playback::{PlayRequest, PlaybackCommand},
        video::VideoPreview,
        view::{BrowseMode, BrowserEntry, Density},
    },
    theme::{THEME_NAMES, Theme},
    util::term,
};

fn execute(app: &mut App, command: Option<PlaybackCommand>) -> Result<()> {
    if let Some(command) = command {
        app.audio_player.execute(command)?;
    }

    Ok(())
}

// The visible set changed, the old cursor position means nothing any more
fn visible_changed(app: &mut App) {
    app.browser.reset();
}

pub(super) fn handle_catalog_loaded(app: &mut App, songs: Vec<Song>, vocabulary: FilterVocabulary) {
    info!(songs = songs.len(), "Catalog loaded");

    app.catalog.populate(songs, vocabulary);
    app.view.refresh(app.catalog.songs());
    visible_changed(app);
}

pub(super) fn handle_catalog_failed(app: &mut App, reason: String) {
    error!(reason = %reason, "Catalog failed to load");

    app.catalog.fail(reason);
    app.view.refresh(app.catalog.songs());
    visible_changed(app);
}

pub(super) fn handle_play_song(app: &mut App, id: SongId) -> Result<()> {
    let command = app
        .playback
        .load_and_play(&id, app.catalog.songs(), app.view.visible());
    execute(app, command)
}

pub(super) fn handle_toggle_play(app: &mut App) -> Result<()> {
    let command = app
        .playback
        .toggle_play_pause(app.catalog.songs(), app.view.visible());
    execute(app, command)
}

pub(super) fn handle_next(app: &mut App) -> Result<()> {
    let command = app.playback.next(app.view.visible());
    execute(app, command)
}

pub(super) fn handle_previous(app: &mut App) -> Result<()> {
    let command = app.playback.previous(app.view.visible());
    execute(app, command)
}

pub(super) fn handle_play_random(app: &mut App) -> Result<()> {
    let command = app.playback.play_random(app.view.visible());
    execute(app, command)
}

pub(super) fn handle_toggle_shuffle(app: &mut App) -> Result<()> {
    let command = app.playback.toggle_shuffle(app.view.visible());
    execute(app, command)
}

pub(super) fn handle_set_filter(app: &mut App, dimension: FilterDimension, value: Option<String>) {
    info!(dimension = dimension.label(), value = ?value, "Filter changed");

    app.view.set_filter(dimension, value, app.catalog.songs());
    visible_changed(app);
}

pub(super) fn handle_search_changed(app: &mut App, text: String) {
    app.search_box.set_text(&text);
    app.view.set_search(&text, app.catalog.songs());
    visible_changed(app);
}

pub(super) fn handle_reset_filters(app: &mut App) {
    app.view.reset_filters(app.catalog.songs());
    app.search_box.clear();
    visible_changed(app);
}

pub(super) fn handle_set_view_mode(app: &mut App, mode: BrowseMode) {
    app.view.set_view_mode(mode);
    app.browser.reset();
}

pub(super) fn handle_set_density(app: &mut App, density: Density) {
    app.view.set_density(density);
}

pub(super) fn handle_toggle_density(app: &mut App) {
    app.view.toggle_density();
}

pub(super) fn handle_enter_album(app: &mut App, name: String) {
    app.view.enter_album(&name);
    app.browser.reset();
}

pub(super) fn handle_show_album_of(app: &mut App, id: SongId) {
    if let Some(song) = app.catalog.song(&id) {
        let album = song.album_name();
        handle_enter_album(app, album);
    }
}

pub(super) fn handle_exit_album(app: &mut App) {
    let Some(album) = app.view.selected_album().map(str::to_string) else {
        return;
    };

    app.view.exit_album();

    // Back on the album list, keep the album just left under the cursor
    let entries = app.view.entries(app.catalog.songs());
    app.browser.reset();
    app.browser.focus(&entries, &BrowserEntry::Album(album));
}

pub(super) fn handle_toggle_player_overlay(app: &mut App) {
    app.overlay = match app.overlay {
        Overlay::Player => Overlay::None,
        _ => Overlay::Player,
    };
}

pub(super) fn handle_preview_video(app: &mut App, id: SongId) -> Result<()> {
    let Some(song) = app.catalog.song(&id) else {
        return Ok(());
    };

    let Some(preview) = VideoPreview::for_song(song) else {
        warn!(id = %id, url = ?song.video_url(), "No playable video for song");
        return Ok(());
    };

    let command = app.playback.pause();
    execute(app, command)?;

    app.overlay = Overlay::Video(preview);

    Ok(())
}

pub(super) fn handle_close_overlay(app: &mut App) {
    app.overlay = Overlay::None;
}

pub(super) fn handle_set_theme(app: &mut App, name: String) -> Result<()> {
    let Some(theme) = Theme::named(&name) else {
        app.status = Some(format!("Unknown theme: {}", name));
        return Ok(());
    };

    app.theme = theme;
    if let Some(hex) = Theme::to_hex(theme.background_colour) {
        term::set_terminal_bg(&hex)?;
    }

    app.config.theme = name;
    if let Err(e) = config::save_config(&app.config) {
        warn!(error = ?e, "Failed to save theme");
    }

    Ok(())
}

pub(super) fn handle_cycle_theme(app: &mut App) -> Result<()> {
    let index = THEME_NAMES
        .iter()
        .position(|n| *n == app.config.theme)
        .map_or(0, |i| (i + 1) % THEME_NAMES.len());

    handle_set_theme(app, THEME_NAMES[index].to_string())
}

pub(super) fn handle_seek_to(app: &mut App, ratio: f64) -> Result<()> {
    if app.playback.current_id().is_some() {
        app.audio_player.seek_to_ratio(ratio)?;
    }

    Ok(())
}

pub(super) fn handle_playback_started(app: &mut App, request: PlayRequest) {
    app.playback.on_play_started(request);
}

pub(super) fn handle_playback_failed(app: &mut App, request: PlayRequest, reason: String) {
    app.playback.on_play_failed(request, &reason);
}

pub(super) fn handle_track_finished(app: &mut App, request: PlayRequest) -> Result<()> {
    if !app.playback.is_latest(request) {
        return Ok(());
    }

    let command = app.playback.on_media_ended(app.view.visible());
    execute(app, command)
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!(message = %message, "Error reported");
    app.status = Some(message);
}
