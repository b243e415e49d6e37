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

//! Audio playback engine.
//!
//! This module provides the [`AudioPlayer`] handle used by the event loop to
//! drive the audio engine. It owns a background worker thread that interfaces
//! with MPV, so that loading remote media never blocks the main thread.
//!
//! Which song is playing is decided by the playback controller, the player
//! only executes the resulting [`PlaybackCommand`]s and reports back.

mod commands;

use std::sync::mpsc;

use anyhow::Result;

use crate::{
    events::AppEvent,
    model::playback::{PlayRequest, PlaybackCommand},
    player::commands::AudioPlayerCommand,
};

/// A handle to the audio playback engine.
///
/// This struct acts as a command proxy; it does not perform audio processing
/// itself but instead sends instructions to a background worker thread.
pub(crate) struct AudioPlayer {
    command_tx: mpsc::Sender<AudioPlayerCommand>,
}

impl AudioPlayer {
    /// Spawns the audio worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `event_tx` - A channel to send playback events (progress, start
    ///   acknowledgements, errors) back to the main event loop.
    /// * `volume` - The initial volume, 0 to 100.
    pub(crate) fn new(event_tx: mpsc::Sender<AppEvent>, volume: u32) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel::<AudioPlayerCommand>();

        commands::spawn_player_worker(command_rx, event_tx);

        let player = Self { command_tx };
        player.set_volume(volume)?;

        Ok(player)
    }

    /// Executes a command produced by a playback transition.
    pub(crate) fn execute(&self, command: PlaybackCommand) -> Result<()> {
        match command {
            PlaybackCommand::Load { song, request } => self.play_url(&song.audio_url, request),
            PlaybackCommand::Pause => self.set_paused(true),
            PlaybackCommand::Resume => self.set_paused(false),
        }
    }

    /// Instructs the worker to load and play remote media, replacing whatever
    /// is loaded.
    pub(crate) fn play_url(&self, url: &str, request: PlayRequest) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::PlayUrl {
            url: url.to_string(),
            request,
        })?;
        Ok(())
    }

    pub(crate) fn set_paused(&self, paused: bool) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::SetPaused(paused))?;
        Ok(())
    }

    /// Adjusts the playback volume relative to the current level.
    pub(crate) fn adjust_volume(&self, delta: i32) -> Result<()> {
        self.command_tx
            .send(AudioPlayerCommand::AdjustVolume(delta))?;
        Ok(())
    }

    pub(crate) fn set_volume(&self, volume: u32) -> Result<()> {
        self.command_tx
            .send(AudioPlayerCommand::SetVolume(volume.min(100)))?;
        Ok(())
    }

    /// Toggles the audio output between muted and unmuted.
    pub(crate) fn toggle_mute(&self) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::ToggleMute)?;
        Ok(())
    }

    /// Adjusts the playback position forward or backwards relative to the
    /// current position, in seconds.
    pub(crate) fn seek(&self, delta: i32) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::Seek(delta))?;
        Ok(())
    }

    /// Moves the playback position to a fraction of the duration.
    pub(crate) fn seek_to_ratio(&self, ratio: f64) -> Result<()> {
        self.command_tx
            .send(AudioPlayerCommand::SeekPercent(ratio.clamp(0.0, 1.0) * 100.0))?;
        Ok(())
    }
}
