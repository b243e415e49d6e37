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

//! Playback state machine.
//!
//! The [`PlaybackController`] is the single source of truth for which song is
//! current, whether it is playing, and whether shuffle is on. Transitions are
//! computed against the visible songs (or the full catalog, for lookups by
//! id) passed in by the caller, and each one returns the [`PlaybackCommand`]
//! the audio engine must execute, if any.
//!
//! Starting a song is asynchronous on the engine side. Every load is tagged
//! with a [`PlayRequest`] and the engine later acknowledges it as started or
//! failed. Only the most recent request is honoured; acknowledgements for
//! superseded requests are logged and otherwise ignored.

use tracing::{debug, info, warn};

use crate::model::{Song, SongId};

/// Represents the current playback status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PlaybackState {
    Idle,
    Paused(SongId),
    Playing(SongId),
}

/// Identifies one load issued to the audio engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PlayRequest(pub(crate) u64);

/// Instruction for the audio engine resulting from a transition.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PlaybackCommand {
    Load { song: Song, request: PlayRequest },
    Pause,
    Resume,
}

/// Elapsed time and duration of the loaded media, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Progress {
    pub(crate) elapsed: f64,
    pub(crate) duration: f64,
}

impl Progress {
    pub(crate) fn ratio(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

pub(crate) struct PlaybackController {
    state: PlaybackState,
    shuffle: bool,
    last_request: u64,
    // Set when the engine rejected the current song, resuming must reload it
    needs_reload: bool,
    progress: Option<Progress>,
}

impl PlaybackController {
    pub(crate) fn new() -> Self {
        Self {
            state: PlaybackState::Idle,
            shuffle: false,
            last_request: 0,
            needs_reload: false,
            progress: None,
        }
    }

    pub(crate) fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub(crate) fn current_id(&self) -> Option<&SongId> {
        match &self.state {
            PlaybackState::Idle => None,
            PlaybackState::Paused(id) | PlaybackState::Playing(id) => Some(id),
        }
    }

    pub(crate) fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing(_))
    }

    pub(crate) fn is_current(&self, id: &SongId) -> bool {
        self.current_id() == Some(id)
    }

    pub(crate) fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub(crate) fn progress(&self) -> Option<Progress> {
        self.progress
    }

    /// Plays the song with the given id, or toggles play/pause if it is
    /// already the current song.
    pub(crate) fn load_and_play(
        &mut self,
        id: &SongId,
        catalog: &[Song],
        visible: &[Song],
    ) -> Option<PlaybackCommand> {
        if self.is_current(id) {
            return self.toggle_play_pause(catalog, visible);
        }

        let song = catalog.iter().find(|s| &s.id == id)?;
        Some(self.start(song))
    }

    pub(crate) fn toggle_play_pause(
        &mut self,
        catalog: &[Song],
        visible: &[Song],
    ) -> Option<PlaybackCommand> {
        match self.state.clone() {
            PlaybackState::Idle => {
                let first = visible.first()?;
                self.load_and_play(&first.id, catalog, visible)
            }
            PlaybackState::Paused(id) => {
                if self.needs_reload {
                    let song = catalog.iter().find(|s| s.id == id)?;
                    return Some(self.start(song));
                }
                self.state = PlaybackState::Playing(id);
                Some(PlaybackCommand::Resume)
            }
            PlaybackState::Playing(id) => {
                self.state = PlaybackState::Paused(id);
                Some(PlaybackCommand::Pause)
            }
        }
    }

    /// Pauses if playing, otherwise does nothing.
    pub(crate) fn pause(&mut self) -> Option<PlaybackCommand> {
        match self.state.clone() {
            PlaybackState::Playing(id) => {
                self.state = PlaybackState::Paused(id);
                Some(PlaybackCommand::Pause)
            }
            _ => None,
        }
    }

    /// Advances to the next visible song, or a random one when shuffling.
    pub(crate) fn next(&mut self, visible: &[Song]) -> Option<PlaybackCommand> {
        if self.shuffle {
            return self.play_random(visible);
        }

        let len = visible.len();
        if len == 0 {
            return None;
        }

        let index = match self.visible_position(visible) {
            Some(pos) => (pos + 1) % len,
            None => 0,
        };
        Some(self.start(&visible[index]))
    }

    /// Retreats to the previous visible song. Shuffle does not apply here.
    pub(crate) fn previous(&mut self, visible: &[Song]) -> Option<PlaybackCommand> {
        let len = visible.len();
        if len == 0 {
            return None;
        }

        // A current song outside the visible set sits "before" the first
        // element, so stepping back wraps to the last one
        let index = match self.visible_position(visible) {
            Some(pos) => (pos + len - 1) % len,
            None => len - 1,
        };
        Some(self.start(&visible[index]))
    }

    pub(crate) fn play_random(&mut self, visible: &[Song]) -> Option<PlaybackCommand> {
        if visible.is_empty() {
            return None;
        }

        let roll = rand::random_range(0..visible.len());
        let index = random_pick(visible, self.current_id(), roll);
        Some(self.start(&visible[index]))
    }

    /// Flips shuffle mode, turning it on immediately plays a random song.
    pub(crate) fn toggle_shuffle(&mut self, visible: &[Song]) -> Option<PlaybackCommand> {
        self.shuffle = !self.shuffle;
        info!(shuffle = self.shuffle, "Shuffle toggled");

        if self.shuffle {
            self.play_random(visible)
        } else {
            None
        }
    }

    pub(crate) fn on_media_ended(&mut self, visible: &[Song]) -> Option<PlaybackCommand> {
        self.next(visible)
    }

    pub(crate) fn on_media_time_update(&mut self, elapsed: f64, duration: f64) {
        // Media not loaded yet
        if !duration.is_finite() {
            return;
        }

        self.progress = Some(Progress { elapsed, duration });
    }

    /// Whether the request is the most recent load issued.
    pub(crate) fn is_latest(&self, request: PlayRequest) -> bool {
        request.0 == self.last_request
    }

    /// Handles the engine acknowledging that a load started playing.
    ///
    /// Returns `true` if the acknowledgement belongs to the current request.
    pub(crate) fn on_play_started(&mut self, request: PlayRequest) -> bool {
        if !self.is_latest(request) {
            debug!(request = request.0, current = self.last_request, "Ignoring stale play start");
            return false;
        }

        self.needs_reload = false;
        true
    }

    /// Handles the engine failing to start a load.
    ///
    /// The song stays selected but paused. Failures of superseded requests
    /// are only logged.
    pub(crate) fn on_play_failed(&mut self, request: PlayRequest, reason: &str) -> bool {
        if !self.is_latest(request) {
            debug!(request = request.0, reason, "Ignoring stale playback failure");
            return false;
        }

        warn!(request = request.0, reason, "Playback failed to start");

        if let PlaybackState::Playing(id) = self.state.clone() {
            self.state = PlaybackState::Paused(id);
        }
        self.needs_reload = true;
        true
    }

    fn start(&mut self, song: &Song) -> PlaybackCommand {
        self.last_request += 1;
        self.needs_reload = false;
        self.progress = None;
        self.state = PlaybackState::Playing(song.id.clone());

        info!(id = %song.id, title = %song.title, request = self.last_request, "Loading song");

        PlaybackCommand::Load {
            song: song.clone(),
            request: PlayRequest(self.last_request),
        }
    }

    fn visible_position(&self, visible: &[Song]) -> Option<usize> {
        let current = self.current_id()?;
        visible.iter().position(|s| &s.id == current)
    }
}

/// Resolves a random roll into an index, stepping past the current song.
///
/// When the roll lands on the current song and there is an alternative, the
/// pick moves one position forward instead of re-rolling.
fn random_pick(visible: &[Song], current: Option<&SongId>, roll: usize) -> usize {
    let len = visible.len();
    let index = roll % len;

    if len > 1 && current == Some(&visible[index].id) {
        (index + 1) % len
    } else {
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        filter::{FilterDimension, FilterSelection, filter_songs},
        tests::song,
    };

    fn catalog() -> Vec<Song> {
        vec![song(1, "A", "EN"), song(2, "B", "HI"), song(3, "C", "EN")]
    }

    fn id(n: i64) -> SongId {
        SongId::Number(n)
    }

    fn loaded_id(command: Option<PlaybackCommand>) -> SongId {
        match command {
            Some(PlaybackCommand::Load { song, .. }) => song.id,
            other => panic!("expected a load, got {:?}", other),
        }
    }

    fn loaded_request(command: Option<PlaybackCommand>) -> PlayRequest {
        match command {
            Some(PlaybackCommand::Load { request, .. }) => request,
            other => panic!("expected a load, got {:?}", other),
        }
    }

    #[test]
    fn test_initial_state() {
        let controller = PlaybackController::new();

        assert_eq!(controller.state(), &PlaybackState::Idle);
        assert!(!controller.shuffle());
        assert!(controller.progress().is_none());
    }

    #[test]
    fn test_language_scenario_next_wraps() {
        let catalog = catalog();
        let mut selection = FilterSelection::default();
        selection.set(FilterDimension::Language, Some("EN".into()));
        let visible = filter_songs(&catalog, &selection);

        let mut controller = PlaybackController::new();
        controller.load_and_play(&id(1), &catalog, &visible);
        assert_eq!(controller.state(), &PlaybackState::Playing(id(1)));

        assert_eq!(loaded_id(controller.next(&visible)), id(3));
        assert_eq!(loaded_id(controller.next(&visible)), id(1));
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let catalog = catalog();
        let mut controller = PlaybackController::new();
        controller.load_and_play(&id(1), &catalog, &catalog);

        assert_eq!(loaded_id(controller.previous(&catalog)), id(3));
        assert_eq!(controller.current_id(), Some(&id(3)));
    }

    #[test]
    fn test_previous_then_next_round_trip() {
        let catalog = catalog();
        let mut controller = PlaybackController::new();
        controller.load_and_play(&id(2), &catalog, &catalog);

        controller.previous(&catalog);
        controller.next(&catalog);

        assert_eq!(controller.current_id(), Some(&id(2)));
    }

    #[test]
    fn test_next_from_filtered_out_song_lands_on_first() {
        let catalog = catalog();
        let mut controller = PlaybackController::new();
        controller.load_and_play(&id(2), &catalog, &catalog);

        let visible = vec![catalog[0].clone(), catalog[2].clone()];
        assert_eq!(loaded_id(controller.next(&visible)), id(1));

        controller.load_and_play(&id(2), &catalog, &catalog);
        assert_eq!(loaded_id(controller.previous(&visible)), id(3));
    }

    #[test]
    fn test_next_without_current_song() {
        let catalog = catalog();
        let mut controller = PlaybackController::new();

        assert_eq!(loaded_id(controller.next(&catalog)), id(1));
    }

    #[test]
    fn test_navigation_on_empty_visible_set_is_noop() {
        let mut controller = PlaybackController::new();

        assert!(controller.next(&[]).is_none());
        assert!(controller.previous(&[]).is_none());
        assert!(controller.play_random(&[]).is_none());
        assert!(controller.toggle_play_pause(&[], &[]).is_none());
        assert_eq!(controller.state(), &PlaybackState::Idle);
    }

    #[test]
    fn test_toggle_from_idle_plays_first_visible() {
        let catalog = catalog();
        let visible = vec![catalog[1].clone()];
        let mut controller = PlaybackController::new();

        assert_eq!(loaded_id(controller.toggle_play_pause(&catalog, &visible)), id(2));
        assert!(controller.is_playing());
    }

    #[test]
    fn test_toggle_pauses_and_resumes() {
        let catalog = catalog();
        let mut controller = PlaybackController::new();
        controller.load_and_play(&id(1), &catalog, &catalog);

        assert_eq!(controller.toggle_play_pause(&catalog, &catalog), Some(PlaybackCommand::Pause));
        assert_eq!(controller.state(), &PlaybackState::Paused(id(1)));

        assert_eq!(controller.toggle_play_pause(&catalog, &catalog), Some(PlaybackCommand::Resume));
        assert_eq!(controller.state(), &PlaybackState::Playing(id(1)));
    }

    #[test]
    fn test_load_same_song_toggles() {
        let catalog = catalog();
        let mut controller = PlaybackController::new();
        controller.load_and_play(&id(1), &catalog, &catalog);

        let command = controller.load_and_play(&id(1), &catalog, &catalog);

        assert_eq!(command, Some(PlaybackCommand::Pause));
        assert_eq!(controller.state(), &PlaybackState::Paused(id(1)));
    }

    #[test]
    fn test_load_unknown_song_is_noop() {
        let catalog = catalog();
        let mut controller = PlaybackController::new();

        assert!(controller.load_and_play(&id(42), &catalog, &catalog).is_none());
        assert_eq!(controller.state(), &PlaybackState::Idle);
    }

    #[test]
    fn test_shuffle_redirects_next_but_not_previous() {
        let catalog = catalog();
        let single = vec![catalog[0].clone()];
        let mut controller = PlaybackController::new();
        controller.load_and_play(&id(2), &catalog, &catalog);

        // Turning shuffle on plays a random song straight away
        assert!(controller.toggle_shuffle(&single).is_some());
        assert!(controller.shuffle());
        assert_eq!(controller.current_id(), Some(&id(1)));

        // Ordered navigation still applies going backwards
        controller.load_and_play(&id(1), &catalog, &catalog);
        assert_eq!(loaded_id(controller.previous(&catalog)), id(3));

        assert!(controller.toggle_shuffle(&catalog).is_none());
        assert!(!controller.shuffle());
    }

    #[test]
    fn test_random_single_song_always_restarts_it() {
        let catalog = catalog();
        let single = vec![catalog[0].clone()];
        let mut controller = PlaybackController::new();
        controller.toggle_shuffle(&single);

        for _ in 0..20 {
            assert_eq!(loaded_id(controller.next(&single)), id(1));
            assert!(controller.is_playing());
        }
    }

    #[test]
    fn test_random_pick_steps_past_current() {
        let catalog = catalog();

        assert_eq!(random_pick(&catalog, Some(&id(2)), 1), 2);
        assert_eq!(random_pick(&catalog, Some(&id(3)), 2), 0);
        assert_eq!(random_pick(&catalog, Some(&id(3)), 0), 0);
        assert_eq!(random_pick(&catalog, None, 1), 1);
        assert_eq!(random_pick(&catalog[..1], Some(&id(1)), 0), 0);
    }

    #[test]
    fn test_random_never_repeats_current_with_alternatives() {
        let catalog = catalog();
        let mut controller = PlaybackController::new();
        controller.load_and_play(&id(1), &catalog, &catalog);

        for _ in 0..50 {
            let before = controller.current_id().cloned();
            let after = loaded_id(controller.play_random(&catalog));
            assert_ne!(before, Some(after));
        }
    }

    #[test]
    fn test_media_ended_advances() {
        let catalog = catalog();
        let mut controller = PlaybackController::new();
        controller.load_and_play(&id(3), &catalog, &catalog);

        assert_eq!(loaded_id(controller.on_media_ended(&catalog)), id(1));
    }

    #[test]
    fn test_failure_leaves_song_paused_and_reloads_on_resume() {
        let catalog = catalog();
        let mut controller = PlaybackController::new();
        let request = loaded_request(controller.load_and_play(&id(2), &catalog, &catalog));

        assert!(controller.on_play_failed(request, "404"));
        assert_eq!(controller.state(), &PlaybackState::Paused(id(2)));

        let retry = controller.toggle_play_pause(&catalog, &catalog);
        assert_eq!(loaded_id(retry), id(2));
        assert!(controller.is_playing());
    }

    #[test]
    fn test_stale_acknowledgements_are_ignored() {
        let catalog = catalog();
        let mut controller = PlaybackController::new();
        let stale = loaded_request(controller.load_and_play(&id(1), &catalog, &catalog));
        let fresh = loaded_request(controller.load_and_play(&id(2), &catalog, &catalog));

        assert!(!controller.on_play_failed(stale, "superseded"));
        assert!(!controller.on_play_started(stale));
        assert_eq!(controller.state(), &PlaybackState::Playing(id(2)));

        assert!(controller.on_play_started(fresh));
        assert_eq!(controller.state(), &PlaybackState::Playing(id(2)));
    }

    #[test]
    fn test_pause_only_affects_playing() {
        let catalog = catalog();
        let mut controller = PlaybackController::new();
        assert!(controller.pause().is_none());

        controller.load_and_play(&id(1), &catalog, &catalog);
        assert_eq!(controller.pause(), Some(PlaybackCommand::Pause));
        assert!(controller.pause().is_none());
    }

    #[test]
    fn test_time_update_skips_unknown_duration() {
        let mut controller = PlaybackController::new();

        controller.on_media_time_update(3.0, f64::NAN);
        assert!(controller.progress().is_none());

        controller.on_media_time_update(30.0, 120.0);
        assert_eq!(controller.progress().map(|p| p.ratio()), Some(0.25));
    }
}
