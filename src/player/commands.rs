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

//! MPV-backed audio playback engine and event processing.
//!
//! The worker thread owns the MPV context. It drains [`AudioPlayerCommand`]s
//! from the application, polls MPV for events, and broadcasts the resulting
//! [`AppEvent`]s back to the event loop.
//!
//! Loads are asynchronous: MPV reports `StartFile`, then `FileLoaded` or an
//! erroneous `EndFile`, some time after `loadfile` returns. The worker keeps
//! the requests it issued in order so that each of those notifications can be
//! attributed to the load that caused it.

use std::{
    collections::VecDeque,
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use anyhow::{Context, Result};
use mpv::Format;
use tracing::{debug, error, warn};

use crate::{events::AppEvent, model::playback::PlayRequest};

#[derive(Debug)]
pub(crate) enum AudioPlayerCommand {
    PlayUrl { url: String, request: PlayRequest },
    SetPaused(bool),
    Seek(i32),
    SeekPercent(f64),
    AdjustVolume(i32),
    SetVolume(u32),
    ToggleMute,
}

/// Attributes MPV file notifications to the requests that caused them.
///
/// MPV may replace a queued load before ever starting it, so a started file
/// is matched against the issued URLs rather than taken in issue order.
#[derive(Debug, Default)]
struct LoadTracker {
    pending: VecDeque<(PlayRequest, String)>,
    current: Option<PlayRequest>,
}

impl LoadTracker {
    fn issued(&mut self, request: PlayRequest, url: &str) {
        self.pending.push_back((request, url.to_string()));
    }

    /// MPV started opening a file, `path` is the file MPV reports, if known.
    ///
    /// Issued loads ahead of the matching one were superseded and are
    /// dropped. Without a path, or without a match, the oldest issued load is
    /// assumed.
    fn file_started(&mut self, path: Option<&str>) -> Option<PlayRequest> {
        let matched = path.and_then(|path| self.pending.iter().position(|(_, url)| url == path));

        if let Some(index) = matched {
            for (request, url) in self.pending.drain(..index) {
                debug!(request = request.0, url = %url, "Load superseded before starting");
            }
        }

        self.current = self.pending.pop_front().map(|(request, _)| request);
        self.current
    }

    fn current(&self) -> Option<PlayRequest> {
        self.current
    }

    /// Whether position reports belong to the latest issued load.
    fn is_settled(&self) -> bool {
        self.current.is_some() && self.pending.is_empty()
    }

    /// The current file ended, for whatever reason.
    fn file_ended(&mut self) -> Option<PlayRequest> {
        self.current.take()
    }
}

/// Spawns the audio worker thread to process playback commands.
///
/// If the internal worker returns an error, it is caught here and broadcast as
/// a fatal application event.
pub(crate) fn spawn_player_worker(
    command_rx: Receiver<AudioPlayerCommand>,
    event_tx: Sender<AppEvent>,
) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = audio_player_worker(command_rx, event_tx) {
            error!(error = ?e, "MPV worker failed");
            let _ = error_tx.send(AppEvent::FatalError(format!("MPV worker failure: {:?}", e)));
        }
    });
}

fn audio_player_worker(
    command_rx: Receiver<AudioPlayerCommand>,
    event_tx: Sender<AppEvent>,
) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("vo", "null")
            .context("Failed to set no video output")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    handler
        .observe_property::<f64>("duration", 0)
        .context("Failed to observe duration")?;
    handler
        .observe_property::<f64>("time-pos", 0)
        .context("Failed to observe time-pos")?;
    handler
        .observe_property::<f64>("volume", 0)
        .context("Failed to observe volume")?;
    handler
        .observe_property::<bool>("mute", 0)
        .context("Failed to observe mute")?;

    let mut tracker = LoadTracker::default();
    let mut duration = f64::NAN;

    loop {
        process_commands(&mut handler, &command_rx, &mut tracker, &event_tx)?;
        process_mpv_events(&mut handler, &mut tracker, &mut duration, &event_tx)?;
    }
}

/// Drains and executes all pending commands from the application channel.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    command_rx: &mpsc::Receiver<AudioPlayerCommand>,
    tracker: &mut LoadTracker,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<()> {
    while let Ok(command) = command_rx.try_recv() {
        match command {
            AudioPlayerCommand::PlayUrl { url, request } => {
                debug!(url = %url, request = request.0, "Loading media");

                // A rejected load never produces file events, report it now
                if let Err(e) = handler.command(&["loadfile", &url, "replace"]) {
                    event_tx
                        .send(AppEvent::PlaybackFailed(request, format!("{:?}", e)))
                        .context("Failed to send playback failure")?;
                    continue;
                }
                tracker.issued(request, &url);
                handler.set_property("pause", false)?;
            }
            AudioPlayerCommand::SetPaused(paused) => {
                handler.set_property("pause", paused)?;
            }
            AudioPlayerCommand::Seek(delta) => {
                // Seeking with nothing loaded is rejected by MPV, harmlessly
                if let Err(e) = handler.command(&["seek", &delta.to_string(), "relative"]) {
                    debug!(error = ?e, "Seek ignored");
                }
            }
            AudioPlayerCommand::SeekPercent(percent) => {
                if let Err(e) = handler.command(&["seek", &percent.to_string(), "absolute-percent"])
                {
                    debug!(error = ?e, "Seek ignored");
                }
            }
            AudioPlayerCommand::AdjustVolume(delta) => {
                handler.command(&["add", "volume", &delta.to_string()])?;
            }
            AudioPlayerCommand::SetVolume(volume) => {
                handler.set_property("volume", volume as f64)?;
            }
            AudioPlayerCommand::ToggleMute => {
                handler.command(&["cycle", "mute"])?;
            }
        }
    }

    Ok(())
}

/// Polls for MPV events and forwards them to the application.
///
/// This function waits for up to 50ms for an event from the MPV context.
fn process_mpv_events(
    handler: &mut mpv::MpvHandler,
    tracker: &mut LoadTracker,
    duration: &mut f64,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<()> {
    if let Some(mpv_event) = handler.wait_event(0.05) {
        let app_event = match mpv_event {
            mpv::Event::StartFile => {
                *duration = f64::NAN;
                let path = handler
                    .get_property::<&str>("path")
                    .ok()
                    .map(str::to_string);
                let request = tracker.file_started(path.as_deref());
                debug!(request = ?request, "Media opening");
                None
            }
            mpv::Event::FileLoaded => tracker.current().map(AppEvent::PlaybackStarted),
            mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
                ("duration", Format::Double(d)) => {
                    *duration = d;
                    None
                }
                // Positions of a file being replaced would overwrite the reset
                // progress of the new one
                ("time-pos", Format::Double(seconds)) if seconds >= 0.0 && tracker.is_settled() => {
                    Some(AppEvent::ProgressChanged {
                        elapsed: seconds,
                        duration: *duration,
                    })
                }
                ("volume", Format::Double(volume)) => {
                    Some(AppEvent::VolumeChanged(volume.round() as u32))
                }
                ("mute", Format::Flag(muted)) => Some(AppEvent::MuteChanged(muted)),
                _ => None,
            },
            mpv::Event::EndFile(result) => match result {
                Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF) => {
                    tracker.file_ended().map(AppEvent::TrackFinished)
                }
                Ok(_) => {
                    tracker.file_ended();
                    None
                }
                Err(e) => {
                    warn!(error = ?e, "Media ended with an error");
                    tracker
                        .file_ended()
                        .map(|request| AppEvent::PlaybackFailed(request, format!("{:?}", e)))
                }
            },
            _ => None,
        };

        if let Some(event) = app_event {
            event_tx.send(event).context("Failed to send event")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST: &str = "https://cdn.example/audio@main/1.mp3";
    const SECOND: &str = "https://cdn.example/audio@main/2.mp3";

    #[test]
    fn test_tracker_attributes_files_in_issue_order() {
        let mut tracker = LoadTracker::default();
        tracker.issued(PlayRequest(1), FIRST);
        tracker.issued(PlayRequest(2), SECOND);

        assert_eq!(tracker.file_started(Some(FIRST)), Some(PlayRequest(1)));
        assert_eq!(tracker.file_ended(), Some(PlayRequest(1)));
        assert_eq!(tracker.file_started(Some(SECOND)), Some(PlayRequest(2)));
        assert_eq!(tracker.current(), Some(PlayRequest(2)));
    }

    #[test]
    fn test_tracker_skips_load_replaced_before_starting() {
        let mut tracker = LoadTracker::default();
        tracker.issued(PlayRequest(1), FIRST);
        tracker.issued(PlayRequest(2), SECOND);

        // Only the second file is ever started
        assert_eq!(tracker.file_started(Some(SECOND)), Some(PlayRequest(2)));
        assert!(tracker.is_settled());
        assert_eq!(tracker.file_ended(), Some(PlayRequest(2)));

        // Nothing stale is left behind for the next load
        tracker.issued(PlayRequest(3), FIRST);
        assert_eq!(tracker.file_started(Some(FIRST)), Some(PlayRequest(3)));
    }

    #[test]
    fn test_tracker_without_path_falls_back_to_issue_order() {
        let mut tracker = LoadTracker::default();
        tracker.issued(PlayRequest(1), FIRST);
        tracker.issued(PlayRequest(2), SECOND);

        assert_eq!(tracker.file_started(None), Some(PlayRequest(1)));
        assert_eq!(tracker.file_started(Some("https://elsewhere/3.mp3")), Some(PlayRequest(2)));
    }

    #[test]
    fn test_tracker_unsettled_while_newer_load_pending() {
        let mut tracker = LoadTracker::default();
        assert!(!tracker.is_settled());

        tracker.issued(PlayRequest(1), FIRST);
        tracker.file_started(Some(FIRST));
        assert!(tracker.is_settled());

        // The old file keeps playing until the replacement starts
        tracker.issued(PlayRequest(2), SECOND);
        assert!(!tracker.is_settled());

        tracker.file_ended();
        assert!(!tracker.is_settled());

        tracker.file_started(Some(SECOND));
        assert!(tracker.is_settled());
    }

    #[test]
    fn test_tracker_end_without_file_is_unattributed() {
        let mut tracker = LoadTracker::default();

        assert_eq!(tracker.file_ended(), None);
        assert_eq!(tracker.file_started(None), None);

        tracker.issued(PlayRequest(5), FIRST);
        tracker.file_started(Some(FIRST));
        tracker.file_ended();
        assert_eq!(tracker.file_ended(), None);
    }
}
