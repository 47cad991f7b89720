// SPDX-License-Identifier: MPL-2.0
//! Audio player controller: track selection plus a mirror of transport state.
//!
//! The controller owns which track is selected and what the user asked for;
//! the transport owns the actual audio. `is_playing`, `current_time` and
//! `duration` are a mirror of the transport, written only when a
//! [`TransportEvent`] arrives or when the user initiates a transport call
//! (seek). Playback start is best-effort: a `Play` command is answered by
//! `Played` or `PlayFailed`, and the mirror flips only on the answer.

use super::transport::{TransportCommand, TransportEvent};
use super::volume::Volume;
use crate::config::PlayerConfig;
use crate::manifest;

/// Track selection, playback intent, and the transport-state mirror.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    tracks: Vec<String>,
    current: usize,
    is_playing: bool,
    current_time: f64,
    duration: Option<f64>,
    volume: Volume,
    muted: bool,
}

impl Player {
    /// Creates a player with no tracks, using the configured initial volume
    /// and mute state.
    #[must_use]
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            tracks: Vec::new(),
            current: 0,
            is_playing: false,
            current_time: 0.0,
            duration: None,
            volume: Volume::new(config.volume),
            muted: config.muted,
        }
    }

    /// Loads the track list. When it is non-empty, the first track becomes
    /// the transport source (looped, as the page plays background music) and
    /// the initial volume settings are pushed to the transport. Playback
    /// does not start on its own.
    pub fn load(&mut self, tracks: Vec<String>) -> Vec<TransportCommand> {
        self.tracks = tracks;
        self.current = 0;
        self.current_time = 0.0;
        self.duration = None;
        self.is_playing = false;

        match self.current_track_url() {
            Some(url) => vec![
                TransportCommand::Load { url, looped: true },
                TransportCommand::SetVolume {
                    volume: self.volume,
                },
                TransportCommand::SetMuted { muted: self.muted },
            ],
            None => Vec::new(),
        }
    }

    /// Starts or stops playback. Pausing takes effect immediately; starting
    /// is best-effort and only the transport's answer flips `is_playing`.
    pub fn toggle_play(&mut self) -> Vec<TransportCommand> {
        if self.tracks.is_empty() {
            return Vec::new();
        }
        if self.is_playing {
            self.is_playing = false;
            vec![TransportCommand::Pause]
        } else {
            vec![TransportCommand::Play]
        }
    }

    /// Moves the playhead to `fraction` of the track length. Ignored until
    /// the duration is known; the fraction is clamped to `[0, 1]`.
    pub fn seek(&mut self, fraction: f64) -> Vec<TransportCommand> {
        if self.tracks.is_empty() || !fraction.is_finite() {
            return Vec::new();
        }
        let Some(duration) = self.duration else {
            return Vec::new();
        };
        let position_secs = fraction.clamp(0.0, 1.0) * duration;
        self.current_time = position_secs;
        vec![TransportCommand::SeekTo { position_secs }]
    }

    /// Applies a new volume level. Sliding to zero engages mute; any audible
    /// level clears it.
    pub fn set_volume(&mut self, value: f32) -> Vec<TransportCommand> {
        if self.tracks.is_empty() {
            return Vec::new();
        }
        self.volume = Volume::new(value);
        self.muted = self.volume.is_silent();
        vec![
            TransportCommand::SetVolume {
                volume: self.volume,
            },
            TransportCommand::SetMuted { muted: self.muted },
        ]
    }

    /// Flips the mute override. The stored volume level is untouched, so
    /// unmuting restores the previous loudness.
    pub fn toggle_mute(&mut self) -> Vec<TransportCommand> {
        if self.tracks.is_empty() {
            return Vec::new();
        }
        self.muted = !self.muted;
        vec![TransportCommand::SetMuted { muted: self.muted }]
    }

    /// Selects the next track, wrapping at the end of the list.
    pub fn next_track(&mut self) -> Vec<TransportCommand> {
        if self.tracks.is_empty() {
            return Vec::new();
        }
        let next = (self.current + 1) % self.tracks.len();
        self.switch_to(next)
    }

    /// Selects the previous track, wrapping at the start of the list.
    pub fn prev_track(&mut self) -> Vec<TransportCommand> {
        if self.tracks.is_empty() {
            return Vec::new();
        }
        let len = self.tracks.len();
        let prev = (self.current + len - 1) % len;
        self.switch_to(prev)
    }

    /// Switches the transport source. The playhead resets, the old
    /// duration is forgotten, and a play attempt is re-issued only when
    /// audio was rolling before the switch.
    fn switch_to(&mut self, index: usize) -> Vec<TransportCommand> {
        let was_playing = self.is_playing;
        self.current = index;
        self.current_time = 0.0;
        self.duration = None;
        self.is_playing = false;

        let url = match self.current_track_url() {
            Some(url) => url,
            None => return Vec::new(),
        };
        let mut commands = vec![TransportCommand::Load { url, looped: true }];
        if was_playing {
            commands.push(TransportCommand::Play);
        }
        commands
    }

    /// Folds a transport notification into the mirror.
    pub fn apply(&mut self, event: TransportEvent) {
        match event {
            TransportEvent::TimeUpdate { position_secs } => {
                self.current_time = position_secs.max(0.0);
            }
            TransportEvent::MetadataReady { duration_secs } => {
                self.duration = Some(duration_secs.max(0.0));
            }
            TransportEvent::Played => self.is_playing = true,
            TransportEvent::Paused | TransportEvent::PlayFailed => {
                self.is_playing = false;
            }
        }
    }

    /// Returns the index of the selected track, if any.
    pub fn current_index(&self) -> Option<usize> {
        (!self.tracks.is_empty()).then_some(self.current)
    }

    /// Returns the relative path of the selected track, if any.
    pub fn current_track(&self) -> Option<&str> {
        self.tracks.get(self.current).map(String::as_str)
    }

    /// Returns the public URL of the selected track, if any.
    pub fn current_track_url(&self) -> Option<String> {
        self.current_track().map(manifest::music_url)
    }

    /// Whether audio is confirmed rolling.
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Last reported playhead position, in seconds.
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Track length in seconds, once metadata has been observed.
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Current volume level.
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Whether the mute override is engaged.
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Playhead position as a fraction of the track length, for the seek
    /// bar. `None` until a positive duration is known.
    pub fn progress(&self) -> Option<f64> {
        match self.duration {
            Some(duration) if duration > 0.0 => {
                Some((self.current_time / duration).clamp(0.0, 1.0))
            }
            _ => None,
        }
    }

    /// Returns the total number of tracks.
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Checks if the track list is empty.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
