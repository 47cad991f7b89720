// SPDX-License-Identifier: MPL-2.0
//! Command/notification protocol between the player controller and the audio
//! transport.
//!
//! The transport (an `<audio>` element, a media framework, a test double) is
//! an external collaborator. The controller never calls into it directly: it
//! returns [`TransportCommand`]s for the embedding shell to execute, and the
//! shell feeds the transport's callbacks back in as [`TransportEvent`]s. This
//! keeps the controller synchronous and fully scriptable in tests.

use super::volume::Volume;

/// An instruction for the audio transport, emitted by the player controller.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportCommand {
    /// Swap the transport's source. Resets transport position to zero and
    /// invalidates previously reported metadata.
    Load { url: String, looped: bool },

    /// Start playback. Best-effort: the transport answers with
    /// [`TransportEvent::Played`] or [`TransportEvent::PlayFailed`].
    Play,

    /// Stop playback. Synchronous on real transports; confirmed by
    /// [`TransportEvent::Paused`].
    Pause,

    /// Move the playhead to an absolute position.
    SeekTo { position_secs: f64 },

    /// Apply an output volume level.
    SetVolume { volume: Volume },

    /// Apply or lift the output mute override.
    SetMuted { muted: bool },
}

/// A notification from the audio transport, consumed by the player
/// controller. These are the only writes to the controller's mirror of
/// transport state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransportEvent {
    /// Periodic playhead progress report.
    TimeUpdate { position_secs: f64 },

    /// Track metadata became available; the duration is now known.
    MetadataReady { duration_secs: f64 },

    /// A play attempt succeeded and audio is rolling.
    Played,

    /// Playback stopped.
    Paused,

    /// A play attempt was rejected (autoplay policy, missing source).
    PlayFailed,
}
