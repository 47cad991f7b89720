// SPDX-License-Identifier: MPL-2.0
//! The viewer: slideshow, audio player, and floating widget under one
//! message dispatch.
//!
//! Everything the page does funnels through [`Viewer::update`]: timer ticks,
//! user intents, pointer input, window resizes, and transport notifications
//! all arrive as [`Message`]s and are handled one at a time in arrival
//! order. Handlers mutate controller state synchronously and return
//! [`Effect`]s describing the outside work (transport commands to execute, a
//! notice to show); nothing inside blocks or polls.
//!
//! Ambient facts the controllers need (current time, pointer position,
//! viewport size) travel inside the messages, never get sampled internally.

pub mod geometry;
pub mod panel;
pub mod player;
pub mod slideshow;
pub mod transport;
pub mod volume;

pub use geometry::{Point, Size, Vector};
pub use panel::{DragSession, Panel};
pub use player::Player;
pub use slideshow::Slideshow;
pub use transport::{TransportCommand, TransportEvent};
pub use volume::Volume;

use crate::config::Config;
use crate::manifest::{self, Manifest};
use std::time::Instant;

/// An input to the viewer. Dispatch with [`Viewer::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    // ═══════════════════════════════════════════════════════════════════════
    // SLIDESHOW
    // ═══════════════════════════════════════════════════════════════════════
    /// Periodic timer tick carrying the current time.
    Tick(Instant),
    /// User stepped to the next photo.
    NextPhoto(Instant),
    /// User stepped to the previous photo.
    PrevPhoto(Instant),

    // ═══════════════════════════════════════════════════════════════════════
    // PLAYER
    // ═══════════════════════════════════════════════════════════════════════
    /// User hit the play/pause control.
    TogglePlay,
    /// User released the seek bar at a fraction of the track length.
    Seek(f64),
    /// User moved the volume slider.
    SetVolume(f32),
    /// User hit the mute control.
    ToggleMute,
    /// User skipped to the next track.
    NextTrack,
    /// User skipped to the previous track.
    PrevTrack,
    /// The audio transport reported something.
    Transport(TransportEvent),

    // ═══════════════════════════════════════════════════════════════════════
    // WIDGET
    // ═══════════════════════════════════════════════════════════════════════
    /// Pointer pressed on the widget (mouse or touch, already unified).
    PointerDown(Point),
    /// Pointer moved.
    PointerMove(Point),
    /// Pointer released.
    PointerUp(Point),
    /// The viewport was resized; carries the widget's current form size.
    Resized { viewport: Size, widget: Size },

    // ═══════════════════════════════════════════════════════════════════════
    // LIFECYCLE
    // ═══════════════════════════════════════════════════════════════════════
    /// The page is going away; stop the rotation timer.
    Shutdown,
}

/// Outside work requested by an update. The embedding shell executes these
/// after the handler returns.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Forward a command to the audio transport.
    Transport(TransportCommand),
    /// Show a non-fatal notice to the user.
    Notice(Notice),
}

/// User-facing, non-fatal conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A play attempt was rejected, typically by the browser's autoplay
    /// policy.
    PlaybackUnavailable,
}

impl Notice {
    /// Message text for the shell to display.
    pub fn user_message(self) -> &'static str {
        match self {
            Notice::PlaybackUnavailable => {
                "Music playback failed. Check your browser settings."
            }
        }
    }
}

/// Slideshow, player, and widget state behind a single dispatch entrypoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewer {
    slideshow: Slideshow,
    player: Player,
    panel: Panel,
}

impl Viewer {
    /// Boots the viewer from a manifest: the slideshow starts cycling (when
    /// photos exist) and the player points the transport at the first track
    /// (when tracks exist). The returned effects carry the initial transport
    /// commands.
    pub fn new(
        manifest: Manifest,
        config: &Config,
        panel_position: Point,
        now: Instant,
    ) -> (Self, Vec<Effect>) {
        let mut slideshow = Slideshow::new(config.slideshow.interval());
        slideshow.load(manifest.photos, now);

        let mut player = Player::new(&config.player);
        let commands = player.load(manifest.musics);

        let viewer = Self {
            slideshow,
            player,
            panel: Panel::new(panel_position),
        };
        (viewer, transport_effects(commands))
    }

    /// Handles one message. Returns the effects the shell must execute.
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::Tick(now) => {
                self.slideshow.tick(now);
                Vec::new()
            }
            Message::NextPhoto(now) => {
                self.slideshow.next(now);
                Vec::new()
            }
            Message::PrevPhoto(now) => {
                self.slideshow.prev(now);
                Vec::new()
            }
            Message::TogglePlay => transport_effects(self.player.toggle_play()),
            Message::Seek(fraction) => transport_effects(self.player.seek(fraction)),
            Message::SetVolume(value) => transport_effects(self.player.set_volume(value)),
            Message::ToggleMute => transport_effects(self.player.toggle_mute()),
            Message::NextTrack => transport_effects(self.player.next_track()),
            Message::PrevTrack => transport_effects(self.player.prev_track()),
            Message::Transport(event) => {
                self.player.apply(event);
                if event == TransportEvent::PlayFailed {
                    vec![Effect::Notice(Notice::PlaybackUnavailable)]
                } else {
                    Vec::new()
                }
            }
            Message::PointerDown(pointer) => {
                self.panel.pointer_down(pointer);
                Vec::new()
            }
            Message::PointerMove(pointer) => {
                self.panel.pointer_move(pointer);
                Vec::new()
            }
            Message::PointerUp(pointer) => {
                self.panel.pointer_up(pointer);
                Vec::new()
            }
            Message::Resized { viewport, widget } => {
                self.panel.resize(viewport, widget);
                Vec::new()
            }
            Message::Shutdown => {
                self.slideshow.shutdown();
                Vec::new()
            }
        }
    }

    /// Read access to the slideshow state.
    pub fn slideshow(&self) -> &Slideshow {
        &self.slideshow
    }

    /// Read access to the player state.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Read access to the widget state.
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Public URL of the photo on screen, if any.
    pub fn current_photo_url(&self) -> Option<String> {
        self.slideshow.current_photo().map(manifest::photo_url)
    }
}

fn transport_effects(commands: Vec<TransportCommand>) -> Vec<Effect> {
    commands.into_iter().map(Effect::Transport).collect()
}
