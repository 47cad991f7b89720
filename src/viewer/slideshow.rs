// SPDX-License-Identifier: MPL-2.0
//! Photo rotation state machine.
//!
//! The slideshow cycles through the manifest's photo list on a fixed
//! interval and lets the user step forward or backward manually. Manual
//! navigation restarts the countdown so the next automatic advance happens a
//! full interval later, never sooner.
//!
//! Timing is deadline-based: the controller stores the `Instant` of the next
//! automatic advance and compares it against the time carried by each tick.
//! Time is never sampled internally, so tests drive a synthetic clock.

use std::time::{Duration, Instant};

/// Rotating photo list with wraparound navigation and an advance deadline.
///
/// Two phases: idle (no photos, nothing armed) and cycling (photos loaded,
/// deadline armed). Loading a non-empty list is the only idle-to-cycling
/// transition; [`Slideshow::shutdown`] disarms the deadline on teardown.
#[derive(Debug, Clone, PartialEq)]
pub struct Slideshow {
    photos: Vec<String>,
    current: usize,
    interval: Duration,
    next_advance: Option<Instant>,
}

impl Slideshow {
    /// Creates an idle slideshow with the given rotation interval.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            photos: Vec::new(),
            current: 0,
            interval,
            next_advance: None,
        }
    }

    /// Loads the photo list and, when it is non-empty, starts cycling from
    /// the first photo with a full interval on the clock.
    pub fn load(&mut self, photos: Vec<String>, now: Instant) {
        self.photos = photos;
        self.current = 0;
        self.next_advance = if self.photos.is_empty() {
            None
        } else {
            Some(now + self.interval)
        };
    }

    /// Handles a periodic timer tick. Advances to the next photo when the
    /// deadline has been reached and re-arms the deadline from `now`.
    /// Returns whether an advance happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.next_advance {
            Some(deadline) if now >= deadline => {
                self.current = (self.current + 1) % self.photos.len();
                self.next_advance = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Steps forward one photo, wrapping at the end, and restarts the
    /// countdown. No-op while idle.
    pub fn next(&mut self, now: Instant) {
        if self.photos.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.photos.len();
        self.next_advance = Some(now + self.interval);
    }

    /// Steps backward one photo, wrapping at the start, and restarts the
    /// countdown. No-op while idle.
    pub fn prev(&mut self, now: Instant) {
        if self.photos.is_empty() {
            return;
        }
        let len = self.photos.len();
        self.current = (self.current + len - 1) % len;
        self.next_advance = Some(now + self.interval);
    }

    /// Disarms the advance deadline. Called on teardown; ticks arriving
    /// afterwards are ignored.
    pub fn shutdown(&mut self) {
        self.next_advance = None;
    }

    /// Returns the index of the photo on screen, if any.
    pub fn current_index(&self) -> Option<usize> {
        (!self.photos.is_empty()).then_some(self.current)
    }

    /// Returns the relative path of the photo on screen, if any.
    pub fn current_photo(&self) -> Option<&str> {
        self.photos.get(self.current).map(String::as_str)
    }

    /// One-based position and total, for the "3 / 7" indicator.
    pub fn counter(&self) -> Option<(usize, usize)> {
        (!self.photos.is_empty()).then(|| (self.current + 1, self.photos.len()))
    }

    /// Returns the total number of photos.
    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    /// Checks if the photo list is empty.
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Checks whether the rotation deadline is armed.
    pub fn is_cycling(&self) -> bool {
        self.next_advance.is_some()
    }

    /// The `Instant` of the next automatic advance, for hosts that schedule
    /// their timer around it.
    pub fn next_advance(&self) -> Option<Instant> {
        self.next_advance
    }
}
