//! Playback Events
//!
//! Event-based communication for UI synchronization. The session queues an
//! event for every mutation that changes what the playback bar shows; the
//! presentation layer drains them and re-renders.

use crate::types::SkipDirection;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Events emitted by a playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PlaybackEvent {
    /// Play/pause state changed
    StateChanged {
        /// Whether playback is now running
        is_playing: bool,
    },

    /// A different track was put on the bar
    TrackChanged {
        /// ID of the new (current) track
        track_id: String,
        /// ID of the previous track (if any)
        previous_track_id: Option<String>,
    },

    /// Progress moved by a seek
    ProgressChanged {
        /// New progress (0-100)
        progress: f32,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0-100)
        level: u8,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Skip button pressed; there is no queue to act on it
    SkipRequested {
        /// Which way
        direction: SkipDirection,
    },

    /// Active page changed
    Navigated {
        /// Route segment of the new page
        page: String,
        /// Whether the session was rebuilt from page defaults
        session_reset: bool,
    },
}

/// Bounded event buffer
///
/// Oldest events are dropped once `capacity` is reached.
#[derive(Debug, Clone)]
pub struct EventQueue {
    events: VecDeque<PlaybackEvent>,
    capacity: usize,
}

/// Default number of undrained events kept
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

impl EventQueue {
    /// Create a queue holding at most `capacity` events
    pub fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.clamp(1, DEFAULT_EVENT_CAPACITY)),
            capacity: capacity.max(1),
        }
    }

    /// Queue an event
    pub fn push(&mut self, event: PlaybackEvent) {
        if self.events.len() >= self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Take all queued events, oldest first
    pub fn drain(&mut self) -> Vec<PlaybackEvent> {
        self.events.drain(..).collect()
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if no events are queued
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_returns_in_order_and_empties() {
        let mut queue = EventQueue::default();
        queue.push(PlaybackEvent::StateChanged { is_playing: true });
        queue.push(PlaybackEvent::ProgressChanged { progress: 40.0 });

        let events = queue.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], PlaybackEvent::StateChanged { is_playing: true });
        assert!(queue.is_empty());
    }

    #[test]
    fn oldest_events_dropped_at_capacity() {
        let mut queue = EventQueue::new(2);
        for progress in [10.0, 20.0, 30.0] {
            queue.push(PlaybackEvent::ProgressChanged { progress });
        }

        assert_eq!(queue.len(), 2);
        assert_eq!(
            queue.drain()[0],
            PlaybackEvent::ProgressChanged { progress: 20.0 }
        );
    }

    #[test]
    fn full_queue_keeps_newest_in_order() {
        let mut queue = EventQueue::new(DEFAULT_EVENT_CAPACITY);
        for level in 0..=255u8 {
            queue.push(PlaybackEvent::VolumeChanged {
                level,
                is_muted: false,
            });
        }
        queue.push(PlaybackEvent::StateChanged { is_playing: true });

        let events = queue.drain();
        assert_eq!(events.len(), DEFAULT_EVENT_CAPACITY);
        assert_eq!(
            events[0],
            PlaybackEvent::VolumeChanged {
                level: 1,
                is_muted: false
            }
        );
        assert_eq!(
            events[DEFAULT_EVENT_CAPACITY - 1],
            PlaybackEvent::StateChanged { is_playing: true }
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn events_serialize_with_tag() {
        let event = PlaybackEvent::SkipRequested {
            direction: SkipDirection::Next,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "skip_requested");
        assert_eq!(json["direction"], "next");
    }
}
