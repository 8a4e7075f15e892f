//! Ascendion - Playback State
//!
//! Platform-agnostic playback state for the Ascendion player.
//!
//! This crate provides:
//! - Track resolution from catalog collections (first match wins)
//! - Playback session (play/pause, seek, volume, mute)
//! - Per-page defaults and a navigator that carries one session across pages
//! - Event queue for UI synchronization
//! - Optional WASM bindings (`wasm` feature)
//!
//! # Architecture
//!
//! `ascendion-playback` never touches audio hardware or the DOM:
//! - No audio engine; progress moves only through seeking
//! - Skip is recorded as a request, there is no queue behind it
//! - The presentation layer forwards gestures and renders snapshots
//!
//! # Example: Play a Track
//!
//! ```rust
//! use ascendion_core::types::{Collection, SongItem};
//! use ascendion_playback::{PlaybackConfig, PlaybackSession, TrackResolver};
//!
//! let config = PlaybackConfig::default();
//! let mut session = PlaybackSession::new(&config);
//! let mut resolver = TrackResolver::new(&config);
//!
//! let collections = vec![Collection::new("songs")
//!     .with_items([SongItem::new("song1", "Sunset Cruise", "Synthwave Kid", "3:45")])];
//!
//! let track = session.play_by_id("song1", &mut resolver, &collections).unwrap();
//! assert_eq!(track.duration_secs, 225);
//! assert!(session.is_playing());
//! assert_eq!(session.progress(), 0.0);
//! ```
//!
//! # Example: Navigation
//!
//! ```rust
//! use ascendion_playback::{Navigator, Page, PlaybackConfig};
//!
//! let config = PlaybackConfig {
//!     persist_across_pages: false,
//!     ..Default::default()
//! };
//! let mut navigator = Navigator::new(Page::Home, &config);
//!
//! // Each page mounts its own defaults when persistence is off
//! navigator.navigate(Page::Library);
//! assert!(navigator.session().is_playing());
//! assert_eq!(navigator.session().volume(), 60);
//! ```

mod error;
pub mod events;
mod navigator;
mod pages;
pub mod resolver;
mod session;
pub mod types;
mod volume;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::{EventQueue, PlaybackEvent};
pub use navigator::{Gesture, Navigator};
pub use pages::{Page, PageDefaults};
pub use resolver::{first_track_id, TrackResolver, FALLBACK_ARTIST};
pub use session::{clamp_percent, percent_to_level, PlaybackSession};
pub use types::{PlaybackConfig, PlaybackSnapshot, SkipDirection};
pub use volume::Volume;
