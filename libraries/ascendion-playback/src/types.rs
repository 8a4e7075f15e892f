//! Core types for playback management

use ascendion_core::Track;
use serde::{Deserialize, Serialize};

/// Read-only view of a session for rendering the playback bar
///
/// When `current_track` is `None` the bar shows its empty state and
/// `is_playing` carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Track on the bar, if any
    pub current_track: Option<Track>,

    /// Whether the play button shows "pause"
    pub is_playing: bool,

    /// Progress through the track (0-100)
    pub progress: f32,

    /// Volume level (0-100)
    pub volume: u8,

    /// Mute state
    pub is_muted: bool,

    /// Elapsed position in seconds, derived from progress
    pub elapsed_secs: f64,

    /// Elapsed position as `M:SS`
    pub elapsed: String,

    /// Track length as `M:SS`
    pub total: String,
}

impl PlaybackSnapshot {
    /// Whether the bar should show "No music playing."
    pub fn is_empty(&self) -> bool {
        self.current_track.is_none()
    }
}

/// Direction of a skip request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkipDirection {
    Next,
    Previous,
}

/// Configuration for playback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial volume (0-100, default: 80)
    pub volume: u8,

    /// Artwork used when neither the item nor its collection has any
    pub default_artwork_url: Option<String>,

    /// Lower bound for placeholder durations of media cards (default: 180)
    pub placeholder_duration_min_secs: u32,

    /// Upper bound, exclusive (default: 300)
    pub placeholder_duration_max_secs: u32,

    /// Keep one session across page navigation (default: true)
    pub persist_across_pages: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 80,
            default_artwork_url: None,
            placeholder_duration_min_secs: 180,
            placeholder_duration_max_secs: 300,
            persist_across_pages: true,
        }
    }
}
