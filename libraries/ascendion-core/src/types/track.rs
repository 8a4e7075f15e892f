//! Track domain type
use crate::duration::format_duration;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A normalized playable item
///
/// This is what the playback bar shows: it is built from whichever catalog
/// item the user picked, so every field is already resolved (artwork has
/// been through its fallback chain, duration has been parsed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Identifier of the catalog item this track was built from
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Artwork URL, empty when nothing was available
    pub album_art_url: String,

    /// Track duration in whole seconds
    pub duration_secs: u32,
}

impl Track {
    /// Create a new track
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        album_art_url: impl Into<String>,
        duration_secs: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            album_art_url: album_art_url.into(),
            duration_secs,
        }
    }

    /// Get the track duration as a Duration
    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.duration_secs))
    }

    /// Duration rendered as `M:SS`
    pub fn formatted_duration(&self) -> String {
        format_duration(self.duration_secs)
    }

    /// Whether the track has artwork to show
    pub fn has_artwork(&self) -> bool {
        !self.album_art_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_creation() {
        let track = Track::new(
            "track001",
            "Ocean Drive",
            "Duke Dumont",
            "https://picsum.photos/seed/track001/100/100",
            206,
        );

        assert_eq!(track.id, "track001");
        assert_eq!(track.duration(), Duration::from_secs(206));
        assert_eq!(track.formatted_duration(), "3:26");
        assert!(track.has_artwork());
    }

    #[test]
    fn empty_artwork() {
        let track = Track::new("t", "Title", "Artist", "", 0);
        assert!(!track.has_artwork());
        assert_eq!(track.formatted_duration(), "0:00");
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let track = Track::new("t", "Title", "Artist", "", 90);
        let json = serde_json::to_value(&track).unwrap();
        assert_eq!(json["duration_secs"], 90);
        assert_eq!(json["album_art_url"], "");
    }
}
