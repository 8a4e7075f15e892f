//! Pages and what the playback bar shows when each one mounts

use crate::session::PlaybackSession;
use ascendion_core::{CoreError, Track};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Top-level pages of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    Search,
    Library,
    ContentDetail,
    Profile,
}

/// Initial playback bar state for a page
#[derive(Debug, Clone, PartialEq)]
pub struct PageDefaults {
    pub track: Track,
    pub is_playing: bool,
    pub progress: f32,
    pub volume: u8,
}

impl Page {
    /// All pages, in sidebar order
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Search,
        Page::Library,
        Page::ContentDetail,
        Page::Profile,
    ];

    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Search => "search",
            Self::Library => "library",
            Self::ContentDetail => "content_detail",
            Self::Profile => "profile",
        }
    }

    /// Playback bar state on mount
    pub fn defaults(&self) -> PageDefaults {
        let (id, title, artist, secs, is_playing, progress, volume) = match self {
            Self::Home => ("track001", "Ocean Drive", "Duke Dumont", 206, false, 30.0, 70),
            Self::Search => (
                "track002",
                "Lost Frequencies",
                "Are You With Me",
                190,
                false,
                10.0,
                80,
            ),
            Self::Library => ("track003", "Chill Vibes Only", "Lofi Girl", 220, true, 50.0, 60),
            Self::ContentDetail => (
                "track004",
                "Loading Content...",
                "System",
                180,
                false,
                20.0,
                75,
            ),
            Self::Profile => ("track005", "Profile Ambience", "System Sounds", 180, false, 0.0, 50),
        };

        PageDefaults {
            track: Track::new(
                id,
                title,
                artist,
                format!("https://picsum.photos/seed/{id}/100/100"),
                secs,
            ),
            is_playing,
            progress,
            volume,
        }
    }

    /// Fresh session holding this page's defaults
    pub fn mount_session(&self) -> PlaybackSession {
        let defaults = self.defaults();
        PlaybackSession::with_state(
            Some(defaults.track),
            defaults.is_playing,
            defaults.progress,
            defaults.volume,
        )
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Page {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "search" => Ok(Self::Search),
            "library" => Ok(Self::Library),
            "content_detail" | "content-detail" | "content" => Ok(Self::ContentDetail),
            "profile" => Ok(Self::Profile),
            other => Err(CoreError::invalid_input(format!("unknown page: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_a_default_track() {
        for page in Page::ALL {
            let defaults = page.defaults();
            assert!(defaults.track.has_artwork());
            assert!(defaults.progress <= 100.0);
            assert!(defaults.volume <= 100);
        }
    }

    #[test]
    fn library_mounts_playing() {
        let session = Page::Library.mount_session();
        assert!(session.is_playing());
        assert_eq!(session.progress(), 50.0);
        assert_eq!(session.volume(), 60);
        assert_eq!(session.current_track().unwrap().title, "Chill Vibes Only");
        assert_eq!(session.pending_event_count(), 0);
    }

    #[test]
    fn home_defaults() {
        let defaults = Page::Home.defaults();
        assert_eq!(defaults.track.id, "track001");
        assert_eq!(defaults.track.duration_secs, 206);
        assert_eq!(
            defaults.track.album_art_url,
            "https://picsum.photos/seed/track001/100/100"
        );
    }

    #[test]
    fn parse_round_trips_display() {
        for page in Page::ALL {
            assert_eq!(page.to_string().parse::<Page>().unwrap(), page);
        }
        assert_eq!("content".parse::<Page>().unwrap(), Page::ContentDetail);
        assert!("settings".parse::<Page>().is_err());
    }
}
