//! Navigator - one session across page changes
//!
//! The presentation layer owns a `Navigator` and passes its session to
//! whatever page is showing. Whether the session survives navigation is a
//! config switch; when it does not, each page mounts its own defaults.

use crate::{
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    pages::Page,
    resolver::{first_track_id, TrackResolver},
    session::PlaybackSession,
    types::PlaybackConfig,
};
use ascendion_core::types::Collection;
use serde::{Deserialize, Serialize};
use tracing::info;

/// A user action forwarded by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "gesture", rename_all = "snake_case")]
pub enum Gesture {
    TogglePlayPause,
    Seek { percent: f32 },
    SetVolume { level: f32 },
    ToggleMute,
    PlayTrack { id: String },
    PlayAll,
    SkipNext,
    SkipPrevious,
    Navigate { page: Page },
}

/// Current page plus the playback session shared by pages
#[derive(Debug, Clone)]
pub struct Navigator {
    page: Page,
    session: PlaybackSession,
    persist_across_pages: bool,
}

impl Navigator {
    /// Start on `page` with that page's defaults on the bar
    pub fn new(page: Page, config: &PlaybackConfig) -> Self {
        Self {
            page,
            session: page.mount_session(),
            persist_across_pages: config.persist_across_pages,
        }
    }

    /// Start on `page` with an existing session
    pub fn with_session(page: Page, session: PlaybackSession, config: &PlaybackConfig) -> Self {
        Self {
            page,
            session,
            persist_across_pages: config.persist_across_pages,
        }
    }

    /// Page currently shown
    pub fn page(&self) -> Page {
        self.page
    }

    /// Session driving the playback bar
    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    /// Mutable access to the session
    pub fn session_mut(&mut self) -> &mut PlaybackSession {
        &mut self.session
    }

    /// Switch pages
    ///
    /// Returns `true` if the session was rebuilt from the page's defaults.
    pub fn navigate(&mut self, page: Page) -> bool {
        let reset = !self.persist_across_pages;

        if reset {
            // Carry undrained events over so the navigation itself is not lost
            let pending = self.session.drain_events();
            self.session = page.mount_session();
            for event in pending {
                self.session.push_event(event);
            }
        }

        info!(from = %self.page, to = %page, session_reset = reset, "Navigated");
        self.page = page;
        self.session.push_event(PlaybackEvent::Navigated {
            page: page.to_string(),
            session_reset: reset,
        });

        reset
    }

    /// Apply one gesture
    ///
    /// `collections` are the items visible on the current page, in lookup
    /// order. Only `PlayTrack` and `PlayAll` can fail.
    pub fn apply(
        &mut self,
        gesture: &Gesture,
        resolver: &mut TrackResolver,
        collections: &[Collection],
    ) -> Result<()> {
        match gesture {
            Gesture::TogglePlayPause => self.session.toggle_play_pause(),
            Gesture::Seek { percent } => self.session.seek(*percent),
            Gesture::SetVolume { level } => self.session.set_volume_percent(*level),
            Gesture::ToggleMute => self.session.toggle_mute(),
            Gesture::PlayTrack { id } => {
                self.session.play_by_id(id, resolver, collections)?;
            }
            Gesture::PlayAll => {
                let id = first_track_id(collections).ok_or(PlaybackError::NothingToPlay)?;
                self.session.play_by_id(id, resolver, collections)?;
            }
            Gesture::SkipNext => self.session.skip_next(),
            Gesture::SkipPrevious => self.session.skip_previous(),
            Gesture::Navigate { page } => {
                self.navigate(*page);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ascendion_core::types::SongItem;

    fn songs() -> Vec<Collection> {
        vec![Collection::new("songs").with_items([
            SongItem::new("song1", "Sunset Cruise", "Synthwave Kid", "3:45"),
            SongItem::new("song2", "Midnight City", "M83", "4:03"),
        ])]
    }

    #[test]
    fn persists_session_by_default() {
        let config = PlaybackConfig::default();
        let mut navigator = Navigator::new(Page::Search, &config);
        let mut resolver = TrackResolver::seeded(&config, 0);

        navigator
            .apply(&Gesture::PlayTrack { id: "song2".into() }, &mut resolver, &songs())
            .unwrap();

        assert!(!navigator.navigate(Page::Library));
        assert_eq!(navigator.page(), Page::Library);
        assert_eq!(navigator.session().current_track().unwrap().id, "song2");
        assert!(navigator.session().is_playing());
    }

    #[test]
    fn resets_when_persistence_disabled() {
        let config = PlaybackConfig {
            persist_across_pages: false,
            ..Default::default()
        };
        let mut navigator = Navigator::new(Page::Search, &config);
        let mut resolver = TrackResolver::seeded(&config, 0);

        navigator
            .apply(&Gesture::PlayTrack { id: "song1".into() }, &mut resolver, &songs())
            .unwrap();
        assert!(navigator.navigate(Page::Home));

        let session = navigator.session();
        assert_eq!(session.current_track().unwrap().id, "track001");
        assert_eq!(session.progress(), 30.0);
        assert_eq!(session.volume(), 70);
    }

    #[test]
    fn reset_keeps_undrained_events() {
        let config = PlaybackConfig {
            persist_across_pages: false,
            ..Default::default()
        };
        let mut navigator = Navigator::new(Page::Home, &config);
        navigator.session_mut().toggle_play_pause();
        navigator.navigate(Page::Profile);

        let events = navigator.session_mut().drain_events();
        assert_eq!(events[0], PlaybackEvent::StateChanged { is_playing: true });
        assert_eq!(
            events[1],
            PlaybackEvent::Navigated {
                page: "profile".to_string(),
                session_reset: true
            }
        );
    }

    #[test]
    fn play_all_starts_first_song() {
        let config = PlaybackConfig::default();
        let mut navigator = Navigator::new(Page::ContentDetail, &config);
        let mut resolver = TrackResolver::seeded(&config, 0);

        navigator
            .apply(&Gesture::PlayAll, &mut resolver, &songs())
            .unwrap();
        assert_eq!(navigator.session().current_track().unwrap().id, "song1");

        let err = navigator
            .apply(&Gesture::PlayAll, &mut resolver, &[])
            .unwrap_err();
        assert!(matches!(err, PlaybackError::NothingToPlay));
    }

    #[test]
    fn set_volume_gesture_clamps_raw_values() {
        let config = PlaybackConfig::default();
        let mut navigator = Navigator::new(Page::Home, &config);
        let mut resolver = TrackResolver::seeded(&config, 0);

        for (json, expected) in [
            (r#"{"gesture": "set_volume", "level": 300}"#, 100),
            (r#"{"gesture": "set_volume", "level": 55.5}"#, 56),
            (r#"{"gesture": "set_volume", "level": -5}"#, 0),
        ] {
            let gesture: Gesture = serde_json::from_str(json).unwrap();
            navigator.apply(&gesture, &mut resolver, &[]).unwrap();
            assert_eq!(navigator.session().volume(), expected, "{json}");
        }

        assert!(navigator.session().is_muted());
    }

    #[test]
    fn gestures_deserialize_from_tagged_json() {
        let gestures: Vec<Gesture> = serde_json::from_str(
            r#"[
                {"gesture": "seek", "percent": 40},
                {"gesture": "play_track", "id": "song1"},
                {"gesture": "navigate", "page": "content_detail"},
                {"gesture": "toggle_mute"}
            ]"#,
        )
        .unwrap();

        assert_eq!(gestures[0], Gesture::Seek { percent: 40.0 });
        assert_eq!(
            gestures[2],
            Gesture::Navigate {
                page: Page::ContentDetail
            }
        );
        assert_eq!(gestures[3], Gesture::ToggleMute);
    }
}
