//! Track selection
//!
//! Turns "the user pressed play on item X" into a [`Track`]. Collections are
//! searched in the order given and the first item whose id matches wins.

use crate::{
    error::{PlaybackError, Result},
    types::PlaybackConfig,
};
use ascendion_core::{
    duration::parse_duration,
    types::{CatalogItem, Collection, MediaItem, SongItem},
    Track,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, warn};

/// Artist shown for cards that have no subtitle
pub const FALLBACK_ARTIST: &str = "Various Artists";

/// Builds tracks from catalog items
///
/// Media cards have no duration, so a placeholder is drawn from
/// `[min, max)` seconds. The random source can be seeded for repeatable
/// results.
#[derive(Debug, Clone)]
pub struct TrackResolver {
    default_artwork_url: Option<String>,
    placeholder_min_secs: u32,
    placeholder_max_secs: u32,
    rng: StdRng,
}

impl TrackResolver {
    /// Create a resolver from config with an entropy-seeded random source
    pub fn new(config: &PlaybackConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a resolver with a fixed seed
    pub fn seeded(config: &PlaybackConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &PlaybackConfig, rng: StdRng) -> Self {
        let min = config.placeholder_duration_min_secs;
        let max = config.placeholder_duration_max_secs.max(min);

        Self {
            default_artwork_url: config
                .default_artwork_url
                .clone()
                .filter(|url| !url.is_empty()),
            placeholder_min_secs: min,
            placeholder_max_secs: max,
            rng,
        }
    }

    /// Find `id` across `collections` and build a track from it
    ///
    /// # Errors
    /// - [`PlaybackError::TrackNotFound`] if no collection holds the id
    /// - [`PlaybackError::Core`] wrapping `InvalidDuration` if the matched
    ///   song's duration string is malformed
    pub fn resolve(&mut self, id: &str, collections: &[Collection]) -> Result<Track> {
        for collection in collections {
            if let Some(item) = collection.find(id) {
                debug!(id, collection = %collection.name, "Resolved catalog item");
                return self.build_track(item, collection.artwork());
            }
        }

        warn!(id, searched = collections.len(), "No catalog item matches id");
        Err(PlaybackError::TrackNotFound(id.to_string()))
    }

    /// Build a track from an item, using `container_artwork` as fallback
    pub fn build_track(
        &mut self,
        item: &CatalogItem,
        container_artwork: Option<&str>,
    ) -> Result<Track> {
        let album_art_url = item
            .image_url()
            .or(container_artwork)
            .or(self.default_artwork_url.as_deref())
            .unwrap_or_default()
            .to_string();

        match item {
            CatalogItem::Song(song) => Self::song_track(song, album_art_url),
            CatalogItem::Media(media) => Ok(self.media_track(media, album_art_url)),
        }
    }

    fn song_track(song: &SongItem, album_art_url: String) -> Result<Track> {
        let duration_secs = parse_duration(&song.duration)?;

        Ok(Track {
            id: song.id.clone(),
            title: song.title.clone(),
            artist: song.artist.clone(),
            album_art_url,
            duration_secs,
        })
    }

    fn media_track(&mut self, media: &MediaItem, album_art_url: String) -> Track {
        let artist = media
            .subtitle
            .as_deref()
            .filter(|subtitle| !subtitle.is_empty())
            .unwrap_or(FALLBACK_ARTIST);

        Track {
            id: media.id.clone(),
            title: media.title.clone(),
            artist: artist.to_string(),
            album_art_url,
            duration_secs: self.placeholder_duration(),
        }
    }

    fn placeholder_duration(&mut self) -> u32 {
        if self.placeholder_min_secs == self.placeholder_max_secs {
            self.placeholder_min_secs
        } else {
            self.rng
                .gen_range(self.placeholder_min_secs..self.placeholder_max_secs)
        }
    }
}

impl Default for TrackResolver {
    fn default() -> Self {
        Self::new(&PlaybackConfig::default())
    }
}

/// Id of the first song across `collections`, for "Play All"
pub fn first_track_id(collections: &[Collection]) -> Option<&str> {
    collections
        .iter()
        .flat_map(|collection| collection.items.iter())
        .find(|item| matches!(item, CatalogItem::Song(_)))
        .map(CatalogItem::id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ascendion_core::types::MediaKind;

    fn resolver() -> TrackResolver {
        TrackResolver::seeded(&PlaybackConfig::default(), 7)
    }

    #[test]
    fn song_fields_carry_over() {
        let tracks = Collection::new("tracks").with_items([SongItem::new(
            "trackA2",
            "Future's Reflection",
            "The Timeless Travelers",
            "4:30",
        )
        .with_image("https://picsum.photos/seed/trackA2/50/50")]);

        let track = resolver().resolve("trackA2", &[tracks]).unwrap();

        assert_eq!(track.id, "trackA2");
        assert_eq!(track.title, "Future's Reflection");
        assert_eq!(track.duration_secs, 270);
        assert_eq!(track.album_art_url, "https://picsum.photos/seed/trackA2/50/50");
    }

    #[test]
    fn artwork_falls_back_to_container() {
        let tracks = Collection::new("tracks")
            .with_artwork("https://picsum.photos/seed/albumXyz/400/400")
            .with_items([SongItem::new("t1", "One", "Band", "1:00")]);

        let track = resolver().resolve("t1", &[tracks]).unwrap();
        assert_eq!(track.album_art_url, "https://picsum.photos/seed/albumXyz/400/400");
    }

    #[test]
    fn artwork_falls_back_to_config_then_empty() {
        let tracks =
            Collection::new("tracks").with_items([SongItem::new("t1", "One", "Band", "1:00")]);

        let config = PlaybackConfig {
            default_artwork_url: Some("https://picsum.photos/seed/default/100/100".to_string()),
            ..Default::default()
        };
        let track = TrackResolver::seeded(&config, 1)
            .resolve("t1", std::slice::from_ref(&tracks))
            .unwrap();
        assert_eq!(track.album_art_url, "https://picsum.photos/seed/default/100/100");

        let track = resolver().resolve("t1", &[tracks]).unwrap();
        assert_eq!(track.album_art_url, "");
    }

    #[test]
    fn media_cards_get_placeholder_duration_and_artist() {
        let cards = Collection::new("cards").with_items([
            MediaItem::new(
                "playlist1",
                "Focus Flow",
                Some("Instrumental Beats".to_string()),
                "https://picsum.photos/seed/playlist1/200/200",
                MediaKind::Playlist,
            ),
            MediaItem::new(
                "album9",
                "Untitled",
                None,
                "https://picsum.photos/seed/album9/200/200",
                MediaKind::Album,
            ),
        ]);

        let mut resolver = resolver();
        let with_subtitle = resolver.resolve("playlist1", std::slice::from_ref(&cards)).unwrap();
        assert_eq!(with_subtitle.artist, "Instrumental Beats");
        assert!((180..300).contains(&with_subtitle.duration_secs));

        let without_subtitle = resolver.resolve("album9", &[cards]).unwrap();
        assert_eq!(without_subtitle.artist, FALLBACK_ARTIST);
    }

    #[test]
    fn same_seed_same_placeholder() {
        let cards = Collection::new("cards").with_items([MediaItem::new(
            "a",
            "A",
            None,
            "",
            MediaKind::Album,
        )]);

        let first = resolver().resolve("a", std::slice::from_ref(&cards)).unwrap();
        let second = resolver().resolve("a", &[cards]).unwrap();
        assert_eq!(first.duration_secs, second.duration_secs);
    }

    #[test]
    fn fixed_placeholder_when_bounds_equal() {
        let config = PlaybackConfig {
            placeholder_duration_min_secs: 200,
            placeholder_duration_max_secs: 200,
            ..Default::default()
        };
        let cards = Collection::new("cards").with_items([MediaItem::new(
            "a",
            "A",
            None,
            "",
            MediaKind::Artist,
        )]);

        let track = TrackResolver::seeded(&config, 3).resolve("a", &[cards]).unwrap();
        assert_eq!(track.duration_secs, 200);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let err = resolver().resolve("nope", &[Collection::new("empty")]).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn malformed_duration_surfaces() {
        let tracks =
            Collection::new("tracks").with_items([SongItem::new("bad", "Bad", "Band", "3m20s")]);
        let err = resolver().resolve("bad", &[tracks]).unwrap_err();
        assert!(err.is_invalid_duration());
    }

    #[test]
    fn first_track_skips_media_cards() {
        let collections = [
            Collection::new("cards")
                .with_items([MediaItem::new("m", "M", None, "", MediaKind::Album)]),
            Collection::new("songs").with_items([
                SongItem::new("s1", "S1", "A", "1:00"),
                SongItem::new("s2", "S2", "A", "2:00"),
            ]),
        ];

        assert_eq!(first_track_id(&collections), Some("s1"));
        assert_eq!(first_track_id(&collections[..1]), None);
    }
}
