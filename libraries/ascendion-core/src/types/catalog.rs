//! Catalog items and collections
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A song row (search results, liked songs, album tracklists)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongItem {
    /// Unique item id
    pub id: String,
    /// Song title
    pub title: String,
    /// Performing artist
    pub artist: String,

    /// Album the song is from
    #[serde(default)]
    pub album: Option<String>,

    /// Display duration, `M:SS`
    pub duration: String,

    /// Per-song artwork, if any
    #[serde(default)]
    pub image_url: Option<String>,

    /// Explicit content flag
    #[serde(default)]
    pub explicit: bool,

    /// Whether the user liked the song
    #[serde(default)]
    pub liked: bool,
}

impl SongItem {
    /// Create a song with no album, artwork or flags
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            album: None,
            duration: duration.into(),
            image_url: None,
            explicit: false,
            liked: false,
        }
    }

    /// Set the artwork URL
    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Set the album name
    #[must_use]
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }
}

/// Kind of media card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Album card
    Album,
    /// Playlist card
    Playlist,
    /// Artist card
    Artist,
}

impl MediaKind {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Album => "album",
            Self::Playlist => "playlist",
            Self::Artist => "artist",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An album, playlist or artist card
///
/// Cards carry no duration of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Unique item id
    pub id: String,
    /// Card title
    pub title: String,

    /// Secondary line (curator, artist, ...)
    #[serde(default)]
    pub subtitle: Option<String>,

    /// Card artwork
    pub image_url: String,
    /// What the card stands for
    pub kind: MediaKind,
}

impl MediaItem {
    /// Create a card
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        subtitle: Option<String>,
        image_url: impl Into<String>,
        kind: MediaKind,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle,
            image_url: image_url.into(),
            kind,
        }
    }
}

/// Anything a user can press play on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CatalogItem {
    /// A song row
    Song(SongItem),
    /// An album, playlist or artist card
    Media(MediaItem),
}

impl CatalogItem {
    /// Item identifier
    pub fn id(&self) -> &str {
        match self {
            Self::Song(song) => &song.id,
            Self::Media(media) => &media.id,
        }
    }

    /// Item title
    pub fn title(&self) -> &str {
        match self {
            Self::Song(song) => &song.title,
            Self::Media(media) => &media.title,
        }
    }

    /// Item artwork, if it has any
    pub fn image_url(&self) -> Option<&str> {
        match self {
            Self::Song(song) => song.image_url.as_deref(),
            Self::Media(media) => Some(media.image_url.as_str()),
        }
        .filter(|url| !url.is_empty())
    }
}

impl From<SongItem> for CatalogItem {
    fn from(song: SongItem) -> Self {
        Self::Song(song)
    }
}

impl From<MediaItem> for CatalogItem {
    fn from(media: MediaItem) -> Self {
        Self::Media(media)
    }
}

/// An ordered group of items sharing a container
///
/// The container's artwork is used for items that have none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Section name ("songs", "tracks", ...)
    #[serde(default)]
    pub name: String,

    /// Container artwork used as fallback
    #[serde(default)]
    pub artwork_url: Option<String>,

    /// Items in display order
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

impl Collection {
    /// Create an empty collection
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            artwork_url: None,
            items: Vec::new(),
        }
    }

    /// Set the container artwork
    #[must_use]
    pub fn with_artwork(mut self, url: impl Into<String>) -> Self {
        self.artwork_url = Some(url.into());
        self
    }

    /// Append items
    #[must_use]
    pub fn with_items<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<CatalogItem>,
    {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }

    /// First item with the given id
    pub fn find(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Container artwork, ignoring empty strings
    pub fn artwork(&self) -> Option<&str> {
        self.artwork_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the collection has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Everything loaded for a session, in lookup order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Collections in lookup order
    #[serde(default)]
    pub collections: Vec<Collection>,
}

impl Catalog {
    /// Create a catalog from collections
    pub fn new(collections: Vec<Collection>) -> Self {
        Self { collections }
    }

    /// Parse a catalog from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the catalog to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Total number of items across all collections
    pub fn item_count(&self) -> usize {
        self.collections.iter().map(Collection::len).sum()
    }
}
