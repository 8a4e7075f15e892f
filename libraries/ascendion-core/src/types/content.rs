//! Content detail (album / artist pages)
use crate::types::catalog::{CatalogItem, Collection, SongItem};
use serde::{Deserialize, Serialize};

/// What a detail page is showing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Album page
    Album,
    /// Artist page
    Artist,
    /// Any other content type, kept verbatim
    #[serde(untagged)]
    Other(String),
}

impl ContentKind {
    /// Parse from the route segment
    #[must_use]
    pub fn from_segment(segment: &str) -> Self {
        match segment {
            "album" => Self::Album,
            "artist" => Self::Artist,
            other => Self::Other(other.to_string()),
        }
    }

    /// Heading shown above the song list
    #[must_use]
    pub fn tracklist_heading(&self) -> &'static str {
        match self {
            Self::Album => "Tracklist",
            Self::Artist | Self::Other(_) => "Top Tracks",
        }
    }
}

/// Album or artist with its songs
///
/// Albums fill `tracks`, artists fill `top_tracks`. Lookups search
/// `tracks` first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDetail {
    /// Content id from the route
    pub id: String,
    /// Album, artist or other
    pub kind: ContentKind,
    /// Display title
    pub title: String,

    /// Artist credit (albums only)
    #[serde(default)]
    pub artist: Option<String>,

    /// Genre label
    #[serde(default)]
    pub genre: Option<String>,

    /// Blurb shown under the title
    #[serde(default)]
    pub description: String,

    /// Cover or portrait artwork
    pub image_url: String,

    /// Album tracklist
    #[serde(default)]
    pub tracks: Vec<SongItem>,

    /// Artist top tracks
    #[serde(default)]
    pub top_tracks: Vec<SongItem>,
}

impl ContentDetail {
    /// Placeholder detail for content that has no data yet
    pub fn generic(id: impl Into<String>, kind: ContentKind) -> Self {
        let id = id.into();
        Self {
            title: format!("Generic Content {id}"),
            image_url: format!("https://picsum.photos/seed/{id}/400/400"),
            description: "Details about this content.".to_string(),
            id,
            kind,
            artist: None,
            genre: None,
            tracks: Vec::new(),
            top_tracks: Vec::new(),
        }
    }

    /// Songs shown on the page: `tracks` if any, otherwise `top_tracks`
    pub fn listed_songs(&self) -> &[SongItem] {
        if self.tracks.is_empty() {
            &self.top_tracks
        } else {
            &self.tracks
        }
    }

    /// Collections to resolve against, in lookup order
    ///
    /// Both carry this content's artwork as the fallback.
    pub fn playback_collections(&self) -> Vec<Collection> {
        [("tracks", &self.tracks), ("top_tracks", &self.top_tracks)]
            .into_iter()
            .map(|(name, songs)| Collection {
                name: name.to_string(),
                artwork_url: Some(self.image_url.clone()),
                items: songs.iter().cloned().map(CatalogItem::Song).collect(),
            })
            .collect()
    }

    /// Id of the song "Play All" starts with
    pub fn first_track_id(&self) -> Option<&str> {
        self.tracks
            .first()
            .or_else(|| self.top_tracks.first())
            .map(|song| song.id.as_str())
    }
}
