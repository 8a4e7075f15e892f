//! Domain types shared by the playback library and its front-ends

mod catalog;
mod content;
mod track;

pub use catalog::{Catalog, CatalogItem, Collection, MediaItem, MediaKind, SongItem};
pub use content::{ContentDetail, ContentKind};
pub use track::Track;
