//! AscendionPlay Core
//!
//! Platform-agnostic domain types and error handling for AscendionPlay.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, catalog items (`SongItem`, `MediaItem`),
//!   `Collection`, `Catalog` and `ContentDetail`
//! - **Durations**: parsing and formatting of `M:SS` strings
//! - **Error Handling**: unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use ascendion_core::types::{Collection, SongItem};
//! use ascendion_core::duration::{format_duration, parse_duration};
//!
//! let tracks = Collection::new("tracks").with_items([SongItem::new(
//!     "trackA2",
//!     "Future's Reflection",
//!     "The Timeless Travelers",
//!     "4:30",
//! )]);
//!
//! let secs = parse_duration("4:30").unwrap();
//! assert_eq!(secs, 270);
//! assert_eq!(format_duration(secs), "4:30");
//! assert!(tracks.find("trackA2").is_some());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod duration;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};

pub use types::{
    Catalog, CatalogItem, Collection, ContentDetail, ContentKind, MediaItem, MediaKind, SongItem,
    Track,
};
