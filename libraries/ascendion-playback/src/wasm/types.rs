//! WASM-compatible type definitions

use ascendion_core::Track;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// WASM-compatible track
///
/// Mirrors [`Track`] with JS-friendly getters (camelCase names, duration as
/// a number of seconds).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[wasm_bindgen]
pub struct WasmTrack {
    id: String,
    title: String,
    artist: String,
    album_art_url: String,
    duration_secs: u32,
}

#[wasm_bindgen]
impl WasmTrack {
    /// Create a new track
    #[wasm_bindgen(constructor)]
    pub fn new(
        id: String,
        title: String,
        artist: String,
        album_art_url: String,
        duration_secs: u32,
    ) -> Self {
        Self {
            id,
            title,
            artist,
            album_art_url,
            duration_secs,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn id(&self) -> String {
        self.id.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.title.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn artist(&self) -> String {
        self.artist.clone()
    }

    #[wasm_bindgen(getter, js_name = albumArtUrl)]
    pub fn album_art_url(&self) -> String {
        self.album_art_url.clone()
    }

    #[wasm_bindgen(getter, js_name = durationSecs)]
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }
}

impl From<&Track> for WasmTrack {
    fn from(track: &Track) -> Self {
        Self {
            id: track.id.clone(),
            title: track.title.clone(),
            artist: track.artist.clone(),
            album_art_url: track.album_art_url.clone(),
            duration_secs: track.duration_secs,
        }
    }
}

impl From<WasmTrack> for Track {
    fn from(track: WasmTrack) -> Self {
        Self {
            id: track.id,
            title: track.title,
            artist: track.artist,
            album_art_url: track.album_art_url,
            duration_secs: track.duration_secs,
        }
    }
}
