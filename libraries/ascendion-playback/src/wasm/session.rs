//! WASM-compatible playback session wrapper

use super::types::WasmTrack;
use crate::{Navigator, Page, PlaybackConfig, PlaybackError, TrackResolver};
use ascendion_core::types::Collection;
use js_sys::Function;
use wasm_bindgen::prelude::*;

/// WASM-compatible playback session
///
/// Wraps a [`Navigator`] and the collections visible on the current page.
/// The page calls `setCollections` whenever its content changes.
#[wasm_bindgen]
pub struct WasmPlaybackSession {
    navigator: Navigator,
    resolver: TrackResolver,
    collections: Vec<Collection>,

    // Event callbacks
    on_state_change: Option<Function>,
    on_track_change: Option<Function>,
    on_error: Option<Function>,
}

#[wasm_bindgen]
impl WasmPlaybackSession {
    /// Create a session mounted on `page` ("home", "search", ...)
    #[wasm_bindgen(constructor)]
    pub fn new(page: &str) -> Result<WasmPlaybackSession, JsValue> {
        // Enable panic hooks for better error messages in console
        console_error_panic_hook::set_once();

        let page: Page = page.parse().map_err(|e| JsValue::from_str(&format!("{e}")))?;
        let config = PlaybackConfig::default();

        Ok(Self {
            navigator: Navigator::new(page, &config),
            resolver: TrackResolver::new(&config),
            collections: Vec::new(),
            on_state_change: None,
            on_track_change: None,
            on_error: None,
        })
    }

    /// Replace the collections tracks are resolved against
    #[wasm_bindgen(js_name = setCollections)]
    pub fn set_collections(&mut self, collections: JsValue) -> Result<(), JsValue> {
        self.collections = serde_wasm_bindgen::from_value(collections)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse collections: {e}")))?;
        Ok(())
    }

    // ===== Playback Control =====

    /// Flip play/pause
    #[wasm_bindgen(js_name = togglePlayPause)]
    pub fn toggle_play_pause(&mut self) {
        self.navigator.session_mut().toggle_play_pause();
        self.emit_state_change();
    }

    /// Play the item with `id` from the current collections
    #[wasm_bindgen(js_name = playTrack)]
    pub fn play_track(&mut self, id: &str) -> Result<(), JsValue> {
        let result =
            self.navigator
                .session_mut()
                .play_by_id(id, &mut self.resolver, &self.collections);
        result.map_err(|e| self.handle_error(e))?;
        self.emit_track_change();
        self.emit_state_change();
        Ok(())
    }

    /// Play the first song of the current collections
    #[wasm_bindgen(js_name = playAll)]
    pub fn play_all(&mut self) -> Result<(), JsValue> {
        let id = crate::resolver::first_track_id(&self.collections)
            .map(str::to_string)
            .ok_or_else(|| self.handle_error(PlaybackError::NothingToPlay))?;
        self.play_track(&id)
    }

    /// Skip forward (request only)
    #[wasm_bindgen(js_name = skipNext)]
    pub fn skip_next(&mut self) {
        self.navigator.session_mut().skip_next();
    }

    /// Skip back (request only)
    #[wasm_bindgen(js_name = skipPrevious)]
    pub fn skip_previous(&mut self) {
        self.navigator.session_mut().skip_previous();
    }

    // ===== Seeking & Volume =====

    /// Seek to a percentage (clamped to 0-100)
    pub fn seek(&mut self, percent: f32) {
        self.navigator.session_mut().seek(percent);
        self.emit_state_change();
    }

    /// Set volume; out-of-range numbers are clamped to 0-100
    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&mut self, level: f64) {
        self.navigator.session_mut().set_volume_percent(level as f32);
        self.emit_state_change();
    }

    /// Toggle mute
    #[wasm_bindgen(js_name = toggleMute)]
    pub fn toggle_mute(&mut self) {
        self.navigator.session_mut().toggle_mute();
        self.emit_state_change();
    }

    // ===== Navigation =====

    /// Switch pages; returns whether the session was reset
    pub fn navigate(&mut self, page: &str) -> Result<bool, JsValue> {
        let page: Page = page
            .parse()
            .map_err(|e: ascendion_core::CoreError| self.handle_error(e.into()))?;
        let reset = self.navigator.navigate(page);
        if reset {
            self.emit_track_change();
        }
        self.emit_state_change();
        Ok(reset)
    }

    // ===== State Queries =====

    /// Full playback bar state as a plain JS object
    pub fn snapshot(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.navigator.session().snapshot()).unwrap_or(JsValue::NULL)
    }

    /// Track on the bar, if any
    #[wasm_bindgen(js_name = currentTrack)]
    pub fn current_track(&self) -> Option<WasmTrack> {
        self.navigator.session().current_track().map(WasmTrack::from)
    }

    /// Whether the row for `id` should show as playing
    #[wasm_bindgen(js_name = isTrackPlaying)]
    pub fn is_track_playing(&self, id: &str) -> bool {
        self.navigator.session().is_track_playing(id)
    }

    /// Drain queued events as a JS array
    #[wasm_bindgen(js_name = drainEvents)]
    pub fn drain_events(&mut self) -> JsValue {
        let events = self.navigator.session_mut().drain_events();
        serde_wasm_bindgen::to_value(&events).unwrap_or(JsValue::NULL)
    }

    // ===== Event Listeners =====

    /// Register state change callback
    #[wasm_bindgen(js_name = onStateChange)]
    pub fn on_state_change(&mut self, callback: Function) {
        self.on_state_change = Some(callback);
    }

    /// Register track change callback
    #[wasm_bindgen(js_name = onTrackChange)]
    pub fn on_track_change(&mut self, callback: Function) {
        self.on_track_change = Some(callback);
    }

    /// Register error callback
    #[wasm_bindgen(js_name = onError)]
    pub fn on_error(&mut self, callback: Function) {
        self.on_error = Some(callback);
    }

    // ===== Internal Event Emitters =====

    fn emit_state_change(&self) {
        if let Some(ref cb) = self.on_state_change {
            cb.call1(&JsValue::NULL, &self.snapshot()).ok();
        }
    }

    fn emit_track_change(&self) {
        if let Some(ref cb) = self.on_track_change {
            match self.current_track() {
                Some(track) => {
                    if let Ok(js_track) = serde_wasm_bindgen::to_value(&track) {
                        cb.call1(&JsValue::NULL, &js_track).ok();
                    }
                }
                None => {
                    cb.call1(&JsValue::NULL, &JsValue::NULL).ok();
                }
            }
        }
    }

    fn handle_error(&self, error: PlaybackError) -> JsValue {
        let err_msg = error.to_string();

        if let Some(ref cb) = self.on_error {
            cb.call1(&JsValue::NULL, &JsValue::from_str(&err_msg)).ok();
        }

        JsValue::from_str(&err_msg)
    }
}
