//! WASM bindings for ascendion-playback
//!
//! This module provides WebAssembly bindings for the playback session,
//! so the web front-end can drive it from JavaScript.

#[cfg(feature = "wasm")]
pub mod types;

#[cfg(feature = "wasm")]
pub mod session;

#[cfg(feature = "wasm")]
pub use session::WasmPlaybackSession;

#[cfg(feature = "wasm")]
pub use types::WasmTrack;
