//! File-driven runs of the playback model
//!
//! Loads a catalog and a gesture script from JSON, feeds the gestures to a
//! [`Navigator`] and reports what the playback bar ends up showing.

use crate::error::{CliError, Result};
use ascendion_core::{Catalog, Track};
use ascendion_playback::{
    Gesture, Navigator, Page, PlaybackConfig, PlaybackEvent, PlaybackSnapshot, TrackResolver,
};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

/// A gesture that could not be applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepError {
    /// Zero-based position in the script
    pub step: usize,
    pub gesture: Gesture,
    pub error: String,
}

/// Outcome of a replay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub page: Page,
    pub snapshot: PlaybackSnapshot,
    pub events: Vec<PlaybackEvent>,
    pub errors: Vec<StepError>,
}

impl ReplayReport {
    /// Whether every gesture applied cleanly
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Read a catalog file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let json = read(path)?;
    let catalog = Catalog::from_json(&json).map_err(CliError::Catalog)?;
    debug!(path = %path.display(), items = catalog.item_count(), "Loaded catalog");
    Ok(catalog)
}

/// Read a gesture script (a JSON array of gestures)
pub fn load_script(path: &Path) -> Result<Vec<Gesture>> {
    let json = read(path)?;
    let gestures: Vec<Gesture> = serde_json::from_str(&json).map_err(CliError::Script)?;
    debug!(path = %path.display(), steps = gestures.len(), "Loaded gesture script");
    Ok(gestures)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve one id against the catalog
pub fn resolve(id: &str, catalog: &Catalog, config: &PlaybackConfig) -> Result<Track> {
    let mut resolver = TrackResolver::new(config);
    Ok(resolver.resolve(id, &catalog.collections)?)
}

/// Apply `gestures` in order, starting on `page`
///
/// Failed gestures are recorded and the run carries on. Events are drained
/// after every gesture, so the report holds all of them.
pub fn replay(
    catalog: &Catalog,
    gestures: &[Gesture],
    page: Page,
    resolver: &mut TrackResolver,
    config: &PlaybackConfig,
) -> ReplayReport {
    let mut navigator = Navigator::new(page, config);
    let mut errors = Vec::new();
    let mut events = Vec::new();

    for (step, gesture) in gestures.iter().enumerate() {
        if let Err(e) = navigator.apply(gesture, resolver, &catalog.collections) {
            warn!(step, error = %e, "Gesture failed");
            errors.push(StepError {
                step,
                gesture: gesture.clone(),
                error: e.to_string(),
            });
        }
        events.extend(navigator.session_mut().drain_events());
    }

    info!(
        steps = gestures.len(),
        failed = errors.len(),
        events = events.len(),
        page = %navigator.page(),
        "Replay finished"
    );

    ReplayReport {
        page: navigator.page(),
        snapshot: navigator.session().snapshot(),
        events,
        errors,
    }
}
