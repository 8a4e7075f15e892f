//! Playback session - the state behind the playback bar
//!
//! Holds the current track, play/pause flag, progress and volume, and is the
//! only thing allowed to change them. Every setter enforces its own range so
//! callers can forward raw slider values.

use crate::{
    error::Result,
    events::{EventQueue, PlaybackEvent},
    resolver::TrackResolver,
    types::{PlaybackConfig, PlaybackSnapshot, SkipDirection},
    volume::Volume,
};
use ascendion_core::{
    duration::{format_duration, format_time},
    types::Collection,
    Track,
};
use tracing::{debug, info};

/// Playback state holder
///
/// There is no audio engine behind this: progress only moves through
/// [`seek`](Self::seek) or when a new track starts.
#[derive(Debug, Clone)]
pub struct PlaybackSession {
    // State
    current_track: Option<Track>,
    is_playing: bool,
    progress: f32,

    // Settings
    volume: Volume,

    // Event queue for UI synchronization
    pending_events: EventQueue,
}

impl PlaybackSession {
    /// Create an empty session (nothing on the bar)
    pub fn new(config: &PlaybackConfig) -> Self {
        Self {
            current_track: None,
            is_playing: false,
            progress: 0.0,
            volume: Volume::new(config.volume),
            pending_events: EventQueue::default(),
        }
    }

    /// Create a session that starts with a track already on the bar
    ///
    /// Used when a page mounts with its default track. No events are queued.
    pub fn with_state(track: Option<Track>, is_playing: bool, progress: f32, volume: u8) -> Self {
        Self {
            current_track: track,
            is_playing,
            progress: clamp_percent(progress),
            volume: Volume::new(volume),
            pending_events: EventQueue::default(),
        }
    }

    // ===== Playback Control =====

    /// Flip between playing and paused
    ///
    /// Allowed with no track loaded; the bar ignores the flag then.
    pub fn toggle_play_pause(&mut self) {
        self.is_playing = !self.is_playing;
        debug!(is_playing = self.is_playing, "Toggled play/pause");
        self.pending_events.push(PlaybackEvent::StateChanged {
            is_playing: self.is_playing,
        });
    }

    /// Resume playback (no-op if already playing)
    pub fn play(&mut self) {
        if !self.is_playing {
            self.toggle_play_pause();
        }
    }

    /// Pause playback (no-op if already paused)
    pub fn pause(&mut self) {
        if self.is_playing {
            self.toggle_play_pause();
        }
    }

    /// Put `track` on the bar and start it from the beginning
    pub fn play_track(&mut self, track: Track) {
        let previous_track_id = self.current_track.as_ref().map(|t| t.id.clone());
        info!(track_id = %track.id, title = %track.title, "Playing track");

        self.pending_events.push(PlaybackEvent::TrackChanged {
            track_id: track.id.clone(),
            previous_track_id,
        });

        self.current_track = Some(track);
        self.progress = 0.0;

        if !self.is_playing {
            self.is_playing = true;
            self.pending_events
                .push(PlaybackEvent::StateChanged { is_playing: true });
        }
    }

    /// Resolve `id` against `collections` and play it
    ///
    /// Returns the track now on the bar. On error the session is left
    /// exactly as it was.
    pub fn play_by_id(
        &mut self,
        id: &str,
        resolver: &mut TrackResolver,
        collections: &[Collection],
    ) -> Result<Track> {
        let track = resolver.resolve(id, collections)?;
        self.play_track(track.clone());
        Ok(track)
    }

    /// Skip forward. There is no queue, so this only records the request.
    pub fn skip_next(&mut self) {
        self.request_skip(SkipDirection::Next);
    }

    /// Skip back. There is no queue, so this only records the request.
    pub fn skip_previous(&mut self) {
        self.request_skip(SkipDirection::Previous);
    }

    fn request_skip(&mut self, direction: SkipDirection) {
        debug!(?direction, "Skip requested, no queue to act on");
        self.pending_events
            .push(PlaybackEvent::SkipRequested { direction });
    }

    // ===== Seek =====

    /// Move progress to `percent` (clamped to 0-100, NaN counts as 0)
    pub fn seek(&mut self, percent: f32) {
        let progress = clamp_percent(percent);
        debug!(requested = percent, progress, "Seek");

        self.progress = progress;
        self.pending_events
            .push(PlaybackEvent::ProgressChanged { progress });
    }

    // ===== Volume =====

    /// Set volume (clamped to 0-100)
    pub fn set_volume(&mut self, level: u8) {
        self.volume.set_level(level);
        self.emit_volume_changed();
    }

    /// Set volume from a raw slider value (clamped to 0-100, rounded)
    pub fn set_volume_percent(&mut self, percent: f32) {
        self.set_volume(percent_to_level(percent));
    }

    /// Mute audio
    pub fn mute(&mut self) {
        self.volume.mute();
        self.emit_volume_changed();
    }

    /// Unmute audio
    pub fn unmute(&mut self) {
        self.volume.unmute();
        self.emit_volume_changed();
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.emit_volume_changed();
    }

    fn emit_volume_changed(&mut self) {
        let level = self.volume.level();
        let is_muted = self.volume.is_muted();
        debug!(level, is_muted, "Volume changed");
        self.pending_events
            .push(PlaybackEvent::VolumeChanged { level, is_muted });
    }

    // ===== State Queries =====

    /// Get current track
    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    /// Whether playback is running
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Progress through the current track (0-100)
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Current volume level (0-100)
    pub fn volume(&self) -> u8 {
        self.volume.level()
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    /// Elapsed seconds derived from progress and track length
    pub fn elapsed_secs(&self) -> f64 {
        self.current_track.as_ref().map_or(0.0, |track| {
            f64::from(self.progress) / 100.0 * f64::from(track.duration_secs)
        })
    }

    /// Whether the row for `track_id` should show the "now playing" state
    pub fn is_track_playing(&self, track_id: &str) -> bool {
        self.is_playing
            && self
                .current_track
                .as_ref()
                .is_some_and(|track| track.id == track_id)
    }

    /// Everything the playback bar renders
    pub fn snapshot(&self) -> PlaybackSnapshot {
        let elapsed_secs = self.elapsed_secs();

        PlaybackSnapshot {
            current_track: self.current_track.clone(),
            is_playing: self.is_playing,
            progress: self.progress,
            volume: self.volume.level(),
            is_muted: self.volume.is_muted(),
            elapsed_secs,
            elapsed: format_time(elapsed_secs),
            total: format_duration(
                self.current_track
                    .as_ref()
                    .map_or(0, |track| track.duration_secs),
            ),
        }
    }

    // ===== Events =====

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.pending_events.drain()
    }

    pub(crate) fn push_event(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }

    /// Number of undrained events
    pub fn pending_event_count(&self) -> usize {
        self.pending_events.len()
    }
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new(&PlaybackConfig::default())
    }
}

/// Clamp a percentage into 0-100; NaN becomes 0
pub fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Clamp a percentage and round it to a whole volume level
pub fn percent_to_level(value: f32) -> u8 {
    clamp_percent(value).round() as u8
}
