//! Volume control with mute memory
//!
//! Volume range is 0-100%. Muting drops the level to 0 and remembers the
//! last non-zero level so unmuting can restore it. Dragging the slider to 0
//! counts as muting; dragging it back up counts as unmuting.

/// Level restored when there is no non-zero level to go back to
pub const DEFAULT_RESTORE_LEVEL: u8 = 50;

/// Volume controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    /// Volume level (0-100)
    level: u8,

    /// Mute state
    muted: bool,

    /// Level to restore on unmute (never 0)
    restore_level: u8,
}

impl Volume {
    /// Create new volume controller
    ///
    /// # Arguments
    /// * `level` - Initial volume (0-100, clamped)
    pub fn new(level: u8) -> Self {
        let level = level.min(100);

        Self {
            level,
            muted: false,
            restore_level: non_zero_or_default(level),
        }
    }

    /// Set volume level (0-100)
    ///
    /// Setting 0 mutes, remembering the level being left. Setting anything
    /// above 0 while muted unmutes.
    pub fn set_level(&mut self, level: u8) {
        let level = level.min(100);

        if level == 0 && !self.muted {
            self.restore_level = non_zero_or_default(self.level);
            self.muted = true;
        } else if level > 0 && self.muted {
            self.muted = false;
        }

        if level > 0 {
            self.restore_level = level;
        }

        self.level = level;
    }

    /// Get current volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Level unmute would restore
    pub fn restore_level(&self) -> u8 {
        self.restore_level
    }

    /// Mute audio, remembering the current level
    pub fn mute(&mut self) {
        if self.muted {
            return;
        }

        self.restore_level = non_zero_or_default(self.level);
        self.level = 0;
        self.muted = true;
    }

    /// Unmute audio (restores previous volume)
    pub fn unmute(&mut self) {
        if !self.muted {
            return;
        }

        self.level = self.restore_level;
        self.muted = false;
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        if self.muted {
            self.unmute();
        } else {
            self.mute();
        }
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Whether the speaker icon should show as silent
    pub fn is_silent(&self) -> bool {
        self.muted || self.level == 0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(80) // Default to 80%
    }
}

fn non_zero_or_default(level: u8) -> u8 {
    if level == 0 {
        DEFAULT_RESTORE_LEVEL
    } else {
        level
    }
}
