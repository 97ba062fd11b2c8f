//! Duration configuration data model.
//!
//! The persisted blob is a JSON object with camelCase keys
//! (`{"work": 25, "shortBreak": 5, "longBreak": 15}`). Loading is lenient:
//! a missing or zero field falls back to that field's default without
//! touching the others.

use crate::pomodoro::Mode;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WORK_MINUTES: u16 = 25;
pub const DEFAULT_SHORT_BREAK_MINUTES: u16 = 5;
pub const DEFAULT_LONG_BREAK_MINUTES: u16 = 15;

/// Allowed range and adjustment step for one mode's duration, in minutes.
#[derive(Debug, Clone, Copy)]
pub struct DurationBounds {
    pub min: u16,
    pub max: u16,
    pub step: u16,
}

impl DurationBounds {
    pub const fn of(mode: Mode) -> Self {
        match mode {
            Mode::Work => Self { min: 5, max: 60, step: 5 },
            Mode::ShortBreak => Self { min: 3, max: 15, step: 1 },
            Mode::LongBreak => Self { min: 10, max: 30, step: 5 },
        }
    }

    pub fn clamp(self, minutes: u16) -> u16 {
        minutes.clamp(self.min, self.max)
    }
}

/// Minutes per mode. One field per mode rather than a map: the key set is
/// closed and known at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationConfig {
    pub work: u16,
    pub short_break: u16,
    pub long_break: u16,
}

impl Default for DurationConfig {
    fn default() -> Self {
        Self {
            work: DEFAULT_WORK_MINUTES,
            short_break: DEFAULT_SHORT_BREAK_MINUTES,
            long_break: DEFAULT_LONG_BREAK_MINUTES,
        }
    }
}

impl DurationConfig {
    pub fn get(&self, mode: Mode) -> u16 {
        match mode {
            Mode::Work => self.work,
            Mode::ShortBreak => self.short_break,
            Mode::LongBreak => self.long_break,
        }
    }

    /// Store a duration, clamped to the mode's bounds. Returns the value
    /// actually stored.
    pub fn set(&mut self, mode: Mode, minutes: u16) -> u16 {
        let applied = DurationBounds::of(mode).clamp(minutes);
        match mode {
            Mode::Work => self.work = applied,
            Mode::ShortBreak => self.short_break = applied,
            Mode::LongBreak => self.long_break = applied,
        }
        applied
    }
}

/// Deserialization shape for the persisted blob. Fields default to zero when
/// absent so that [`merged`](PartialDurations::merged) can treat missing and
/// zero identically.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialDurations {
    pub work: u16,
    pub short_break: u16,
    pub long_break: u16,
}

impl PartialDurations {
    /// Field-wise merge with the defaults: zero (missing, or stored as zero)
    /// yields the default for that field only.
    pub fn merged(self) -> DurationConfig {
        fn or_default(value: u16, default: u16) -> u16 {
            if value == 0 {
                default
            } else {
                value
            }
        }
        DurationConfig {
            work: or_default(self.work, DEFAULT_WORK_MINUTES),
            short_break: or_default(self.short_break, DEFAULT_SHORT_BREAK_MINUTES),
            long_break: or_default(self.long_break, DEFAULT_LONG_BREAK_MINUTES),
        }
    }
}
