//! The two preset intervals and the triggers bound to them

use std::fmt;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WORK_SECONDS: u64 = 25 * 60;
pub const DEFAULT_BREAK_SECONDS: u64 = 5 * 60;

/// A user action that starts one of the preset intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    Work,
    Break,
}

impl Trigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trigger::Work => "work",
            Trigger::Break => "break",
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durations, in seconds, bound to each trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presets {
    pub work_seconds: u64,
    pub break_seconds: u64,
}

impl Presets {
    pub fn new(work_seconds: u64, break_seconds: u64) -> Self {
        Self { work_seconds, break_seconds }
    }

    pub fn duration_for(&self, trigger: Trigger) -> u64 {
        match trigger {
            Trigger::Work => self.work_seconds,
            Trigger::Break => self.break_seconds,
        }
    }
}

impl Default for Presets {
    fn default() -> Self {
        Self::new(DEFAULT_WORK_SECONDS, DEFAULT_BREAK_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_presets() {
        let presets = Presets::default();
        assert_eq!(presets.duration_for(Trigger::Work), 1500);
        assert_eq!(presets.duration_for(Trigger::Break), 300);
    }

    #[test]
    fn overridden_presets() {
        let presets = Presets::new(50 * 60, 10 * 60);
        assert_eq!(presets.duration_for(Trigger::Work), 3000);
        assert_eq!(presets.duration_for(Trigger::Break), 600);
    }

    #[test]
    fn trigger_names() {
        assert_eq!(Trigger::Work.to_string(), "work");
        assert_eq!(serde_json::to_string(&Trigger::Break).unwrap(), "\"break\"");
    }
}
