//! Status report printed on request

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{Phase, Trigger};

/// Snapshot of the timer and its configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    pub phase: Phase,
    pub running: bool,
    pub remaining_seconds: u64,
    pub display: String,
    pub work_seconds: u64,
    pub break_seconds: u64,
    pub completed_intervals: u64,
    pub uptime: String,
    pub last_action: Option<Trigger>,
    pub last_action_time: Option<DateTime<Utc>>,
    pub timestamp: DateTime<Utc>,
}

impl StatusReport {
    /// Render the report as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Format an elapsed number of seconds as "1h 2m 3s", dropping empty leading units
pub fn format_uptime(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_formatting() {
        assert_eq!(format_uptime(0), "0s");
        assert_eq!(format_uptime(59), "59s");
        assert_eq!(format_uptime(61), "1m 1s");
        assert_eq!(format_uptime(3600), "1h 0m 0s");
        assert_eq!(format_uptime(3725), "1h 2m 5s");
    }

    #[test]
    fn report_serializes_lowercase_enums() {
        let report = StatusReport {
            phase: Phase::Running,
            running: true,
            remaining_seconds: 90,
            display: "1:30".to_string(),
            work_seconds: 1500,
            break_seconds: 300,
            completed_intervals: 2,
            uptime: "5m 0s".to_string(),
            last_action: Some(Trigger::Work),
            last_action_time: None,
            timestamp: DateTime::<Utc>::UNIX_EPOCH,
        };

        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["phase"], "running");
        assert_eq!(value["last_action"], "work");
        assert_eq!(value["display"], "1:30");
        assert!(value["last_action_time"].is_null());
    }
}
