use serde::{Deserialize, Serialize};

/// Whether a schedule entry currently drives playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleState {
    Active,
    Paused,
}

impl ScheduleState {
    pub fn code(&self) -> &'static str {
        match self {
            ScheduleState::Active => "Active",
            ScheduleState::Paused => "Paused",
        }
    }

    pub fn all() -> Vec<ScheduleState> {
        vec![ScheduleState::Active, ScheduleState::Paused]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Active" => Some(ScheduleState::Active),
            "Paused" => Some(ScheduleState::Paused),
            _ => None,
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            ScheduleState::Active => "success",
            ScheduleState::Paused => "neutral",
        }
    }
}

impl ToString for ScheduleState {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
