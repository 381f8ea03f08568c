use serde::{Deserialize, Serialize};

/// Connectivity state of a signage screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenStatus {
    Online,
    Offline,
    Syncing,
}

impl ScreenStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ScreenStatus::Online => "Online",
            ScreenStatus::Offline => "Offline",
            ScreenStatus::Syncing => "Syncing",
        }
    }

    pub fn all() -> Vec<ScreenStatus> {
        vec![
            ScreenStatus::Online,
            ScreenStatus::Offline,
            ScreenStatus::Syncing,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Online" => Some(ScreenStatus::Online),
            "Offline" => Some(ScreenStatus::Offline),
            "Syncing" => Some(ScreenStatus::Syncing),
            _ => None,
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            ScreenStatus::Online => "success",
            ScreenStatus::Offline => "error",
            ScreenStatus::Syncing => "warning",
        }
    }
}

impl ToString for ScreenStatus {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
