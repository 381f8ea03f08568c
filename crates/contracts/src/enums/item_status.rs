use serde::{Deserialize, Serialize};

/// Condition of an inventory item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    Perfect,
    Defect,
}

impl ItemStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ItemStatus::Perfect => "Perfect",
            ItemStatus::Defect => "Defect",
        }
    }

    pub fn all() -> Vec<ItemStatus> {
        vec![ItemStatus::Perfect, ItemStatus::Defect]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Perfect" => Some(ItemStatus::Perfect),
            "Defect" => Some(ItemStatus::Defect),
            _ => None,
        }
    }

    /// Badge variant for the UI ("success" / "error")
    pub fn badge_variant(&self) -> &'static str {
        match self {
            ItemStatus::Perfect => "success",
            ItemStatus::Defect => "error",
        }
    }
}

impl ToString for ItemStatus {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
