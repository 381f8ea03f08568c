use serde::{Deserialize, Serialize};

/// Operated properties. `All` is the wildcard sentinel: it matches any
/// concrete property on either side of a filter comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Property {
    All,
    Bali,
    Thailand,
    Whitefield,
}

impl Property {
    /// Stable code stored on records and filter controls
    pub fn code(&self) -> &'static str {
        match self {
            Property::All => "all",
            Property::Bali => "zo-house-bali",
            Property::Thailand => "zo-house-thailand",
            Property::Whitefield => "zo-house-whitefield",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Property::All => "All properties",
            Property::Bali => "Zo House Bali",
            Property::Thailand => "Zo House Thailand",
            Property::Whitefield => "Zo House Whitefield",
        }
    }

    pub fn all() -> Vec<Property> {
        vec![
            Property::All,
            Property::Bali,
            Property::Thailand,
            Property::Whitefield,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all" => Some(Property::All),
            "zo-house-bali" => Some(Property::Bali),
            "zo-house-thailand" => Some(Property::Thailand),
            "zo-house-whitefield" => Some(Property::Whitefield),
            _ => None,
        }
    }

    /// `(value, label)` pairs for a select control
    pub fn options() -> Vec<(String, String)> {
        Property::all()
            .into_iter()
            .map(|p| (p.code().to_string(), p.display_name().to_string()))
            .collect()
    }
}

impl ToString for Property {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
