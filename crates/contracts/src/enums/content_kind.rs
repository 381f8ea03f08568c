use serde::{Deserialize, Serialize};

/// Media type of a signage content asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    Image,
    Video,
}

impl ContentKind {
    pub fn code(&self) -> &'static str {
        match self {
            ContentKind::Image => "Image",
            ContentKind::Video => "Video",
        }
    }

    pub fn all() -> Vec<ContentKind> {
        vec![ContentKind::Image, ContentKind::Video]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Image" => Some(ContentKind::Image),
            "Video" => Some(ContentKind::Video),
            _ => None,
        }
    }
}

impl ToString for ContentKind {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
