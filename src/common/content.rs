use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Every table of the landing page, parsed once from the bundled file.
///
/// The tables are fixed-size so a file with the wrong number of entries
/// fails to parse instead of rendering a short grid.
pub static CONTENT: Lazy<LandingContent> = Lazy::new(|| {
    let s = include_str!("../../files/landing.toml");
    LandingContent::parse(s).expect("bundled landing.toml must be valid")
});

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LandingContent {
    pub stats: [StatItem; 4],
    pub features: [ContentItem; 4],
    pub test_types: [ContentItem; 4],
    pub benefits: [ContentItem; 4],
}

impl LandingContent {
    pub fn parse(s: &str) -> Option<Self> {
        match toml::from_str(s) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::error!("invalid landing content: {}", e);
                None
            }
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct StatItem {
    pub label: String,
    pub value: String,
}

/// A card on the features, question types or benefits grids.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ContentItem {
    pub icon: Icon,
    /// CSS colour of the icon.
    pub accent: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Serialize, Display, EnumIter, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Icon {
    BookOpen,
    Brain,
    Trophy,
    Users,
    Star,
    CheckCircle,
    Clock,
    BarChart3,
    User,
    PlusCircle,
    Target,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::BookOpen => "📖",
            Self::Brain => "🧠",
            Self::Trophy => "🏆",
            Self::Users => "👥",
            Self::Star => "⭐",
            Self::CheckCircle => "✅",
            Self::Clock => "⏱",
            Self::BarChart3 => "📊",
            Self::User => "👤",
            Self::PlusCircle => "➕",
            Self::Target => "🎯",
        }
    }
}
