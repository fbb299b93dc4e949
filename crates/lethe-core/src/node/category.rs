use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Content category assigned by the external classifier.
/// Drives the initial stability / difficulty lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContentCategory {
    /// Facts about the user themselves. Never a deletion candidate.
    Identity,
    Academic,
    Conversation,
    Work,
    /// Time-bound content: events, deadlines, schedules.
    Temporal,
    Document,
    #[default]
    General,
}

/// Initial decay parameters for a content category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryParams {
    /// Days until recall drops to 90% after the first access.
    pub initial_stability_days: f64,
    /// Base difficulty before complexity / cadence / connectivity adjustments.
    pub base_difficulty: f64,
}

impl ContentCategory {
    pub const COUNT: usize = 7;

    pub const ALL: [ContentCategory; 7] = [
        Self::Identity,
        Self::Academic,
        Self::Conversation,
        Self::Work,
        Self::Temporal,
        Self::Document,
        Self::General,
    ];

    /// Constant lookup table of initial parameters.
    pub const fn initial_params(self) -> CategoryParams {
        let (initial_stability_days, base_difficulty) = match self {
            Self::Identity => (30.0, 0.10),
            Self::Academic => (1.0, 0.40),
            Self::Conversation => (0.5, 0.20),
            Self::Work => (3.0, 0.30),
            Self::Temporal => (1.0, 0.25),
            Self::Document => (7.0, 0.35),
            Self::General => (1.0, 0.30),
        };
        CategoryParams {
            initial_stability_days,
            base_difficulty,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Academic => "academic",
            Self::Conversation => "conversation",
            Self::Work => "work",
            Self::Temporal => "temporal",
            Self::Document => "document",
            Self::General => "general",
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown content category: {s}"))
    }
}
