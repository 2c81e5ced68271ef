use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::errors::TypeAwareError;

/// A named class of undesirable content.
///
/// Ordering follows declaration order, which is also the order categories
/// are reported in and the order suggestions are drawn from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Category {
    Harassment,
    Hate,
    Spam,
    Profanity,
    Threats,
    Aggressive,
    Negative,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Harassment,
        Category::Hate,
        Category::Spam,
        Category::Profanity,
        Category::Threats,
        Category::Aggressive,
        Category::Negative,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Harassment => "harassment",
            Category::Hate => "hate",
            Category::Spam => "spam",
            Category::Profanity => "profanity",
            Category::Threats => "threats",
            Category::Aggressive => "aggressive",
            Category::Negative => "negative",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TypeAwareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == needle)
            .ok_or(TypeAwareError::UnknownCategory {
                name: s.to_string(),
            })
    }
}
