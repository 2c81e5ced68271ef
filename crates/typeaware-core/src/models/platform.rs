use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::errors::TypeAwareError;

/// Site a piece of text was observed on. Only affects which extra
/// platform rules run; base rules always apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Platform {
    Twitter,
    YouTube,
    Reddit,
    Facebook,
    #[default]
    Generic,
}

impl Platform {
    /// Map a page hostname to a platform. Unknown hosts are generic.
    pub fn from_hostname(hostname: &str) -> Self {
        let host = hostname.trim().trim_end_matches('.').to_ascii_lowercase();
        let on = |domain: &str| {
            host == domain
                || host
                    .strip_suffix(domain)
                    .is_some_and(|prefix| prefix.ends_with('.'))
        };

        if on("twitter.com") || on("x.com") {
            Platform::Twitter
        } else if on("youtube.com") {
            Platform::YouTube
        } else if on("reddit.com") {
            Platform::Reddit
        } else if on("facebook.com") {
            Platform::Facebook
        } else {
            Platform::Generic
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::YouTube => "youtube",
            Platform::Reddit => "reddit",
            Platform::Facebook => "facebook",
            Platform::Generic => "generic",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = TypeAwareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twitter" | "x" | "twitter.com" | "x.com" => Ok(Platform::Twitter),
            "youtube" | "youtube.com" => Ok(Platform::YouTube),
            "reddit" | "reddit.com" => Ok(Platform::Reddit),
            "facebook" | "facebook.com" => Ok(Platform::Facebook),
            "generic" => Ok(Platform::Generic),
            _ => Err(TypeAwareError::UnknownPlatform {
                name: s.to_string(),
            }),
        }
    }
}
