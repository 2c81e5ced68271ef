use serde::{Deserialize, Serialize};
use ts_rs::TS;
use typeaware_core::{Category, Severity, Verdict};

/// Where the content script is running.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PageContext {
    pub hostname: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl PageContext {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Text content of one page element, keyed by a shell-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ElementText {
    pub id: String,
    pub text: String,
}

impl ElementText {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum SkipReason {
    Disabled,
    AlreadyProcessed,
    TooShort,
}

/// What the shell should do with an element.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum ElementAction {
    /// Not scanned.
    Skip { id: String, reason: SkipReason },
    /// Scanned and clean.
    Pass { id: String },
    /// Blur the element and overlay the label and suggestions.
    Flag {
        id: String,
        label: String,
        categories: Vec<Category>,
        severity: Severity,
        confidence: f64,
        matches: Vec<String>,
        suggestions: Vec<String>,
    },
}

impl ElementAction {
    pub(crate) fn from_verdict(id: &str, verdict: &Verdict) -> Self {
        if !verdict.is_abusive {
            return ElementAction::Pass { id: id.to_string() };
        }
        ElementAction::Flag {
            id: id.to_string(),
            label: warning_label(verdict.primary_category()),
            categories: verdict.categories.iter().copied().collect(),
            severity: verdict.severity,
            confidence: verdict.confidence.value(),
            matches: verdict.matches.clone(),
            suggestions: verdict.suggestions.clone(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ElementAction::Skip { id, .. }
            | ElementAction::Pass { id }
            | ElementAction::Flag { id, .. } => id,
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, ElementAction::Flag { .. })
    }
}

/// Overlay banner text for a flagged element.
pub(crate) fn warning_label(primary: Option<Category>) -> String {
    let kind = primary.map_or("inappropriate", Category::as_str);
    format!("Potentially {kind} content detected")
}
