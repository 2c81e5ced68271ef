use std::sync::Arc;

use serde::Serialize;
use ts_rs::TS;
use typeaware_core::traits::IDetector;
use typeaware_core::{Category, ScanContext};

/// Change to apply to the warning attached to a text input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum InputWarning {
    /// Text too short to judge; leave any existing warning alone.
    Unchanged,
    Hide,
    Show {
        category: Option<Category>,
        title: String,
        message: String,
    },
}

/// Live check of text being typed into an input.
pub struct InputMonitor<D> {
    detector: Arc<D>,
    context: ScanContext,
    min_length: usize,
}

impl<D: IDetector> InputMonitor<D> {
    pub fn new(detector: Arc<D>, context: ScanContext, min_length: usize) -> Self {
        Self {
            detector,
            context,
            min_length,
        }
    }

    /// Texts of at least `min_length` characters are scanned; shorter ones
    /// leave the warning as it is.
    pub fn check(&self, text: &str) -> InputWarning {
        if text.chars().count() < self.min_length {
            return InputWarning::Unchanged;
        }

        let verdict = self.detector.scan(text, Some(&self.context));
        if !verdict.is_abusive {
            return InputWarning::Hide;
        }

        let category = verdict.primary_category();
        InputWarning::Show {
            category,
            title: format!(
                "Potentially {} content",
                category.map_or("inappropriate", Category::as_str)
            ),
            message: "Consider rephrasing your message".to_string(),
        }
    }
}
