//! DOM-free halves of the content script: element scanning and live input
//! warnings. The shell feeds in text and applies the returned actions.

mod content_scanner;
mod element;
mod input_monitor;

pub use content_scanner::ContentScanner;
pub use element::{ElementAction, ElementText, PageContext, SkipReason};
pub use input_monitor::{InputMonitor, InputWarning};
