mod category;
mod confidence;
mod platform;
mod scan_context;
mod severity;
mod verdict;

pub use category::Category;
pub use confidence::Confidence;
pub use platform::Platform;
pub use scan_context::{ScanContext, ScanMode};
pub use severity::Severity;
pub use verdict::Verdict;
