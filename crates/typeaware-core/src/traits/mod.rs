mod detector;
mod kv_store;

pub use detector::IDetector;
pub use kv_store::IKeyValueStore;
