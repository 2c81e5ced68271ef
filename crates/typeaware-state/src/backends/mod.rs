mod json_file;
mod memory;

pub use json_file::JsonFileKvStore;
pub use memory::InMemoryKvStore;
