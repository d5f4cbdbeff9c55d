//! Registry document loading.
//!
//! - [`file`] - Reading a JSON registry file from disk

mod file;

pub use file::{parse_registry_json, read_registry_file};
