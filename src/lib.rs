//! Validation of named IPv4/IPv6 CIDR blocks for mutual exclusivity.
//!
//! Entries are checked for unique names, parsed into canonical
//! [`models::Range`] values and compared pairwise for overlap. A valid
//! registry maps each name to its derived [`models::NetworkDetail`].

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{OverlapError, ParseError, ParseErrorKind, RegistryError};
pub use models::{NetworkDetail, NetworkEntry, Range, Registry};
pub use processing::{build_registry, check_unique_names, validate_no_overlap};

/// Read a registry file and validate it.
///
/// # Arguments
/// * `path` - Registry JSON file. If None, uses [`config::DEFAULT_REGISTRY_FILE`].
pub fn load_registry(path: Option<&str>) -> Result<Registry, RegistryError> {
    let path = path.unwrap_or(config::DEFAULT_REGISTRY_FILE);
    let file = input::read_registry_file(path)?;
    build_registry(&file.networks)
}

/// Every overlapping pair in a registry file, as error values.
///
/// Parse and name errors are returned as-is, since overlaps cannot be
/// computed over a batch with bad entries.
pub fn overlap_report(path: &str) -> Result<Vec<OverlapError>, RegistryError> {
    let file = input::read_registry_file(path)?;
    check_unique_names(&file.networks)?;
    let ranges = processing::parse_ranges(&file.networks)?;
    let conflicts = processing::find_overlaps(&ranges);
    processing::log_overlaps(&conflicts);
    Ok(conflicts.iter().map(|c| c.to_error()).collect())
}
