//! Registry validation logic.
//!
//! This module contains the decision logic over declared networks:
//! - [`names`] - Network name uniqueness
//! - [`overlap`] - Pairwise overlap detection
//! - [`registry`] - The full validate-and-derive pipeline

mod names;
mod overlap;
mod registry;

// Re-export public functions
pub use names::check_unique_names;
pub use overlap::{find_overlaps, log_overlaps, validate_no_overlap, OverlapConflict};
pub use registry::{build_registry, parse_ranges};
