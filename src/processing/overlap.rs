//! Overlapping CIDR block detection.
//!
//! Every unordered pair of ranges is compared once, in ascending `(i, j)`
//! order. Two blocks overlap when either one's network contains the
//! other's first or last address.

use crate::error::OverlapError;
use crate::models::Range;
use itertools::Itertools;

/// A pair of ranges sharing at least one address.
#[derive(Debug, Clone, Copy)]
pub struct OverlapConflict<'a> {
    pub first: &'a Range,
    pub second: &'a Range,
}

impl<'a> OverlapConflict<'a> {
    pub fn to_error(&self) -> OverlapError {
        OverlapError {
            first_name: self.first.name().to_string(),
            first_cidr: self.first.cidr().to_string(),
            second_name: self.second.name().to_string(),
            second_cidr: self.second.cidr().to_string(),
        }
    }
}

fn conflicts(ranges: &[Range]) -> impl Iterator<Item = OverlapConflict<'_>> {
    ranges
        .iter()
        .tuple_combinations::<(_, _)>()
        .filter(|(a, b)| a.overlaps(b))
        .map(|(first, second)| OverlapConflict { first, second })
}

/// Check that no two ranges overlap.
///
/// Stops at the first conflicting pair and reports only that one.
///
/// # Arguments
/// * `ranges` - Parsed ranges, in declaration order
///
/// # Returns
/// * `Ok(())` - No pair overlaps
/// * `Err(OverlapError)` - The first overlapping pair in scan order
pub fn validate_no_overlap(ranges: &[Range]) -> Result<(), OverlapError> {
    match conflicts(ranges).next() {
        Some(conflict) => {
            log::debug!(
                "Overlap found between {} and {}",
                conflict.first,
                conflict.second
            );
            Err(conflict.to_error())
        }
        None => {
            log::debug!("No overlaps among {} ranges", ranges.len());
            Ok(())
        }
    }
}

/// Find every overlapping pair, in the same order [`validate_no_overlap`] scans.
pub fn find_overlaps(ranges: &[Range]) -> Vec<OverlapConflict<'_>> {
    conflicts(ranges).collect()
}

/// Log overlapping range conflicts as warnings.
pub fn log_overlaps(conflicts: &[OverlapConflict<'_>]) {
    if conflicts.is_empty() {
        log::info!("No overlapping CIDR blocks found.");
        return;
    }

    log::warn!("Found {} overlapping CIDR block pair(s):", conflicts.len());
    for conflict in conflicts {
        log::warn!(
            "  - '{}' ({}, {}..{}) overlaps '{}' ({}, {}..{})",
            conflict.first.name(),
            conflict.first.cidr(),
            conflict.first.first_ip(),
            conflict.first.last_ip(),
            conflict.second.name(),
            conflict.second.cidr(),
            conflict.second.first_ip(),
            conflict.second.last_ip(),
        );
    }
}
