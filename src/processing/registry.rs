//! Registry validation pipeline.
//!
//! Runs name uniqueness, CIDR parsing and overlap validation in order,
//! rejecting the whole request on the first failure.

use super::{check_unique_names, validate_no_overlap};
use crate::error::RegistryError;
use crate::models::{NetworkDetail, NetworkEntry, Range, Registry};

/// Parse every entry into a [`Range`], stopping at the first malformed CIDR.
pub fn parse_ranges(entries: &[NetworkEntry]) -> Result<Vec<Range>, RegistryError> {
    entries
        .iter()
        .map(|e| {
            Range::new(&e.name, &e.cidr, &e.description).map_err(|source| {
                log::debug!("Rejecting network '{}': {}", e.name, source);
                RegistryError::Parse {
                    name: e.name.clone(),
                    source,
                }
            })
        })
        .collect()
}

/// Validate a list of declared networks and derive their metadata.
///
/// # Arguments
/// * `entries` - Declared networks, in declaration order
///
/// # Returns
/// * `Ok(Registry)` - Metadata keyed by network name
/// * `Err(RegistryError)` - Duplicate names, a bad CIDR, or the first overlap
pub fn build_registry(entries: &[NetworkEntry]) -> Result<Registry, RegistryError> {
    log::info!("Validating {} network(s)", entries.len());

    check_unique_names(entries)?;
    let ranges = parse_ranges(entries)?;
    validate_no_overlap(&ranges)?;

    let registry: Registry = ranges
        .iter()
        .map(|r| (r.name().to_string(), NetworkDetail::from(r)))
        .collect();

    log::info!("Registry valid: {} network(s), no overlaps", registry.len());
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_registry_disjoint() {
        let entries = vec![
            NetworkEntry::new("vpc-main", "10.0.0.0/16", "Main VPC"),
            NetworkEntry::new("vpc-secondary", "10.1.0.0/16", "Secondary VPC"),
        ];
        let registry = build_registry(&entries).expect("registry should be valid");
        assert_eq!(registry.len(), 2);

        let main = &registry["vpc-main"];
        assert_eq!(main.cidr, "10.0.0.0/16");
        assert_eq!(main.description, "Main VPC");
        assert_eq!(main.first_ip, "10.0.0.0");
        assert_eq!(main.last_ip, "10.0.255.255");
        assert_eq!(main.prefix, "10.0.0.0/16");
        assert_eq!(main.length, 16);
        assert_eq!(main.base_ip, "10.0.0.0");
        assert_eq!(main.count.to_string(), "65536");

        assert_eq!(registry["vpc-secondary"].last_ip, "10.1.255.255");
    }

    #[test]
    fn test_build_registry_single_host() {
        let registry =
            build_registry(&[NetworkEntry::new("host", "192.168.1.1/32", "")]).unwrap();
        let host = &registry["host"];
        assert_eq!(host.count.to_string(), "1");
        assert_eq!(host.first_ip, "192.168.1.1");
        assert_eq!(host.last_ip, "192.168.1.1");
    }

    #[test]
    fn test_build_registry_overlap() {
        let entries = vec![
            NetworkEntry::new("network-a", "10.0.0.0/16", "Network A"),
            NetworkEntry::new("network-b", "10.0.128.0/17", "Network B (overlaps with A)"),
        ];
        let err = build_registry(&entries).unwrap_err();
        assert!(matches!(err, RegistryError::Overlap(_)));
        assert_eq!(
            err.to_string(),
            "CIDR blocks for networks 'network-a' (10.0.0.0/16) and 'network-b' (10.0.128.0/17) overlap"
        );
    }

    #[test]
    fn test_parse_failure_before_overlap() {
        // The overlapping pair comes first but parsing rejects the batch.
        let entries = vec![
            NetworkEntry::new("a", "10.0.0.0/16", ""),
            NetworkEntry::new("b", "10.0.0.0/17", ""),
            NetworkEntry::new("bad", "not-a-cidr", ""),
        ];
        match build_registry(&entries).unwrap_err() {
            RegistryError::Parse { name, source } => {
                assert_eq!(name, "bad");
                assert_eq!(source.cidr, "not-a-cidr");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_message() {
        let err = parse_ranges(&[NetworkEntry::new("bad", "not-a-cidr", "")]).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Could not parse CIDR for network 'bad': invalid CIDR \"not-a-cidr\""));
    }

    #[test]
    fn test_duplicate_names_before_parse() {
        let entries = vec![
            NetworkEntry::new("dup", "not-a-cidr", ""),
            NetworkEntry::new("dup", "10.0.0.0/8", ""),
        ];
        assert!(matches!(
            build_registry(&entries),
            Err(RegistryError::DuplicateNames(_))
        ));
    }

    #[test]
    fn test_empty_registry() {
        assert!(build_registry(&[]).unwrap().is_empty());
    }
}
