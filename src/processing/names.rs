//! Network name uniqueness check.

use crate::error::{NameList, RegistryError};
use crate::models::NetworkEntry;
use std::collections::HashMap;

/// Return an error listing every name declared more than once.
///
/// Names are reported in the order they were first declared.
pub fn check_unique_names(entries: &[NetworkEntry]) -> Result<(), RegistryError> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for entry in entries {
        let count = counts.entry(entry.name.as_str()).or_insert(0);
        if *count == 0 {
            order.push(entry.name.as_str());
        }
        *count += 1;
    }

    let duplicates: Vec<String> = order
        .into_iter()
        .filter(|name| counts[name] > 1)
        .map(str::to_string)
        .collect();

    if duplicates.is_empty() {
        Ok(())
    } else {
        log::debug!("Duplicate network names: {:?}", duplicates);
        Err(RegistryError::DuplicateNames(NameList(duplicates)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_names_ok() {
        let entries = vec![
            NetworkEntry::new("vpc-main", "10.0.0.0/16", ""),
            NetworkEntry::new("vpc-secondary", "10.1.0.0/16", ""),
        ];
        assert!(check_unique_names(&entries).is_ok());
        assert!(check_unique_names(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_names_first_seen_order() {
        let entries = vec![
            NetworkEntry::new("b", "10.0.0.0/16", ""),
            NetworkEntry::new("a", "10.1.0.0/16", ""),
            NetworkEntry::new("c", "10.2.0.0/16", ""),
            NetworkEntry::new("a", "10.3.0.0/16", ""),
            NetworkEntry::new("b", "10.4.0.0/16", ""),
            NetworkEntry::new("b", "10.5.0.0/16", ""),
        ];
        match check_unique_names(&entries) {
            Err(RegistryError::DuplicateNames(NameList(names))) => {
                assert_eq!(names, vec!["b", "a"]);
            }
            other => panic!("expected duplicate names, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_names_message() {
        let entries = vec![
            NetworkEntry::new("duplicate-name", "10.0.0.0/16", "First instance"),
            NetworkEntry::new("duplicate-name", "10.1.0.0/16", "Second instance"),
        ];
        let err = check_unique_names(&entries).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("The following network names are used more than once: 'duplicate-name'"));
    }
}
