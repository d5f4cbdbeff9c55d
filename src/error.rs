//! Error types for range parsing and registry validation.

use std::fmt;
use thiserror::Error;

/// The syntax problem found in a CIDR literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("missing '/' between address and prefix length")]
    MissingSeparator,
    #[error("invalid IP address {0:?}")]
    InvalidAddress(String),
    #[error("invalid prefix length {0:?}")]
    InvalidPrefixLength(String),
    #[error("prefix length {length} is longer than {bits} bits")]
    PrefixTooLong { length: u32, bits: u8 },
}

/// A CIDR literal that could not be parsed into a [`crate::models::Range`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid CIDR {cidr:?}: {kind}")]
pub struct ParseError {
    /// The text exactly as supplied.
    pub cidr: String,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(cidr: &str, kind: ParseErrorKind) -> Self {
        ParseError {
            cidr: cidr.to_string(),
            kind,
        }
    }
}

/// Two named ranges that share at least one address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("CIDR blocks for networks '{first_name}' ({first_cidr}) and '{second_name}' ({second_cidr}) overlap")]
pub struct OverlapError {
    pub first_name: String,
    pub first_cidr: String,
    pub second_name: String,
    pub second_cidr: String,
}

/// Names reported by [`RegistryError::DuplicateNames`], rendered as `'a', 'b'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameList(pub Vec<String>);

impl fmt::Display for NameList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted: Vec<String> = self.0.iter().map(|n| format!("'{n}'")).collect();
        write!(f, "{}", quoted.join(", "))
    }
}

/// Any failure that rejects a whole registry request.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("The following network names are used more than once: {0}. Network names must be unique.")]
    DuplicateNames(NameList),

    #[error("Could not parse CIDR for network '{name}': {source}")]
    Parse {
        name: String,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Overlap(#[from] OverlapError),

    #[error("Error reading registry file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing registry file {path}: path={location} error={message}")]
    Json {
        path: String,
        location: String,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_cidr() {
        let err = ParseError::new("not-a-cidr", ParseErrorKind::MissingSeparator);
        assert_eq!(
            err.to_string(),
            "invalid CIDR \"not-a-cidr\": missing '/' between address and prefix length"
        );
    }

    #[test]
    fn test_duplicate_names_message() {
        let err = RegistryError::DuplicateNames(NameList(vec!["a".into(), "b".into()]));
        assert_eq!(
            err.to_string(),
            "The following network names are used more than once: 'a', 'b'. Network names must be unique."
        );
    }

    #[test]
    fn test_overlap_message() {
        let err: RegistryError = OverlapError {
            first_name: "network-a".into(),
            first_cidr: "10.0.0.0/16".into(),
            second_name: "network-b".into(),
            second_cidr: "10.0.128.0/17".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "CIDR blocks for networks 'network-a' (10.0.0.0/16) and 'network-b' (10.0.128.0/17) overlap"
        );
    }
}
