//! Registry input entries and output records.

use super::Range;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// One declared network block as supplied by the caller.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkEntry {
    /// Unique name for this block.
    pub name: String,
    /// CIDR block text (e.g. "10.0.0.0/16").
    pub cidr: String,
    /// Free-text annotation.
    #[serde(default)]
    pub description: String,
}

impl NetworkEntry {
    pub fn new(name: &str, cidr: &str, description: &str) -> Self {
        NetworkEntry {
            name: name.to_string(),
            cidr: cidr.to_string(),
            description: description.to_string(),
        }
    }
}

/// Registry document read from disk.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RegistryFile {
    /// Network blocks to register, in declaration order.
    pub networks: Vec<NetworkEntry>,
}

/// Derived metadata for one validated block.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkDetail {
    pub cidr: String,
    pub description: String,
    pub first_ip: String,
    pub last_ip: String,
    pub prefix: String,
    pub length: u8,
    /// Same as `first_ip`.
    pub base_ip: String,
    /// Exact address count, as a decimal string.
    #[serde(serialize_with = "serialize_count")]
    pub count: num_bigint::BigUint,
}

fn serialize_count<S>(count: &num_bigint::BigUint, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&count.to_str_radix(10))
}

impl From<&Range> for NetworkDetail {
    fn from(r: &Range) -> Self {
        NetworkDetail {
            cidr: r.cidr().to_string(),
            description: r.description().to_string(),
            first_ip: r.first_ip().to_string(),
            last_ip: r.last_ip().to_string(),
            prefix: r.prefix().to_string(),
            length: r.length(),
            base_ip: r.first_ip().to_string(),
            count: r.count().clone(),
        }
    }
}

/// Validated registry keyed by network name.
pub type Registry = BTreeMap<String, NetworkDetail>;
