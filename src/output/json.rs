//! JSON output for registry metadata.

use crate::models::Registry;

/// Render the registry as a pretty-printed JSON object keyed by name.
pub fn registry_json(registry: &Registry) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(registry)
}
