//! JSON registry file reading.

use crate::error::RegistryError;
use crate::models::RegistryFile;

/// Parse a registry document, reporting the JSON path of any error.
///
/// # Arguments
/// * `json` - The document text
/// * `source` - Name used in error messages (usually the file path)
pub fn parse_registry_json(json: &str, source: &str) -> Result<RegistryFile, RegistryError> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| RegistryError::Json {
        path: source.to_string(),
        location: e.path().to_string(),
        message: e.inner().to_string(),
    })
}

/// Read a registry document from a JSON file.
///
/// # Returns
/// * `Ok(RegistryFile)` - The declared networks
/// * `Err` - If the file is missing, unreadable or not a valid document
pub fn read_registry_file(path: &str) -> Result<RegistryFile, RegistryError> {
    let json = std::fs::read_to_string(path).map_err(|source| RegistryError::Read {
        path: path.to_string(),
        source,
    })?;
    log::info!("Reading registry file: {path}");

    let registry = parse_registry_json(&json, path)?;
    log::debug!("Read {} network(s) from {path}", registry.networks.len());
    Ok(registry)
}
