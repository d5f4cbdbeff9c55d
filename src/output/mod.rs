//! Output formatting for a validated registry.
//!
//! This module handles rendering registry metadata:
//! - [`json`] - JSON object keyed by network name
//! - [`csv`] - CSV rows
//! - [`terminal`] - Aligned, coloured terminal table

mod csv;
mod json;
mod terminal;

use crate::models::Registry;
use std::error::Error;

pub use csv::registry_csv;
pub use json::registry_json;
pub use terminal::{format_field, registry_table};

/// Output format selected on the command line.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Table,
}

/// Render a registry in the requested format.
pub fn render(registry: &Registry, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    let out = match format {
        OutputFormat::Json => registry_json(registry)?,
        OutputFormat::Csv => registry_csv(registry),
        OutputFormat::Table => registry_table(registry),
    };
    Ok(out)
}
