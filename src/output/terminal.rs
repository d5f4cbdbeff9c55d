//! Terminal output utilities.
//!
//! Provides formatting helpers and a table view for terminal output.

use crate::models::Registry;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Render the registry as an aligned table, one network per line.
pub fn registry_table(registry: &Registry) -> String {
    let name_w = column_width(registry.keys().map(|k| k.len()), "name");
    let prefix_w = column_width(registry.values().map(|d| d.prefix.len()), "prefix");
    let first_w = column_width(registry.values().map(|d| d.first_ip.len()), "first_ip");
    let last_w = column_width(registry.values().map(|d| d.last_ip.len()), "last_ip");

    let mut out = format!(
        "{} {} {} {} {} {} {}\n",
        format_field("name", name_w),
        format_field("prefix", prefix_w),
        format_field("first_ip", first_w),
        format_field("last_ip", last_w),
        format_field("len", 8),
        format_field("count", 1),
        "description",
    )
    .bold()
    .to_string();

    for (name, d) in registry {
        out.push_str(&format!(
            "{} {} {} {} {} {} {}\n",
            format_field(name, name_w).green(),
            format_field(&d.prefix, prefix_w),
            format_field(&d.first_ip, first_w),
            format_field(&d.last_ip, last_w),
            format_field(d.length, 8),
            format_field(&d.count, 1),
            d.description.dimmed(),
        ));
    }
    out
}

// Width of a quoted column, at least wide enough for its header.
fn column_width(lens: impl Iterator<Item = usize>, header: &str) -> usize {
    lens.chain(std::iter::once(header.len())).max().unwrap_or(0) + 2
}
