//! CSV output for registry metadata.

use crate::models::{NetworkDetail, Registry};

const CSV_HEADER: &str =
    r#""name","cidr","prefix","first_ip","last_ip","length","count","description""#;

/// Render the registry as CSV, one row per network in name order.
pub fn registry_csv(registry: &Registry) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for (name, detail) in registry {
        out.push_str(&csv_row(name, detail));
        out.push('\n');
    }
    out
}

fn csv_row(name: &str, d: &NetworkDetail) -> String {
    let length = d.length.to_string();
    let count = d.count.to_string();
    let fields: [&str; 8] = [
        name,
        d.cidr.as_str(),
        d.prefix.as_str(),
        d.first_ip.as_str(),
        d.last_ip.as_str(),
        length.as_str(),
        count.as_str(),
        d.description.as_str(),
    ];
    fields
        .iter()
        .map(|field| escape_csv_field(field))
        .collect::<Vec<String>>()
        .join(",")
}

/// Quote a field, doubling any embedded double quotes.
fn escape_csv_field(input: &str) -> String {
    format!("\"{}\"", input.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NetworkEntry;
    use crate::processing::build_registry;

    #[test]
    fn test_escape_csv_field() {
        assert_eq!(escape_csv_field("plain"), "\"plain\"");
        assert_eq!(escape_csv_field("a \"b\", c"), "\"a \"\"b\"\", c\"");
    }

    #[test]
    fn test_registry_csv() {
        let registry = build_registry(&[
            NetworkEntry::new("b-net", "10.1.0.0/16", "second"),
            NetworkEntry::new("a-net", "10.0.0.0/16", "first, main"),
        ])
        .unwrap();
        let out = registry_csv(&registry);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(
            lines[1],
            r#""a-net","10.0.0.0/16","10.0.0.0/16","10.0.0.0","10.0.255.255","16","65536","first, main""#
        );
        assert!(lines[2].starts_with("\"b-net\""));
    }
}
