//! Markmap outline rendering.
//!
//! Layout:
//!
//! ```text
//! # Firewall Rules Mind Map
//!
//! ## Section <k> (Rules <start> - <end>)
//!
//! ### Rule: <name|N/A>
//! - Action: <action|N/A>
//! - Protocols: <tokens joined by ", ">
//! - Source Addresses:
//!   - <addr>
//! - Destination Addresses:
//!   - <addr>
//!
//! ```

use super::pagination::{paginate, Section};
use crate::error::RulemapError;
use crate::types::{RuleRecord, MISSING_FIELD_PLACEHOLDER};
use std::io::{self, Write};

pub const DOCUMENT_TITLE: &str = "Firewall Rules Mind Map";

const PROTOCOL_SEPARATOR: &str = ", ";

/// Write the whole outline for already-paginated sections.
pub fn render_markmap<W: Write>(writer: &mut W, sections: &[Section<'_>]) -> io::Result<()> {
    writeln!(writer, "# {DOCUMENT_TITLE}")?;
    writeln!(writer)?;

    for section in sections {
        writeln!(
            writer,
            "## Section {} (Rules {} - {})",
            section.index, section.first_rule, section.last_rule
        )?;
        writeln!(writer)?;

        for rule in section.rules {
            render_rule(writer, rule)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn render_rule<W: Write>(writer: &mut W, rule: &RuleRecord) -> io::Result<()> {
    writeln!(
        writer,
        "### Rule: {}",
        rule.name().unwrap_or(MISSING_FIELD_PLACEHOLDER)
    )?;
    writeln!(
        writer,
        "- Action: {}",
        rule.action().unwrap_or(MISSING_FIELD_PLACEHOLDER)
    )?;
    writeln!(
        writer,
        "- Protocols: {}",
        rule.protocols().unwrap_or_default().join(PROTOCOL_SEPARATOR)
    )?;
    render_address_list(writer, "Source Addresses", rule.source_addresses())?;
    render_address_list(writer, "Destination Addresses", rule.destination_addresses())
}

fn render_address_list<W: Write>(
    writer: &mut W,
    label: &str,
    addresses: Option<&[String]>,
) -> io::Result<()> {
    writeln!(writer, "- {label}:")?;
    for address in addresses.unwrap_or_default() {
        writeln!(writer, "  - {address}")?;
    }
    Ok(())
}

/// Paginate and render into an in-memory string.
pub fn render_to_string(
    rules: &[RuleRecord],
    rules_per_section: usize,
) -> Result<String, RulemapError> {
    let sections = paginate(rules, rules_per_section)?;
    let mut buffer = Vec::new();
    render_markmap(&mut buffer, &sections).map_err(|source| RulemapError::OutputWrite {
        path: "<memory>".into(),
        source,
    })?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ListField, ScalarField};

    #[test]
    fn test_full_rule_layout() {
        let rule = RuleRecord::builder()
            .scalar(ScalarField::Name, "Allow-Web")
            .scalar(ScalarField::Action, "Allow")
            .list(ListField::Protocols, ["TCP", "UDP"])
            .list(ListField::SourceAddresses, ["10.0.0.0/8", "172.16.0.0/12"])
            .list(ListField::DestinationAddresses, ["0.0.0.0/0"])
            .build();

        let output = render_to_string(&[rule], 25).unwrap();
        let expected = "\
# Firewall Rules Mind Map

## Section 1 (Rules 1 - 1)

### Rule: Allow-Web
- Action: Allow
- Protocols: TCP, UDP
- Source Addresses:
  - 10.0.0.0/8
  - 172.16.0.0/12
- Destination Addresses:
  - 0.0.0.0/0

";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_missing_fields_use_placeholders() {
        let rule = RuleRecord::default();
        let output = render_to_string(&[rule], 25).unwrap();
        let expected = "\
# Firewall Rules Mind Map

## Section 1 (Rules 1 - 1)

### Rule: N/A
- Action: N/A
- Protocols: 
- Source Addresses:
- Destination Addresses:

";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_non_ascii_values_survive_rendering() {
        let rule = RuleRecord::builder()
            .scalar(ScalarField::Name, "Zugriff-Büro")
            .list(ListField::SourceAddresses, ["réseau-interne"])
            .build();
        let output = render_to_string(&[rule], 25).unwrap();
        assert!(output.contains("### Rule: Zugriff-Büro\n"));
        assert!(output.contains("  - réseau-interne\n"));
    }

    #[test]
    fn test_no_rules_renders_header_only() {
        let output = render_to_string(&[], 25).unwrap();
        assert_eq!(output, "# Firewall Rules Mind Map\n\n");
    }

    #[test]
    fn test_section_headings_follow_page_size() {
        let rules: Vec<RuleRecord> = (1..=5)
            .map(|i| RuleRecord::builder().scalar(ScalarField::Name, format!("r{i}")).build())
            .collect();
        let output = render_to_string(&rules, 2).unwrap();

        let headings: Vec<&str> = output.lines().filter(|l| l.starts_with("## ")).collect();
        assert_eq!(
            headings,
            vec![
                "## Section 1 (Rules 1 - 2)",
                "## Section 2 (Rules 3 - 4)",
                "## Section 3 (Rules 5 - 5)",
            ]
        );
    }

    #[test]
    fn test_records_separated_by_single_blank_line() {
        let rules = vec![
            RuleRecord::builder().scalar(ScalarField::Name, "a").build(),
            RuleRecord::builder().scalar(ScalarField::Name, "b").build(),
        ];
        let output = render_to_string(&rules, 25).unwrap();
        assert!(output.contains("- Destination Addresses:\n\n### Rule: b\n"));
        assert!(!output.contains("\n\n\n"));
    }
}
