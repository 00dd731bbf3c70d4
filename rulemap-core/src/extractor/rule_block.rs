//! Regex-based `rule { ... }` block extraction.
//!
//! A block runs from the keyword `rule` to the FIRST closing brace after its
//! opening brace, so a body that itself contains `}` is cut short there.
//! Nested blocks are not supported.
//!
//! Inside a body each field is searched for independently:
//! - scalar fields: `key = "value"` (first quoted string, no escapes, single line)
//! - list fields: `key = [ "a", "b", ... ]` (may span lines)

use super::traits::Extractor;
use crate::types::{FieldKind, RuleField, RuleRecord};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

// Pre-compiled regexes for block scanning
static RULE_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)rule\s*\{(.*?)\}").unwrap());

/// Static field table: one (field, pattern) pair per recognised attribute.
pub static FIELD_PATTERNS: LazyLock<Vec<(RuleField, Regex)>> = LazyLock::new(|| {
    RuleField::ALL
        .iter()
        .map(|field| {
            let key = regex::escape(field.key());
            let pattern = match field.kind() {
                FieldKind::Scalar => format!(r#"{key}\s*=\s*"(.+?)""#),
                FieldKind::List => format!(r"{key}\s*=\s*\[([^\]]+)\]"),
            };
            (*field, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// Extracts firewall rules written as `rule { ... }` blocks.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleBlockExtractor;

impl RuleBlockExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for RuleBlockExtractor {
    fn extract(&self, content: &str) -> Vec<RuleRecord> {
        let records: Vec<RuleRecord> = RULE_BLOCK_REGEX
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|body| parse_rule_body(body.as_str()))
            .collect();

        let empty = records.iter().filter(|r| r.is_empty()).count();
        debug!(
            "{}: extracted {} rule blocks ({} with no recognised fields)",
            self.name(),
            records.len(),
            empty
        );
        records
    }

    fn name(&self) -> &str {
        "RuleBlockExtractor"
    }
}

/// Parse the text between `rule {` and `}` into a record.
///
/// Fields not found in the body are left absent.
pub fn parse_rule_body(body: &str) -> RuleRecord {
    FIELD_PATTERNS
        .iter()
        .fold(RuleRecord::builder(), |builder, (field, pattern)| {
            let Some(raw) = pattern.captures(body).and_then(|caps| caps.get(1)) else {
                return builder;
            };
            let raw = raw.as_str().trim();
            match field {
                RuleField::Scalar(field) => builder.scalar(*field, raw),
                RuleField::List(field) => builder.list(*field, parse_list_values(raw)),
            }
        })
        .build()
}

/// Split bracket contents on commas.
///
/// Each element is trimmed and loses one enclosing pair of double quotes;
/// elements left empty (trailing commas, blank entries) are dropped.
pub fn parse_list_values(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| strip_quotes(item.trim()))
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_quotes(item: &str) -> &str {
    item.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(content: &str) -> Vec<RuleRecord> {
        RuleBlockExtractor::new().extract(content)
    }

    #[test]
    fn test_single_line_block_all_fields() {
        let records = extract(
            r#"rule { name = "Allow-Web" source_addresses = ["10.0.0.0/8"] destination_addresses = ["0.0.0.0/0"] protocols = ["TCP"] action = "Allow" }"#,
        );

        assert_eq!(records.len(), 1);
        let rule = &records[0];
        assert_eq!(rule.name(), Some("Allow-Web"));
        assert_eq!(rule.action(), Some("Allow"));
        assert_eq!(rule.protocols(), Some(&["TCP".to_string()][..]));
        assert_eq!(rule.source_addresses(), Some(&["10.0.0.0/8".to_string()][..]));
        assert_eq!(rule.destination_addresses(), Some(&["0.0.0.0/0".to_string()][..]));
    }

    #[test]
    fn test_multiline_blocks_keep_document_order() {
        let content = r#"
# Network policy

Some prose about the policy.

```hcl
rule {
  name     = "Second-In-Alphabet"
  action   = "Deny"
  protocols = [
    "TCP",
    "UDP",
  ]
}
```

More prose.

rule{
  action = "Allow"
  name = "A-First-In-Alphabet"
}
"#;
        let records = extract(content);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name(), Some("Second-In-Alphabet"));
        assert_eq!(
            records[0].protocols(),
            Some(&["TCP".to_string(), "UDP".to_string()][..])
        );
        assert_eq!(records[1].name(), Some("A-First-In-Alphabet"));
        assert_eq!(records[1].action(), Some("Allow"));
    }

    #[test]
    fn test_missing_fields_stay_absent() {
        let records = extract(r#"rule { name = "X" }"#);
        assert_eq!(records.len(), 1);
        let rule = &records[0];
        assert_eq!(rule.name(), Some("X"));
        assert!(rule.action().is_none());
        assert!(rule.protocols().is_none());
        assert!(rule.source_addresses().is_none());
        assert!(rule.destination_addresses().is_none());
    }

    #[test]
    fn test_block_without_fields_is_kept() {
        let records = extract("rule { priority = 100 }\nrule {}");
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(RuleRecord::is_empty));
    }

    #[test]
    fn test_no_blocks_yields_nothing() {
        assert!(extract("").is_empty());
        assert!(extract("# Just a heading\n\nNo rules here.").is_empty());
    }

    #[test]
    fn test_first_closing_brace_ends_block() {
        // The body is cut at the first `}`; the trailing text is not a new block.
        let records = extract(r#"rule { name = "Outer" inner { x = 1 } action = "Deny" }"#);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), Some("Outer"));
        assert!(records[0].action().is_none());
    }

    #[test]
    fn test_list_values_trimmed_and_unquoted() {
        assert_eq!(
            parse_list_values(r#" "10.0.0.0/8" , "192.168.1.0/24",  "#),
            vec!["10.0.0.0/8", "192.168.1.0/24"]
        );
    }

    #[test]
    fn test_list_values_strip_only_one_quote_pair() {
        assert_eq!(parse_list_values(r#"""quoted"""#), vec![r#""quoted""#]);
        assert_eq!(parse_list_values("bare, tokens"), vec!["bare", "tokens"]);
    }

    #[test]
    fn test_list_values_preserve_inner_whitespace() {
        assert_eq!(parse_list_values(r#""Any Host", "DMZ Net""#), vec!["Any Host", "DMZ Net"]);
    }

    #[test]
    fn test_scalar_takes_first_quoted_string_and_trims() {
        let rule = parse_rule_body(r#" name = "  Spaced Name  " "ignored" "#);
        assert_eq!(rule.name(), Some("Spaced Name"));
    }

    #[test]
    fn test_field_order_is_irrelevant() {
        let a = parse_rule_body(r#"name = "R" action = "Allow" protocols = ["TCP"]"#);
        let b = parse_rule_body(r#"protocols = ["TCP"] action = "Allow" name = "R""#);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_brackets_leave_list_absent() {
        let rule = parse_rule_body(r#"name = "R" protocols = []"#);
        assert!(rule.protocols().is_none());
    }

    #[test]
    fn test_field_table_covers_every_field() {
        assert_eq!(FIELD_PATTERNS.len(), RuleField::ALL.len());
    }
}
