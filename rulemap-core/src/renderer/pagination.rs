use crate::error::RulemapError;
use crate::types::RuleRecord;

/// One page of the outline: a contiguous run of at most `rules_per_section` rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    /// 1-based section number
    pub index: usize,
    /// 1-based position of the first rule in the whole document
    pub first_rule: usize,
    /// 1-based position of the last rule, inclusive
    pub last_rule: usize,
    pub rules: &'a [RuleRecord],
}

/// Split rules into consecutive sections, preserving order.
///
/// Every section but the last holds exactly `rules_per_section` rules. No rules
/// means no sections.
pub fn paginate(
    rules: &[RuleRecord],
    rules_per_section: usize,
) -> Result<Vec<Section<'_>>, RulemapError> {
    if rules_per_section == 0 {
        return Err(RulemapError::InvalidSectionSize(rules_per_section));
    }

    let total = rules.len();
    Ok(rules
        .chunks(rules_per_section)
        .enumerate()
        .map(|(i, chunk)| {
            let index = i + 1;
            Section {
                index,
                first_rule: i * rules_per_section + 1,
                last_rule: (index * rules_per_section).min(total),
                rules: chunk,
            }
        })
        .collect())
}
