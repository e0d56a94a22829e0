use std::collections::HashSet;

use serde::Serialize;

use crate::builder::RuleSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NormalizeStats {
    pub before: usize,
    pub after: usize,
    pub empty: usize,
    pub deduped: usize,
}

/// Trim rules, drop empty ones and remove duplicate `(rule, type)` pairs.
///
/// The first occurrence of a duplicate is kept. The same rule with a
/// different cleanup type is not a duplicate.
pub fn normalize_rules(rules: &mut Vec<RuleSpec>) -> NormalizeStats {
    let before = rules.len();

    for spec in rules.iter_mut() {
        let trimmed = spec.rule.trim();
        if trimmed.len() != spec.rule.len() {
            spec.rule = trimmed.to_string();
        }
    }

    let mut empty = 0usize;
    rules.retain(|spec| {
        if spec.rule.is_empty() {
            empty += 1;
            false
        } else {
            true
        }
    });

    let mut seen: HashSet<RuleSpec> = HashSet::new();
    let mut deduped = 0usize;
    rules.retain(|spec| {
        if seen.insert(spec.clone()) {
            true
        } else {
            deduped += 1;
            false
        }
    });

    NormalizeStats {
        before,
        after: rules.len(),
        empty,
        deduped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ck_core::CleanupType;

    #[test]
    fn test_normalize_rules() {
        let mut rules = vec![
            RuleSpec::new(" *.google.com ", CleanupType::Never),
            RuleSpec::new("*.google.com", CleanupType::Never),
            RuleSpec::new("*.google.com", CleanupType::Instantly),
            RuleSpec::new("   ", CleanupType::Leave),
            RuleSpec::new("foo", CleanupType::Leave),
        ];

        let stats = normalize_rules(&mut rules);

        assert_eq!(
            stats,
            NormalizeStats {
                before: 5,
                after: 3,
                empty: 1,
                deduped: 1,
            }
        );
        assert_eq!(
            rules,
            vec![
                RuleSpec::new("*.google.com", CleanupType::Never),
                RuleSpec::new("*.google.com", CleanupType::Instantly),
                RuleSpec::new("foo", CleanupType::Leave),
            ]
        );
    }

    #[test]
    fn test_normalize_empty_list() {
        let mut rules = Vec::new();
        assert_eq!(normalize_rules(&mut rules), NormalizeStats::default());
    }
}
