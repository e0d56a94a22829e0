//! Crumbkeeper Rule Compiler
//!
//! This crate compiles wildcard domain rules such as `*.google.com` or
//! `*.ads.*` into anchored patterns and wraps them in [`RuleMatcher`]s.
//!
//! A rule is a list of dot-separated labels. A label that is exactly `*`
//! stands for zero or more labels at its position; any other label,
//! including one that merely contains `*`, is matched literally.
//!
//! ```
//! use ck_compiler::compile_rule;
//!
//! let matcher = compile_rule("*.google.com");
//! assert!(matcher.test("google.com"));
//! assert!(matcher.test("mail.google.com"));
//! assert!(!matcher.test("google.com.evil.net"));
//! ```

pub mod parser;
pub mod pattern;
pub mod lint;
pub mod optimizer;
pub mod builder;
pub mod suggest;

pub use builder::{build_rule_set, ParseRuleSpecError, RuleSpec};
pub use lint::{lint_flags, lint_rule, LintFlags, LintIssue};
pub use optimizer::{normalize_rules, NormalizeStats};
pub use parser::{parse_rule, ParsedRule, Segment};
pub use pattern::rule_to_pattern_source;
pub use suggest::suggest_rules;

pub use ck_core::{RuleError, RuleMatcher};

/// Compile a rule, surfacing regex engine failures.
///
/// Pattern sources are always well-formed and the engine's size limits grow
/// with them, so the only failure is a rule too large for the engine to
/// represent at all.
pub fn try_compile_rule(rule: &str) -> Result<RuleMatcher, RuleError> {
    RuleMatcher::from_source(rule, rule_to_pattern_source(rule))
}

/// Compile a rule into a fresh matcher. Never fails.
///
/// A rule the regex engine cannot hold compiles to a matcher that matches
/// nothing.
pub fn compile_rule(rule: &str) -> RuleMatcher {
    match try_compile_rule(rule) {
        Ok(matcher) => matcher,
        Err(err) => {
            log::warn!("{}; the rule will never match", err);
            RuleMatcher::never(rule, rule_to_pattern_source(rule))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_rule_exposes_source() {
        let matcher = compile_rule("foo.*.bar");
        assert_eq!(matcher.rule(), "foo.*.bar");
        assert_eq!(matcher.pattern_source(), rule_to_pattern_source("foo.*.bar"));
        assert!(matcher.is_compiled());
    }

    #[test]
    fn test_compile_rule_is_fresh_and_identical() {
        let a = compile_rule("*.foo.*");
        let b = compile_rule("*.foo.*");
        assert_eq!(a, b);
        for candidate in ["foo", "a.foo", "foo.b", "afoo.b", "a.foob", ""] {
            assert_eq!(a.test(candidate), b.test(candidate), "{candidate:?}");
        }
    }

    #[test]
    fn test_compile_never_rejects() {
        for rule in ["", ".", "..", "*.*", "***", "a b", "\\", "(", "[", "a{2}", "ü.example"] {
            let matcher = try_compile_rule(rule).unwrap();
            assert!(matcher.test(rule) || rule.contains('*'), "{rule:?} should match itself");
        }
    }

    #[test]
    fn test_rules_match_themselves_literally() {
        assert!(compile_rule("a+b").test("a+b"));
        assert!(!compile_rule("a+b").test("aab"));
        assert!(compile_rule("").test(""));
        assert!(!compile_rule("").test("example.com"));
    }

    #[test]
    fn test_long_rules_compile_and_match_themselves() {
        let rule = "a".repeat(500_000);
        let matcher = compile_rule(&rule);
        assert!(matcher.is_compiled());
        assert!(matcher.test(&rule));
        assert!(!matcher.test(&rule[1..]));

        let rule = vec!["ab"; 200_000].join(".");
        let matcher = compile_rule(&rule);
        assert!(matcher.is_compiled());
        assert!(matcher.test(&rule));
        assert!(!matcher.test(&format!("{}.ab", rule)));
    }
}
