//! Rule diagnostics
//!
//! Lints are advisory: a rule with issues still compiles exactly as
//! written. The settings dialog uses them to warn before saving.

use std::fmt;

use serde::Serialize;

use crate::parser::{split_labels, WILDCARD};

bitflags::bitflags! {
    /// Summary of the issues found in a rule.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LintFlags: u8 {
        /// The rule is empty
        const EMPTY = 1 << 0;
        /// A label is empty (leading, trailing or doubled dot)
        const EMPTY_LABEL = 1 << 1;
        /// `*` inside a longer label, matched literally
        const EMBEDDED_WILDCARD = 1 << 2;
        /// Contains whitespace
        const WHITESPACE = 1 << 3;
        /// Contains uppercase letters
        const UPPERCASE = 1 << 4;
        /// Adjacent `*` labels
        const REDUNDANT_WILDCARD = 1 << 5;
        /// `*.*`, which only matches hosts with an empty label
        const NO_ORDINARY_HOST = 1 << 6;
    }
}

/// A single rule diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LintIssue {
    Empty,
    EmptyLabel { index: usize },
    EmbeddedWildcard { label: String },
    Whitespace,
    Uppercase,
    RedundantWildcard { index: usize },
    NoOrdinaryHost,
}

impl LintIssue {
    /// Stable snake_case name, matching the serialized `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::EmptyLabel { .. } => "empty_label",
            Self::EmbeddedWildcard { .. } => "embedded_wildcard",
            Self::Whitespace => "whitespace",
            Self::Uppercase => "uppercase",
            Self::RedundantWildcard { .. } => "redundant_wildcard",
            Self::NoOrdinaryHost => "no_ordinary_host",
        }
    }

    pub fn flag(&self) -> LintFlags {
        match self {
            Self::Empty => LintFlags::EMPTY,
            Self::EmptyLabel { .. } => LintFlags::EMPTY_LABEL,
            Self::EmbeddedWildcard { .. } => LintFlags::EMBEDDED_WILDCARD,
            Self::Whitespace => LintFlags::WHITESPACE,
            Self::Uppercase => LintFlags::UPPERCASE,
            Self::RedundantWildcard { .. } => LintFlags::REDUNDANT_WILDCARD,
            Self::NoOrdinaryHost => LintFlags::NO_ORDINARY_HOST,
        }
    }
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "rule is empty and only matches an empty host"),
            Self::EmptyLabel { index } => write!(f, "label {} is empty", index),
            Self::EmbeddedWildcard { label } => {
                write!(f, "'*' in label {:?} is matched literally; wildcards must be whole labels", label)
            }
            Self::Whitespace => write!(f, "rule contains whitespace"),
            Self::Uppercase => write!(f, "hosts are lowercase; uppercase letters never match"),
            Self::RedundantWildcard { index } => {
                write!(f, "wildcard label {} repeats the previous one", index)
            }
            Self::NoOrdinaryHost => write!(
                f,
                "'*.*' matches no ordinary host, only hosts with an empty label; use '*' to match everything"
            ),
        }
    }
}

/// Collect diagnostics for a rule.
pub fn lint_rule(rule: &str) -> Vec<LintIssue> {
    let mut issues = Vec::new();

    if rule.is_empty() {
        issues.push(LintIssue::Empty);
        return issues;
    }

    // Both outer wildcards are anchors here and nothing sits between them.
    if rule == "*.*" {
        issues.push(LintIssue::NoOrdinaryHost);
        return issues;
    }

    if rule.chars().any(char::is_whitespace) {
        issues.push(LintIssue::Whitespace);
    }
    if rule.chars().any(char::is_uppercase) {
        issues.push(LintIssue::Uppercase);
    }

    let mut prev_wildcard = false;
    for (index, label) in split_labels(rule).enumerate() {
        if label.is_empty() {
            issues.push(LintIssue::EmptyLabel { index });
        } else if label != WILDCARD && label.contains('*') {
            issues.push(LintIssue::EmbeddedWildcard { label: label.to_string() });
        }

        let is_wildcard = label == WILDCARD;
        if is_wildcard && prev_wildcard {
            issues.push(LintIssue::RedundantWildcard { index });
        }
        prev_wildcard = is_wildcard;
    }

    issues
}

/// Lint a rule and summarize the issues as flags.
pub fn lint_flags(rule: &str) -> LintFlags {
    lint_rule(rule)
        .iter()
        .fold(LintFlags::empty(), |acc, issue| acc | issue.flag())
}
