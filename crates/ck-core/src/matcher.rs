//! Compiled rule matchers and rule sets
//!
//! A [`RuleMatcher`] wraps the pattern source produced by the rule compiler
//! together with its compiled regex. A [`RuleSet`] holds the user's rules in
//! settings order and decides which [`CleanupType`] applies to a host.

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::host::normalize_host;
use crate::types::{CleanupDecision, CleanupType};

/// Error type for rule compilation.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Rule {rule:?} failed to compile: {source}")]
    Compile {
        rule: String,
        #[source]
        source: regex::Error,
    },
}

// =============================================================================
// Rule Matcher
// =============================================================================

/// Floor for the engine size limits, the regex crate's own default.
const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Compiled program bytes budgeted per pattern source byte.
const BYTES_PER_SOURCE_BYTE: usize = 256;

/// Size limit for the compiled program and lazy DFA cache of `source`.
///
/// Grows linearly with the source so long rules still compile.
fn size_limit_for(source: &str) -> usize {
    source
        .len()
        .saturating_mul(BYTES_PER_SOURCE_BYTE)
        .max(DEFAULT_SIZE_LIMIT)
}

/// A compiled, immutable predicate over candidate hostnames.
#[derive(Clone)]
pub struct RuleMatcher {
    rule: String,
    source: String,
    regex: Option<Regex>,
}

impl RuleMatcher {
    /// Compile a pattern source produced for `rule`.
    pub fn from_source(rule: &str, source: String) -> Result<Self, RuleError> {
        let limit = size_limit_for(&source);
        let regex = RegexBuilder::new(&source)
            .size_limit(limit)
            .dfa_size_limit(limit)
            .build()
            .map_err(|err| RuleError::Compile {
                rule: rule.to_string(),
                source: err,
            })?;
        Ok(Self {
            rule: rule.to_string(),
            source,
            regex: Some(regex),
        })
    }

    /// A matcher for `rule` that rejects every candidate.
    ///
    /// Used when the pattern source cannot be compiled; the rule then simply
    /// never matches instead of failing the caller.
    pub fn never(rule: &str, source: String) -> Self {
        Self {
            rule: rule.to_string(),
            source,
            regex: None,
        }
    }

    /// Test a candidate string. Case-sensitive; no normalization is applied.
    #[inline]
    pub fn test(&self, candidate: &str) -> bool {
        match &self.regex {
            Some(regex) => regex.is_match(candidate),
            None => false,
        }
    }

    /// The rule this matcher was compiled from.
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// The anchored pattern source.
    pub fn pattern_source(&self) -> &str {
        &self.source
    }

    /// False when the rule degraded to never-match.
    pub fn is_compiled(&self) -> bool {
        self.regex.is_some()
    }
}

impl fmt::Debug for RuleMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleMatcher")
            .field("rule", &self.rule)
            .field("source", &self.source)
            .field("compiled", &self.regex.is_some())
            .finish()
    }
}

impl PartialEq for RuleMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.rule == other.rule && self.source == other.source
    }
}

impl Eq for RuleMatcher {}

// =============================================================================
// Rule Set
// =============================================================================

/// A compiled rule with its cleanup type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    pub matcher: RuleMatcher,
    pub cleanup_type: CleanupType,
}

/// Ordered set of compiled rules.
///
/// When several rules match a host the most protective type wins; among
/// equally protective rules the earliest one is reported.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    entries: Vec<RuleEntry>,
    fallback: CleanupType,
}

impl RuleSet {
    /// Create an empty set using the default fallback (`Leave`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set with an explicit fallback type.
    pub fn with_fallback(fallback: CleanupType) -> Self {
        Self {
            entries: Vec::new(),
            fallback,
        }
    }

    /// Append a compiled rule.
    pub fn push(&mut self, matcher: RuleMatcher, cleanup_type: CleanupType) {
        self.entries.push(RuleEntry { matcher, cleanup_type });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn fallback(&self) -> CleanupType {
        self.fallback
    }

    pub fn set_fallback(&mut self, fallback: CleanupType) {
        self.fallback = fallback;
    }

    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    /// Every rule matching the host, in insertion order.
    pub fn matching_rules<'s>(&'s self, host: &str) -> impl Iterator<Item = &'s RuleEntry> + 's {
        let host = normalize_host(host).into_owned();
        self.entries.iter().filter(move |entry| entry.matcher.test(&host))
    }

    /// Decide the cleanup type for a host.
    pub fn decide(&self, host: &str) -> CleanupDecision {
        let host = normalize_host(host);
        let mut best: Option<(usize, CleanupType)> = None;
        let mut matched = 0usize;

        for (idx, entry) in self.entries.iter().enumerate() {
            if !entry.matcher.test(&host) {
                continue;
            }
            matched += 1;
            match best {
                Some((_, ty)) if ty >= entry.cleanup_type => {}
                _ => best = Some((idx, entry.cleanup_type)),
            }
        }

        log::debug!("host {:?}: {} matching rule(s)", host, matched);

        match best {
            Some((idx, cleanup_type)) => CleanupDecision {
                cleanup_type,
                rule_index: Some(idx),
                matched,
            },
            None => CleanupDecision {
                cleanup_type: self.fallback,
                rule_index: None,
                matched,
            },
        }
    }

    /// The cleanup type that applies to a host.
    pub fn cleanup_type_for(&self, host: &str) -> CleanupType {
        self.decide(host).cleanup_type
    }

    /// Should the data of this host survive the current cleanup?
    pub fn is_protected(&self, host: &str, restarting: bool) -> bool {
        self.cleanup_type_for(host).keeps_data(restarting)
    }
}
