//! Rule set builder
//!
//! Compiles the user's `(rule, cleanup type)` pairs into a [`RuleSet`].

use std::fmt;
use std::str::FromStr;

use ck_core::types::{CleanupType, ParseCleanupTypeError};
use ck_core::RuleSet;
use serde::{Deserialize, Serialize};

use crate::compile_rule;

/// A user rule before compilation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleSpec {
    pub rule: String,
    pub cleanup_type: CleanupType,
}

impl RuleSpec {
    pub fn new(rule: impl Into<String>, cleanup_type: CleanupType) -> Self {
        Self {
            rule: rule.into(),
            cleanup_type,
        }
    }
}

impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.rule, self.cleanup_type)
    }
}

/// Error for a malformed `<rule>=<type>` string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseRuleSpecError {
    #[error("Expected <rule>=<type>, got {0:?}")]
    MissingType(String),
    #[error(transparent)]
    CleanupType(#[from] ParseCleanupTypeError),
}

/// Parses `<rule>=<type>`; the type is split off at the last `=`.
impl FromStr for RuleSpec {
    type Err = ParseRuleSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('=') {
            Some((rule, ty)) => Ok(Self::new(rule, ty.parse()?)),
            None => Err(ParseRuleSpecError::MissingType(s.to_string())),
        }
    }
}

/// Compile rule specs into a rule set, preserving their order.
pub fn build_rule_set(specs: &[RuleSpec], fallback: CleanupType) -> RuleSet {
    let mut set = RuleSet::with_fallback(fallback);
    for spec in specs {
        set.push(compile_rule(&spec.rule), spec.cleanup_type);
    }
    log::debug!("built rule set with {} rule(s), fallback {}", set.len(), fallback);
    set
}
