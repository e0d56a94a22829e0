//! Crumbkeeper Core Library
//!
//! This crate provides the runtime side of the Crumbkeeper cookie cleaner:
//! compiled rule matchers and the rule set that decides what happens to the
//! cookies and site data of a host.
//!
//! # Architecture
//!
//! Rules are compiled by `ck-compiler` into anchored pattern sources. Each
//! source is wrapped in a [`RuleMatcher`], and the user's rules are kept in
//! settings order inside a [`RuleSet`].
//!
//! # Modules
//!
//! - `host`: Hostname extraction and normalization
//! - `psl`: Registrable domain (eTLD+1) heuristics
//! - `matcher`: Rule matchers and rule sets
//! - `types`: Shared type definitions

pub mod host;
pub mod psl;
pub mod types;
pub mod matcher;

// Re-export commonly used types
pub use host::{extract_host, normalize_host};
pub use psl::{get_etld1, walk_host_suffixes};
pub use matcher::{RuleEntry, RuleError, RuleMatcher, RuleSet};
pub use types::{CleanupDecision, CleanupType, ParseCleanupTypeError};
