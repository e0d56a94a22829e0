//! Core type definitions for Crumbkeeper
//!
//! These types are shared by the compiler, the bindings and the CLI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// Cleanup Types
// =============================================================================

/// What to do with the cookies and site data of a domain matched by a rule.
///
/// Variants are ordered from most to least protective, so `Ord` ranks
/// `Never` highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum CleanupType {
    /// Keep forever
    Never = 0,
    /// Keep until the browser restarts
    Startup = 1,
    /// Clear once the last tab of the domain is closed
    Leave = 2,
    /// Clear as soon as possible
    Instantly = 3,
}

impl CleanupType {
    /// All cleanup types, most protective first.
    pub const ALL: [CleanupType; 4] = [Self::Never, Self::Startup, Self::Leave, Self::Instantly];

    /// Lowercase name used by the settings UI and the bindings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Startup => "startup",
            Self::Leave => "leave",
            Self::Instantly => "instantly",
        }
    }

    /// Protection rank; higher keeps data longer.
    #[inline]
    pub fn protection(self) -> u8 {
        3 - self as u8
    }

    /// Does this type keep the data through the current cleanup?
    ///
    /// `restarting` is true for the cleanup run at browser startup.
    #[inline]
    pub fn keeps_data(self, restarting: bool) -> bool {
        match self {
            Self::Never => true,
            Self::Startup => !restarting,
            Self::Leave | Self::Instantly => false,
        }
    }
}

impl Default for CleanupType {
    fn default() -> Self {
        Self::Leave
    }
}

impl PartialOrd for CleanupType {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CleanupType {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.protection().cmp(&other.protection())
    }
}

impl fmt::Display for CleanupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error for an unknown cleanup type name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown cleanup type: {0:?} (expected never, startup, leave or instantly)")]
pub struct ParseCleanupTypeError(pub String);

impl FromStr for CleanupType {
    type Err = ParseCleanupTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "never" | "keep" => Ok(Self::Never),
            "startup" | "restart" => Ok(Self::Startup),
            "leave" => Ok(Self::Leave),
            "instantly" | "instant" | "clear" => Ok(Self::Instantly),
            _ => Err(ParseCleanupTypeError(s.to_string())),
        }
    }
}

// =============================================================================
// Decision
// =============================================================================

/// Outcome of evaluating a host against a rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupDecision {
    /// The cleanup type that applies to the host
    pub cleanup_type: CleanupType,
    /// Index of the deciding rule in its set, or `None` when the fallback applied
    pub rule_index: Option<usize>,
    /// Number of rules that matched the host
    pub matched: usize,
}
