//! Rule parsing
//!
//! Splits a rule into dot-separated labels and records how the outer
//! wildcard labels anchor the match. Parsing never fails.

/// The wildcard label.
pub const WILDCARD: &str = "*";

/// Label separator.
pub const SEPARATOR: char = '.';

/// How the start of a rule is anchored in the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefixAnchor {
    /// Match starts at the beginning of the candidate
    #[default]
    Start,
    /// Match starts at the beginning or right after a dot (`*.` prefix)
    StartOrDot,
}

/// How the end of a rule is anchored in the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuffixAnchor {
    /// Match runs to the end of the candidate
    #[default]
    End,
    /// Match ends at the end or before a dot followed by anything (`.*` suffix)
    EndOrDot,
}

/// One interior label of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A literal label, matched exactly
    Literal(&'a str),
    /// A `*` label: zero or more labels at this position
    Wildcard,
}

impl<'a> Segment<'a> {
    fn from_label(label: &'a str) -> Self {
        if label == WILDCARD {
            Segment::Wildcard
        } else {
            Segment::Literal(label)
        }
    }

    #[inline]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard)
    }
}

/// A rule split into anchors and interior segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRule<'a> {
    /// The rule is exactly `*`
    pub match_all: bool,
    pub prefix: PrefixAnchor,
    pub suffix: SuffixAnchor,
    /// Interior labels in rule order, outer wildcards removed
    pub segments: Vec<Segment<'a>>,
}

/// Parse a rule.
///
/// A leading `*` label and a trailing `*` label are stripped independently,
/// so `*.*` leaves no interior segments. A `*` inside a longer label is a
/// literal character.
pub fn parse_rule(rule: &str) -> ParsedRule<'_> {
    if rule == WILDCARD {
        return ParsedRule {
            match_all: true,
            prefix: PrefixAnchor::StartOrDot,
            suffix: SuffixAnchor::EndOrDot,
            segments: Vec::new(),
        };
    }

    let all: Vec<&str> = rule.split(SEPARATOR).collect();
    let mut labels = all.as_slice();

    let mut prefix = PrefixAnchor::Start;
    if labels.first() == Some(&WILDCARD) {
        prefix = PrefixAnchor::StartOrDot;
        labels = &labels[1..];
    }

    let mut suffix = SuffixAnchor::End;
    if labels.last() == Some(&WILDCARD) {
        suffix = SuffixAnchor::EndOrDot;
        labels = &labels[..labels.len() - 1];
    }

    ParsedRule {
        match_all: false,
        prefix,
        suffix,
        segments: labels.iter().copied().map(Segment::from_label).collect(),
    }
}

/// Split a rule into its raw labels.
pub fn split_labels(rule: &str) -> impl Iterator<Item = &str> {
    rule.split(SEPARATOR)
}
