//! Pattern source generation
//!
//! Turns a [`ParsedRule`] into an anchored regex source. The source alone
//! determines matching behavior; no flags are set when it is compiled.
//!
//! - `*` becomes `^(?s:.*)$`
//! - `foo` becomes `^foo$`
//! - `*.foo` becomes `(?:^|^(?s:.*)\.)foo$`
//! - `foo.*` becomes `^foo(?:$|\.(?s:.*)$)`
//! - `foo.*.bar` becomes `^foo(?:\.(?s:.*)\.|\.)bar$`

use crate::parser::{parse_rule, ParsedRule, PrefixAnchor, Segment, SuffixAnchor};

/// Any sequence of characters, dots and newlines included.
pub const ANY: &str = "(?s:.*)";

/// Pattern source of the match-all rule `*`.
pub const MATCH_ALL: &str = "^(?s:.*)$";

const PREFIX_START: &str = "^";
const PREFIX_START_OR_DOT: &str = r"(?:^|^(?s:.*)\.)";
const SUFFIX_END: &str = "$";
const SUFFIX_END_OR_DOT: &str = r"(?:$|\.(?s:.*)$)";

/// Literal label separator.
const DOT: &str = r"\.";

/// Wildcard between two literal labels: a dot-delimited run of labels, or a
/// single dot.
const GAP: &str = r"(?:\.(?s:.*)\.|\.)";
/// Wildcard before the first literal label: optional labels plus their dot.
const LEADING_GAP: &str = r"(?:(?s:.*)\.)?";
/// Wildcard after the last literal label: optional dot plus labels.
const TRAILING_GAP: &str = r"(?:\.(?s:.*))?";

impl PrefixAnchor {
    pub fn as_pattern(self) -> &'static str {
        match self {
            PrefixAnchor::Start => PREFIX_START,
            PrefixAnchor::StartOrDot => PREFIX_START_OR_DOT,
        }
    }
}

impl SuffixAnchor {
    pub fn as_pattern(self) -> &'static str {
        match self {
            SuffixAnchor::End => SUFFIX_END,
            SuffixAnchor::EndOrDot => SUFFIX_END_OR_DOT,
        }
    }
}

/// Collapse runs of adjacent wildcard segments into one.
///
/// Each wildcard already admits zero labels, so `a.*.*.b` means the same
/// as `a.*.b`. Without this pass the second wildcard would demand a
/// separating dot of its own.
pub fn collapse_wildcards(segments: &mut Vec<Segment<'_>>) -> usize {
    let before = segments.len();
    segments.dedup_by(|next, prev| next.is_wildcard() && prev.is_wildcard());
    before - segments.len()
}

/// Render interior segments. Expects adjacent wildcards already collapsed.
pub fn render_segments(segments: &[Segment<'_>]) -> String {
    let mut out = String::new();
    let mut need_dot = false;
    let last = segments.len().saturating_sub(1);

    for (i, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Literal(label) => {
                if need_dot {
                    out.push_str(DOT);
                }
                out.push_str(&regex::escape(label));
                need_dot = true;
            }
            Segment::Wildcard => {
                let gap = match (i > 0, i < last) {
                    (true, true) => GAP,
                    (false, true) => LEADING_GAP,
                    (true, false) => TRAILING_GAP,
                    (false, false) => ANY,
                };
                out.push_str(gap);
                need_dot = false;
            }
        }
    }

    out
}

/// Render a parsed rule into its final pattern source.
pub fn render_pattern(parsed: &ParsedRule<'_>) -> String {
    if parsed.match_all {
        return MATCH_ALL.to_string();
    }

    let mut segments = parsed.segments.clone();
    collapse_wildcards(&mut segments);

    let middle = render_segments(&segments);
    let prefix = parsed.prefix.as_pattern();
    let suffix = parsed.suffix.as_pattern();

    let mut out = String::with_capacity(prefix.len() + middle.len() + suffix.len());
    out.push_str(prefix);
    out.push_str(&middle);
    out.push_str(suffix);
    out
}

/// Translate a wildcard rule into its anchored pattern source.
///
/// Total over all inputs: every string, the empty one included, yields a
/// valid pattern.
pub fn rule_to_pattern_source(rule: &str) -> String {
    render_pattern(&parse_rule(rule))
}
