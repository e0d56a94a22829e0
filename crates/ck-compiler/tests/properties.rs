use ck_compiler::{compile_rule, rule_to_pattern_source};
use proptest::prelude::*;

fn label() -> impl Strategy<Value = String> {
    "[a-z0-9-]{1,8}"
}

fn labels(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(label(), 1..max)
}

proptest! {
    #[test]
    fn compilation_is_deterministic(rule in ".{0,40}", candidate in ".{0,40}") {
        prop_assert_eq!(rule_to_pattern_source(&rule), rule_to_pattern_source(&rule));
        let a = compile_rule(&rule);
        let b = compile_rule(&rule);
        prop_assert_eq!(a.pattern_source(), b.pattern_source());
        prop_assert_eq!(a.test(&candidate), b.test(&candidate));
    }

    #[test]
    fn every_rule_compiles(rule in ".{0,60}") {
        prop_assert!(compile_rule(&rule).is_compiled());
    }

    #[test]
    fn match_all_accepts_everything(candidate in ".{0,60}") {
        prop_assert!(compile_rule("*").test(&candidate));
    }

    #[test]
    fn literal_rule_matches_only_itself(rule in "[a-z0-9.+?()|^$\\[\\]{}\\\\-]{0,20}", candidate in "[a-z0-9.+?()|^$-]{0,20}") {
        let matcher = compile_rule(&rule);
        prop_assert!(matcher.test(&rule));
        prop_assert_eq!(matcher.test(&candidate), candidate == rule);
    }

    #[test]
    fn leading_wildcard_matches_subdomains(domain in labels(4), sub in labels(4), junk in "[A-Z]{1,4}") {
        let domain = domain.join(".");
        let matcher = compile_rule(&format!("*.{}", domain));
        prop_assert!(matcher.test(&domain));
        let subdomain = format!("{}.{}", sub.join("."), domain);
        prop_assert!(matcher.test(&subdomain));
        let junked = format!("{}.{}", domain, junk);
        prop_assert!(!matcher.test(&junked));
    }

    #[test]
    fn trailing_wildcard_matches_suffixes(domain in labels(4), tail in labels(4)) {
        let domain = domain.join(".");
        let matcher = compile_rule(&format!("{}.*", domain));
        prop_assert!(matcher.test(&domain));
        let suffixed = format!("{}.{}", domain, tail.join("."));
        prop_assert!(matcher.test(&suffixed));
    }

    #[test]
    fn interior_wildcard_spans_zero_or_more_labels(a in label(), b in label(), middle in prop::collection::vec(label(), 0..4)) {
        let matcher = compile_rule(&format!("{}.*.{}", a, b));
        let mut parts = vec![a.clone()];
        parts.extend(middle);
        parts.push(b.clone());
        prop_assert!(matcher.test(&parts.join(".")));
        let joined = format!("{}{}", a, b);
        prop_assert!(!matcher.test(&joined));
    }

    #[test]
    fn adjacent_wildcards_are_one(a in label(), b in label(), extra in 1usize..4) {
        let stars = vec!["*"; extra + 1].join(".");
        prop_assert_eq!(
            rule_to_pattern_source(&format!("{}.{}.{}", a, stars, b)),
            rule_to_pattern_source(&format!("{}.*.{}", a, b))
        );
    }

    #[test]
    fn results_do_not_depend_on_order(
        rules in prop::collection::vec("[a-z*.]{0,12}", 1..6),
        candidates in prop::collection::vec("[a-z.]{0,12}", 1..6),
    ) {
        let forward: Vec<Vec<bool>> = rules
            .iter()
            .map(|rule| {
                let matcher = compile_rule(rule);
                candidates.iter().map(|c| matcher.test(c)).collect()
            })
            .collect();

        let mut backward: Vec<Vec<bool>> = rules
            .iter()
            .rev()
            .map(|rule| {
                let matcher = compile_rule(rule);
                candidates.iter().rev().map(|c| matcher.test(c)).rev().collect()
            })
            .collect();
        backward.reverse();

        prop_assert_eq!(forward, backward);
    }
}
