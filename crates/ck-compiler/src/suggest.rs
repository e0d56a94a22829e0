//! Rule suggestions for the "add rule" dialog.

use ck_core::host::{is_ip_literal, normalize_host};
use ck_core::psl::walk_host_suffixes;

/// Suggest rule expressions for a host, most specific first.
///
/// The exact host comes first, followed by `*.` plus each parent domain
/// down to the registrable domain. A registrable domain gets `*.` plus
/// itself.
pub fn suggest_rules(host: &str) -> Vec<String> {
    let host = normalize_host(host);
    if host.is_empty() {
        return Vec::new();
    }

    let mut rules = vec![host.to_string()];
    if is_ip_literal(&host) {
        return rules;
    }

    let suffixes: Vec<&str> = walk_host_suffixes(&host).collect();
    match suffixes.split_first() {
        Some((_, parents)) if !parents.is_empty() => {
            rules.extend(parents.iter().map(|parent| format!("*.{}", parent)));
        }
        _ => rules.push(format!("*.{}", host)),
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_subdomain() {
        assert_eq!(suggest_rules("www.google.com"), vec!["www.google.com", "*.google.com"]);
        assert_eq!(
            suggest_rules("a.b.example.co.uk"),
            vec!["a.b.example.co.uk", "*.b.example.co.uk", "*.example.co.uk"]
        );
    }

    #[test]
    fn test_suggest_registrable_domain() {
        assert_eq!(suggest_rules("Example.com"), vec!["example.com", "*.example.com"]);
    }

    #[test]
    fn test_suggest_ip_and_empty() {
        assert_eq!(suggest_rules("10.0.0.1"), vec!["10.0.0.1"]);
        assert!(suggest_rules("").is_empty());
        assert_eq!(suggest_rules("localhost"), vec!["localhost", "*.localhost"]);
    }
}
