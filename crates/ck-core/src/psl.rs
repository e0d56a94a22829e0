//! Registrable domain (eTLD+1) heuristics
//!
//! The extension only needs the registrable domain to group hosts and to
//! suggest rules, so a small two-part-TLD table stands in for the full
//! Public Suffix List.
//!
//! # Examples
//!
//! ```
//! use ck_core::psl::get_etld1;
//!
//! assert_eq!(get_etld1("sub.example.com"), "example.com");
//! assert_eq!(get_etld1("sub.example.co.uk"), "example.co.uk");
//! ```

use crate::host::{get_parent_domain, is_ip_literal, normalize_host};

/// Common two-part TLDs.
const COMMON_TWO_PART_TLDS: &[&str] = &[
    "co.uk", "co.jp", "co.nz", "co.za", "co.in", "co.kr",
    "com.au", "com.br", "com.cn", "com.mx", "com.tw", "com.hk",
    "net.au", "net.nz",
    "org.uk", "org.au",
    "gov.uk", "gov.au",
    "ac.uk", "ac.jp",
    "ne.jp", "or.jp",
];

/// Get the eTLD+1 (registrable domain) for a hostname.
///
/// IP literals and single-label hosts are returned unchanged.
pub fn get_etld1(host: &str) -> String {
    let host = normalize_host(host);
    if is_ip_literal(&host) {
        return host.into_owned();
    }

    let labels: Vec<&str> = host.split('.').collect();
    etld1_from_labels(&labels)
}

fn etld1_from_labels(labels: &[&str]) -> String {
    let n = labels.len();
    if n <= 2 {
        return labels.join(".");
    }

    let last_two = format!("{}.{}", labels[n - 2], labels[n - 1]);
    if COMMON_TWO_PART_TLDS.contains(&last_two.as_str()) {
        return labels[n - 3..].join(".");
    }

    labels[n - 2..].join(".")
}

/// Iterator for suffix-walking a host from full to eTLD+1.
pub struct HostSuffixIter<'a> {
    current: &'a str,
    etld1_len: usize,
}

impl<'a> HostSuffixIter<'a> {
    pub fn new(host: &'a str) -> Self {
        let etld1 = get_etld1(host);
        Self {
            current: host,
            etld1_len: etld1.len(),
        }
    }
}

impl<'a> Iterator for HostSuffixIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_empty() || self.current.len() < self.etld1_len {
            return None;
        }

        let result = self.current;

        self.current = match get_parent_domain(self.current) {
            Some(parent) if parent.len() >= self.etld1_len => parent,
            _ => "",
        };

        Some(result)
    }
}

/// Walk host suffixes from most specific to least specific.
///
/// The host must already be normalized.
pub fn walk_host_suffixes(host: &str) -> HostSuffixIter<'_> {
    HostSuffixIter::new(host)
}
