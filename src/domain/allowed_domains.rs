//! Allow-list of domains that short links may redirect to.

use std::collections::HashSet;
use std::fmt;

/// Immutable set of domains accepted by the link creator.
///
/// Built once at startup from `ALLOWED_DOMAINS` and shared read-only by every
/// request. Matching is exact: no trimming, no case folding, no port or
/// subdomain handling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedDomains {
    domains: HashSet<String>,
}

impl AllowedDomains {
    /// Parses a comma-separated list.
    ///
    /// Entries are taken verbatim, so `"a.com, b.com"` allows `" b.com"` and
    /// not `"b.com"`.
    pub fn from_csv(raw: &str) -> Self {
        raw.split(',').collect()
    }

    /// Returns true if `domain` is exactly one of the configured entries.
    pub fn contains(&self, domain: &str) -> bool {
        self.domains.contains(domain)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for AllowedDomains {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            domains: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for AllowedDomains {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut domains: Vec<&str> = self.domains.iter().map(String::as_str).collect();
        domains.sort_unstable();
        write!(f, "[{}]", domains.join(", "))
    }
}
