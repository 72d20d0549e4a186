//! Aggregated CIDR to provider mapping plus provider version records.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// CIDR literals keyed to the provider that claimed them first, together with
/// one free-form version string per provider.
///
/// Both maps are append-if-absent: once a literal (exact string) or a version
/// key is present, later writes are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResultSet {
    cidrs: HashMap<String, String>,
    versions: HashMap<String, String>,
}

impl ResultSet {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `cidr` as owned by `provider` unless some provider already claimed it.
    ///
    /// Returns `true` if the literal was inserted.
    pub fn insert_cidr(&mut self, cidr: &str, provider: &str) -> bool {
        if self.cidrs.contains_key(cidr) {
            log::trace!(
                "skip {cidr} for {provider}, already owned by {}",
                self.cidrs[cidr]
            );
            return false;
        }
        self.cidrs.insert(cidr.to_string(), provider.to_string());
        true
    }

    /// Set the version string for `provider` (key is upper-cased) unless one exists.
    ///
    /// Returns `true` if the version was stored.
    pub fn set_version(&mut self, provider: &str, version: impl Into<String>) -> bool {
        let key = provider.to_uppercase();
        if self.versions.contains_key(&key) {
            return false;
        }
        self.versions.insert(key, version.into());
        true
    }

    /// Version string for `provider`, matched case-insensitively.
    pub fn version(&self, provider: &str) -> Option<&str> {
        self.versions
            .get(&provider.to_uppercase())
            .map(String::as_str)
    }

    /// Provider owning `cidr`, if any.
    pub fn provider_of(&self, cidr: &str) -> Option<&str> {
        self.cidrs.get(cidr).map(String::as_str)
    }

    /// Iterate over `(cidr, provider)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cidrs.iter().map(|(c, p)| (c.as_str(), p.as_str()))
    }

    /// Distinct provider labels in lexicographic order.
    pub fn providers(&self) -> BTreeSet<&str> {
        self.cidrs.values().map(String::as_str).collect()
    }

    /// Number of CIDR literals.
    pub fn len(&self) -> usize {
        self.cidrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cidrs.is_empty()
    }

    /// Number of version records.
    pub fn version_count(&self) -> usize {
        self.versions.len()
    }

    /// Fold `other` into `self` with the same first-seen-wins rule.
    ///
    /// Literals within one partial are unique, so the iteration order of
    /// `other` does not affect the outcome.
    pub fn merge(&mut self, other: ResultSet) {
        let before = self.len();
        for (cidr, provider) in other.cidrs {
            if !self.cidrs.contains_key(&cidr) {
                self.cidrs.insert(cidr, provider);
            }
        }
        for (key, version) in other.versions {
            self.versions.entry(key).or_insert(version);
        }
        log::debug!("merge added {} cidrs => {}", self.len() - before, self.len());
    }
}

impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ResultSet ({} cidrs, {} providers, {} versions)",
            self.cidrs.len(),
            self.providers().len(),
            self.versions.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_wins() {
        let mut rs = ResultSet::new();
        assert!(rs.insert_cidr("47.89.85.0/24", "AWS"));
        assert!(!rs.insert_cidr("47.89.85.0/24", "alibaba"));
        assert_eq!(rs.provider_of("47.89.85.0/24"), Some("AWS"));
        assert_eq!(rs.len(), 1);
    }

    #[test]
    fn test_overlapping_literals_both_kept() {
        let mut rs = ResultSet::new();
        rs.insert_cidr("10.0.0.0/16", "AWS");
        rs.insert_cidr("10.0.1.0/24", "Azure");
        assert_eq!(rs.len(), 2);
        assert_eq!(rs.provider_of("10.0.1.0/24"), Some("Azure"));
    }

    #[test]
    fn test_version_set_once_and_upper_cased() {
        let mut rs = ResultSet::new();
        assert!(rs.set_version("Azure", "42"));
        assert!(!rs.set_version("AZURE", "43"));
        assert_eq!(rs.version("azure"), Some("42"));
        assert_eq!(rs.version_count(), 1);
    }

    #[test]
    fn test_providers_sorted_distinct() {
        let mut rs = ResultSet::new();
        rs.insert_cidr("3.0.0.0/8", "ovh");
        rs.insert_cidr("1.0.0.0/8", "AWS");
        rs.insert_cidr("2.0.0.0/8", "ovh");
        let providers: Vec<&str> = rs.providers().into_iter().collect();
        assert_eq!(providers, vec!["AWS", "ovh"]);
    }

    #[test]
    fn test_merge_keeps_existing() {
        let mut rs = ResultSet::new();
        rs.insert_cidr("1.2.3.0/24", "AWS");
        rs.set_version("AWS", "v1");

        let mut other = ResultSet::new();
        other.insert_cidr("1.2.3.0/24", "GCP");
        other.insert_cidr("4.5.6.0/24", "GCP");
        other.set_version("AWS", "v2");
        other.set_version("GCP", "now");

        rs.merge(other);
        assert_eq!(rs.provider_of("1.2.3.0/24"), Some("AWS"));
        assert_eq!(rs.provider_of("4.5.6.0/24"), Some("GCP"));
        assert_eq!(rs.version("AWS"), Some("v1"));
        assert_eq!(rs.version("GCP"), Some("now"));
    }
}
