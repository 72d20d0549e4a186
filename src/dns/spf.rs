//! Recursive walk of SPF-style TXT records.
//!
//! Starting from a root name, every `include:` token is followed depth-first
//! and every `ip4:`/`ip6:` token is recorded for one provider. Only the first
//! record of each TXT set is walked.

use super::TxtLookup;
use crate::error::{Result, SourceError};
use crate::models::ResultSet;
use futures::future::{BoxFuture, FutureExt};
use std::collections::HashSet;

const INCLUDE: &str = "include:";
// "ip4:" and "ip6:" share the same length
const MECHANISM_PREFIX_LEN: usize = 4;

/// Walks a TXT include tree, tagging every network found with `provider`.
pub struct SpfWalker<'a> {
    lookup: &'a dyn TxtLookup,
    provider: String,
    max_depth: usize,
}

#[derive(Default)]
struct WalkState {
    path: Vec<String>,
    visited: HashSet<String>,
    out: ResultSet,
}

impl<'a> SpfWalker<'a> {
    pub fn new(lookup: &'a dyn TxtLookup, provider: &str, max_depth: usize) -> Self {
        Self {
            lookup,
            provider: provider.to_string(),
            max_depth,
        }
    }

    /// Resolve the tree rooted at `root` into a fresh [`ResultSet`].
    ///
    /// A name reached again through a second path is not queried twice. A
    /// name that includes itself, directly or further down, is an
    /// [`SourceError::IncludeCycle`]; a chain longer than `max_depth`
    /// includes is [`SourceError::DepthExceeded`].
    pub async fn resolve(&self, root: &str) -> Result<ResultSet> {
        let mut state = WalkState::default();
        self.walk(root, 0, &mut state).await?;
        log::info!(
            "resolved {} {} cidrs from {} TXT names under {root}",
            state.out.len(),
            self.provider,
            state.visited.len()
        );
        Ok(state.out)
    }

    fn walk<'s>(
        &'s self,
        name: &'s str,
        depth: usize,
        state: &'s mut WalkState,
    ) -> BoxFuture<'s, Result<()>> {
        async move {
            if state.path.iter().any(|p| p == name) {
                return Err(SourceError::IncludeCycle {
                    name: name.to_string(),
                });
            }
            if depth > self.max_depth {
                return Err(SourceError::DepthExceeded {
                    name: name.to_string(),
                    limit: self.max_depth,
                });
            }
            if !state.visited.insert(name.to_string()) {
                log::debug!("{name} already walked, skipping");
                return Ok(());
            }

            let records = self.lookup.txt_records(name).await?;
            let record = records
                .into_iter()
                .next()
                .ok_or_else(|| SourceError::NotFound {
                    what: format!("TXT record for {name}"),
                })?;
            log::trace!("{name} => {record}");

            state.path.push(name.to_string());
            for token in record.split_whitespace() {
                if token.contains(INCLUDE) {
                    match token.get(INCLUDE.len()..) {
                        Some(child) if !child.is_empty() => {
                            self.walk(child, depth + 1, state).await?;
                        }
                        _ => log::warn!("empty include in TXT record of {name}"),
                    }
                } else if token.contains("ip4") || token.contains("ip6") {
                    match token.get(MECHANISM_PREFIX_LEN..) {
                        Some(cidr) if !cidr.is_empty() => {
                            state.out.insert_cidr(cidr, &self.provider);
                        }
                        _ => log::warn!("empty {token} in TXT record of {name}"),
                    }
                }
            }
            state.path.pop();
            Ok(())
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory TXT zone that counts queries per name.
    struct FakeZone {
        records: HashMap<String, Vec<String>>,
        queries: Mutex<HashMap<String, usize>>,
    }

    impl FakeZone {
        fn new(records: &[(&str, &str)]) -> Self {
            let mut map: HashMap<String, Vec<String>> = HashMap::new();
            for (name, txt) in records {
                map.entry(name.to_string())
                    .or_default()
                    .push(txt.to_string());
            }
            Self {
                records: map,
                queries: Mutex::new(HashMap::new()),
            }
        }

        fn query_count(&self, name: &str) -> usize {
            *self.queries.lock().unwrap().get(name).unwrap_or(&0)
        }
    }

    #[async_trait]
    impl TxtLookup for FakeZone {
        async fn txt_records(&self, name: &str) -> Result<Vec<String>> {
            *self
                .queries
                .lock()
                .unwrap()
                .entry(name.to_string())
                .or_default() += 1;
            self.records
                .get(name)
                .cloned()
                .ok_or_else(|| SourceError::transport(name, "NXDOMAIN"))
        }
    }

    #[tokio::test]
    async fn test_flattens_include_tree() {
        let zone = FakeZone::new(&[
            ("root", "v=spf1 include:child ip4:1.2.3.0/24 ?all"),
            ("child", "v=spf1 ip4:4.5.6.0/24 ip6:2600:1900::/35 ?all"),
        ]);
        let rs = SpfWalker::new(&zone, "GCP", 10)
            .resolve("root")
            .await
            .unwrap();
        assert_eq!(rs.len(), 3);
        assert_eq!(rs.provider_of("1.2.3.0/24"), Some("GCP"));
        assert_eq!(rs.provider_of("4.5.6.0/24"), Some("GCP"));
        assert_eq!(rs.provider_of("2600:1900::/35"), Some("GCP"));
    }

    #[tokio::test]
    async fn test_second_path_not_duplicated() {
        let zone = FakeZone::new(&[
            ("root", "include:child include:other ip4:1.2.3.0/24"),
            ("other", "include:child ip4:7.7.7.0/24"),
            ("child", "ip4:4.5.6.0/24"),
        ]);
        let rs = SpfWalker::new(&zone, "GCP", 10)
            .resolve("root")
            .await
            .unwrap();
        assert_eq!(rs.len(), 3);
        assert_eq!(zone.query_count("child"), 1);
    }

    #[tokio::test]
    async fn test_only_first_record_walked() {
        let zone = FakeZone::new(&[("root", "ip4:1.0.0.0/8"), ("root", "ip4:2.0.0.0/8")]);
        let rs = SpfWalker::new(&zone, "GCP", 10)
            .resolve("root")
            .await
            .unwrap();
        assert_eq!(rs.len(), 1);
        assert_eq!(rs.provider_of("1.0.0.0/8"), Some("GCP"));
    }

    #[tokio::test]
    async fn test_self_include_is_cycle() {
        let zone = FakeZone::new(&[("root", "include:loop"), ("loop", "include:root")]);
        let err = SpfWalker::new(&zone, "GCP", 10)
            .resolve("root")
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::IncludeCycle { ref name } if name == "root"));
    }

    #[tokio::test]
    async fn test_depth_limit() {
        let zone = FakeZone::new(&[
            ("n0", "include:n1"),
            ("n1", "include:n2"),
            ("n2", "include:n3"),
            ("n3", "ip4:1.0.0.0/8"),
        ]);
        let err = SpfWalker::new(&zone, "GCP", 2)
            .resolve("n0")
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::DepthExceeded { ref name, limit: 2 } if name == "n3"));

        let rs = SpfWalker::new(&zone, "GCP", 3)
            .resolve("n0")
            .await
            .unwrap();
        assert_eq!(rs.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_name_fails() {
        let zone = FakeZone::new(&[("root", "include:gone ip4:1.0.0.0/8")]);
        let err = SpfWalker::new(&zone, "GCP", 10)
            .resolve("root")
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_empty_record_set() {
        let zone = FakeZone {
            records: HashMap::from([("root".to_string(), vec![])]),
            queries: Mutex::new(HashMap::new()),
        };
        let err = SpfWalker::new(&zone, "GCP", 10)
            .resolve("root")
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));
    }
}
