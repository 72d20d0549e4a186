//! Aggregation of all sources into one [`ResultSet`].
//!
//! Sources are fetched concurrently, each into its own partial result. The
//! partials are merged afterwards in source order, so first-seen-wins is
//! decided by that order and not by which fetch finished first.

use crate::error::Result;
use crate::models::ResultSet;
use crate::sources::{FetchContext, Source};
use colored::Colorize;
use futures::future::join_all;

/// Fetch every source and merge the results in the order given.
pub async fn gather(sources: &[Source], ctx: &FetchContext) -> ResultSet {
    log::info!("#Start gather() from {} sources", sources.len());
    let partials = join_all(sources.iter().map(|s| s.fetch(ctx))).await;
    merge_partials(sources.iter().zip(partials))
}

/// Merge partial results in iteration order.
///
/// A failed source is reported and contributes nothing, its version record
/// included.
pub fn merge_partials<'a>(
    partials: impl IntoIterator<Item = (&'a Source, Result<ResultSet>)>,
) -> ResultSet {
    let mut rs = ResultSet::new();
    for (source, partial) in partials {
        match partial {
            Ok(partial) => {
                log::info!("{source}: {} cidrs", partial.len());
                rs.merge(partial);
            }
            Err(e) => {
                log::warn!(
                    "{failed} source {source}: {e}",
                    failed = "failed".on_red()
                );
            }
        }
    }
    log::info!("gathered {rs}");
    rs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;

    fn partial(label: &str, cidrs: &[&str], version: &str) -> ResultSet {
        let mut rs = ResultSet::new();
        for cidr in cidrs {
            rs.insert_cidr(cidr, label);
        }
        rs.set_version(label, version);
        rs
    }

    #[test]
    fn test_merge_order_decides_owner() {
        let aws = Source::Aws;
        let file = Source::File("alibaba".to_string());
        let rs = merge_partials(vec![
            (&aws, Ok(partial("AWS", &["47.89.85.0/24"], "v1"))),
            (
                &file,
                Ok(partial("alibaba", &["47.89.85.0/24", "47.74.192.0/18"], "f1")),
            ),
        ]);
        assert_eq!(rs.provider_of("47.89.85.0/24"), Some("AWS"));
        assert_eq!(rs.provider_of("47.74.192.0/18"), Some("alibaba"));
        assert_eq!(rs.version("ALIBABA"), Some("f1"));
    }

    #[test]
    fn test_failed_source_contributes_nothing() {
        let aws = Source::Aws;
        let gcp = Source::Gcp;
        let rs = merge_partials(vec![
            (
                &aws,
                Err(SourceError::Transport {
                    target: "aws".to_string(),
                    reason: "HTTP status 503".to_string(),
                }),
            ),
            (&gcp, Ok(partial("GCP", &["34.0.0.0/15"], "now"))),
        ]);
        assert_eq!(rs.len(), 1);
        assert_eq!(rs.version("AWS"), None);
        assert_eq!(rs.version_count(), 1);
    }

    #[test]
    fn test_refeed_does_not_change_owner() {
        let gcp = Source::Gcp;
        let oracle = Source::Oracle;
        let first = partial("GCP", &["8.8.8.0/24"], "a");
        let again = partial("Oracle", &["8.8.8.0/24"], "b");
        let rs = merge_partials(vec![(&gcp, Ok(first)), (&oracle, Ok(again))]);
        assert_eq!(rs.provider_of("8.8.8.0/24"), Some("GCP"));
        assert_eq!(rs.len(), 1);
    }
}
