//! Provider range sources.
//!
//! Each source produces its own partial [`ResultSet`]:
//! - [`aws`] - AWS `ip-ranges.json`
//! - [`azure`] - Azure service tags, via the download portal
//! - [`gcp`] - Google Cloud, via DNS TXT records
//! - [`oracle`] - Oracle Cloud public ranges JSON
//! - [`bgp`] - BGP prefix search by name
//! - [`file`] - Curated local list

pub mod aws;
pub mod azure;
pub mod bgp;
pub mod file;
pub mod gcp;
pub mod http;
pub mod oracle;

use crate::config::Config;
use crate::dns::TxtLookup;
use crate::error::{Result, SourceError};
use crate::models::ResultSet;
use std::fmt;

/// One place CIDR ranges are collected from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Aws,
    Azure,
    Gcp,
    Oracle,
    /// BGP search, the term doubles as provider label.
    Bgp(String),
    /// Local `<provider>_ips.txt`.
    File(String),
}

/// Everything a source needs to fetch.
pub struct FetchContext {
    pub client: reqwest::Client,
    /// `None` when no DNS resolver could be set up.
    pub txt: Option<Box<dyn TxtLookup>>,
    pub config: Config,
}

impl Source {
    /// Provider label the source tags its ranges with.
    pub fn label(&self) -> &str {
        match self {
            Source::Aws => aws::LABEL,
            Source::Azure => azure::LABEL,
            Source::Gcp => gcp::LABEL,
            Source::Oracle => oracle::LABEL,
            Source::Bgp(search) => search.as_str(),
            Source::File(provider) => provider.as_str(),
        }
    }

    /// Fetch this source into a fresh partial result.
    pub async fn fetch(&self, ctx: &FetchContext) -> Result<ResultSet> {
        let config = &ctx.config;
        match self {
            Source::Aws => aws::fetch(&ctx.client, &config.aws_url).await,
            Source::Azure => azure::fetch(&ctx.client, &config.azure_download_url).await,
            Source::Gcp => {
                let txt = ctx.txt.as_deref().ok_or_else(|| SourceError::NotFound {
                    what: "DNS resolver".to_string(),
                })?;
                gcp::fetch(txt, &config.gcp_root, config.dns_max_depth).await
            }
            Source::Oracle => oracle::fetch(&ctx.client, &config.oracle_url).await,
            Source::Bgp(search) => bgp::fetch(&ctx.client, &config.bgp_search_url, search).await,
            Source::File(provider) => file::fetch(&config.data_dir, provider),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Bgp(search) => write!(f, "bgp:{search}"),
            Source::File(provider) => write!(f, "file:{provider}"),
            other => write!(f, "{}", other.label()),
        }
    }
}

/// Sources in merge order; earlier sources win duplicate literals.
pub fn default_sources() -> Vec<Source> {
    vec![
        Source::Aws,
        Source::Azure,
        Source::Gcp,
        Source::Oracle,
        Source::Bgp("digitalocean".to_string()),
        Source::Bgp("ovh".to_string()),
        Source::File("alibaba".to_string()),
    ]
}
