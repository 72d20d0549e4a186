// cargo watch -x 'fmt' -x 'run'  // 'run -- -v'

//! Gather the IP ranges of public cloud providers into one report.
//!
//! AWS, Azure and Oracle publish JSON files, GCP publishes an SPF-style TXT
//! tree in DNS, DigitalOcean and OVH come from a BGP prefix search and Alibaba
//! from a curated local file. Every CIDR literal is reported once, under the
//! first source that claimed it.

pub mod cli;
pub mod config;
pub mod dns;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod sources;

use chrono::Utc;
use cli::Cli;
use config::Config;
use dns::{HickoryTxtLookup, TxtLookup};
use sources::{default_sources, http::build_client, FetchContext};
use std::error::Error;

/// Timestamp format used in run markers and run-time version records.
pub const TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Build the fetch context from `config`.
///
/// A missing DNS resolver only disables the GCP source.
pub fn fetch_context(config: Config) -> Result<FetchContext, Box<dyn Error>> {
    let client = build_client(config.http_timeout)?;
    let txt: Option<Box<dyn TxtLookup>> = match HickoryTxtLookup::from_system() {
        Ok(lookup) => Some(Box::new(lookup) as Box<dyn TxtLookup>),
        Err(e) => {
            log::warn!("no DNS resolver: {e}");
            None
        }
    };
    Ok(FetchContext {
        client,
        txt,
        config,
    })
}

/// Gather all sources and print the report to stdout.
///
/// Individual source failures are logged and never fail the run.
pub async fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let start = Utc::now();
    log::debug!("{cli:?}");

    let ctx = fetch_context(Config::from_env())?;
    let rs = processing::gather(&default_sources(), &ctx).await;
    output::print_report(&rs, start)?;

    log::info!("#End run() in {}s", (Utc::now() - start).num_seconds());
    Ok(())
}
