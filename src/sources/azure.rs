//! Azure service tags.
//!
//! The JSON file name changes weekly, so the current link is scraped from the
//! public download confirmation page first. Ranges tagged
//! `WindowsVirtualDesktop` are skipped as they are really desktops.

use super::http;
use crate::error::{Result, SourceError};
use crate::models::ResultSet;
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

pub const LABEL: &str = "Azure";
const EXCLUDED_SERVICE: &str = "WindowsVirtualDesktop";

static DOWNLOAD_LINK_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_download_link_regex() -> &'static Regex {
    DOWNLOAD_LINK_REGEX.get_or_init(|| {
        Regex::new(r#"(https://download\.microsoft\.com/download/.+json)","#)
            .expect("Invalid Regex")
    })
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ServiceTags {
    change_number: serde_json::Value,
    values: Vec<ServiceTag>,
}

#[derive(Deserialize, Debug)]
struct ServiceTag {
    properties: ServiceTagProperties,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ServiceTagProperties {
    #[serde(default)]
    system_service: String,
    address_prefixes: Vec<String>,
}

/// Find the service tags JSON link in the download portal page.
pub fn extract_download_url(page: &str) -> Result<String> {
    get_download_link_regex()
        .captures(page)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| SourceError::NotFound {
            what: "service tags link in Azure download page".to_string(),
        })
}

/// Resolve the current JSON link from `portal_url`, then collect its ranges.
pub async fn fetch(client: &reqwest::Client, portal_url: &str) -> Result<ResultSet> {
    let page = http::get_text(client, portal_url).await?;
    let url = extract_download_url(&page)?;
    log::info!("Azure service tags at {url}");
    let tags: ServiceTags = http::get_json(client, &url).await?;
    Ok(collect(tags))
}

/// Parse a `ServiceTags_Public_*.json` body.
pub fn from_json(body: &str) -> Result<ResultSet> {
    Ok(collect(http::parse_json(LABEL, body)?))
}

fn collect(tags: ServiceTags) -> ResultSet {
    let mut rs = ResultSet::new();
    let change_number = match tags.change_number {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    };
    rs.set_version(LABEL, change_number);
    for tag in tags
        .values
        .iter()
        .filter(|t| t.properties.system_service != EXCLUDED_SERVICE)
    {
        for cidr in &tag.properties.address_prefixes {
            rs.insert_cidr(cidr, LABEL);
        }
    }
    rs
}
