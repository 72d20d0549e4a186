//! Generic BGP prefix search, used for providers without a published list
//! (DigitalOcean, OVH).

use super::http;
use crate::error::Result;
use crate::models::ResultSet;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
struct SearchResponse {
    data: SearchData,
}

#[derive(Deserialize, Debug)]
struct SearchData {
    ipv4_prefixes: Vec<Prefix>,
    ipv6_prefixes: Vec<Prefix>,
}

#[derive(Deserialize, Debug)]
struct Prefix {
    prefix: String,
}

/// Search `base_url` + `search` and tag every announced prefix with `search`.
///
/// The version record is the time of the query.
pub async fn fetch(client: &reqwest::Client, base_url: &str, search: &str) -> Result<ResultSet> {
    let url = format!("{base_url}{search}");
    let response: SearchResponse = http::get_json(client, &url).await?;
    Ok(collect(search, response, Utc::now()))
}

pub fn from_json(search: &str, body: &str, run_time: DateTime<Utc>) -> Result<ResultSet> {
    Ok(collect(search, http::parse_json(search, body)?, run_time))
}

fn collect(search: &str, response: SearchResponse, run_time: DateTime<Utc>) -> ResultSet {
    let mut rs = ResultSet::new();
    rs.set_version(search, run_time.format(crate::TIME_FORMAT).to_string());
    let data = response.data;
    for prefix in data.ipv4_prefixes.iter().chain(data.ipv6_prefixes.iter()) {
        rs.insert_cidr(&prefix.prefix, search);
    }
    rs
}
