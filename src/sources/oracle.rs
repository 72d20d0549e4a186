//! Oracle Cloud public IP ranges.

use super::http;
use crate::error::Result;
use crate::models::ResultSet;
use serde::Deserialize;

pub const LABEL: &str = "Oracle";

#[derive(Deserialize, Debug)]
struct OracleIpRanges {
    last_updated_timestamp: String,
    regions: Vec<OracleRegion>,
}

#[derive(Deserialize, Debug)]
struct OracleRegion {
    cidrs: Vec<OracleCidr>,
}

#[derive(Deserialize, Debug)]
struct OracleCidr {
    cidr: String,
}

pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<ResultSet> {
    let ranges: OracleIpRanges = http::get_json(client, url).await?;
    Ok(collect(ranges))
}

pub fn from_json(body: &str) -> Result<ResultSet> {
    Ok(collect(http::parse_json(LABEL, body)?))
}

fn collect(ranges: OracleIpRanges) -> ResultSet {
    let mut rs = ResultSet::new();
    rs.set_version(LABEL, ranges.last_updated_timestamp);
    for cidr in ranges.regions.iter().flat_map(|r| r.cidrs.iter()) {
        rs.insert_cidr(&cidr.cidr, LABEL);
    }
    rs
}
