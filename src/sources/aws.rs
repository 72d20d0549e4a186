//! AWS published ranges.
//!
//! See <https://docs.aws.amazon.com/general/latest/gr/aws-ip-ranges.html>.

use super::http;
use crate::error::Result;
use crate::models::ResultSet;
use serde::Deserialize;

pub const LABEL: &str = "AWS";

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct AwsIpRanges {
    sync_token: String,
    create_date: String,
    prefixes: Vec<AwsIpv4Prefix>,
    #[serde(rename = "ipv6_prefixes")]
    ipv6_prefixes: Vec<AwsIpv6Prefix>,
}

#[derive(Deserialize, Debug)]
struct AwsIpv4Prefix {
    ip_prefix: String,
}

#[derive(Deserialize, Debug)]
struct AwsIpv6Prefix {
    ipv6_prefix: String,
}

/// Download `ip-ranges.json` and collect every IPv4 then IPv6 prefix.
pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<ResultSet> {
    let ranges: AwsIpRanges = http::get_json(client, url).await?;
    Ok(collect(ranges))
}

/// Parse an `ip-ranges.json` body.
pub fn from_json(body: &str) -> Result<ResultSet> {
    Ok(collect(http::parse_json(LABEL, body)?))
}

fn collect(ranges: AwsIpRanges) -> ResultSet {
    let mut rs = ResultSet::new();
    rs.set_version(
        LABEL,
        format!("{} {}", ranges.create_date, ranges.sync_token),
    );
    let ipv4 = ranges.prefixes.iter().map(|p| p.ip_prefix.as_str());
    let ipv6 = ranges.ipv6_prefixes.iter().map(|p| p.ipv6_prefix.as_str());
    for cidr in ipv4.chain(ipv6) {
        rs.insert_cidr(cidr, LABEL);
    }
    rs
}
