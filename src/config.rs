//! Endpoints and limits, with optional environment overrides.
//!
//! Overrides are read after `.env` has been loaded by `main`.

use std::env;
use std::time::Duration;

pub const AWS_API_URL: &str = "https://ip-ranges.amazonaws.com/ip-ranges.json";
pub const AZURE_DOWNLOAD_URL: &str =
    "https://www.microsoft.com/en-us/download/confirmation.aspx?id=56519";
pub const ORACLE_API_URL: &str =
    "https://docs.cloud.oracle.com/en-us/iaas/tools/public_ip_ranges.json";
pub const GCP_ROOT: &str = "_cloud-netblocks.googleusercontent.com";
/// BGP prefix search, the search term is appended.
pub const BGP_SEARCH_URL: &str = "https://api.bgpview.io/search?query_term=";
pub const DATA_DIR: &str = ".";
/// Maximum `include:` nesting below the GCP root.
pub const DNS_MAX_DEPTH: usize = 10;
pub const HTTP_TIMEOUT_SECS: u64 = 60;

/// Runtime configuration for all sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub aws_url: String,
    pub azure_download_url: String,
    pub oracle_url: String,
    pub bgp_search_url: String,
    pub gcp_root: String,
    /// Directory holding `<provider>_ips.txt` files.
    pub data_dir: String,
    pub dns_max_depth: usize,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            aws_url: AWS_API_URL.to_string(),
            azure_download_url: AZURE_DOWNLOAD_URL.to_string(),
            oracle_url: ORACLE_API_URL.to_string(),
            bgp_search_url: BGP_SEARCH_URL.to_string(),
            gcp_root: GCP_ROOT.to_string(),
            data_dir: DATA_DIR.to_string(),
            dns_max_depth: DNS_MAX_DEPTH,
            http_timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Defaults overridden by any `CLOUD_IPS_*` variables in the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();
        let set = |target: &mut String, key: &str| {
            if let Some(value) = lookup(key) {
                log::info!("config {key}={value}");
                *target = value;
            }
        };
        set(&mut config.aws_url, "CLOUD_IPS_AWS_URL");
        set(&mut config.azure_download_url, "CLOUD_IPS_AZURE_PORTAL_URL");
        set(&mut config.oracle_url, "CLOUD_IPS_ORACLE_URL");
        set(&mut config.bgp_search_url, "CLOUD_IPS_BGP_URL");
        set(&mut config.gcp_root, "CLOUD_IPS_GCP_ROOT");
        set(&mut config.data_dir, "CLOUD_IPS_DATA_DIR");

        if let Some(depth) = lookup("CLOUD_IPS_DNS_MAX_DEPTH") {
            match depth.parse() {
                Ok(depth) => config.dns_max_depth = depth,
                Err(e) => log::warn!("ignoring CLOUD_IPS_DNS_MAX_DEPTH={depth}: {e}"),
            }
        }
        if let Some(secs) = lookup("CLOUD_IPS_HTTP_TIMEOUT_SECS") {
            match secs.parse() {
                Ok(secs) => config.http_timeout = Duration::from_secs(secs),
                Err(e) => log::warn!("ignoring CLOUD_IPS_HTTP_TIMEOUT_SECS={secs}: {e}"),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_no_overrides_is_default() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }

    #[test]
    fn test_overrides() {
        let vars = HashMap::from([
            ("CLOUD_IPS_AWS_URL", "http://127.0.0.1:9/aws.json"),
            ("CLOUD_IPS_DATA_DIR", "/tmp/ips"),
            ("CLOUD_IPS_DNS_MAX_DEPTH", "3"),
            ("CLOUD_IPS_HTTP_TIMEOUT_SECS", "nope"),
        ]);
        let config = Config::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.aws_url, "http://127.0.0.1:9/aws.json");
        assert_eq!(config.data_dir, "/tmp/ips");
        assert_eq!(config.dns_max_depth, 3);
        assert_eq!(config.http_timeout, Duration::from_secs(HTTP_TIMEOUT_SECS));
        assert_eq!(config.gcp_root, GCP_ROOT);
    }
}
