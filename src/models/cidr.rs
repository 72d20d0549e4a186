//! CIDR literal validation.
//!
//! Provides [`check_cidr`] which accepts an IPv4 or IPv6 network literal,
//! trying IPv4 first.

use crate::error::{Result, SourceError};
use ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};
use std::str::FromStr;

/// Check that `cidr` is a well formed IPv4 or IPv6 network block.
///
/// Host bits must be zero (`10.0.0.1/8` is rejected). A literal without a
/// prefix length is a single-host network.
///
/// # Examples
/// ```
/// use cloud_ip_ranges::models::check_cidr;
/// assert!(check_cidr("10.0.0.0/8").is_ok());
/// assert!(check_cidr("2001:db8::/32").is_ok());
/// assert!(check_cidr("not-a-cidr").is_err());
/// ```
pub fn check_cidr(cidr: &str) -> Result<IpNetwork> {
    if let Ok(net) = Ipv4Network::from_str(cidr) {
        if net.network() == net.ip() {
            return Ok(IpNetwork::V4(net));
        }
    } else if let Ok(net) = Ipv6Network::from_str(cidr) {
        if net.network() == net.ip() {
            return Ok(IpNetwork::V6(net));
        }
    }
    log::debug!("Exception in {cidr}");
    Err(SourceError::Validation {
        literal: cidr.to_string(),
    })
}

/// Convenience wrapper returning only the validity signal.
pub fn is_valid_cidr(cidr: &str) -> bool {
    check_cidr(cidr).is_ok()
}
