//! Canonical ordering of CIDR literals.
//!
//! Larger networks (shorter prefix) come first, then ascending by address.
//! `1.2.3.0/24` sorts after `1.2.0.0/16`.

use std::cmp::Ordering;

/// Sort key for a CIDR literal.
///
/// Parsed keys compare as `(prefix, components...)` tuples so IPv4 keys
/// `(n, a, b, c, d)` and IPv6 keys `(n, h0, h1, h2)` interleave by prefix
/// length. Literals that do not fit their family's rule sort after every
/// parsed key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum CidrSortKey {
    Parsed { prefix: u32, parts: Vec<u32> },
    Malformed,
}

/// Build the sort key for `cidr`. A missing prefix length counts as 0.
pub fn sort_key(cidr: &str) -> CidrSortKey {
    let (addr, prefix) = match cidr.split_once('/') {
        Some((addr, prefix)) => (addr, prefix),
        None => (cidr, ""),
    };
    let prefix = if prefix.is_empty() {
        Some(0)
    } else {
        prefix.parse::<u32>().ok()
    };

    let parts = if addr.contains('.') {
        ipv4_parts(addr)
    } else if addr.contains(':') {
        ipv6_parts(addr)
    } else {
        None
    };

    match (prefix, parts) {
        (Some(prefix), Some(parts)) => CidrSortKey::Parsed { prefix, parts },
        _ => CidrSortKey::Malformed,
    }
}

fn ipv4_parts(addr: &str) -> Option<Vec<u32>> {
    let parts: Vec<u32> = addr
        .split('.')
        .map(|p| p.parse::<u32>().ok())
        .collect::<Option<_>>()?;
    (parts.len() == 4).then_some(parts)
}

// First three hextets only; an empty hextet from `::` counts as 0.
fn ipv6_parts(addr: &str) -> Option<Vec<u32>> {
    let mut hextets = addr.split(':');
    let mut parts = Vec::with_capacity(3);
    for _ in 0..3 {
        let h = hextets.next().unwrap_or("");
        if h.is_empty() {
            parts.push(0);
        } else if h.len() <= 4 {
            parts.push(u32::from_str_radix(h, 16).ok()?);
        } else {
            return None;
        }
    }
    Some(parts)
}

/// Total order over CIDR literals: sort key first, literal text as tie-break.
pub fn compare_cidr(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b)).then_with(|| a.cmp(b))
}
