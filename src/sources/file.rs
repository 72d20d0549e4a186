//! Curated local list, `<provider>_ips.txt`.
//!
//! One CIDR per line. Lines starting with `#` are appended to the provider's
//! version string; blank lines and invalid networks are reported and skipped.

use crate::error::{Result, SourceError};
use crate::models::{check_cidr, ResultSet};
use chrono::{DateTime, Utc};
use colored::Colorize;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Path of the list for `provider` inside `data_dir`.
pub fn provider_file(data_dir: &str, provider: &str) -> String {
    Path::new(data_dir)
        .join(format!("{provider}_ips.txt"))
        .display()
        .to_string()
}

/// Read `<data_dir>/<provider>_ips.txt`.
///
/// The version string is `<size> Size <mtime> modified <sha256>` followed by
/// every comment line.
pub fn fetch(data_dir: &str, provider: &str) -> Result<ResultSet> {
    let filename = provider_file(data_dir, provider);
    let bytes = std::fs::read(&filename).map_err(|e| SourceError::io(&filename, e))?;
    let metadata = std::fs::metadata(&filename).map_err(|e| SourceError::io(&filename, e))?;
    let modified: DateTime<Utc> = metadata
        .modified()
        .map_err(|e| SourceError::io(&filename, e))?
        .into();
    let text = String::from_utf8_lossy(&bytes);

    let mut version = format!(
        "{} Size {} modified {}",
        metadata.len(),
        modified.format("%Y-%m-%dT%H:%M:%SZ"),
        sha256_hex(&bytes)
    );
    let mut rs = ResultSet::new();

    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.starts_with('#') {
            version.push(' ');
            version.push_str(line);
        } else if line.is_empty() {
            log::warn!("{filename}:{} empty line skipped", n + 1);
        } else {
            match check_cidr(line) {
                Ok(_) => {
                    rs.insert_cidr(line, provider);
                }
                Err(e) => log::warn!(
                    "{filename}:{} {}: {e}",
                    n + 1,
                    "Error in CIDR range".red()
                ),
            }
        }
    }

    log::info!("read {} cidrs for {provider} from {filename}", rs.len());
    rs.set_version(provider, version);
    Ok(rs)
}

fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}
