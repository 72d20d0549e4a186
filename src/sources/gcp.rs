//! Google Cloud ranges, published as an SPF-style TXT tree in DNS.
//!
//! See <https://cloud.google.com/compute/docs/faq#find_ip_range>.

use crate::dns::{SpfWalker, TxtLookup};
use crate::error::Result;
use crate::models::ResultSet;
use chrono::Utc;

pub const LABEL: &str = "GCP";

/// Walk the TXT tree under `root`. The version record is the time of the run.
pub async fn fetch(lookup: &dyn TxtLookup, root: &str, max_depth: usize) -> Result<ResultSet> {
    let mut rs = SpfWalker::new(lookup, LABEL, max_depth)
        .resolve(root)
        .await?;
    rs.set_version(LABEL, Utc::now().format(crate::TIME_FORMAT).to_string());
    Ok(rs)
}
