//! Plain text report grouped by provider.
//!
//! ```text
//! # Start run 2024/10/16 08:30:00
//! # AWS Start Versiondata: 2024-10-15-22-27-14 1729031234
//! 3.0.0.0/15
//! ...
//! # AWS End
//! # End run 2024/10/16 08:30:12
//! ```

use crate::models::ResultSet;
use crate::processing::compare_cidr;
use chrono::{DateTime, Utc};
use itertools::Itertools;
use std::io::{self, Write};

/// CIDR literals listed in the block for `provider`, in canonical order.
///
/// A literal is listed when its owner label *contains* `provider`, so a
/// label `digitalocean` also shows up in an `ocean` block.
pub fn provider_cidrs<'a>(rs: &'a ResultSet, provider: &str) -> Vec<&'a str> {
    rs.iter()
        .filter(|(_, owner)| owner.contains(provider))
        .map(|(cidr, _)| cidr)
        .sorted_by(|a, b| compare_cidr(a, b))
        .collect()
}

/// Write the full report with explicit start and end times.
pub fn write_report<W: Write>(
    out: &mut W,
    rs: &ResultSet,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> io::Result<()> {
    writeln!(out, "# Start run {}", start.format(crate::TIME_FORMAT))?;
    for provider in rs.providers() {
        match rs.version(provider) {
            Some(version) => writeln!(out, "# {provider} Start Versiondata: {version}")?,
            None => writeln!(out, "# {provider} Start")?,
        }
        for cidr in provider_cidrs(rs, provider) {
            writeln!(out, "{cidr}")?;
        }
        writeln!(out, "# {provider} End")?;
    }
    writeln!(out, "# End run {}", end.format(crate::TIME_FORMAT))?;
    Ok(())
}

/// Print the report to stdout, stamping the end of the run with the current time.
pub fn print_report(rs: &ResultSet, start: DateTime<Utc>) -> io::Result<()> {
    log::info!("#Start print_report() {rs}");
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_report(&mut out, rs, start, Utc::now())?;
    out.flush()
}
