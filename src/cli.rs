//! Command-line arguments.

use clap::Parser;

/// Get public cloud IP addresses in CIDR form
///
/// Collects the ranges published by AWS, Azure, GCP, Oracle, DigitalOcean,
/// OVH and a local Alibaba list, and prints one sorted report per provider.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Modify output verbosity
    #[arg(short, long)]
    pub verbose: bool,
}
