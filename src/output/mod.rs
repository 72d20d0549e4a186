//! Output formatting for the gathered ranges.
//!
//! - [`report`] - Provider grouped text report

mod report;

pub use report::{print_report, provider_cidrs, write_report};
