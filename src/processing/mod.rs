//! Result set processing.
//!
//! - [`aggregate`] - Concurrent fetch and ordered merge of all sources
//! - [`sort`] - Canonical CIDR ordering

mod aggregate;
mod sort;

// Re-export public functions
pub use aggregate::{gather, merge_partials};
pub use sort::{compare_cidr, sort_key, CidrSortKey};
