//! Domain models for the cloud IP range report.
//!
//! - [`check_cidr`] - CIDR literal validation
//! - [`ResultSet`] - CIDR to provider mapping with provider version records

mod cidr;
mod result_set;

// Re-export public types
pub use cidr::{check_cidr, is_valid_cidr};
pub use result_set::ResultSet;
