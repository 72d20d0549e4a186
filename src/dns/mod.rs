//! DNS TXT resolution.
//!
//! - [`txt`] - TXT lookup seam and the hickory backed implementation
//! - [`spf`] - Recursive `include:`/`ip4:`/`ip6:` walker

mod spf;
mod txt;

pub use spf::SpfWalker;
pub use txt::{HickoryTxtLookup, TxtLookup};
