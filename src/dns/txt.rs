//! TXT record lookups.

use crate::error::{Result, SourceError};
use async_trait::async_trait;
use hickory_resolver::TokioResolver;

/// Fetch the TXT record set for a DNS name.
///
/// Each returned string is one record with its character-strings joined.
#[async_trait]
pub trait TxtLookup: Send + Sync {
    async fn txt_records(&self, name: &str) -> Result<Vec<String>>;
}

/// [`TxtLookup`] backed by the system resolver configuration.
pub struct HickoryTxtLookup {
    resolver: TokioResolver,
}

impl HickoryTxtLookup {
    /// Create a lookup using `/etc/resolv.conf` (or the platform equivalent).
    pub fn from_system() -> Result<Self> {
        let resolver = TokioResolver::builder_tokio()
            .map_err(|e| SourceError::transport("system resolver", e))?
            .build();
        Ok(Self { resolver })
    }
}

#[async_trait]
impl TxtLookup for HickoryTxtLookup {
    async fn txt_records(&self, name: &str) -> Result<Vec<String>> {
        log::debug!("txt_lookup({name})");
        let lookup = self
            .resolver
            .txt_lookup(name)
            .await
            .map_err(|e| SourceError::transport(name, e))?;

        Ok(lookup
            .iter()
            .map(|txt| {
                txt.iter()
                    .map(|data| String::from_utf8_lossy(data).to_string())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .collect())
    }
}
