//! Error kinds raised while collecting CIDR ranges.
//!
//! None of these are fatal to a run: the aggregation step logs them and the
//! failing source simply contributes nothing.

use thiserror::Error;

/// Result type alias for source and resolver operations.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Errors that can occur while fetching or parsing a source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Connection failure, DNS lookup failure or non-2xx HTTP status.
    #[error("transport error for {target}: {reason}")]
    Transport {
        /// URL or DNS name that was queried
        target: String,
        /// What went wrong
        reason: String,
    },

    /// Response body did not have the expected shape.
    #[error("decode error for {target} at '{path}': {reason}")]
    Decode {
        /// URL the body came from
        target: String,
        /// JSON path of the offending field
        path: String,
        /// Parser message
        reason: String,
    },

    /// Literal is neither an IPv4 nor an IPv6 network.
    #[error("invalid CIDR literal: {literal}")]
    Validation {
        /// The rejected literal
        literal: String,
    },

    /// Expected resource was absent.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource
        what: String,
    },

    /// Local file exists but could not be read.
    #[error("error reading {path}: {source}")]
    Io {
        /// Path of the file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// TXT include chain went deeper than allowed.
    #[error("TXT include chain too deep at {name} (limit {limit})")]
    DepthExceeded {
        /// Name at which the limit was hit
        name: String,
        /// Configured maximum depth
        limit: usize,
    },

    /// TXT include chain refers back to a name already on the current path.
    #[error("TXT include cycle at {name}")]
    IncludeCycle {
        /// Name that closed the cycle
        name: String,
    },
}

impl SourceError {
    /// Build an I/O error, mapping `NotFound` to [`SourceError::NotFound`].
    pub fn io(path: &str, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound {
                what: format!("file {path}"),
            }
        } else {
            Self::Io {
                path: path.to_string(),
                source,
            }
        }
    }

    pub(crate) fn transport(target: &str, reason: impl ToString) -> Self {
        Self::Transport {
            target: target.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_not_found_maps_to_not_found() {
        let err = SourceError::io(
            "./missing_ips.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, SourceError::NotFound { .. }));
        assert_eq!(err.to_string(), "not found: file ./missing_ips.txt");
    }

    #[test]
    fn test_io_other_kept_as_io() {
        let err = SourceError::io(
            "./locked_ips.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[test]
    fn test_display_depth_exceeded() {
        let err = SourceError::DepthExceeded {
            name: "a.example".to_string(),
            limit: 3,
        };
        assert_eq!(
            err.to_string(),
            "TXT include chain too deep at a.example (limit 3)"
        );
    }
}
