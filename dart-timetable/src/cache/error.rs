//! Local cache error types.

use std::path::PathBuf;

/// Errors from the local cache.
///
/// Read-side problems (a missing key, an entry that no longer decodes) are
/// not errors; they read as a miss. Only writes and opening the backing
/// file can fail.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Value could not be encoded as JSON
    #[error("failed to serialize value for key {key:?}: {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Backing file could not be read or written
    #[error("cache I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backing file exists but is not a JSON object of strings
    #[error("cache file {} is corrupt: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CacheError::Io {
            path: PathBuf::from("/tmp/dart.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "cache I/O error on /tmp/dart.json: denied");

        let source = serde_json::from_str::<u8>("nope").unwrap_err();
        let err = CacheError::Serialization {
            key: "recent".into(),
            source,
        };
        assert!(err.to_string().starts_with("failed to serialize value for key \"recent\""));
    }
}
