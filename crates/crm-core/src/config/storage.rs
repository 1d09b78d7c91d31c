//! Document storage configuration.

use serde::{Deserialize, Serialize};

/// Document storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for stored documents. Each customer gets a
    /// subdirectory keyed by customer id.
    #[serde(default = "default_document_root")]
    pub document_root: String,
    /// Maximum accepted upload size in bytes (default 10 MiB).
    #[serde(default = "default_max_file_size")]
    pub max_file_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            document_root: default_document_root(),
            max_file_size_bytes: default_max_file_size(),
        }
    }
}

fn default_document_root() -> String {
    "./storage/documents".to_string()
}

fn default_max_file_size() -> u64 {
    10 * 1024 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.document_root, "./storage/documents");
        assert_eq!(config.max_file_size_bytes, 10_485_760);
    }
}
