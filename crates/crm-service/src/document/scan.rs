//! Virus scanning seam.

use async_trait::async_trait;

use crm_core::result::AppResult;
use crm_entity::document::VirusScanStatus;

/// Scans uploaded content for threats.
///
/// The trait exists so a real scanner can be wired in later; the service
/// only depends on the verdict.
#[async_trait]
pub trait VirusScanner: Send + Sync {
    /// Scan the given content and return a verdict.
    async fn scan(&self, content: &[u8]) -> AppResult<VirusScanStatus>;
}

/// Placeholder scanner that reports every file as clean.
#[derive(Debug, Clone, Default)]
pub struct StubVirusScanner;

#[async_trait]
impl VirusScanner for StubVirusScanner {
    async fn scan(&self, _content: &[u8]) -> AppResult<VirusScanStatus> {
        Ok(VirusScanStatus::Clean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_scanner_always_clean() {
        let scanner = StubVirusScanner;
        assert_eq!(
            scanner.scan(b"anything at all").await.unwrap(),
            VirusScanStatus::Clean
        );
    }
}
