use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Writes files straight to the local filesystem.
///
/// Existing files are overwritten. Parent directories are not created, so a
/// missing directory surfaces as an IO error.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        tokio::fs::write(path, data).await?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), path);
        Ok(())
    }
}
