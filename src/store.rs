use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shareable handle to the backing file, for use across async handlers
///
/// The listener handles requests concurrently, so reads take a shared lock
/// and writes an exclusive one to keep whole-file overwrites from
/// interleaving with reads.
#[derive(Clone)]
pub struct FileStore {
    path: Arc<PathBuf>,
    lock: Arc<RwLock<()>>,
}

impl FileStore {
    /// Create a store around the given backing file path
    ///
    /// The file is not created or touched here; it comes into existence
    /// on the first successful [`save`](Self::save).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            lock: Arc::new(RwLock::new(())),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored document as raw bytes
    ///
    /// # Returns
    /// * `Ok(Some(bytes))` - File exists and is non-empty
    /// * `Ok(None)` - File is absent or empty (nothing stored yet)
    /// * `Err(_)` - File exists but could not be read
    ///
    /// The bytes are returned verbatim; content is not re-validated on read.
    pub async fn load(&self) -> Result<Option<Vec<u8>>> {
        let _guard = self.lock.read().await;

        match tokio::fs::read(self.path.as_ref()).await {
            Ok(bytes) if bytes.is_empty() => Ok(None),
            Ok(bytes) => {
                tracing::debug!("Read {} bytes from {}", bytes.len(), self.path.display());
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(anyhow::Error::new(e).context(format!(
                "Failed to read data file {}",
                self.path.display()
            ))),
        }
    }

    /// Overwrite the stored document with the given JSON value
    ///
    /// The whole file is replaced with the pretty-printed (2-space indent)
    /// representation of `value`; there is no merge. A crash mid-write can
    /// leave the file truncated.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails; on a
    /// serialization failure the file is left untouched.
    pub async fn save(&self, value: &JsonValue) -> Result<()> {
        let pretty = serde_json::to_string_pretty(value)
            .context("Failed to serialize JSON data")?;

        let _guard = self.lock.write().await;

        tokio::fs::write(self.path.as_ref(), pretty.as_bytes())
            .await
            .with_context(|| {
                format!("Failed to write data file {}", self.path.display())
            })?;

        tracing::debug!("Wrote {} bytes to {}", pretty.len(), self.path.display());
        Ok(())
    }

    /// Verify that the directory holding the backing file is accessible
    ///
    /// The file itself may legitimately be absent, so the check targets its
    /// parent directory instead.
    pub async fn health_check(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let meta = tokio::fs::metadata(dir).await.with_context(|| {
            format!("Data directory {} is not accessible", dir.display())
        })?;

        if meta.is_dir() {
            Ok(())
        } else {
            Err(anyhow::anyhow!(
                "Data directory {} is not a directory",
                dir.display()
            ))
        }
    }
}
