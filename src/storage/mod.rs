use crate::error::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Writes decoded image payloads to disk.
#[derive(Debug, Clone, Default)]
pub struct AssetSaver {
    root: Option<PathBuf>,
}

impl AssetSaver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relative output paths are resolved against `root`.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Decodes `data` and writes it to `path`, creating parent directories
    /// as needed. An existing file is overwritten.
    pub async fn save_base64(&self, data: &str, path: &Path) -> Result<PathBuf> {
        let bytes = STANDARD.decode(data.trim())?;
        self.save_bytes(&bytes, path).await
    }

    pub async fn save_bytes(&self, bytes: &[u8], path: &Path) -> Result<PathBuf> {
        let target = self.resolve(path);

        if let Some(dir) = target.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).await?;
        }
        fs::write(&target, bytes).await?;

        log::info!("💾 Saved to {} ({} bytes)", target.display(), bytes.len());
        Ok(target)
    }
}
