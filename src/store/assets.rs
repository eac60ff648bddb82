// src/store/assets.rs

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::AppError;

use super::AssetStore;

/// Filesystem-backed image store: one sub-directory per reveal-stage bucket
/// under a single configured root.
#[derive(Debug, Clone)]
pub struct FsAssetStore {
    root: PathBuf,
}

impl FsAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, bucket: &str, filename: &str) -> PathBuf {
        self.root.join(bucket).join(filename)
    }
}

#[async_trait]
impl AssetStore for FsAssetStore {
    async fn exists(&self, bucket: &str, filename: &str) -> bool {
        tokio::fs::try_exists(self.path(bucket, filename))
            .await
            .unwrap_or(false)
    }

    async fn read(&self, bucket: &str, filename: &str) -> Result<Vec<u8>, AppError> {
        Ok(tokio::fs::read(self.path(bucket, filename)).await?)
    }
}
