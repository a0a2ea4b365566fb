use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

use crate::error::ScrapeError;

/// Somewhere to put downloaded pages.
#[async_trait]
pub trait FileSink {
    async fn save(&self, filename: &str, bytes: &[u8]) -> Result<(), ScrapeError>;
}

/// Writes each file into one directory. Existing files are overwritten.
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    pub async fn create(dir: impl Into<PathBuf>) -> Result<Self, ScrapeError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl FileSink for DirSink {
    async fn save(&self, filename: &str, bytes: &[u8]) -> Result<(), ScrapeError> {
        let mut buffer = File::create(self.dir.join(filename)).await?;
        buffer.write_all(bytes).await?;
        buffer.flush().await?;
        Ok(())
    }
}
