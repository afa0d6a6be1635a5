use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, error, info};

use crate::errors::{MinilinkerError, Result};
use crate::storage::KvStore;

/// 每个 key 对应数据目录下的一个 `<key>.json` 文件
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    pub async fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();

        // 如果不存在就初始化
        if let Err(e) = fs::create_dir_all(&dir).await {
            error!("Failed to create data directory {}: {}", dir.display(), e);
            return Err(MinilinkerError::file_operation(format!(
                "Failed to create data directory {}: {}",
                dir.display(),
                e
            )));
        }
        info!("File storage at {}", dir.display());

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    ///
    /// Characters outside `[A-Za-z0-9._-]` are replaced so a key can never
    /// escape the data directory.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        let safe = safe.trim_start_matches('.');
        let name = if safe.is_empty() { "_" } else { safe };
        self.dir.join(format!("{}.json", name))
    }
}

#[async_trait]
impl KvStore for FileKvStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                Err(MinilinkerError::file_operation(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");

        // 先写临时文件再 rename，避免写到一半留下损坏的数据
        fs::write(&tmp_path, value).await?;
        if let Err(e) = fs::rename(&tmp_path, &path).await {
            error!("Failed to replace {}: {}", path.display(), e);
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }
        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
