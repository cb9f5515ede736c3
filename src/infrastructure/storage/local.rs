use bytes::Bytes;
use rand::{Rng, distr::Alphanumeric};
use std::io::{Error, ErrorKind};
use std::path::{Component, Path, PathBuf};
use time::OffsetDateTime;
use tokio::fs;
use tracing::info;

use super::BlobStorage;

/// Disk-backed blob store. Paths handed out are relative to `root` and start
/// with the logical `prefix` (the "bucket" namespace, e.g. `videos`).
#[derive(Clone)]
pub struct LocalStorage {
    root: PathBuf,
    prefix: String,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            prefix: prefix.into(),
        }
    }

    /// `<prefix>/<unix-timestamp>_<token>_<basename>`. The random token keeps
    /// same-second uploads of the same filename from colliding.
    fn generate_key(&self, name_hint: &str) -> String {
        let name = Path::new(name_hint)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.bin");

        let timestamp = OffsetDateTime::now_utc().unix_timestamp();
        let token: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(8)
            .map(char::from)
            .collect();

        format!("{}/{}_{}_{}", self.prefix, timestamp, token, name)
    }

    fn resolve(&self, key: &str) -> std::io::Result<PathBuf> {
        let relative = Path::new(key);
        let escapes = relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, Component::ParentDir));
        if escapes {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("path escapes storage root: {key}"),
            ));
        }
        Ok(self.root.join(relative))
    }
}

impl BlobStorage for LocalStorage {
    async fn write_unique(&self, name_hint: &str, bytes: Bytes) -> std::io::Result<String> {
        let key = self.generate_key(name_hint);
        let target = self.resolve(&key)?;

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await?;
        }

        // Write to a sibling then rename, so the key is never visible
        // half-written.
        let staging = target.with_file_name(format!(
            "{}.part",
            target
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("upload.bin")
        ));
        fs::write(&staging, &bytes).await?;
        fs::rename(&staging, &target).await?;

        info!(key = %key, size = bytes.len(), "stored blob");
        Ok(key)
    }

    async fn read(&self, path: &str) -> std::io::Result<Bytes> {
        let target = self.resolve(path)?;
        Ok(Bytes::from(fs::read(target).await?))
    }
}
