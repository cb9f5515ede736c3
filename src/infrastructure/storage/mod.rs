pub mod local;

use bytes::Bytes;

/// Capability interface over the blob store. Backends only need two
/// operations, so swapping local disk for an object store never touches the
/// job store or the handlers.
pub trait BlobStorage {
    /// Persists `bytes` under a freshly generated path derived from
    /// `name_hint` and returns that path. The written file must be either
    /// fully present or absent, never partial.
    async fn write_unique(&self, name_hint: &str, bytes: Bytes) -> std::io::Result<String>;

    /// Reads back the blob previously stored at `path`.
    async fn read(&self, path: &str) -> std::io::Result<Bytes>;
}
