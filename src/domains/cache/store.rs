//! File-backed JSON cache with age-based invalidation.
//!
//! One file per key. Reads are lock-free; writes go to a temporary file in
//! the same directory and are renamed into place, so a concurrent reader sees
//! either the previous payload or the new one.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime};

use serde_json::Value;
use tracing::{debug, warn};

use super::key::CacheKey;

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Disposable on-disk cache of upstream payloads.
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    /// Create a store rooted at `dir`. The directory is created lazily on the
    /// first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &CacheKey) -> PathBuf {
        self.dir.join(key.file_name())
    }

    /// Load a cached payload no older than `max_age`.
    ///
    /// Missing, expired and unparseable entries all come back as `None`.
    /// A `max_age` of zero never hits.
    pub async fn load(&self, key: &CacheKey, max_age: Duration) -> Option<Value> {
        let path = self.path_for(key);

        let metadata = tokio::fs::metadata(&path).await.ok()?;
        let written = metadata.modified().ok()?;
        let age = SystemTime::now()
            .duration_since(written)
            .unwrap_or(Duration::ZERO);
        if age >= max_age {
            debug!("Cache entry {} expired ({}s old)", key, age.as_secs());
            return None;
        }

        let bytes = tokio::fs::read(&path).await.ok()?;
        match serde_json::from_slice(&bytes) {
            Ok(value) => {
                debug!("Cache hit for {}", key);
                Some(value)
            }
            Err(e) => {
                debug!("Ignoring unreadable cache entry {}: {}", key, e);
                None
            }
        }
    }

    /// Replace the cached payload for `key`.
    ///
    /// Returns `false` instead of failing when the directory cannot be created
    /// or written to.
    pub async fn save(&self, key: &CacheKey, value: &Value) -> bool {
        match self.write_atomic(key, value).await {
            Ok(()) => {
                debug!("Cached {}", key);
                true
            }
            Err(e) => {
                warn!("Could not write cache entry {}: {}", key, e);
                false
            }
        }
    }

    async fn write_atomic(&self, key: &CacheKey, value: &Value) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let content = serde_json::to_vec(value)?;
        let target = self.path_for(key);
        let tmp = self.dir.join(format!(
            ".{}.{}.{}.tmp",
            key.file_name(),
            std::process::id(),
            TMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));

        tokio::fs::write(&tmp, &content).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &target).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::cache::CacheSource;
    use serde_json::json;
    use tempfile::TempDir;

    const TWO_WEEKS: Duration = Duration::from_secs(14 * 24 * 60 * 60);

    fn key() -> CacheKey {
        CacheKey::new("catalog-1", Some("BRCA1"), CacheSource::Index)
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path());
        let value = json!({"url": "https://example.org", "genes": ["BRCA1"]});

        assert!(store.save(&key(), &value).await);
        assert_eq!(store.load(&key(), TWO_WEEKS).await, Some(value));
    }

    #[tokio::test]
    async fn test_load_missing_entry() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path());
        assert_eq!(store.load(&key(), TWO_WEEKS).await, None);
    }

    #[tokio::test]
    async fn test_zero_max_age_never_hits() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path());

        assert!(store.save(&key(), &json!({"a": 1})).await);
        assert_eq!(store.load(&key(), Duration::ZERO).await, None);
    }

    #[tokio::test]
    async fn test_expired_entry_is_absent_but_file_remains() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path());
        assert!(store.save(&key(), &json!({"a": 1})).await);

        let path = store.path_for(&key());
        let file = std::fs::File::options().write(true).open(&path).unwrap();
        file.set_modified(SystemTime::now() - Duration::from_secs(3 * 24 * 60 * 60))
            .unwrap();
        drop(file);

        assert_eq!(store.load(&key(), Duration::from_secs(24 * 60 * 60)).await, None);
        assert!(path.exists());
        assert!(store.load(&key(), TWO_WEEKS).await.is_some());
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_a_miss() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path());
        std::fs::write(store.path_for(&key()), b"{\"url\": \"https://exa").unwrap();

        assert_eq!(store.load(&key(), TWO_WEEKS).await, None);
    }

    #[tokio::test]
    async fn test_save_replaces_previous_value() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path());

        assert!(store.save(&key(), &json!({"genes": ["A", "B"]})).await);
        assert!(store.save(&key(), &json!({"genes": ["C"]})).await);
        assert_eq!(
            store.load(&key(), TWO_WEEKS).await,
            Some(json!({"genes": ["C"]}))
        );
    }

    #[tokio::test]
    async fn test_save_creates_directory() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path().join("nested").join("cache"));

        assert!(store.save(&key(), &json!(true)).await);
        assert!(store.dir().is_dir());
    }

    #[tokio::test]
    async fn test_save_fails_quietly_when_directory_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("cache");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let store = CacheStore::new(&blocker);

        assert!(!store.save(&key(), &json!(true)).await);
        assert_eq!(store.load(&key(), TWO_WEEKS).await, None);
    }

    #[tokio::test]
    async fn test_save_leaves_no_temporary_files() {
        let dir = TempDir::new().unwrap();
        let store = CacheStore::new(dir.path());
        assert!(store.save(&key(), &json!({"a": 1})).await);

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec![key().file_name()]);
    }
}
