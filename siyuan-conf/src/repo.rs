//! Data-repo section: encryption key, index timing and index retention.
//!
//! The key is opaque here. It is produced by the key-management routine,
//! carried as raw bytes, written to JSON as standard base64 (`null` while
//! unset) and never shown by `Debug`. An empty key means the repo has not
//! been initialized and no repo operation may run against it.
//!
//! `indexRetentionDays` and `retentionIndexesDaily` together describe the
//! purge policy: indexes older than the cutoff are dropped, and within the
//! window at most that many indexes are kept per calendar day.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::{Path, PathBuf};

use crate::workspace::WorkspaceDir;

/// Directory under the workspace root holding the data repo.
pub const REPO_DIR_NAME: &str = "repo";

/// Lowest slow-index warning threshold, in milliseconds.
pub const MIN_SYNC_INDEX_TIMING: i64 = 12 * 1000;

/// Symmetric key material for the data repo.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RepoKey(Vec<u8>);

impl RepoKey {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// False until a key has been generated and set.
    pub fn is_initialized(&self) -> bool {
        !self.0.is_empty()
    }
}

impl std::fmt::Debug for RepoKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RepoKey(<redacted, {} bytes>)", self.0.len())
    }
}

impl From<Vec<u8>> for RepoKey {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl Serialize for RepoKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // An unset key is written as `null`, as the kernel always has.
        if self.0.is_empty() {
            serializer.serialize_none()
        } else {
            serializer.serialize_str(&STANDARD.encode(&self.0))
        }
    }
}

impl<'de> Deserialize<'de> for RepoKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Self::default()),
            Some(encoded) => STANDARD
                .decode(encoded.as_bytes())
                .map(Self)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repo {
    #[serde(default)]
    pub key: RepoKey,

    /// Index time in milliseconds above which the user is told to purge
    #[serde(default = "crate::defaults::sync_index_timing")]
    pub sync_index_timing: i64,

    /// Days of indexes to keep
    #[serde(default = "crate::defaults::index_retention_days")]
    pub index_retention_days: i32,

    /// Indexes kept per day inside the retention window
    #[serde(default = "crate::defaults::retention_indexes_daily")]
    pub retention_indexes_daily: i32,
}

impl Default for Repo {
    fn default() -> Self {
        Self {
            key: RepoKey::default(),
            sync_index_timing: crate::defaults::sync_index_timing(),
            index_retention_days: crate::defaults::index_retention_days(),
            retention_indexes_daily: crate::defaults::retention_indexes_daily(),
        }
    }
}

/// `<root>/repo`
pub fn repo_dir_in(root: &Path) -> PathBuf {
    root.join(REPO_DIR_NAME)
}

impl Repo {
    /// Factory defaults with no key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Repo storage directory under the current workspace root.
    ///
    /// Reads the root on every call; nothing is cached.
    pub fn save_dir(&self, workspace: &WorkspaceDir) -> PathBuf {
        repo_dir_in(&workspace.get())
    }

    pub fn has_key(&self) -> bool {
        self.key.is_initialized()
    }

    /// Whether an index run of `elapsed_ms` should be reported as slow.
    pub fn is_slow_index(&self, elapsed_ms: i64) -> bool {
        elapsed_ms > self.sync_index_timing
    }

    /// Repair values a persisted document may carry out of range.
    pub fn normalize(&mut self) {
        if self.sync_index_timing < MIN_SYNC_INDEX_TIMING {
            log::warn!(
                "syncIndexTiming {}ms below minimum, raised to {}ms",
                self.sync_index_timing,
                MIN_SYNC_INDEX_TIMING
            );
            self.sync_index_timing = MIN_SYNC_INDEX_TIMING;
        }
        if self.index_retention_days < 1 {
            log::warn!(
                "indexRetentionDays {} invalid, reset to default",
                self.index_retention_days
            );
            self.index_retention_days = crate::defaults::index_retention_days();
        }
        if self.retention_indexes_daily < 1 {
            log::warn!(
                "retentionIndexesDaily {} invalid, reset to default",
                self.retention_indexes_daily
            );
            self.retention_indexes_daily = crate::defaults::retention_indexes_daily();
        }
    }
}
