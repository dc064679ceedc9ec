//! JSON persistence of the version collection
//!
//! The collection is the sole durable state: read once per invocation,
//! written as a whole-document replace (temp file + rename, never a partial
//! write). Platform keys inside every record are normalized to the canonical
//! mac, windows, linux order on save regardless of insertion order.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::platform::{Arch, Platform};

/// Per-platform map of architecture label to download URL
pub type DownloadMap = IndexMap<Platform, IndexMap<Arch, String>>;

/// One released version and its per-platform download locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionRecord {
    /// Dotted numeric version, e.g. "1.2.3"
    pub version: String,
    /// Date the release was first seen, YYYY-MM-DD
    pub date: String,
    /// 40-character hex commit identifier embedded in the download path
    pub build_id: String,
    pub downloads: DownloadMap,
}

/// The persisted document: all known versions plus the last update time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionCollection {
    #[serde(default)]
    pub versions: Vec<VersionRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl VersionCollection {
    pub fn contains_version(&self, version: &str) -> bool {
        self.versions.iter().any(|record| record.version == version)
    }
}

/// Handle to the version data file
#[derive(Debug, Clone)]
pub struct VersionStore {
    path: PathBuf,
}

impl VersionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection from disk.
    ///
    /// An absent file yields an empty collection. A malformed file is logged
    /// and also yields an empty collection, matching the scanner's
    /// start-from-scratch recovery.
    pub fn load(&self) -> Result<VersionCollection, StoreError> {
        if !self.path.exists() {
            info!(
                "version data file {} does not exist yet, starting empty",
                self.path.display()
            );
            return Ok(VersionCollection::default());
        }

        let content = fs::read_to_string(&self.path)?;
        match serde_json::from_str::<VersionCollection>(&content) {
            Ok(collection) => {
                debug!(
                    "loaded {} versions from {}",
                    collection.versions.len(),
                    self.path.display()
                );
                Ok(collection)
            }
            Err(e) => {
                warn!(
                    "malformed version data in {}: {}, starting empty",
                    self.path.display(),
                    e
                );
                Ok(VersionCollection::default())
            }
        }
    }

    /// Save the collection, normalizing platform key order first.
    ///
    /// Writes to a sibling temp file and renames it into place so an I/O
    /// failure leaves the previous state untouched.
    pub fn save(&self, collection: &VersionCollection) -> Result<(), StoreError> {
        let mut normalized = collection.clone();
        for record in &mut normalized.versions {
            record.downloads = normalize_platform_order(&record.downloads);
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&normalized)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;

        debug!(
            "saved {} versions to {}",
            normalized.versions.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Reorder a download map into the canonical mac, windows, linux order
pub fn normalize_platform_order(downloads: &DownloadMap) -> DownloadMap {
    let mut ordered = DownloadMap::new();
    for platform in Platform::ALL {
        if let Some(archs) = downloads.get(&platform) {
            ordered.insert(platform, archs.clone());
        }
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record_with_platform_order(platforms: &[Platform]) -> VersionRecord {
        let mut downloads = DownloadMap::new();
        for platform in platforms {
            let mut archs = IndexMap::new();
            for arch in platform.architectures() {
                archs.insert(*arch, platform.download_url("a".repeat(40).as_str(), *arch, "1.2.3"));
            }
            downloads.insert(*platform, archs);
        }
        VersionRecord {
            version: "1.2.3".to_string(),
            date: "2026-08-24".to_string(),
            build_id: "a".repeat(40),
            downloads,
        }
    }

    #[test]
    fn load_returns_empty_collection_for_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = VersionStore::new(temp_dir.path().join("versions.json"));

        let collection = store.load().unwrap();
        assert!(collection.versions.is_empty());
        assert_eq!(collection.last_updated, None);
    }

    #[test]
    fn load_returns_empty_collection_for_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("versions.json");
        fs::write(&path, "not json at all").unwrap();

        let collection = VersionStore::new(&path).load().unwrap();
        assert!(collection.versions.is_empty());
    }

    #[test]
    fn save_then_load_round_trips_the_collection() {
        let temp_dir = TempDir::new().unwrap();
        let store = VersionStore::new(temp_dir.path().join("versions.json"));

        let collection = VersionCollection {
            versions: vec![record_with_platform_order(&Platform::ALL)],
            last_updated: Some("2026-08-24 12:00:00".to_string()),
        };

        store.save(&collection).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, collection);
    }

    #[test]
    fn save_normalizes_platform_key_order() {
        let temp_dir = TempDir::new().unwrap();
        let store = VersionStore::new(temp_dir.path().join("versions.json"));

        // Insert platforms backwards; saved document must still read
        // mac, windows, linux
        let collection = VersionCollection {
            versions: vec![record_with_platform_order(&[
                Platform::Linux,
                Platform::Windows,
                Platform::Mac,
            ])],
            last_updated: None,
        };
        store.save(&collection).unwrap();

        let loaded = store.load().unwrap();
        let keys: Vec<Platform> = loaded.versions[0].downloads.keys().copied().collect();
        assert_eq!(keys, vec![Platform::Mac, Platform::Windows, Platform::Linux]);
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let store = VersionStore::new(temp_dir.path().join("data/nested/versions.json"));

        store.save(&VersionCollection::default()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn contains_version_matches_exact_string() {
        let collection = VersionCollection {
            versions: vec![record_with_platform_order(&Platform::ALL)],
            last_updated: None,
        };

        assert!(collection.contains_version("1.2.3"));
        assert!(!collection.contains_version("1.2.30"));
    }
}
