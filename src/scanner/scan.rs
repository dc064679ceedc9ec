//! Scan orchestration
//!
//! A single run walks fetch → extract → reconcile → merge → sort → persist.
//! Per-platform fetch failures are logged and skipped; a run only fails as a
//! whole when no version or build id can be extracted from any fetched URL,
//! or when persisting the collection fails.

use chrono::Local;
use futures::future::join_all;
use tracing::{debug, error, info, warn};

use crate::error::StoreError;
use crate::platform::Platform;
use crate::scanner::api::DownloadApi;
use crate::scanner::extract::UrlPatterns;
use crate::scanner::reconcile::{merge, reconcile, sort_descending};
use crate::store::{DownloadMap, VersionRecord, VersionStore};

/// Orchestrates a full scan against an injected download API
pub struct Scanner<A: DownloadApi> {
    api: A,
    store: VersionStore,
    patterns: UrlPatterns,
}

impl<A: DownloadApi> Scanner<A> {
    pub fn new(api: A, store: VersionStore) -> Self {
        Self {
            api,
            store,
            patterns: UrlPatterns::new(),
        }
    }

    pub fn store(&self) -> &VersionStore {
        &self.store
    }

    /// Fetches the download URL for every (platform, arch) pair concurrently.
    ///
    /// Pairs whose fetch fails are simply absent from the returned map.
    async fn fetch_all_platforms(&self) -> DownloadMap {
        let mut targets = Vec::new();
        for platform in Platform::ALL {
            for arch in platform.architectures() {
                targets.push((platform, *arch));
            }
        }

        let fetches = targets.into_iter().map(|(platform, arch)| async move {
            let result = self
                .api
                .fetch_download_url(&platform.api_id(arch), platform.uses_system_setup())
                .await;
            (platform, arch, result)
        });

        let mut downloads = DownloadMap::new();
        for (platform, arch, result) in join_all(fetches).await {
            match result {
                Ok(url) => {
                    downloads
                        .entry(platform)
                        .or_default()
                        .insert(arch, url);
                }
                Err(e) => {
                    warn!(
                        "no download URL for {}/{}: {}",
                        platform.key(),
                        arch.label(),
                        e
                    );
                }
            }
        }
        downloads
    }

    /// Fetches the latest release and reconciles it into a complete record.
    ///
    /// Returns `None` when nothing was fetched or when neither a version nor
    /// a build id could be extracted from the fetched URLs.
    pub async fn fetch_latest(&self) -> Option<VersionRecord> {
        let downloads = self.fetch_all_platforms().await;
        if downloads.is_empty() {
            warn!("no download URLs fetched for any platform");
            return None;
        }

        // Windows URLs carry both identifiers and are tried first; Linux
        // URLs are the fallback. Version and build id are extracted
        // independently.
        let mut version = None;
        let mut build_id = None;
        for platform in [Platform::Windows, Platform::Linux] {
            if let Some(urls) = downloads.get(&platform) {
                for url in urls.values() {
                    if version.is_none() {
                        version = self.patterns.version(url);
                    }
                    if build_id.is_none() {
                        build_id = self.patterns.build_id(url);
                    }
                }
            }
        }

        let (Some(version), Some(build_id)) = (version, build_id) else {
            error!("could not extract version or build id from any download URL");
            return None;
        };

        debug!("latest release: version {} build {}", version, build_id);
        let date = Local::now().format("%Y-%m-%d").to_string();
        Some(reconcile(downloads, &version, &build_id, &date))
    }

    /// Returns true if the latest fetched version is not yet in the
    /// persisted collection.
    pub async fn check_new_version(&self) -> Result<bool, StoreError> {
        let Some(record) = self.fetch_latest().await else {
            return Ok(false);
        };

        let collection = self.store.load()?;
        if collection.contains_version(&record.version) {
            debug!("version {} already recorded", record.version);
            Ok(false)
        } else {
            info!("new version available: {}", record.version);
            Ok(true)
        }
    }

    /// Fetches the latest release and merges it into the persisted
    /// collection.
    ///
    /// Returns false without touching the state file when no usable release
    /// data was fetched.
    pub async fn update_versions(&self) -> Result<bool, StoreError> {
        let Some(record) = self.fetch_latest().await else {
            warn!("no release data fetched, version data left unchanged");
            return Ok(false);
        };

        let mut collection = self.store.load()?;
        let mut versions = merge(std::mem::take(&mut collection.versions), record);
        sort_descending(&mut versions);
        collection.versions = versions;
        collection.last_updated = Some(Local::now().format("%Y-%m-%d %H:%M:%S").to_string());

        self.store.save(&collection)?;
        info!(
            "saved {} versions to {}",
            collection.versions.len(),
            self.store.path().display()
        );
        Ok(true)
    }
}
