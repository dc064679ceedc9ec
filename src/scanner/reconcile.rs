//! Record synthesis, merge, and ordering
//!
//! Turns whatever the per-platform fetches produced into a complete
//! [`VersionRecord`]: every (platform, arch) pair missing from the fetch
//! results gets a deterministically synthesized URL, and platforms are
//! emitted in the canonical mac, windows, linux order.

use indexmap::IndexMap;
use tracing::debug;

use crate::ordering::compare_versions;
use crate::platform::Platform;
use crate::store::{DownloadMap, VersionRecord};

/// Builds the canonical record for a release.
///
/// Fetched URLs win; anything missing from the matrix is filled in from the
/// deterministic URL template keyed by version and build id.
pub fn reconcile(
    fetched: DownloadMap,
    version: &str,
    build_id: &str,
    date: &str,
) -> VersionRecord {
    let mut downloads = DownloadMap::new();

    for platform in Platform::ALL {
        let mut archs = fetched.get(&platform).cloned().unwrap_or_else(IndexMap::new);
        for arch in platform.architectures() {
            if !archs.contains_key(arch) {
                archs.insert(*arch, platform.download_url(build_id, *arch, version));
            }
        }
        downloads.insert(platform, archs);
    }

    VersionRecord {
        version: version.to_string(),
        date: date.to_string(),
        build_id: build_id.to_string(),
        downloads,
    }
}

/// Appends a new record unless its version string is already present.
///
/// Existing records win: a duplicate version is discarded even if the new
/// record carries a different build id.
pub fn merge(existing: Vec<VersionRecord>, new_record: VersionRecord) -> Vec<VersionRecord> {
    let mut merged = existing;
    if merged
        .iter()
        .any(|record| record.version == new_record.version)
    {
        debug!("version {} already recorded, discarding", new_record.version);
    } else {
        merged.push(new_record);
    }
    merged
}

/// Stable sort of records by numeric version components, highest first.
pub fn sort_descending(records: &mut [VersionRecord]) {
    records.sort_by(|a, b| compare_versions(&b.version, &a.version));
}
