//! Endpoint and timeout constants

/// Base URL of the download-metadata API
pub const DEFAULT_API_BASE_URL: &str = "https://www.cursor.com";

/// Base URL used when synthesizing download links for platforms the API
/// did not answer for
pub const DOWNLOADS_BASE_URL: &str = "https://downloads.cursor.com";

/// Timeout for a single metadata fetch in seconds
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// User agent sent with every metadata request
pub const USER_AGENT: &str = "cursor-tracker";

/// Default path of the persisted version collection
pub const DEFAULT_DATA_FILE: &str = "versions.json";

/// Default path of the README holding the version table
pub const DEFAULT_README_FILE: &str = "README.md";
