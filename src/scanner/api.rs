//! Download-metadata API client
//!
//! One GET per platform identifier against
//! `{base}/api/download?platform={id}&releaseTrack=latest`, expecting a JSON
//! body with a `downloadUrl` field.

use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{DEFAULT_API_BASE_URL, FETCH_TIMEOUT_SECS, USER_AGENT};
use crate::error::FetchError;

/// Response from the download-metadata endpoint
#[derive(Debug, Deserialize)]
struct DownloadResponse {
    #[serde(rename = "downloadUrl", default)]
    download_url: String,
}

/// Trait for fetching a platform's latest download URL
///
/// This is the injection seam for the HTTP transport: the scanner only ever
/// talks to this trait.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DownloadApi: Send + Sync {
    /// Fetches the latest download URL for an API platform identifier
    /// (e.g. "win32-x64", "darwin-arm64").
    ///
    /// When `system_setup` is set the user-installer path segment in the
    /// returned URL is rewritten to the system-installer segment
    /// (Windows only).
    async fn fetch_download_url(
        &self,
        platform_id: &str,
        system_setup: bool,
    ) -> Result<String, FetchError>;
}

/// Client for Cursor's download-metadata API
pub struct CursorDownloadApi {
    client: reqwest::Client,
    base_url: String,
}

impl CursorDownloadApi {
    /// Creates a new client with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }
}

impl Default for CursorDownloadApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[async_trait::async_trait]
impl DownloadApi for CursorDownloadApi {
    async fn fetch_download_url(
        &self,
        platform_id: &str,
        system_setup: bool,
    ) -> Result<String, FetchError> {
        let url = format!(
            "{}/api/download?platform={}&releaseTrack=latest",
            self.base_url, platform_id
        );
        debug!("fetching download URL for {}: {}", platform_id, url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("download API returned status {} for {}", status, platform_id);
            return Err(FetchError::UnexpectedStatus {
                platform: platform_id.to_string(),
                status,
            });
        }

        let body: DownloadResponse = response.json().await.map_err(|e| {
            warn!("failed to parse download API response for {}: {}", platform_id, e);
            FetchError::InvalidResponse(e.to_string())
        })?;

        let mut download_url = body.download_url;
        if download_url.is_empty() {
            return Err(FetchError::MissingDownloadUrl(platform_id.to_string()));
        }

        if system_setup {
            download_url =
                download_url.replace("user-setup/CursorUserSetup", "system-setup/CursorSetup");
        }

        debug!("download URL for {}: {}", platform_id, download_url);
        Ok(download_url)
    }
}
