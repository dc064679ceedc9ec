//! Version and build-id extraction from download URLs
//!
//! The patterns encode Cursor's download URL scheme and are part of the
//! external-interface contract; they will need revision if that scheme
//! changes:
//!
//! - Windows installer: `.../win32/{arch}/system-setup/CursorSetup-{arch}-{version}.exe`
//! - Linux package: `.../linux/{arch}/Cursor-{version}-{x86_64|aarch64}.AppImage`
//! - Build id (any platform): a 40-character lowercase-hex segment after `/production/`

use regex::Regex;

/// Pattern table for pulling release identifiers out of download URLs
pub struct UrlPatterns {
    /// Version in a Windows installer file name
    windows_version_re: Regex,
    /// Version in a Linux AppImage file name
    linux_version_re: Regex,
    /// Commit hash in the production download path
    build_id_re: Regex,
}

impl UrlPatterns {
    pub fn new() -> Self {
        Self {
            windows_version_re: Regex::new(r"CursorSetup-(?:x64|arm64)-(\d+\.\d+\.\d+)\.exe")
                .unwrap(),
            linux_version_re: Regex::new(r"Cursor-(\d+\.\d+\.\d+)-(?:x86_64|aarch64)\.AppImage")
                .unwrap(),
            build_id_re: Regex::new(r"production/([a-f0-9]{40})/").unwrap(),
        }
    }

    /// Extracts the version number from a download URL.
    ///
    /// The Windows installer pattern is tried first, then the Linux package
    /// pattern; the first match wins.
    pub fn version(&self, url: &str) -> Option<String> {
        self.windows_version_re
            .captures(url)
            .or_else(|| self.linux_version_re.captures(url))
            .map(|caps| caps[1].to_string())
    }

    /// Extracts the 40-character hex build identifier from a download URL.
    pub fn build_id(&self, url: &str) -> Option<String> {
        self.build_id_re
            .captures(url)
            .map(|caps| caps[1].to_string())
    }
}

impl Default for UrlPatterns {
    fn default() -> Self {
        Self::new()
    }
}
