//! Platform and architecture matrix for Cursor releases
//!
//! The matrix is part of the external-interface contract: the API platform
//! identifiers and the download URL layout encode Cursor's URL scheme and
//! will need revision if that scheme changes.

use serde::{Deserialize, Serialize};

use crate::config::DOWNLOADS_BASE_URL;

/// A supported operating system
///
/// Serialized as a lowercase string so it can be used as an ordered JSON
/// map key in the persisted collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Mac,
    Windows,
    Linux,
}

/// A CPU target within a platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    Universal,
    X64,
    Arm64,
}

impl Platform {
    /// Canonical order of platform keys in the persisted collection
    pub const ALL: [Platform; 3] = [Platform::Mac, Platform::Windows, Platform::Linux];

    /// Key used in the persisted JSON and in log messages
    pub fn key(&self) -> &'static str {
        match self {
            Platform::Mac => "mac",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        }
    }

    /// Architectures released for this platform, in persisted order
    pub fn architectures(&self) -> &'static [Arch] {
        match self {
            Platform::Mac => &[Arch::Universal, Arch::X64, Arch::Arm64],
            Platform::Windows | Platform::Linux => &[Arch::X64, Arch::Arm64],
        }
    }

    /// Platform identifier expected by the download-metadata API,
    /// e.g. `darwin-universal`, `win32-x64`, `linux-arm64`
    pub fn api_id(&self, arch: Arch) -> String {
        let os = match self {
            Platform::Mac => "darwin",
            Platform::Windows => "win32",
            Platform::Linux => "linux",
        };
        format!("{}-{}", os, arch.label())
    }

    /// Windows downloads are requested as the system-installer variant
    pub fn uses_system_setup(&self) -> bool {
        matches!(self, Platform::Windows)
    }

    /// Deterministic download URL for a (version, build id, arch) triple,
    /// used to fill in platforms the API did not answer for
    pub fn download_url(&self, build_id: &str, arch: Arch, version: &str) -> String {
        match self {
            Platform::Mac => format!(
                "{}/production/{}/darwin/{}/Cursor-darwin-{}.dmg",
                DOWNLOADS_BASE_URL,
                build_id,
                arch.label(),
                arch.label()
            ),
            Platform::Windows => format!(
                "{}/production/{}/win32/{}/system-setup/CursorSetup-{}-{}.exe",
                DOWNLOADS_BASE_URL,
                build_id,
                arch.label(),
                arch.label(),
                version
            ),
            Platform::Linux => format!(
                "{}/production/{}/linux/{}/Cursor-{}-{}.AppImage",
                DOWNLOADS_BASE_URL,
                build_id,
                arch.label(),
                version,
                arch.package_suffix()
            ),
        }
    }
}

impl Arch {
    /// Label used in API identifiers, URL paths, and persisted JSON keys
    pub fn label(&self) -> &'static str {
        match self {
            Arch::Universal => "universal",
            Arch::X64 => "x64",
            Arch::Arm64 => "arm64",
        }
    }

    /// Label used for markdown download links
    pub fn link_label(&self) -> &'static str {
        match self {
            Arch::Universal => "Universal",
            Arch::X64 => "x64",
            Arch::Arm64 => "ARM64",
        }
    }

    /// Suffix in Linux package file names (universal never appears on Linux)
    pub fn package_suffix(&self) -> &'static str {
        match self {
            Arch::Universal => "universal",
            Arch::X64 => "x86_64",
            Arch::Arm64 => "aarch64",
        }
    }
}
