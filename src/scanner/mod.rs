//! Release scanning layer
//!
//! Fetches download metadata for every (platform, architecture) pair,
//! extracts the version number and build identifier from the returned URLs,
//! and reconciles the results into a complete [`crate::store::VersionRecord`].
//!
//! # Modules
//!
//! - [`api`]: the download-metadata API client behind the [`api::DownloadApi`] seam
//! - [`extract`]: regex pattern table for version and build-id extraction
//! - [`reconcile`]: record synthesis, merge, and descending sort
//! - [`scan`]: the [`scan::Scanner`] orchestrating a full run

pub mod api;
pub mod extract;
pub mod reconcile;
pub mod scan;

pub use api::{CursorDownloadApi, DownloadApi};
pub use scan::Scanner;
