//! cursor-tracker: release tracking for the Cursor editor
//!
//! Polls Cursor's download-metadata endpoint for every supported
//! (platform, architecture) pair, extracts the version number and build
//! identifier from the returned download URLs, persists the result as an
//! ordered JSON collection, and rewrites the download table embedded in a
//! README document.
//!
//! # Modules
//!
//! - [`config`]: endpoint and timeout constants
//! - [`platform`]: the platform/architecture matrix and URL synthesis
//! - [`scanner`]: fetching, extraction, and reconciliation of releases
//! - [`ordering`]: numeric version comparison
//! - [`store`]: JSON persistence of the version collection
//! - [`readme`]: README table rewriting
//! - [`error`]: error types per layer

pub mod config;
pub mod error;
pub mod ordering;
pub mod platform;
pub mod readme;
pub mod scanner;
pub mod store;
