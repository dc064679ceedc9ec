//! README version-table rewriting
//!
//! The README carries two machine-managed regions: a `Last Updated |
//! 最后更新时间` marker line and a markdown table with 版本号/Version,
//! 发布日期/Release Date, macOS, Windows, and Linux columns. The table body
//! (every row between the header+separator and the next `##` heading, or the
//! end of the document) is replaced with one row per persisted record.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use regex::Regex;
use tracing::{debug, info, warn};

use crate::error::DocumentError;
use crate::platform::Platform;
use crate::store::{VersionCollection, VersionRecord};

/// Cell content for a platform without any download links
const NO_DOWNLOAD_PLACEHOLDER: &str = "暂无";

/// Rewrites the version table embedded in a README document
pub struct ReadmeFormatter {
    readme_path: PathBuf,
    /// The last-updated marker line
    timestamp_re: Regex,
    /// The table header row plus its separator row
    table_header_re: Regex,
    /// The section heading terminating the table body
    heading_re: Regex,
}

impl ReadmeFormatter {
    pub fn new(readme_path: impl Into<PathBuf>) -> Self {
        Self {
            readme_path: readme_path.into(),
            timestamp_re: Regex::new(
                r"Last Updated \| 最后更新时间: `[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}`",
            )
            .unwrap(),
            table_header_re: Regex::new(
                r"\| ?版本号[^|\n]*Version ?\| ?发布日期[^|\n]*Release Date ?\| ?macOS ?\| ?Windows ?\| ?Linux ?\|[ \t]*\n\|(?:[-: ]+\|){5}[ \t]*\n",
            )
            .unwrap(),
            heading_re: Regex::new(r"(?m)^##").unwrap(),
        }
    }

    /// Rewrites the timestamp marker and the version table.
    ///
    /// Fails without modifying the file when the table header cannot be
    /// found. A missing timestamp marker is tolerated.
    pub fn update(&self, collection: &VersionCollection) -> Result<(), DocumentError> {
        let content = fs::read_to_string(&self.readme_path)?;

        let now = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let content = if self.timestamp_re.is_match(&content) {
            self.timestamp_re
                .replace(
                    &content,
                    format!("Last Updated | 最后更新时间: `{}`", now),
                )
                .into_owned()
        } else {
            debug!("no last-updated marker found, leaving timestamp alone");
            content
        };

        let Some(header) = self.table_header_re.find(&content) else {
            warn!(
                "version table header not found in {}",
                self.readme_path.display()
            );
            return Err(DocumentError::TableNotFound);
        };

        let body_start = header.end();
        let rows = render_table_rows(&collection.versions);

        let updated = match self.heading_re.find_at(&content, body_start) {
            Some(heading) => format!(
                "{}{}\n\n{}",
                &content[..body_start],
                rows,
                &content[heading.start()..]
            ),
            None => format!("{}{}\n", &content[..body_start], rows),
        };

        fs::write(&self.readme_path, updated)?;
        info!("updated version table in {}", self.readme_path.display());
        Ok(())
    }
}

fn render_table_rows(records: &[VersionRecord]) -> String {
    records
        .iter()
        .map(render_row)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_row(record: &VersionRecord) -> String {
    format!(
        "| {} | {} | {} | {} | {} |",
        record.version,
        record.date,
        platform_links(record, Platform::Mac),
        platform_links(record, Platform::Windows),
        platform_links(record, Platform::Linux),
    )
}

/// Space-joined markdown links for one platform column, or the placeholder
fn platform_links(record: &VersionRecord, platform: Platform) -> String {
    match record.downloads.get(&platform) {
        Some(archs) if !archs.is_empty() => archs
            .iter()
            .map(|(arch, url)| format!("[{}]({})", arch.link_label(), url))
            .collect::<Vec<_>>()
            .join(" "),
        _ => NO_DOWNLOAD_PLACEHOLDER.to_string(),
    }
}
