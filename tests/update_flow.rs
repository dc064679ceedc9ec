//! End-to-end update flow against a mocked download API

use std::fs;

use mockito::{Server, ServerGuard};
use tempfile::TempDir;

use cursor_tracker::platform::{Arch, Platform};
use cursor_tracker::readme::ReadmeFormatter;
use cursor_tracker::scanner::{CursorDownloadApi, Scanner};
use cursor_tracker::store::VersionStore;

const BUILD_ID: &str = "89f6bb30a5e9b4d5660ba190c7a33dfa2ad2dc1e";
const VERSION: &str = "1.4.5";

const README: &str = "\
# Cursor 版本历史 Version History

Last Updated | 最后更新时间: `2024-01-01 00:00:00`

| 版本号 Version | 发布日期 Release Date | macOS | Windows | Linux |
|------|------|-------|---------|-------|
| 0.1.0 | 2024-01-01 | stale | stale | stale |

## 说明 Notes
";

/// Serve a download URL for every (platform, arch) identifier.
///
/// Windows answers with the user installer, which the client is expected to
/// rewrite to the system installer.
async fn mock_all_platforms(server: &mut ServerGuard) {
    for (id, url) in [
        (
            "darwin-universal",
            format!("https://downloads.cursor.com/production/{BUILD_ID}/darwin/universal/Cursor-darwin-universal.dmg"),
        ),
        (
            "darwin-x64",
            format!("https://downloads.cursor.com/production/{BUILD_ID}/darwin/x64/Cursor-darwin-x64.dmg"),
        ),
        (
            "darwin-arm64",
            format!("https://downloads.cursor.com/production/{BUILD_ID}/darwin/arm64/Cursor-darwin-arm64.dmg"),
        ),
        (
            "win32-x64",
            format!("https://downloads.cursor.com/production/{BUILD_ID}/win32/x64/user-setup/CursorUserSetup-x64-{VERSION}.exe"),
        ),
        (
            "win32-arm64",
            format!("https://downloads.cursor.com/production/{BUILD_ID}/win32/arm64/user-setup/CursorUserSetup-arm64-{VERSION}.exe"),
        ),
        (
            "linux-x64",
            format!("https://downloads.cursor.com/production/{BUILD_ID}/linux/x64/Cursor-{VERSION}-x86_64.AppImage"),
        ),
        (
            "linux-arm64",
            format!("https://downloads.cursor.com/production/{BUILD_ID}/linux/arm64/Cursor-{VERSION}-aarch64.AppImage"),
        ),
    ] {
        server
            .mock(
                "GET",
                format!("/api/download?platform={id}&releaseTrack=latest").as_str(),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(r#"{{"downloadUrl": "{url}"}}"#))
            .create_async()
            .await;
    }
}

#[tokio::test]
async fn full_update_persists_versions_and_rewrites_readme() {
    let mut server = Server::new_async().await;
    mock_all_platforms(&mut server).await;

    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("versions.json");
    let readme_path = temp_dir.path().join("README.md");
    fs::write(&readme_path, README).unwrap();

    let store = VersionStore::new(&data_path);
    let scanner = Scanner::new(CursorDownloadApi::new(&server.url()), store.clone());

    assert!(scanner.update_versions().await.unwrap());

    // Persisted collection
    let collection = store.load().unwrap();
    assert_eq!(collection.versions.len(), 1);
    let record = &collection.versions[0];
    assert_eq!(record.version, VERSION);
    assert_eq!(record.build_id, BUILD_ID);

    let keys: Vec<Platform> = record.downloads.keys().copied().collect();
    assert_eq!(keys, vec![Platform::Mac, Platform::Windows, Platform::Linux]);

    // Windows user installer was rewritten to the system installer
    let windows_x64 = &record.downloads[&Platform::Windows][&Arch::X64];
    assert!(windows_x64.contains("system-setup/CursorSetup-x64-1.4.5.exe"));
    assert!(!windows_x64.contains("user-setup"));

    // README rewritten
    ReadmeFormatter::new(&readme_path).update(&collection).unwrap();
    let readme = fs::read_to_string(&readme_path).unwrap();
    assert!(readme.contains(&format!("| {VERSION} | {} |", record.date)));
    assert!(!readme.contains("stale"));
    assert!(!readme.contains("2024-01-01 00:00:00"));
    assert!(readme.contains("## 说明 Notes"));
}

#[tokio::test]
async fn repeated_updates_do_not_duplicate_versions() {
    let mut server = Server::new_async().await;
    mock_all_platforms(&mut server).await;

    let temp_dir = TempDir::new().unwrap();
    let store = VersionStore::new(temp_dir.path().join("versions.json"));
    let scanner = Scanner::new(CursorDownloadApi::new(&server.url()), store.clone());

    assert!(scanner.update_versions().await.unwrap());
    assert!(scanner.update_versions().await.unwrap());

    assert_eq!(store.load().unwrap().versions.len(), 1);
}

#[tokio::test]
async fn update_fails_cleanly_when_api_is_down() {
    let mut server = Server::new_async().await;
    // All endpoints answer 500
    server
        .mock("GET", mockito::Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("versions.json");
    let scanner = Scanner::new(
        CursorDownloadApi::new(&server.url()),
        VersionStore::new(&data_path),
    );

    assert!(!scanner.update_versions().await.unwrap());
    assert!(!data_path.exists());
}

#[tokio::test]
async fn check_reports_new_version_until_recorded() {
    let mut server = Server::new_async().await;
    mock_all_platforms(&mut server).await;

    let temp_dir = TempDir::new().unwrap();
    let store = VersionStore::new(temp_dir.path().join("versions.json"));
    let scanner = Scanner::new(CursorDownloadApi::new(&server.url()), store);

    assert!(scanner.check_new_version().await.unwrap());
    assert!(scanner.update_versions().await.unwrap());
    assert!(!scanner.check_new_version().await.unwrap());
}
