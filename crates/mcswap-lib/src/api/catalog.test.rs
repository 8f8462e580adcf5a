use super::*;
use crate::api::modrinth::{MockModrinthClient, VersionFile};

fn version(id: &str, loaders: &[&str], game_versions: &[&str], files: &[(&str, &str)]) -> ModVersion {
    ModVersion {
        id: id.to_string(),
        version_number: id.to_string(),
        loaders: loaders.iter().map(|s| s.to_string()).collect(),
        game_versions: game_versions.iter().map(|s| s.to_string()).collect(),
        files: files
            .iter()
            .map(|(url, filename)| VersionFile {
                url: url.to_string(),
                filename: filename.to_string(),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

fn tag(version: &str, version_type: &str) -> GameVersionTag {
    GameVersionTag {
        version: version.to_string(),
        version_type: version_type.to_string(),
        major: false,
    }
}

#[test]
fn test_filter_compatible_requires_both_loader_and_game_version() {
    let versions = vec![
        version("a", &["fabric"], &["1.21.5"], &[]),
        version("b", &["forge"], &["1.21.5"], &[]),
        version("c", &["fabric", "quilt"], &["1.20.1", "1.21.5"], &[]),
        version("d", &["fabric"], &["1.20.1"], &[]),
    ];

    let ids: Vec<String> = filter_compatible(versions, "fabric", "1.21.5")
        .into_iter()
        .map(|v| v.id)
        .collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn test_filter_compatible_empty_when_nothing_matches() {
    let versions = vec![version("a", &["forge"], &["1.19.2"], &[])];
    assert!(filter_compatible(versions, "fabric", "1.21.5").is_empty());
    assert!(filter_compatible(Vec::new(), "fabric", "1.21.5").is_empty());
}

#[test]
fn test_release_versions_sorted_descending_with_lenient_parse() {
    let tags = vec![
        tag("1.20.1", "release"),
        tag("1.21", "release"),
        tag("25w14a", "snapshot"),
        tag("1.21.5", "release"),
        tag("1.9", "release"),
        tag("1.21.1-rc1", "release_candidate"),
    ];

    assert_eq!(
        release_versions(&tags),
        vec!["1.21.5", "1.21", "1.20.1", "1.9"]
    );
}

#[test]
fn test_unparsable_versions_sort_last() {
    assert_eq!(compare_game_versions("1.0", "b1.7.3"), Ordering::Greater);
    assert_eq!(compare_game_versions("1.21", "1.21.0"), Ordering::Equal);
}

#[tokio::test]
async fn test_game_version_options_uses_catalog_releases() {
    let client = MockModrinthClient::new()
        .with_game_versions(Ok(vec![tag("1.20.4", "release"), tag("1.21.4", "release")]));

    assert_eq!(game_version_options(&client).await, vec!["1.21.4", "1.20.4"]);
}

#[tokio::test]
async fn test_game_version_options_falls_back_on_error() {
    let client = MockModrinthClient::new().with_game_versions(Err("offline".to_string()));
    assert_eq!(game_version_options(&client).await, vec!["1.21.5", "1.20.1"]);
}

#[tokio::test]
async fn test_download_to_profile_writes_first_file() {
    let temp = tempfile::tempdir().unwrap();
    let profile_dir = temp.path().join("profiles").join("Default");
    let client = MockModrinthClient::new()
        .with_download("https://cdn.example/first.jar", Ok(b"first".to_vec()));
    let version = version(
        "v1",
        &["fabric"],
        &["1.21.5"],
        &[
            ("https://cdn.example/first.jar", "first.jar"),
            ("https://cdn.example/sources.jar", "sources.jar"),
        ],
    );

    let path = download_to_profile(&client, &version, &profile_dir)
        .await
        .unwrap();

    assert_eq!(path, profile_dir.join("first.jar"));
    assert_eq!(fs::read(&path).unwrap(), b"first");
    assert!(!profile_dir.join("sources.jar").exists());
}

#[tokio::test]
async fn test_download_to_profile_without_files_fails() {
    let temp = tempfile::tempdir().unwrap();
    let client = MockModrinthClient::new();
    let version = version("v9", &["fabric"], &["1.21.5"], &[]);

    let err = download_to_profile(&client, &version, temp.path())
        .await
        .unwrap_err();

    match err {
        CatalogError::NoFilesAvailable { version } => assert_eq!(version, "v9"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(client.get_calls().is_empty());
}

#[tokio::test]
async fn test_download_to_profile_strips_directory_components() {
    let temp = tempfile::tempdir().unwrap();
    let client = MockModrinthClient::new()
        .with_download("https://cdn.example/evil.jar", Ok(b"x".to_vec()));
    let version = version(
        "v1",
        &[],
        &[],
        &[("https://cdn.example/evil.jar", "../../evil.jar")],
    );

    let path = download_to_profile(&client, &version, temp.path())
        .await
        .unwrap();
    assert_eq!(path, temp.path().join("evil.jar"));
}

#[tokio::test]
async fn test_find_compatible_mods_keeps_hits_with_matching_versions() {
    let client = MockModrinthClient::new()
        .with_search_result(
            "perf",
            Ok(vec![
                CatalogEntry {
                    title: "Sodium".to_string(),
                    project_id: "sodium".to_string(),
                },
                CatalogEntry {
                    title: "OptiFabric".to_string(),
                    project_id: "optifabric".to_string(),
                },
            ]),
        )
        .with_versions(
            "sodium",
            Ok(vec![version("s1", &["fabric"], &["1.21.5"], &[])]),
        )
        .with_versions(
            "optifabric",
            Ok(vec![version("o1", &["fabric"], &["1.16.5"], &[])]),
        );

    let found = find_compatible_mods(&client, "perf", 20, "fabric", "1.21.5")
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Sodium");
}

#[tokio::test]
async fn test_find_compatible_mods_aborts_when_version_listing_fails() {
    let client = MockModrinthClient::new()
        .with_search_result(
            "perf",
            Ok(vec![CatalogEntry {
                title: "Broken".to_string(),
                project_id: "broken".to_string(),
            }]),
        )
        .with_versions("broken", Err("HTTP 500".to_string()));

    let err = find_compatible_mods(&client, "perf", 20, "fabric", "1.21.5")
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::CatalogUnavailable { .. }));
}

#[tokio::test]
async fn test_download_compatible_takes_first_match() {
    let temp = tempfile::tempdir().unwrap();
    let client = MockModrinthClient::new()
        .with_versions(
            "sodium",
            Ok(vec![
                version("forge-build", &["forge"], &["1.21.5"], &[("https://cdn.example/f.jar", "f.jar")]),
                version("older", &["fabric"], &["1.21.5"], &[("https://cdn.example/old.jar", "old.jar")]),
                version("newer", &["fabric"], &["1.21.5"], &[("https://cdn.example/new.jar", "new.jar")]),
            ]),
        )
        .with_download("https://cdn.example/old.jar", Ok(b"old".to_vec()));

    let path = download_compatible(&client, "sodium", "fabric", "1.21.5", temp.path())
        .await
        .unwrap();

    assert_eq!(path, temp.path().join("old.jar"));
}

#[tokio::test]
async fn test_download_compatible_without_match_fails() {
    let temp = tempfile::tempdir().unwrap();
    let client = MockModrinthClient::new().with_versions(
        "sodium",
        Ok(vec![version("v", &["forge"], &["1.20.1"], &[])]),
    );

    let err = download_compatible(&client, "sodium", "fabric", "1.21.5", temp.path())
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::NoCompatibleVersion { .. }));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}
