use super::*;
use crate::networking::NetworkingConfig;

fn live_client(base_url: String) -> LiveModrinthClient {
    let networking = NetworkingManager::new(NetworkingConfig {
        timeout_seconds: 5,
        ..Default::default()
    })
    .unwrap();
    LiveModrinthClient::with_base_url(Arc::new(networking), base_url)
}

// ============================================================================
// Live Client Tests (mockito)
// ============================================================================

#[tokio::test]
async fn test_search_encodes_query_and_ignores_unknown_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("query".into(), "sodium extra".into()),
            mockito::Matcher::UrlEncoded("limit".into(), "20".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "hits": [
                    {"project_id": "AANobbMI", "title": "Sodium", "slug": "sodium", "icon_url": null, "follows": 12},
                    {"project_id": "PtjYWJkn", "title": "Sodium Extra"}
                ],
                "offset": 0,
                "limit": 20,
                "total_hits": 2,
                "extra_field": {"nested": true}
            }"#,
        )
        .create_async()
        .await;

    let client = live_client(server.url());
    let entries = client.search("sodium extra", 20).await.unwrap();

    assert_eq!(
        entries,
        vec![
            CatalogEntry {
                title: "Sodium".to_string(),
                project_id: "AANobbMI".to_string()
            },
            CatalogEntry {
                title: "Sodium Extra".to_string(),
                project_id: "PtjYWJkn".to_string()
            },
        ]
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_versions_defaults_missing_lists() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/project/AANobbMI/version")
        .with_status(200)
        .with_body(
            r#"[
                {"id": "v2", "version_number": "0.6.0", "loaders": ["fabric"], "game_versions": ["1.21.5"],
                 "files": [{"url": "https://cdn.example/sodium.jar", "filename": "sodium.jar", "primary": true, "hashes": {}}]},
                {"id": "v1"}
            ]"#,
        )
        .create_async()
        .await;

    let versions = live_client(server.url())
        .list_versions("AANobbMI")
        .await
        .unwrap();

    assert_eq!(versions.len(), 2);
    assert_eq!(versions[0].files[0].filename, "sodium.jar");
    assert!(versions[1].loaders.is_empty());
    assert!(versions[1].game_versions.is_empty());
    assert!(versions[1].files.is_empty());
    assert_eq!(versions[1].label(), "v1");
}

#[tokio::test]
async fn test_game_versions_parses_tags() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/tag/game_version")
        .with_status(200)
        .with_body(
            r#"[
                {"version": "1.21.5", "version_type": "release", "date": "2025-03-25T00:00:00Z", "major": false},
                {"version": "25w14a", "version_type": "snapshot", "major": false}
            ]"#,
        )
        .create_async()
        .await;

    let tags = live_client(server.url()).game_versions().await.unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[1].version_type, "snapshot");
}

#[tokio::test]
async fn test_non_success_status_is_catalog_unavailable() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/project/missing/version")
        .with_status(404)
        .create_async()
        .await;

    let err = live_client(server.url())
        .list_versions("missing")
        .await
        .unwrap_err();

    match err {
        CatalogError::CatalogUnavailable { endpoint, reason } => {
            assert!(endpoint.ends_with("/project/missing/version"));
            assert!(reason.contains("404"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_catalog_unavailable() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/tag/game_version")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let err = live_client(server.url()).game_versions().await.unwrap_err();
    assert!(matches!(err, CatalogError::CatalogUnavailable { .. }));
}

#[tokio::test]
async fn test_download_failure_is_download_failed() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/files/gone.jar")
        .with_status(500)
        .create_async()
        .await;

    let temp = tempfile::tempdir().unwrap();
    let destination = temp.path().join("gone.jar");
    let url = format!("{}/files/gone.jar", server.url());
    let err = live_client(server.url())
        .download(&url, &destination)
        .await
        .unwrap_err();

    match err {
        CatalogError::DownloadFailed { url: failed, .. } => assert_eq!(failed, url),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!destination.exists());
}

#[tokio::test]
async fn test_download_streams_body_to_destination() {
    let mut server = mockito::Server::new_async().await;
    let body: Vec<u8> = (0..64 * 1024).map(|i| (i % 251) as u8).collect();
    let _mock = server
        .mock("GET", "/files/sodium.jar")
        .with_status(200)
        .with_body(body.clone())
        .create_async()
        .await;

    let temp = tempfile::tempdir().unwrap();
    let destination = temp.path().join("sodium.jar");
    let url = format!("{}/files/sodium.jar", server.url());
    let written = live_client(server.url())
        .download(&url, &destination)
        .await
        .unwrap();

    assert_eq!(written, body.len() as u64);
    assert_eq!(std::fs::read(&destination).unwrap(), body);
}

#[test]
fn test_base_url_trailing_slash_is_trimmed() {
    let client = live_client("https://mirror.example/v2/".to_string());
    assert_eq!(client.base_url(), "https://mirror.example/v2");
    assert_eq!(
        client.versions_url("a b"),
        "https://mirror.example/v2/project/a%20b/version"
    );
}

// ============================================================================
// Mock Client Tests
// ============================================================================

#[tokio::test]
async fn test_mock_returns_registered_responses_and_records_calls() {
    let mock = MockModrinthClient::new()
        .with_search_result(
            "lithium",
            Ok(vec![CatalogEntry {
                title: "Lithium".to_string(),
                project_id: "gvQqBUqZ".to_string(),
            }]),
        )
        .with_download("https://cdn.example/lithium.jar", Ok(b"jar".to_vec()));

    let entries = mock.search("lithium", 5).await.unwrap();
    assert_eq!(entries[0].project_id, "gvQqBUqZ");

    let temp = tempfile::tempdir().unwrap();
    let destination = temp.path().join("lithium.jar");
    let written = mock
        .download("https://cdn.example/lithium.jar", &destination)
        .await
        .unwrap();
    assert_eq!(written, 3);
    assert_eq!(std::fs::read(&destination).unwrap(), b"jar");

    assert_eq!(
        mock.get_calls(),
        vec![
            "search:lithium".to_string(),
            "download:https://cdn.example/lithium.jar".to_string()
        ]
    );
}

#[tokio::test]
async fn test_mock_unregistered_calls_fail() {
    let mock = MockModrinthClient::new();

    assert!(matches!(
        mock.list_versions("nope").await.unwrap_err(),
        CatalogError::CatalogUnavailable { .. }
    ));
    assert!(matches!(
        mock.download("https://cdn.example/x.jar", Path::new("x.jar"))
            .await
            .unwrap_err(),
        CatalogError::DownloadFailed { .. }
    ));
}
