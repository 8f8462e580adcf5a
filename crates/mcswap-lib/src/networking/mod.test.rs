use super::*;

fn manager() -> NetworkingManager {
    NetworkingManager::new(NetworkingConfig {
        timeout_seconds: 5,
        trace_requests: true,
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn test_default_config_identifies_client() {
    let config = NetworkingConfig::default();
    assert_eq!(config.timeout_seconds, 30);
    assert!(config.user_agent.starts_with("mcswap/"));
}

#[tokio::test]
async fn test_get_bytes_returns_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/file.jar")
        .with_status(200)
        .with_body("jar-bytes")
        .create_async()
        .await;

    let bytes = manager()
        .get_bytes(&format!("{}/file.jar", server.url()))
        .await
        .unwrap();

    assert_eq!(bytes, b"jar-bytes");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/missing")
        .with_status(404)
        .create_async()
        .await;

    let err = manager()
        .get_bytes(&format!("{}/missing", server.url()))
        .await
        .unwrap_err();

    match err {
        NetworkingError::HttpStatus { status, url } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/missing"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_user_agent_is_sent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/ua")
        .match_header("user-agent", "mcswap-test/1.0")
        .with_status(200)
        .create_async()
        .await;

    let manager = NetworkingManager::new(NetworkingConfig {
        user_agent: "mcswap-test/1.0".to_string(),
        ..Default::default()
    })
    .unwrap();

    manager
        .get_response(&format!("{}/ua", server.url()))
        .await
        .unwrap();
    mock.assert_async().await;
}
