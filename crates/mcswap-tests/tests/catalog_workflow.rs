//! E2E tests for the catalog commands against a mockito Modrinth

use anyhow::Result;
use mcswap_lib::api::CatalogError;
use mcswap_lib::application::cli::Commands;
use mcswap_lib::application::commands::execute_command_with_session;
use mcswap_lib::primitives::{Category, ModLoader};
use mcswap_tests::TestEnvironment;
use mcswap_tests::fixtures::{game_versions_body, search_body, version, versions_body};
use mockito::{Matcher, Server};
use std::fs;

async fn json_mock(server: &mut Server, path: &str, body: String) -> mockito::Mock {
    server
        .mock("GET", path)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

#[tokio::test]
async fn e2e_download_uses_newest_release_and_first_compatible_version() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mut server = Server::new_async().await;
    let new_url = format!("{}/files/sodium-0.6.0.jar", server.url());
    let old_url = format!("{}/files/sodium-0.5.0.jar", server.url());

    let tags = json_mock(
        &mut server,
        "/tag/game_version",
        game_versions_body(&[("1.20.1", "release"), ("25w10a", "snapshot"), ("1.21.5", "release")]),
    )
    .await;
    let versions = json_mock(
        &mut server,
        "/project/AANobbMI/version",
        versions_body(vec![
            version("0.6.0", &["fabric", "quilt"], &["1.21.5"], &[(&new_url, "sodium-0.6.0.jar")]),
            version("0.5.0", &["fabric"], &["1.21.5", "1.20.1"], &[(&old_url, "sodium-0.5.0.jar")]),
        ]),
    )
    .await;
    let file = server
        .mock("GET", "/files/sodium-0.6.0.jar")
        .with_status(200)
        .with_body("jar bytes")
        .create_async()
        .await;

    let session = env.session(Some(server.url()));
    execute_command_with_session(
        Commands::Create {
            category: Category::Mods,
            name: "Default".to_string(),
        },
        &session,
    )
    .await?;
    execute_command_with_session(
        Commands::Download {
            project_id: "AANobbMI".to_string(),
            loader: ModLoader::Fabric,
            game_version: None,
            profile: None,
        },
        &session,
    )
    .await?;

    tags.assert_async().await;
    versions.assert_async().await;
    file.assert_async().await;
    assert_eq!(
        fs::read_to_string(env.profile_dir(Category::Mods, "Default").join("sodium-0.6.0.jar"))?,
        "jar bytes"
    );
    Ok(())
}

#[tokio::test]
async fn e2e_download_without_selection_takes_first_profile() -> Result<()> {
    let env = TestEnvironment::new()?;
    fs::create_dir_all(env.profile_dir(Category::Mods, "Beta"))?;
    fs::create_dir_all(env.profile_dir(Category::Mods, "Alpha"))?;

    let mut server = Server::new_async().await;
    let url = format!("{}/files/lithium.jar", server.url());
    let _versions = json_mock(
        &mut server,
        "/project/gvQqBUqZ/version",
        versions_body(vec![version("0.15.0", &["fabric"], &["1.21.5"], &[(&url, "lithium.jar")])]),
    )
    .await;
    let _file = server
        .mock("GET", "/files/lithium.jar")
        .with_status(200)
        .with_body("lithium")
        .create_async()
        .await;

    // --yes: the prompt resolves to the first sorted profile
    let session = env.session(Some(server.url()));
    execute_command_with_session(
        Commands::Download {
            project_id: "gvQqBUqZ".to_string(),
            loader: ModLoader::Fabric,
            game_version: Some("1.21.5".to_string()),
            profile: None,
        },
        &session,
    )
    .await?;

    assert_eq!(env.profile_entries(Category::Mods, "Alpha")?, vec!["lithium.jar"]);
    assert!(env.profile_entries(Category::Mods, "Beta")?.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_download_with_no_compatible_version_fails() -> Result<()> {
    let env = TestEnvironment::new()?;
    fs::create_dir_all(env.profile_dir(Category::Mods, "Default"))?;

    let mut server = Server::new_async().await;
    let _versions = json_mock(
        &mut server,
        "/project/forgeonly/version",
        versions_body(vec![version(
            "1.0.0",
            &["forge"],
            &["1.20.1"],
            &[("https://cdn.invalid/f.jar", "f.jar")],
        )]),
    )
    .await;

    let session = env.session(Some(server.url()));
    let err = execute_command_with_session(
        Commands::Download {
            project_id: "forgeonly".to_string(),
            loader: ModLoader::Fabric,
            game_version: Some("1.20.1".to_string()),
            profile: Some("Default".to_string()),
        },
        &session,
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CatalogError>(),
        Some(CatalogError::NoCompatibleVersion { .. })
    ));
    assert!(env.profile_entries(Category::Mods, "Default")?.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_search_checks_every_hit() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mut server = Server::new_async().await;

    let search = server
        .mock("GET", "/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".to_string(), "sodium".to_string()),
            Matcher::UrlEncoded("limit".to_string(), "5".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(search_body(&[("AANobbMI", "Sodium"), ("PtjYWJkn", "Sodium Extra")]))
        .create_async()
        .await;
    let first = json_mock(
        &mut server,
        "/project/AANobbMI/version",
        versions_body(vec![version("0.6.0", &["fabric"], &["1.21.5"], &[])]),
    )
    .await;
    let second = json_mock(
        &mut server,
        "/project/PtjYWJkn/version",
        versions_body(vec![]),
    )
    .await;

    let session = env.session(Some(server.url()));
    execute_command_with_session(
        Commands::Search {
            query: "sodium".to_string(),
            loader: ModLoader::Fabric,
            game_version: Some("1.21.5".to_string()),
            limit: 5,
        },
        &session,
    )
    .await?;

    search.assert_async().await;
    first.assert_async().await;
    second.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn e2e_search_surfaces_catalog_outage() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mut server = Server::new_async().await;
    let _search = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let session = env.session(Some(server.url()));
    let err = execute_command_with_session(
        Commands::Search {
            query: "sodium".to_string(),
            loader: ModLoader::Fabric,
            game_version: Some("1.21.5".to_string()),
            limit: 20,
        },
        &session,
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CatalogError>(),
        Some(CatalogError::CatalogUnavailable { .. })
    ));
    Ok(())
}

#[tokio::test]
async fn e2e_game_versions_fall_back_when_catalog_errors() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mut server = Server::new_async().await;
    let tags = server
        .mock("GET", "/tag/game_version")
        .with_status(500)
        .create_async()
        .await;

    let session = env.session(Some(server.url()));
    execute_command_with_session(Commands::GameVersions, &session).await?;

    tags.assert_async().await;
    Ok(())
}
