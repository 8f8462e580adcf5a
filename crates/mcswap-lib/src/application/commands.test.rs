use super::*;
use crate::api::{CatalogEntry, GameVersionTag, MockModrinthClient, ModVersion, VersionFile};
use crate::application::session_mocks::*;
use crate::display::DisplayCall;
use crate::profiles::ProfileSelection;
use std::fs;
use tempfile::TempDir;

struct Dirs {
    _temp: TempDir,
    workdir: PathBuf,
    game_dir: PathBuf,
}

fn dirs() -> Dirs {
    let temp = TempDir::new().unwrap();
    let workdir = temp.path().join("work");
    let game_dir = temp.path().join(".minecraft");
    fs::create_dir_all(&workdir).unwrap();
    fs::create_dir_all(&game_dir).unwrap();
    Dirs {
        _temp: temp,
        workdir,
        game_dir,
    }
}

fn session_in(dirs: &Dirs) -> MockCommandSession {
    MockCommandSession::in_dirs(&dirs.workdir, &dirs.game_dir)
}

fn write_profile_file(dirs: &Dirs, root: &str, profile: &str, file: &str, content: &str) {
    let dir = dirs.workdir.join(root).join(profile);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), content).unwrap();
}

fn sorted_entries(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn fabric_version(id: &str, game_version: &str, url: &str, filename: &str) -> ModVersion {
    ModVersion {
        id: id.to_string(),
        version_number: id.to_string(),
        loaders: vec!["fabric".to_string()],
        game_versions: vec![game_version.to_string()],
        files: vec![VersionFile {
            url: url.to_string(),
            filename: filename.to_string(),
            primary: true,
            ..VersionFile::default()
        }],
        ..ModVersion::default()
    }
}

fn release(version: &str) -> GameVersionTag {
    GameVersionTag {
        version: version.to_string(),
        version_type: "release".to_string(),
        major: false,
    }
}

mod handle_version_tests {
    use super::*;

    #[tokio::test]
    async fn it_displays_version_information() {
        let session = MockCommandSession::new();
        handle_version(&session).await.unwrap();

        assert!(
            session
                .mock_display()
                .output_contains(env!("CARGO_PKG_VERSION"))
        );
        assert_eq!(session.mock_display().count_calls("properties"), 1);
    }
}

mod handle_create_tests {
    use super::*;

    #[tokio::test]
    async fn it_creates_and_selects_the_first_profile() {
        let dirs = dirs();
        let session = session_in(&dirs);

        handle_create(&session, Category::Mods, "  Default  ")
            .await
            .unwrap();

        assert!(dirs.workdir.join("profiles/Default").is_dir());
        let selection = session.load_selection().unwrap();
        assert_eq!(selection.get(Category::Mods), Some("Default"));
        assert!(session.mock_display().output_contains("Selected 'Default'"));
    }

    #[tokio::test]
    async fn it_keeps_an_existing_selection() {
        let dirs = dirs();
        let session = session_in(&dirs);

        handle_create(&session, Category::Shaderpacks, "First")
            .await
            .unwrap();
        handle_create(&session, Category::Shaderpacks, "Second")
            .await
            .unwrap();

        assert!(dirs.workdir.join("shaderpack_profiles/Second").is_dir());
        let selection = session.load_selection().unwrap();
        assert_eq!(selection.get(Category::Shaderpacks), Some("First"));
    }

    #[tokio::test]
    async fn it_rejects_blank_names() {
        let dirs = dirs();
        let session = session_in(&dirs);

        let err = handle_create(&session, Category::Mods, "   ")
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProfileError>(),
            Some(ProfileError::InvalidName { .. })
        ));
        assert!(!dirs.workdir.join("profiles").exists());
    }
}

mod handle_list_tests {
    use super::*;

    #[tokio::test]
    async fn it_lists_sorted_names_and_marks_selection() {
        let dirs = dirs();
        let session = session_in(&dirs);
        for name in ["Zeta", "Alpha"] {
            fs::create_dir_all(dirs.workdir.join("profiles").join(name)).unwrap();
        }
        let mut selection = ProfileSelection::default();
        selection.set(Category::Mods, "Zeta");
        session.save_selection(&selection).unwrap();

        handle_list(&session, Some(Category::Mods)).await.unwrap();

        assert!(session.mock_display().has_call(&DisplayCall::List {
            items: vec!["Alpha".to_string(), "Zeta (selected)".to_string()]
        }));
    }

    #[tokio::test]
    async fn it_reports_empty_categories() {
        let dirs = dirs();
        let session = session_in(&dirs);

        handle_list(&session, None).await.unwrap();

        assert_eq!(session.mock_display().count_calls("section"), 3);
        assert_eq!(session.mock_display().count_calls("subtle"), 3);
        assert_eq!(session.mock_display().count_calls("list"), 0);
    }
}

mod handle_select_tests {
    use super::*;

    #[tokio::test]
    async fn it_persists_the_selection() {
        let dirs = dirs();
        let session = session_in(&dirs);
        fs::create_dir_all(dirs.workdir.join("resourcepack_profiles/Faithful")).unwrap();

        handle_select(&session, Category::Resourcepacks, "Faithful")
            .await
            .unwrap();

        let stored = ProfileSelection::load(&dirs.workdir.join("selection.toml")).unwrap();
        assert_eq!(stored.get(Category::Resourcepacks), Some("Faithful"));
    }

    #[tokio::test]
    async fn it_rejects_unknown_profiles() {
        let dirs = dirs();
        let session = session_in(&dirs);

        let err = handle_select(&session, Category::Mods, "Missing")
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProfileError>(),
            Some(ProfileError::ProfileNotFound { .. })
        ));
        assert!(!dirs.workdir.join("selection.toml").exists());
    }
}

mod handle_import_tests {
    use super::*;

    #[tokio::test]
    async fn it_imports_into_the_selected_profile() {
        let dirs = dirs();
        let session = session_in(&dirs);
        handle_create(&session, Category::Mods, "Default")
            .await
            .unwrap();

        let a = dirs.workdir.join("a.jar");
        let b = dirs.workdir.join("b.jar");
        fs::write(&a, "a").unwrap();
        fs::write(&b, "b").unwrap();

        handle_import(&session, Category::Mods, None, vec![a, b])
            .await
            .unwrap();

        assert_eq!(
            sorted_entries(&dirs.workdir.join("profiles/Default")),
            vec!["a.jar", "b.jar"]
        );
        assert!(session.mock_display().output_contains("2 items"));
    }

    #[tokio::test]
    async fn it_reports_missing_sources_as_warnings() {
        let dirs = dirs();
        let session = session_in(&dirs);
        let present = dirs.workdir.join("present.jar");
        fs::write(&present, "x").unwrap();

        handle_import(
            &session,
            Category::Mods,
            Some("Explicit".to_string()),
            vec![present, dirs.workdir.join("gone.jar")],
        )
        .await
        .unwrap();

        assert!(dirs.workdir.join("profiles/Explicit/present.jar").is_file());
        assert_eq!(session.mock_display().count_calls("warning"), 1);
        assert!(session.mock_display().output_contains("gone.jar"));
    }

    #[tokio::test]
    async fn it_requires_a_profile() {
        let dirs = dirs();
        let session = session_in(&dirs);

        let err = handle_import(&session, Category::Mods, None, vec![])
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProfileError>(),
            Some(ProfileError::NoActiveProfile {
                category: Category::Mods
            })
        ));
    }
}

mod handle_apply_tests {
    use super::*;

    #[tokio::test]
    async fn it_replaces_live_contents() {
        let dirs = dirs();
        let session = session_in(&dirs);
        write_profile_file(&dirs, "profiles", "Default", "new.jar", "new");
        let live = dirs.game_dir.join("mods");
        fs::create_dir_all(&live).unwrap();
        fs::write(live.join("old.jar"), "old").unwrap();

        handle_apply(&session, Category::Mods, Some("Default".to_string()))
            .await
            .unwrap();

        assert_eq!(sorted_entries(&live), vec!["new.jar"]);
        assert_eq!(fs::read_to_string(live.join("new.jar")).unwrap(), "new");
    }

    #[tokio::test]
    async fn it_uses_the_stored_selection() {
        let dirs = dirs();
        let session = session_in(&dirs);
        write_profile_file(&dirs, "shaderpack_profiles", "Cinematic", "bsl.zip", "bsl");
        handle_select(&session, Category::Shaderpacks, "Cinematic")
            .await
            .unwrap();

        handle_apply(&session, Category::Shaderpacks, None)
            .await
            .unwrap();

        assert!(dirs.game_dir.join("shaderpacks/bsl.zip").is_file());
    }

    #[tokio::test]
    async fn it_leaves_live_dir_alone_for_missing_profile() {
        let dirs = dirs();
        let session = session_in(&dirs);
        let live = dirs.game_dir.join("mods");
        fs::create_dir_all(&live).unwrap();
        fs::write(live.join("keep.jar"), "keep").unwrap();

        let err = handle_apply(&session, Category::Mods, Some("Ghost".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ProfileError>(),
            Some(ProfileError::ProfileNotFound { .. })
        ));
        assert_eq!(sorted_entries(&live), vec!["keep.jar"]);
    }

    #[tokio::test]
    async fn it_requires_a_selection() {
        let dirs = dirs();
        let session = session_in(&dirs);

        let err = handle_apply(&session, Category::Resourcepacks, None)
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProfileError>(),
            Some(ProfileError::NoActiveProfile { .. })
        ));
    }

    #[tokio::test]
    async fn it_rejects_a_tampered_selection() {
        let dirs = dirs();
        let session = session_in(&dirs);
        write_profile_file(&dirs, "profiles", "Default", "a.jar", "a");
        let mut selection = ProfileSelection::default();
        selection.set(Category::Mods, "");
        session.save_selection(&selection).unwrap();

        let err = handle_apply(&session, Category::Mods, None)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ProfileError>(),
            Some(ProfileError::InvalidName { .. })
        ));
        assert!(!dirs.game_dir.join("mods").exists());
    }
}

mod handle_search_tests {
    use super::*;

    fn catalog() -> MockModrinthClient {
        MockModrinthClient::new()
            .with_game_versions(Ok(vec![release("1.20.1"), release("1.21.5")]))
            .with_search_result(
                "sodium",
                Ok(vec![
                    CatalogEntry {
                        title: "Sodium".to_string(),
                        project_id: "AANobbMI".to_string(),
                    },
                    CatalogEntry {
                        title: "Sodium Extra".to_string(),
                        project_id: "PtjYWJkn".to_string(),
                    },
                ]),
            )
            .with_versions(
                "AANobbMI",
                Ok(vec![fabric_version("0.6.0", "1.21.5", "https://cdn/s.jar", "s.jar")]),
            )
            .with_versions(
                "PtjYWJkn",
                Ok(vec![fabric_version("0.5.0", "1.20.1", "https://cdn/e.jar", "e.jar")]),
            )
    }

    #[tokio::test]
    async fn it_defaults_to_newest_release_and_filters() {
        let client = catalog();
        let session = MockCommandSession::new().with_catalog(client.clone());

        handle_search(&session, "sodium", ModLoader::Fabric, None, 20)
            .await
            .unwrap();

        assert!(session.mock_display().has_call(&DisplayCall::Table {
            headers: vec!["Title".to_string(), "Project ID".to_string()],
            rows: vec![vec!["Sodium".to_string(), "AANobbMI".to_string()]],
        }));
        assert_eq!(client.get_calls()[0], "game_versions");
        assert_eq!(session.mock_display().count_calls("progress_finish_clear"), 1);
    }

    #[tokio::test]
    async fn it_reports_no_matches() {
        let session = MockCommandSession::new().with_catalog(catalog());

        handle_search(
            &session,
            "sodium",
            ModLoader::Forge,
            Some("1.21.5".to_string()),
            20,
        )
        .await
        .unwrap();

        assert_eq!(session.mock_display().count_calls("table"), 0);
        assert!(session.mock_display().output_contains("No mods matching 'sodium'"));
    }

    #[tokio::test]
    async fn it_abandons_the_spinner_on_failure() {
        let client = MockModrinthClient::new()
            .with_search_result("broken", Err("HTTP 503".to_string()));
        let session = MockCommandSession::new().with_catalog(client);

        let err = handle_search(
            &session,
            "broken",
            ModLoader::Fabric,
            Some("1.21.5".to_string()),
            20,
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("HTTP 503"));
        assert_eq!(session.mock_display().count_calls("progress_abandon"), 1);
    }
}

mod handle_download_tests {
    use super::*;

    fn catalog() -> MockModrinthClient {
        MockModrinthClient::new()
            .with_versions(
                "AANobbMI",
                Ok(vec![
                    fabric_version("0.6.0", "1.21.5", "https://cdn/sodium-0.6.0.jar", "sodium-0.6.0.jar"),
                    fabric_version("0.5.0", "1.21.5", "https://cdn/sodium-0.5.0.jar", "sodium-0.5.0.jar"),
                ]),
            )
            .with_download("https://cdn/sodium-0.6.0.jar", Ok(b"jar".to_vec()))
    }

    #[tokio::test]
    async fn it_downloads_first_compatible_version_into_selected_profile() {
        let dirs = dirs();
        let client = catalog();
        let session = session_in(&dirs).with_catalog(client.clone());
        handle_create(&session, Category::Mods, "Default")
            .await
            .unwrap();

        handle_download(
            &session,
            "AANobbMI",
            ModLoader::Fabric,
            Some("1.21.5".to_string()),
            None,
        )
        .await
        .unwrap();

        let file = dirs.workdir.join("profiles/Default/sodium-0.6.0.jar");
        assert_eq!(fs::read(&file).unwrap(), b"jar");
        assert!(
            session
                .mock_display()
                .output_contains("sodium-0.6.0.jar into 'Default'")
        );
        assert!(session.mock_interactive().get_fuzzy_select_calls().is_empty());
    }

    #[tokio::test]
    async fn it_prompts_when_nothing_is_selected() {
        let dirs = dirs();
        for name in ["Beta", "Alpha"] {
            fs::create_dir_all(dirs.workdir.join("profiles").join(name)).unwrap();
        }
        let session = session_in(&dirs)
            .with_catalog(catalog())
            .with_interactive(MockInteractiveProvider::new().with_fuzzy_select(1));

        handle_download(
            &session,
            "AANobbMI",
            ModLoader::Fabric,
            Some("1.21.5".to_string()),
            None,
        )
        .await
        .unwrap();

        let calls = session.mock_interactive().get_fuzzy_select_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, vec!["Alpha".to_string(), "Beta".to_string()]);
        assert!(dirs.workdir.join("profiles/Beta/sodium-0.6.0.jar").is_file());
    }

    #[tokio::test]
    async fn it_stops_when_prompt_is_cancelled() {
        let dirs = dirs();
        fs::create_dir_all(dirs.workdir.join("profiles/Alpha")).unwrap();
        let client = catalog();
        let session = session_in(&dirs)
            .with_catalog(client.clone())
            .with_interactive(MockInteractiveProvider::new().with_fuzzy_select_cancelled());

        handle_download(&session, "AANobbMI", ModLoader::Fabric, None, None)
            .await
            .unwrap();

        assert!(client.get_calls().is_empty());
        assert!(session.mock_display().output_contains("Download cancelled"));
    }

    #[tokio::test]
    async fn it_fails_without_any_mod_profile() {
        let dirs = dirs();
        let session = session_in(&dirs).with_catalog(catalog());

        let err = handle_download(&session, "AANobbMI", ModLoader::Fabric, None, None)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ProfileError>(),
            Some(ProfileError::NoActiveProfile {
                category: Category::Mods
            })
        ));
    }

    #[tokio::test]
    async fn it_reports_no_compatible_version() {
        let dirs = dirs();
        fs::create_dir_all(dirs.workdir.join("profiles/Default")).unwrap();
        let session = session_in(&dirs).with_catalog(catalog());

        let err = handle_download(
            &session,
            "AANobbMI",
            ModLoader::NeoForge,
            Some("1.21.5".to_string()),
            Some("Default".to_string()),
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<crate::api::CatalogError>(),
            Some(crate::api::CatalogError::NoCompatibleVersion { .. })
        ));
        assert_eq!(session.mock_display().count_calls("progress_abandon"), 1);
        assert_eq!(sorted_entries(&dirs.workdir.join("profiles/Default")).len(), 0);
    }

    #[tokio::test]
    async fn it_rejects_profile_names_outside_the_root() {
        let dirs = dirs();
        fs::create_dir_all(dirs.workdir.join("profiles/Default")).unwrap();
        let client = catalog();
        let session = session_in(&dirs).with_catalog(client.clone());

        let err = handle_download(
            &session,
            "AANobbMI",
            ModLoader::Fabric,
            Some("1.21.5".to_string()),
            Some("..".to_string()),
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ProfileError>(),
            Some(ProfileError::InvalidName { .. })
        ));
        assert!(client.get_calls().is_empty());
        assert!(!dirs.workdir.join("sodium-0.6.0.jar").exists());
    }
}

mod handle_game_versions_tests {
    use super::*;

    #[tokio::test]
    async fn it_lists_releases_newest_first() {
        let client = MockModrinthClient::new().with_game_versions(Ok(vec![
            release("1.20.1"),
            GameVersionTag {
                version: "24w14a".to_string(),
                version_type: "snapshot".to_string(),
                major: false,
            },
            release("1.21"),
        ]));
        let session = MockCommandSession::new().with_catalog(client);

        handle_game_versions(&session).await.unwrap();

        assert!(session.mock_display().has_call(&DisplayCall::List {
            items: vec!["1.21".to_string(), "1.20.1".to_string()]
        }));
    }

    #[tokio::test]
    async fn it_falls_back_when_catalog_is_down() {
        let client = MockModrinthClient::new().with_game_versions(Err("offline".to_string()));
        let session = MockCommandSession::new().with_catalog(client);

        handle_game_versions(&session).await.unwrap();

        assert!(session.mock_display().has_call(&DisplayCall::List {
            items: vec!["1.21.5".to_string(), "1.20.1".to_string()]
        }));
    }
}

mod handle_paths_tests {
    use super::*;

    #[tokio::test]
    async fn it_shows_resolved_directories() {
        let dirs = dirs();
        let session = session_in(&dirs);

        handle_paths(&session).await.unwrap();

        let display = session.mock_display();
        assert!(display.output_contains(&dirs.game_dir.display().to_string()));
        assert!(display.output_contains("selection.toml"));
        assert!(display.output_contains("shaderpack_profiles"));
    }

    #[tokio::test]
    async fn it_survives_an_unresolved_game_dir() {
        let session = MockCommandSession::new()
            .with_filesystem(MockFileSystemProvider::new().without_game_dir());

        handle_paths(&session).await.unwrap();

        assert!(session.mock_display().output_contains("unresolved"));
    }
}

mod execute_command_with_session_tests {
    use super::*;

    #[tokio::test]
    async fn it_dispatches_the_profile_workflow() {
        let dirs = dirs();
        let session = session_in(&dirs);
        let jar = dirs.workdir.join("a.jar");
        fs::write(&jar, "a").unwrap();

        execute_command_with_session(
            Commands::Create {
                category: Category::Mods,
                name: "Default".to_string(),
            },
            &session,
        )
        .await
        .unwrap();
        execute_command_with_session(
            Commands::Import {
                category: Category::Mods,
                profile: None,
                files: vec![jar],
            },
            &session,
        )
        .await
        .unwrap();
        execute_command_with_session(
            Commands::Apply {
                category: Category::Mods,
                profile: None,
            },
            &session,
        )
        .await
        .unwrap();

        assert_eq!(sorted_entries(&dirs.game_dir.join("mods")), vec!["a.jar"]);
    }
}

#[test]
fn test_capitalize() {
    assert_eq!(capitalize("mod"), "Mod");
    assert_eq!(capitalize(""), "");
}
