use super::*;
use clap::CommandFactory;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["mcswap"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_no_subcommand_is_allowed() {
    let cli = parse(&[]);
    assert!(cli.command.is_none());
}

#[test]
fn test_list_with_and_without_category() {
    assert!(matches!(parse(&["list"]).command, Some(Commands::List { category: None })));
    assert!(matches!(
        parse(&["list", "shaderpacks"]).command,
        Some(Commands::List {
            category: Some(Category::Shaderpacks)
        })
    ));
}

#[test]
fn test_create_parses_category_and_name() {
    match parse(&["create", "mods", "Default"]).command {
        Some(Commands::Create { category, name }) => {
            assert_eq!(category, Category::Mods);
            assert_eq!(name, "Default");
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_import_requires_files() {
    assert!(Cli::try_parse_from(["mcswap", "import", "mods"]).is_err());

    match parse(&["import", "mods", "--profile", "PvP", "a.jar", "b.jar"]).command {
        Some(Commands::Import {
            category,
            profile,
            files,
        }) => {
            assert_eq!(category, Category::Mods);
            assert_eq!(profile.as_deref(), Some("PvP"));
            assert_eq!(files, vec![PathBuf::from("a.jar"), PathBuf::from("b.jar")]);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_search_defaults() {
    match parse(&["search", "sodium"]).command {
        Some(Commands::Search {
            query,
            loader,
            game_version,
            limit,
        }) => {
            assert_eq!(query, "sodium");
            assert_eq!(loader, ModLoader::Fabric);
            assert_eq!(game_version, None);
            assert_eq!(limit, crate::api::DEFAULT_SEARCH_LIMIT);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_download_with_filters() {
    match parse(&[
        "download",
        "AANobbMI",
        "--loader",
        "quilt",
        "--game-version",
        "1.20.1",
        "-p",
        "Default",
    ])
    .command
    {
        Some(Commands::Download {
            project_id,
            loader,
            game_version,
            profile,
        }) => {
            assert_eq!(project_id, "AANobbMI");
            assert_eq!(loader, ModLoader::Quilt);
            assert_eq!(game_version.as_deref(), Some("1.20.1"));
            assert_eq!(profile.as_deref(), Some("Default"));
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = parse(&["paths", "--game-dir", "/tmp/mc", "-y"]);
    assert_eq!(cli.config.game_dir, Some(PathBuf::from("/tmp/mc")));
    assert!(cli.config.yes);
}

#[test]
fn test_unknown_category_is_rejected() {
    assert!(Cli::try_parse_from(["mcswap", "list", "worlds"]).is_err());
}

#[test]
fn test_command_requirements() {
    assert!(Commands::GameVersions.requires_network());
    assert!(!Commands::Paths.requires_network());
    assert!(Commands::Paths.requires_game_dir());
    assert!(
        !Commands::List { category: None }.requires_game_dir()
    );
}
