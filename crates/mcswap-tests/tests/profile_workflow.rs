//! E2E tests for the profile commands
//!
//! Real filesystem under a temporary directory, live providers, no network.

use anyhow::Result;
use mcswap_lib::application::cli::Commands;
use mcswap_lib::application::commands::execute_command_with_session;
use mcswap_lib::primitives::Category;
use mcswap_lib::profiles::{ProfileError, ProfileSelection};
use mcswap_tests::TestEnvironment;
use std::fs;

async fn run(env: &TestEnvironment, command: Commands) -> Result<()> {
    let session = env.session(None);
    execute_command_with_session(command, &session).await
}

fn create(category: Category, name: &str) -> Commands {
    Commands::Create {
        category,
        name: name.to_string(),
    }
}

#[tokio::test]
async fn e2e_create_import_apply_default_profile() -> Result<()> {
    let env = TestEnvironment::new()?;
    let a = env.source_file("a.jar", b"mod a")?;
    let b = env.source_file("b.jar", b"mod b")?;

    run(&env, create(Category::Mods, "Default")).await?;
    run(
        &env,
        Commands::Import {
            category: Category::Mods,
            profile: None,
            files: vec![a, b],
        },
    )
    .await?;
    run(
        &env,
        Commands::Apply {
            category: Category::Mods,
            profile: None,
        },
    )
    .await?;

    assert_eq!(env.live_entries(Category::Mods)?, vec!["a.jar", "b.jar"]);
    assert_eq!(
        fs::read(env.live_dir(Category::Mods).join("a.jar"))?,
        b"mod a"
    );
    Ok(())
}

#[tokio::test]
async fn e2e_apply_replaces_previous_live_contents() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.seed_live_file(Category::Mods, "old.jar", b"old")?;
    fs::create_dir_all(env.live_dir(Category::Mods).join("old-config"))?;
    let new = env.source_file("new.jar", b"new")?;

    run(&env, create(Category::Mods, "Fresh")).await?;
    run(
        &env,
        Commands::Import {
            category: Category::Mods,
            profile: Some("Fresh".to_string()),
            files: vec![new],
        },
    )
    .await?;
    run(
        &env,
        Commands::Apply {
            category: Category::Mods,
            profile: Some("Fresh".to_string()),
        },
    )
    .await?;

    assert_eq!(env.live_entries(Category::Mods)?, vec!["new.jar"]);
    Ok(())
}

#[tokio::test]
async fn e2e_apply_copies_nested_directories() -> Result<()> {
    let env = TestEnvironment::new()?;
    run(&env, create(Category::Resourcepacks, "Faithful")).await?;

    let pack = env.profile_dir(Category::Resourcepacks, "Faithful").join("faithful");
    fs::create_dir_all(pack.join("assets/minecraft"))?;
    fs::write(pack.join("pack.mcmeta"), "{}")?;
    fs::write(pack.join("assets/minecraft/sounds.json"), "[]")?;

    run(
        &env,
        Commands::Apply {
            category: Category::Resourcepacks,
            profile: None,
        },
    )
    .await?;

    let live = env.live_dir(Category::Resourcepacks).join("faithful");
    assert_eq!(fs::read_to_string(live.join("pack.mcmeta"))?, "{}");
    assert_eq!(
        fs::read_to_string(live.join("assets/minecraft/sounds.json"))?,
        "[]"
    );
    Ok(())
}

#[tokio::test]
async fn e2e_apply_missing_profile_leaves_live_dir_untouched() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.seed_live_file(Category::Shaderpacks, "keep.zip", b"keep")?;

    let err = run(
        &env,
        Commands::Apply {
            category: Category::Shaderpacks,
            profile: Some("Nope".to_string()),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ProfileError>(),
        Some(ProfileError::ProfileNotFound { .. })
    ));
    assert_eq!(env.live_entries(Category::Shaderpacks)?, vec!["keep.zip"]);
    Ok(())
}

#[tokio::test]
async fn e2e_import_skips_unreadable_sources() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mut files = Vec::new();
    for name in ["one.jar", "two.jar", "three.jar"] {
        files.push(env.source_file(name, name.as_bytes())?);
    }
    files.push(env.source_path.join("missing.jar"));

    run(&env, create(Category::Mods, "Default")).await?;
    run(
        &env,
        Commands::Import {
            category: Category::Mods,
            profile: None,
            files,
        },
    )
    .await?;

    assert_eq!(
        env.profile_entries(Category::Mods, "Default")?,
        vec!["one.jar", "three.jar", "two.jar"]
    );
    Ok(())
}

#[tokio::test]
async fn e2e_selection_persists_between_sessions() -> Result<()> {
    let env = TestEnvironment::new()?;

    run(&env, create(Category::Mods, "Vanilla+")).await?;
    run(&env, create(Category::Mods, "Tech")).await?;
    run(
        &env,
        Commands::Select {
            category: Category::Mods,
            name: "Tech".to_string(),
        },
    )
    .await?;

    let selection = ProfileSelection::load(&env.work_path.join("selection.toml"))?;
    assert_eq!(selection.get(Category::Mods), Some("Tech"));
    assert_eq!(selection.get(Category::Shaderpacks), None);

    run(&env, Commands::List { category: None }).await?;
    Ok(())
}

#[tokio::test]
async fn e2e_categories_are_independent() -> Result<()> {
    let env = TestEnvironment::new()?;

    run(&env, create(Category::Mods, "Default")).await?;
    run(&env, create(Category::Shaderpacks, "Default")).await?;

    assert!(env.work_path.join("profiles/Default").is_dir());
    assert!(env.work_path.join("shaderpack_profiles/Default").is_dir());
    assert!(!env.work_path.join("resourcepack_profiles").exists());
    Ok(())
}

#[tokio::test]
async fn e2e_paths_reports_configured_game_dir() -> Result<()> {
    let env = TestEnvironment::new()?;
    run(&env, Commands::Paths).await?;
    run(&env, Commands::Version).await?;
    Ok(())
}
