//! Command execution handlers
//!
//! Every handler takes a `&dyn Session`, so tests can swap in recording
//! providers and temporary directories.

use crate::api::{
    CatalogClient, FALLBACK_GAME_VERSIONS, download_compatible, find_compatible_mods,
    game_version_options,
};
use crate::application::session::{CommandSession, Session};
use crate::application::{AppConfig, CliConfig, Commands};
use crate::display::DisplayProviderExt;
use crate::primitives::{Category, ModLoader};
use crate::profiles::ProfileError;
use crate::profiles::store::validate_name;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

/// Execute CLI commands using the session-based architecture
pub async fn execute_command(config: CliConfig) -> Result<()> {
    let app_config = AppConfig::resolve(config.app_config)?;
    let session = CommandSession::new(app_config);

    let command = match config.command {
        Some(cmd) => cmd,
        None => {
            session
                .display()
                .status()
                .message("mcswap - Minecraft profile switching");
            session
                .display()
                .status()
                .subtle("Run 'mcswap --help' for usage information");
            return Ok(());
        }
    };

    execute_command_with_session(command, &session).await
}

/// Execute a specific command with a provided session (for testing)
pub async fn execute_command_with_session(command: Commands, session: &dyn Session) -> Result<()> {
    debug!(?command, "Dispatching command");

    match command {
        Commands::List { category } => handle_list(session, category).await,
        Commands::Create { category, name } => handle_create(session, category, &name).await,
        Commands::Select { category, name } => handle_select(session, category, &name).await,
        Commands::Import {
            category,
            profile,
            files,
        } => handle_import(session, category, profile, files).await,
        Commands::Apply { category, profile } => handle_apply(session, category, profile).await,
        Commands::Search {
            query,
            loader,
            game_version,
            limit,
        } => handle_search(session, &query, loader, game_version, limit).await,
        Commands::Download {
            project_id,
            loader,
            game_version,
            profile,
        } => handle_download(session, &project_id, loader, game_version, profile).await,
        Commands::GameVersions => handle_game_versions(session).await,
        Commands::Paths => handle_paths(session).await,
        Commands::Version => handle_version(session).await,
    }
}

async fn handle_version(session: &dyn Session) -> Result<()> {
    session
        .display()
        .status()
        .section(&format!("mcswap {}", env!("CARGO_PKG_VERSION")));
    session
        .display()
        .status()
        .message("Switch between sets of Minecraft mods, shaderpacks and resourcepacks");

    session.display().table().properties(&[
        ("Target", std::env::consts::ARCH.to_string()),
        ("OS", std::env::consts::OS.to_string()),
        (
            "Catalog",
            session.config().app_config().modrinth_url.clone(),
        ),
    ]);

    Ok(())
}

async fn handle_list(session: &dyn Session, category: Option<Category>) -> Result<()> {
    let store = session.profile_store()?;
    let selection = session.load_selection()?;

    let categories = match category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    for category in categories {
        session
            .display()
            .status()
            .section(&format!("{} profiles", capitalize(category.label())));

        let mut names = store.list_profiles(category);
        names.sort();

        if names.is_empty() {
            session.display().status().subtle("   No profiles yet");
            continue;
        }

        let selected = selection.get(category);
        let items: Vec<String> = names
            .into_iter()
            .map(|name| {
                if Some(name.as_str()) == selected {
                    format!("{} (selected)", name)
                } else {
                    name
                }
            })
            .collect();
        session.display().table().list(&items);
    }

    Ok(())
}

async fn handle_create(session: &dyn Session, category: Category, raw_name: &str) -> Result<()> {
    let name = validate_name(raw_name)?;
    let store = session.profile_store()?;
    let path = store.create_profile(category, name)?;

    session.display().status().success(
        &format!("Created {} profile", category.label()),
        &format!("'{}' at {}", name, path.display()),
    );

    // First profile of a category becomes the selection
    let mut selection = session.load_selection()?;
    if selection.get(category).is_none() {
        selection.set(category, name);
        session.save_selection(&selection)?;
        session
            .display()
            .status()
            .info(&format!("Selected '{}' for {}", name, category));
    }

    Ok(())
}

async fn handle_select(session: &dyn Session, category: Category, raw_name: &str) -> Result<()> {
    let name = validate_name(raw_name)?;
    let store = session.profile_store()?;

    if !store.profile_exists(category, name) {
        return Err(ProfileError::ProfileNotFound {
            category,
            name: name.to_string(),
            path: store.layout().profile_dir(category, name),
        }
        .into());
    }

    let mut selection = session.load_selection()?;
    selection.set(category, name);
    session.save_selection(&selection)?;

    info!(%category, profile = name, "Selected profile");
    session
        .display()
        .status()
        .success(&format!("Selected {} profile", category.label()), name);

    Ok(())
}

async fn handle_import(
    session: &dyn Session,
    category: Category,
    profile: Option<String>,
    files: Vec<PathBuf>,
) -> Result<()> {
    let store = session.profile_store()?;
    let selection = session.load_selection()?;
    let target = selection.resolve(category, profile.as_deref());

    let report = store.import_files(category, target, &files)?;
    session.display().display_report(
        &format!("Imported into '{}'", target.unwrap_or_default()),
        &report,
    );

    Ok(())
}

async fn handle_apply(
    session: &dyn Session,
    category: Category,
    profile: Option<String>,
) -> Result<()> {
    let selection = session.load_selection()?;
    let name = selection
        .resolve(category, profile.as_deref())
        .ok_or(ProfileError::NoActiveProfile { category })?;

    let activator = session.profile_activator()?;
    let live_dir = activator.live_dir(category);

    session
        .display()
        .status()
        .checking(&format!("Applying {} profile '{}'", category.label(), name));

    let report = activator.apply(category, name)?;
    session
        .display()
        .display_report(&format!("Applied '{}'", name), &report);
    session
        .display()
        .status()
        .subtle(&format!("   {}", live_dir.display()));

    Ok(())
}

async fn handle_search(
    session: &dyn Session,
    query: &str,
    loader: ModLoader,
    game_version: Option<String>,
    limit: usize,
) -> Result<()> {
    let client = session.network().catalog(session.config().app_config())?;
    let game_version = resolve_game_version(client.as_ref(), game_version).await;

    let spinner = session.display().progress().spinner(&format!(
        "Searching Modrinth for '{}' ({} {})",
        query, loader, game_version
    ));

    let hits = match find_compatible_mods(
        client.as_ref(),
        query,
        limit,
        loader.as_str(),
        &game_version,
    )
    .await
    {
        Ok(hits) => {
            spinner.finish_clear();
            hits
        }
        Err(e) => {
            spinner.abandon("Search failed");
            return Err(e.into());
        }
    };

    if hits.is_empty() {
        session.display().status().info(&format!(
            "No mods matching '{}' support {} on {}",
            query, loader, game_version
        ));
        return Ok(());
    }

    let rows: Vec<Vec<String>> = hits
        .into_iter()
        .map(|hit| vec![hit.title, hit.project_id])
        .collect();
    session.display().table().table(&["Title", "Project ID"], &rows);

    Ok(())
}

async fn handle_download(
    session: &dyn Session,
    project_id: &str,
    loader: ModLoader,
    game_version: Option<String>,
    profile: Option<String>,
) -> Result<()> {
    let category = Category::Mods;
    let store = session.profile_store()?;
    let selection = session.load_selection()?;

    let name = match selection.resolve(category, profile.as_deref()) {
        Some(name) => name.to_string(),
        None => {
            let mut names = store.list_profiles(category);
            if names.is_empty() {
                return Err(ProfileError::NoActiveProfile { category }.into());
            }
            names.sort();

            match session
                .interactive()
                .fuzzy_select("Download into which mod profile?", &names)?
            {
                Some(index) if index < names.len() => names.swap_remove(index),
                _ => {
                    session.display().status().warning("Download cancelled");
                    return Ok(());
                }
            }
        }
    };

    let name = validate_name(&name)?.to_string();
    if !store.profile_exists(category, &name) {
        return Err(ProfileError::ProfileNotFound {
            category,
            path: store.layout().profile_dir(category, &name),
            name,
        }
        .into());
    }
    let profile_dir = store.layout().profile_dir(category, &name);

    let client = session.network().catalog(session.config().app_config())?;
    let game_version = resolve_game_version(client.as_ref(), game_version).await;

    let spinner = session.display().progress().spinner(&format!(
        "Downloading {} ({} {})",
        project_id, loader, game_version
    ));

    match download_compatible(
        client.as_ref(),
        project_id,
        loader.as_str(),
        &game_version,
        &profile_dir,
    )
    .await
    {
        Ok(path) => {
            spinner.finish_clear();
            let file_name = path
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            session
                .display()
                .status()
                .success("Downloaded", &format!("{} into '{}'", file_name, name));
            Ok(())
        }
        Err(e) => {
            spinner.abandon("Download failed");
            Err(e.into())
        }
    }
}

async fn handle_game_versions(session: &dyn Session) -> Result<()> {
    let client = session.network().catalog(session.config().app_config())?;

    session
        .display()
        .status()
        .checking("Fetching Minecraft versions");
    let versions = game_version_options(client.as_ref()).await;

    session.display().table().list(&versions);
    Ok(())
}

async fn handle_paths(session: &dyn Session) -> Result<()> {
    let layout = session.profile_layout()?;

    let mut pairs = vec![
        ("Working directory", layout.workdir().display().to_string()),
        ("Selection file", layout.selection_file().display().to_string()),
    ];

    match session.game_paths() {
        Ok(game_paths) => {
            pairs.push(("Game directory", game_paths.root.display().to_string()));
            for category in Category::ALL {
                pairs.push((
                    category.live_dir_name(),
                    format!(
                        "{} -> {}",
                        layout.category_root(category).display(),
                        game_paths.live_dir(category).display()
                    ),
                ));
            }
        }
        Err(e) => {
            pairs.push(("Game directory", format!("unresolved ({})", e)));
            for category in Category::ALL {
                pairs.push((
                    category.live_dir_name(),
                    layout.category_root(category).display().to_string(),
                ));
            }
        }
    }

    session.display().table().properties(&pairs);
    Ok(())
}

/// Explicit version, else the newest release the catalog offers
async fn resolve_game_version(client: &dyn CatalogClient, explicit: Option<String>) -> String {
    if let Some(version) = explicit {
        return version;
    }

    game_version_options(client)
        .await
        .into_iter()
        .next()
        .unwrap_or_else(|| FALLBACK_GAME_VERSIONS[0].to_string())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
