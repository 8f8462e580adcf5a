//! Catalog workflows built on [`CatalogClient`]
//!
//! Compatibility filtering and game-version ordering are pure; the async
//! helpers chain client calls one request at a time.

use super::modrinth::{CatalogClient, CatalogEntry, CatalogError, GameVersionTag, ModVersion};
use semver::Version;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Offered when the game version list cannot be fetched
pub const FALLBACK_GAME_VERSIONS: [&str; 2] = ["1.21.5", "1.20.1"];

/// Hits requested per search
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Keep versions that list both the loader and the game version
pub fn filter_compatible(versions: Vec<ModVersion>, loader: &str, game_version: &str) -> Vec<ModVersion> {
    versions
        .into_iter()
        .filter(|v| {
            v.loaders.iter().any(|l| l == loader)
                && v.game_versions.iter().any(|g| g == game_version)
        })
        .collect()
}

/// Release game versions, newest first
pub fn release_versions(tags: &[GameVersionTag]) -> Vec<String> {
    let mut versions: Vec<String> = tags
        .iter()
        .filter(|tag| tag.version_type == "release")
        .map(|tag| tag.version.clone())
        .collect();

    versions.sort_by(|a, b| compare_game_versions(b, a));
    versions
}

/// Lenient semantic parse: `1.21` reads as `1.21.0`
fn parse_game_version(raw: &str) -> Option<Version> {
    let parts: Vec<&str> = raw.split('.').collect();
    let padded = match parts.len() {
        1 => format!("{}.0.0", raw),
        2 => format!("{}.0", raw),
        _ => raw.to_string(),
    };
    Version::parse(&padded).ok()
}

/// Ascending order; unparsable versions sort below every parsable one
fn compare_game_versions(a: &str, b: &str) -> Ordering {
    match (parse_game_version(a), parse_game_version(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.cmp(b),
    }
}

/// Release versions to offer, or [`FALLBACK_GAME_VERSIONS`] when the catalog fails
pub async fn game_version_options(client: &dyn CatalogClient) -> Vec<String> {
    match client.game_versions().await {
        Ok(tags) => {
            let releases = release_versions(&tags);
            if releases.is_empty() {
                warn!("Catalog returned no release versions, using fallback list");
                fallback_game_versions()
            } else {
                releases
            }
        }
        Err(e) => {
            warn!(error = %e, "Could not fetch Minecraft versions, using fallback list");
            fallback_game_versions()
        }
    }
}

fn fallback_game_versions() -> Vec<String> {
    FALLBACK_GAME_VERSIONS.iter().map(|v| v.to_string()).collect()
}

/// Write the version's first file into `profile_dir`
pub async fn download_to_profile(
    client: &dyn CatalogClient,
    version: &ModVersion,
    profile_dir: &Path,
) -> Result<PathBuf, CatalogError> {
    let file = version
        .files
        .first()
        .ok_or_else(|| CatalogError::NoFilesAvailable {
            version: version.label().to_string(),
        })?;

    // Only the final component is trusted
    let filename = Path::new(&file.filename)
        .file_name()
        .ok_or_else(|| CatalogError::DownloadFailed {
            url: file.url.clone(),
            reason: format!("invalid file name '{}'", file.filename),
        })?;

    fs::create_dir_all(profile_dir).map_err(|source| CatalogError::Io {
        path: profile_dir.to_path_buf(),
        source,
    })?;

    let destination = profile_dir.join(filename);
    let bytes = client.download(&file.url, &destination).await?;

    debug!(path = %destination.display(), bytes, "Wrote downloaded file");
    Ok(destination)
}

/// Search, then keep hits with at least one compatible version
///
/// A hit whose version listing fails aborts the whole search.
pub async fn find_compatible_mods(
    client: &dyn CatalogClient,
    query: &str,
    limit: usize,
    loader: &str,
    game_version: &str,
) -> Result<Vec<CatalogEntry>, CatalogError> {
    let hits = client.search(query, limit).await?;
    let mut compatible = Vec::new();

    for hit in hits {
        let versions = client.list_versions(&hit.project_id).await?;
        if !filter_compatible(versions, loader, game_version).is_empty() {
            compatible.push(hit);
        }
    }

    debug!(query, loader, game_version, found = compatible.len(), "Filtered search results");
    Ok(compatible)
}

/// Download the first compatible version of a project into `profile_dir`
pub async fn download_compatible(
    client: &dyn CatalogClient,
    project_id: &str,
    loader: &str,
    game_version: &str,
    profile_dir: &Path,
) -> Result<PathBuf, CatalogError> {
    let versions = client.list_versions(project_id).await?;

    // First match is taken as-is; catalog order decides
    let version = filter_compatible(versions, loader, game_version)
        .into_iter()
        .next()
        .ok_or_else(|| CatalogError::NoCompatibleVersion {
            project_id: project_id.to_string(),
            loader: loader.to_string(),
            game_version: game_version.to_string(),
        })?;

    debug!(project_id, version = version.label(), "Selected version");
    download_to_profile(client, &version, profile_dir).await
}

#[cfg(test)]
mod tests {
    include!("catalog.test.rs");
}
