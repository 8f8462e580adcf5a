//! Modrinth API client implementation
//!
//! Provides production (Live) and test (Mock) implementations of the catalog
//! client. Every call is a single GET; any transport failure or non-2xx
//! response fails that call.

use crate::networking::{NetworkingError, NetworkingManager};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Public Modrinth API root
pub const DEFAULT_MODRINTH_URL: &str = "https://api.modrinth.com/v2";

/// Catalog errors, all fatal to the requested operation
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog unavailable at {endpoint}: {reason}")]
    CatalogUnavailable { endpoint: String, reason: String },

    #[error("Failed to download {url}: {reason}")]
    DownloadFailed { url: String, reason: String },

    #[error("Version '{version}' has no downloadable files")]
    NoFilesAvailable { version: String },

    #[error("No version of '{project_id}' matches loader '{loader}' and Minecraft {game_version}")]
    NoCompatibleVersion {
        project_id: String,
        loader: String,
        game_version: String,
    },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Search result hit from Modrinth API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchHit {
    pub project_id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub downloads: u64,
}

/// Search results response from Modrinth API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResults {
    pub hits: Vec<SearchHit>,
    pub offset: usize,
    pub limit: usize,
    pub total_hits: usize,
}

/// Version file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionFile {
    pub url: String,
    pub filename: String,
    pub primary: bool,
    pub size: u64,
}

/// Version descriptor; missing lists decode as empty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModVersion {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub version_number: String,
    pub version_type: String,
    pub loaders: Vec<String>,
    pub game_versions: Vec<String>,
    pub files: Vec<VersionFile>,
}

impl ModVersion {
    /// Label used in messages: version number, falling back to name then id
    pub fn label(&self) -> &str {
        [&self.version_number, &self.name, &self.id]
            .into_iter()
            .find(|s| !s.is_empty())
            .map(String::as_str)
            .unwrap_or("unknown")
    }
}

/// Entry of `GET /tag/game_version`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameVersionTag {
    pub version: String,
    pub version_type: String,
    pub major: bool,
}

/// Transient (title, project id) pair surfaced from a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: String,
    pub project_id: String,
}

impl From<SearchHit> for CatalogEntry {
    fn from(hit: SearchHit) -> Self {
        Self {
            title: hit.title,
            project_id: hit.project_id,
        }
    }
}

type CatalogFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, CatalogError>> + Send + 'a>>;

/// Read-only operations against the mod catalog
pub trait CatalogClient: Send + Sync {
    /// `GET /search?query=&limit=`
    fn search(&self, query: &str, limit: usize) -> CatalogFuture<'_, Vec<CatalogEntry>>;

    /// `GET /project/{id}/version`
    fn list_versions(&self, project_id: &str) -> CatalogFuture<'_, Vec<ModVersion>>;

    /// `GET /tag/game_version`
    fn game_versions(&self) -> CatalogFuture<'_, Vec<GameVersionTag>>;

    /// Stream a direct download URL into `destination`, returning the bytes written
    fn download(&self, url: &str, destination: &Path) -> CatalogFuture<'_, u64>;
}

/// Live Modrinth API client (production)
pub struct LiveModrinthClient {
    networking: Arc<NetworkingManager>,
    base_url: String,
}

impl LiveModrinthClient {
    /// Create client with custom base URL (for mirrors/testing)
    pub fn with_base_url(networking: Arc<NetworkingManager>, base_url: String) -> Self {
        Self {
            networking,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn search_url(&self, query: &str, limit: usize) -> String {
        format!(
            "{}/search?query={}&limit={}",
            self.base_url,
            utf8_percent_encode(query, NON_ALPHANUMERIC),
            limit
        )
    }

    fn versions_url(&self, project_id: &str) -> String {
        format!(
            "{}/project/{}/version",
            self.base_url,
            utf8_percent_encode(project_id, NON_ALPHANUMERIC)
        )
    }

    fn game_versions_url(&self) -> String {
        format!("{}/tag/game_version", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, CatalogError> {
        let unavailable = |reason: String| CatalogError::CatalogUnavailable {
            endpoint: url.clone(),
            reason,
        };

        let body = self
            .networking
            .get_bytes(&url)
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        serde_json::from_slice(&body)
            .map_err(|e| unavailable(format!("unexpected response body: {}", e)))
    }
}

impl CatalogClient for LiveModrinthClient {
    fn search(&self, query: &str, limit: usize) -> CatalogFuture<'_, Vec<CatalogEntry>> {
        let url = self.search_url(query, limit);
        Box::pin(async move {
            debug!(%url, "Searching catalog");
            let results: SearchResults = self.get_json(url).await?;
            Ok(results.hits.into_iter().map(CatalogEntry::from).collect())
        })
    }

    fn list_versions(&self, project_id: &str) -> CatalogFuture<'_, Vec<ModVersion>> {
        let url = self.versions_url(project_id);
        Box::pin(async move {
            debug!(%url, "Listing project versions");
            self.get_json(url).await
        })
    }

    fn game_versions(&self) -> CatalogFuture<'_, Vec<GameVersionTag>> {
        let url = self.game_versions_url();
        Box::pin(async move { self.get_json(url).await })
    }

    fn download(&self, url: &str, destination: &Path) -> CatalogFuture<'_, u64> {
        let url = url.to_string();
        let destination = destination.to_path_buf();
        Box::pin(async move {
            debug!(%url, path = %destination.display(), "Downloading file");
            let response = self.networking.get_response(&url).await.map_err(
                |e: NetworkingError| CatalogError::DownloadFailed {
                    url: url.clone(),
                    reason: e.to_string(),
                },
            )?;

            let result = stream_to_file(response, &url, &destination).await;
            if result.is_err() {
                // Never leave a truncated file behind
                let _ = tokio::fs::remove_file(&destination).await;
            }
            result
        })
    }
}

async fn stream_to_file(
    mut response: reqwest::Response,
    url: &str,
    destination: &Path,
) -> Result<u64, CatalogError> {
    let io_error = |source: std::io::Error| CatalogError::Io {
        path: destination.to_path_buf(),
        source,
    };

    let mut file = tokio::fs::File::create(destination)
        .await
        .map_err(io_error)?;
    let mut written = 0u64;

    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| CatalogError::DownloadFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?
    {
        file.write_all(&chunk).await.map_err(io_error)?;
        written += chunk.len() as u64;
    }

    file.flush().await.map_err(io_error)?;
    Ok(written)
}

/// Mock catalog client (testing)
///
/// Unregistered queries, projects and URLs fail the way an unreachable
/// catalog would.
#[derive(Clone, Default)]
pub struct MockModrinthClient {
    search_responses: Arc<Mutex<HashMap<String, Result<Vec<CatalogEntry>, String>>>>,
    version_responses: Arc<Mutex<HashMap<String, Result<Vec<ModVersion>, String>>>>,
    game_version_response: Arc<Mutex<Option<Result<Vec<GameVersionTag>, String>>>>,
    download_responses: Arc<Mutex<HashMap<String, Result<Vec<u8>, String>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockModrinthClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_result(self, query: &str, result: Result<Vec<CatalogEntry>, String>) -> Self {
        lock(&self.search_responses).insert(query.to_string(), result);
        self
    }

    pub fn with_versions(self, project_id: &str, result: Result<Vec<ModVersion>, String>) -> Self {
        lock(&self.version_responses).insert(project_id.to_string(), result);
        self
    }

    pub fn with_game_versions(self, result: Result<Vec<GameVersionTag>, String>) -> Self {
        *lock(&self.game_version_response) = Some(result);
        self
    }

    pub fn with_download(self, url: &str, result: Result<Vec<u8>, String>) -> Self {
        lock(&self.download_responses).insert(url.to_string(), result);
        self
    }

    /// Calls in the order they were made, e.g. `search:sodium`
    pub fn get_calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    fn record(&self, call: String) {
        lock(&self.calls).push(call);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn mock_unavailable(endpoint: &str, reason: String) -> CatalogError {
    CatalogError::CatalogUnavailable {
        endpoint: endpoint.to_string(),
        reason,
    }
}

impl CatalogClient for MockModrinthClient {
    fn search(&self, query: &str, _limit: usize) -> CatalogFuture<'_, Vec<CatalogEntry>> {
        self.record(format!("search:{}", query));
        let response = lock(&self.search_responses).get(query).cloned();
        let query = query.to_string();
        Box::pin(async move {
            match response {
                Some(Ok(entries)) => Ok(entries),
                Some(Err(reason)) => Err(mock_unavailable("/search", reason)),
                None => Err(mock_unavailable(
                    "/search",
                    format!("No mock response for query: {}", query),
                )),
            }
        })
    }

    fn list_versions(&self, project_id: &str) -> CatalogFuture<'_, Vec<ModVersion>> {
        self.record(format!("versions:{}", project_id));
        let response = lock(&self.version_responses).get(project_id).cloned();
        let endpoint = format!("/project/{}/version", project_id);
        Box::pin(async move {
            match response {
                Some(Ok(versions)) => Ok(versions),
                Some(Err(reason)) => Err(mock_unavailable(&endpoint, reason)),
                None => Err(mock_unavailable(&endpoint, "No mock response".to_string())),
            }
        })
    }

    fn game_versions(&self) -> CatalogFuture<'_, Vec<GameVersionTag>> {
        self.record("game_versions".to_string());
        let response = lock(&self.game_version_response).clone();
        Box::pin(async move {
            match response {
                Some(Ok(tags)) => Ok(tags),
                Some(Err(reason)) => Err(mock_unavailable("/tag/game_version", reason)),
                None => Err(mock_unavailable(
                    "/tag/game_version",
                    "No mock response".to_string(),
                )),
            }
        })
    }

    fn download(&self, url: &str, destination: &Path) -> CatalogFuture<'_, u64> {
        self.record(format!("download:{}", url));
        let response = lock(&self.download_responses).get(url).cloned();
        let url = url.to_string();
        let destination = destination.to_path_buf();
        Box::pin(async move {
            match response {
                Some(Ok(bytes)) => {
                    std::fs::write(&destination, &bytes).map_err(|source| CatalogError::Io {
                        path: destination.clone(),
                        source,
                    })?;
                    Ok(bytes.len() as u64)
                }
                Some(Err(reason)) => Err(CatalogError::DownloadFailed { url, reason }),
                None => Err(CatalogError::DownloadFailed {
                    reason: "No mock response".to_string(),
                    url,
                }),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    include!("modrinth.test.rs");
}
