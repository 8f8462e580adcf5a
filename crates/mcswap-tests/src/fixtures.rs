//! Modrinth response bodies for mockito
//!
//! Shapes follow the live API closely enough for the client's decoding,
//! including fields the client ignores.

use serde_json::{Value, json};

/// Body of `GET /search`
pub fn search_body(hits: &[(&str, &str)]) -> String {
    let hits: Vec<Value> = hits
        .iter()
        .map(|(project_id, title)| {
            json!({
                "project_id": project_id,
                "slug": title.to_lowercase().replace(' ', "-"),
                "title": title,
                "description": format!("{} for tests", title),
                "project_type": "mod",
                "downloads": 1000,
                "categories": ["optimization"],
            })
        })
        .collect();

    json!({
        "total_hits": hits.len(),
        "hits": hits,
        "offset": 0,
        "limit": 20,
    })
    .to_string()
}

/// One entry of `GET /project/{id}/version`
pub fn version(
    version_number: &str,
    loaders: &[&str],
    game_versions: &[&str],
    files: &[(&str, &str)],
) -> Value {
    let files: Vec<Value> = files
        .iter()
        .enumerate()
        .map(|(i, (url, filename))| {
            json!({
                "url": url,
                "filename": filename,
                "primary": i == 0,
                "size": 3,
                "hashes": { "sha1": "0000" },
            })
        })
        .collect();

    json!({
        "id": format!("v-{}", version_number),
        "project_id": "project",
        "name": format!("Release {}", version_number),
        "version_number": version_number,
        "version_type": "release",
        "loaders": loaders,
        "game_versions": game_versions,
        "files": files,
        "dependencies": [],
    })
}

/// Body of `GET /project/{id}/version`
pub fn versions_body(versions: Vec<Value>) -> String {
    Value::Array(versions).to_string()
}

/// Body of `GET /tag/game_version`, from `(version, version_type)` pairs
pub fn game_versions_body(tags: &[(&str, &str)]) -> String {
    let tags: Vec<Value> = tags
        .iter()
        .map(|(version, version_type)| {
            json!({
                "version": version,
                "version_type": version_type,
                "date": "2024-01-01T00:00:00Z",
                "major": false,
            })
        })
        .collect();
    Value::Array(tags).to_string()
}
