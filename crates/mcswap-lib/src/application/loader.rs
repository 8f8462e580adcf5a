//! Configuration loading
//!
//! Coordinates loading configuration from env files, the environment and
//! the command line.

use crate::primitives::ConfigError;
use std::path::Path;
use tracing::debug;

use super::{config::AppConfig, env::EnvironmentConfig};

/// Env files read before the command line is parsed; the first to set a key wins
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Load `.env.local` then `.env` from `dir`; missing files are skipped
pub fn load_env_files(dir: &Path) -> Result<(), ConfigError> {
    for env_file in ENV_FILES {
        let path = dir.join(env_file);
        match dotenvy::from_path(&path) {
            Ok(()) => debug!(file = %path.display(), "Loaded environment file"),
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(ConfigError::EnvFileError {
                    file: env_file.to_string(),
                    source: e,
                });
            }
        }
    }
    Ok(())
}

impl AppConfig {
    /// Layer parsed CLI values over defaults and the color environment
    pub fn resolve(cli: AppConfig) -> Result<Self, ConfigError> {
        Self::resolve_with_env(cli, &EnvironmentConfig::load()?)
    }

    pub fn resolve_with_env(cli: AppConfig, env: &EnvironmentConfig) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.color = env.apply_color_config(config.color);

        let mut config = config.merge_with(cli);
        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
