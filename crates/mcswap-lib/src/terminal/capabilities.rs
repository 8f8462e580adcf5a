use crate::application::AppConfig;
use crate::primitives::*;
use serde::Deserialize;
use std::io::{self, IsTerminal};
use thiserror::Error;

/// Terminal capability detection errors
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("Failed to parse terminal environment: {source}")]
    EnvironmentParsingFailed {
        #[from]
        source: envy::Error,
    },
}

/// Terminal-related environment variables
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TerminalEnvConfig {
    pub term: Option<String>,
    pub colorterm: Option<String>,
    pub lang: Option<String>,
    pub lc_all: Option<String>,
    pub wt_session: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TerminalCapabilities {
    pub color: TerminalColorCaps,
    pub unicode: bool,
    pub is_tty: bool,
}

impl TerminalCapabilities {
    pub fn detect_from_config(config: &AppConfig) -> Result<Self, TerminalError> {
        let env_config = envy::from_env::<TerminalEnvConfig>()?;
        let is_tty = io::stdout().is_terminal();

        Ok(Self::from_environment(config.color, is_tty, &env_config))
    }

    /// Decide capabilities from already-gathered inputs
    pub fn from_environment(
        intent: TerminalCapsDetectIntent,
        is_tty: bool,
        env: &TerminalEnvConfig,
    ) -> Self {
        let detected = detect_color_level(env);

        let color = match intent {
            TerminalCapsDetectIntent::Never => TerminalColorCaps::None,
            TerminalCapsDetectIntent::Always => detected.max(TerminalColorCaps::Ansi16),
            TerminalCapsDetectIntent::Auto if is_tty => detected,
            TerminalCapsDetectIntent::Auto => TerminalColorCaps::None,
        };

        Self {
            color,
            unicode: detect_unicode(env),
            is_tty,
        }
    }

    /// Plain output: no color, ASCII symbols
    pub fn minimal() -> Self {
        Self {
            color: TerminalColorCaps::None,
            unicode: false,
            is_tty: false,
        }
    }

    pub fn supports_color(&self) -> bool {
        self.color != TerminalColorCaps::None
    }
}

fn detect_color_level(env: &TerminalEnvConfig) -> TerminalColorCaps {
    if let Some(colorterm) = env.colorterm.as_deref() {
        let colorterm = colorterm.to_lowercase();
        if colorterm == "truecolor" || colorterm == "24bit" {
            return TerminalColorCaps::TrueColor;
        }
    }

    if env.wt_session.is_some() {
        return TerminalColorCaps::TrueColor;
    }

    match env.term.as_deref() {
        Some("dumb") => TerminalColorCaps::None,
        Some(term) if term.contains("256color") => TerminalColorCaps::Ansi256,
        Some(_) => TerminalColorCaps::Ansi16,
        None if cfg!(windows) => TerminalColorCaps::Ansi16,
        None => TerminalColorCaps::None,
    }
}

fn detect_unicode(env: &TerminalEnvConfig) -> bool {
    if cfg!(windows) {
        return env.wt_session.is_some();
    }

    [env.lc_all.as_deref(), env.lang.as_deref()]
        .into_iter()
        .flatten()
        .any(|value| {
            let value = value.to_lowercase();
            value.contains("utf-8") || value.contains("utf8")
        })
}

#[cfg(test)]
mod tests {
    include!("capabilities.test.rs");
}
