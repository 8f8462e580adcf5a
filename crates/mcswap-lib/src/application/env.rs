//! Standard color and CI environment variables
//!
//! Applied on top of the configured color intent before CLI flags.

use crate::primitives::{ConfigError, TerminalCapsDetectIntent};
use serde::Deserialize;

/// Environment variables that affect output styling
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentConfig {
    /// Any non-empty value disables color
    pub no_color: Option<String>,
    /// 0/false disables, 1/2/3/true enables
    pub force_color: Option<String>,
    /// 0 disables color
    pub clicolor: Option<String>,
    /// Any value means CI
    pub ci: Option<String>,
}

impl EnvironmentConfig {
    /// Read from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Ok(envy::from_env()?)
    }

    /// Read from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(vars)?)
    }

    /// Fold the environment into a color intent
    ///
    /// CI wins outright. Otherwise CLICOLOR, NO_COLOR and FORCE_COLOR are
    /// applied in that order, so FORCE_COLOR has the last word.
    pub fn apply_color_config(&self, mut color: TerminalCapsDetectIntent) -> TerminalCapsDetectIntent {
        if self.ci.is_some() {
            return TerminalCapsDetectIntent::Never;
        }

        if self.clicolor.as_deref() == Some("0") {
            color = TerminalCapsDetectIntent::Never;
        }

        if self.no_color.as_deref().is_some_and(|v| !v.is_empty()) {
            color = TerminalCapsDetectIntent::Never;
        }

        match self.force_color.as_deref() {
            Some("0" | "false") => color = TerminalCapsDetectIntent::Never,
            Some("1" | "2" | "3" | "true") => color = TerminalCapsDetectIntent::Always,
            _ => {}
        }

        color
    }
}

#[cfg(test)]
mod tests {
    include!("env.test.rs");
}
