//! Progress display for long-running operations
//!
//! Spinners for requests of unknown duration. Hidden when stdout is not a
//! terminal so piped output stays clean.

use super::styling::StyleManager;
use crate::terminal::TerminalCapabilities;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const UNICODE_TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"];
const ASCII_TICKS: &[&str] = &["-", "\\", "|", "/", "+"];

/// Progress display manager
pub struct ProgressDisplay<'a> {
    styling: &'a StyleManager,
    capabilities: &'a TerminalCapabilities,
}

impl<'a> ProgressDisplay<'a> {
    pub(crate) fn new(styling: &'a StyleManager, capabilities: &'a TerminalCapabilities) -> Self {
        Self {
            styling,
            capabilities,
        }
    }

    /// Spinner with a message, ticking until finished
    pub fn spinner(&self, message: &str) -> ProgressBar {
        let bar = ProgressBar::new_spinner();
        if !self.capabilities.is_tty {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }

        bar.set_style(spinner_style(self.capabilities.unicode));
        bar.set_message(self.styling.style_info(message));
        bar.enable_steady_tick(Duration::from_millis(100));
        bar
    }
}

pub(crate) fn spinner_style(unicode: bool) -> ProgressStyle {
    let ticks = if unicode { UNICODE_TICKS } else { ASCII_TICKS };
    ProgressStyle::default_spinner()
        .tick_strings(ticks)
}
