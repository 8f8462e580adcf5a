//! Status display for user feedback
//!
//! Semantic status lines on stdout, formatted for the detected terminal.

use super::styling::StyleManager;

/// Status display manager for semantic user feedback
pub struct StatusDisplay<'a> {
    styling: &'a StyleManager,
}

impl<'a> StatusDisplay<'a> {
    pub(crate) fn new(styling: &'a StyleManager) -> Self {
        Self { styling }
    }

    /// Output: `→ Checking game versions...`
    pub fn checking(&self, task: &str) {
        println!("{}", self.styling.format_working(&format!("{}...", task)));
    }

    /// Output: `✓ Default: 3 files copied`
    pub fn success(&self, item: &str, details: &str) {
        println!("{}", self.styling.format_success(&join_details(item, details)));
    }

    /// Output: `✗ Default: profile not found`
    pub fn error(&self, item: &str, details: &str) {
        println!("{}", self.styling.format_error(&join_details(item, details)));
    }

    pub fn warning(&self, message: &str) {
        println!("{}", self.styling.format_warning(message));
    }

    pub fn info(&self, message: &str) {
        println!("{}", self.styling.format_info(message));
    }

    pub fn message(&self, text: &str) {
        println!("{}", text);
    }

    pub fn subtle(&self, text: &str) {
        println!("{}", self.styling.style_subtle(text));
    }

    pub fn section(&self, title: &str) {
        println!("{}", self.styling.style_emphasis(title));
    }
}

pub(crate) fn join_details(item: &str, details: &str) -> String {
    if details.is_empty() {
        item.to_string()
    } else {
        format!("{}: {}", item, details)
    }
}
