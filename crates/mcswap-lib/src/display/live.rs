//! Live display provider implementation
//!
//! Production implementation of display providers on top of the global
//! [`Display`] and indicatif.

use super::Display;
use super::providers::*;
use indicatif::ProgressBar;

/// Live implementation of DisplayProvider
#[derive(Debug, Default)]
pub struct LiveDisplayProvider;

impl LiveDisplayProvider {
    pub fn new() -> Self {
        Self
    }
}

impl DisplayProvider for LiveDisplayProvider {
    fn status(&self) -> Box<dyn StatusProvider> {
        Box::new(LiveStatusProvider)
    }

    fn progress(&self) -> Box<dyn ProgressProvider> {
        Box::new(LiveProgressProvider)
    }

    fn table(&self) -> Box<dyn StructuredProvider> {
        Box::new(LiveStructuredProvider)
    }
}

struct LiveStatusProvider;

impl StatusProvider for LiveStatusProvider {
    fn checking(&self, task: &str) {
        Display::status().checking(task);
    }

    fn success(&self, item: &str, details: &str) {
        Display::status().success(item, details);
    }

    fn error(&self, item: &str, details: &str) {
        Display::status().error(item, details);
    }

    fn warning(&self, message: &str) {
        Display::status().warning(message);
    }

    fn info(&self, message: &str) {
        Display::status().info(message);
    }

    fn message(&self, text: &str) {
        Display::status().message(text);
    }

    fn subtle(&self, text: &str) {
        Display::status().subtle(text);
    }

    fn section(&self, title: &str) {
        Display::status().section(title);
    }
}

struct LiveProgressProvider;

impl ProgressProvider for LiveProgressProvider {
    fn spinner(&self, message: &str) -> Box<dyn ProgressTracker> {
        Box::new(SpinnerTracker {
            bar: Display::progress().spinner(message),
        })
    }
}

/// Progress tracker that wraps an indicatif ProgressBar directly
struct SpinnerTracker {
    bar: ProgressBar,
}

impl ProgressTracker for SpinnerTracker {
    fn set_message(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    fn abandon(&self, message: &str) {
        self.bar.abandon_with_message(message.to_string());
    }

    fn finish_clear(&self) {
        self.bar.finish_and_clear();
    }
}

struct LiveStructuredProvider;

impl StructuredProvider for LiveStructuredProvider {
    fn table(&self, headers: &[&str], rows: &[Vec<String>]) {
        Display::table().table(headers, rows);
    }

    fn list(&self, items: &[String]) {
        Display::table().list(items);
    }

    fn properties(&self, pairs: &[(&str, String)]) {
        Display::table().properties(pairs);
    }
}
