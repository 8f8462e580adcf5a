//! Mock display provider implementation for testing
//!
//! Records every display call for assertions instead of printing.

use super::providers::*;
use std::sync::{Arc, Mutex, MutexGuard};

/// Recorded display call for testing
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCall {
    StatusChecking { task: String },
    StatusSuccess { item: String, details: String },
    StatusError { item: String, details: String },
    StatusWarning { message: String },
    StatusInfo { message: String },
    StatusMessage { text: String },
    StatusSubtle { text: String },
    StatusSection { title: String },

    ProgressSpinner { message: String },
    ProgressSetMessage { message: String },
    ProgressFinish { message: String },
    ProgressAbandon { message: String },
    ProgressFinishClear,

    Table { headers: Vec<String>, rows: Vec<Vec<String>> },
    List { items: Vec<String> },
    Properties { pairs: Vec<(String, String)> },
}

impl DisplayCall {
    /// Variant name, for counting calls of one kind
    pub fn call_type(&self) -> &'static str {
        match self {
            DisplayCall::StatusChecking { .. } => "checking",
            DisplayCall::StatusSuccess { .. } => "success",
            DisplayCall::StatusError { .. } => "error",
            DisplayCall::StatusWarning { .. } => "warning",
            DisplayCall::StatusInfo { .. } => "info",
            DisplayCall::StatusMessage { .. } => "message",
            DisplayCall::StatusSubtle { .. } => "subtle",
            DisplayCall::StatusSection { .. } => "section",
            DisplayCall::ProgressSpinner { .. } => "spinner",
            DisplayCall::ProgressSetMessage { .. } => "progress_message",
            DisplayCall::ProgressFinish { .. } => "progress_finish",
            DisplayCall::ProgressAbandon { .. } => "progress_abandon",
            DisplayCall::ProgressFinishClear => "progress_finish_clear",
            DisplayCall::Table { .. } => "table",
            DisplayCall::List { .. } => "list",
            DisplayCall::Properties { .. } => "properties",
        }
    }

    /// Every user-visible string carried by the call
    pub fn text(&self) -> String {
        match self {
            DisplayCall::StatusChecking { task } => task.clone(),
            DisplayCall::StatusSuccess { item, details } | DisplayCall::StatusError { item, details } => {
                format!("{} {}", item, details)
            }
            DisplayCall::StatusWarning { message }
            | DisplayCall::StatusInfo { message }
            | DisplayCall::ProgressSpinner { message }
            | DisplayCall::ProgressSetMessage { message }
            | DisplayCall::ProgressFinish { message }
            | DisplayCall::ProgressAbandon { message } => message.clone(),
            DisplayCall::StatusMessage { text } | DisplayCall::StatusSubtle { text } => text.clone(),
            DisplayCall::StatusSection { title } => title.clone(),
            DisplayCall::ProgressFinishClear => String::new(),
            DisplayCall::Table { headers, rows } => {
                let mut parts = headers.clone();
                parts.extend(rows.iter().flatten().cloned());
                parts.join(" ")
            }
            DisplayCall::List { items } => items.join(" "),
            DisplayCall::Properties { pairs } => pairs
                .iter()
                .map(|(k, v)| format!("{} {}", k, v))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

type CallLog = Arc<Mutex<Vec<DisplayCall>>>;

fn record(calls: &CallLog, call: DisplayCall) {
    lock(calls).push(call);
}

fn lock(calls: &CallLog) -> MutexGuard<'_, Vec<DisplayCall>> {
    calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Mock implementation of DisplayProvider that records all calls
#[derive(Clone, Default)]
pub struct MockDisplayProvider {
    calls: CallLog,
}

impl MockDisplayProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded display calls for testing assertions
    pub fn get_calls(&self) -> Vec<DisplayCall> {
        lock(&self.calls).clone()
    }

    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    pub fn has_call(&self, expected: &DisplayCall) -> bool {
        lock(&self.calls).contains(expected)
    }

    pub fn count_calls(&self, call_type: &str) -> usize {
        lock(&self.calls)
            .iter()
            .filter(|call| call.call_type() == call_type)
            .count()
    }

    /// Whether any recorded call mentions `needle`
    pub fn output_contains(&self, needle: &str) -> bool {
        lock(&self.calls).iter().any(|call| call.text().contains(needle))
    }
}

impl DisplayProvider for MockDisplayProvider {
    fn status(&self) -> Box<dyn StatusProvider> {
        Box::new(MockStatusProvider {
            calls: self.calls.clone(),
        })
    }

    fn progress(&self) -> Box<dyn ProgressProvider> {
        Box::new(MockProgressProvider {
            calls: self.calls.clone(),
        })
    }

    fn table(&self) -> Box<dyn StructuredProvider> {
        Box::new(MockStructuredProvider {
            calls: self.calls.clone(),
        })
    }
}

struct MockStatusProvider {
    calls: CallLog,
}

impl StatusProvider for MockStatusProvider {
    fn checking(&self, task: &str) {
        record(&self.calls, DisplayCall::StatusChecking { task: task.to_string() });
    }

    fn success(&self, item: &str, details: &str) {
        record(
            &self.calls,
            DisplayCall::StatusSuccess {
                item: item.to_string(),
                details: details.to_string(),
            },
        );
    }

    fn error(&self, item: &str, details: &str) {
        record(
            &self.calls,
            DisplayCall::StatusError {
                item: item.to_string(),
                details: details.to_string(),
            },
        );
    }

    fn warning(&self, message: &str) {
        record(&self.calls, DisplayCall::StatusWarning { message: message.to_string() });
    }

    fn info(&self, message: &str) {
        record(&self.calls, DisplayCall::StatusInfo { message: message.to_string() });
    }

    fn message(&self, text: &str) {
        record(&self.calls, DisplayCall::StatusMessage { text: text.to_string() });
    }

    fn subtle(&self, text: &str) {
        record(&self.calls, DisplayCall::StatusSubtle { text: text.to_string() });
    }

    fn section(&self, title: &str) {
        record(&self.calls, DisplayCall::StatusSection { title: title.to_string() });
    }
}

struct MockProgressProvider {
    calls: CallLog,
}

impl ProgressProvider for MockProgressProvider {
    fn spinner(&self, message: &str) -> Box<dyn ProgressTracker> {
        record(&self.calls, DisplayCall::ProgressSpinner { message: message.to_string() });
        Box::new(MockProgressTracker {
            calls: self.calls.clone(),
        })
    }
}

struct MockProgressTracker {
    calls: CallLog,
}

impl ProgressTracker for MockProgressTracker {
    fn set_message(&self, message: &str) {
        record(&self.calls, DisplayCall::ProgressSetMessage { message: message.to_string() });
    }

    fn finish(&self, message: &str) {
        record(&self.calls, DisplayCall::ProgressFinish { message: message.to_string() });
    }

    fn abandon(&self, message: &str) {
        record(&self.calls, DisplayCall::ProgressAbandon { message: message.to_string() });
    }

    fn finish_clear(&self) {
        record(&self.calls, DisplayCall::ProgressFinishClear);
    }
}

struct MockStructuredProvider {
    calls: CallLog,
}

impl StructuredProvider for MockStructuredProvider {
    fn table(&self, headers: &[&str], rows: &[Vec<String>]) {
        record(
            &self.calls,
            DisplayCall::Table {
                headers: headers.iter().map(|h| h.to_string()).collect(),
                rows: rows.to_vec(),
            },
        );
    }

    fn list(&self, items: &[String]) {
        record(&self.calls, DisplayCall::List { items: items.to_vec() });
    }

    fn properties(&self, pairs: &[(&str, String)]) {
        record(
            &self.calls,
            DisplayCall::Properties {
                pairs: pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    include!("mock.test.rs");
}
