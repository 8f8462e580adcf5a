//! Display provider traits for dependency injection
//!
//! Abstracts all user communication behind testable traits so command
//! handlers can run against a recording mock.

use crate::profiles::OperationReport;

/// Provider trait for all user-facing communication
pub trait DisplayProvider {
    /// Display status messages with semantic meaning
    fn status(&self) -> Box<dyn StatusProvider>;

    /// Display progress for long-running operations
    fn progress(&self) -> Box<dyn ProgressProvider>;

    /// Display structured output (tables, lists)
    fn table(&self) -> Box<dyn StructuredProvider>;
}

/// Provider trait for status updates and user feedback
pub trait StatusProvider {
    /// Display a working/checking status
    fn checking(&self, task: &str);

    /// Display a success status with optional details
    fn success(&self, item: &str, details: &str);

    /// Display an error status with details
    fn error(&self, item: &str, details: &str);

    fn warning(&self, message: &str);

    fn info(&self, message: &str);

    /// Display a simple message without status symbols
    fn message(&self, text: &str);

    /// Display a subtle/secondary message
    fn subtle(&self, text: &str);

    /// Display a header for a section of output
    fn section(&self, title: &str);
}

/// Provider trait for progress tracking
pub trait ProgressProvider {
    /// Create a spinner for operations with unknown duration
    fn spinner(&self, message: &str) -> Box<dyn ProgressTracker>;
}

/// Individual progress tracker interface
pub trait ProgressTracker {
    fn set_message(&self, message: &str);

    /// Finish with success message
    fn finish(&self, message: &str);

    /// Abandon with error message
    fn abandon(&self, message: &str);

    /// Finish and clear the progress line
    fn finish_clear(&self);
}

/// Provider trait for structured output
pub trait StructuredProvider {
    /// Display data in a table format
    fn table(&self, headers: &[&str], rows: &[Vec<String>]);

    /// Display a simple list
    fn list(&self, items: &[String]);

    /// Display key-value pairs
    fn properties(&self, pairs: &[(&str, String)]);
}

/// Extension trait for common display patterns used in commands
pub trait DisplayProviderExt: DisplayProvider {
    /// Summarize a best-effort operation, listing every skipped item
    fn display_report(&self, operation: &str, report: &OperationReport) {
        let status = self.status();

        if report.is_clean() {
            status.success(
                operation,
                &format!("{} item{}", report.succeeded, plural(report.succeeded)),
            );
            return;
        }

        status.warning(&format!(
            "{} completed with {} warning{} ({} item{} succeeded)",
            operation,
            report.warnings.len(),
            plural(report.warnings.len()),
            report.succeeded,
            plural(report.succeeded),
        ));
        for warning in &report.warnings {
            status.subtle(&format!("   {}: {}", warning.path.display(), warning.message));
        }
    }
}

impl<T: DisplayProvider + ?Sized> DisplayProviderExt for T {}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
