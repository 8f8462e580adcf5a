//! Terminal display system
//!
//! Provides semantic APIs for user-facing communication that automatically
//! adapt to terminal capabilities. Separates concerns between logging (tracing)
//! and user interaction (status, tables, progress).

use crate::terminal::TerminalCapabilities;
use std::sync::OnceLock;

pub mod live;
pub mod mock;
pub mod progress;
pub mod providers;
pub mod status;
pub mod structured;
pub mod styling;

// Re-export provider traits and implementations for easy access
pub use live::LiveDisplayProvider;
pub use mock::{DisplayCall, MockDisplayProvider};
pub use providers::{
    DisplayProvider, DisplayProviderExt, ProgressProvider, ProgressTracker, StatusProvider,
    StructuredProvider,
};

// Global display manager - initialized once with terminal capabilities
static GLOBAL_DISPLAY: OnceLock<Display> = OnceLock::new();

/// Main display manager that coordinates all user-facing communication
pub struct Display {
    capabilities: TerminalCapabilities,
    styling: styling::StyleManager,
}

impl Display {
    fn new(capabilities: TerminalCapabilities) -> Self {
        let styling = styling::StyleManager::new(&capabilities);
        Self {
            capabilities,
            styling,
        }
    }

    /// Initialize global display system with terminal capabilities
    ///
    /// The first call wins; later calls return the existing instance.
    pub fn init(capabilities: TerminalCapabilities) -> &'static Self {
        GLOBAL_DISPLAY.get_or_init(|| Self::new(capabilities))
    }

    /// Global display, falling back to plain output if never initialized
    pub fn global() -> &'static Self {
        GLOBAL_DISPLAY.get_or_init(|| Self::new(TerminalCapabilities::minimal()))
    }

    /// Status updates with semantic intent
    pub fn status() -> status::StatusDisplay<'static> {
        status::StatusDisplay::new(&Self::global().styling)
    }

    /// Progress tracking for long operations
    pub fn progress() -> progress::ProgressDisplay<'static> {
        let display = Self::global();
        progress::ProgressDisplay::new(&display.styling, &display.capabilities)
    }

    /// Structured output (tables, lists)
    pub fn table() -> structured::StructuredDisplay<'static> {
        structured::StructuredDisplay::new(&Self::global().styling)
    }

    pub fn capabilities() -> &'static TerminalCapabilities {
        &Self::global().capabilities
    }

    pub fn styling() -> &'static styling::StyleManager {
        &Self::global().styling
    }
}
