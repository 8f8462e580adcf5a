//! Terminal-aware styling
//!
//! Semantic colors and symbols derived from detected terminal capabilities.
//! Without color support every `style_*` call returns the text unchanged.

use crate::terminal::TerminalCapabilities;
use console::Style;

/// Status symbols for one character set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    pub checkmark: &'static str,
    pub cross: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
    pub bullet: &'static str,
    pub arrow: &'static str,
}

impl Symbols {
    pub const UNICODE: Symbols = Symbols {
        checkmark: "✓",
        cross: "✗",
        warning: "⚠",
        info: "ℹ",
        bullet: "•",
        arrow: "→",
    };

    pub const ASCII: Symbols = Symbols {
        checkmark: "+",
        cross: "x",
        warning: "!",
        info: "i",
        bullet: "-",
        arrow: ">",
    };
}

/// Style manager for user-facing output
#[derive(Debug, Clone)]
pub struct StyleManager {
    color: bool,
    symbols: Symbols,
    success: Style,
    error: Style,
    warning: Style,
    info: Style,
    emphasis: Style,
    subtle: Style,
}

impl StyleManager {
    pub fn new(capabilities: &TerminalCapabilities) -> Self {
        let color = capabilities.supports_color();
        let symbols = if capabilities.unicode {
            Symbols::UNICODE
        } else {
            Symbols::ASCII
        };

        Self {
            color,
            symbols,
            success: Style::new().green(),
            error: Style::new().red().bold(),
            warning: Style::new().yellow(),
            info: Style::new().cyan(),
            emphasis: Style::new().bold(),
            subtle: Style::new().dim(),
        }
    }

    fn apply(&self, style: &Style, text: &str) -> String {
        if self.color {
            style.apply_to(text).force_styling(true).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    pub fn style_success(&self, text: &str) -> String {
        self.apply(&self.success, text)
    }

    pub fn style_error(&self, text: &str) -> String {
        self.apply(&self.error, text)
    }

    pub fn style_warning(&self, text: &str) -> String {
        self.apply(&self.warning, text)
    }

    pub fn style_info(&self, text: &str) -> String {
        self.apply(&self.info, text)
    }

    pub fn style_emphasis(&self, text: &str) -> String {
        self.apply(&self.emphasis, text)
    }

    pub fn style_subtle(&self, text: &str) -> String {
        self.apply(&self.subtle, text)
    }

    /// Format success message with symbol and styling
    pub fn format_success(&self, message: &str) -> String {
        format!("{} {}", self.style_success(self.symbols.checkmark), message)
    }

    pub fn format_error(&self, message: &str) -> String {
        format!("{} {}", self.style_error(self.symbols.cross), message)
    }

    pub fn format_warning(&self, message: &str) -> String {
        format!("{} {}", self.style_warning(self.symbols.warning), message)
    }

    pub fn format_info(&self, message: &str) -> String {
        format!("{} {}", self.style_info(self.symbols.info), message)
    }

    /// Format working/progress message
    pub fn format_working(&self, message: &str) -> String {
        format!("{} {}", self.style_info(self.symbols.arrow), message)
    }

    pub fn bullet(&self) -> &'static str {
        self.symbols.bullet
    }
}

#[cfg(test)]
mod tests {
    include!("styling.test.rs");
}
