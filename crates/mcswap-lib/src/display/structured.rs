//! Structured output display (tables, lists)

use super::styling::StyleManager;
use console::measure_text_width;

/// Structured display manager for tables and lists
pub struct StructuredDisplay<'a> {
    styling: &'a StyleManager,
}

impl<'a> StructuredDisplay<'a> {
    pub(crate) fn new(styling: &'a StyleManager) -> Self {
        Self { styling }
    }

    pub fn table(&self, headers: &[&str], rows: &[Vec<String>]) {
        for line in format_table(headers, rows) {
            println!("{}", line);
        }
    }

    pub fn list(&self, items: &[String]) {
        for item in items {
            println!("  {} {}", self.styling.bullet(), item);
        }
    }

    /// Key-value pairs with aligned keys
    pub fn properties(&self, pairs: &[(&str, String)]) {
        let width = pairs.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
        for (key, value) in pairs {
            let padded = format!("{:width$}", key, width = width);
            println!("{}  {}", self.styling.style_subtle(&padded), value);
        }
    }
}

/// Left-aligned columns separated by two spaces, header underlined with dashes
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|h| measure_text_width(h)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let width = measure_text_width(cell);
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(width),
                None => widths.push(width),
            }
        }
    }

    let render = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let pad = widths[i].saturating_sub(measure_text_width(cell));
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render(headers.to_vec()));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        lines.push(render(row.iter().map(String::as_str).collect()));
    }
    lines
}

#[cfg(test)]
mod tests {
    include!("structured.test.rs");
}
