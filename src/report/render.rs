// Text rendering of a FleetReport. Styling is delegated to a Renderer.

use console::Style;

use super::{FleetReport, Section};

const DIVIDER: &str = "------------------------------------";

/// Presentation roles. Implementations only decorate text, never change it.
pub trait Renderer {
    /// Section headers (grand totals).
    fn emphasize(&self, text: &str) -> String;
    /// Divider lines, sub-headings and nested submetric names.
    fn divider(&self, text: &str) -> String;
    /// Location names.
    fn entity(&self, text: &str) -> String;
    /// Counts.
    fn value(&self, text: &str) -> String;
}

/// No styling; used for non-interactive output and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn emphasize(&self, text: &str) -> String {
        text.to_string()
    }

    fn divider(&self, text: &str) -> String {
        text.to_string()
    }

    fn entity(&self, text: &str) -> String {
        text.to_string()
    }

    fn value(&self, text: &str) -> String {
        text.to_string()
    }
}

/// ANSI colors: yellow headers, cyan dividers, green locations, red counts.
#[derive(Debug, Clone)]
pub struct ConsoleRenderer {
    header: Style,
    divider: Style,
    entity: Style,
    value: Style,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        // Whether to color is decided by config, not by console's own terminal detection.
        Self {
            header: Style::new().yellow().force_styling(true),
            divider: Style::new().cyan().force_styling(true),
            entity: Style::new().green().force_styling(true),
            value: Style::new().red().force_styling(true),
        }
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for ConsoleRenderer {
    fn emphasize(&self, text: &str) -> String {
        self.header.apply_to(text).to_string()
    }

    fn divider(&self, text: &str) -> String {
        self.divider.apply_to(text).to_string()
    }

    fn entity(&self, text: &str) -> String {
        self.entity.apply_to(text).to_string()
    }

    fn value(&self, text: &str) -> String {
        self.value.apply_to(text).to_string()
    }
}

/// Renders every section in order, separated by a blank line.
pub fn render(report: &FleetReport, renderer: &dyn Renderer) -> String {
    let mut output = String::new();
    for (i, section) in report.sections.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        render_section(&mut output, section, renderer);
    }
    output
}

fn render_section(output: &mut String, section: &Section, renderer: &dyn Renderer) {
    let kind = section.kind;
    output.push_str(&renderer.emphasize(&format!("{}: {}", kind.header(), section.total)));
    output.push('\n');
    output.push_str(&renderer.divider(DIVIDER));
    output.push('\n');
    output.push_str(&renderer.divider(kind.subheading()));
    output.push('\n');

    for entry in &section.entries {
        if kind.is_nested() {
            output.push_str(&format!("- {}:\n", renderer.entity(&entry.key)));
            for (sub, count) in &entry.breakdown {
                output.push_str(&format!(
                    "  - {}: {}\n",
                    renderer.divider(sub),
                    renderer.value(&count.to_string())
                ));
            }
        } else {
            output.push_str(&format!(
                "- {}: {}\n",
                renderer.entity(&entry.key),
                renderer.value(&entry.count.to_string())
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_renderer_is_identity() {
        let r = PlainRenderer;
        assert_eq!(r.emphasize("x"), "x");
        assert_eq!(r.divider("x"), "x");
        assert_eq!(r.entity("x"), "x");
        assert_eq!(r.value("7"), "7");
    }

    #[test]
    fn console_renderer_wraps_in_ansi_codes() {
        let r = ConsoleRenderer::new();
        let styled = r.value("7");
        assert!(styled.contains('7'));
        assert!(styled.starts_with("\u{1b}["));
        assert_ne!(styled, "7");
    }

    #[test]
    fn console_renderer_roles_are_distinct() {
        let r = ConsoleRenderer::new();
        let styles = [r.emphasize("x"), r.divider("x"), r.entity("x"), r.value("x")];
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
