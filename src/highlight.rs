use inksac::prelude::*;

/// Tints diagnostics when the session supports color; passes them through
/// untouched otherwise, so piped output stays plain bytes.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticHighlighter {
    color_support: ColorSupport,
}

impl Default for DiagnosticHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn error(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();

        message.style(error_style).to_string()
    }
}
