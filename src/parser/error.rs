use ariadne::{ColorGenerator, Label, Report, ReportKind};

use crate::lexer::Span;

use std::fmt;

/// The single error kind of the pipeline, raised only by the parser at the
/// first token that does not match an expected category or production.
/// `position` (1-based line and column) is present only when the parse call
/// was handed the source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub expected: String,
    pub found: String,
    pub span: Span,
    pub position: Option<(usize, usize)>,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some((line, column)) => write!(
                f,
                "expected '{}' but found '{}' at line {}, col {}",
                self.expected, self.found, line, column
            ),
            None => write!(
                f,
                "expected '{}' but found '{}'",
                self.expected, self.found
            ),
        }
    }
}

impl std::error::Error for SyntaxError {}

impl SyntaxError {
    /// Builds a labeled diagnostic for the driver to render against the
    /// source buffer.
    pub fn report<'a>(&self, file: &str) -> Report<'a, (String, Span)> {
        Report::build(ReportKind::Error, (file.to_string(), self.span.clone()))
            .with_code("syntax")
            .with_message(self.to_string())
            .with_label(
                Label::new((file.to_string(), self.span.clone()))
                    .with_message(format!("expected '{}' here", self.expected))
                    .with_color(ColorGenerator::new().next()),
            )
            .finish()
    }
}
