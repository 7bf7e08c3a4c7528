//! Error types shared by the holeyc frontend.
//!
//! Provides a single error type with source location tracking, an error
//! collection for multi-error parses, and a formatter that renders a
//! source snippet with a caret under the offending span.

use colored::*;
use serde::Serialize;
use std::fmt;

/// A 1-based (line, column) position in the input file.
///
/// Assigned once when a token is scanned and copied into the tree at node
/// construction. Diagnostics only; the printer never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Position used for nodes that have no meaningful one (the program root).
    pub fn start_of_file() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A range of source positions for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl Span {
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        Self { start, end }
    }

    pub fn single(location: SourceLocation) -> Self {
        Self {
            start: location,
            end: location,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Categories of errors the frontend can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Lexer errors
    InvalidToken,
    InvalidCharacter,
    UnterminatedString,
    UnterminatedChar,
    InvalidNumber,

    // Parser errors
    SyntaxError,
    UnexpectedToken,
    UnexpectedEof,

    // Driver errors
    IoError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidToken => "invalid token",
            ErrorKind::InvalidCharacter => "invalid character",
            ErrorKind::UnterminatedString => "unterminated string literal",
            ErrorKind::UnterminatedChar => "unterminated character literal",
            ErrorKind::InvalidNumber => "invalid number",
            ErrorKind::SyntaxError => "syntax error",
            ErrorKind::UnexpectedToken => "unexpected token",
            ErrorKind::UnexpectedEof => "unexpected end of file",
            ErrorKind::IoError => "I/O error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional context attached to an error.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub span: Option<Span>,
    pub note: Option<String>,
    pub help: Option<String>,
}

/// Main error type for the holeyc frontend.
#[derive(Debug, Clone)]
pub struct HoleycError {
    pub kind: ErrorKind,
    pub message: String,
    pub context: ErrorContext,
}

impl HoleycError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.context.span = Some(span);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.context.note = Some(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context.help = Some(help.into());
        self
    }
}

impl fmt::Display for HoleycError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context.span {
            Some(span) => write!(f, "{}: {}: {}", span, self.kind, self.message)?,
            None => write!(f, "{}: {}", self.kind, self.message)?,
        }

        if let Some(note) = &self.context.note {
            write!(f, "\nnote: {}", note)?;
        }

        if let Some(help) = &self.context.help {
            write!(f, "\nhelp: {}", help)?;
        }

        Ok(())
    }
}

impl std::error::Error for HoleycError {}

impl From<std::io::Error> for HoleycError {
    fn from(err: std::io::Error) -> Self {
        HoleycError::new(ErrorKind::IoError, err.to_string())
    }
}

/// Result type for holeyc operations.
pub type Result<T> = std::result::Result<T, HoleycError>;

/// Collection of errors gathered during a recovering parse.
#[derive(Debug, Default)]
pub struct ErrorCollection {
    errors: Vec<HoleycError>,
}

impl ErrorCollection {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: HoleycError) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[HoleycError] {
        &self.errors
    }
}

impl fmt::Display for ErrorCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "error: {}", error)?;
        }
        if !self.is_empty() {
            write!(f, "\n{} error(s)", self.len())?;
        }
        Ok(())
    }
}

/// Renders an error with the offending source line and a caret marker.
pub struct ErrorFormatter<'a> {
    error: &'a HoleycError,
    source: &'a str,
    filename: Option<&'a str>,
    use_color: bool,
}

impl<'a> ErrorFormatter<'a> {
    pub fn new(error: &'a HoleycError, source: &'a str) -> Self {
        Self {
            error,
            source,
            filename: None,
            use_color: true,
        }
    }

    pub fn with_filename(mut self, filename: &'a str) -> Self {
        self.filename = Some(filename);
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn format(&self) -> String {
        let mut output = String::new();

        if let Some(span) = &self.error.context.span {
            let location = match self.filename {
                Some(filename) => {
                    format!("{}:{}:{}", filename, span.start.line, span.start.column)
                }
                None => format!("{}:{}", span.start.line, span.start.column),
            };
            output.push_str(&if self.use_color {
                location.bold().to_string()
            } else {
                location
            });
            output.push_str(": ");
        }

        let kind = self.error.kind.to_string();
        let label = if self.use_color {
            kind.red().bold().to_string()
        } else {
            kind
        };
        output.push_str(&format!("{}: {}\n", label, self.error.message));

        if let Some(span) = &self.error.context.span {
            if let Some(snippet) = self.extract_snippet(span) {
                output.push_str(&snippet);
            }
        }

        if let Some(note) = &self.error.context.note {
            let label = if self.use_color {
                "note".blue().bold().to_string()
            } else {
                "note".to_string()
            };
            output.push_str(&format!("\n{}: {}", label, note));
        }

        if let Some(help) = &self.error.context.help {
            let label = if self.use_color {
                "help".green().bold().to_string()
            } else {
                "help".to_string()
            };
            output.push_str(&format!("\n{}: {}", label, help));
        }

        output
    }

    fn extract_snippet(&self, span: &Span) -> Option<String> {
        let lines: Vec<&str> = self.source.lines().collect();

        // Line numbers are 1-based
        if span.start.line == 0 || span.start.line > lines.len() {
            return None;
        }
        let line = lines[span.start.line - 1];

        let line_num = span.start.line.to_string();
        let gutter_width = line_num.len() + 2;
        let (line_num, separator) = if self.use_color {
            (line_num.blue().bold().to_string(), "|".blue().to_string())
        } else {
            (line_num, "|".to_string())
        };

        let mut snippet = format!("{} {} {}\n", line_num, separator, line);

        let pointer_length = if span.start.line == span.end.line {
            span.end.column.saturating_sub(span.start.column).max(1)
        } else {
            1
        };
        let pointer = "^".repeat(pointer_length);
        let pointer = if self.use_color {
            pointer.red().bold().to_string()
        } else {
            pointer
        };
        let separator = if self.use_color {
            "|".blue().to_string()
        } else {
            "|".to_string()
        };

        snippet.push_str(&format!(
            "{} {} {}{}",
            " ".repeat(gutter_width),
            separator,
            " ".repeat(span.start.column.saturating_sub(1)),
            pointer
        ));

        Some(snippet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_span_and_context() {
        let error = HoleycError::new(ErrorKind::SyntaxError, "expected ';'")
            .with_span(Span::single(SourceLocation::new(3, 7)))
            .with_help("terminate the statement with ';'");

        let rendered = error.to_string();
        assert!(rendered.starts_with("3:7: syntax error: expected ';'"));
        assert!(rendered.contains("help: terminate the statement with ';'"));
    }

    #[test]
    fn formatter_points_at_offending_column() {
        let source = "int x\nint y;\n";
        let error = HoleycError::new(ErrorKind::UnexpectedToken, "expected ';', found 'int'")
            .with_span(Span::single(SourceLocation::new(1, 5)));

        let formatted = ErrorFormatter::new(&error, source)
            .with_filename("broken.hc")
            .with_color(false)
            .format();

        assert!(formatted.starts_with("broken.hc:1:5: unexpected token"));
        assert!(formatted.contains("1 | int x"));
        assert!(formatted.lines().last().unwrap().ends_with("    ^"));
    }
}
