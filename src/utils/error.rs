//! Error handling for notetex conversions
//!
//! The transpiler itself never fails: malformed markup degrades to literal
//! text and is reported as a [`ConversionWarning`]. Only the file layer
//! returns [`ConversionError`].

use serde::Serialize;
use std::fmt;

/// Conversion error type
#[derive(Debug, Clone)]
pub enum ConversionError {
    /// Invalid input (bad path, unusable argument)
    InvalidInput { message: String },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            ConversionError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ConversionError {
    fn from(err: serde_json::Error) -> Self {
        ConversionError::IoError {
            message: err.to_string(),
        }
    }
}

impl ConversionError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ConversionError::InvalidInput {
            message: message.into(),
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// What the transpiler recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    /// A construct opened but its closing delimiter never came.
    UnterminatedDelimiter,
    /// A callout header without a `[!kind]` bracket.
    MalformedCallout,
    /// Nesting went past the configured depth; the span was kept literally.
    RecursionLimit,
    /// Two headings or callouts produced the same label.
    DuplicateLabel,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WarningKind::UnterminatedDelimiter => "unterminated delimiter",
            WarningKind::MalformedCallout => "malformed callout",
            WarningKind::RecursionLimit => "recursion limit",
            WarningKind::DuplicateLabel => "duplicate label",
        };
        f.write_str(name)
    }
}

/// Conversion warnings (non-fatal issues)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionWarning {
    pub kind: WarningKind,
    pub message: String,
    /// Source text around the offending construct.
    pub snippet: Option<String>,
}

impl ConversionWarning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            snippet: None,
        }
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(ref snippet) = self.snippet {
            write!(f, " near {:?}", snippet)?;
        }
        Ok(())
    }
}

/// Conversion output with optional warnings
#[derive(Debug, Clone, Serialize)]
pub struct ConversionOutput {
    /// The converted content
    pub content: String,
    /// Any warnings generated during conversion
    pub warnings: Vec<ConversionWarning>,
}

impl ConversionOutput {
    pub fn new(content: String) -> Self {
        Self {
            content,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(content: String, warnings: Vec<ConversionWarning>) -> Self {
        Self { content, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err: ConversionError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing.md").into();
        assert!(err.to_string().contains("IO error"));
        assert!(err.to_string().contains("missing.md"));
    }

    #[test]
    fn test_warning_display() {
        let warning = ConversionWarning::new(WarningKind::UnterminatedDelimiter, "no closing `$`")
            .with_snippet("$x + 1");
        let msg = warning.to_string();
        assert!(msg.starts_with("[unterminated delimiter]"));
        assert!(msg.contains("\"$x + 1\""));
    }

    #[test]
    fn test_warning_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&WarningKind::DuplicateLabel).unwrap();
        assert_eq!(json, "\"duplicate-label\"");
    }

    #[test]
    fn test_conversion_output() {
        let output = ConversionOutput::new("hola".to_string());
        assert!(!output.has_warnings());

        let output = ConversionOutput::with_warnings(
            "hola".to_string(),
            vec![ConversionWarning::new(WarningKind::RecursionLimit, "too deep")],
        );
        assert!(output.has_warnings());
    }
}
