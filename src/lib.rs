//! # notetex
//!
//! Converter from Obsidian-flavoured Markdown notes to LaTeX.
//!
//! Supported markup: `*emphasis*`, `$math$` and `$$display math$$`, `#`
//! headings and `#tags`, `- ` lists, `[[note#Section|links]]`,
//! `![[image.png|caption]]` transclusions, `> [!kind] Title` callouts and
//! fenced or inline code. Anything the converter does not recognize is
//! copied through unchanged.
//!
//! ## Example
//!
//! ```rust
//! use notetex::note_to_latex;
//!
//! let latex = note_to_latex("**Teorema** de $\\pi$");
//! assert_eq!(latex, "\\textbf{Teorema} de \\(\\pi\\)");
//! ```
//!
//! Full documents get the fixed preamble and trailer:
//!
//! ```rust
//! use notetex::note_document_to_latex;
//!
//! let doc = note_document_to_latex("# Grupos", "Álgebra");
//! assert!(doc.contains("\\section{Grupos}\\label{sec:grupos}"));
//! assert!(doc.ends_with("\\end{document}\n"));
//! ```

pub mod core;
pub mod data;
pub mod utils;

pub use crate::core::md2latex::{
    convert_body, convert_document, CalloutKind, N2LOptions, SourceText, Transpiler,
    DEFAULT_IMAGE_DIR, DEFAULT_MAX_DEPTH,
};
pub use utils::error::{
    ConversionError, ConversionOutput, ConversionResult, ConversionWarning, WarningKind,
};

/// Convert a note to a LaTeX body with default options.
pub fn note_to_latex(input: &str) -> String {
    note_to_latex_with_options(input, &N2LOptions::default())
}

/// Convert a note to a LaTeX body.
pub fn note_to_latex_with_options(input: &str, options: &N2LOptions) -> String {
    convert_body(input, options).content
}

/// Convert a note to a LaTeX body, keeping the recovery warnings.
pub fn note_to_latex_with_report(input: &str, options: &N2LOptions) -> ConversionOutput {
    convert_body(input, options)
}

/// Convert a note to a complete LaTeX document with default options.
pub fn note_document_to_latex(input: &str, title: &str) -> String {
    convert_document(input, title, &N2LOptions::default()).content
}

/// Convert a note to a complete LaTeX document, keeping the recovery warnings.
pub fn note_document_to_latex_with_report(
    input: &str,
    title: &str,
    options: &N2LOptions,
) -> ConversionOutput {
    convert_document(input, title, options)
}
