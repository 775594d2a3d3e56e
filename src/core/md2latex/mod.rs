//! Note to LaTeX converter
//!
//! A single-pass dispatcher over a codepoint-indexed view of the note. Each
//! character is looked up in a static trigger table; a trigger hands control
//! to a handler that either recognizes a construct and reports how far it
//! reached, or declines, in which case the character is copied literally.
//! Handlers convert nested spans (emphasis bodies, heading titles, list items,
//! callout bodies) by calling [`Transpiler::parse_block`] on the substring.

mod block;
mod context;
mod inline;
mod options;
mod source;

pub use block::CalloutKind;
pub use context::{Emitted, Transpiler, Trigger};
pub use options::{N2LOptions, DEFAULT_IMAGE_DIR, DEFAULT_MAX_DEPTH};
pub use source::SourceText;

use notetex_latex_backend::{preamble, POSTAMBLE};

use crate::utils::error::ConversionOutput;

/// Convert a note to a LaTeX body, without preamble.
pub fn convert_body(input: &str, options: &N2LOptions) -> ConversionOutput {
    let text = normalize_newlines(input);
    let mut transpiler = Transpiler::new(options);
    let content = transpiler.parse_block(&text);
    let warnings = transpiler.into_warnings();
    if !warnings.is_empty() {
        tracing::info!(count = warnings.len(), "conversion finished with warnings");
    }
    ConversionOutput::with_warnings(content, warnings)
}

/// Convert a note to a complete document titled `title`.
pub fn convert_document(input: &str, title: &str, options: &N2LOptions) -> ConversionOutput {
    let body = convert_body(input, options);
    let mut content = preamble(title);
    content.push_str(&body.content);
    content.push_str(POSTAMBLE);
    ConversionOutput::with_warnings(content, body.warnings)
}

fn normalize_newlines(input: &str) -> std::borrow::Cow<'_, str> {
    if input.contains('\r') {
        input.replace("\r\n", "\n").into()
    } else {
        input.into()
    }
}
