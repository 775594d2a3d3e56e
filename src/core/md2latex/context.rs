//! Transpiler state and the dispatch loop.
//!
//! [`Transpiler::parse_block`] is the single entry point for every span of
//! text: the whole document, a heading title, an emphasis body, a list item.
//! Handlers that recognize a nested span call it again on the substring and
//! wrap the result, so nested markup resolves bottom-up.

use std::collections::HashMap;

use notetex_latex_backend::escape_percent;

use super::options::N2LOptions;
use super::source::SourceText;
use crate::data::maps::TRIGGERS;
use crate::utils::error::{ConversionWarning, WarningKind};

/// Construct family selected by the character under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Percent,
    Dollar,
    Star,
    Hash,
    Dash,
    Bang,
    Bracket,
    Quote,
    Backtick,
}

/// LaTeX produced by a handler and the exclusive end offset of the
/// construct it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitted {
    pub latex: String,
    pub end: usize,
}

impl Emitted {
    pub fn new(latex: impl Into<String>, end: usize) -> Self {
        Self {
            latex: latex.into(),
            end,
        }
    }
}

/// Per-document conversion state.
///
/// A fresh transpiler is built for every document; nothing survives
/// between conversions.
#[derive(Debug)]
pub struct Transpiler<'o> {
    pub(super) options: &'o N2LOptions,
    depth: usize,
    warnings: Vec<ConversionWarning>,
    /// How many times each label has been emitted so far.
    labels: HashMap<String, usize>,
}

impl<'o> Transpiler<'o> {
    pub fn new(options: &'o N2LOptions) -> Self {
        Self {
            options,
            depth: 0,
            warnings: Vec::new(),
            labels: HashMap::new(),
        }
    }

    /// Convert one span of note text to LaTeX.
    pub fn parse_block(&mut self, text: &str) -> String {
        if self.depth >= self.options.max_depth {
            tracing::warn!(depth = self.depth, "nesting limit reached, keeping span literal");
            self.warnings.push(
                ConversionWarning::new(
                    WarningKind::RecursionLimit,
                    format!("nesting deeper than {} levels kept as literal text", self.options.max_depth),
                )
                .with_snippet(SourceText::new(text).snippet(0)),
            );
            return escape_percent(text);
        }

        self.depth += 1;
        let source = SourceText::padded(text);
        let mut out = String::with_capacity(text.len() + 2);
        let mut pos = 0;
        while pos < source.len() {
            let (emitted, next) = self.dispatch(&source, pos);
            out.push_str(&emitted);
            pos = next;
        }
        self.depth -= 1;

        trim_padding(out)
    }

    /// Classify the character at `offset` and convert the construct it opens.
    ///
    /// Returns the emitted LaTeX and the offset of the next character to
    /// classify, which is always past `offset`.
    pub fn dispatch(&mut self, source: &SourceText, offset: usize) -> (String, usize) {
        let Some(ch) = source.at(offset) else {
            return (String::new(), offset + 1);
        };

        let handled = match TRIGGERS.get(&ch) {
            Some(&trigger) => self.handle(trigger, source, offset),
            None => None,
        };

        match handled {
            Some(emitted) if emitted.end > offset => (emitted.latex, emitted.end),
            _ => (ch.to_string(), offset + 1),
        }
    }

    fn handle(&mut self, trigger: Trigger, source: &SourceText, offset: usize) -> Option<Emitted> {
        match trigger {
            Trigger::Percent => Some(Emitted::new("\\%", offset + 1)),
            Trigger::Dollar => self.math(source, offset),
            Trigger::Star => self.emphasis(source, offset),
            Trigger::Hash => self.heading_or_tag(source, offset),
            Trigger::Dash => self.list(source, offset),
            Trigger::Bang => self.image(source, offset),
            Trigger::Bracket => self.link(source, offset),
            Trigger::Quote => self.callout(source, offset),
            Trigger::Backtick => self.code(source, offset),
        }
    }

    /// Record that the construct at `offset` never closed.
    pub(super) fn unterminated(&mut self, source: &SourceText, offset: usize, construct: &str) {
        let snippet = source.snippet(offset);
        tracing::warn!(construct, snippet = %snippet, "unterminated construct, emitting literally");
        self.warnings.push(
            ConversionWarning::new(
                WarningKind::UnterminatedDelimiter,
                format!("{} is never closed", construct),
            )
            .with_snippet(snippet),
        );
    }

    pub(super) fn warn(&mut self, warning: ConversionWarning) {
        tracing::warn!(kind = %warning.kind, message = %warning.message, "recovered");
        self.warnings.push(warning);
    }

    /// Track an emitted label, warning on repeats and suffixing them when
    /// `dedupe_labels` is set.
    pub(super) fn register_label(&mut self, label: String) -> String {
        let count = self.labels.entry(label.clone()).or_insert(0);
        *count += 1;
        let seen = *count;
        if seen == 1 {
            return label;
        }

        self.warn(ConversionWarning::new(
            WarningKind::DuplicateLabel,
            format!("label `{}` emitted {} times", label, seen),
        ));
        if self.options.dedupe_labels {
            format!("{}_{}", label, seen)
        } else {
            label
        }
    }

    pub fn warnings(&self) -> &[ConversionWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<ConversionWarning> {
        self.warnings
    }
}

/// Drop the newline added on each side by [`SourceText::padded`].
fn trim_padding(mut out: String) -> String {
    if out.ends_with('\n') {
        out.pop();
    }
    if out.starts_with('\n') {
        out.remove(0);
    }
    out
}
