//! Inline constructs: emphasis, math, wiki-links, transclusions, code spans.

use notetex_latex_backend::{
    bold, bold_italic, cross_reference, display_math, escape_percent, figure, inline_math,
    inline_verbatim, italic, slugify,
};

use super::context::{Emitted, Transpiler};
use super::source::SourceText;

impl Transpiler<'_> {
    /// `*italic*`, `**bold**`, `***both***`.
    ///
    /// The opening run length decides the style modulo 4, so a run of four
    /// renders like a run of three. Any unescaped run of stars closes the span.
    pub(super) fn emphasis(&mut self, source: &SourceText, offset: usize) -> Option<Emitted> {
        match source.before(offset) {
            Some('\\') => return None,
            // Rest of a run whose first star already failed to find a closing run.
            Some('*') => return None,
            _ => {}
        }

        let stars = source.run_length(offset, '*');
        let body_start = offset + stars;
        let Some(close) = source.find_unescaped(body_start, "*") else {
            self.unterminated(source, offset, "emphasis");
            return None;
        };
        let end = close + source.run_length(close, '*');

        let body = self.parse_block(&source.slice(body_start, close));
        let latex = match stars % 4 {
            1 => italic(&body),
            2 => bold(&body),
            _ => bold_italic(&body),
        };
        Some(Emitted::new(latex, end))
    }

    /// `$inline$` and `$$display$$`; math bodies are copied verbatim.
    pub(super) fn math(&mut self, source: &SourceText, offset: usize) -> Option<Emitted> {
        if source.before(offset) == Some('\\') {
            return None;
        }
        match source.after(offset) {
            None => None,
            Some(c) if c.is_whitespace() => None,
            Some('$') => self.display_math(source, offset),
            Some(_) => self.inline_math(source, offset),
        }
    }

    fn display_math(&mut self, source: &SourceText, offset: usize) -> Option<Emitted> {
        let Some(close) = source.find_unescaped(offset + 2, "$$") else {
            self.unterminated(source, offset, "display math");
            return None;
        };
        let body = source.slice(offset + 2, close);
        Some(Emitted::new(display_math(&body), close + 2))
    }

    fn inline_math(&mut self, source: &SourceText, offset: usize) -> Option<Emitted> {
        let Some(close) = source.find_unescaped(offset + 1, "$") else {
            self.unterminated(source, offset, "inline math");
            return None;
        };
        let body = source.slice(offset + 1, close);
        Some(Emitted::new(inline_math(&body), close + 1))
    }

    /// `[[note#Section|text]]` becomes a reference to the section label.
    pub(super) fn link(&mut self, source: &SourceText, offset: usize) -> Option<Emitted> {
        if source.after(offset) != Some('[') {
            return None;
        }
        let Some(close) = source.find(offset + 2, "]]") else {
            self.unterminated(source, offset, "wiki-link");
            return None;
        };
        let inner = source.slice(offset + 2, close);
        tracing::debug!(link = %inner, "wiki-link");
        Some(Emitted::new(wiki_link(&inner), close + 2))
    }

    /// `![[file.png|caption|300]]` at the start of a line.
    pub(super) fn image(&mut self, source: &SourceText, offset: usize) -> Option<Emitted> {
        if !source.is_line_start(offset) || !source.starts_with_at(offset + 1, "[[") {
            return None;
        }
        let Some(close) = source.find(offset + 3, "]]") else {
            self.unterminated(source, offset, "image embed");
            return None;
        };
        let inner = source.slice(offset + 3, close);
        let mut parts = inner.split('|').map(str::trim);
        let file = parts.next().unwrap_or_default();
        let caption = parts
            .filter(|p| !p.is_empty() && !is_size_spec(p))
            .last()
            .map(escape_percent);

        let path = format!("{}{}", self.options.image_dir, file);
        let label = format!("fig:{}", file_stem(file));
        tracing::debug!(%path, ?caption, "image embed");
        Some(Emitted::new(figure(&path, caption.as_deref(), &label), close + 2))
    }

    /// `` ```lang `` opens a fenced block, a single backtick an inline span.
    pub(super) fn code(&mut self, source: &SourceText, offset: usize) -> Option<Emitted> {
        if source.starts_with_at(offset, "```") {
            return self.fenced_code(source, offset);
        }
        let Some(close) = source.find(offset + 1, "`") else {
            self.unterminated(source, offset, "code span");
            return None;
        };
        let body = source.slice(offset + 1, close);
        // \verb can hold neither an empty body nor a line break.
        if body.is_empty() || body.contains('\n') {
            return None;
        }
        inline_verbatim(&body).map(|latex| Emitted::new(latex, close + 1))
    }
}

/// Link text is copied as written, with only `%` escaped.
fn wiki_link(inner: &str) -> String {
    let (target, display) = match inner.split_once('|') {
        Some((target, display)) => (target, Some(display)),
        None => (inner, None),
    };
    match target.split_once('#') {
        Some((_, section)) => {
            let text = escape_percent(display.unwrap_or(section));
            cross_reference(&format!("sec:{}", slugify(section)), &text)
        }
        // Whole-note links point outside this document.
        None => escape_percent(display.unwrap_or(target)),
    }
}

/// `300` or `300x200`, the Obsidian embed size suffix.
fn is_size_spec(part: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    match part.split_once('x') {
        Some((w, h)) => all_digits(w) && all_digits(h),
        None => all_digits(part),
    }
}

/// File name up to its first dot.
fn file_stem(file: &str) -> &str {
    match file.find('.') {
        Some(dot) => &file[..dot],
        None => file,
    }
}
