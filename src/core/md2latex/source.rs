//! Codepoint-indexed view over the text being scanned.
//!
//! Every offset handed around by the dispatcher is an index into
//! [`SourceText`], never a byte offset. Out-of-range reads return `None`, and
//! handlers read `None` as "construct not recognized here".

/// Immutable sequence of codepoints owned by one `parse_block` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    chars: Vec<char>,
}

impl SourceText {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// `text` surrounded by one newline on each side, so that the first line
    /// has a line start before it and the last line is terminated.
    pub fn padded(text: &str) -> Self {
        let mut chars = Vec::with_capacity(text.len() + 2);
        chars.push('\n');
        chars.extend(text.chars());
        chars.push('\n');
        Self { chars }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[inline]
    pub fn at(&self, idx: usize) -> Option<char> {
        self.chars.get(idx).copied()
    }

    /// Character just before `idx`.
    #[inline]
    pub fn before(&self, idx: usize) -> Option<char> {
        idx.checked_sub(1).and_then(|i| self.at(i))
    }

    /// Character just after `idx`.
    #[inline]
    pub fn after(&self, idx: usize) -> Option<char> {
        self.at(idx + 1)
    }

    /// Whether `idx` directly follows a newline.
    #[inline]
    pub fn is_line_start(&self, idx: usize) -> bool {
        self.before(idx) == Some('\n')
    }

    /// Owned copy of `[start, end)`, clamped to the text.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.len());
        if start >= end {
            return String::new();
        }
        self.chars[start..end].iter().collect()
    }

    pub fn starts_with_at(&self, idx: usize, pattern: &str) -> bool {
        let mut pos = idx;
        for expected in pattern.chars() {
            if self.at(pos) != Some(expected) {
                return false;
            }
            pos += 1;
        }
        true
    }

    /// Number of consecutive `ch` starting at `idx`.
    pub fn run_length(&self, idx: usize, ch: char) -> usize {
        self.chars
            .get(idx..)
            .map(|rest| rest.iter().take_while(|&&c| c == ch).count())
            .unwrap_or(0)
    }

    /// First occurrence of `pattern` at or after `from`.
    pub fn find(&self, from: usize, pattern: &str) -> Option<usize> {
        (from..self.len()).find(|&idx| self.starts_with_at(idx, pattern))
    }

    /// First occurrence of `pattern` at or after `from` that is not preceded
    /// by a backslash.
    pub fn find_unescaped(&self, from: usize, pattern: &str) -> Option<usize> {
        (from..self.len())
            .find(|&idx| self.starts_with_at(idx, pattern) && self.before(idx) != Some('\\'))
    }

    /// First index at or after `from` whose character satisfies `pred`.
    pub fn find_by(&self, from: usize, pred: impl Fn(char) -> bool) -> Option<usize> {
        (from..self.len()).find(|&idx| self.at(idx).is_some_and(&pred))
    }

    /// Index of the newline ending the line that contains `from`.
    pub fn line_end(&self, from: usize) -> Option<usize> {
        self.find_by(from, |c| c == '\n')
    }

    /// Short excerpt starting at `idx`, for diagnostics.
    pub fn snippet(&self, idx: usize) -> String {
        const SNIPPET_LEN: usize = 24;
        let end = self.line_end(idx).unwrap_or(self.len());
        self.slice(idx, end.min(idx + SNIPPET_LEN))
    }
}
