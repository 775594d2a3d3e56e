use std::collections::HashMap;

/// Default directory prefix for transcluded images.
pub const DEFAULT_IMAGE_DIR: &str = "./img/";

/// Default ceiling on nested `parse_block` calls.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options for note to LaTeX conversion
#[derive(Debug, Clone)]
pub struct N2LOptions {
    /// Prefix prepended to every image file name in `\includegraphics`
    /// Default: `./img/`
    pub image_dir: String,

    /// Extra fenced-code language renames, consulted before the built-in
    /// table. Keys are matched lower-cased.
    /// Default: empty
    pub language_aliases: HashMap<String, String>,

    /// Maximum nesting of recursively parsed spans. Deeper spans are kept
    /// as literal text.
    /// Default: 64
    pub max_depth: usize,

    /// Append `_2`, `_3`, ... to repeated heading and callout labels
    /// Default: false
    pub dedupe_labels: bool,
}

impl Default for N2LOptions {
    fn default() -> Self {
        Self {
            image_dir: DEFAULT_IMAGE_DIR.to_string(),
            language_aliases: HashMap::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            dedupe_labels: false,
        }
    }
}

impl N2LOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image_dir(mut self, dir: impl Into<String>) -> Self {
        self.image_dir = dir.into();
        self
    }

    pub fn with_language_alias(mut self, tag: &str, language: impl Into<String>) -> Self {
        self.language_aliases
            .insert(tag.to_lowercase(), language.into());
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_dedupe_labels(mut self, dedupe: bool) -> Self {
        self.dedupe_labels = dedupe;
        self
    }
}
