//! LaTeX code generation for the note transpiler.
//!
//! Everything here is string building: macros, environments, indentation,
//! labels and the fixed document template. The transpiler decides *what* to
//! emit; this crate decides how it is spelled in LaTeX.

use lazy_static::lazy_static;
use regex::Regex;

/// Spaces added in front of every line of an environment body.
pub const DEFAULT_INDENT: usize = 4;

/// Width given to every transcluded image.
pub const FIGURE_WIDTH: &str = "0.6\\textwidth";

/// Placeholder emitted when a figure has no caption.
pub const MISSING_CAPTION: &str = "%TODO: \\caption{\\centering Falta caption }";

/// Trailer closing the document opened by [`preamble`].
pub const POSTAMBLE: &str = "\n\\end{document}\n";

const VERB_DELIMITERS: [char; 8] = ['|', '!', '+', '@', '=', '/', ';', ':'];

lazy_static! {
    static ref NON_WORD_RUN: Regex = Regex::new(r"\W+").expect("slug pattern is valid");
}

// =============================================================================
// Document template
// =============================================================================

/// Fixed document preamble with `title` interpolated into `\titulo`.
pub fn preamble(title: &str) -> String {
    let mut out = String::new();
    out.push_str("% !TeX spellcheck = es_ES\n");
    out.push_str("\\documentclass{fmbnotes}\n");
    out.push_str("\\usepackage{fmbmath}\n");
    out.push('\n');
    out.push_str("\\begin{document}\n");
    out.push('\n');
    out.push_str("\\newcommand*{\\titulo}{");
    out.push_str(title);
    out.push_str("}\n");
    out.push_str("\\portada{\\titulo} \n");
    out.push('\n');
    out.push_str("\\begin{center}\n");
    out.push_str("    {\\Large\\bfseries\\sffamily \\titulo}\n");
    out.push_str("\\end{center}\n");
    out.push('\n');
    out
}

// =============================================================================
// Generic builders
// =============================================================================

/// `\name[opt1][opt2]{param1}{param2}`.
///
/// Optional arguments are written before mandatory ones, each in its own
/// bracket pair.
pub fn macro_call(name: &str, params: &[&str], optional: &[&str]) -> String {
    let mut out = String::new();
    out.push('\\');
    out.push_str(name);
    push_arguments(&mut out, params, optional);
    out
}

/// An environment whose body is indented by [`DEFAULT_INDENT`] spaces.
///
/// The result starts and ends with a newline so it can be spliced into
/// running text.
pub fn environment(name: &str, params: &[&str], optional: &[&str], body: &str) -> String {
    let mut out = String::new();
    out.push_str("\n\\begin{");
    out.push_str(name);
    out.push('}');
    push_arguments(&mut out, params, optional);
    out.push('\n');
    out.push_str(&indent(body, DEFAULT_INDENT));
    out.push_str("\n\\end{");
    out.push_str(name);
    out.push_str("}\n");
    out
}

/// Like [`environment`] but the body is copied as is, without indentation.
pub fn verbatim_environment(name: &str, optional: &[&str], body: &str) -> String {
    let mut out = String::new();
    out.push_str("\n\\begin{");
    out.push_str(name);
    out.push('}');
    push_arguments(&mut out, &[], optional);
    out.push('\n');
    out.push_str(body);
    out.push_str("\n\\end{");
    out.push_str(name);
    out.push_str("}\n");
    out
}

/// Prefix every line of `text` with `spaces` spaces.
pub fn indent(text: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    let mut out = String::with_capacity(text.len() + spaces);
    out.push_str(&pad);
    out.push_str(&text.replace('\n', &format!("\n{}", pad)));
    out
}

fn push_arguments(out: &mut String, params: &[&str], optional: &[&str]) {
    for opt in optional {
        out.push('[');
        out.push_str(opt);
        out.push(']');
    }
    for param in params {
        out.push('{');
        out.push_str(param);
        out.push('}');
    }
}

// =============================================================================
// Labels
// =============================================================================

/// Normalize arbitrary title text into a label slug.
///
/// Transliterates to ASCII (dropping diacritics), collapses every run of
/// non-word characters into `_` and lower-cases the result.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode::deunicode(text.trim());
    NON_WORD_RUN.replace_all(&ascii, "_").to_lowercase()
}

pub fn label(name: &str) -> String {
    macro_call("label", &[name], &[])
}

/// `\hyperref[label]{text}`.
pub fn cross_reference(label: &str, text: &str) -> String {
    macro_call("hyperref", &[text], &[label])
}

// =============================================================================
// Constructs
// =============================================================================

/// Sectioning command for a heading of the given `#` depth.
pub fn sectioning_command(level: usize) -> &'static str {
    match level {
        0 | 1 => "section",
        2 => "subsection",
        3 => "subsubsection",
        4 => "paragraph",
        _ => "subparagraph",
    }
}

pub fn heading(level: usize, title: &str, label_name: &str) -> String {
    let mut out = macro_call(sectioning_command(level), &[title], &[]);
    out.push_str(&label(label_name));
    out
}

pub fn italic(body: &str) -> String {
    macro_call("textit", &[body], &[])
}

pub fn bold(body: &str) -> String {
    macro_call("textbf", &[body], &[])
}

pub fn bold_italic(body: &str) -> String {
    italic(&bold(body))
}

pub fn inline_math(body: &str) -> String {
    format!("\\({}\\)", body)
}

/// Display math in an `equation` environment.
///
/// A body that already opens a `gather` environment is emitted without the
/// outer wrapper, with `gather` switched to its unnumbered form.
pub fn display_math(body: &str) -> String {
    let body = body.trim();
    if body.contains("\\begin{gather}") {
        let unnumbered = body
            .replace("\\begin{gather}", "\\begin{gather*}")
            .replace("\\end{gather}", "\\end{gather*}");
        return format!("\n{}\n", unnumbered);
    }
    environment("equation", &[], &[], body)
}

/// `itemize` environment with one `\item` per entry.
pub fn itemize(items: &[String]) -> String {
    let body = items
        .iter()
        .map(|item| format!("\\item {}", item))
        .collect::<Vec<_>>()
        .join("\n");
    environment("itemize", &[], &[], &body)
}

/// Centered figure including `path`.
pub fn figure(path: &str, caption: Option<&str>, label_name: &str) -> String {
    let mut lines = vec![
        "\\centering".to_string(),
        macro_call("includegraphics", &[path], &[&format!("width={}", FIGURE_WIDTH)]),
    ];
    match caption {
        Some(caption) => lines.push(macro_call(
            "caption",
            &[&format!("\\centering {}", caption)],
            &[],
        )),
        None => lines.push(MISSING_CAPTION.to_string()),
    }
    lines.push(label(label_name));
    environment("figure", &[], &["h"], &lines.join("\n"))
}

/// Theorem-like environment titled with `title`.
///
/// An empty title omits the optional argument; the label, when present, is
/// the first line of the body.
pub fn titled_environment(name: &str, title: &str, label_name: Option<&str>, body: &str) -> String {
    let mut content = String::new();
    if let Some(label_name) = label_name {
        content.push_str(&label(label_name));
        if !body.is_empty() {
            content.push('\n');
        }
    }
    content.push_str(body);
    if title.is_empty() {
        environment(name, &[], &[], &content)
    } else {
        environment(name, &[], &[title], &content)
    }
}

/// `lstlisting` block; the body is never indented.
pub fn listing(language: Option<&str>, body: &str) -> String {
    match language {
        Some(language) => {
            verbatim_environment("lstlisting", &[&format!("language={}", language)], body)
        }
        None => verbatim_environment("lstlisting", &[], body),
    }
}

/// `\verb` span, or `None` when every candidate delimiter occurs in `body`.
pub fn inline_verbatim(body: &str) -> Option<String> {
    let delimiter = VERB_DELIMITERS.iter().find(|d| !body.contains(**d))?;
    Some(format!("\\verb{}{}{}", delimiter, body, delimiter))
}

/// Line comment; tags never reach the rendered page.
pub fn comment(text: &str) -> String {
    format!("%{}", text)
}

/// Escape LaTeX's comment character.
pub fn escape_percent(input: &str) -> String {
    input.replace('%', "\\%")
}
