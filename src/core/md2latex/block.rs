//! Line-anchored constructs: headings and tags, lists, callouts, fenced code.

use notetex_latex_backend::{
    comment, escape_percent, heading, itemize, listing, slugify, titled_environment,
};

use super::context::{Emitted, Transpiler};
use super::source::SourceText;
use crate::data::maps::{CALLOUT_SENTINELS, LANGUAGE_ALIASES};
use crate::utils::error::{ConversionWarning, WarningKind};

/// Theorem-like environment a callout is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutKind {
    Definition,
    Notation,
    Example,
    Theorem,
}

impl CalloutKind {
    /// Classify a callout by its free-text title. The `[!kind]` tag is not
    /// consulted.
    pub fn classify(title: &str) -> Self {
        let slug = slugify(title);
        CALLOUT_SENTINELS
            .entries()
            .find(|(sentinel, _)| slug.contains(*sentinel))
            .map(|(_, kind)| *kind)
            .unwrap_or(CalloutKind::Theorem)
    }

    pub fn environment(self) -> &'static str {
        match self {
            CalloutKind::Definition => "definicion",
            CalloutKind::Notation => "notacion",
            CalloutKind::Example => "ejemplo",
            CalloutKind::Theorem => "teorema",
        }
    }

    pub fn label_prefix(self) -> &'static str {
        match self {
            CalloutKind::Definition => "def:",
            CalloutKind::Notation => "not:",
            CalloutKind::Example => "ej:",
            CalloutKind::Theorem => "thm:",
        }
    }
}

impl Transpiler<'_> {
    /// `# Heading` at a line start, `#tag` after whitespace.
    pub(super) fn heading_or_tag(&mut self, source: &SourceText, offset: usize) -> Option<Emitted> {
        let before = source.before(offset);
        let after = source.after(offset);
        if before == Some('\n') && matches!(after, Some(' ' | '#')) {
            self.heading(source, offset)
        } else if before.is_some_and(|c| c.is_whitespace()) && after.is_some_and(|c| c.is_alphabetic())
        {
            Some(self.tag(source, offset))
        } else {
            None
        }
    }

    fn heading(&mut self, source: &SourceText, offset: usize) -> Option<Emitted> {
        let level = source.run_length(offset, '#');
        let title_start = offset + level;
        if source.at(title_start) != Some(' ') {
            return None;
        }
        let line_end = source.line_end(title_start).unwrap_or(source.len());
        let raw_title = source.slice(title_start + 1, line_end);
        let raw_title = raw_title.trim();

        let title = self.parse_block(raw_title);
        let label = self.register_label(format!("sec:{}", slugify(&untagged(raw_title))));
        tracing::debug!(level, %label, "heading");
        Some(Emitted::new(heading(level, &title, &label), line_end))
    }

    /// Tags become comments. A tag ending a line of the span reuses that
    /// line's newline; otherwise the comment gets its own, so text after it,
    /// or the brace closing an enclosing macro, is not commented out.
    fn tag(&mut self, source: &SourceText, offset: usize) -> Emitted {
        let end = source
            .find_by(offset + 1, |c| c.is_whitespace())
            .unwrap_or(source.len());
        let mut latex = comment(&source.slice(offset + 1, end));
        // The last newline is padding and is trimmed from the span's output.
        let ends_line = source.at(end) == Some('\n') && end + 1 < source.len();
        if !ends_line {
            latex.push('\n');
        }
        Emitted::new(latex, end)
    }

    /// Consecutive `- item` lines.
    pub(super) fn list(&mut self, source: &SourceText, offset: usize) -> Option<Emitted> {
        if !source.is_line_start(offset) || source.after(offset) != Some(' ') {
            return None;
        }

        let mut items = Vec::new();
        let mut marker = offset;
        let end = loop {
            let body_start = marker + 2;
            let Some(line_end) = source.line_end(body_start) else {
                self.unterminated(source, offset, "list item");
                return None;
            };
            items.push(self.parse_block(&source.slice(body_start, line_end)));
            if source.starts_with_at(line_end, "\n- ") {
                marker = line_end + 1;
            } else {
                break line_end;
            }
        };

        tracing::debug!(items = items.len(), "list");
        Some(Emitted::new(itemize(&items), end))
    }

    /// `> [!kind] Title` followed by `>` continuation lines.
    pub(super) fn callout(&mut self, source: &SourceText, offset: usize) -> Option<Emitted> {
        if !source.is_line_start(offset) {
            return None;
        }

        let header_end = source.line_end(offset).unwrap_or(source.len());
        let header = source.slice(offset, header_end);
        let (kind_tag, title) = match header.find(']') {
            Some(close) => {
                let kind_tag = header[..close]
                    .find("[!")
                    .map(|open| header[open + 2..close].trim().to_string());
                (kind_tag, header[close + 1..].trim().to_string())
            }
            None => {
                // Without the bracket the title is read from the start of the line.
                self.warn(
                    ConversionWarning::new(
                        WarningKind::MalformedCallout,
                        "callout header has no `[!kind]` marker",
                    )
                    .with_snippet(source.snippet(offset)),
                );
                (None, header.trim().to_string())
            }
        };

        let mut lines = Vec::new();
        let mut end = header_end;
        while source.starts_with_at(end, "\n>") {
            let line_start = end + 2;
            let line_end = source.line_end(line_start).unwrap_or(source.len());
            let line = source.slice(line_start, line_end);
            lines.push(match line.strip_prefix(' ') {
                Some(rest) => rest.to_string(),
                None => line,
            });
            end = line_end;
        }

        let body = self.parse_block(&lines.join("\n"));
        let kind = CalloutKind::classify(&title);
        let label = self.register_label(format!("{}{}", kind.label_prefix(), slugify(&title)));
        tracing::debug!(?kind_tag, ?kind, lines = lines.len(), "callout");

        Some(Emitted::new(
            titled_environment(kind.environment(), &escape_percent(&title), Some(&label), &body),
            end,
        ))
    }

    /// ```` ```lang ```` ... ```` ``` ````, copied without interpretation.
    pub(super) fn fenced_code(&mut self, source: &SourceText, offset: usize) -> Option<Emitted> {
        let info_start = offset + 3;
        let info_end = source.line_end(info_start).unwrap_or(source.len());
        let info = source.slice(info_start, info_end);
        if info.contains('`') {
            return None;
        }

        let body_start = info_end + 1;
        let Some(close) = source.find(body_start, "```") else {
            self.unterminated(source, offset, "code fence");
            return None;
        };
        let mut body = source.slice(body_start, close);
        if body.ends_with('\n') {
            body.pop();
        }

        let language = self.canonical_language(info.trim());
        tracing::debug!(?language, "code block");
        Some(Emitted::new(listing(language.as_deref(), &body), close + 3))
    }

    fn canonical_language(&self, tag: &str) -> Option<String> {
        if tag.is_empty() {
            return None;
        }
        let key = tag.to_lowercase();
        if let Some(language) = self.options.language_aliases.get(&key) {
            return Some(language.clone());
        }
        Some(
            LANGUAGE_ALIASES
                .get(key.as_str())
                .map(|language| language.to_string())
                .unwrap_or_else(|| tag.to_string()),
        )
    }
}

/// Heading title without its `#tags`, for the label slug.
fn untagged(title: &str) -> String {
    title
        .split_whitespace()
        .filter(|word| {
            !word
                .strip_prefix('#')
                .and_then(|rest| rest.chars().next())
                .is_some_and(char::is_alphabetic)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::md2latex::N2LOptions;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> String {
        let options = N2LOptions::default();
        Transpiler::new(&options).parse_block(text)
    }

    #[test]
    fn test_heading_with_label() {
        assert_eq!(
            parse("# Álgebra Lineal"),
            "\\section{Álgebra Lineal}\\label{sec:algebra_lineal}"
        );
    }

    #[test]
    fn test_heading_levels() {
        assert!(parse("## Dos").starts_with("\\subsection{Dos}"));
        assert!(parse("### Tres").starts_with("\\subsubsection{Tres}"));
        assert!(parse("#### Cuatro").starts_with("\\paragraph{Cuatro}"));
    }

    #[test]
    fn test_heading_title_is_recursive() {
        assert_eq!(
            parse("## Área de $\\pi r^2$\nTexto"),
            "\\subsection{Área de \\(\\pi r^2\\)}\\label{sec:area_de_pi_r_2_}\nTexto"
        );
    }

    #[test]
    fn test_hash_without_space_is_literal() {
        assert_eq!(parse("##x"), "##x");
        assert_eq!(parse("C# y F#"), "C# y F#");
    }

    #[test]
    fn test_tag_is_comment() {
        assert_eq!(parse("Nota #algebra\nsigue"), "Nota %algebra\nsigue");
        assert_eq!(parse("#algebra #grupos\n"), "%algebra\n %grupos\n");
    }

    #[test]
    fn test_tag_in_heading_keeps_brace() {
        assert_eq!(
            parse("# Grupos #algebra\ntexto"),
            "\\section{Grupos %algebra\n}\\label{sec:grupos}\ntexto"
        );
    }

    #[test]
    fn test_tag_in_emphasis_keeps_brace() {
        assert_eq!(parse("*idea #tag*"), "\\textit{idea %tag\n}");
    }

    #[test]
    fn test_heading_label_ignores_tags() {
        let out = parse("## #repaso Teorema de Lagrange #grupos");
        assert!(out.ends_with("\\label{sec:teorema_de_lagrange}"));
        assert_eq!(untagged("C# y F# #lenguajes"), "C# y F#");
    }

    #[test]
    fn test_list_items_in_order() {
        assert_eq!(
            parse("\n- a\n- b\n"),
            "\n\n\\begin{itemize}\n    \\item a\n    \\item b\n\\end{itemize}\n\n"
        );
    }

    #[test]
    fn test_list_item_is_recursive() {
        let out = parse("- *uno*\n- $x$");
        assert!(out.contains("\\item \\textit{uno}"));
        assert!(out.contains("\\item \\(x\\)"));
    }

    #[test]
    fn test_dash_elsewhere_is_literal() {
        assert_eq!(parse("a - b\n-c"), "a - b\n-c");
    }

    #[test]
    fn test_callout_definition() {
        let out = parse("> [!note] Definición de grupo\n> Un conjunto con una operación.");
        assert_eq!(
            out,
            "\n\\begin{definicion}[Definición de grupo]\n    \\label{def:definicion_de_grupo}\n    Un conjunto con una operación.\n\\end{definicion}\n"
        );
    }

    #[test]
    fn test_callout_classification() {
        assert_eq!(CalloutKind::classify("Notación de Leibniz"), CalloutKind::Notation);
        assert_eq!(CalloutKind::classify("Ejemplo: Z_n"), CalloutKind::Example);
        assert_eq!(CalloutKind::classify("Example 3"), CalloutKind::Example);
        assert_eq!(CalloutKind::classify("Lema de Zorn"), CalloutKind::Theorem);
    }

    #[test]
    fn test_callout_defaults_to_theorem() {
        let out = parse("> [!tip] Lagrange\n> El orden divide.");
        assert!(out.contains("\\begin{teorema}[Lagrange]"));
        assert!(out.contains("\\label{thm:lagrange}"));
    }

    #[test]
    fn test_callout_title_escapes_percent() {
        let out = parse("> [!note] Teorema del 50%\n> x");
        assert!(out.contains("\\begin{teorema}[Teorema del 50\\%]"));
        assert!(out.contains("\\label{thm:teorema_del_50_}"));
    }

    #[test]
    fn test_untitled_callout_still_labelled() {
        assert_eq!(
            parse("> [!tip]\n> cuerpo"),
            "\n\\begin{teorema}\n    \\label{thm:}\n    cuerpo\n\\end{teorema}\n"
        );
    }

    #[test]
    fn test_callout_ends_at_unquoted_line() {
        let out = parse("> [!info] Lema\n> uno\n>dos\nfuera");
        assert!(out.contains("    uno\n    dos\n\\end{teorema}\n"));
        assert!(out.ends_with("\nfuera"));
    }

    #[test]
    fn test_callout_without_kind_marker() {
        let options = N2LOptions::default();
        let mut transpiler = Transpiler::new(&options);
        let out = transpiler.parse_block("> Cita suelta");
        assert!(out.contains("\\begin{teorema}[> Cita suelta]"));
        assert!(out.contains("\\label{thm:_cita_suelta}"));
        assert_eq!(transpiler.warnings()[0].kind, WarningKind::MalformedCallout);
    }

    #[test]
    fn test_fenced_code_alias() {
        assert_eq!(
            parse("```ts\nlet x=1;\n```"),
            "\n\\begin{lstlisting}[language=JavaScript]\nlet x=1;\n\\end{lstlisting}\n"
        );
    }

    #[test]
    fn test_fenced_code_is_verbatim() {
        let out = parse("```python\n  x = 50% * 2\n  # comentario\n```");
        assert!(out.contains("[language=python]"));
        assert!(out.contains("\n  x = 50% * 2\n  # comentario\n"));
    }

    #[test]
    fn test_fenced_code_extra_alias() {
        let options = N2LOptions::default().with_language_alias("py", "Python");
        let out = Transpiler::new(&options).parse_block("```py\npass\n```");
        assert!(out.contains("[language=Python]"));
    }

    #[test]
    fn test_unterminated_fence_is_literal() {
        let options = N2LOptions::default();
        let mut transpiler = Transpiler::new(&options);
        let out = transpiler.parse_block("```\nsin cierre");
        assert!(out.starts_with("```"));
        assert!(transpiler
            .warnings()
            .iter()
            .any(|w| w.kind == WarningKind::UnterminatedDelimiter));
    }
}
