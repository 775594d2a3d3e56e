use notetex_latex_backend::{
    environment, figure, itemize, listing, preamble, titled_environment, POSTAMBLE,
};
use pretty_assertions::assert_eq;

#[test]
fn environment_indents_body_and_pads_with_newlines() {
    let out = environment("itemize", &[], &[], "\\item a\n\\item b");
    assert_eq!(
        out,
        "\n\\begin{itemize}\n    \\item a\n    \\item b\n\\end{itemize}\n"
    );
}

#[test]
fn itemize_keeps_item_order() {
    let out = itemize(&["uno".to_string(), "dos".to_string()]);
    let first = out.find("\\item uno").unwrap();
    let second = out.find("\\item dos").unwrap();
    assert!(first < second);
}

#[test]
fn listing_body_is_not_indented() {
    let out = listing(Some("JavaScript"), "let x = 1;\n  return x;");
    assert_eq!(
        out,
        "\n\\begin{lstlisting}[language=JavaScript]\nlet x = 1;\n  return x;\n\\end{lstlisting}\n"
    );
    assert!(listing(None, "x").starts_with("\n\\begin{lstlisting}\n"));
}

#[test]
fn figure_without_caption_uses_placeholder() {
    let out = figure("./img/grafo.png", None, "fig:grafo");
    assert!(out.contains("\\begin{figure}[h]"));
    assert!(out.contains("\\includegraphics[width=0.6\\textwidth]{./img/grafo.png}"));
    assert!(out.contains("%TODO: \\caption{\\centering Falta caption }"));
    assert!(out.contains("\\label{fig:grafo}"));
}

#[test]
fn figure_with_caption() {
    let out = figure("./img/a.png", Some("Un grafo"), "fig:a");
    assert!(out.contains("\\caption{\\centering Un grafo}"));
    assert!(!out.contains("TODO"));
}

#[test]
fn titled_environment_places_label_first() {
    let out = titled_environment("definicion", "Grupo", Some("def:grupo"), "cuerpo");
    assert_eq!(
        out,
        "\n\\begin{definicion}[Grupo]\n    \\label{def:grupo}\n    cuerpo\n\\end{definicion}\n"
    );
}

#[test]
fn titled_environment_without_title() {
    let out = titled_environment("teorema", "", None, "cuerpo");
    assert!(out.starts_with("\n\\begin{teorema}\n"));
}

#[test]
fn preamble_interpolates_title() {
    let out = preamble("Grupos");
    assert!(out.starts_with("% !TeX spellcheck = es_ES\n\\documentclass{fmbnotes}\n"));
    assert!(out.contains("\\newcommand*{\\titulo}{Grupos}\n\\portada{\\titulo} \n"));
    assert!(out.contains("{\\Large\\bfseries\\sffamily \\titulo}"));
    assert_eq!(POSTAMBLE, "\n\\end{document}\n");
}
