//! n2l CLI - Obsidian notes to LaTeX

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use notetex::{
    convert_body, convert_document,
    utils::files::{backup_existing, default_output_path, derive_title},
    utils::report::WarningReport,
    ConversionResult, N2LOptions, DEFAULT_IMAGE_DIR, DEFAULT_MAX_DEPTH,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "n2l")]
#[command(version)]
#[command(about = "notetex - convert Obsidian Markdown notes to LaTeX", long_about = None)]
struct Cli {
    /// Input note (reads from stdin if not provided)
    input_file: Option<PathBuf>,

    /// Output file path (writes to stdout if neither this nor --out-dir is given)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for `<stem>.tex` when no explicit output is given
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Document title (defaults to the input file stem)
    #[arg(short, long)]
    title: Option<String>,

    /// Prefix for transcluded image paths
    #[arg(long, default_value = DEFAULT_IMAGE_DIR)]
    image_dir: String,

    /// Emit only the body, without preamble and `\end{document}`
    #[arg(short, long)]
    body_only: bool,

    /// Maximum nesting depth of inline and block constructs
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Suffix repeated labels with `_2`, `_3`, ...
    #[arg(long)]
    dedupe_labels: bool,

    /// Overwrite an existing output without a `.bak` copy
    #[arg(long)]
    no_backup: bool,

    /// Write the conversion warnings as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

#[cfg(feature = "cli")]
fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("n2l: {}", err);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> ConversionResult<()> {
    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let output_path = match (&cli.output, &cli.input_file, &cli.out_dir) {
        (Some(path), _, _) => Some(path.clone()),
        (None, Some(input), Some(dir)) => Some(default_output_path(input, Some(dir.as_path()))?),
        _ => None,
    };

    let options = N2LOptions::new()
        .with_image_dir(cli.image_dir.clone())
        .with_max_depth(cli.max_depth)
        .with_dedupe_labels(cli.dedupe_labels);

    let result = if cli.body_only {
        convert_body(&input, &options)
    } else {
        let title = match (&cli.title, &cli.input_file) {
            (Some(title), _) => title.clone(),
            (None, Some(path)) => derive_title(path)?,
            (None, None) => String::new(),
        };
        convert_document(&input, &title, &options)
    };

    for warning in &result.warnings {
        eprintln!("warning: {}", warning);
    }

    if let Some(ref path) = cli.report {
        let report = WarningReport::from_output(
            cli.input_file.as_deref().map(display_path),
            output_path.as_deref().map(display_path),
            &result,
        );
        fs::write(path, report.to_json()?)?;
    }

    match output_path {
        Some(path) => {
            if !cli.no_backup {
                backup_existing(&path)?;
            }
            fs::write(&path, &result.content)?;
            tracing::info!(output = %path.display(), "wrote LaTeX");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(result.content.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn display_path(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install notetex --features cli");
    eprintln!("  n2l [OPTIONS] [INPUT_FILE]");
}
