//! File-level helpers for the `n2l` binary.
//!
//! None of this is used by the transpiler itself, which only ever sees text.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::{ConversionError, ConversionResult};

/// Extension appended to an output file before it is overwritten.
pub const BACKUP_EXTENSION: &str = "bak";

/// Document title for a note: its file name without extension.
pub fn derive_title(input: &Path) -> ConversionResult<String> {
    input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            ConversionError::invalid(format!("cannot derive a title from {}", input.display()))
        })
}

/// `<stem>.tex`, next to the input or inside `out_dir` when given.
pub fn default_output_path(input: &Path, out_dir: Option<&Path>) -> ConversionResult<PathBuf> {
    let stem = derive_title(input)?;
    let file_name = format!("{}.tex", stem);
    Ok(match out_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    })
}

/// Copy an existing `output` to `<output>.bak`.
///
/// Returns the backup path, or `None` when there was nothing to back up.
pub fn backup_existing(output: &Path) -> ConversionResult<Option<PathBuf>> {
    if !output.is_file() {
        return Ok(None);
    }
    let mut name = output.as_os_str().to_owned();
    name.push(".");
    name.push(BACKUP_EXTENSION);
    let backup = PathBuf::from(name);
    fs::copy(output, &backup)?;
    tracing::info!(from = %output.display(), to = %backup.display(), "backed up previous output");
    Ok(Some(backup))
}
