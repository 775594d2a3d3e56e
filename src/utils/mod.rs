//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error and warning types
//! - File-level collaborators of the CLI (titles, output paths, backups)
//! - The JSON warning report

pub mod error;
pub mod files;
pub mod report;

// Re-export commonly used items
pub use error::{
    ConversionError, ConversionOutput, ConversionResult, ConversionWarning, WarningKind,
};
pub use files::{backup_existing, default_output_path, derive_title, BACKUP_EXTENSION};
pub use report::WarningReport;
