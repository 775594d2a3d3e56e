//! JSON report of the warnings recorded during a conversion.

use serde::Serialize;

use super::error::{ConversionOutput, ConversionResult, ConversionWarning};

#[derive(Debug, Clone, Serialize)]
pub struct WarningReport {
    /// Input file, `None` for stdin.
    pub source: Option<String>,
    /// Output file, `None` for stdout.
    pub target: Option<String>,
    pub warnings: Vec<ConversionWarning>,
}

impl WarningReport {
    pub fn new(
        source: Option<String>,
        target: Option<String>,
        warnings: Vec<ConversionWarning>,
    ) -> Self {
        Self {
            source,
            target,
            warnings,
        }
    }

    pub fn from_output(
        source: Option<String>,
        target: Option<String>,
        output: &ConversionOutput,
    ) -> Self {
        Self::new(source, target, output.warnings.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn to_json(&self) -> ConversionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
