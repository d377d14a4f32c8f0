//! Error types and diagnostics
//!
//! Hard failures are `BlockDocsError`s. Problems that only degrade the
//! output (an import that cannot be followed, a unit without a root
//! interface) are collected as `Diagnostic`s and reported at the end of a
//! run.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for block-docs operations
pub type BlockDocsResult<T> = Result<T, BlockDocsError>;

/// Main error type for block-docs
#[derive(Debug, Error)]
pub enum BlockDocsError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error in {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// TypeScript parse error
    #[error("TypeScript parse error: {0}")]
    TypeScriptParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Invalid path
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Config file could not be decoded
    #[error("Invalid config file {file}: {message}")]
    ConfigFile { file: PathBuf, message: String },
}

impl BlockDocsError {
    /// Create a parse error
    pub fn parse(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        BlockDocsError::Parse {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        BlockDocsError::Config(message.into())
    }

    /// Create a config file error
    pub fn config_file(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        BlockDocsError::ConfigFile {
            file: file.into(),
            message: message.into(),
        }
    }
}

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticSeverity {
    /// Warning - generation continues with degraded output
    Warning,
}

impl DiagnosticSeverity {
    /// Get display string
    pub fn display(&self) -> &'static str {
        match self {
            DiagnosticSeverity::Warning => "warning",
        }
    }
}

/// A diagnostic message
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Message
    pub message: String,
    /// Source file
    pub file: Option<PathBuf>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(severity: DiagnosticSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            file: None,
        }
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticSeverity::Warning, message)
    }

    /// Set the source file
    pub fn in_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Format the diagnostic for display
    pub fn format(&self) -> String {
        let mut result = String::new();

        if let Some(ref file) = self.file {
            result.push_str(&file.display().to_string());
            result.push_str(": ");
        }

        result.push_str(self.severity.display());
        result.push_str(": ");
        result.push_str(&self.message);

        result
    }
}

/// Collector for diagnostics during a generation run
#[derive(Debug, Default)]
pub struct DiagnosticsCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticsCollector {
    /// Create a new collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn add(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            DiagnosticSeverity::Warning => tracing::warn!("{}", diagnostic.format()),
        }
        self.diagnostics.push(diagnostic);
    }

    /// Add a warning
    pub fn warning(&mut self, message: impl Into<String>) {
        self.add(Diagnostic::warning(message));
    }

    /// Move every diagnostic of `other` into this collector
    pub fn extend(&mut self, other: Vec<Diagnostic>) {
        for diagnostic in other {
            self.add(diagnostic);
        }
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get warning count
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == DiagnosticSeverity::Warning)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_docs_error() {
        let err = BlockDocsError::parse("IImage.ts", "unexpected token");
        assert!(err.to_string().contains("IImage.ts"));
        assert!(err.to_string().contains("unexpected token"));

        let err = BlockDocsError::config("Please provide an input and an output path");
        assert_eq!(
            err.to_string(),
            "Configuration error: Please provide an input and an output path"
        );
    }

    #[test]
    fn test_diagnostic() {
        let diag = Diagnostic::warning("cannot resolve import './enum/Theme'")
            .in_file("block-dummy/IBlockDummyOptions.ts");

        assert_eq!(diag.severity, DiagnosticSeverity::Warning);
        assert_eq!(
            diag.format(),
            "block-dummy/IBlockDummyOptions.ts: warning: cannot resolve import './enum/Theme'"
        );
    }

    #[test]
    fn test_diagnostics_collector() {
        let mut collector = DiagnosticsCollector::new();
        collector.warning("warning 1");
        collector.extend(vec![Diagnostic::warning("warning 2").in_file("IImage.ts")]);

        assert_eq!(collector.warning_count(), 2);
        assert_eq!(collector.diagnostics().len(), 2);
    }
}
