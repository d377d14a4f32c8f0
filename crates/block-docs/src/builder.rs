//! BlockDocsBuilder - Main API for documentation generation
//!
//! This module provides the builder pattern API for configuring and
//! running a generation, either from a build script or from the CLI.

use crate::config::{GenerateConfig, PlaceholderValues};
use crate::diagnostics::{BlockDocsResult, Diagnostic};
use crate::docgen::{AggregateResult, Generator};
use crate::output::{write_data, write_preview};
use crate::printer::ProgressPrinter;
use std::path::PathBuf;

/// What a generation writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputMode {
    /// Data file and preview page
    #[default]
    Full,
    /// Data file only
    DataOnly,
}

/// Build output containing generated documentation
#[derive(Debug)]
pub struct BuildOutput {
    /// The written data file
    pub data_file: PathBuf,
    /// The written preview page, in full mode
    pub preview_file: Option<PathBuf>,
    /// The aggregate result that was serialized
    pub result: AggregateResult,
    /// Non-fatal problems met during the run
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildOutput {
    /// Get all generated files
    pub fn all_files(&self) -> impl Iterator<Item = &PathBuf> {
        std::iter::once(&self.data_file).chain(self.preview_file.iter())
    }
}

/// Builder for configuring documentation generation
///
/// # Example
///
/// ```no_run
/// use block_docs::BlockDocsBuilder;
///
/// BlockDocsBuilder::new()
///     .input_folder("input/blocks")
///     .add_file("input/IDummyFile.ts")
///     .output_dir("output")
///     .generate()
///     .expect("Failed to generate docs");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BlockDocsBuilder {
    config: GenerateConfig,
}

impl BlockDocsBuilder {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, e.g. one loaded from a file
    pub fn from_config(config: GenerateConfig) -> Self {
        Self { config }
    }

    /// Set the directory whose subdirectories are blocks
    pub fn input_folder(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input.folder = Some(path.into());
        self
    }

    /// Add an individual interface file
    pub fn add_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input.files.push(path.into());
        self
    }

    /// Set the output directory
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output = path.into();
        self
    }

    /// Set the data file name
    pub fn json_file(mut self, name: impl Into<String>) -> Self {
        self.config.json_file = name.into();
        self
    }

    /// Set the interface file name template
    pub fn interface_name(mut self, template: impl Into<String>) -> Self {
        self.config.interface_name = template.into();
        self
    }

    /// Set the key holding the block id in block examples
    pub fn example_block_id_label(mut self, label: impl Into<String>) -> Self {
        self.config.example_block_id_label = label.into();
        self
    }

    /// Set the example values for undocumented primitives
    pub fn placeholder_values(mut self, values: PlaceholderValues) -> Self {
        self.config.placeholder_values = values;
        self
    }

    /// Suppress progress output
    pub fn silent(mut self, silent: bool) -> Self {
        self.config.silent = silent;
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// Generate the data file and the preview page
    pub fn generate(self) -> BlockDocsResult<BuildOutput> {
        self.build(OutputMode::Full)
    }

    /// Generate the data file only
    pub fn generate_data(self) -> BlockDocsResult<BuildOutput> {
        self.build(OutputMode::DataOnly)
    }

    /// Run the generation and write its output
    ///
    /// This method:
    /// 1. Parses and flattens every configured block and file
    /// 2. Writes the data file
    /// 3. Writes the preview page in [`OutputMode::Full`]
    pub fn build(self, mode: OutputMode) -> BlockDocsResult<BuildOutput> {
        let printer = ProgressPrinter::new(true, self.config.silent);
        let mut generator = Generator::new(self.config).with_printer(printer);
        let result = generator.run()?;

        printer.writing();
        let data_file = write_data(&result, generator.config())?;
        let preview_file = match mode {
            OutputMode::Full => Some(write_preview(generator.config())?),
            OutputMode::DataOnly => None,
        };
        printer.written(&data_file);

        let diagnostics = generator.diagnostics().diagnostics().to_vec();
        printer.diagnostics(&diagnostics);

        Ok(BuildOutput {
            data_file,
            preview_file,
            result,
            diagnostics,
        })
    }
}
