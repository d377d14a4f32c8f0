//! Generator - block/file documentation driver
//!
//! This module provides the Generator struct which runs one generation:
//! enumerating input units, parsing and flattening each one, synthesizing
//! its example and assembling the aggregate result.

use crate::config::GenerateConfig;
use crate::diagnostics::{BlockDocsResult, Diagnostic, DiagnosticsCollector};
use crate::example::ExampleSynthesizer;
use crate::output::to_pretty_json;
use crate::parser::{InterfaceParser, SwcInterfaceParser};
use crate::printer::ProgressPrinter;
use crate::property::{Flattener, PropertyRecord};
use crate::reference::{EnumReference, ObjectReference, ReferenceTable, StringLiteralReference};
use crate::utils::case::{block_id_from_dir, file_entry_name, pascal_case};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Key of the example payload in a wrapped block example
const EXAMPLE_DATA_KEY: &str = "data";

/// One processed input unit, a block directory or a file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockEntry {
    /// Block id or file stem
    pub name: String,
    /// Top-level properties, reversed from declaration order
    pub properties: Vec<PropertyRecord>,
    /// Example payload, pretty-printed
    pub example: String,
}

/// Everything a run produces, serialized as the data file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    /// Entries from the block directory, in directory name order
    pub blocks: Vec<BlockEntry>,
    /// Entries from individual files, in configured order
    pub files: Vec<BlockEntry>,
    /// Object references in first-encounter order
    pub references: Vec<ObjectReference>,
    /// Enum references in first-encounter order
    pub enums: Vec<EnumReference>,
    /// String-literal union references in first-encounter order
    pub string_literals: Vec<StringLiteralReference>,
}

/// The documentation generation driver
///
/// A Generator runs the whole pipeline for a configuration:
/// 1. Validate the configuration
/// 2. Parse every block directory and file through the [`InterfaceParser`]
/// 3. Flatten properties, registering references in a fresh table
/// 4. Synthesize examples
///
/// Writing the result is left to [`crate::output`].
pub struct Generator<P: InterfaceParser = SwcInterfaceParser> {
    /// Configuration
    config: GenerateConfig,
    /// Source of parsed units
    parser: P,
    /// Progress output
    printer: ProgressPrinter,
    /// Diagnostics collector
    diagnostics: DiagnosticsCollector,
}

impl Generator<SwcInterfaceParser> {
    /// Create a new Generator with the given configuration
    pub fn new(config: GenerateConfig) -> Self {
        Self::with_parser(config, SwcInterfaceParser)
    }
}

impl<P: InterfaceParser> Generator<P> {
    /// Create a Generator reading units through `parser`
    pub fn with_parser(config: GenerateConfig, parser: P) -> Self {
        let printer = ProgressPrinter::new(true, config.silent);
        Self {
            config,
            parser,
            printer,
            diagnostics: DiagnosticsCollector::new(),
        }
    }

    /// Replace the progress printer
    pub fn with_printer(mut self, printer: ProgressPrinter) -> Self {
        self.printer = printer;
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// Get the progress printer
    pub fn printer(&self) -> &ProgressPrinter {
        &self.printer
    }

    /// Get the diagnostics collector
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    /// Run the generation pipeline
    ///
    /// Fails before touching the filesystem when the configuration is
    /// invalid. Every run starts from an empty reference table.
    pub fn run(&mut self) -> BlockDocsResult<AggregateResult> {
        if let Err(e) = self.config.validate() {
            tracing::error!("{}", e);
            return Err(e);
        }

        let mut table = ReferenceTable::new();
        let mut result = AggregateResult::default();

        if let Some(folder) = self.config.input.block_folder().map(Path::to_path_buf) {
            let directories = block_directories(&folder)?;
            let total = directories.len();
            tracing::info!(folder = %folder.display(), blocks = total, "generating block documentation");

            for (index, directory) in directories.iter().enumerate() {
                let entry = self.generate_block(directory, index, total, &mut table)?;
                result.blocks.push(entry);
            }
        }

        let files = self.config.input.files.clone();
        let total = files.len();
        for (index, file) in files.iter().enumerate() {
            let name = file_entry_name(file);
            self.printer.file(index, total, &name);

            let (properties, example) = self.process_unit(file, &mut table)?;
            result.files.push(BlockEntry {
                name,
                properties,
                example: to_pretty_json(&example)?,
            });
        }

        let (references, enums, string_literals) = table.into_parts();
        result.references = references;
        result.enums = enums;
        result.string_literals = string_literals;

        tracing::info!(
            blocks = result.blocks.len(),
            files = result.files.len(),
            references = result.references.len(),
            enums = result.enums.len(),
            string_literals = result.string_literals.len(),
            warnings = self.diagnostics.warning_count(),
            "generation finished"
        );

        Ok(result)
    }

    fn generate_block(
        &mut self,
        directory: &Path,
        index: usize,
        total: usize,
        table: &mut ReferenceTable,
    ) -> BlockDocsResult<BlockEntry> {
        let dir_name = directory
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let block_id = block_id_from_dir(&dir_name);
        self.printer.block(index, total, &block_id);

        let interface = directory.join(self.config.interface_file_name(&pascal_case(&dir_name)));
        let (properties, example) = self.process_unit(&interface, table)?;

        let mut wrapped = Map::new();
        wrapped.insert(
            self.config.example_block_id_label.clone(),
            Value::String(block_id.clone()),
        );
        wrapped.insert(EXAMPLE_DATA_KEY.to_string(), Value::Object(example));

        Ok(BlockEntry {
            name: block_id,
            properties,
            example: to_pretty_json(&wrapped)?,
        })
    }

    /// Parse, flatten and synthesize one interface file
    fn process_unit(
        &mut self,
        path: &Path,
        table: &mut ReferenceTable,
    ) -> BlockDocsResult<(Vec<PropertyRecord>, Map<String, Value>)> {
        let mut unit = self.parser.parse_file(path)?;
        self.diagnostics.extend(std::mem::take(&mut unit.warnings));

        if unit.root().is_none() {
            self.diagnostics
                .add(Diagnostic::warning("no interface found").in_file(path));
        }

        let mut properties = Flattener::new(&unit, table).flatten_properties(unit.root_properties());
        // Declarations list properties bottom-up relative to display order
        properties.reverse();

        let example = ExampleSynthesizer::new(table, &self.config.placeholder_values)
            .synthesize(&properties);

        Ok((properties, example))
    }
}

/// Immediate subdirectories of `folder`, sorted by name
fn block_directories(folder: &Path) -> BlockDocsResult<Vec<PathBuf>> {
    let mut directories = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_dir() {
            directories.push(entry.into_path());
        }
    }

    Ok(directories)
}
