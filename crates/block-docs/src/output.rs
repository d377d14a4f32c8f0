//! Output writer
//!
//! Serializes the aggregate result of a run into `<output>/<jsonFile>` and
//! places the preview page next to it. JSON is always written with
//! four-space indentation, the same formatting used for block examples.

use crate::config::GenerateConfig;
use crate::diagnostics::{BlockDocsError, BlockDocsResult};
use crate::docgen::AggregateResult;
use crate::embed::{preview_page, PREVIEW_FILE_NAME};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::{Path, PathBuf};

/// Indentation of every JSON document produced
const JSON_INDENT: &[u8] = b"    ";

/// Serialize `value` as pretty JSON with four-space indentation
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> BlockDocsResult<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(JSON_INDENT));
    value.serialize(&mut serializer)?;

    String::from_utf8(buffer).map_err(|e| {
        BlockDocsError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Create the output directory if needed
fn prepare_output_dir(dir: &Path) -> BlockDocsResult<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Write the data file, returning its path
pub fn write_data(result: &AggregateResult, config: &GenerateConfig) -> BlockDocsResult<PathBuf> {
    prepare_output_dir(&config.output)?;

    let path = config.data_path();
    let mut json = to_pretty_json(result)?;
    json.push('\n');
    std::fs::write(&path, json)?;

    tracing::info!(path = %path.display(), "wrote data file");
    Ok(path)
}

/// Write the preview page next to the data file, returning its path
pub fn write_preview(config: &GenerateConfig) -> BlockDocsResult<PathBuf> {
    prepare_output_dir(&config.output)?;

    let path = config.output.join(PREVIEW_FILE_NAME);
    std::fs::write(&path, preview_page(&config.json_file))?;

    tracing::info!(path = %path.display(), "wrote preview page");
    Ok(path)
}
