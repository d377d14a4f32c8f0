//! Generation configuration
//!
//! Mirrors the options object of the task that drives generation:
//!
//! ```json
//! {
//!     "input": { "folder": "./input/blocks/", "files": ["./input/IDummyFile.ts"] },
//!     "output": "./output/",
//!     "jsonFile": "data.json",
//!     "interfaceName": "I{blockId}Options.ts",
//!     "exampleBlockIdLabel": "componentId",
//!     "placeholderValues": { "string": "Lorem ipsum dolor sit amet", "boolean": true, "number": 1 },
//!     "silent": false
//! }
//! ```
//!
//! `input` may also be a plain directory string, and `files` a single path.

use crate::diagnostics::{BlockDocsError, BlockDocsResult};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::path::{Path, PathBuf};

/// Placeholder in `interfaceName` replaced by the block name
pub const BLOCK_ID_PLACEHOLDER: &str = "{blockId}";

/// Values used in examples when a property has no `@placeholder`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderValues {
    pub string: String,
    pub boolean: bool,
    pub number: Number,
}

impl Default for PlaceholderValues {
    fn default() -> Self {
        Self {
            string: "Lorem ipsum dolor sit amet".to_string(),
            boolean: true,
            number: Number::from(1),
        }
    }
}

/// Where interface files are read from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawInput", into = "RawInput")]
pub struct InputConfig {
    /// Directory whose subdirectories are blocks
    pub folder: Option<PathBuf>,
    /// Individual interface files
    pub files: Vec<PathBuf>,
}

impl InputConfig {
    /// Input from a block directory only
    pub fn folder(path: impl Into<PathBuf>) -> Self {
        Self {
            folder: Some(path.into()),
            files: Vec::new(),
        }
    }

    /// The block directory, unless unset or empty
    pub fn block_folder(&self) -> Option<&Path> {
        self.folder
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    /// Whether nothing would be processed
    pub fn is_empty(&self) -> bool {
        self.block_folder().is_none() && self.files.is_empty()
    }
}

/// Accepted spellings of `input`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawInput {
    Folder(PathBuf),
    Sources {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        folder: Option<PathBuf>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        files: Option<OneOrMany>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

impl From<RawInput> for InputConfig {
    fn from(raw: RawInput) -> Self {
        match raw {
            RawInput::Folder(folder) => InputConfig::folder(folder),
            RawInput::Sources { folder, files } => InputConfig {
                folder,
                files: match files {
                    Some(OneOrMany::One(file)) => vec![file],
                    Some(OneOrMany::Many(files)) => files,
                    None => Vec::new(),
                },
            },
        }
    }
}

impl From<InputConfig> for RawInput {
    fn from(input: InputConfig) -> Self {
        RawInput::Sources {
            folder: input.folder,
            files: if input.files.is_empty() {
                None
            } else {
                Some(OneOrMany::Many(input.files))
            },
        }
    }
}

/// Full configuration of a generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateConfig {
    /// Block directory and/or individual files
    pub input: InputConfig,
    /// Output directory
    pub output: PathBuf,
    /// Name of the data file inside `output`
    pub json_file: String,
    /// File name template of a block's interface, see [`BLOCK_ID_PLACEHOLDER`]
    pub interface_name: String,
    /// Key holding the block id in block examples
    pub example_block_id_label: String,
    /// Example values for undocumented primitives
    pub placeholder_values: PlaceholderValues,
    /// Suppress progress output
    pub silent: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            output: PathBuf::new(),
            json_file: "data.json".to_string(),
            interface_name: format!("I{}Options.ts", BLOCK_ID_PLACEHOLDER),
            example_block_id_label: "componentId".to_string(),
            placeholder_values: PlaceholderValues::default(),
            silent: false,
        }
    }
}

impl GenerateConfig {
    /// Create a config for a block directory and an output directory
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: InputConfig::folder(input),
            output: output.into(),
            ..Default::default()
        }
    }

    /// Load a config from a `.json` or `.toml` file
    pub fn from_file(path: impl AsRef<Path>) -> BlockDocsResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            BlockDocsError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            ))
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| BlockDocsError::config_file(path, e.to_string())),
            Some("toml") => {
                toml::from_str(&content).map_err(|e| BlockDocsError::config_file(path, e.to_string()))
            }
            _ => Err(BlockDocsError::config_file(
                path,
                "expected a .json or .toml file",
            )),
        }
    }

    /// Check that there is something to read and somewhere to write
    pub fn validate(&self) -> BlockDocsResult<()> {
        if self.input.is_empty() || self.output.as_os_str().is_empty() {
            return Err(BlockDocsError::config(
                "Please provide an input and an output path",
            ));
        }
        if self.json_file.is_empty() {
            return Err(BlockDocsError::config("jsonFile must not be empty"));
        }
        Ok(())
    }

    /// Path of the generated data file
    pub fn data_path(&self) -> PathBuf {
        self.output.join(&self.json_file)
    }

    /// Interface file name for a block, with the PascalCase directory name
    /// substituted into the template
    pub fn interface_file_name(&self, pascal_name: &str) -> String {
        self.interface_name
            .replacen(BLOCK_ID_PLACEHOLDER, pascal_name, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = GenerateConfig::default();
        assert_eq!(config.json_file, "data.json");
        assert_eq!(config.interface_name, "I{blockId}Options.ts");
        assert_eq!(config.example_block_id_label, "componentId");
        assert_eq!(config.placeholder_values.string, "Lorem ipsum dolor sit amet");
        assert!(config.placeholder_values.boolean);
        assert_eq!(config.placeholder_values.number, Number::from(1));
        assert!(!config.silent);
    }

    #[test]
    fn test_input_as_string() {
        let config: GenerateConfig =
            serde_json::from_str(r#"{"input": "./input/", "output": "./output/"}"#).unwrap();
        assert_eq!(config.input, InputConfig::folder("./input/"));
        assert_eq!(config.json_file, "data.json");
    }

    #[test]
    fn test_input_with_single_file() {
        let config: GenerateConfig = serde_json::from_str(
            r#"{"input": {"files": "./input/IDummyFile.ts"}, "output": "out"}"#,
        )
        .unwrap();
        assert_eq!(config.input.folder, None);
        assert_eq!(config.input.files, vec![PathBuf::from("./input/IDummyFile.ts")]);
    }

    #[test]
    fn test_input_with_folder_and_files() {
        let config: GenerateConfig = serde_json::from_str(
            r#"{
                "input": {"folder": "./input/blocks/", "files": ["a.ts", "b.ts"]},
                "output": "out",
                "placeholderValues": {"number": 7},
                "silent": true
            }"#,
        )
        .unwrap();
        assert_eq!(config.input.block_folder(), Some(Path::new("./input/blocks/")));
        assert_eq!(config.input.files.len(), 2);
        assert_eq!(config.placeholder_values.number, Number::from(7));
        assert_eq!(config.placeholder_values.string, "Lorem ipsum dolor sit amet");
        assert!(config.silent);
    }

    #[test]
    fn test_validate() {
        assert!(GenerateConfig::new("in", "out").validate().is_ok());

        let missing_output = GenerateConfig::new("in", "");
        assert!(matches!(
            missing_output.validate(),
            Err(BlockDocsError::Config(_))
        ));

        let missing_input = GenerateConfig {
            output: PathBuf::from("out"),
            ..Default::default()
        };
        assert!(missing_input.validate().is_err());

        let empty_folder = GenerateConfig::new("", "out");
        assert!(empty_folder.validate().is_err());
    }

    #[test]
    fn test_interface_file_name() {
        let config = GenerateConfig::default();
        assert_eq!(
            config.interface_file_name("BlockDummy"),
            "IBlockDummyOptions.ts"
        );
        assert_eq!(
            GenerateConfig::new("in", "out").data_path(),
            PathBuf::from("out").join("data.json")
        );
    }

    #[test]
    fn test_from_toml_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("block-docs.toml");
        std::fs::write(
            &path,
            r#"
output = "docs"
jsonFile = "blocks.json"

[input]
folder = "src/blocks"
files = ["src/IPage.ts"]

[placeholderValues]
string = "sample"
"#,
        )
        .unwrap();

        let config = GenerateConfig::from_file(&path).unwrap();
        assert_eq!(config.output, PathBuf::from("docs"));
        assert_eq!(config.json_file, "blocks.json");
        assert_eq!(config.input.files, vec![PathBuf::from("src/IPage.ts")]);
        assert_eq!(config.placeholder_values.string, "sample");
        assert!(config.placeholder_values.boolean);
    }

    #[test]
    fn test_from_file_rejects_unknown_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "output: docs").unwrap();

        assert!(matches!(
            GenerateConfig::from_file(&path),
            Err(BlockDocsError::ConfigFile { .. })
        ));
    }
}
