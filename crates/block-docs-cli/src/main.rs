//! block-docs command line interface
//!
//! ```text
//! block-docs generate --input input/blocks --file input/IDummyFile.ts --output output
//! block-docs data --config block-docs.toml
//! ```
//!
//! Flags override values read from `--config`. Log verbosity is taken from
//! the `BLOCK_DOCS_LOG` environment variable.

use anyhow::{Context, Result};
use block_docs::{BlockDocsBuilder, GenerateConfig, OutputMode};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Environment variable holding the log filter
const LOG_ENV: &str = "BLOCK_DOCS_LOG";

/// generate documentation and example payloads for TypeScript block interfaces
#[derive(Parser, Debug)]
#[command(name = "block-docs", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// write the data file and the preview page
    Generate(GenerateArgs),
    /// write the data file only
    Data(GenerateArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct GenerateArgs {
    /// configuration file (.json or .toml)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// directory whose subdirectories are blocks
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// individual interface file, may be repeated
    #[arg(long = "file", short = 'f')]
    files: Vec<PathBuf>,

    /// output directory
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// name of the data file inside the output directory
    #[arg(long)]
    json_file: Option<String>,

    /// suppress progress output
    #[arg(long, default_value_t = false)]
    silent: bool,
}

impl GenerateArgs {
    /// Load the config file, if any, and apply the flags on top
    fn into_config(self) -> Result<GenerateConfig> {
        let mut config = match &self.config {
            Some(path) => GenerateConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => GenerateConfig::default(),
        };

        if let Some(input) = self.input {
            config.input.folder = Some(input);
        }
        if !self.files.is_empty() {
            config.input.files = self.files;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(json_file) = self.json_file {
            config.json_file = json_file;
        }
        if self.silent {
            config.silent = true;
        }

        Ok(config)
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let (args, mode) = match cli.cmd {
        Command::Generate(args) => (args, OutputMode::Full),
        Command::Data(args) => (args, OutputMode::DataOnly),
    };

    let config = args.into_config()?;
    let output = BlockDocsBuilder::from_config(config)
        .build(mode)
        .context("generating block documentation")?;

    tracing::debug!(
        files = ?output.all_files().collect::<Vec<_>>(),
        warnings = output.diagnostics.len(),
        "done"
    );
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    run(Cli::parse())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn generate_args(argv: &[&str]) -> (GenerateArgs, bool) {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.cmd {
            Command::Generate(args) => (args, true),
            Command::Data(args) => (args, false),
        }
    }

    #[test]
    fn test_parse_generate() {
        let (args, full) = generate_args(&[
            "block-docs",
            "generate",
            "--input",
            "input/blocks",
            "--file",
            "a.ts",
            "--file",
            "b.ts",
            "--output",
            "out",
        ]);
        assert!(full);

        let config = args.into_config().unwrap();
        assert_eq!(config.input.folder, Some(PathBuf::from("input/blocks")));
        assert_eq!(config.input.files.len(), 2);
        assert_eq!(config.output, PathBuf::from("out"));
        assert_eq!(config.json_file, "data.json");
        assert!(!config.silent);
    }

    #[test]
    fn test_flags_override_config_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("block-docs.json");
        std::fs::write(
            &path,
            r#"{"input": "from-file", "output": "file-out", "jsonFile": "blocks.json"}"#,
        )
        .unwrap();

        let (args, full) = generate_args(&[
            "block-docs",
            "data",
            "--config",
            path.to_str().unwrap(),
            "--output",
            "flag-out",
            "--silent",
        ]);
        assert!(!full);

        let config = args.into_config().unwrap();
        assert_eq!(config.input.folder, Some(PathBuf::from("from-file")));
        assert_eq!(config.output, PathBuf::from("flag-out"));
        assert_eq!(config.json_file, "blocks.json");
        assert!(config.silent);
    }

    #[test]
    fn test_missing_config_file() {
        let (args, _) = generate_args(&[
            "block-docs",
            "generate",
            "--config",
            "/tmp/block-docs-missing/config.toml",
        ]);
        assert!(args.into_config().is_err());
    }
}
