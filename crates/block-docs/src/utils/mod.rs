//! Utilities for block-docs
//!
//! This module provides utilities for:
//! - SWC/deno_ast TypeScript parsing
//! - Block directory and file naming

pub mod case;
pub mod swc;

pub use case::{block_id_from_dir, file_entry_name, pascal_case};
pub use swc::{parse_typescript_file, parse_typescript_source, ParsedModule};
