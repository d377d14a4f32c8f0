//! block-docs: documentation generator for TypeScript block interfaces
//!
//! This crate documents UI "block" components from their option
//! interfaces by:
//! - Parsing TypeScript interface files using deno_ast/SWC, following
//!   relative imports
//! - Flattening annotated properties into ordered property records
//! - Registering shared interfaces, enums and string-literal unions once
//! - Synthesizing an example payload for every block
//! - Writing a JSON data file and a static preview page
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐   ┌──────────────────────┐
//! │ blocks/<block-dir>/  │   │ individual files     │
//! │ I<Block>Options.ts   │   │ IDummyFile.ts        │
//! └──────────┬───────────┘   └──────────┬───────────┘
//!            └────────────┬─────────────┘
//!                         ▼
//!                  ┌─────────────┐
//!                  │ ParsedUnit  │  (SWC parse)
//!                  └──────┬──────┘
//!                         ▼
//!                  ┌─────────────┐      ┌────────────────┐
//!                  │  Flattener  │─────▶│ ReferenceTable │
//!                  └──────┬──────┘      └───────┬────────┘
//!                         ▼                     │
//!              ┌─────────────────────┐          │
//!              │ ExampleSynthesizer  │◀─────────┘
//!              └──────────┬──────────┘
//!                         ▼
//!              ┌─────────────────────┐
//!              │ data.json + preview │
//!              └─────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use block_docs::BlockDocsBuilder;
//!
//! BlockDocsBuilder::new()
//!     .input_folder("input/blocks")
//!     .output_dir("output")
//!     .generate()
//!     .expect("Failed to generate docs");
//! ```

// Core types
pub mod js_doc;
pub mod property;
pub mod reference;
pub mod types;

// Parsing and utilities
pub mod diagnostics;
pub mod parser;
pub mod printer;
pub mod utils;

// Generation
pub mod builder;
pub mod config;
pub mod docgen;
pub mod embed;
pub mod example;
pub mod output;

// Re-exports for convenience
pub use diagnostics::{BlockDocsError, BlockDocsResult, Diagnostic, DiagnosticSeverity};
pub use property::{Flattener, PropertyRecord};
pub use reference::{
    EnumMember, EnumReference, ObjectReference, Reference, ReferenceTable, StringLiteralMember,
    StringLiteralReference,
};
pub use types::{
    DeclaredKind, DeclaredType, ParsedUnit, RawEnumMember, RawProperty, TypeDescriptor,
    TypeSource,
};

// Parser
pub use parser::{parse_interface_file, parse_interface_str, InterfaceParser, SwcInterfaceParser};

// Terminal output
pub use printer::{ProgressLine, ProgressPrinter};

// Configuration
pub use config::{GenerateConfig, InputConfig, PlaceholderValues};

// Builder API
pub use builder::{BlockDocsBuilder, BuildOutput, OutputMode};

// Documentation generation
pub use docgen::{AggregateResult, BlockEntry, Generator};
pub use example::ExampleSynthesizer;
pub use output::{to_pretty_json, write_data, write_preview};
