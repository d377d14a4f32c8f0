//! Documentation generation core
//!
//! This module provides the generation pipeline: walking the configured
//! block directories and files, flattening their interfaces and
//! assembling the aggregate result.

mod generator;

pub use generator::{AggregateResult, BlockEntry, Generator};
