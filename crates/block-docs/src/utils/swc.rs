//! SWC/deno_ast TypeScript parsing utilities
//!
//! This module provides utilities for parsing TypeScript files using deno_ast
//! (which wraps SWC). It handles:
//! - Parsing TypeScript files from disk or from a string
//! - Looking up the JSDoc block attached to a node
//! - Source text extraction for spans

use crate::diagnostics::{BlockDocsError, BlockDocsResult};
use deno_ast::swc::ast as swc_ast;
use deno_ast::swc::common::comments::{Comment, CommentKind};
use deno_ast::swc::common::{BytePos, Span};
use deno_ast::{MediaType, ParseParams, ParsedSource, SourcePos, SourceRange};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A parsed TypeScript module with its source text
pub struct ParsedModule {
    /// The parsed source from deno_ast
    source: ParsedSource,
    /// The file path
    path: PathBuf,
}

impl ParsedModule {
    /// Get the module AST
    pub fn module(&self) -> Option<&swc_ast::Module> {
        match self.source.program_ref() {
            deno_ast::ProgramRef::Module(m) => Some(m),
            deno_ast::ProgramRef::Script(_) => None,
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Extract source text for a span
    ///
    /// SWC positions start at `StartSourcePos`, not at zero, so the span is
    /// mapped through the source text info before slicing.
    pub fn text_for_span(&self, span: Span) -> &str {
        self.source
            .text_info_lazy()
            .range_text(&SourceRange::unsafely_from_span(span))
    }

    /// Get leading comments for a position
    fn leading_comments(&self, pos: BytePos) -> Vec<Comment> {
        // Positions handed out by SWC are valid source positions
        let source_pos = SourcePos::unsafely_from_byte_pos(pos);
        self.source
            .comments()
            .get_leading(source_pos)
            .map(|v| v.to_vec())
            .unwrap_or_default()
    }

    /// Get the JSDoc comment for a span (the last leading `/** */` block)
    pub fn jsdoc_for_span(&self, span: Span) -> Option<String> {
        self.leading_comments(span.lo)
            .iter()
            .rev()
            .find(|c| c.kind == CommentKind::Block && c.text.starts_with('*'))
            .map(|c| c.text.to_string())
    }
}

/// Parse a TypeScript file from disk
pub fn parse_typescript_file(path: impl AsRef<Path>) -> BlockDocsResult<ParsedModule> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(BlockDocsError::FileNotFound(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path).map_err(|e| {
        BlockDocsError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read {}: {}", path.display(), e),
        ))
    })?;

    parse_typescript_source(path, text)
}

/// Parse TypeScript source code from a string
///
/// deno_ast needs an absolute path to build the module specifier.
pub fn parse_typescript_source(
    path: impl AsRef<Path>,
    source: impl Into<Arc<str>>,
) -> BlockDocsResult<ParsedModule> {
    let path = path.as_ref();
    let source: Arc<str> = source.into();

    let media_type = match MediaType::from_path(path) {
        MediaType::Unknown => MediaType::TypeScript,
        other => other,
    };

    let specifier = deno_ast::ModuleSpecifier::from_file_path(path)
        .map_err(|_| BlockDocsError::InvalidPath(path.display().to_string()))?;

    let parsed = deno_ast::parse_module(ParseParams {
        specifier,
        text: source,
        media_type,
        capture_tokens: true,
        scope_analysis: false,
        maybe_syntax: None,
    })
    .map_err(|e| BlockDocsError::TypeScriptParse(format!("{}: {}", path.display(), e)))?;

    Ok(ParsedModule {
        source: parsed,
        path: path.to_path_buf(),
    })
}

/// Helper to convert a string literal to String
pub fn wtf8_to_string(s: &swc_ast::Str) -> String {
    String::from_utf8_lossy(s.value.as_bytes()).into_owned()
}

/// Get the name of a property signature key
pub fn property_key_name(key: &swc_ast::Expr) -> Option<String> {
    match key {
        swc_ast::Expr::Ident(i) => Some(i.sym.to_string()),
        swc_ast::Expr::Lit(swc_ast::Lit::Str(s)) => Some(wtf8_to_string(s)),
        swc_ast::Expr::Lit(swc_ast::Lit::Num(n)) => Some(n.value.to_string()),
        _ => None,
    }
}
