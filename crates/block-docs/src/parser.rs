//! TypeScript interface parser
//!
//! Turns an interface file into a [`ParsedUnit`]. The file is parsed with
//! deno_ast/SWC; relative `import` statements are followed so that
//! interfaces, enums and type aliases declared in sibling files resolve.
//! Every property type is classified into a [`TypeDescriptor`] here, so the
//! flattener never has to look at syntax.

use crate::diagnostics::{BlockDocsError, BlockDocsResult, Diagnostic};
use crate::js_doc::doc_lines;
use crate::types::{
    DeclaredKind, DeclaredType, ParsedUnit, RawEnumMember, RawProperty, TypeDescriptor,
};
use crate::utils::swc::{
    parse_typescript_file, parse_typescript_source, property_key_name, wtf8_to_string,
    ParsedModule,
};
use deno_ast::swc::ast as swc_ast;
use deno_ast::swc::common::{Span, Spanned};
use serde_json::{Number, Value};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Import chains longer than this are treated as unresolvable
const MAX_IMPORT_HOPS: usize = 16;
/// Aliases of aliases nested deeper than this are not expanded
const MAX_ALIAS_DEPTH: usize = 16;

/// Source of parsed units, one per interface file
pub trait InterfaceParser {
    /// Parse the file at `path`
    fn parse_file(&self, path: &Path) -> BlockDocsResult<ParsedUnit>;
}

/// [`InterfaceParser`] backed by deno_ast
#[derive(Debug, Clone, Copy, Default)]
pub struct SwcInterfaceParser;

impl InterfaceParser for SwcInterfaceParser {
    fn parse_file(&self, path: &Path) -> BlockDocsResult<ParsedUnit> {
        parse_interface_file(path)
    }
}

/// Parse an interface file from disk, following its relative imports
pub fn parse_interface_file(path: impl AsRef<Path>) -> BlockDocsResult<ParsedUnit> {
    let path = path.as_ref();
    let absolute = path
        .canonicalize()
        .map_err(|_| BlockDocsError::FileNotFound(path.to_path_buf()))?;

    load_unit(parse_typescript_file(&absolute)?)
}

/// Parse interface source code. Relative imports are resolved against the
/// directory of `path`.
pub fn parse_interface_str(path: impl AsRef<Path>, source: &str) -> BlockDocsResult<ParsedUnit> {
    load_unit(parse_typescript_source(path, source)?)
}

fn load_unit(entry: ParsedModule) -> BlockDocsResult<ParsedUnit> {
    if entry.module().is_none() {
        return Err(BlockDocsError::parse(entry.path(), "not an ES module"));
    }
    let mut graph = ModuleGraph::default();
    let entry = graph.insert(entry);
    Ok(graph.into_unit(entry))
}

// ============================================================================
// Module graph
// ============================================================================

/// How a local name was imported
struct ImportBinding {
    /// Loaded module the name comes from, if it could be followed
    module: Option<usize>,
    /// Exported name, `None` for a default import
    imported: Option<String>,
}

struct LoadedModule {
    parsed: ParsedModule,
    imports: HashMap<String, ImportBinding>,
    default_export: Option<String>,
}

impl LoadedModule {
    fn find(&self, name: &str) -> Option<TypeDecl<'_>> {
        let module = self.parsed.module()?;
        type_decls(module).into_iter().find(|d| d.name() == name)
    }
}

/// Every file reachable from an entry file through relative imports
#[derive(Default)]
struct ModuleGraph {
    modules: Vec<LoadedModule>,
    by_path: HashMap<PathBuf, usize>,
    warnings: Vec<Diagnostic>,
}

/// One `import` specifier
struct ScannedImport {
    local: String,
    specifier: String,
    imported: Option<String>,
}

impl ModuleGraph {
    /// Add a parsed module and, recursively, the modules it imports
    fn insert(&mut self, parsed: ParsedModule) -> usize {
        let idx = self.modules.len();
        self.by_path.insert(parsed.path().to_path_buf(), idx);

        let (scanned, default_export) = match parsed.module() {
            Some(module) => scan_module(module),
            None => (Vec::new(), None),
        };
        tracing::debug!(path = %parsed.path().display(), imports = scanned.len(), "loaded module");

        self.modules.push(LoadedModule {
            parsed,
            imports: HashMap::new(),
            default_export,
        });

        for import in scanned {
            let module = self.load_import(idx, &import.specifier);
            self.modules[idx].imports.insert(
                import.local,
                ImportBinding {
                    module,
                    imported: import.imported,
                },
            );
        }

        idx
    }

    fn load_import(&mut self, from: usize, specifier: &str) -> Option<usize> {
        // Package imports carry no block interfaces
        if !specifier.starts_with('.') {
            return None;
        }

        let from_path = self.modules[from].parsed.path().to_path_buf();
        let dir = from_path.parent()?;
        let Some(path) = resolve_import(dir, specifier) else {
            self.warnings.push(
                Diagnostic::warning(format!("cannot resolve import '{}'", specifier))
                    .in_file(&from_path),
            );
            return None;
        };

        if let Some(&idx) = self.by_path.get(&path) {
            return Some(idx);
        }

        match parse_typescript_file(&path) {
            Ok(parsed) => Some(self.insert(parsed)),
            Err(e) => {
                self.warnings
                    .push(Diagnostic::warning(e.to_string()).in_file(&from_path));
                None
            }
        }
    }

    /// Find the declaration `name` refers to inside module `module`,
    /// following imports
    fn resolve(&self, module: usize, name: &str) -> Option<(usize, TypeDecl<'_>)> {
        let mut module = module;
        let mut name = name.to_string();

        for _ in 0..MAX_IMPORT_HOPS {
            let loaded = &self.modules[module];
            if let Some(decl) = loaded.find(&name) {
                return Some((module, decl));
            }

            let binding = loaded.imports.get(&name)?;
            let target = binding.module?;
            name = match &binding.imported {
                Some(imported) => imported.clone(),
                None => self.modules[target].default_export.clone()?,
            };
            module = target;
        }

        None
    }

    fn into_unit(self, entry: usize) -> ParsedUnit {
        let mut converter = Converter::new(&self);
        converter.convert_entry(entry);
        let mut unit = converter.unit;
        unit.warnings = self.warnings;
        unit
    }
}

/// Resolve a relative import specifier to an existing file
fn resolve_import(dir: &Path, specifier: &str) -> Option<PathBuf> {
    let base = dir.join(specifier);
    let with_suffix = |suffix: &str| {
        let mut path = base.clone().into_os_string();
        path.push(suffix);
        PathBuf::from(path)
    };

    let candidates = [
        base.clone(),
        with_suffix(".ts"),
        with_suffix(".tsx"),
        with_suffix(".d.ts"),
        base.join("index.ts"),
    ];

    candidates
        .into_iter()
        .find(|p| p.is_file())
        .and_then(|p| p.canonicalize().ok())
}

/// Collect imports and the default export name of a module
fn scan_module(module: &swc_ast::Module) -> (Vec<ScannedImport>, Option<String>) {
    let mut imports = Vec::new();
    let mut default_export = None;

    for item in &module.body {
        let swc_ast::ModuleItem::ModuleDecl(decl) = item else {
            continue;
        };

        match decl {
            swc_ast::ModuleDecl::Import(import) => {
                let specifier = wtf8_to_string(&import.src);
                for spec in &import.specifiers {
                    match spec {
                        swc_ast::ImportSpecifier::Default(default) => {
                            imports.push(ScannedImport {
                                local: default.local.sym.to_string(),
                                specifier: specifier.clone(),
                                imported: None,
                            });
                        }
                        swc_ast::ImportSpecifier::Named(named) => {
                            let local = named.local.sym.to_string();
                            let imported = named
                                .imported
                                .as_ref()
                                .map(export_name)
                                .unwrap_or_else(|| local.clone());
                            imports.push(ScannedImport {
                                local,
                                specifier: specifier.clone(),
                                imported: Some(imported),
                            });
                        }
                        swc_ast::ImportSpecifier::Namespace(_) => {}
                    }
                }
            }
            swc_ast::ModuleDecl::ExportDefaultExpr(export) => {
                if let swc_ast::Expr::Ident(i) = export.expr.as_ref() {
                    default_export = Some(i.sym.to_string());
                }
            }
            swc_ast::ModuleDecl::ExportDefaultDecl(export) => {
                if let swc_ast::DefaultDecl::TsInterfaceDecl(iface) = &export.decl {
                    default_export = Some(iface.id.sym.to_string());
                }
            }
            swc_ast::ModuleDecl::ExportNamed(named) if named.src.is_none() => {
                for spec in &named.specifiers {
                    if let swc_ast::ExportSpecifier::Named(s) = spec {
                        let exported = s.exported.as_ref().map(export_name);
                        if exported.as_deref() == Some("default") {
                            default_export = Some(export_name(&s.orig));
                        }
                    }
                }
            }
            _ => {}
        }
    }

    (imports, default_export)
}

fn export_name(name: &swc_ast::ModuleExportName) -> String {
    match name {
        swc_ast::ModuleExportName::Ident(i) => i.sym.to_string(),
        swc_ast::ModuleExportName::Str(s) => wtf8_to_string(s),
    }
}

/// A top-level type declaration in a module
#[derive(Clone, Copy)]
enum TypeDecl<'m> {
    Interface(&'m swc_ast::TsInterfaceDecl),
    Enum(&'m swc_ast::TsEnumDecl),
    Alias(&'m swc_ast::TsTypeAliasDecl),
}

impl TypeDecl<'_> {
    fn name(&self) -> String {
        match self {
            TypeDecl::Interface(i) => i.id.sym.to_string(),
            TypeDecl::Enum(e) => e.id.sym.to_string(),
            TypeDecl::Alias(a) => a.id.sym.to_string(),
        }
    }
}

/// Type declarations of a module in source order, exported or not
fn type_decls(module: &swc_ast::Module) -> Vec<TypeDecl<'_>> {
    module
        .body
        .iter()
        .filter_map(|item| match item {
            swc_ast::ModuleItem::Stmt(swc_ast::Stmt::Decl(decl)) => type_decl(decl),
            swc_ast::ModuleItem::ModuleDecl(swc_ast::ModuleDecl::ExportDecl(export)) => {
                type_decl(&export.decl)
            }
            swc_ast::ModuleItem::ModuleDecl(swc_ast::ModuleDecl::ExportDefaultDecl(export)) => {
                match &export.decl {
                    swc_ast::DefaultDecl::TsInterfaceDecl(iface) => {
                        Some(TypeDecl::Interface(&**iface))
                    }
                    _ => None,
                }
            }
            _ => None,
        })
        .collect()
}

fn type_decl(decl: &swc_ast::Decl) -> Option<TypeDecl<'_>> {
    match decl {
        swc_ast::Decl::TsInterface(iface) => Some(TypeDecl::Interface(&**iface)),
        swc_ast::Decl::TsEnum(ts_enum) => Some(TypeDecl::Enum(&**ts_enum)),
        swc_ast::Decl::TsTypeAlias(alias) => Some(TypeDecl::Alias(&**alias)),
        _ => None,
    }
}

// ============================================================================
// Conversion to the type model
// ============================================================================

/// Converts SWC declarations into the parsed type model
struct Converter<'g> {
    graph: &'g ModuleGraph,
    unit: ParsedUnit,
    /// Object shapes converted or waiting to be converted
    queued: HashSet<String>,
    pending: Vec<(usize, String)>,
    alias_depth: usize,
}

impl<'g> Converter<'g> {
    fn new(graph: &'g ModuleGraph) -> Self {
        Self {
            graph,
            unit: ParsedUnit::new(),
            queued: HashSet::new(),
            pending: Vec::new(),
            alias_depth: 0,
        }
    }

    fn convert_entry(&mut self, entry: usize) {
        let graph = self.graph;
        let loaded = &graph.modules[entry];
        let Some(module) = loaded.parsed.module() else {
            return;
        };
        let decls = type_decls(module);

        // The entry's own shapes are declared below, never queued
        for decl in &decls {
            if matches!(decl, TypeDecl::Interface(_)) || is_object_alias(decl) {
                self.queued.insert(decl.name());
            }
        }

        for decl in decls {
            let name = decl.name();
            let kind = self.declared_kind(entry, decl);
            let is_default_export = loaded.default_export.as_deref() == Some(name.as_str());
            self.unit.declare(DeclaredType {
                name,
                kind,
                is_default_export,
            });
        }

        self.drain_pending();
    }

    /// Convert the object shapes referenced so far, and the ones they
    /// reference in turn
    fn drain_pending(&mut self) {
        let graph = self.graph;
        while let Some((module, name)) = self.pending.pop() {
            let properties = match graph.modules[module].find(&name) {
                Some(TypeDecl::Interface(iface)) => {
                    self.interface_properties(module, iface, &mut vec![name.clone()])
                }
                Some(TypeDecl::Alias(alias)) => match alias.type_ann.as_ref() {
                    swc_ast::TsType::TsTypeLit(lit) => self.type_elements(module, &lit.members),
                    _ => continue,
                },
                _ => continue,
            };
            self.unit.add_object(name, properties);
        }
    }

    fn queue_object(&mut self, module: usize, name: &str) {
        if self.queued.insert(name.to_string()) {
            self.pending.push((module, name.to_string()));
        }
    }

    fn declared_kind(&mut self, module: usize, decl: TypeDecl<'g>) -> DeclaredKind {
        match decl {
            TypeDecl::Interface(iface) => {
                let mut stack = vec![decl.name()];
                DeclaredKind::Interface(self.interface_properties(module, iface, &mut stack))
            }
            TypeDecl::Enum(ts_enum) => DeclaredKind::Enum(self.enum_members(module, ts_enum)),
            TypeDecl::Alias(alias) => match alias.type_ann.as_ref() {
                swc_ast::TsType::TsTypeLit(lit) => {
                    DeclaredKind::ObjectAlias(self.type_elements(module, &lit.members))
                }
                other => match self.convert_type(module, other) {
                    TypeDescriptor::StringLiteralUnion { variants, .. } => {
                        DeclaredKind::StringLiteralUnion(variants)
                    }
                    descriptor => DeclaredKind::Alias(descriptor),
                },
            },
        }
    }

    /// Properties of an interface, inherited ones first
    fn interface_properties(
        &mut self,
        module: usize,
        iface: &'g swc_ast::TsInterfaceDecl,
        stack: &mut Vec<String>,
    ) -> Vec<RawProperty> {
        let graph = self.graph;
        let mut properties = Vec::new();

        for parent in &iface.extends {
            let swc_ast::Expr::Ident(ident) = parent.expr.as_ref() else {
                continue;
            };
            if let Some((parent_module, TypeDecl::Interface(parent_iface))) =
                graph.resolve(module, &ident.sym)
            {
                let parent_name = parent_iface.id.sym.to_string();
                if stack.contains(&parent_name) {
                    continue;
                }
                stack.push(parent_name);
                properties.extend(self.interface_properties(parent_module, parent_iface, stack));
                stack.pop();
            }
        }

        properties.extend(self.type_elements(module, &iface.body.body));
        properties
    }

    /// Property signatures of an interface body or object literal type
    fn type_elements(
        &mut self,
        module: usize,
        members: &'g [swc_ast::TsTypeElement],
    ) -> Vec<RawProperty> {
        let graph = self.graph;
        let parsed = &graph.modules[module].parsed;
        let mut properties = Vec::new();

        for member in members {
            let swc_ast::TsTypeElement::TsPropertySignature(prop) = member else {
                continue;
            };
            let Some(name) = property_key_name(&prop.key) else {
                continue;
            };

            let ty = match &prop.type_ann {
                Some(ann) => self.convert_type(module, &ann.type_ann),
                None => TypeDescriptor::primitive("any"),
            };

            properties.push(RawProperty {
                name,
                ty,
                optional: prop.optional,
                doc: parsed
                    .jsdoc_for_span(prop.span)
                    .map(|c| doc_lines(&c))
                    .unwrap_or_default(),
            });
        }

        properties
    }

    /// Enum members with TypeScript's auto-increment applied
    fn enum_members(&self, module: usize, ts_enum: &swc_ast::TsEnumDecl) -> Vec<RawEnumMember> {
        let parsed = &self.graph.modules[module].parsed;
        let mut next = 0.0_f64;

        ts_enum
            .members
            .iter()
            .map(|m| {
                let name = match &m.id {
                    swc_ast::TsEnumMemberId::Ident(i) => i.sym.to_string(),
                    swc_ast::TsEnumMemberId::Str(s) => wtf8_to_string(s),
                };

                let value = match m.init.as_deref() {
                    None => {
                        let value = number_value(next);
                        next += 1.0;
                        value
                    }
                    Some(init) => match numeric_literal(init) {
                        Some(n) => {
                            next = n + 1.0;
                            number_value(n)
                        }
                        None => match init {
                            swc_ast::Expr::Lit(swc_ast::Lit::Str(s)) => {
                                Value::String(wtf8_to_string(s))
                            }
                            other => Value::String(parsed.text_for_span(other.span()).to_string()),
                        },
                    },
                };

                RawEnumMember {
                    name,
                    value,
                    doc: parsed
                        .jsdoc_for_span(m.span)
                        .map(|c| doc_lines(&c))
                        .unwrap_or_default(),
                }
            })
            .collect()
    }

    /// Classify a type expression
    fn convert_type(&mut self, module: usize, ty: &'g swc_ast::TsType) -> TypeDescriptor {
        match ty {
            swc_ast::TsType::TsKeywordType(kw) => TypeDescriptor::primitive(keyword_name(kw.kind)),
            swc_ast::TsType::TsArrayType(arr) => {
                TypeDescriptor::array_of(self.convert_type(module, &arr.elem_type))
            }
            swc_ast::TsType::TsTypeLit(lit) => {
                TypeDescriptor::AnonymousObject(self.type_elements(module, &lit.members))
            }
            swc_ast::TsType::TsParenthesizedType(paren) => {
                self.convert_type(module, &paren.type_ann)
            }
            swc_ast::TsType::TsLitType(lit) => match &lit.lit {
                swc_ast::TsLit::Str(_) => TypeDescriptor::StringLiteralUnion {
                    alias: None,
                    variants: vec![self.text(module, lit.span)],
                },
                _ => TypeDescriptor::primitive(self.text(module, lit.span)),
            },
            swc_ast::TsType::TsUnionOrIntersectionType(
                swc_ast::TsUnionOrIntersectionType::TsUnionType(union),
            ) => self.convert_union(module, union),
            swc_ast::TsType::TsTypeRef(type_ref) => self.convert_type_ref(module, type_ref),
            other => TypeDescriptor::primitive(self.text(module, other.span())),
        }
    }

    fn convert_union(&mut self, module: usize, union: &'g swc_ast::TsUnionType) -> TypeDescriptor {
        let members: Vec<&swc_ast::TsType> = union
            .types
            .iter()
            .map(|t| &**t)
            .filter(|t| !is_nullish(t))
            .collect();

        let all_strings = !members.is_empty()
            && members.iter().all(|t| {
                matches!(
                    t,
                    swc_ast::TsType::TsLitType(swc_ast::TsLitType {
                        lit: swc_ast::TsLit::Str(_),
                        ..
                    })
                )
            });

        if all_strings {
            return TypeDescriptor::StringLiteralUnion {
                alias: None,
                variants: members
                    .iter()
                    .map(|t| self.text(module, t.span()))
                    .collect(),
            };
        }

        match members.as_slice() {
            [single] => self.convert_type(module, *single),
            _ => TypeDescriptor::primitive(self.text(module, union.span)),
        }
    }

    fn convert_type_ref(
        &mut self,
        module: usize,
        type_ref: &'g swc_ast::TsTypeRef,
    ) -> TypeDescriptor {
        let graph = self.graph;
        let name = match &type_ref.type_name {
            swc_ast::TsEntityName::Ident(i) => i.sym.to_string(),
            swc_ast::TsEntityName::TsQualifiedName(q) => format_qualified_name(q),
        };

        if name == "Array" || name == "ReadonlyArray" {
            let element = type_ref
                .type_params
                .as_ref()
                .and_then(|params| params.params.first())
                .map(|param| self.convert_type(module, param))
                .unwrap_or_else(|| TypeDescriptor::primitive("any"));
            return TypeDescriptor::array_of(element);
        }

        match graph.resolve(module, &name) {
            Some((target, TypeDecl::Interface(iface))) => {
                let name = iface.id.sym.to_string();
                self.queue_object(target, &name);
                TypeDescriptor::ObjectRef(name)
            }
            Some((target, TypeDecl::Enum(ts_enum))) => TypeDescriptor::EnumRef {
                name: ts_enum.id.sym.to_string(),
                members: self.enum_members(target, ts_enum),
            },
            Some((target, TypeDecl::Alias(alias))) => self.convert_alias(target, alias),
            None if type_ref.type_params.is_some() => {
                TypeDescriptor::Primitive(self.text(module, type_ref.span))
            }
            None => TypeDescriptor::Primitive(name),
        }
    }

    fn convert_alias(
        &mut self,
        module: usize,
        alias: &'g swc_ast::TsTypeAliasDecl,
    ) -> TypeDescriptor {
        let alias_name = alias.id.sym.to_string();

        if let swc_ast::TsType::TsTypeLit(_) = alias.type_ann.as_ref() {
            self.queue_object(module, &alias_name);
            return TypeDescriptor::ObjectRef(alias_name);
        }

        if self.alias_depth >= MAX_ALIAS_DEPTH {
            return TypeDescriptor::Primitive(alias_name);
        }
        self.alias_depth += 1;
        let inner = self.convert_type(module, &alias.type_ann);
        self.alias_depth -= 1;

        match inner {
            TypeDescriptor::StringLiteralUnion { variants, .. } => {
                TypeDescriptor::StringLiteralUnion {
                    alias: Some(alias_name),
                    variants,
                }
            }
            other => other,
        }
    }

    fn text(&self, module: usize, span: Span) -> String {
        self.graph.modules[module]
            .parsed
            .text_for_span(span)
            .to_string()
    }
}

fn is_object_alias(decl: &TypeDecl<'_>) -> bool {
    matches!(
        decl,
        TypeDecl::Alias(alias) if matches!(alias.type_ann.as_ref(), swc_ast::TsType::TsTypeLit(_))
    )
}

fn is_nullish(ty: &swc_ast::TsType) -> bool {
    matches!(
        ty,
        swc_ast::TsType::TsKeywordType(kw)
            if matches!(
                kw.kind,
                swc_ast::TsKeywordTypeKind::TsNullKeyword
                    | swc_ast::TsKeywordTypeKind::TsUndefinedKeyword
            )
    )
}

fn keyword_name(kind: swc_ast::TsKeywordTypeKind) -> &'static str {
    match kind {
        swc_ast::TsKeywordTypeKind::TsStringKeyword => "string",
        swc_ast::TsKeywordTypeKind::TsNumberKeyword => "number",
        swc_ast::TsKeywordTypeKind::TsBooleanKeyword => "boolean",
        swc_ast::TsKeywordTypeKind::TsVoidKeyword => "void",
        swc_ast::TsKeywordTypeKind::TsNullKeyword => "null",
        swc_ast::TsKeywordTypeKind::TsUndefinedKeyword => "undefined",
        swc_ast::TsKeywordTypeKind::TsNeverKeyword => "never",
        swc_ast::TsKeywordTypeKind::TsUnknownKeyword => "unknown",
        swc_ast::TsKeywordTypeKind::TsAnyKeyword => "any",
        swc_ast::TsKeywordTypeKind::TsObjectKeyword => "object",
        swc_ast::TsKeywordTypeKind::TsSymbolKeyword => "symbol",
        swc_ast::TsKeywordTypeKind::TsBigIntKeyword => "bigint",
        swc_ast::TsKeywordTypeKind::TsIntrinsicKeyword => "intrinsic",
    }
}

/// Format a qualified name (e.g., Namespace.Type)
fn format_qualified_name(name: &swc_ast::TsQualifiedName) -> String {
    let left = match &name.left {
        swc_ast::TsEntityName::Ident(i) => i.sym.to_string(),
        swc_ast::TsEntityName::TsQualifiedName(q) => format_qualified_name(q),
    };
    format!("{}.{}", left, name.right.sym)
}

/// Value of `1`, `-1` or `(1)` initialisers
fn numeric_literal(expr: &swc_ast::Expr) -> Option<f64> {
    match expr {
        swc_ast::Expr::Lit(swc_ast::Lit::Num(n)) => Some(n.value),
        swc_ast::Expr::Unary(unary) if unary.op == swc_ast::UnaryOp::Minus => {
            numeric_literal(&unary.arg).map(|n| -n)
        }
        swc_ast::Expr::Paren(paren) => numeric_literal(&paren.expr),
        _ => None,
    }
}

/// Integral values serialize without a fraction (`0`, not `0.0`)
fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}
