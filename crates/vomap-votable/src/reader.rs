// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Caller-facing entry point: one document, one registry, one parse context.

use std::any::Any;
use std::path::Path;

use thiserror::Error;
use vomap_core::{
    Diagnostic, Diagnostics, FieldValue, Instance, InstanceArena, InstanceHandle, ReaderOptions,
    SchemaError, TableProvider, TypeRegistry,
};

use crate::context::ParseContext;
use crate::document::{Document, DocumentError, ElementId};
use crate::engine::{matching_elements, Materializer};

/// Errors surfaced by [`Reader`].
#[derive(Debug, Error)]
pub enum ReadError {
    /// The document could not be loaded.
    #[error(transparent)]
    Document(#[from] DocumentError),
    /// A requested type or element could not be materialized.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Materializes typed instances from an annotated document.
///
/// Instances are built lazily and cached by identity, so asking for the same
/// type twice (or reaching an instance through a reference) returns the same
/// handles.
#[derive(Debug)]
pub struct Reader<'r> {
    document: Document,
    registry: &'r TypeRegistry,
    ctx: ParseContext,
}

impl<'r> Reader<'r> {
    /// Reader over a parsed document with default options.
    pub fn new(document: Document, registry: &'r TypeRegistry) -> Self {
        Self::with_options(document, registry, ReaderOptions::default())
    }

    /// Reader with explicit options.
    pub fn with_options(
        document: Document,
        registry: &'r TypeRegistry,
        options: ReaderOptions,
    ) -> Self {
        Self {
            document,
            registry,
            ctx: ParseContext::new(options),
        }
    }

    /// Reader over a caller-supplied table provider.
    pub fn with_tables(
        document: Document,
        registry: &'r TypeRegistry,
        options: ReaderOptions,
        tables: Box<dyn TableProvider>,
    ) -> Self {
        Self {
            document,
            registry,
            ctx: ParseContext::with_tables(options, tables),
        }
    }

    /// Parses `xml` and wraps it with default options.
    pub fn from_xml(xml: &str, registry: &'r TypeRegistry) -> Result<Self, ReadError> {
        Ok(Self::new(Document::parse(xml)?, registry))
    }

    /// Reads and parses the file at `path` with default options.
    pub fn open(path: impl AsRef<Path>, registry: &'r TypeRegistry) -> Result<Self, ReadError> {
        Ok(Self::new(Document::open(path)?, registry))
    }

    fn materializer(&mut self) -> Materializer<'_> {
        Materializer::new(&self.document, self.registry, &mut self.ctx)
    }

    /// Every instance of `type_id` or one of its subtypes, in document order.
    ///
    /// Elements that fail with a [`SchemaError`] are skipped and reported as
    /// diagnostics; only an unregistered `type_id` is an error.
    pub fn find_instances(&mut self, type_id: &str) -> Result<Vec<InstanceHandle>, ReadError> {
        let elements = self.find_elements(type_id)?;
        let mut m = self.materializer();
        let mut out = Vec::with_capacity(elements.len());
        for element in elements {
            match m.build(element) {
                Ok(h) => out.push(h),
                Err(error) => m.warn(Diagnostic::SkippedElement { error }),
            }
        }
        tracing::debug!(type_id, found = out.len(), "find_instances");
        Ok(out)
    }

    /// `INSTANCE` elements matching `type_id` or one of its subtypes.
    pub fn find_elements(&self, type_id: &str) -> Result<Vec<ElementId>, ReadError> {
        Ok(matching_elements(&self.document, self.registry, type_id)?)
    }

    /// Builds (or reuses) the instance for one element.
    pub fn build(&mut self, element: ElementId) -> Result<InstanceHandle, ReadError> {
        Ok(self.materializer().build(element)?)
    }

    /// Instance behind `handle`.
    pub fn instance(&self, handle: InstanceHandle) -> Option<&Instance> {
        self.ctx.arena.get(handle)
    }

    /// Every instance built so far, unrolled rows included.
    pub fn instances(&self) -> &InstanceArena {
        &self.ctx.arena
    }

    /// Value of one field of an instance.
    pub fn field(&self, handle: InstanceHandle, name: &str) -> Option<&FieldValue> {
        self.ctx.arena.field(handle, name)
    }

    /// Returns `true` when the instance is column-backed or was declared
    /// under `TEMPLATES`.
    pub fn is_template(&self, handle: InstanceHandle) -> bool {
        self.ctx.arena.is_template(handle)
    }

    /// Number of rows the instance stands for; 0 for scalar instances.
    pub fn cardinality(&self, handle: InstanceHandle) -> usize {
        self.ctx.arena.cardinality(handle)
    }

    /// One scalar instance per row; empty for scalar instances.
    pub fn unroll(&mut self, handle: InstanceHandle) -> Vec<InstanceHandle> {
        self.ctx.arena.unroll(handle)
    }

    /// Adapter output of the instance, if its class has an adapter that
    /// produced a `T`.
    pub fn representation<T: Any + Send + Sync>(&self, handle: InstanceHandle) -> Option<&T> {
        self.ctx
            .arena
            .representation(handle)
            .and_then(|r| (**r).downcast_ref::<T>())
    }

    /// Warnings collected so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.ctx.diagnostics
    }

    /// Registry the reader resolves types against.
    pub fn registry(&self) -> &TypeRegistry {
        self.registry
    }

    /// Underlying document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Options in effect.
    pub fn options(&self) -> &ReaderOptions {
        &self.ctx.options
    }

    /// Parse context (arena, cache, tables, diagnostics).
    pub fn context(&self) -> &ParseContext {
        &self.ctx
    }
}
