// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Instance materialization engine.
//!
//! [`Materializer::build`] turns one `INSTANCE` element into an arena
//! instance: identity first, then the identity cache, then the depth guard,
//! then allocation (the instance is cached before its fields are resolved so
//! self-referencing documents terminate), then every declared field, then the
//! class adapter.
//!
//! Field resolution lives in `fields`, identities and leaf values in
//! `identity` and `values`, references in `references`.

use vomap_core::{
    Diagnostic, Field, FieldKind, InstanceHandle, SchemaError, TypeRef, TypeRegistry,
};

use crate::context::ParseContext;
use crate::document::{Document, ElementId};
use crate::vocab::{INSTANCE, TEMPLATES, TYPE_ATTR};

/// Borrowed view over one document, one registry and one parse context.
pub struct Materializer<'d> {
    pub(crate) doc: &'d Document,
    pub(crate) registry: &'d TypeRegistry,
    pub(crate) ctx: &'d mut ParseContext,
}

impl<'d> Materializer<'d> {
    /// Creates a materializer.
    pub fn new(doc: &'d Document, registry: &'d TypeRegistry, ctx: &'d mut ParseContext) -> Self {
        Self { doc, registry, ctx }
    }

    /// Declared type tag of `element`.
    pub fn resolve_type(&self, element: ElementId) -> Result<&'d str, SchemaError> {
        let doc = self.doc;
        doc.attr(element, TYPE_ATTR)
            .ok_or_else(|| SchemaError::MissingTypeTag {
                tag: doc.tag(element).to_owned(),
            })
    }

    /// Every `INSTANCE` element, in document order, whose type tag is
    /// `type_id` or one of its subtypes.
    pub fn find_all(&self, type_id: &str) -> Result<Vec<ElementId>, SchemaError> {
        matching_elements(self.doc, self.registry, type_id)
    }

    /// Builds (or reuses) the instance for `element`.
    pub fn build(&mut self, element: ElementId) -> Result<InstanceHandle, SchemaError> {
        let registry = self.registry;
        let type_id = self.resolve_type(element)?;
        let (class, fields) = match registry.get_type_by_id(type_id) {
            Some(TypeRef::Class { class, fields }) => (class, fields),
            Some(TypeRef::Primitive(_)) => return Err(SchemaError::NotAClass(type_id.to_owned())),
            None => return Err(SchemaError::UnknownType(type_id.to_owned())),
        };

        let identity = self.identity(element, type_id);
        if let Some(hit) = self.ctx.cache.get(&identity) {
            tracing::trace!(%identity, "identity cache hit");
            return Ok(hit);
        }
        // Only new instances count against the depth limit.
        if self.ctx.depth >= self.ctx.options.max_depth {
            return Err(SchemaError::DepthExceeded {
                type_id: type_id.to_owned(),
                limit: self.ctx.options.max_depth,
            });
        }

        let in_templates = self.doc.has_ancestor(element, TEMPLATES);
        let handle = self
            .ctx
            .arena
            .allocate(type_id, identity.clone(), in_templates);
        self.ctx.cache.put(identity, handle);
        tracing::debug!(type_id, handle = handle.index(), "building instance");

        self.ctx.depth += 1;
        for descriptor in fields {
            let value = match descriptor.kind {
                FieldKind::Attribute => self.resolve_attribute(element, descriptor),
                FieldKind::Composition => self.resolve_composition(element, descriptor),
                FieldKind::Reference => self.resolve_reference(element, descriptor),
            };
            if self.ctx.options.enforce_min_occurs
                && descriptor.multiplicity.min >= 1
                && value.is_empty()
            {
                self.warn(Diagnostic::MissingRequiredField {
                    type_id: type_id.to_owned(),
                    field: descriptor.name.clone(),
                });
            }
            self.ctx.arena.set_field(
                handle,
                &descriptor.name,
                Field {
                    kind: descriptor.kind,
                    multiplicity: descriptor.multiplicity,
                    value,
                },
            );
        }
        self.ctx.depth -= 1;

        if let Some(adapter) = class.adapter {
            if let Some(representation) = adapter(&self.ctx.arena, handle) {
                self.ctx.arena.set_representation(handle, representation);
            }
        }
        Ok(handle)
    }

    /// Builds a nested element; a [`SchemaError`] drops it with a warning.
    pub(crate) fn build_nested(&mut self, element: ElementId) -> Option<InstanceHandle> {
        match self.build(element) {
            Ok(h) => Some(h),
            Err(error) => {
                self.warn(Diagnostic::SkippedElement { error });
                None
            }
        }
    }

    pub(crate) fn warn(&mut self, diagnostic: Diagnostic) {
        self.ctx.diagnostics.push(diagnostic);
    }
}

/// `INSTANCE` elements of `doc` whose type tag is in the subtype closure of
/// `type_id`.
pub(crate) fn matching_elements(
    doc: &Document,
    registry: &TypeRegistry,
    type_id: &str,
) -> Result<Vec<ElementId>, SchemaError> {
    let Some(closure) = registry.all_subtypes(type_id) else {
        return Err(SchemaError::UnknownType(type_id.to_owned()));
    };
    Ok(doc
        .elements_named(INSTANCE)
        .filter(|e| doc.attr(*e, TYPE_ATTR).is_some_and(|t| closure.contains(t)))
        .collect())
}
