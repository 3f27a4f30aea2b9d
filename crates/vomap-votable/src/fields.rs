// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Attribute and composition resolution.
//!
//! A field is located by role anywhere below its owning element. Its
//! candidate values are collected from the role holder's children in a fixed
//! order and then collapsed by the field's multiplicity.

use vomap_core::{group_by_keys, Diagnostic, FieldDescriptor, FieldValue};

use crate::document::ElementId;
use crate::engine::Materializer;
use crate::vocab::{
    ATTRIBUTE, COLUMN, COMPOSITION, CONSTANT, CONTAINER, EXTINSTANCES, FOREIGNKEY, INSTANCE,
    LITERAL, PRIMARYKEY, ROLE_ATTR, TARGETID,
};

impl Materializer<'_> {
    /// First descendant of `element` named `tag` whose `dmrole` is `role`.
    ///
    /// Later matches are ignored; when there are any, an `AmbiguousRole`
    /// warning is raised (unless disabled in the reader options).
    pub fn find_role(&mut self, element: ElementId, tag: &str, role: &str) -> Option<ElementId> {
        let doc = self.doc;
        let mut matches = doc
            .descendants(element)
            .filter(|d| doc.is(*d, tag) && doc.attr(*d, ROLE_ATTR) == Some(role));
        let first = matches.next()?;
        let extra = matches.count();
        if extra > 0 && self.ctx.options.warn_on_ambiguous_role {
            self.warn(Diagnostic::AmbiguousRole {
                role: role.to_owned(),
                tag: tag.to_owned(),
                matches: extra + 1,
            });
        }
        Some(first)
    }

    /// Resolves an `Attribute` field: nested instances, then literals, then
    /// constants, then columns.
    pub fn resolve_attribute(
        &mut self,
        element: ElementId,
        descriptor: &FieldDescriptor,
    ) -> FieldValue {
        let Some(holder) = self.find_role(element, ATTRIBUTE, &descriptor.role) else {
            return descriptor.multiplicity.collapse(Vec::new());
        };
        tracing::trace!(field = %descriptor.name, "resolving attribute");
        let doc = self.doc;
        let mut values = Vec::new();
        for child in doc.children_named(holder, INSTANCE) {
            if let Some(h) = self.build_nested(child) {
                values.push(FieldValue::Instance(h));
            }
        }
        for literal in doc.children_named(holder, LITERAL) {
            values.push(FieldValue::Value(self.literal_value(literal)));
        }
        for constant in doc.children_named(holder, CONSTANT) {
            values.push(FieldValue::Value(self.constant_value(constant)));
        }
        for column in doc.children_named(holder, COLUMN) {
            values.push(self.column_value(column));
        }
        descriptor.multiplicity.collapse(values)
    }

    /// Resolves a `Composition` field: nested instances, then external
    /// instance batches.
    pub fn resolve_composition(
        &mut self,
        element: ElementId,
        descriptor: &FieldDescriptor,
    ) -> FieldValue {
        let Some(holder) = self.find_role(element, COMPOSITION, &descriptor.role) else {
            return descriptor.multiplicity.collapse(Vec::new());
        };
        tracing::trace!(field = %descriptor.name, "resolving composition");
        let doc = self.doc;
        let mut values = Vec::new();
        for child in doc.children_named(holder, INSTANCE) {
            if let Some(h) = self.build_nested(child) {
                values.push(FieldValue::Instance(h));
            }
        }
        for batch in doc.children_named(holder, EXTINSTANCES) {
            values.extend(self.external_instances(batch));
        }
        descriptor.multiplicity.collapse(values)
    }

    /// Values contributed by one `EXTINSTANCES` element.
    ///
    /// The named template is built and unrolled; a scalar template yields
    /// no values. Without a `CONTAINER/FOREIGNKEY` every row instance is
    /// contributed. With one, rows are grouped under the target collection's
    /// primary keys and each match position becomes a `Rows` slice aligned
    /// with the target rows.
    fn external_instances(&mut self, batch: ElementId) -> Vec<FieldValue> {
        let doc = self.doc;
        let id = doc.text(batch);
        let Some(template_el) = doc.element_by_id(id).filter(|t| doc.is(*t, INSTANCE)) else {
            self.warn(Diagnostic::DanglingReference { id: id.to_owned() });
            return Vec::new();
        };
        let Some(template) = self.build_nested(template_el) else {
            return Vec::new();
        };
        // A scalar template unrolls to nothing and contributes nothing.
        let rows = self.ctx.arena.unroll(template);
        if rows.is_empty() {
            tracing::debug!(template = id, "external template has no rows");
            return Vec::new();
        }

        let back_link = doc
            .first_child(template_el, CONTAINER)
            .and_then(|c| doc.first_child(c, FOREIGNKEY));
        let Some(fk) = back_link else {
            return rows.into_iter().map(FieldValue::Instance).collect();
        };

        let member_keys = self.key_matrix(fk);
        let target_id = doc.first_child(fk, TARGETID).map_or("", |t| doc.text(t));
        let Some(target) = doc.element_by_id(target_id) else {
            self.warn(Diagnostic::DanglingReference {
                id: target_id.to_owned(),
            });
            return Vec::new();
        };
        let target_keys = match doc.first_child(target, PRIMARYKEY) {
            Some(pk) => self.key_matrix(pk),
            None => return Vec::new(),
        };
        tracing::debug!(
            template = id,
            target = target_id,
            members = rows.len(),
            targets = target_keys.len(),
            "grouping external instances"
        );
        group_by_keys(member_keys.rows(), &rows, target_keys.rows())
            .into_iter()
            .map(FieldValue::Rows)
            .collect()
    }
}
