// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Reference resolution: direct `IDREF` and `FOREIGNKEY` row joins.

use vomap_core::{
    keys_equal, Diagnostic, FieldDescriptor, FieldValue, Identity, InstanceHandle, Value,
};

use crate::document::ElementId;
use crate::engine::Materializer;
use crate::vocab::{FOREIGNKEY, IDREF, INSTANCE, REFERENCE, TARGETID};

impl Materializer<'_> {
    /// Resolves a `Reference` field. `IDREF` children take precedence; the
    /// `FOREIGNKEY` children are only read when there are none.
    pub fn resolve_reference(
        &mut self,
        element: ElementId,
        descriptor: &FieldDescriptor,
    ) -> FieldValue {
        let Some(holder) = self.find_role(element, REFERENCE, &descriptor.role) else {
            return descriptor.multiplicity.collapse(Vec::new());
        };
        tracing::trace!(field = %descriptor.name, "resolving reference");
        let doc = self.doc;
        let idrefs: Vec<ElementId> = doc.children_named(holder, IDREF).collect();
        let values: Vec<FieldValue> = if idrefs.is_empty() {
            doc.children_named(holder, FOREIGNKEY)
                .map(|fk| self.resolve_foreign_key(fk))
                .collect()
        } else {
            idrefs.into_iter().map(|r| self.resolve_idref(r)).collect()
        };
        descriptor.multiplicity.collapse(values)
    }

    /// Resolves one `IDREF`: a cached identity, else the element carrying
    /// that `ID`, else `Null` with a `DanglingReference` warning.
    pub fn resolve_idref(&mut self, idref: ElementId) -> FieldValue {
        let doc = self.doc;
        let id = doc.text(idref);
        if let Some(hit) = self.ctx.cache.get(&Identity::new(id)) {
            return FieldValue::Instance(hit);
        }
        let Some(target) = doc.element_by_id(id).filter(|t| doc.is(*t, INSTANCE)) else {
            self.warn(Diagnostic::DanglingReference { id: id.to_owned() });
            return FieldValue::Null;
        };
        self.build_nested(target)
            .map_or(FieldValue::Null, FieldValue::Instance)
    }

    /// Resolves one `FOREIGNKEY` by matching its key rows against the
    /// primary keys of the target collection's instances.
    ///
    /// A scalar key resolves to one instance (or `Null`); a column-backed key
    /// resolves to one entry per row. Unmatched rows are `None`.
    pub fn resolve_foreign_key(&mut self, fk: ElementId) -> FieldValue {
        let doc = self.doc;
        let referencing = self.key_matrix(fk);
        let target_id = doc.first_child(fk, TARGETID).map_or("", |t| doc.text(t));
        let Some(target) = doc.element_by_id(target_id) else {
            self.warn(Diagnostic::DanglingReference {
                id: target_id.to_owned(),
            });
            return FieldValue::Null;
        };

        let index = self.candidate_index(target);
        let lookup = |key: &[Value]| {
            index
                .iter()
                .rev()
                .find(|(k, _)| keys_equal(k, key))
                .map(|(_, h)| *h)
        };

        if referencing.is_column_backed() {
            FieldValue::Rows(referencing.rows().iter().map(|k| lookup(k.as_slice())).collect())
        } else {
            referencing
                .row(0)
                .and_then(lookup)
                .map_or(FieldValue::Null, FieldValue::Instance)
        }
    }

    /// Candidate instances of a foreign-key target with their key rows.
    ///
    /// The target is either one `INSTANCE` or a collection whose `INSTANCE`
    /// children are the candidates. Column-backed candidates are unrolled and
    /// indexed row by row. Candidates without a primary key are skipped.
    fn candidate_index(&mut self, target: ElementId) -> Vec<(Vec<Value>, InstanceHandle)> {
        let doc = self.doc;
        let elements: Vec<ElementId> = if doc.is(target, INSTANCE) {
            vec![target]
        } else {
            doc.children_named(target, INSTANCE).collect()
        };

        let mut index = Vec::new();
        for element in elements {
            let Some(candidate) = self.build_nested(element) else {
                continue;
            };
            let handles = if self.ctx.arena.cardinality(candidate) > 0 {
                self.ctx.arena.unroll(candidate)
            } else {
                vec![candidate]
            };
            for h in handles {
                let key = self
                    .ctx
                    .arena
                    .get(h)
                    .and_then(|inst| inst.identity().keys.as_ref())
                    .and_then(|keys| keys.row(0))
                    .map(<[Value]>::to_vec);
                if let Some(key) = key {
                    index.push((key, h));
                }
            }
        }
        index
    }
}
