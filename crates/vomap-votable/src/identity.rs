// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Identity resolution: explicit `ID` or a synthesized one, plus the
//! primary-key matrix.

use vomap_core::{Identity, KeyComponent, KeyMatrix, Value};

use crate::document::ElementId;
use crate::engine::Materializer;
use crate::vocab::{COLUMN, CONSTANT, ID_ATTR, LITERAL, PKFIELD, PRIMARYKEY};

impl Materializer<'_> {
    /// Structural identity of an `INSTANCE` element.
    ///
    /// Elements without an `ID` get `"<type_id>-<uuid>"`, so two anonymous
    /// elements never share a cache entry.
    pub fn identity(&mut self, element: ElementId, type_id: &str) -> Identity {
        let keys = self
            .doc
            .first_child(element, PRIMARYKEY)
            .map(|pk| self.key_matrix(pk));
        let id = self.doc.attr(element, ID_ATTR).map_or_else(
            || format!("{type_id}-{}", uuid::Uuid::new_v4()),
            str::to_owned,
        );
        Identity { id, keys }
    }

    /// Evaluates the `PKFIELD` children of a `PRIMARYKEY` or `FOREIGNKEY`
    /// and transposes them into rows.
    pub fn key_matrix(&mut self, element: ElementId) -> KeyMatrix {
        let pkfields: Vec<ElementId> = self.doc.children_named(element, PKFIELD).collect();
        let components: Vec<KeyComponent> = pkfields
            .into_iter()
            .map(|pk| self.key_component(pk))
            .collect();
        KeyMatrix::from_components(&components)
    }

    fn key_component(&mut self, pkfield: ElementId) -> KeyComponent {
        if let Some(literal) = self.doc.first_child(pkfield, LITERAL) {
            return KeyComponent::Scalar(self.literal_value(literal));
        }
        if let Some(constant) = self.doc.first_child(pkfield, CONSTANT) {
            return KeyComponent::Scalar(self.constant_value(constant));
        }
        if let Some(column) = self.doc.first_child(pkfield, COLUMN) {
            return match self.column_data(column) {
                Some(col) => KeyComponent::Column(col.cells().to_vec()),
                None => KeyComponent::Scalar(Value::Missing),
            };
        }
        KeyComponent::Scalar(Value::Missing)
    }
}
