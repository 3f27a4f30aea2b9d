// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Leaf values: LITERAL, CONSTANT (via PARAM) and COLUMN (via FIELD/TABLE).
//!
//! None of these fail. A value that cannot be found or decoded becomes the
//! missing sentinel of its declared type and raises a `MalformedValue`
//! warning.

use std::sync::Arc;

use vomap_core::{Column, Diagnostic, FieldValue, PrimitiveKind, Value};

use crate::document::ElementId;
use crate::engine::Materializer;
use crate::table::{read_table, table_id};
use crate::vocab::{FIELD, NAME_ATTR, PARAM, REF_ATTR, TABLE, TYPE_ATTR, UNIT_ATTR, VALUE_ATTR};

impl Materializer<'_> {
    fn declared_kind(&self, element: ElementId) -> Option<PrimitiveKind> {
        self.doc
            .attr(element, TYPE_ATTR)
            .and_then(|t| self.registry.primitive(t))
    }

    fn sentinel(&self, element: ElementId) -> Value {
        self.declared_kind(element)
            .map_or(Value::Missing, PrimitiveKind::missing)
    }

    fn malformed(&mut self, reference: &str, detail: String, fallback: Value) -> Value {
        self.warn(Diagnostic::MalformedValue {
            reference: reference.to_owned(),
            detail,
        });
        fallback
    }

    fn decode(&mut self, element: ElementId, text: &str, unit: Option<&str>) -> Value {
        let doc = self.doc;
        let type_id = doc.attr(element, TYPE_ATTR).unwrap_or("");
        let Some(kind) = self.registry.primitive(type_id) else {
            return self.malformed(
                text,
                format!("{type_id:?} is not a primitive type"),
                Value::Missing,
            );
        };
        match kind.decode(text, unit) {
            Ok(v) => v,
            Err(e) => self.malformed(text, e.to_string(), kind.missing()),
        }
    }

    /// Decodes a LITERAL through its `dmtype`.
    pub fn literal_value(&mut self, literal: ElementId) -> Value {
        let doc = self.doc;
        let Some(text) = doc.attr(literal, VALUE_ATTR) else {
            let fallback = self.sentinel(literal);
            return self.malformed("LITERAL", "no value attribute".to_owned(), fallback);
        };
        let unit = doc.attr(literal, UNIT_ATTR);
        self.decode(literal, text, unit)
    }

    /// Decodes the PARAM a CONSTANT points at, through the CONSTANT's `dmtype`.
    pub fn constant_value(&mut self, constant: ElementId) -> Value {
        let doc = self.doc;
        let reference = doc.attr(constant, REF_ATTR).unwrap_or("");
        let param = doc.element_by_id(reference).filter(|p| doc.is(*p, PARAM));
        let Some(param) = param else {
            let fallback = self.sentinel(constant);
            return self.malformed(
                reference,
                format!("no PARAM with ID {reference:?}"),
                fallback,
            );
        };
        let Some(text) = doc.attr(param, VALUE_ATTR) else {
            let fallback = self.sentinel(constant);
            return self.malformed(reference, "PARAM has no value".to_owned(), fallback);
        };
        let unit = doc.attr(param, UNIT_ATTR);
        self.decode(constant, text, unit)
    }

    /// Column a COLUMN points at, reading and storing its table on first use.
    ///
    /// When the provider's table only knows the column by its FIELD name, the
    /// reference is remapped to that name for later lookups.
    pub fn column_data(&mut self, column: ElementId) -> Option<Arc<Column>> {
        let doc = self.doc;
        let reference = doc.attr(column, REF_ATTR).unwrap_or("");
        let Some(field) = doc.element_by_id(reference).filter(|f| doc.is(*f, FIELD)) else {
            self.warn(Diagnostic::MalformedValue {
                reference: reference.to_owned(),
                detail: format!("no FIELD with ID {reference:?}"),
            });
            return None;
        };
        let Some(table_el) = doc.parent(field).filter(|t| doc.is(*t, TABLE)) else {
            self.warn(Diagnostic::MalformedValue {
                reference: reference.to_owned(),
                detail: "FIELD is not inside a TABLE".to_owned(),
            });
            return None;
        };

        let id = table_id(doc, table_el);
        let table = match self.ctx.tables.get_table_by_id(&id) {
            Some(t) => t,
            None => {
                let (table, warning) = read_table(doc, table_el);
                if let Some(w) = warning {
                    self.warn(w);
                }
                self.ctx.tables.add_table(&id, table)
            }
        };

        let mapped = self.ctx.tables.get_column_mapping(reference);
        if let Some(col) = table.column(&mapped) {
            return Some(Arc::clone(col));
        }
        let name = doc.attr(field, NAME_ATTR).unwrap_or("");
        if let Some(col) = table.column(name) {
            self.ctx.tables.add_column_mapping(reference, name);
            tracing::debug!(reference, name, "column remapped by name");
            return Some(Arc::clone(col));
        }
        self.warn(Diagnostic::MalformedValue {
            reference: reference.to_owned(),
            detail: format!("table {id} has no column {reference:?}"),
        });
        None
    }

    /// Field value of a COLUMN: the column itself (cells carrying the FIELD
    /// unit when the `dmtype` is a quantity), or the missing sentinel.
    pub fn column_value(&mut self, column: ElementId) -> FieldValue {
        let Some(data) = self.column_data(column) else {
            return FieldValue::Value(self.sentinel(column));
        };
        match self.declared_kind(column) {
            Some(PrimitiveKind::RealQuantity | PrimitiveKind::IntegerQuantity) => {
                let cells = data.quantities();
                let mut quantities = Column::new(data.id.clone(), data.name.clone(), cells)
                    .with_unit(data.unit.clone())
                    .with_arraysize(data.arraysize.clone());
                if let Some(dt) = &data.datatype {
                    quantities = quantities.with_datatype(dt.clone());
                }
                FieldValue::Column(Arc::new(quantities))
            }
            _ => FieldValue::Column(data),
        }
    }
}
