// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Instance arena: materialized instances, their field storage, cardinality
//! propagation and unroll.
//!
//! Instances live in one [`InstanceArena`] per parse and are addressed by
//! [`InstanceHandle`]. Two handles are equal iff they name the same instance,
//! which is the reference equality the identity cache guarantees.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::identity::Identity;
use crate::schema::{FieldKind, Multiplicity, Representation};
use crate::tables::Column;
use crate::value::Value;

/// Index of an instance inside its arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceHandle(u32);

impl InstanceHandle {
    /// Position in the arena (allocation order).
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Resolved value of one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Nothing resolved.
    Null,
    /// Scalar leaf value.
    Value(Value),
    /// Column-backed vector, one cell per row.
    Column(Arc<Column>),
    /// A nested (composition) or shared (reference) instance.
    Instance(InstanceHandle),
    /// One optional instance per row: per-row references or a slice of an
    /// external batch.
    Rows(Vec<Option<InstanceHandle>>),
    /// Multi-valued field.
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Returns `true` for [`FieldValue::Null`] and empty lists.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::List(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Scalar value, if this is one.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Single instance, if this is one.
    pub fn as_instance(&self) -> Option<InstanceHandle> {
        match self {
            Self::Instance(h) => Some(*h),
            _ => None,
        }
    }

    /// Backing column, if this is one.
    pub fn as_column(&self) -> Option<&Arc<Column>> {
        match self {
            Self::Column(c) => Some(c),
            _ => None,
        }
    }

    /// Per-row handles, if this is a row group.
    pub fn as_rows(&self) -> Option<&[Option<InstanceHandle>]> {
        match self {
            Self::Rows(r) => Some(r),
            _ => None,
        }
    }

    /// List items, if this is a list.
    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

/// A field slot on an instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Kind of the declaring descriptor.
    pub kind: FieldKind,
    /// Occurrence bound of the declaring descriptor.
    pub multiplicity: Multiplicity,
    /// Resolved value.
    pub value: FieldValue,
}

/// A materialized object of some class.
#[derive(Debug)]
pub struct Instance {
    type_id: String,
    identity: Identity,
    fields: BTreeMap<String, Field>,
    cardinality: usize,
    is_template: bool,
    representation: Option<Representation>,
    origin: Option<(InstanceHandle, usize)>,
}

impl Instance {
    /// Concrete type id.
    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    /// Structural identity the instance was built under.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Value of `name`, if the field was attached.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name).map(|f| &f.value)
    }

    /// All attached fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of backing rows, 0 for scalar instances.
    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    /// Whether the instance is column-backed or lives under a template.
    pub fn is_template(&self) -> bool {
        self.is_template
    }

    /// Adapter output, if any.
    pub fn representation(&self) -> Option<&Representation> {
        self.representation.as_ref()
    }

    /// `(template, row)` this instance was unrolled from.
    pub fn origin(&self) -> Option<(InstanceHandle, usize)> {
        self.origin
    }
}

/// Owns every instance built during one parse.
#[derive(Debug, Default)]
pub struct InstanceArena {
    instances: Vec<Instance>,
    unrolled: HashMap<(InstanceHandle, usize), InstanceHandle>,
}

impl InstanceArena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of instances (including unrolled rows).
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns `true` when nothing has been allocated.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Iterates instances in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (InstanceHandle, &Instance)> {
        self.instances
            .iter()
            .enumerate()
            .map(|(i, inst)| (handle_at(i), inst))
    }

    /// Allocates an instance with no fields.
    pub fn allocate(
        &mut self,
        type_id: &str,
        identity: Identity,
        is_template: bool,
    ) -> InstanceHandle {
        let handle = handle_at(self.instances.len());
        self.instances.push(Instance {
            type_id: type_id.to_owned(),
            identity,
            fields: BTreeMap::new(),
            cardinality: 0,
            is_template,
            representation: None,
            origin: None,
        });
        handle
    }

    /// Looks up an instance.
    pub fn get(&self, handle: InstanceHandle) -> Option<&Instance> {
        self.instances.get(handle.index())
    }

    /// Value of field `name` on `handle`.
    pub fn field(&self, handle: InstanceHandle, name: &str) -> Option<&FieldValue> {
        self.get(handle)?.field(name)
    }

    /// Cardinality of `handle` (0 for unknown handles).
    pub fn cardinality(&self, handle: InstanceHandle) -> usize {
        self.get(handle).map_or(0, Instance::cardinality)
    }

    /// Template flag of `handle` (`false` for unknown handles).
    pub fn is_template(&self, handle: InstanceHandle) -> bool {
        self.get(handle).is_some_and(Instance::is_template)
    }

    /// Adapter output stored on `handle`.
    pub fn representation(&self, handle: InstanceHandle) -> Option<&Representation> {
        self.get(handle)?.representation()
    }

    /// Attaches a field and propagates cardinality.
    ///
    /// Attributes contribute the cardinality of their value (the first item
    /// for lists): a nested instance's cardinality or a column's length.
    /// Compositions contribute only through a single (`max == 1`) nested
    /// instance with cardinality > 0. References never contribute. A
    /// positive cardinality marks the instance as a template.
    pub fn set_field(&mut self, handle: InstanceHandle, name: &str, field: Field) {
        let contributed = self.contributed_cardinality(&field);
        if let Some(inst) = self.instances.get_mut(handle.index()) {
            inst.cardinality = inst.cardinality.max(contributed);
            if inst.cardinality > 0 {
                inst.is_template = true;
            }
            inst.fields.insert(name.to_owned(), field);
        }
    }

    /// Marks an instance as a template.
    pub fn mark_template(&mut self, handle: InstanceHandle) {
        if let Some(inst) = self.instances.get_mut(handle.index()) {
            inst.is_template = true;
        }
    }

    /// Stores an adapter's output beside the generic instance.
    pub fn set_representation(&mut self, handle: InstanceHandle, representation: Representation) {
        if let Some(inst) = self.instances.get_mut(handle.index()) {
            inst.representation = Some(representation);
        }
    }

    fn contributed_cardinality(&self, field: &Field) -> usize {
        match field.kind {
            FieldKind::Attribute => {
                let head = match &field.value {
                    FieldValue::List(items) => items.first(),
                    other => Some(other),
                };
                match head {
                    Some(FieldValue::Instance(h)) => self.cardinality(*h),
                    Some(FieldValue::Column(c)) => c.len(),
                    _ => 0,
                }
            }
            FieldKind::Composition => match &field.value {
                FieldValue::Instance(h) if field.multiplicity.is_single() => self.cardinality(*h),
                _ => 0,
            },
            FieldKind::Reference => 0,
        }
    }

    /// Expands a vectorized instance into one scalar instance per row.
    ///
    /// Scalar instances (cardinality 0) and unknown handles unroll to an
    /// empty list. Repeated calls return the same handles.
    pub fn unroll(&mut self, handle: InstanceHandle) -> Vec<InstanceHandle> {
        let rows = self.cardinality(handle);
        (0..rows)
            .filter_map(|row| self.unroll_at(handle, row))
            .collect()
    }

    /// Projects a vectorized instance at one row.
    ///
    /// Returns `None` for unknown handles and scalar instances. Rows past the
    /// end of a backing column project to [`Value::Missing`].
    pub fn unroll_at(&mut self, handle: InstanceHandle, row: usize) -> Option<InstanceHandle> {
        if let Some(done) = self.unrolled.get(&(handle, row)) {
            return Some(*done);
        }
        let template = self.get(handle)?;
        if template.cardinality == 0 {
            return None;
        }
        let type_id = template.type_id.clone();
        let identity = template.identity.row(row);
        let fields: Vec<(String, Field)> = template
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let mut projected = BTreeMap::new();
        for (name, field) in fields {
            let value = self.project(&field, row);
            projected.insert(
                name,
                Field {
                    value,
                    ..field
                },
            );
        }

        let out = handle_at(self.instances.len());
        self.instances.push(Instance {
            type_id,
            identity,
            fields: projected,
            cardinality: 0,
            is_template: false,
            representation: None,
            origin: Some((handle, row)),
        });
        self.unrolled.insert((handle, row), out);
        Some(out)
    }

    fn project(&mut self, field: &Field, row: usize) -> FieldValue {
        self.project_value(field.kind, &field.value, row)
    }

    fn project_value(&mut self, kind: FieldKind, value: &FieldValue, row: usize) -> FieldValue {
        match value {
            FieldValue::Null => FieldValue::Null,
            FieldValue::Value(v) => FieldValue::Value(v.clone()),
            FieldValue::Column(c) => {
                FieldValue::Value(c.cell(row).cloned().unwrap_or(Value::Missing))
            }
            FieldValue::Rows(rows) => rows
                .get(row)
                .copied()
                .flatten()
                .map_or(FieldValue::Null, FieldValue::Instance),
            FieldValue::Instance(h) => {
                if kind == FieldKind::Reference || self.cardinality(*h) == 0 {
                    FieldValue::Instance(*h)
                } else {
                    self.unroll_at(*h, row)
                        .map_or(FieldValue::Null, FieldValue::Instance)
                }
            }
            FieldValue::List(items) => FieldValue::List(
                items
                    .iter()
                    .map(|item| self.project_value(kind, item, row))
                    .collect(),
            ),
        }
    }
}

fn handle_at(index: usize) -> InstanceHandle {
    // Arenas never approach u32::MAX instances for one document.
    InstanceHandle(u32::try_from(index).unwrap_or(u32::MAX))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::identity::{KeyComponent, KeyMatrix};

    fn column(values: &[f64]) -> Arc<Column> {
        Arc::new(Column::new(
            "c",
            "c",
            values.iter().copied().map(Value::Real).collect(),
        ))
    }

    fn attr(value: FieldValue) -> Field {
        Field {
            kind: FieldKind::Attribute,
            multiplicity: Multiplicity::ONE,
            value,
        }
    }

    // ── 1. cardinality propagation ──

    #[test]
    fn column_attribute_sets_cardinality_and_template() {
        let mut arena = InstanceArena::new();
        let h = arena.allocate("t:Pos", Identity::new("p"), false);
        arena.set_field(h, "lon", attr(FieldValue::Column(column(&[1.0, 2.0, 3.0]))));
        assert_eq!(arena.cardinality(h), 3);
        assert!(arena.is_template(h));
    }

    #[test]
    fn composition_only_propagates_through_single_fields() {
        let mut arena = InstanceArena::new();
        let child = arena.allocate("t:Pos", Identity::new("c"), false);
        arena.set_field(child, "lon", attr(FieldValue::Column(column(&[1.0, 2.0]))));

        let single = arena.allocate("t:Src", Identity::new("s"), false);
        arena.set_field(
            single,
            "pos",
            Field {
                kind: FieldKind::Composition,
                multiplicity: Multiplicity::ONE,
                value: FieldValue::Instance(child),
            },
        );
        assert_eq!(arena.cardinality(single), 2);

        let many = arena.allocate("t:Src", Identity::new("m"), false);
        arena.set_field(
            many,
            "pos",
            Field {
                kind: FieldKind::Composition,
                multiplicity: Multiplicity::MANY,
                value: FieldValue::List(vec![FieldValue::Instance(child)]),
            },
        );
        assert_eq!(arena.cardinality(many), 0);

        let refr = arena.allocate("t:Src", Identity::new("r"), false);
        arena.set_field(
            refr,
            "pos",
            Field {
                kind: FieldKind::Reference,
                multiplicity: Multiplicity::ONE,
                value: FieldValue::Instance(child),
            },
        );
        assert_eq!(arena.cardinality(refr), 0);
    }

    // ── 2. unroll ──

    #[test]
    fn unroll_projects_columns_and_copies_scalars() {
        let mut arena = InstanceArena::new();
        let shared = arena.allocate("t:Frame", Identity::new("F1"), false);
        let h = arena.allocate("t:Pos", Identity::new("p"), false);
        arena.set_field(h, "lon", attr(FieldValue::Column(column(&[10.0, 20.0]))));
        arena.set_field(h, "label", attr(FieldValue::Value(Value::Text("x".into()))));
        arena.set_field(
            h,
            "frame",
            Field {
                kind: FieldKind::Reference,
                multiplicity: Multiplicity::ONE,
                value: FieldValue::Instance(shared),
            },
        );

        let rows = arena.unroll(h);
        assert_eq!(rows.len(), 2);
        assert_eq!(
            arena.field(rows[1], "lon"),
            Some(&FieldValue::Value(Value::Real(20.0)))
        );
        assert_eq!(
            arena.field(rows[0], "label"),
            Some(&FieldValue::Value(Value::Text("x".into())))
        );
        assert_eq!(
            arena.field(rows[0], "frame"),
            Some(&FieldValue::Instance(shared))
        );
        let row0 = arena.get(rows[0]).unwrap();
        assert_eq!(row0.identity().id, "p[0]");
        assert_eq!(row0.origin(), Some((h, 0)));
        assert!(!row0.is_template());
        assert_eq!(row0.cardinality(), 0);
    }

    #[test]
    fn unroll_of_scalar_is_empty_and_repeat_is_stable() {
        let mut arena = InstanceArena::new();
        let scalar = arena.allocate("t:Pos", Identity::new("s"), false);
        assert!(arena.unroll(scalar).is_empty());

        let h = arena.allocate("t:Pos", Identity::new("p"), false);
        arena.set_field(h, "lon", attr(FieldValue::Column(column(&[1.0, 2.0]))));
        let first = arena.unroll(h);
        let second = arena.unroll(h);
        assert_eq!(first, second);
    }

    #[test]
    fn unroll_indexes_row_groups_and_nested_templates() {
        let mut arena = InstanceArena::new();
        let a = arena.allocate("t:T", Identity::new("a"), false);
        let child = arena.allocate("t:Pos", Identity::new("c"), false);
        arena.set_field(child, "lon", attr(FieldValue::Column(column(&[5.0, 6.0]))));

        let h = arena.allocate("t:Src", Identity::new("s"), false);
        arena.set_field(
            h,
            "pos",
            Field {
                kind: FieldKind::Composition,
                multiplicity: Multiplicity::ONE,
                value: FieldValue::Instance(child),
            },
        );
        arena.set_field(
            h,
            "target",
            Field {
                kind: FieldKind::Reference,
                multiplicity: Multiplicity::ONE,
                value: FieldValue::Rows(vec![None, Some(a)]),
            },
        );

        let rows = arena.unroll(h);
        assert_eq!(arena.field(rows[0], "target"), Some(&FieldValue::Null));
        assert_eq!(arena.field(rows[1], "target"), Some(&FieldValue::Instance(a)));
        let nested = arena.field(rows[1], "pos").and_then(FieldValue::as_instance).unwrap();
        assert_eq!(
            arena.field(nested, "lon"),
            Some(&FieldValue::Value(Value::Real(6.0)))
        );
    }

    #[test]
    fn unrolled_identity_carries_key_row() {
        let mut arena = InstanceArena::new();
        let keys =
            KeyMatrix::from_components(&[KeyComponent::Column(vec![Value::Int(7), Value::Int(8)])]);
        let h = arena.allocate("t:Pos", Identity::with_keys("p", keys), false);
        arena.set_field(h, "lon", attr(FieldValue::Column(column(&[1.0, 2.0]))));
        let rows = arena.unroll(h);
        let id = arena.get(rows[1]).unwrap().identity();
        assert_eq!(id.keys.as_ref().unwrap().rows(), &[vec![Value::Int(8)]]);
    }

    #[test]
    fn out_of_range_rows_project_to_missing() {
        let mut arena = InstanceArena::new();
        let h = arena.allocate("t:Pos", Identity::new("p"), false);
        arena.set_field(h, "lon", attr(FieldValue::Column(column(&[1.0]))));
        arena.set_field(h, "lat", attr(FieldValue::Column(column(&[1.0, 2.0]))));
        let rows = arena.unroll(h);
        assert_eq!(
            arena.field(rows[1], "lon"),
            Some(&FieldValue::Value(Value::Missing))
        );
    }
}
