// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Schema model: class descriptors, field kinds, multiplicity and the type
//! registry that precomputes inherited fields and subtype closures.
//!
//! Registration is explicit. Each model module pushes its classes and
//! primitive types into a [`TypeRegistryBuilder`]; [`TypeRegistryBuilder::build`]
//! validates the hierarchy once and freezes it into a [`TypeRegistry`].

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use thiserror::Error;

use crate::instance::{FieldValue, InstanceArena, InstanceHandle};
use crate::value::PrimitiveKind;

/// Opaque specialized representation produced by an [`Adapter`].
pub type Representation = Arc<dyn Any + Send + Sync>;

/// Post-processing hook attached to a class.
///
/// Called once with the fully built generic instance. Returning `None` keeps
/// the generic instance as the only representation.
pub type Adapter = fn(&InstanceArena, InstanceHandle) -> Option<Representation>;

/// `(min, max)` occurrence bound of a field. `max == None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Multiplicity {
    /// Minimum number of values.
    pub min: u32,
    /// Maximum number of values, `None` when unbounded.
    pub max: Option<u32>,
}

impl Multiplicity {
    /// Exactly one value.
    pub const ONE: Self = Self {
        min: 1,
        max: Some(1),
    };
    /// Zero or one value.
    pub const OPTIONAL: Self = Self {
        min: 0,
        max: Some(1),
    };
    /// Any number of values.
    pub const MANY: Self = Self { min: 0, max: None };

    /// Builds a bound from the `(min, max)` pair used in model sources, where a
    /// negative `max` means unbounded.
    pub fn new(min: u32, max: i32) -> Self {
        Self {
            min,
            max: u32::try_from(max).ok(),
        }
    }

    /// Returns `true` when at most one value is allowed.
    pub fn is_single(self) -> bool {
        self.max == Some(1)
    }

    /// Applies the read-time collapse rule.
    ///
    /// With `max == 1`: no values become [`FieldValue::Null`] and a single
    /// value is unwrapped. Anything else (including a `max == 1` field that
    /// somehow collected several values) stays a list.
    pub fn collapse(self, mut values: Vec<FieldValue>) -> FieldValue {
        if self.is_single() {
            match values.len() {
                0 => return FieldValue::Null,
                1 => return values.pop().unwrap_or(FieldValue::Null),
                _ => {}
            }
        }
        FieldValue::List(values)
    }
}

/// How a field relates to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Leaf value: scalar, fixed list, or column-backed vector.
    Attribute,
    /// Exclusively owned nested instance(s).
    Composition,
    /// Non-owning pointer resolved by identity.
    Reference,
}

/// One declared field of a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name on the instance (e.g. `longitude`).
    pub name: String,
    /// Role the document uses to tag the field (e.g. `sample:catalog.SkyCoordinate.longitude`).
    pub role: String,
    /// Resolution strategy.
    pub kind: FieldKind,
    /// Declared value type id.
    pub type_id: String,
    /// Occurrence bound.
    pub multiplicity: Multiplicity,
}

/// Shape of a class: its own fields, its parent, and an optional adapter.
#[derive(Debug, Clone)]
pub struct ClassDescriptor {
    /// Type id used as the document's type tag.
    pub type_id: String,
    /// Parent class type id, if any.
    pub parent: Option<String>,
    /// Fields declared on this class (inherited ones are not repeated).
    pub fields: Vec<FieldDescriptor>,
    /// Optional post-processing hook.
    pub adapter: Option<Adapter>,
}

impl ClassDescriptor {
    /// Starts a root class.
    pub fn new(type_id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            parent: None,
            fields: Vec::new(),
            adapter: None,
        }
    }

    /// Sets the parent class.
    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Declares a field whose role is `<type_id>.<name>`.
    pub fn field(
        self,
        kind: FieldKind,
        name: &str,
        type_id: &str,
        multiplicity: Multiplicity,
    ) -> Self {
        let role = format!("{}.{name}", self.type_id);
        self.field_with_role(kind, name, &role, type_id, multiplicity)
    }

    /// Declares a field tagged in documents by an explicit `role`.
    pub fn field_with_role(
        mut self,
        kind: FieldKind,
        name: &str,
        role: &str,
        type_id: &str,
        multiplicity: Multiplicity,
    ) -> Self {
        self.fields.push(FieldDescriptor {
            name: name.to_owned(),
            role: role.to_owned(),
            kind,
            type_id: type_id.to_owned(),
            multiplicity,
        });
        self
    }

    /// Declares an attribute.
    pub fn attribute(self, name: &str, type_id: &str, multiplicity: Multiplicity) -> Self {
        self.field(FieldKind::Attribute, name, type_id, multiplicity)
    }

    /// Declares a composition.
    pub fn composition(self, name: &str, type_id: &str, multiplicity: Multiplicity) -> Self {
        self.field(FieldKind::Composition, name, type_id, multiplicity)
    }

    /// Declares a reference.
    pub fn reference(self, name: &str, type_id: &str, multiplicity: Multiplicity) -> Self {
        self.field(FieldKind::Reference, name, type_id, multiplicity)
    }

    /// Attaches an adapter.
    pub fn with_adapter(mut self, adapter: Adapter) -> Self {
        self.adapter = Some(adapter);
        self
    }
}

/// A primitive (value) type, optionally refining another primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveDescriptor {
    /// Type id (e.g. `ivoa:real`).
    pub type_id: String,
    /// Parent primitive type id, if any.
    pub parent: Option<String>,
    /// Decoding behavior.
    pub kind: PrimitiveKind,
}

/// Errors returned when registering or freezing types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Attempted to register two types with the same id.
    #[error("duplicate type registration for type id: {0}")]
    DuplicateTypeId(String),
    /// A type names a parent that was never registered.
    #[error("type {type_id} extends unknown type {parent}")]
    UnknownParent {
        /// Child type id.
        type_id: String,
        /// Missing parent id.
        parent: String,
    },
    /// A class extends a primitive or a primitive extends a class.
    #[error("type {type_id} cannot extend {parent}: class/primitive mismatch")]
    KindMismatch {
        /// Child type id.
        type_id: String,
        /// Parent type id.
        parent: String,
    },
    /// The parent chain loops back onto itself.
    #[error("inheritance cycle through type {0}")]
    Cycle(String),
}

#[derive(Debug, Clone)]
enum Registered {
    Class(ClassDescriptor),
    Primitive(PrimitiveDescriptor),
}

impl Registered {
    fn parent(&self) -> Option<&str> {
        match self {
            Self::Class(c) => c.parent.as_deref(),
            Self::Primitive(p) => p.parent.as_deref(),
        }
    }

    const fn is_class(&self) -> bool {
        matches!(self, Self::Class(_))
    }
}

/// Collects type registrations before freezing them.
#[derive(Debug, Default)]
pub struct TypeRegistryBuilder {
    types: BTreeMap<String, Registered>,
}

impl TypeRegistryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a class.
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateTypeId`] if the id is already taken.
    pub fn register_class(&mut self, class: ClassDescriptor) -> Result<(), RegistryError> {
        let id = class.type_id.clone();
        self.insert(id, Registered::Class(class))
    }

    /// Registers a primitive value type.
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateTypeId`] if the id is already taken.
    pub fn register_primitive(
        &mut self,
        type_id: &str,
        kind: PrimitiveKind,
        parent: Option<&str>,
    ) -> Result<(), RegistryError> {
        self.insert(
            type_id.to_owned(),
            Registered::Primitive(PrimitiveDescriptor {
                type_id: type_id.to_owned(),
                parent: parent.map(str::to_owned),
                kind,
            }),
        )
    }

    fn insert(&mut self, id: String, entry: Registered) -> Result<(), RegistryError> {
        if self.types.contains_key(&id) {
            return Err(RegistryError::DuplicateTypeId(id));
        }
        self.types.insert(id, entry);
        Ok(())
    }

    /// Validates the hierarchy and precomputes inherited fields and subtype
    /// closures.
    pub fn build(self) -> Result<TypeRegistry, RegistryError> {
        let mut chains: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (id, entry) in &self.types {
            chains.insert(id.clone(), self.chain_of(id, entry)?);
        }

        let mut subtypes: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (id, chain) in &chains {
            for ancestor in chain {
                subtypes
                    .entry(ancestor.clone())
                    .or_default()
                    .insert(id.clone());
            }
        }

        let own: BTreeMap<String, Vec<FieldDescriptor>> = self
            .types
            .iter()
            .filter_map(|(id, e)| match e {
                Registered::Class(class) => Some((id.clone(), class.fields.clone())),
                Registered::Primitive(_) => None,
            })
            .collect();

        let mut types = BTreeMap::new();
        for (id, entry) in self.types {
            let chain = chains.remove(&id).unwrap_or_default();
            let closure = subtypes.remove(&id).unwrap_or_default();
            let resolved = match entry {
                Registered::Class(class) => Entry::Class {
                    fields: merge_fields(chain.iter().rev(), &own),
                    class: Arc::new(class),
                },
                Registered::Primitive(p) => Entry::Primitive(p),
            };
            types.insert(
                id,
                TypeEntry {
                    resolved,
                    ancestors: chain,
                    subtypes: closure,
                },
            );
        }
        Ok(TypeRegistry { types })
    }

    /// Root-last chain `[self, parent, grandparent, ...]`.
    fn chain_of(&self, id: &str, entry: &Registered) -> Result<Vec<String>, RegistryError> {
        let mut chain = vec![id.to_owned()];
        let mut seen = BTreeSet::from([id.to_owned()]);
        let mut current = entry;
        let mut current_id = id;
        while let Some(parent) = current.parent() {
            let Some(next) = self.types.get(parent) else {
                return Err(RegistryError::UnknownParent {
                    type_id: current_id.to_owned(),
                    parent: parent.to_owned(),
                });
            };
            if next.is_class() != current.is_class() {
                return Err(RegistryError::KindMismatch {
                    type_id: current_id.to_owned(),
                    parent: parent.to_owned(),
                });
            }
            if !seen.insert(parent.to_owned()) {
                return Err(RegistryError::Cycle(id.to_owned()));
            }
            chain.push(parent.to_owned());
            current = next;
            current_id = parent;
        }
        Ok(chain)
    }
}

fn merge_fields<'a>(
    root_first: impl Iterator<Item = &'a String>,
    own: &BTreeMap<String, Vec<FieldDescriptor>>,
) -> Vec<FieldDescriptor> {
    let mut merged: Vec<FieldDescriptor> = Vec::new();
    for id in root_first {
        for field in own.get(id).into_iter().flatten() {
            if let Some(slot) = merged.iter_mut().find(|f| f.name == field.name) {
                *slot = field.clone();
            } else {
                merged.push(field.clone());
            }
        }
    }
    merged
}

#[derive(Debug)]
enum Entry {
    Class {
        class: Arc<ClassDescriptor>,
        fields: Vec<FieldDescriptor>,
    },
    Primitive(PrimitiveDescriptor),
}

#[derive(Debug)]
struct TypeEntry {
    resolved: Entry,
    /// `[self, parent, ...]`.
    ancestors: Vec<String>,
    subtypes: BTreeSet<String>,
}

/// Borrowed view of a registered type.
#[derive(Debug, Clone, Copy)]
pub enum TypeRef<'a> {
    /// A class with its ancestor-first field list.
    Class {
        /// The class descriptor.
        class: &'a ClassDescriptor,
        /// Declared plus inherited fields, ancestors first.
        fields: &'a [FieldDescriptor],
    },
    /// A primitive value type.
    Primitive(&'a PrimitiveDescriptor),
}

/// Frozen registry mapping type ids to descriptors.
#[derive(Debug)]
pub struct TypeRegistry {
    types: BTreeMap<String, TypeEntry>,
}

impl TypeRegistry {
    /// Resolves a type id. `None` when unknown.
    pub fn get_type_by_id(&self, type_id: &str) -> Option<TypeRef<'_>> {
        self.types.get(type_id).map(|e| match &e.resolved {
            Entry::Class { class, fields } => TypeRef::Class { class, fields },
            Entry::Primitive(p) => TypeRef::Primitive(p),
        })
    }

    /// Class descriptor for `type_id`, if it names a class.
    pub fn class(&self, type_id: &str) -> Option<&ClassDescriptor> {
        match self.get_type_by_id(type_id)? {
            TypeRef::Class { class, .. } => Some(class),
            TypeRef::Primitive(_) => None,
        }
    }

    /// Primitive decoding kind for `type_id`, if it names a primitive.
    pub fn primitive(&self, type_id: &str) -> Option<PrimitiveKind> {
        match self.get_type_by_id(type_id)? {
            TypeRef::Primitive(p) => Some(p.kind),
            TypeRef::Class { .. } => None,
        }
    }

    /// Declared and inherited fields of a class, ancestors first. Empty for
    /// unknown ids and primitives.
    pub fn fields(&self, type_id: &str) -> &[FieldDescriptor] {
        match self.get_type_by_id(type_id) {
            Some(TypeRef::Class { fields, .. }) => fields,
            _ => &[],
        }
    }

    /// `type_id` plus every transitively derived type. `None` when unknown.
    pub fn all_subtypes(&self, type_id: &str) -> Option<&BTreeSet<String>> {
        self.types.get(type_id).map(|e| &e.subtypes)
    }

    /// Returns `true` when `type_id` is `ancestor` or derives from it.
    pub fn is_subtype_of(&self, type_id: &str, ancestor: &str) -> bool {
        self.types
            .get(type_id)
            .is_some_and(|e| e.ancestors.iter().any(|a| a == ancestor))
    }

    /// All registered type ids in lexical order.
    pub fn type_ids(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn shapes() -> TypeRegistry {
        let mut b = TypeRegistryBuilder::new();
        b.register_primitive("t:real", PrimitiveKind::Real, None)
            .unwrap();
        b.register_primitive("t:string", PrimitiveKind::String, None)
            .unwrap();
        b.register_primitive("t:Color", PrimitiveKind::String, Some("t:string"))
            .unwrap();
        b.register_class(
            ClassDescriptor::new("t:Shape")
                .attribute("name", "t:string", Multiplicity::OPTIONAL)
                .attribute("area", "t:real", Multiplicity::OPTIONAL),
        )
        .unwrap();
        b.register_class(
            ClassDescriptor::new("t:Circle")
                .extends("t:Shape")
                .attribute("radius", "t:real", Multiplicity::ONE)
                .attribute("area", "t:real", Multiplicity::ONE),
        )
        .unwrap();
        b.register_class(ClassDescriptor::new("t:Disk").extends("t:Circle"))
            .unwrap();
        b.build().unwrap()
    }

    #[test]
    fn fields_are_ancestor_first_with_overrides_in_place() {
        let reg = shapes();
        let names: Vec<_> = reg
            .fields("t:Disk")
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["name", "area", "radius"]);
        let area = &reg.fields("t:Disk")[1];
        assert_eq!(area.multiplicity, Multiplicity::ONE);
        assert_eq!(area.role, "t:Circle.area");
    }

    #[test]
    fn subtype_closure_is_transitive_and_reflexive() {
        let reg = shapes();
        let subs: Vec<_> = reg
            .all_subtypes("t:Shape")
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(subs, ["t:Circle", "t:Disk", "t:Shape"]);
        assert!(reg.is_subtype_of("t:Disk", "t:Shape"));
        assert!(!reg.is_subtype_of("t:Shape", "t:Disk"));
        assert!(reg.is_subtype_of("t:Color", "t:string"));
        assert!(reg.all_subtypes("t:Nope").is_none());
    }

    #[test]
    fn build_rejects_bad_hierarchies() {
        let mut b = TypeRegistryBuilder::new();
        b.register_class(ClassDescriptor::new("a")).unwrap();
        assert_eq!(
            b.register_class(ClassDescriptor::new("a")),
            Err(RegistryError::DuplicateTypeId("a".into()))
        );

        let mut b = TypeRegistryBuilder::new();
        b.register_class(ClassDescriptor::new("a").extends("missing"))
            .unwrap();
        assert!(matches!(
            b.build(),
            Err(RegistryError::UnknownParent { .. })
        ));

        let mut b = TypeRegistryBuilder::new();
        b.register_class(ClassDescriptor::new("a").extends("b"))
            .unwrap();
        b.register_class(ClassDescriptor::new("b").extends("a"))
            .unwrap();
        assert!(matches!(b.build(), Err(RegistryError::Cycle(_))));

        let mut b = TypeRegistryBuilder::new();
        b.register_primitive("p", PrimitiveKind::Real, None).unwrap();
        b.register_class(ClassDescriptor::new("c").extends("p"))
            .unwrap();
        assert!(matches!(
            b.build(),
            Err(RegistryError::KindMismatch { .. })
        ));
    }

    #[test]
    fn collapse_follows_max() {
        let one = FieldValue::Value(crate::Value::Int(1));
        assert_eq!(Multiplicity::ONE.collapse(vec![]), FieldValue::Null);
        assert_eq!(Multiplicity::ONE.collapse(vec![one.clone()]), one);
        assert_eq!(
            Multiplicity::MANY.collapse(vec![one.clone()]),
            FieldValue::List(vec![one])
        );
        assert_eq!(Multiplicity::new(0, -1), Multiplicity::MANY);
    }
}
