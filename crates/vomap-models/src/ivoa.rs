// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Primitive value types of the `ivoa` model.

use vomap_core::{PrimitiveKind, RegistryError, TypeRegistryBuilder};

/// `ivoa:string`.
pub const STRING: &str = "ivoa:string";
/// `ivoa:Unit`.
pub const UNIT: &str = "ivoa:Unit";
/// `ivoa:anyURI`.
pub const ANY_URI: &str = "ivoa:anyURI";
/// `ivoa:boolean`.
pub const BOOLEAN: &str = "ivoa:boolean";
/// `ivoa:integer`.
pub const INTEGER: &str = "ivoa:integer";
/// `ivoa:nonnegativeInteger`.
pub const NON_NEGATIVE_INTEGER: &str = "ivoa:nonnegativeInteger";
/// `ivoa:real`.
pub const REAL: &str = "ivoa:real";
/// `ivoa:datetime`.
pub const DATETIME: &str = "ivoa:datetime";
/// `ivoa:IntegerQuantity`.
pub const INTEGER_QUANTITY: &str = "ivoa:IntegerQuantity";
/// `ivoa:RealQuantity`.
pub const REAL_QUANTITY: &str = "ivoa:RealQuantity";

const PRIMITIVES: &[(&str, PrimitiveKind)] = &[
    (STRING, PrimitiveKind::String),
    (UNIT, PrimitiveKind::Unit),
    (BOOLEAN, PrimitiveKind::Boolean),
    (INTEGER, PrimitiveKind::Integer),
    (NON_NEGATIVE_INTEGER, PrimitiveKind::NonNegativeInteger),
    (REAL, PrimitiveKind::Real),
    (DATETIME, PrimitiveKind::DateTime),
    (INTEGER_QUANTITY, PrimitiveKind::IntegerQuantity),
    (REAL_QUANTITY, PrimitiveKind::RealQuantity),
];

/// Registers the `ivoa` primitives. `ivoa:anyURI` refines `ivoa:string`.
pub fn register(builder: &mut TypeRegistryBuilder) -> Result<(), RegistryError> {
    for (type_id, kind) in PRIMITIVES {
        builder.register_primitive(type_id, *kind, None)?;
    }
    builder.register_primitive(ANY_URI, PrimitiveKind::AnyUri, Some(STRING))
}

/// Registers a text enumeration (a refinement of `ivoa:string`).
pub fn register_enumeration(
    builder: &mut TypeRegistryBuilder,
    type_id: &str,
) -> Result<(), RegistryError> {
    builder.register_primitive(type_id, PrimitiveKind::String, Some(STRING))
}
