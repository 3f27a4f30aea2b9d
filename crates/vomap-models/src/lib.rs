// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Model registrations for vomap.
//!
//! Each module registers one model's types into a
//! [`TypeRegistryBuilder`]; [`standard_registry`] assembles all of them.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::multiple_crate_versions
)]

pub mod coords;
pub mod ivoa;
pub mod meas;
pub mod photdm;
pub mod sample;
pub mod time;

use vomap_core::{RegistryError, TypeRegistry, TypeRegistryBuilder};

pub use coords::{AxisLayout, SkyPosition};
pub use time::{TimeFormat, TimeValues, Timestamps};

/// Registers every bundled model into `builder`.
pub fn register_all(builder: &mut TypeRegistryBuilder) -> Result<(), RegistryError> {
    ivoa::register(builder)?;
    photdm::register(builder)?;
    sample::register(builder)?;
    coords::register(builder)?;
    meas::register(builder)
}

/// Registry holding the `ivoa`, `sample`, `photdm-alt`, `coords` and `meas`
/// types.
pub fn standard_registry() -> Result<TypeRegistry, RegistryError> {
    let mut builder = TypeRegistryBuilder::new();
    register_all(&mut builder)?;
    builder.build()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use vomap_core::{FieldKind, Multiplicity, PrimitiveKind, TypeRef};

    #[test]
    fn standard_registry_builds() {
        let registry = standard_registry().unwrap();
        assert!(registry.class(sample::SOURCE).is_some());
        assert!(registry.class(photdm::PHOTOMETRY_FILTER).is_some());
        assert!(registry.class(coords::POINT).is_some());
        assert_eq!(registry.primitive(ivoa::REAL), Some(PrimitiveKind::Real));
        assert_eq!(
            registry.primitive(sample::LUMINOSITY_TYPE),
            Some(PrimitiveKind::String)
        );
    }

    #[test]
    fn sources_inherit_abstract_source_fields() {
        let registry = standard_registry().unwrap();
        let names: Vec<&str> = registry
            .fields(sample::SDSS_SOURCE)
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "label",
                "name",
                "description",
                "position",
                "positionError",
                "classification",
                "luminosity"
            ]
        );
        let position = &registry.fields(sample::SOURCE)[3];
        assert_eq!(position.role, "sample:catalog.AbstractSource.position");
        assert_eq!(position.kind, FieldKind::Attribute);
    }

    #[test]
    fn photometry_roles_are_bare() {
        let registry = standard_registry().unwrap();
        let Some(TypeRef::Class { fields, .. }) = registry.get_type_by_id(photdm::PHOT_CAL) else {
            panic!("PhotCal is a class");
        };
        let roles: Vec<&str> = fields.iter().map(|f| f.role.as_str()).collect();
        assert_eq!(roles, ["zeroPoint", "magnitudeSystem", "photometryFilter"]);
    }

    #[test]
    fn subtype_queries_cover_the_source_family() {
        let registry = standard_registry().unwrap();
        let closure = registry.all_subtypes(sample::ASTRO_OBJECT).unwrap();
        for id in [
            sample::ABSTRACT_SOURCE,
            sample::SOURCE,
            sample::SDSS_SOURCE,
            sample::TWO_MASS_SOURCE,
        ] {
            assert!(closure.contains(id), "{id}");
        }
        assert!(registry.is_subtype_of(coords::POINT, coords::COORDINATE));
        assert!(!registry.is_subtype_of(coords::COORDINATE, coords::POINT));
    }

    #[test]
    fn measures_share_the_error_composition() {
        let registry = standard_registry().unwrap();
        let names: Vec<&str> = registry
            .fields(meas::TIME)
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["error", "coord"]);
        let closure = registry.all_subtypes(meas::UNCERTAINTY).unwrap();
        assert_eq!(closure.len(), 10);
        assert!(registry.is_subtype_of(coords::ISO_TIME, coords::TIME_STAMP));
    }

    #[test]
    fn fixed_size_uncertainties_keep_their_bounds() {
        let registry = standard_registry().unwrap();
        let fields = registry.fields(meas::ELLIPSOID);
        assert_eq!(fields[0].role, "meas:Ellipsoid.semiAxis");
        assert_eq!(fields[0].multiplicity, Multiplicity::new(3, 3));
        assert_eq!(fields[1].multiplicity, Multiplicity::new(2, 2));
        assert!(!fields[1].multiplicity.is_single());
        let bounds = registry.fields(meas::BOUNDS_1D);
        assert!(bounds.iter().all(|f| f.multiplicity == Multiplicity::ONE));
    }
}
