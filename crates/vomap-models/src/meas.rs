// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! The `meas` measurement model: measures wrapping a `coords` coordinate,
//! with optional statistical and systematic uncertainties.
//!
//! Several uncertainty attributes are fixed-size lists (two plus/minus
//! values for a 2D asymmetrical error, three semi-axes for an ellipsoid).
//! They read as a [`FieldValue::List`](vomap_core::FieldValue::List) of the
//! values present. The count is not checked.

use vomap_core::{ClassDescriptor, Multiplicity, RegistryError, TypeRegistryBuilder};

use crate::{coords, ivoa};

/// `meas:Uncertainty`.
pub const UNCERTAINTY: &str = "meas:Uncertainty";
/// `meas:Symmetrical`.
pub const SYMMETRICAL: &str = "meas:Symmetrical";
/// `meas:Asymmetrical1D`.
pub const ASYMMETRICAL_1D: &str = "meas:Asymmetrical1D";
/// `meas:Asymmetrical2D`.
pub const ASYMMETRICAL_2D: &str = "meas:Asymmetrical2D";
/// `meas:Asymmetrical3D`.
pub const ASYMMETRICAL_3D: &str = "meas:Asymmetrical3D";
/// `meas:Bounds1D`.
pub const BOUNDS_1D: &str = "meas:Bounds1D";
/// `meas:Bounds2D`.
pub const BOUNDS_2D: &str = "meas:Bounds2D";
/// `meas:Bounds3D`.
pub const BOUNDS_3D: &str = "meas:Bounds3D";
/// `meas:Ellipse`.
pub const ELLIPSE: &str = "meas:Ellipse";
/// `meas:Ellipsoid`.
pub const ELLIPSOID: &str = "meas:Ellipsoid";
/// `meas:Measure`.
pub const MEASURE: &str = "meas:Measure";
/// `meas:Error`.
pub const ERROR: &str = "meas:Error";
/// `meas:GenericMeasure`.
pub const GENERIC_MEASURE: &str = "meas:GenericMeasure";
/// `meas:Position`.
pub const POSITION: &str = "meas:Position";
/// `meas:Time`.
pub const TIME: &str = "meas:Time";
/// `meas:Polarization`.
pub const POLARIZATION: &str = "meas:Polarization";
/// `meas:Velocity`.
pub const VELOCITY: &str = "meas:Velocity";
/// `meas:ProperMotion`.
pub const PROPER_MOTION: &str = "meas:ProperMotion";

const ONE: Multiplicity = Multiplicity::ONE;
const OPTIONAL: Multiplicity = Multiplicity::OPTIONAL;

/// Exactly `n` values.
const fn exactly(n: u32) -> Multiplicity {
    Multiplicity {
        min: n,
        max: Some(n),
    }
}

/// Uncertainty with an `(a, b)` pair of `n`-valued quantities.
fn paired(id: &str, a: &str, b: &str, n: u32) -> ClassDescriptor {
    ClassDescriptor::new(id)
        .extends(UNCERTAINTY)
        .attribute(a, ivoa::REAL_QUANTITY, exactly(n))
        .attribute(b, ivoa::REAL_QUANTITY, exactly(n))
}

/// Registers the measurement model. Needs [`ivoa::register`] and
/// [`coords::register`].
pub fn register(builder: &mut TypeRegistryBuilder) -> Result<(), RegistryError> {
    builder.register_class(ClassDescriptor::new(UNCERTAINTY))?;
    builder.register_class(
        ClassDescriptor::new(SYMMETRICAL)
            .extends(UNCERTAINTY)
            .attribute("radius", ivoa::REAL_QUANTITY, ONE),
    )?;
    builder.register_class(paired(ASYMMETRICAL_1D, "plus", "minus", 1))?;
    builder.register_class(paired(ASYMMETRICAL_2D, "plus", "minus", 2))?;
    builder.register_class(paired(ASYMMETRICAL_3D, "plus", "minus", 3))?;
    builder.register_class(paired(BOUNDS_1D, "loLimit", "hiLimit", 1))?;
    builder.register_class(paired(BOUNDS_2D, "loLimit", "hiLimit", 2))?;
    builder.register_class(paired(BOUNDS_3D, "loLimit", "hiLimit", 3))?;
    builder.register_class(
        ClassDescriptor::new(ELLIPSE)
            .extends(UNCERTAINTY)
            .attribute("semiAxis", ivoa::REAL_QUANTITY, exactly(2))
            .attribute("posAngle", ivoa::REAL_QUANTITY, ONE),
    )?;
    builder.register_class(
        ClassDescriptor::new(ELLIPSOID)
            .extends(UNCERTAINTY)
            .attribute("semiAxis", ivoa::REAL_QUANTITY, exactly(3))
            .attribute("posAngle", ivoa::REAL_QUANTITY, exactly(2)),
    )?;

    builder.register_class(
        ClassDescriptor::new(ERROR)
            .attribute("statError", UNCERTAINTY, OPTIONAL)
            .attribute("sysError", UNCERTAINTY, OPTIONAL),
    )?;
    builder.register_class(ClassDescriptor::new(MEASURE).composition("error", ERROR, OPTIONAL))?;
    for (id, coord_type) in [
        (GENERIC_MEASURE, coords::PHYSICAL_COORDINATE),
        (POSITION, coords::POINT),
        (TIME, coords::TIME_STAMP),
        (POLARIZATION, ivoa::STRING),
        (VELOCITY, coords::POINT),
    ] {
        builder.register_class(
            ClassDescriptor::new(id)
                .extends(MEASURE)
                .attribute("coord", coord_type, ONE),
        )?;
    }
    builder.register_class(
        ClassDescriptor::new(PROPER_MOTION)
            .extends(MEASURE)
            .attribute("lon", ivoa::REAL_QUANTITY, ONE)
            .attribute("lat", ivoa::REAL_QUANTITY, ONE),
    )
}
