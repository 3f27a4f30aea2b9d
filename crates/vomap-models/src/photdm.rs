// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! The `photdm-alt` photometry filter model.
//!
//! Documents tag these fields with bare role names (`fpsIdentifier`,
//! `zeroPoint`, ...) rather than qualified ones.

use vomap_core::{ClassDescriptor, FieldKind, Multiplicity, RegistryError, TypeRegistryBuilder};

use crate::ivoa;

/// `photdm-alt:PhotometryFilter`.
pub const PHOTOMETRY_FILTER: &str = "photdm-alt:PhotometryFilter";
/// `photdm-alt:PhotometricSystem`.
pub const PHOTOMETRIC_SYSTEM: &str = "photdm-alt:PhotometricSystem";
/// `photdm-alt:PhotCal`.
pub const PHOT_CAL: &str = "photdm-alt:PhotCal";
/// `photdm-alt:ZeroPoint`.
pub const ZERO_POINT: &str = "photdm-alt:ZeroPoint";
/// `photdm-alt:AsinhZeroPoint`.
pub const ASINH_ZERO_POINT: &str = "photdm-alt:AsinhZeroPoint";
/// `photdm-alt:LinearFlux`.
pub const LINEAR_FLUX: &str = "photdm-alt:LinearFlux";
/// `photdm-alt:PogsonZeroPoint`.
pub const POGSON_ZERO_POINT: &str = "photdm-alt:PogsonZeroPoint";
/// `photdm-alt:MagnitudeSystem`.
pub const MAGNITUDE_SYSTEM: &str = "photdm-alt:MagnitudeSystem";
/// `photdm-alt:TransmissionPoint`.
pub const TRANSMISSION_POINT: &str = "photdm-alt:TransmissionPoint";
/// `photdm-alt:Access`.
pub const ACCESS: &str = "photdm-alt:Access";
/// `photdm-alt:Source`.
pub const SOURCE: &str = "photdm-alt:Source";
/// `photdm-alt:S_Bounds`.
pub const S_BOUNDS: &str = "photdm-alt:S_Bounds";

const ONE: Multiplicity = Multiplicity::ONE;
const OPTIONAL: Multiplicity = Multiplicity::OPTIONAL;
const MANY: Multiplicity = Multiplicity::MANY;

/// Field tagged by its bare name.
trait Bare {
    fn bare(self, kind: FieldKind, name: &str, type_id: &str, m: Multiplicity) -> Self;
    fn attr(self, name: &str, type_id: &str, m: Multiplicity) -> Self;
}

impl Bare for ClassDescriptor {
    fn bare(self, kind: FieldKind, name: &str, type_id: &str, m: Multiplicity) -> Self {
        self.field_with_role(kind, name, name, type_id, m)
    }

    fn attr(self, name: &str, type_id: &str, m: Multiplicity) -> Self {
        self.bare(FieldKind::Attribute, name, type_id, m)
    }
}

/// Registers the photometry filter model. Needs [`ivoa::register`].
pub fn register(builder: &mut TypeRegistryBuilder) -> Result<(), RegistryError> {
    builder.register_class(
        ClassDescriptor::new(S_BOUNDS)
            .attr("extent", ivoa::REAL_QUANTITY, OPTIONAL)
            .attr("start", ivoa::REAL_QUANTITY, ONE)
            .attr("stop", ivoa::REAL_QUANTITY, ONE),
    )?;
    builder.register_class(
        ClassDescriptor::new(ACCESS)
            .attr("reference", ivoa::ANY_URI, ONE)
            .attr("format", ivoa::STRING, ONE)
            .attr("size", ivoa::INTEGER, OPTIONAL),
    )?;

    builder.register_class(
        ClassDescriptor::new(ZERO_POINT)
            .attr("flux", ivoa::REAL_QUANTITY, ONE)
            .attr("referenceMagnitude", ivoa::REAL_QUANTITY, ONE),
    )?;
    builder.register_class(
        ClassDescriptor::new(ASINH_ZERO_POINT)
            .extends(ZERO_POINT)
            .attr("softeningCoefficient", ivoa::REAL, OPTIONAL),
    )?;
    builder.register_class(ClassDescriptor::new(LINEAR_FLUX).extends(ZERO_POINT))?;
    builder.register_class(ClassDescriptor::new(POGSON_ZERO_POINT).extends(ZERO_POINT))?;

    builder.register_class(ClassDescriptor::new(SOURCE))?;
    builder.register_class(
        ClassDescriptor::new(MAGNITUDE_SYSTEM)
            .attr("type", ivoa::STRING, OPTIONAL)
            .attr("referenceSpectrum", ivoa::ANY_URI, OPTIONAL)
            .bare(FieldKind::Composition, "source", SOURCE, MANY),
    )?;
    builder.register_class(
        ClassDescriptor::new(PHOT_CAL)
            .bare(FieldKind::Composition, "zeroPoint", ZERO_POINT, ONE)
            .bare(FieldKind::Composition, "magnitudeSystem", MAGNITUDE_SYSTEM, ONE)
            .bare(FieldKind::Reference, "photometryFilter", PHOTOMETRY_FILTER, ONE),
    )?;
    builder.register_class(
        ClassDescriptor::new(PHOTOMETRIC_SYSTEM)
            .attr("description", ivoa::STRING, OPTIONAL)
            .attr("detectorType", ivoa::INTEGER, ONE)
            .bare(
                FieldKind::Composition,
                "photometryFilter",
                PHOTOMETRY_FILTER,
                Multiplicity::new(1, -1),
            ),
    )?;
    builder.register_class(
        ClassDescriptor::new(TRANSMISSION_POINT)
            .attr("spectral", ivoa::REAL_QUANTITY, ONE)
            .attr("spectralError", ivoa::REAL_QUANTITY, ONE)
            .attr("transmission", ivoa::REAL, ONE)
            .attr("transmissionError", ivoa::REAL, ONE),
    )?;
    builder.register_class(
        ClassDescriptor::new(PHOTOMETRY_FILTER)
            .attr("fpsIdentifier", ivoa::STRING, ONE)
            .attr("identifier", ivoa::STRING, ONE)
            .attr("name", ivoa::STRING, ONE)
            .attr("description", ivoa::STRING, ONE)
            .attr("bandName", ivoa::STRING, ONE)
            .attr("dataValidityFrom", ivoa::DATETIME, ONE)
            .attr("dataValidityTo", ivoa::DATETIME, ONE)
            .attr("spectralLocation", ivoa::REAL_QUANTITY, ONE)
            .attr("bandWidth", ivoa::REAL_QUANTITY, ONE)
            .bare(FieldKind::Composition, "transmissionPoint", TRANSMISSION_POINT, MANY)
            .bare(FieldKind::Composition, "access", ACCESS, OPTIONAL),
    )
}
