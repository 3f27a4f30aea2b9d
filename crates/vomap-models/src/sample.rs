// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! The `sample` catalog model plus the `sample:test` helper classes.
//!
//! Roles follow `<type_id>.<fieldName>`, so field names keep the model's
//! camelCase spelling.

use vomap_core::{ClassDescriptor, Multiplicity, RegistryError, TypeRegistryBuilder};

use crate::ivoa;

/// `sample:catalog.SkyCoordinate`.
pub const SKY_COORDINATE: &str = "sample:catalog.SkyCoordinate";
/// `sample:catalog.SkyCoordinateFrame`.
pub const SKY_COORDINATE_FRAME: &str = "sample:catalog.SkyCoordinateFrame";
/// `sample:catalog.SkyError`.
pub const SKY_ERROR: &str = "sample:catalog.SkyError";
/// `sample:catalog.AlignedEllipse`.
pub const ALIGNED_ELLIPSE: &str = "sample:catalog.AlignedEllipse";
/// `sample:catalog.CircleError`.
pub const CIRCLE_ERROR: &str = "sample:catalog.CircleError";
/// `sample:catalog.GenericEllipse`.
pub const GENERIC_ELLIPSE: &str = "sample:catalog.GenericEllipse";
/// `sample:catalog.AstroObject`.
pub const ASTRO_OBJECT: &str = "sample:catalog.AstroObject";
/// `sample:catalog.AbstractSource`.
pub const ABSTRACT_SOURCE: &str = "sample:catalog.AbstractSource";
/// `sample:catalog.Source`.
pub const SOURCE: &str = "sample:catalog.Source";
/// `sample:catalog.SDSSSource`.
pub const SDSS_SOURCE: &str = "sample:catalog.SDSSSource";
/// `sample:catalog.TwoMassSource`.
pub const TWO_MASS_SOURCE: &str = "sample:catalog.TwoMassSource";
/// `sample:catalog.LuminosityMeasurement`.
pub const LUMINOSITY_MEASUREMENT: &str = "sample:catalog.LuminosityMeasurement";
/// `sample:catalog.LuminosityType` (enumeration).
pub const LUMINOSITY_TYPE: &str = "sample:catalog.LuminosityType";
/// `sample:catalog.SourceClassification` (enumeration).
pub const SOURCE_CLASSIFICATION: &str = "sample:catalog.SourceClassification";
/// `sample:test.MultiObj`.
pub const MULTI_OBJ: &str = "sample:test.MultiObj";
/// `sample:test.BaseTypeElements`.
pub const BASE_TYPE_ELEMENTS: &str = "sample:test.BaseTypeElements";

const ONE: Multiplicity = Multiplicity::ONE;
const OPTIONAL: Multiplicity = Multiplicity::OPTIONAL;
const MANY: Multiplicity = Multiplicity::MANY;

/// Registers the sample catalog and test classes. Needs [`ivoa::register`]
/// and the photometry model (for `LuminosityMeasurement.filter`) before
/// [`TypeRegistryBuilder::build`].
pub fn register(builder: &mut TypeRegistryBuilder) -> Result<(), RegistryError> {
    ivoa::register_enumeration(builder, LUMINOSITY_TYPE)?;
    ivoa::register_enumeration(builder, SOURCE_CLASSIFICATION)?;

    builder.register_class(
        ClassDescriptor::new(SKY_COORDINATE)
            .attribute("longitude", ivoa::REAL_QUANTITY, ONE)
            .attribute("latitude", ivoa::REAL_QUANTITY, ONE)
            .reference("frame", SKY_COORDINATE_FRAME, ONE),
    )?;
    builder.register_class(
        ClassDescriptor::new(SKY_COORDINATE_FRAME)
            .attribute("name", ivoa::STRING, ONE)
            .attribute("documentURI", ivoa::ANY_URI, ONE)
            .attribute("equinox", ivoa::STRING, OPTIONAL)
            .attribute("system", ivoa::STRING, OPTIONAL),
    )?;

    builder.register_class(ClassDescriptor::new(SKY_ERROR))?;
    builder.register_class(
        ClassDescriptor::new(ALIGNED_ELLIPSE)
            .extends(SKY_ERROR)
            .attribute("longError", ivoa::REAL, ONE)
            .attribute("latError", ivoa::REAL, ONE),
    )?;
    builder.register_class(
        ClassDescriptor::new(CIRCLE_ERROR)
            .extends(SKY_ERROR)
            .attribute("radius", ivoa::REAL, ONE),
    )?;
    builder.register_class(
        ClassDescriptor::new(GENERIC_ELLIPSE)
            .extends(SKY_ERROR)
            .attribute("major", ivoa::REAL, ONE)
            .attribute("minor", ivoa::REAL, ONE)
            .attribute("pa", ivoa::REAL, MANY),
    )?;

    builder.register_class(
        ClassDescriptor::new(ASTRO_OBJECT).attribute("label", ivoa::STRING, OPTIONAL),
    )?;
    builder.register_class(
        ClassDescriptor::new(ABSTRACT_SOURCE)
            .extends(ASTRO_OBJECT)
            .attribute("name", ivoa::STRING, ONE)
            .attribute("description", ivoa::STRING, OPTIONAL)
            .attribute("position", SKY_COORDINATE, ONE)
            .attribute("positionError", SKY_ERROR, OPTIONAL)
            .attribute("classification", SOURCE_CLASSIFICATION, ONE)
            .composition("luminosity", LUMINOSITY_MEASUREMENT, MANY),
    )?;
    for concrete in [SOURCE, SDSS_SOURCE, TWO_MASS_SOURCE] {
        builder.register_class(ClassDescriptor::new(concrete).extends(ABSTRACT_SOURCE))?;
    }
    builder.register_class(
        ClassDescriptor::new(LUMINOSITY_MEASUREMENT)
            .attribute("value", ivoa::REAL_QUANTITY, ONE)
            .attribute("error", ivoa::REAL_QUANTITY, OPTIONAL)
            .attribute("description", ivoa::STRING, OPTIONAL)
            .attribute("type", LUMINOSITY_TYPE, ONE)
            .reference("filter", crate::photdm::PHOTOMETRY_FILTER, ONE),
    )?;

    builder.register_class(
        ClassDescriptor::new(MULTI_OBJ)
            .attribute("a", ivoa::REAL, ONE)
            .attribute("b", ivoa::REAL, Multiplicity::new(2, 2)),
    )?;
    builder.register_class(
        ClassDescriptor::new(BASE_TYPE_ELEMENTS)
            .attribute("sval", ivoa::STRING, ONE)
            .attribute("unit", ivoa::UNIT, ONE)
            .attribute("link", ivoa::ANY_URI, ONE)
            .attribute("qval", ivoa::BOOLEAN, ONE)
            .attribute("tval", ivoa::DATETIME, ONE)
            .attribute("ival", ivoa::INTEGER, ONE)
            .attribute("wval", ivoa::NON_NEGATIVE_INTEGER, ONE)
            .attribute("rval", ivoa::REAL, ONE)
            .attribute("iqty", ivoa::INTEGER_QUANTITY, ONE)
            .attribute("rqty", ivoa::REAL_QUANTITY, ONE),
    )
}
