// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Subset of the `coords` model, with a [`SkyPosition`] adapter on
//! `coords:Point` and a [`Timestamps`](crate::time::Timestamps) adapter on the
//! time instants.

use std::sync::Arc;

use vomap_core::{
    ClassDescriptor, FieldValue, InstanceArena, InstanceHandle, Multiplicity, RegistryError,
    Representation, TypeRegistryBuilder, Value,
};

use crate::{ivoa, time};

/// `coords:Coordinate`.
pub const COORDINATE: &str = "coords:Coordinate";
/// `coords:Point`.
pub const POINT: &str = "coords:Point";
/// `coords:PhysicalCoordinate`.
pub const PHYSICAL_COORDINATE: &str = "coords:PhysicalCoordinate";
/// `coords:TimeStamp`.
pub const TIME_STAMP: &str = "coords:TimeStamp";
/// `coords:TimeOffset`.
pub const TIME_OFFSET: &str = "coords:TimeOffset";
/// `coords:TimeInstant`.
pub const TIME_INSTANT: &str = "coords:TimeInstant";
/// `coords:JD`.
pub const JD: &str = "coords:JD";
/// `coords:MJD`.
pub const MJD: &str = "coords:MJD";
/// `coords:ISOTime`.
pub const ISO_TIME: &str = "coords:ISOTime";
/// `coords:RefLocation`.
pub const REF_LOCATION: &str = "coords:RefLocation";
/// `coords:StdRefLocation`.
pub const STD_REF_LOCATION: &str = "coords:StdRefLocation";
/// `coords:CoordSpace`.
pub const COORD_SPACE: &str = "coords:CoordSpace";
/// `coords:SphericalCoordSpace`.
pub const SPHERICAL_COORD_SPACE: &str = "coords:SphericalCoordSpace";
/// `coords:CartesianCoordSpace`.
pub const CARTESIAN_COORD_SPACE: &str = "coords:CartesianCoordSpace";
/// `coords:Axis`.
pub const AXIS: &str = "coords:Axis";
/// `coords:ContinuousAxis`.
pub const CONTINUOUS_AXIS: &str = "coords:ContinuousAxis";
/// `coords:BinnedAxis`.
pub const BINNED_AXIS: &str = "coords:BinnedAxis";
/// `coords:CoordFrame`.
pub const COORD_FRAME: &str = "coords:CoordFrame";
/// `coords:SpaceFrame`.
pub const SPACE_FRAME: &str = "coords:SpaceFrame";
/// `coords:TimeFrame`.
pub const TIME_FRAME: &str = "coords:TimeFrame";
/// `coords:CoordSys`.
pub const COORD_SYS: &str = "coords:CoordSys";
/// `coords:PhysicalCoordSys`.
pub const PHYSICAL_COORD_SYS: &str = "coords:PhysicalCoordSys";
/// `coords:Epoch`.
pub const EPOCH: &str = "coords:Epoch";

const ONE: Multiplicity = Multiplicity::ONE;
const OPTIONAL: Multiplicity = Multiplicity::OPTIONAL;

/// Registers the coordinates subset. Needs [`ivoa::register`].
pub fn register(builder: &mut TypeRegistryBuilder) -> Result<(), RegistryError> {
    ivoa::register_enumeration(builder, EPOCH)?;

    builder.register_class(
        ClassDescriptor::new(COORDINATE).reference("coordSys", COORD_SYS, ONE),
    )?;
    builder.register_class(
        ClassDescriptor::new(POINT)
            .extends(COORDINATE)
            .attribute("axis1", ivoa::REAL_QUANTITY, OPTIONAL)
            .attribute("axis2", ivoa::REAL_QUANTITY, OPTIONAL)
            .attribute("axis3", ivoa::REAL_QUANTITY, OPTIONAL)
            .with_adapter(sky_position),
    )?;
    builder.register_class(
        ClassDescriptor::new(PHYSICAL_COORDINATE)
            .extends(COORDINATE)
            .attribute("cval", ivoa::REAL_QUANTITY, ONE),
    )?;
    builder.register_class(ClassDescriptor::new(TIME_STAMP).extends(COORDINATE))?;
    builder.register_class(
        ClassDescriptor::new(TIME_OFFSET)
            .extends(TIME_STAMP)
            .attribute("time", ivoa::REAL_QUANTITY, ONE)
            .attribute("time0", TIME_INSTANT, ONE),
    )?;
    builder.register_class(ClassDescriptor::new(TIME_INSTANT).extends(TIME_STAMP))?;
    for (id, date_type) in [(JD, ivoa::REAL), (MJD, ivoa::REAL), (ISO_TIME, ivoa::DATETIME)] {
        builder.register_class(
            ClassDescriptor::new(id)
                .extends(TIME_INSTANT)
                .attribute("date", date_type, ONE)
                .with_adapter(time::timestamps),
        )?;
    }

    builder.register_class(ClassDescriptor::new(REF_LOCATION))?;
    builder.register_class(
        ClassDescriptor::new(STD_REF_LOCATION)
            .extends(REF_LOCATION)
            .attribute("position", ivoa::STRING, ONE),
    )?;

    builder.register_class(
        ClassDescriptor::new(COORD_SPACE).composition("axis", AXIS, Multiplicity::new(1, -1)),
    )?;
    builder.register_class(ClassDescriptor::new(SPHERICAL_COORD_SPACE).extends(COORD_SPACE))?;
    builder.register_class(ClassDescriptor::new(CARTESIAN_COORD_SPACE).extends(COORD_SPACE))?;
    builder.register_class(ClassDescriptor::new(AXIS).attribute("name", ivoa::STRING, OPTIONAL))?;
    builder.register_class(
        ClassDescriptor::new(CONTINUOUS_AXIS)
            .extends(AXIS)
            .attribute("domainMin", ivoa::REAL_QUANTITY, OPTIONAL)
            .attribute("domainMax", ivoa::REAL_QUANTITY, OPTIONAL)
            .attribute("cyclic", ivoa::BOOLEAN, OPTIONAL),
    )?;
    builder.register_class(
        ClassDescriptor::new(BINNED_AXIS)
            .extends(AXIS)
            .attribute("length", ivoa::NON_NEGATIVE_INTEGER, ONE),
    )?;

    builder.register_class(ClassDescriptor::new(COORD_FRAME))?;
    builder.register_class(
        ClassDescriptor::new(SPACE_FRAME)
            .extends(COORD_FRAME)
            .attribute("refPosition", REF_LOCATION, ONE)
            .attribute("spaceRefFrame", ivoa::STRING, ONE)
            .attribute("equinox", EPOCH, OPTIONAL)
            .attribute("planetaryEphem", ivoa::STRING, OPTIONAL),
    )?;
    builder.register_class(
        ClassDescriptor::new(TIME_FRAME)
            .extends(COORD_FRAME)
            .attribute("refPosition", REF_LOCATION, ONE)
            .attribute("timescale", ivoa::STRING, ONE)
            .attribute("refDirection", ivoa::STRING, OPTIONAL),
    )?;

    builder.register_class(ClassDescriptor::new(COORD_SYS))?;
    builder.register_class(
        ClassDescriptor::new(PHYSICAL_COORD_SYS)
            .extends(COORD_SYS)
            .composition("coordSpace", COORD_SPACE, OPTIONAL)
            .composition("frame", COORD_FRAME, OPTIONAL),
    )
}

/// How the axes of a [`SkyPosition`] are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisLayout {
    /// `axis1`/`axis2`/`axis3` are longitude, latitude and distance.
    Spherical,
    /// `axis1`/`axis2`/`axis3` are x, y and z.
    Cartesian,
}

/// Adapter output for `coords:Point`: numeric axes (one entry per row) in a
/// named celestial frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyPosition {
    /// Lower-cased frame name (`icrs`, `fk5`, `galactic`, ...).
    pub frame: String,
    /// Equinox, defaulted for `fk4` (B1950.0) and `fk5` (J2000.0).
    pub equinox: Option<String>,
    /// Axis layout, from the coordinate space class.
    pub layout: AxisLayout,
    /// First axis values.
    pub axis1: Vec<f64>,
    /// Second axis values.
    pub axis2: Vec<f64>,
    /// Third axis values, when present.
    pub axis3: Option<Vec<f64>>,
    /// Unit of the first axis.
    pub unit: Option<String>,
}

impl SkyPosition {
    /// Longitudes, for spherical positions.
    pub fn longitude(&self) -> Option<&[f64]> {
        (self.layout == AxisLayout::Spherical).then_some(self.axis1.as_slice())
    }

    /// Latitudes, for spherical positions.
    pub fn latitude(&self) -> Option<&[f64]> {
        (self.layout == AxisLayout::Spherical).then_some(self.axis2.as_slice())
    }
}

pub(crate) fn instance_field(
    arena: &InstanceArena,
    h: InstanceHandle,
    name: &str,
) -> Option<InstanceHandle> {
    arena.field(h, name).and_then(FieldValue::as_instance)
}

pub(crate) fn text_field(arena: &InstanceArena, h: InstanceHandle, name: &str) -> Option<String> {
    arena
        .field(h, name)
        .and_then(FieldValue::as_value)
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Numeric values of an axis field with their unit. `None` when the field is
/// absent or holds anything but numbers.
pub(crate) fn axis_values(value: Option<&FieldValue>) -> Option<(Vec<f64>, Option<String>)> {
    match value? {
        FieldValue::Value(v) => {
            let n = v.as_f64()?;
            Some((vec![n], v.unit().map(str::to_owned)))
        }
        FieldValue::Column(c) => {
            let values = c
                .cells()
                .iter()
                .map(|cell| {
                    if cell.is_missing() {
                        Some(f64::NAN)
                    } else {
                        cell.as_f64()
                    }
                })
                .collect::<Option<Vec<f64>>>()?;
            Some((values, c.unit.clone()))
        }
        _ => None,
    }
}

/// Builds a [`SkyPosition`] from a `coords:Point`.
///
/// Returns `None` (keeping the generic instance only) when the frame cannot
/// be determined or the first two axes are not numeric.
pub fn sky_position(arena: &InstanceArena, point: InstanceHandle) -> Option<Representation> {
    let sys = instance_field(arena, point, "coordSys");
    let frame_h = sys.and_then(|s| instance_field(arena, s, "frame"));
    let Some(ref_frame) = frame_h.and_then(|f| text_field(arena, f, "spaceRefFrame")) else {
        tracing::warn!(handle = point.index(), "cannot determine reference frame");
        return None;
    };
    let equinox = frame_h.and_then(|f| text_field(arena, f, "equinox"));

    let ref_frame = ref_frame.to_ascii_lowercase();
    let (frame, equinox) = match (ref_frame.as_str(), equinox) {
        ("fk4", None) => (ref_frame, Some("B1950.0".to_owned())),
        ("fk5", None) => (ref_frame, Some("J2000.0".to_owned())),
        ("super_galactic", eq) => ("supergalactic".to_owned(), eq),
        (_, eq) => (ref_frame, eq),
    };

    let cartesian = sys
        .and_then(|s| instance_field(arena, s, "coordSpace"))
        .and_then(|space| arena.get(space))
        .is_some_and(|space| space.type_id() == CARTESIAN_COORD_SPACE);
    let layout = if cartesian {
        AxisLayout::Cartesian
    } else {
        AxisLayout::Spherical
    };

    let (axis1, unit) = axis_values(arena.field(point, "axis1"))?;
    let (axis2, _) = axis_values(arena.field(point, "axis2"))?;
    let axis3 = axis_values(arena.field(point, "axis3")).map(|(v, _)| v);

    Some(Arc::new(SkyPosition {
        frame,
        equinox,
        layout,
        axis1,
        axis2,
        axis3,
        unit,
    }))
}
