// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! [`Timestamps`]: the adapter output for `coords:JD`, `coords:MJD` and
//! `coords:ISOTime`.
//!
//! `coords:TimeOffset` has no absolute-time counterpart and stays generic.

use std::sync::Arc;

use vomap_core::{FieldValue, InstanceArena, InstanceHandle, Representation, Value};

use crate::coords::{self, axis_values, instance_field, text_field};

/// Stand-in for an empty or missing ISO date.
pub const FAR_FUTURE: &str = "9999-12-31T23:59:59.999999";

/// Scale assumed when a time coordinate has no coordinate system.
pub const DEFAULT_SCALE: &str = "tt";

/// How [`Timestamps::values`] are to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    /// Julian date.
    Jd,
    /// Modified Julian date.
    Mjd,
    /// ISO 8601 / FITS date-time strings.
    Fits,
}

/// The instants themselves, one per row.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeValues {
    /// Day counts for [`TimeFormat::Jd`] and [`TimeFormat::Mjd`]. Missing
    /// cells are `NaN`.
    Days(Vec<f64>),
    /// Date-time strings for [`TimeFormat::Fits`]. Missing cells are
    /// [`FAR_FUTURE`].
    Iso(Vec<String>),
}

impl TimeValues {
    /// Number of instants.
    pub fn len(&self) -> usize {
        match self {
            Self::Days(d) => d.len(),
            Self::Iso(s) => s.len(),
        }
    }

    /// Returns `true` when there are no instants.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Time instants in a known format and (usually) a known scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Timestamps {
    /// Representation of [`Self::values`].
    pub format: TimeFormat,
    /// Lower-cased time scale (`tt`, `utc`, `tdb`, ...). [`DEFAULT_SCALE`]
    /// without a coordinate system; `None` when the system names no
    /// timescale.
    pub scale: Option<String>,
    /// The instants.
    pub values: TimeValues,
}

fn iso_text(v: &Value) -> String {
    match v.as_str() {
        Some(s) if !s.trim().is_empty() => s.to_owned(),
        _ => FAR_FUTURE.to_owned(),
    }
}

fn iso_values(value: Option<&FieldValue>) -> Option<Vec<String>> {
    match value? {
        FieldValue::Value(v) => Some(vec![iso_text(v)]),
        FieldValue::Column(c) => Some(c.cells().iter().map(iso_text).collect()),
        _ => None,
    }
}

/// Timescale from `coordSys.frame.timescale`.
fn scale_of(arena: &InstanceArena, time: InstanceHandle) -> Option<String> {
    let Some(sys) = instance_field(arena, time, "coordSys") else {
        return Some(DEFAULT_SCALE.to_owned());
    };
    let frame = instance_field(arena, sys, "frame")?;
    text_field(arena, frame, "timescale").map(|s| s.to_ascii_lowercase())
}

/// Builds [`Timestamps`] from a JD, MJD or ISO time coordinate.
///
/// Returns `None` for other time stamps and when the `date` field holds
/// neither a value nor a column of the expected kind.
pub fn timestamps(arena: &InstanceArena, time: InstanceHandle) -> Option<Representation> {
    let type_id = arena.get(time)?.type_id().to_owned();
    let date = arena.field(time, "date");
    let (format, values) = match type_id.as_str() {
        coords::JD => (TimeFormat::Jd, TimeValues::Days(axis_values(date)?.0)),
        coords::MJD => (TimeFormat::Mjd, TimeValues::Days(axis_values(date)?.0)),
        coords::ISO_TIME => (TimeFormat::Fits, TimeValues::Iso(iso_values(date)?)),
        other => {
            tracing::warn!(handle = time.index(), type_id = other, "no time format");
            return None;
        }
    };
    Some(Arc::new(Timestamps {
        format,
        scale: scale_of(arena, time),
        values,
    }))
}
