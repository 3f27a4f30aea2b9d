// SPDX-License-Identifier: Apache-2.0
// © vomap contributors

#![allow(missing_docs)]
//! Direct references: identity convergence, dangling ids and photometry roles.
use vomap_core::{Diagnostic, FieldValue, SchemaError, Value};
use vomap_dry_tests::{fixtures, reader, registry};
use vomap_models::{photdm, sample};
use vomap_votable::ReadError;

#[test]
fn references_to_one_id_converge_on_one_instance() -> anyhow::Result<()> {
    let registry = registry()?;
    let mut reader = reader(fixtures::SHARED_FRAME, &registry)?;

    let coords = reader.find_instances(sample::SKY_COORDINATE)?;
    assert_eq!(coords.len(), 2);
    let frame_of = |h| reader.field(h, "frame").and_then(FieldValue::as_instance);
    let f1 = frame_of(coords[0]).ok_or_else(|| anyhow::anyhow!("c1 has no frame"))?;
    assert_eq!(frame_of(coords[1]), Some(f1));

    // Asking for frames afterwards hands back the instance already built.
    let frames = reader.find_instances(sample::SKY_COORDINATE_FRAME)?;
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0], f1);
    assert_ne!(frames[1], f1);
    assert_eq!(reader.instances().len(), 4);

    let name = reader.field(f1, "name").and_then(FieldValue::as_value);
    assert_eq!(name, Some(&Value::Text("ICRS".into())));
    assert!(reader.diagnostics().is_empty());
    Ok(())
}

#[test]
fn repeated_queries_return_identical_handles() -> anyhow::Result<()> {
    let registry = registry()?;
    let mut reader = reader(fixtures::SHARED_FRAME, &registry)?;
    let first = reader.find_instances(sample::SKY_COORDINATE)?;
    let built = reader.instances().len();
    let second = reader.find_instances(sample::SKY_COORDINATE)?;
    assert_eq!(first, second);
    assert_eq!(reader.instances().len(), built);
    Ok(())
}

#[test]
fn dangling_idref_is_null_with_one_warning() -> anyhow::Result<()> {
    let registry = registry()?;
    let mut reader = reader(fixtures::DANGLING_FRAME, &registry)?;

    let coords = reader.find_instances(sample::SKY_COORDINATE)?;
    assert_eq!(coords.len(), 2);
    assert_eq!(reader.field(coords[0], "frame"), Some(&FieldValue::Null));
    assert!(reader
        .field(coords[1], "frame")
        .and_then(FieldValue::as_instance)
        .is_some());

    assert_eq!(
        reader.diagnostics().as_slice(),
        [Diagnostic::DanglingReference {
            id: "no-such-frame".into()
        }]
    );
    Ok(())
}

#[test]
fn unknown_type_is_an_error() -> anyhow::Result<()> {
    let registry = registry()?;
    let mut reader = reader(fixtures::SHARED_FRAME, &registry)?;
    let result = reader.find_instances("nope:Thing");
    assert!(matches!(
        result,
        Err(ReadError::Schema(SchemaError::UnknownType(ref id))) if id == "nope:Thing"
    ));
    Ok(())
}

#[test]
fn supertype_queries_find_subclass_instances() -> anyhow::Result<()> {
    let registry = registry()?;
    let mut reader = reader(fixtures::PHOTOMETRY, &registry)?;

    let zero_points = reader.find_instances(photdm::ZERO_POINT)?;
    assert_eq!(zero_points.len(), 1);
    let zp = reader
        .instance(zero_points[0])
        .ok_or_else(|| anyhow::anyhow!("zero point not in arena"))?;
    assert_eq!(zp.type_id(), photdm::POGSON_ZERO_POINT);
    let flux = zp.field("flux").and_then(FieldValue::as_value);
    assert_eq!(flux.and_then(Value::as_f64), Some(1594.0));
    assert_eq!(flux.and_then(Value::unit), Some("Jy"));
    Ok(())
}

#[test]
fn bare_roles_resolve_compositions_and_references() -> anyhow::Result<()> {
    let registry = registry()?;
    let mut reader = reader(fixtures::PHOTOMETRY, &registry)?;

    let cal = reader.find_instances(photdm::PHOT_CAL)?;
    assert_eq!(cal.len(), 1);
    let filter = reader
        .field(cal[0], "photometryFilter")
        .and_then(FieldValue::as_instance)
        .ok_or_else(|| anyhow::anyhow!("calibration has no filter"))?;
    assert!(reader
        .field(cal[0], "zeroPoint")
        .and_then(FieldValue::as_instance)
        .is_some());
    assert_eq!(reader.field(cal[0], "magnitudeSystem"), Some(&FieldValue::Null));

    let systems = reader.find_instances(photdm::PHOTOMETRIC_SYSTEM)?;
    let members = reader
        .field(systems[0], "photometryFilter")
        .and_then(FieldValue::as_list)
        .ok_or_else(|| anyhow::anyhow!("filters are a list"))?;
    assert_eq!(members.len(), 2);
    // The referenced filter is the composed one, not a copy.
    assert_eq!(members[0], FieldValue::Instance(filter));
    let band = reader.field(filter, "bandName").and_then(FieldValue::as_value);
    assert_eq!(band, Some(&Value::Text("J".into())));
    assert_eq!(
        reader.field(systems[0], "detectorType"),
        Some(&FieldValue::Value(Value::Int(1)))
    );
    Ok(())
}

#[test]
fn malformed_document_is_rejected() -> anyhow::Result<()> {
    let registry = registry()?;
    assert!(reader("<VOTABLE><VODML>", &registry).is_err());
    Ok(())
}

#[test]
fn reference_cycles_close_on_instances_under_construction() -> anyhow::Result<()> {
    let registry = registry()?;
    let mut reader = reader(fixtures::CYCLES, &registry)?;

    let coords = reader.find_instances(sample::SKY_COORDINATE)?;
    assert_eq!(coords.len(), 3);
    let (own, ping, pong) = (coords[0], coords[1], coords[2]);
    let frame_of = |h| reader.field(h, "frame").and_then(FieldValue::as_instance);
    assert_eq!(frame_of(own), Some(own));
    assert_eq!(frame_of(ping), Some(pong));
    assert_eq!(frame_of(pong), Some(ping));
    assert_eq!(reader.instances().len(), 3);
    assert!(reader.diagnostics().is_empty());
    Ok(())
}

#[test]
fn schema_errors_drop_only_the_nested_element() -> anyhow::Result<()> {
    let registry = registry()?;
    let mut reader = reader(fixtures::NESTED_SCHEMA_ERRORS, &registry)?;

    let sources = reader.find_instances(sample::SOURCE)?;
    assert_eq!(sources.len(), 1);
    let source = sources[0];
    assert_eq!(reader.field(source, "position"), Some(&FieldValue::Null));
    assert_eq!(reader.field(source, "positionError"), Some(&FieldValue::Null));
    assert_eq!(
        reader.field(source, "name"),
        Some(&FieldValue::Value(Value::Text("ok".into())))
    );
    assert_eq!(
        reader.field(source, "classification"),
        Some(&FieldValue::Value(Value::Text("star".into())))
    );
    assert_eq!(
        reader.diagnostics().as_slice(),
        [
            Diagnostic::SkippedElement {
                error: SchemaError::UnknownType("nope:Thing".into()),
            },
            Diagnostic::SkippedElement {
                error: SchemaError::MissingTypeTag {
                    tag: "INSTANCE".into(),
                },
            },
        ]
    );
    Ok(())
}
