// SPDX-License-Identifier: Apache-2.0
// © vomap contributors

#![allow(missing_docs)]
//! Literal, constant and column values, and their degraded forms.
use vomap_core::{Diagnostic, FieldValue, InstanceHandle, Value};
use vomap_dry_tests::{fixtures, reader, registry};
use vomap_models::sample;
use vomap_votable::Reader;

fn value<'a>(reader: &'a Reader<'_>, h: InstanceHandle, name: &str) -> Option<&'a Value> {
    reader.field(h, name).and_then(FieldValue::as_value)
}

#[test]
fn primitive_literals_decode_by_declared_type() -> anyhow::Result<()> {
    let registry = registry()?;
    let mut reader = reader(fixtures::VALUES, &registry)?;
    let all = reader.find_instances(sample::BASE_TYPE_ELEMENTS)?[0];

    assert_eq!(value(&reader, all, "sval"), Some(&Value::Text("some text".into())));
    assert_eq!(value(&reader, all, "unit"), Some(&Value::Text("km/s".into())));
    assert_eq!(
        value(&reader, all, "link"),
        Some(&Value::Text("http://example.org/vo".into()))
    );
    assert_eq!(value(&reader, all, "qval"), Some(&Value::Bool(true)));
    assert_eq!(
        value(&reader, all, "tval"),
        Some(&Value::Text("2011-06-20T16:45:00".into()))
    );
    assert_eq!(value(&reader, all, "ival"), Some(&Value::Int(-7)));
    assert_eq!(value(&reader, all, "wval"), Some(&Value::Int(12)));
    assert_eq!(
        value(&reader, all, "iqty"),
        Some(&Value::Quantity {
            value: 3.0,
            unit: Some("m".into())
        })
    );
    Ok(())
}

#[test]
fn constants_read_their_param() -> anyhow::Result<()> {
    let registry = registry()?;
    let mut reader = reader(fixtures::VALUES, &registry)?;
    // Build only the well-formed element; its sibling is broken on purpose.
    let elements = reader.find_elements(sample::BASE_TYPE_ELEMENTS)?;
    assert_eq!(elements.len(), 2);
    let all = reader.build(elements[0])?;

    assert_eq!(value(&reader, all, "rval"), Some(&Value::Real(1.75)));
    // The PARAM unit rides along on quantity constants.
    assert_eq!(
        value(&reader, all, "rqty"),
        Some(&Value::Quantity {
            value: 42.5,
            unit: Some("pc".into())
        })
    );
    assert!(reader.diagnostics().is_empty());
    Ok(())
}

#[test]
fn undecodable_values_become_sentinels_with_warnings() -> anyhow::Result<()> {
    let registry = registry()?;
    let mut reader = reader(fixtures::VALUES, &registry)?;
    let broken = reader.find_instances(sample::BASE_TYPE_ELEMENTS)?[1];

    assert_eq!(value(&reader, broken, "ival"), Some(&Value::Missing));
    assert_eq!(value(&reader, broken, "wval"), Some(&Value::Missing));
    assert!(value(&reader, broken, "rval").is_some_and(Value::is_missing));
    assert!(value(&reader, broken, "rqty").is_some_and(Value::is_missing));
    // Untagged fields are simply null.
    assert_eq!(reader.field(broken, "sval"), Some(&FieldValue::Null));

    let malformed: Vec<&str> = reader
        .diagnostics()
        .iter()
        .filter_map(|d| match d {
            Diagnostic::MalformedValue { reference, .. } => Some(reference.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(malformed, ["twelve", "-1", "_no_such_param", "_no_such_field"]);
    assert_eq!(reader.diagnostics().len(), 4);
    Ok(())
}

#[test]
fn multi_valued_attributes_keep_literal_then_constant_order() -> anyhow::Result<()> {
    let registry = registry()?;
    let mut reader = reader(fixtures::VALUES, &registry)?;
    let objs = reader.find_instances(sample::MULTI_OBJ)?;
    assert_eq!(objs.len(), 2);

    assert_eq!(value(&reader, objs[0], "a"), Some(&Value::Real(1.5)));
    assert_eq!(
        reader.field(objs[0], "b"),
        Some(&FieldValue::List(vec![
            FieldValue::Value(Value::Real(2.5)),
            FieldValue::Value(Value::Real(1.75)),
        ]))
    );

    // Absent fields: null when single-valued, empty list otherwise.
    assert_eq!(reader.field(objs[1], "a"), Some(&FieldValue::Null));
    assert_eq!(reader.field(objs[1], "b"), Some(&FieldValue::List(Vec::new())));
    Ok(())
}

#[test]
fn column_attributes_carry_the_field_unit() -> anyhow::Result<()> {
    let registry = registry()?;
    let mut reader = reader(fixtures::POSITIONS, &registry)?;
    let pos = reader.find_instances(sample::SKY_COORDINATE)?[0];

    let lon = reader
        .field(pos, "longitude")
        .and_then(FieldValue::as_column)
        .ok_or_else(|| anyhow::anyhow!("longitude is column-backed"))?;
    assert_eq!(lon.len(), 3);
    assert_eq!(lon.unit.as_deref(), Some("deg"));
    assert_eq!(
        lon.cell(1),
        Some(&Value::Quantity {
            value: 150.9319,
            unit: Some("deg".into())
        })
    );
    Ok(())
}
