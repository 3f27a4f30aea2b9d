// SPDX-License-Identifier: Apache-2.0
// © vomap contributors

#![allow(missing_docs)]
//! Column-backed templates: unroll, foreign keys and external batches.
use vomap_core::{Column, FieldValue, Instance, InstanceHandle, Table, TableProvider, Value};
use vomap_dry_tests::{fixtures, reader, registry, ReaderTestBuilder};
use vomap_models::{photdm, sample};
use vomap_votable::Reader;

fn instance(reader: &Reader<'_>, h: InstanceHandle, name: &str) -> Option<InstanceHandle> {
    reader.field(h, name).and_then(FieldValue::as_instance)
}

fn quantity(reader: &Reader<'_>, h: InstanceHandle, name: &str) -> Option<f64> {
    reader
        .field(h, name)
        .and_then(FieldValue::as_value)
        .and_then(Value::as_f64)
}

#[test]
fn template_unrolls_one_instance_per_row() -> anyhow::Result<()> {
    let registry = registry()?;
    let mut reader = reader(fixtures::POSITIONS, &registry)?;

    let pos = reader.find_instances(sample::SKY_COORDINATE)?;
    assert_eq!(pos.len(), 1);
    assert!(reader.is_template(pos[0]));
    assert_eq!(reader.cardinality(pos[0]), 3);

    let rows = reader.unroll(pos[0]);
    assert_eq!(rows.len(), 3);
    let lons: Vec<Option<f64>> = rows.iter().map(|r| quantity(&reader, *r, "longitude")).collect();
    assert_eq!(lons, [Some(123.0337), Some(150.9319), Some(200.5)]);
    assert_eq!(quantity(&reader, rows[2], "latitude"), Some(45.25));

    // Scalar references are shared by every row.
    let frame = instance(&reader, pos[0], "frame");
    assert!(frame.is_some());
    for row in &rows {
        assert!(!reader.is_template(*row));
        assert_eq!(reader.cardinality(*row), 0);
        assert_eq!(instance(&reader, *row, "frame"), frame);
        assert_eq!(
            reader.instance(*row).and_then(Instance::origin).map(|(t, _)| t),
            Some(pos[0])
        );
    }

    // Unroll is stable.
    assert_eq!(reader.unroll(pos[0]), rows);
    Ok(())
}

#[test]
fn scalar_instances_unroll_to_nothing() -> anyhow::Result<()> {
    let registry = registry()?;
    let mut reader = reader(fixtures::SHARED_FRAME, &registry)?;
    let coords = reader.find_instances(sample::SKY_COORDINATE)?;
    assert!(!reader.is_template(coords[0]));
    assert!(reader.unroll(coords[0]).is_empty());
    Ok(())
}

#[test]
fn foreign_keys_resolve_per_row() -> anyhow::Result<()> {
    let registry = registry()?;
    let mut reader = reader(fixtures::CATALOG, &registry)?;

    let lums = reader.find_instances(sample::LUMINOSITY_MEASUREMENT)?;
    assert_eq!(lums.len(), 1);
    assert_eq!(reader.cardinality(lums[0]), 3);
    let filters = reader
        .field(lums[0], "filter")
        .and_then(FieldValue::as_rows)
        .map(<[Option<InstanceHandle>]>::to_vec)
        .ok_or_else(|| anyhow::anyhow!("column-backed key resolves per row"))?;
    assert_eq!(filters.len(), 3);
    assert!(filters.iter().all(Option::is_some));
    assert_eq!(filters[0], filters[2]);
    assert_ne!(filters[0], filters[1]);

    let known = reader.find_instances(photdm::PHOTOMETRY_FILTER)?;
    assert_eq!(known.len(), 2);
    assert_eq!(filters[0], Some(known[0]));
    assert_eq!(filters[1], Some(known[1]));

    let rows = reader.unroll(lums[0]);
    let bands: Vec<Option<Value>> = rows
        .iter()
        .map(|r| {
            instance(&reader, *r, "filter")
                .and_then(|f| reader.field(f, "bandName"))
                .and_then(FieldValue::as_value)
                .cloned()
        })
        .collect();
    let text = |s: &str| Some(Value::Text(s.to_owned()));
    assert_eq!(bands, [text("H"), text("K"), text("H")]);
    Ok(())
}

#[test]
fn external_batches_group_under_their_sources() -> anyhow::Result<()> {
    let registry = registry()?;
    let mut reader = reader(fixtures::CATALOG, &registry)?;

    let sources = reader.find_instances(sample::SOURCE)?;
    assert!(sources.is_empty(), "SDSSSource is not a Source subtype");
    let sources = reader.find_instances(sample::ABSTRACT_SOURCE)?;
    assert_eq!(sources.len(), 1);
    let source = sources[0];
    assert_eq!(reader.cardinality(source), 2);

    let lums = reader.find_instances(sample::LUMINOSITY_MEASUREMENT)?;
    let members = reader.unroll(lums[0]);
    let (l0, l1, l2) = (members[0], members[1], members[2]);

    // Slice n holds the n-th luminosity of every source, padded with None.
    assert_eq!(
        reader.field(source, "luminosity"),
        Some(&FieldValue::List(vec![
            FieldValue::Rows(vec![Some(l0), Some(l2)]),
            FieldValue::Rows(vec![Some(l1), None]),
        ]))
    );

    let rows = reader.unroll(source);
    assert_eq!(rows.len(), 2);
    assert_eq!(
        reader.field(rows[0], "luminosity"),
        Some(&FieldValue::List(vec![
            FieldValue::Instance(l0),
            FieldValue::Instance(l1),
        ]))
    );
    assert_eq!(
        reader.field(rows[1], "luminosity"),
        Some(&FieldValue::List(vec![FieldValue::Instance(l2), FieldValue::Null]))
    );

    // Nested column-backed attributes unroll with their owner.
    let position = instance(&reader, rows[1], "position")
        .ok_or_else(|| anyhow::anyhow!("row position is scalar"))?;
    assert_eq!(quantity(&reader, position, "longitude"), Some(150.9319));
    assert_eq!(
        reader.field(rows[1], "name"),
        Some(&FieldValue::Value(Value::Text("10034365-3138252".into())))
    );
    assert!(reader.diagnostics().is_empty(), "{:?}", reader.diagnostics());
    Ok(())
}

#[test]
fn row_identities_carry_their_key() -> anyhow::Result<()> {
    let registry = registry()?;
    let mut reader = reader(fixtures::CATALOG, &registry)?;
    let source = reader.find_instances(sample::SDSS_SOURCE)?[0];
    let rows = reader.unroll(source);

    let identity = reader
        .instance(rows[0])
        .map(|i| i.identity().clone())
        .ok_or_else(|| anyhow::anyhow!("row not in arena"))?;
    assert_eq!(identity.id, "_source[0]");
    let key = identity.keys.as_ref().and_then(|k| k.row(0)).map(<[Value]>::to_vec);
    assert_eq!(key, Some(vec![Value::Text("08120809-0206132".into())]));
    Ok(())
}

#[test]
fn provider_tables_are_matched_by_field_name() -> anyhow::Result<()> {
    let registry = registry()?;
    // Columns known only by name; the document's FIELD ids must be remapped.
    let table = Table::new(
        "_positions",
        Some("positions".into()),
        vec![
            Column::new("ra", "ra", vec![Value::Real(1.0), Value::Real(2.0)])
                .with_unit(Some("deg".into())),
            Column::new("dec", "dec", vec![Value::Real(-1.0), Value::Real(-2.0)])
                .with_unit(Some("deg".into())),
        ],
    );
    let mut reader = ReaderTestBuilder::new(fixtures::POSITIONS)
        .with_table("_positions", table)
        .build(&registry)?;

    let pos = reader.find_instances(sample::SKY_COORDINATE)?[0];
    assert_eq!(reader.cardinality(pos), 2);
    let rows = reader.unroll(pos);
    assert_eq!(quantity(&reader, rows[1], "longitude"), Some(2.0));
    assert_eq!(quantity(&reader, rows[1], "latitude"), Some(-2.0));
    assert_eq!(reader.context().tables().get_column_mapping("_ra"), "ra");
    Ok(())
}

#[test]
fn scalar_batch_templates_contribute_nothing() -> anyhow::Result<()> {
    let registry = registry()?;
    let mut reader = reader(fixtures::SCALAR_BATCH, &registry)?;

    let source = reader.find_instances(sample::SOURCE)?[0];
    assert_eq!(reader.field(source, "luminosity"), Some(&FieldValue::List(Vec::new())));
    assert_eq!(reader.cardinality(source), 0);

    // The named instance itself is still built and reachable.
    let lums = reader.find_instances(sample::LUMINOSITY_MEASUREMENT)?;
    assert_eq!(lums.len(), 1);
    assert!(!reader.is_template(lums[0]));
    assert_eq!(quantity(&reader, lums[0], "value"), Some(15.5));
    assert!(reader.diagnostics().is_empty());
    Ok(())
}
