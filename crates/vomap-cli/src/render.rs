// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Plain-text rendering of instances and diagnostics.

use std::io::{self, Write};

use vomap_core::{Diagnostics, FieldValue, InstanceHandle};
use vomap_votable::Reader;

/// One-line rendering of a field value. Nested instances print as `#<handle>`.
pub fn field_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Null => "null".to_owned(),
        FieldValue::Value(v) => v.to_string(),
        FieldValue::Column(c) => format!("column {} [{} rows]", c.name, c.len()),
        FieldValue::Instance(h) => format!("#{}", h.index()),
        FieldValue::Rows(rows) => {
            let cells: Vec<String> = rows
                .iter()
                .map(|r| r.map_or_else(|| "-".to_owned(), |h| format!("#{}", h.index())))
                .collect();
            format!("rows[{}]", cells.join(", "))
        }
        FieldValue::List(items) => {
            let items: Vec<String> = items.iter().map(field_value).collect();
            format!("[{}]", items.join(", "))
        }
    }
}

/// Writes the header line (handle, type, identity, cardinality, template
/// flag) and one line per field of `handle`.
pub fn instance(
    out: &mut impl Write,
    reader: &Reader<'_>,
    handle: InstanceHandle,
    indent: usize,
) -> io::Result<()> {
    let pad = " ".repeat(indent);
    let Some(inst) = reader.instance(handle) else {
        return writeln!(out, "{pad}#{} <unknown>", handle.index());
    };
    write!(
        out,
        "{pad}#{} {} ({}) rows={}",
        handle.index(),
        inst.type_id(),
        inst.identity(),
        inst.cardinality()
    )?;
    if inst.is_template() {
        write!(out, " template")?;
    }
    if inst.representation().is_some() {
        write!(out, " +adapter")?;
    }
    writeln!(out)?;
    for (name, field) in inst.fields() {
        writeln!(out, "{pad}  {name}: {}", field_value(&field.value))?;
    }
    Ok(())
}

/// Writes the warning count followed by one line per warning.
pub fn diagnostics(out: &mut impl Write, diagnostics: &Diagnostics) -> io::Result<()> {
    writeln!(out, "warnings: {}", diagnostics.len())?;
    for d in diagnostics {
        writeln!(out, "  - {d}")?;
    }
    Ok(())
}
