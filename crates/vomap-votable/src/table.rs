// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! TABLE and PARAM readers.
//!
//! Cells are decoded by their FIELD `datatype`. Only the inline `TABLEDATA`
//! serialization is read; other serializations yield an empty table and a
//! warning.

use vomap_core::{Column, Diagnostic, Table, Value};

use crate::document::{Document, ElementId};
use crate::vocab::{
    ARRAYSIZE_ATTR, DATA, DATATYPE_ATTR, FIELD, GENERATED_TABLE_ID_PREFIX, ID_ATTR, NAME_ATTR,
    TABLE, TABLEDATA, TD, TR, UNIT_ATTR,
};

/// Id a TABLE is stored under: its `ID`, or `_GENERATED_ID_<n>` where `n` is
/// its position among all TABLE elements.
pub fn table_id(doc: &Document, table: ElementId) -> String {
    if let Some(id) = doc.attr(table, ID_ATTR) {
        return id.to_owned();
    }
    let n = doc
        .elements_named(TABLE)
        .position(|t| t == table)
        .unwrap_or(0);
    format!("{GENERATED_TABLE_ID_PREFIX}{n}")
}

/// Reads a TABLE element. The second value is set when the data could not
/// be read.
pub fn read_table(doc: &Document, table: ElementId) -> (Table, Option<Diagnostic>) {
    let id = table_id(doc, table);
    let fields: Vec<ElementId> = doc.children_named(table, FIELD).collect();
    let mut cells: Vec<Vec<Value>> = vec![Vec::new(); fields.len()];
    let mut warning = None;

    if let Some(data) = doc.first_child(table, DATA) {
        if let Some(tabledata) = doc.first_child(data, TABLEDATA) {
            for tr in doc.children_named(tabledata, TR) {
                let tds: Vec<ElementId> = doc.children_named(tr, TD).collect();
                for (i, field) in fields.iter().enumerate() {
                    let text = tds.get(i).map_or("", |td| doc.text(*td));
                    cells[i].push(decode_cell(
                        doc.attr(*field, DATATYPE_ATTR),
                        doc.attr(*field, ARRAYSIZE_ATTR),
                        text,
                    ));
                }
            }
        } else {
            let found = doc.children(data).first().map_or("nothing", |e| doc.tag(*e));
            warning = Some(Diagnostic::MalformedValue {
                reference: id.clone(),
                detail: format!("unsupported table serialization {found}"),
            });
        }
    }

    let columns = fields
        .iter()
        .zip(cells)
        .enumerate()
        .map(|(i, (field, cells))| {
            let name = doc
                .attr(*field, NAME_ATTR)
                .map_or_else(|| format!("col{i}"), str::to_owned);
            let col_id = doc.attr(*field, ID_ATTR).map_or_else(|| name.clone(), str::to_owned);
            let mut column = Column::new(col_id, name, cells)
                .with_unit(doc.attr(*field, UNIT_ATTR).map(str::to_owned))
                .with_arraysize(doc.attr(*field, ARRAYSIZE_ATTR).map(str::to_owned));
            if let Some(datatype) = doc.attr(*field, DATATYPE_ATTR) {
                column = column.with_datatype(datatype);
            }
            column
        })
        .collect();

    let table = Table::new(id, doc.attr(table, NAME_ATTR).map(str::to_owned), columns);
    tracing::debug!(
        table = %table.id,
        rows = table.row_count(),
        columns = table.columns().len(),
        "table read"
    );
    (table, warning)
}

fn is_char(datatype: Option<&str>) -> bool {
    matches!(datatype, None | Some("char" | "unicodeChar"))
}

/// Decodes one TD by FIELD datatype and arraysize.
pub fn decode_cell(datatype: Option<&str>, arraysize: Option<&str>, text: &str) -> Value {
    let is_array = arraysize.is_some_and(|a| a != "1") && !is_char(datatype);
    if is_array {
        return Value::Array(
            text.split_whitespace()
                .map(|item| decode_scalar(datatype, item))
                .collect(),
        );
    }
    decode_scalar(datatype, text)
}

fn decode_scalar(datatype: Option<&str>, text: &str) -> Value {
    let text = text.trim();
    match datatype {
        Some("double" | "float") => {
            if text.is_empty() || text.eq_ignore_ascii_case("nan") {
                Value::Real(f64::NAN)
            } else {
                text.parse().map_or(Value::Real(f64::NAN), Value::Real)
            }
        }
        Some("short" | "int" | "long" | "unsignedByte") => {
            text.parse().map_or(Value::Missing, Value::Int)
        }
        Some("boolean") => match text {
            "T" | "t" | "1" => Value::Bool(true),
            "F" | "f" | "0" => Value::Bool(false),
            _ if text.eq_ignore_ascii_case("true") => Value::Bool(true),
            _ if text.eq_ignore_ascii_case("false") => Value::Bool(false),
            _ => Value::Missing,
        },
        _ => Value::Text(text.to_owned()),
    }
}
