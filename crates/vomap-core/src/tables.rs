// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Columnar data seam.
//!
//! The engine reads column data through [`TableProvider`] and never assumes
//! how tables are stored. [`MemoryTables`] is the provider used for one parse
//! context; absence of a table or mapping is not an error.

use std::collections::HashMap;
use std::sync::Arc;

use crate::value::Value;

/// One column of a table: FIELD metadata plus decoded cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// FIELD `ID` (or the name when the FIELD has no ID).
    pub id: String,
    /// FIELD `name`.
    pub name: String,
    /// FIELD `datatype`, if declared.
    pub datatype: Option<String>,
    /// FIELD `unit`, if declared.
    pub unit: Option<String>,
    /// FIELD `arraysize`, if declared.
    pub arraysize: Option<String>,
    cells: Vec<Value>,
}

impl Column {
    /// Creates a column with no metadata beyond its id and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>, cells: Vec<Value>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            datatype: None,
            unit: None,
            arraysize: None,
            cells,
        }
    }

    /// Sets the declared datatype.
    pub fn with_datatype(mut self, datatype: impl Into<String>) -> Self {
        self.datatype = Some(datatype.into());
        self
    }

    /// Sets the unit.
    pub fn with_unit(mut self, unit: Option<String>) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the array size.
    pub fn with_arraysize(mut self, arraysize: Option<String>) -> Self {
        self.arraysize = arraysize;
        self
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` for a column with no rows.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `row`.
    pub fn cell(&self, row: usize) -> Option<&Value> {
        self.cells.get(row)
    }

    /// All cells in row order.
    pub fn cells(&self) -> &[Value] {
        &self.cells
    }

    /// Cells with the column unit attached to numeric values.
    ///
    /// Used when a column stands in for a quantity-typed attribute.
    pub fn quantities(&self) -> Vec<Value> {
        self.cells
            .iter()
            .map(|v| match (v, &self.unit) {
                (Value::Real(x), unit) => Value::Quantity {
                    value: *x,
                    unit: unit.clone(),
                },
                (Value::Int(x), unit) => Value::Quantity {
                    value: *x as f64,
                    unit: unit.clone(),
                },
                (other, _) => other.clone(),
            })
            .collect()
    }
}

/// A decoded table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Table id (document `ID` or a generated one).
    pub id: String,
    /// Table `name`, if declared.
    pub name: Option<String>,
    columns: Vec<Arc<Column>>,
    rows: usize,
}

impl Table {
    /// Creates a table. The row count is the longest column.
    pub fn new(id: impl Into<String>, name: Option<String>, columns: Vec<Column>) -> Self {
        let rows = columns.iter().map(Column::len).max().unwrap_or(0);
        Self {
            id: id.into(),
            name,
            columns: columns.into_iter().map(Arc::new).collect(),
            rows,
        }
    }

    /// Looks a column up by FIELD id first, then by name.
    pub fn column(&self, reference: &str) -> Option<&Arc<Column>> {
        self.columns
            .iter()
            .find(|c| c.id == reference)
            .or_else(|| self.columns.iter().find(|c| c.name == reference))
    }

    /// Columns in FIELD order.
    pub fn columns(&self) -> &[Arc<Column>] {
        &self.columns
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows
    }
}

/// Opaque provider of named tables plus the id→column remapping cache.
pub trait TableProvider {
    /// Table stored under `table_id`, if any.
    fn get_table_by_id(&self, table_id: &str) -> Option<Arc<Table>>;

    /// Stores `table` under `table_id`, returning the shared handle.
    fn add_table(&mut self, table_id: &str, table: Table) -> Arc<Table>;

    /// Column name a reference resolves to. Defaults to the reference itself.
    fn get_column_mapping(&self, reference: &str) -> String {
        reference.to_owned()
    }

    /// Records that `reference` must be looked up as `name`.
    fn add_column_mapping(&mut self, reference: &str, name: &str);
}

/// In-memory [`TableProvider`] scoped to one parse context.
#[derive(Debug, Default)]
pub struct MemoryTables {
    tables: HashMap<String, Arc<Table>>,
    mappings: HashMap<String, String>,
}

impl MemoryTables {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns `true` if no tables are stored.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl TableProvider for MemoryTables {
    fn get_table_by_id(&self, table_id: &str) -> Option<Arc<Table>> {
        self.tables.get(table_id).cloned()
    }

    fn add_table(&mut self, table_id: &str, table: Table) -> Arc<Table> {
        let table = Arc::new(table);
        self.tables.insert(table_id.to_owned(), Arc::clone(&table));
        table
    }

    fn get_column_mapping(&self, reference: &str) -> String {
        self.mappings
            .get(reference)
            .cloned()
            .unwrap_or_else(|| reference.to_owned())
    }

    fn add_column_mapping(&mut self, reference: &str, name: &str) {
        self.mappings.insert(reference.to_owned(), name.to_owned());
    }
}
