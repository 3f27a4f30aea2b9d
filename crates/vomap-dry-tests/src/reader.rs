// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Registry and reader builders for tests.

use vomap_core::{MemoryTables, ReaderOptions, Table, TableProvider, TypeRegistry};
use vomap_votable::{Document, Reader};

/// Registry with every bundled model.
pub fn registry() -> anyhow::Result<TypeRegistry> {
    Ok(vomap_models::standard_registry()?)
}

/// Builder for readers over a fixture document.
///
/// # Example
///
/// ```
/// use vomap_dry_tests::{fixtures, registry, ReaderTestBuilder};
///
/// let registry = registry().unwrap();
/// let mut reader = ReaderTestBuilder::new(fixtures::SHARED_FRAME)
///     .strict()
///     .build(&registry)
///     .unwrap();
/// let coords = reader.find_instances("sample:catalog.SkyCoordinate").unwrap();
/// assert_eq!(coords.len(), 2);
/// ```
pub struct ReaderTestBuilder {
    xml: String,
    options: ReaderOptions,
    tables: Vec<(String, Table)>,
}

impl ReaderTestBuilder {
    /// Builder over `xml` with default options.
    pub fn new(xml: &str) -> Self {
        Self {
            xml: xml.to_owned(),
            options: ReaderOptions::default(),
            tables: Vec::new(),
        }
    }

    /// Replace the options wholesale.
    pub fn with_options(mut self, options: ReaderOptions) -> Self {
        self.options = options;
        self
    }

    /// Report required fields that resolve to nothing.
    pub fn strict(mut self) -> Self {
        self.options.enforce_min_occurs = true;
        self
    }

    /// Limit nested builds to `depth`.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = depth;
        self
    }

    /// Stop warning about roles tagged more than once.
    pub fn quiet_roles(mut self) -> Self {
        self.options.warn_on_ambiguous_role = false;
        self
    }

    /// Pre-load a table into the reader's table provider under `id`.
    ///
    /// Document tables with the same id are then never read.
    pub fn with_table(mut self, id: &str, table: Table) -> Self {
        self.tables.push((id.to_owned(), table));
        self
    }

    /// Options the reader will be built with.
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Parse the document and build the reader.
    pub fn build(self, registry: &TypeRegistry) -> anyhow::Result<Reader<'_>> {
        let document = Document::parse(&self.xml)?;
        if self.tables.is_empty() {
            return Ok(Reader::with_options(document, registry, self.options));
        }
        let mut tables = MemoryTables::new();
        for (id, table) in self.tables {
            tables.add_table(&id, table);
        }
        Ok(Reader::with_tables(
            document,
            registry,
            self.options,
            Box::new(tables),
        ))
    }
}

/// Reader over `xml` with default options.
pub fn reader<'r>(xml: &str, registry: &'r TypeRegistry) -> anyhow::Result<Reader<'r>> {
    ReaderTestBuilder::new(xml).build(registry)
}
