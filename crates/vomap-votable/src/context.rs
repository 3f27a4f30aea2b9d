// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! State owned by one parse.

use vomap_core::{
    Diagnostics, IdentityCache, InstanceArena, MemoryTables, ReaderOptions, TableProvider,
};

/// Everything one parse mutates: built instances, the identity cache, the
/// table provider (with its column remapping) and collected warnings.
///
/// Nothing here outlives the parse or is shared between parses.
pub struct ParseContext {
    pub(crate) arena: InstanceArena,
    pub(crate) cache: IdentityCache,
    pub(crate) tables: Box<dyn TableProvider>,
    pub(crate) diagnostics: Diagnostics,
    pub(crate) options: ReaderOptions,
    pub(crate) depth: usize,
}

impl ParseContext {
    /// Fresh context over an in-memory table provider.
    pub fn new(options: ReaderOptions) -> Self {
        Self::with_tables(options, Box::new(MemoryTables::new()))
    }

    /// Fresh context over a caller-supplied table provider.
    pub fn with_tables(options: ReaderOptions, tables: Box<dyn TableProvider>) -> Self {
        Self {
            arena: InstanceArena::new(),
            cache: IdentityCache::new(),
            tables,
            diagnostics: Diagnostics::new(),
            options,
            depth: 0,
        }
    }

    /// Instances built so far.
    pub fn arena(&self) -> &InstanceArena {
        &self.arena
    }

    /// Identity cache.
    pub fn cache(&self) -> &IdentityCache {
        &self.cache
    }

    /// Warnings collected so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Options in effect.
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Table provider.
    pub fn tables(&self) -> &dyn TableProvider {
        self.tables.as_ref()
    }
}

impl std::fmt::Debug for ParseContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParseContext")
            .field("instances", &self.arena.len())
            .field("cached", &self.cache.len())
            .field("diagnostics", &self.diagnostics.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
