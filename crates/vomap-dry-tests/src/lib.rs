// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Shared test doubles and fixture documents for vomap crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`config`] - In-memory config store fake for testing without filesystem
//! - [`fixtures`] - Annotated sample documents
//! - [`reader`] - Registry and reader builders

pub mod config;
pub mod fixtures;
pub mod reader;

pub use config::InMemoryConfigStore;
pub use reader::{reader, registry, ReaderTestBuilder};
