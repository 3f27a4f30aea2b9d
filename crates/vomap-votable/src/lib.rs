// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Annotated VOTable reader for vomap.
//!
//! A [`Document`] is the owned element tree of one VOTable carrying model
//! annotations (`INSTANCE`, `ATTRIBUTE`, `COMPOSITION`, `REFERENCE`, ...).
//! The [`Materializer`] walks it against a [`vomap_core::TypeRegistry`] and
//! fills an instance arena; [`Reader`] wraps both for callers.
//!
//! ```no_run
//! # fn demo(registry: &vomap_core::TypeRegistry) -> Result<(), vomap_votable::ReadError> {
//! let mut reader = vomap_votable::Reader::open("catalog.xml", registry)?;
//! for source in reader.find_instances("sample:catalog.Source")? {
//!     let rows = reader.unroll(source);
//!     println!("{} rows", rows.len());
//! }
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::multiple_crate_versions
)]

mod context;
pub mod document;
mod engine;
mod fields;
mod identity;
mod reader;
mod references;
pub mod table;
mod values;
pub mod vocab;

pub use context::ParseContext;
pub use document::{Document, DocumentError, ElementId};
pub use engine::Materializer;
pub use reader::{ReadError, Reader};
pub use table::{decode_cell, read_table, table_id};
