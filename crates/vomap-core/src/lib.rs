// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Core model for vomap: schema descriptors, the instance arena, structural
//! identities, foreign-key grouping, unroll and the columnar data seam.
//!
//! Nothing in this crate knows about documents. `vomap-votable` walks an
//! annotated document and drives these types; `vomap-models` fills a
//! [`TypeRegistry`] with concrete classes.
//!
//! # Vectorized instances
//!
//! An instance with cardinality `N > 0` stands for `N` table rows at once.
//! [`InstanceArena::unroll`] transposes it into `N` scalar instances. Scalar
//! instances (cardinality 0) unroll to an empty list.
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
    clippy::use_self,
    clippy::cast_precision_loss,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod diagnostics;
pub mod identity;
pub mod instance;
pub mod join;
pub mod schema;
pub mod tables;
pub mod value;

pub use config::{ConfigError, ConfigService, ConfigStore, ReaderOptions};
pub use diagnostics::{Diagnostic, Diagnostics, SchemaError};
pub use identity::{keys_equal, Identity, IdentityCache, IdentityHash, KeyComponent, KeyMatrix};
pub use instance::{Field, FieldValue, Instance, InstanceArena, InstanceHandle};
pub use join::group_by_keys;
pub use schema::{
    Adapter, ClassDescriptor, FieldDescriptor, FieldKind, Multiplicity, PrimitiveDescriptor,
    RegistryError, Representation, TypeRef, TypeRegistry, TypeRegistryBuilder,
};
pub use tables::{Column, MemoryTables, Table, TableProvider};
pub use value::{PrimitiveKind, Value, ValueError};
