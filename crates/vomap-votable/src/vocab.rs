// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Tag and attribute names of the annotated VOTable grammar.
//!
//! Matched against local names; namespaces are ignored.

/// Instance element.
pub const INSTANCE: &str = "INSTANCE";
/// Container of global (scalar) instances.
pub const GLOBALS: &str = "GLOBALS";
/// Container of column-backed template instances.
pub const TEMPLATES: &str = "TEMPLATES";
/// Attribute field.
pub const ATTRIBUTE: &str = "ATTRIBUTE";
/// Composition field.
pub const COMPOSITION: &str = "COMPOSITION";
/// Reference field.
pub const REFERENCE: &str = "REFERENCE";
/// Inline value.
pub const LITERAL: &str = "LITERAL";
/// Value taken from a `PARAM`.
pub const CONSTANT: &str = "CONSTANT";
/// Values taken from a table `FIELD`.
pub const COLUMN: &str = "COLUMN";
/// Primary-key declaration.
pub const PRIMARYKEY: &str = "PRIMARYKEY";
/// One primary-key component.
pub const PKFIELD: &str = "PKFIELD";
/// Direct reference by id.
pub const IDREF: &str = "IDREF";
/// Row-join reference.
pub const FOREIGNKEY: &str = "FOREIGNKEY";
/// Id of the collection a foreign key points into.
pub const TARGETID: &str = "TARGETID";
/// External batch of instances (id of a template instance).
pub const EXTINSTANCES: &str = "EXTINSTANCES";
/// Back-link of a template to its parent collection.
pub const CONTAINER: &str = "CONTAINER";

/// Table element.
pub const TABLE: &str = "TABLE";
/// Table column declaration.
pub const FIELD: &str = "FIELD";
/// Standalone parameter.
pub const PARAM: &str = "PARAM";
/// Table data wrapper.
pub const DATA: &str = "DATA";
/// Inline table serialization.
pub const TABLEDATA: &str = "TABLEDATA";
/// Table row.
pub const TR: &str = "TR";
/// Table cell.
pub const TD: &str = "TD";

/// Element id attribute.
pub const ID_ATTR: &str = "ID";
/// Type tag attribute.
pub const TYPE_ATTR: &str = "dmtype";
/// Role tag attribute.
pub const ROLE_ATTR: &str = "dmrole";
/// Reference attribute of `CONSTANT`/`COLUMN`.
pub const REF_ATTR: &str = "ref";
/// Value attribute of `LITERAL`/`PARAM`.
pub const VALUE_ATTR: &str = "value";
/// Unit attribute.
pub const UNIT_ATTR: &str = "unit";
/// Name attribute of `TABLE`/`FIELD`/`PARAM`.
pub const NAME_ATTR: &str = "name";
/// Datatype attribute of `FIELD`/`PARAM`.
pub const DATATYPE_ATTR: &str = "datatype";
/// Array size attribute of `FIELD`/`PARAM`.
pub const ARRAYSIZE_ATTR: &str = "arraysize";

/// Prefix of ids given to tables without an `ID`.
pub const GENERATED_TABLE_ID_PREFIX: &str = "_GENERATED_ID_";
