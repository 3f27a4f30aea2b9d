// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Error taxonomy for one parse.
//!
//! [`SchemaError`] is the only condition that aborts an element. Everything
//! else is a [`Diagnostic`] collected on the parse context; the affected field
//! degrades to null or to the missing sentinel.

use thiserror::Error;

/// Fatal for the element being built; siblings are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// An `INSTANCE` element has no `dmtype`.
    #[error("[SCHEMA_MISSING_TYPE] <{tag}> carries no type tag")]
    MissingTypeTag {
        /// Local name of the offending element.
        tag: String,
    },
    /// The type tag is not registered.
    #[error("[SCHEMA_UNKNOWN_TYPE] unknown type id {0}")]
    UnknownType(String),
    /// The type tag names a primitive where a class is required.
    #[error("[SCHEMA_NOT_A_CLASS] type id {0} is not a class")]
    NotAClass(String),
    /// Nested builds went deeper than the configured limit.
    #[error("[SCHEMA_DEPTH_EXCEEDED] building {type_id} exceeded depth {limit}")]
    DepthExceeded {
        /// Type being built when the limit was hit.
        type_id: String,
        /// Configured limit.
        limit: usize,
    },
}

/// Non-fatal condition observed while materializing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// A reference or external batch names an id no element carries.
    #[error("dangling reference {id}")]
    DanglingReference {
        /// The unresolved id.
        id: String,
    },
    /// More than one element matched a role; the first one won.
    #[error("{matches} <{tag}> elements with dmrole = {role}")]
    AmbiguousRole {
        /// Role searched for.
        role: String,
        /// Element tag searched for.
        tag: String,
        /// Number of matches.
        matches: usize,
    },
    /// A literal, constant or column could not be read or decoded.
    #[error("malformed value {reference}: {detail}")]
    MalformedValue {
        /// Reference or text of the offending value.
        reference: String,
        /// What went wrong.
        detail: String,
    },
    /// A field with `min >= 1` resolved to nothing (strict reporting only).
    #[error("{type_id}.{field} is required but resolved to nothing")]
    MissingRequiredField {
        /// Owning class.
        type_id: String,
        /// Field name.
        field: String,
    },
    /// An element was dropped because of a [`SchemaError`].
    #[error("skipped element: {error}")]
    SkippedElement {
        /// Why it was skipped.
        error: SchemaError,
    },
}

/// Warnings collected during one parse, in the order they were raised.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning and logs it.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(%diagnostic, "parse warning");
        self.items.push(diagnostic);
    }

    /// Iterates warnings in the order they were raised.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Number of warnings.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing was raised.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Warnings as a slice.
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_codes_and_context() {
        let err = SchemaError::UnknownType("x:Y".into());
        assert_eq!(err.to_string(), "[SCHEMA_UNKNOWN_TYPE] unknown type id x:Y");
        let d = Diagnostic::SkippedElement { error: err };
        assert!(d.to_string().contains("x:Y"));
    }

    #[test]
    fn push_keeps_order() {
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic::DanglingReference { id: "a".into() });
        diags.push(Diagnostic::DanglingReference { id: "b".into() });
        let ids: Vec<_> = diags
            .iter()
            .map(|d| match d {
                Diagnostic::DanglingReference { id } => id.as_str(),
                _ => "",
            })
            .collect();
        assert_eq!(ids, ["a", "b"]);
    }
}
