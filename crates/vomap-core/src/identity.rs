// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Structural identities and the per-parse identity cache.
//!
//! An [`Identity`] is an id string plus an optional primary-key matrix. The
//! cache buckets identities by a BLAKE3 digest (`blake3("identity:" || ...)`)
//! and confirms every hit with full equality, so reconstructed identities
//! find the instance built under an equal one.
use std::collections::HashMap;
use std::fmt;

use blake3::Hasher;

use crate::instance::InstanceHandle;
use crate::value::{canonical_eq, hash_str, Value};

/// One evaluated primary-key component.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyComponent {
    /// A literal or constant: the same value for every row.
    Scalar(Value),
    /// A column: one value per row.
    Column(Vec<Value>),
}

/// Row-major matrix of primary-key values (row = instance index).
#[derive(Debug, Clone)]
pub struct KeyMatrix {
    rows: Vec<Vec<Value>>,
    column_backed: bool,
}

impl KeyMatrix {
    /// Transposes per-component vectors into rows.
    ///
    /// Without column components the matrix has exactly one row. Otherwise
    /// the row count is the longest column; scalar components are repeated on
    /// every row and short columns are padded with [`Value::Missing`].
    pub fn from_components(components: &[KeyComponent]) -> Self {
        let longest = components
            .iter()
            .filter_map(|c| match c {
                KeyComponent::Column(cells) => Some(cells.len()),
                KeyComponent::Scalar(_) => None,
            })
            .max();
        let column_backed = longest.is_some();
        let row_count = longest.unwrap_or(1);
        let rows = (0..row_count)
            .map(|row| {
                components
                    .iter()
                    .map(|c| match c {
                        KeyComponent::Scalar(v) => v.clone(),
                        KeyComponent::Column(cells) => {
                            cells.get(row).cloned().unwrap_or(Value::Missing)
                        }
                    })
                    .collect()
            })
            .collect();
        Self {
            rows,
            column_backed,
        }
    }

    /// All key rows.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Key tuple of one row.
    pub fn row(&self, index: usize) -> Option<&[Value]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` for a matrix with no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether any component came from a column.
    pub fn is_column_backed(&self) -> bool {
        self.column_backed
    }

    fn hash_into(&self, hasher: &mut Hasher) {
        hasher.update(&(self.rows.len() as u64).to_le_bytes());
        for row in &self.rows {
            hasher.update(&(row.len() as u64).to_le_bytes());
            for value in row {
                value.hash_into(hasher);
            }
        }
    }
}

impl PartialEq for KeyMatrix {
    fn eq(&self, other: &Self) -> bool {
        rows_equal(&self.rows, &other.rows)
    }
}

/// Compares two key tuples under canonical value equality.
pub fn keys_equal(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| canonical_eq(x, y))
}

fn rows_equal(a: &[Vec<Value>], b: &[Vec<Value>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| keys_equal(x, y))
}

/// Structural identity of an instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    /// Explicit or synthesized id.
    pub id: String,
    /// Primary-key matrix, when the element declares one.
    pub keys: Option<KeyMatrix>,
}

impl Identity {
    /// Identity with no keys (what direct references look up).
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            keys: None,
        }
    }

    /// Identity with a primary-key matrix.
    pub fn with_keys(id: impl Into<String>, keys: KeyMatrix) -> Self {
        Self {
            id: id.into(),
            keys: Some(keys),
        }
    }

    /// Identity of row `row` of a vectorized instance: `"<id>[<row>]"` with
    /// that row's keys.
    pub fn row(&self, row: usize) -> Self {
        Self {
            id: format!("{}[{row}]", self.id),
            keys: self.keys.as_ref().map(|k| KeyMatrix {
                rows: k.row(row).map(<[Value]>::to_vec).into_iter().collect(),
                column_backed: false,
            }),
        }
    }

    /// Domain-separated BLAKE3 digest of the identity.
    pub fn digest(&self) -> IdentityHash {
        let mut hasher = Hasher::new();
        hasher.update(b"identity:");
        hash_str(&mut hasher, &self.id);
        match &self.keys {
            Some(keys) => {
                hasher.update(&[1]);
                keys.hash_into(&mut hasher);
            }
            None => {
                hasher.update(&[0]);
            }
        }
        IdentityHash(hasher.finalize().into())
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)?;
        if let Some(keys) = &self.keys {
            write!(f, " keys[{}]", keys.len())?;
        }
        Ok(())
    }
}

/// 32-byte digest of an [`Identity`].
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct IdentityHash(pub [u8; 32]);

impl IdentityHash {
    /// View the digest as bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for IdentityHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Maps identities to the instance built under them.
///
/// A miss is normal control flow. Scoped to one parse context.
#[derive(Debug, Default)]
pub struct IdentityCache {
    buckets: HashMap<IdentityHash, Vec<(Identity, InstanceHandle)>>,
    len: usize,
}

impl IdentityCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Instance built under an identity equal to `identity`.
    pub fn get(&self, identity: &Identity) -> Option<InstanceHandle> {
        self.buckets
            .get(&identity.digest())?
            .iter()
            .find(|(stored, _)| stored == identity)
            .map(|(_, h)| *h)
    }

    /// Returns `true` if an equal identity is cached.
    pub fn contains(&self, identity: &Identity) -> bool {
        self.get(identity).is_some()
    }

    /// Records `handle` under `identity`, returning the handle it replaced.
    pub fn put(&mut self, identity: Identity, handle: InstanceHandle) -> Option<InstanceHandle> {
        let bucket = self.buckets.entry(identity.digest()).or_default();
        if let Some(slot) = bucket.iter_mut().find(|(stored, _)| *stored == identity) {
            return Some(std::mem::replace(&mut slot.1, handle));
        }
        bucket.push((identity, handle));
        self.len += 1;
        None
    }

    /// Number of cached identities.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
