// SPDX-License-Identifier: Apache-2.0
// © vomap contributors
//! Leaf values carried by attributes, table cells and identity keys.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A decoded leaf value.
///
/// `Missing` is the sentinel for values whose backing element could not be
/// found (or could not be decoded) and whose declared type has no natural
/// "not a number" representation. Numeric kinds use `NaN` instead; see
/// [`PrimitiveKind::missing`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Absent or undecodable value.
    Missing,
    /// `ivoa:boolean`.
    Bool(bool),
    /// `ivoa:integer` and friends.
    Int(i64),
    /// `ivoa:real`.
    Real(f64),
    /// Strings, URIs, units, datetimes and enumeration literals.
    Text(String),
    /// A number paired with an optional unit string.
    Quantity {
        /// Numeric magnitude.
        value: f64,
        /// Unit as written in the document (e.g. `"deg"`), if any.
        unit: Option<String>,
    },
    /// Multi-valued table cell (FIELD `arraysize` other than 1).
    Array(Vec<Value>),
}

impl Value {
    /// Returns `true` for the missing sentinel, including numeric `NaN`.
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Real(v) | Self::Quantity { value: v, .. } => v.is_nan(),
            _ => false,
        }
    }

    /// Numeric view of the value (reals, integers and quantities).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Real(v) | Self::Quantity { value: v, .. } => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Text view of the value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Unit of a quantity, if any.
    pub fn unit(&self) -> Option<&str> {
        match self {
            Self::Quantity { unit, .. } => unit.as_deref(),
            _ => None,
        }
    }

    /// Feeds a canonical, length-prefixed encoding into `hasher`.
    ///
    /// Used for identity digests: equal values always produce equal byte
    /// streams, and distinct variants never collide because each is tagged.
    pub fn hash_into(&self, hasher: &mut blake3::Hasher) {
        match self {
            Self::Missing => {
                hasher.update(&[0]);
            }
            Self::Bool(b) => {
                hasher.update(&[1, u8::from(*b)]);
            }
            Self::Int(v) => {
                hasher.update(&[2]);
                hasher.update(&v.to_le_bytes());
            }
            Self::Real(v) => {
                hasher.update(&[3]);
                hasher.update(&canonical_f64(*v).to_le_bytes());
            }
            Self::Text(s) => {
                hasher.update(&[4]);
                hash_str(hasher, s);
            }
            Self::Quantity { value, unit } => {
                hasher.update(&[5]);
                hasher.update(&canonical_f64(*value).to_le_bytes());
                match unit {
                    Some(u) => {
                        hasher.update(&[1]);
                        hash_str(hasher, u);
                    }
                    None => {
                        hasher.update(&[0]);
                    }
                }
            }
            Self::Array(items) => {
                hasher.update(&[6]);
                hasher.update(&(items.len() as u64).to_le_bytes());
                for item in items {
                    item.hash_into(hasher);
                }
            }
        }
    }
}

/// Equality under the hashing canonicalization: `NaN == NaN` and `-0.0 == 0.0`.
///
/// Key matrices compare with this so that equal digests imply equal identities.
pub fn canonical_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Real(x), Value::Real(y)) => canonical_f64(*x) == canonical_f64(*y),
        (
            Value::Quantity { value: x, unit: ux },
            Value::Quantity { value: y, unit: uy },
        ) => canonical_f64(*x) == canonical_f64(*y) && ux == uy,
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| canonical_eq(x, y))
        }
        _ => a == b,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("<missing>"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Quantity {
                value,
                unit: Some(unit),
            } => write!(f, "{value} {unit}"),
            Self::Quantity { value, unit: None } => write!(f, "{value}"),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

pub(crate) fn hash_str(hasher: &mut blake3::Hasher, s: &str) {
    hasher.update(&(s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}

/// All NaN payloads and both zeros hash alike.
fn canonical_f64(v: f64) -> u64 {
    if v.is_nan() {
        f64::NAN.to_bits()
    } else if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}

/// Built-in primitive value kinds a schema type may decode into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    /// Free text.
    String,
    /// URI, kept as text.
    AnyUri,
    /// Unit expression, kept as text.
    Unit,
    /// `true`/`false` (case-insensitive).
    Boolean,
    /// Signed integer.
    Integer,
    /// Integer that must be `>= 0`.
    NonNegativeInteger,
    /// Floating point.
    Real,
    /// Timestamp, kept as its ISO text.
    DateTime,
    /// Integer magnitude with unit, stored as a float quantity.
    IntegerQuantity,
    /// Real magnitude with unit.
    RealQuantity,
}

/// Error returned when text cannot be decoded as a primitive kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Text is not a valid number for the kind.
    #[error("invalid {kind:?} literal: {text:?}")]
    InvalidNumber {
        /// Expected kind.
        kind: PrimitiveKind,
        /// Offending text.
        text: String,
    },
    /// Text is not `true` or `false`.
    #[error("invalid boolean literal: {0:?}")]
    InvalidBoolean(String),
    /// A non-negative integer was negative.
    #[error("value must be non-negative: {0}")]
    Negative(i64),
}

impl PrimitiveKind {
    /// Decodes `text` (with optional `unit`) into a [`Value`].
    pub fn decode(self, text: &str, unit: Option<&str>) -> Result<Value, ValueError> {
        let trimmed = text.trim();
        match self {
            Self::String | Self::AnyUri | Self::Unit | Self::DateTime => {
                Ok(Value::Text(text.to_owned()))
            }
            Self::Boolean => match trimmed.to_ascii_lowercase().as_str() {
                "true" | "t" | "1" => Ok(Value::Bool(true)),
                "false" | "f" | "0" => Ok(Value::Bool(false)),
                _ => Err(ValueError::InvalidBoolean(text.to_owned())),
            },
            Self::Integer => parse_int(self, trimmed).map(Value::Int),
            Self::NonNegativeInteger => {
                let v = parse_int(self, trimmed)?;
                if v < 0 {
                    return Err(ValueError::Negative(v));
                }
                Ok(Value::Int(v))
            }
            Self::Real => parse_real(self, trimmed).map(Value::Real),
            Self::IntegerQuantity => {
                let v = parse_int(self, trimmed)?;
                Ok(Value::Quantity {
                    value: v as f64,
                    unit: unit.map(str::to_owned),
                })
            }
            Self::RealQuantity => Ok(Value::Quantity {
                value: parse_real(self, trimmed)?,
                unit: unit.map(str::to_owned),
            }),
        }
    }

    /// The "missing" sentinel appropriate to this kind.
    pub fn missing(self) -> Value {
        match self {
            Self::Real => Value::Real(f64::NAN),
            Self::IntegerQuantity | Self::RealQuantity => Value::Quantity {
                value: f64::NAN,
                unit: None,
            },
            _ => Value::Missing,
        }
    }
}

fn parse_int(kind: PrimitiveKind, text: &str) -> Result<i64, ValueError> {
    text.parse::<i64>().map_err(|_| ValueError::InvalidNumber {
        kind,
        text: text.to_owned(),
    })
}

fn parse_real(kind: PrimitiveKind, text: &str) -> Result<f64, ValueError> {
    // Document writers emit both `NaN` and `nan`.
    if text.eq_ignore_ascii_case("nan") {
        return Ok(f64::NAN);
    }
    text.parse::<f64>().map_err(|_| ValueError::InvalidNumber {
        kind,
        text: text.to_owned(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decode_quantities_keep_unit() {
        let v = PrimitiveKind::RealQuantity.decode("15.718", Some("mag")).unwrap();
        assert_eq!(v.as_f64(), Some(15.718));
        assert_eq!(v.unit(), Some("mag"));

        let v = PrimitiveKind::IntegerQuantity.decode("7", None).unwrap();
        assert_eq!(
            v,
            Value::Quantity {
                value: 7.0,
                unit: None
            }
        );
    }

    #[test]
    fn decode_rejects_bad_numbers_and_negative_counts() {
        assert!(matches!(
            PrimitiveKind::Real.decode("abc", None),
            Err(ValueError::InvalidNumber { .. })
        ));
        assert_eq!(
            PrimitiveKind::NonNegativeInteger.decode("-3", None),
            Err(ValueError::Negative(-3))
        );
        assert_eq!(
            PrimitiveKind::Boolean.decode("TRUE", None),
            Ok(Value::Bool(true))
        );
    }

    #[test]
    fn missing_sentinel_depends_on_kind() {
        assert!(PrimitiveKind::Real.missing().is_missing());
        assert!(matches!(PrimitiveKind::Real.missing(), Value::Real(v) if v.is_nan()));
        assert_eq!(PrimitiveKind::String.missing(), Value::Missing);
    }

    #[test]
    fn canonical_hash_ignores_nan_payload_and_zero_sign() {
        let digest = |v: &Value| {
            let mut h = blake3::Hasher::new();
            v.hash_into(&mut h);
            h.finalize()
        };
        assert_eq!(digest(&Value::Real(0.0)), digest(&Value::Real(-0.0)));
        assert_eq!(
            digest(&Value::Real(f64::NAN)),
            digest(&Value::Real(-f64::NAN))
        );
        assert_ne!(digest(&Value::Int(1)), digest(&Value::Real(1.0)));
    }
}
