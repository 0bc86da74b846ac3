//! Dynamic value representation for TOON data.
//!
//! This module provides the [`Value`] enum, the six-case value domain every TOON document is
//! isomorphic to: null, bool, number, string, ordered array, ordered object. There is no
//! separate integer/float split at this layer and no date/bigint/table case — those are
//! host-language conveniences that normalize down to one of the six cases during serialization
//! (see [`crate::ser::to_toon_value`]).
//!
//! ## Usage Patterns
//!
//! ```rust
//! use serde_toon::{Value, toon};
//!
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//!
//! let obj = toon!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! ```
//!
//! ```rust
//! use serde_toon::Value;
//!
//! let value = Value::from(42);
//! assert!(value.is_number());
//! assert!(!value.is_string());
//! ```

use crate::ToonMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Safe-integer bound from the TOON normalization rule: integers whose magnitude exceeds
/// 2^53 - 1 cannot round-trip exactly through `f64` and normalize to their decimal string
/// instead of a `Number`.
pub const MAX_SAFE_INT: i128 = 9_007_199_254_740_991;

/// A dynamically-typed representation of any valid TOON value.
///
/// # Examples
///
/// ```rust
/// use serde_toon::Value;
///
/// let null = Value::Null;
/// let num = Value::Number(42.0);
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    /// Always a finite double. Non-finite inputs (`NaN`, `±∞`) normalize to [`Value::Null`],
    /// and `-0.0` normalizes to `0.0`, before a `Value::Number` is ever constructed.
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(ToonMap),
}

impl Value {
    /// Builds a `Number`, applying the float-normalization rule (non-finite -> left to the
    /// caller to route to `Null`; `-0.0` collapsed to `0.0`).
    #[must_use]
    pub fn from_f64_normalized(f: f64) -> Value {
        if !f.is_finite() {
            return Value::Null;
        }
        if f == 0.0 {
            Value::Number(0.0)
        } else {
            Value::Number(f)
        }
    }

    /// Normalizes a wide integer per the safe-integer rule: within ±(2^53 - 1) it becomes a
    /// `Number`, otherwise a `String` of its decimal form (exact precision, no float rounding).
    #[must_use]
    pub fn from_i128_normalized(i: i128) -> Value {
        if i.unsigned_abs() <= MAX_SAFE_INT as u128 {
            Value::Number(i as f64)
        } else {
            Value::String(i.to_string())
        }
    }

    /// Same as [`Value::from_i128_normalized`] for unsigned magnitudes beyond `i128`.
    #[must_use]
    pub fn from_u128_normalized(u: u128) -> Value {
        if u <= MAX_SAFE_INT as u128 {
            Value::Number(u as f64)
        } else {
            Value::String(u.to_string())
        }
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a number, returns it as `f64`. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is a whole-number `Number`, returns it as `i64`. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_toon::Value;
    ///
    /// assert_eq!(Value::Number(42.0).as_i64(), Some(42));
    /// assert_eq!(Value::Number(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(f) if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 => {
                Some(*f as i64)
            }
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&ToonMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", crate::quoting::format_number(*n)),
            Value::String(s) => write!(f, "{}", s),
            Value::Array(arr) => write!(
                f,
                "[{}]",
                arr.iter()
                    .map(std::string::ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",")
            ),
            Value::Object(_) => write!(f, "{{object}}"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid TOON value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::from_i128_normalized(value as i128))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::from_u128_normalized(value as u128))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::from_f64_normalized(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = ToonMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// TryFrom implementations for extracting values from Value
impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
                Ok(f as i64)
            }
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(f) => Ok(f),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

// From implementations for creating Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::from_i128_normalized(value as i128)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128);

macro_rules! impl_from_uint {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::from_u128_normalized(value as u128)
                }
            }
        )*
    };
}

impl_from_uint!(u8, u16, u32, u64, u128);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::from_f64_normalized(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::from_f64_normalized(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<ToonMap> for Value {
    fn from(value: ToonMap) -> Self {
        Value::Object(value)
    }
}
