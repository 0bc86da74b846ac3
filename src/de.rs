//! TOON deserialization.
//!
//! Deserialization runs in two stages, mirroring the serializer: [`crate::parser::decode`]
//! reads the whole input once into a [`Value`] tree, and [`Deserializer`] (backed by
//! [`ValueDeserializer`]) walks that tree to satisfy whatever `Deserialize` implementation the
//! caller asked for. There is exactly one TOON-text parser in the crate; this module never
//! re-implements indentation or header parsing.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_toon::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Data { x: i32, y: i32 }
//!
//! let toon = "x: 1\ny: 2";
//! let data: Data = from_str(toon).unwrap();
//! assert_eq!(data, Data { x: 1, y: 2 });
//! ```

use crate::options::DecodeOptions;
use crate::{Error, Result, ToonMap, Value};
use serde::de::IntoDeserializer;
use serde::{de, forward_to_deserialize_any};
use std::marker::PhantomData;

/// The TOON deserializer. Parses the whole input up front (via [`crate::parser::decode`]) and
/// then walks the resulting [`Value`] tree to satisfy `Deserialize` calls.
pub struct Deserializer<'de> {
    value: Value,
    _marker: PhantomData<&'de str>,
}

impl<'de> Deserializer<'de> {
    /// Parses `input` under default (lenient) decode options.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` is not syntactically valid TOON.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'de str) -> Result<Self> {
        Self::from_str_with_options(input, &DecodeOptions::default())
    }

    /// Parses `input` under the given decode options.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` is not syntactically valid TOON, or (in strict mode) if it
    /// violates one of the strict-mode invariants (see [`crate::error::Error`]).
    pub fn from_str_with_options(input: &'de str, options: &DecodeOptions) -> Result<Self> {
        let value = crate::parser::decode(input, options)?;
        Ok(Deserializer { value, _marker: PhantomData })
    }
}

impl<'de, 'a> de::Deserializer<'de> for &'a mut Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(std::mem::take(&mut self.value)).deserialize_any(visitor)
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(std::mem::take(&mut self.value)).deserialize_enum(name, variants, visitor)
    }

    fn deserialize_i64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(std::mem::take(&mut self.value)).deserialize_i64(visitor)
    }

    fn deserialize_u64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(std::mem::take(&mut self.value)).deserialize_u64(visitor)
    }

    fn deserialize_i128<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(std::mem::take(&mut self.value)).deserialize_i128(visitor)
    }

    fn deserialize_u128<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(std::mem::take(&mut self.value)).deserialize_u128(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        ValueDeserializer::new(std::mem::take(&mut self.value)).deserialize_option(visitor)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 u8 u16 u32 f32 f64 char str string
        bytes byte_buf unit unit_struct newtype_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Value>) -> Self {
        SeqDeserializer { iter: vec.into_iter() }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, Value>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(map: ToonMap) -> Self {
        MapDeserializer { iter: map.into_iter(), value: None }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(ValueDeserializer::new(Value::String(key))).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer {
    variant: String,
    value: Option<Value>,
}

impl EnumDeserializer {
    fn new(variant: String, value: Option<Value>) -> Self {
        EnumDeserializer { variant, value }
    }
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(self.variant.into_deserializer())?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Option<Value>,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Some(Value::Null) | None => Ok(()),
            _ => Err(Error::custom("expected a unit variant")),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.value {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("expected a newtype variant")),
        }
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Array(arr)) => visitor.visit_seq(SeqDeserializer::new(arr)),
            _ => Err(Error::custom("expected a tuple variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Object(obj)) => visitor.visit_map(MapDeserializer::new(obj)),
            _ => Err(Error::custom("expected a struct variant")),
        }
    }
}

/// Walks one already-parsed [`Value`] to satisfy a `Deserialize` call. This is where the tree
/// built by [`crate::parser::decode`] (or by [`crate::ser::to_toon_value`], for `to_value`
/// round-trips) is finally handed to serde's visitor protocol.
struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(f) if f.fract() == 0.0 && f.abs() <= crate::value::MAX_SAFE_INT as f64 => {
                visitor.visit_i64(f as i64)
            }
            Value::Number(f) => visitor.visit_f64(f),
            Value::String(s) => visitor.visit_string(s),
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
        }
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(s) => visitor.visit_enum(EnumDeserializer::new(s, None)),
            Value::Object(obj) if obj.len() == 1 => {
                let (variant, value) = obj.into_iter().next().expect("len checked above");
                visitor.visit_enum(EnumDeserializer::new(variant, Some(value)))
            }
            other => Err(Error::custom(format!(
                "expected a unit-variant string or a single-key object for an enum, found {:?}",
                other
            ))),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_none(),
            other => visitor.visit_some(ValueDeserializer::new(other)),
        }
    }

    // Integers wide enough to exceed the safe-integer range (`±2^53-1`) are written to the
    // wire as a quoted decimal string (see `Value::from_i128_normalized`). These four methods
    // are the read-side counterpart: parse that string back into the exact integer the caller
    // asked for instead of falling through to `deserialize_any`, which would only ever see a
    // string and reject it.
    fn deserialize_i64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Number(f) if f.fract() == 0.0 => visitor.visit_i64(f as i64),
            Value::String(s) => match s.parse::<i64>() {
                Ok(n) => visitor.visit_i64(n),
                Err(_) => ValueDeserializer::new(Value::String(s)).deserialize_any(visitor),
            },
            other => ValueDeserializer::new(other).deserialize_any(visitor),
        }
    }

    fn deserialize_u64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Number(f) if f.fract() == 0.0 && f >= 0.0 => visitor.visit_u64(f as u64),
            Value::String(s) => match s.parse::<u64>() {
                Ok(n) => visitor.visit_u64(n),
                Err(_) => ValueDeserializer::new(Value::String(s)).deserialize_any(visitor),
            },
            other => ValueDeserializer::new(other).deserialize_any(visitor),
        }
    }

    fn deserialize_i128<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Number(f) if f.fract() == 0.0 => visitor.visit_i128(f as i128),
            Value::String(s) => match s.parse::<i128>() {
                Ok(n) => visitor.visit_i128(n),
                Err(_) => ValueDeserializer::new(Value::String(s)).deserialize_any(visitor),
            },
            other => ValueDeserializer::new(other).deserialize_any(visitor),
        }
    }

    fn deserialize_u128<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Number(f) if f.fract() == 0.0 && f >= 0.0 => visitor.visit_u128(f as u128),
            Value::String(s) => match s.parse::<u128>() {
                Ok(n) => visitor.visit_u128(n),
                Err(_) => ValueDeserializer::new(Value::String(s)).deserialize_any(visitor),
            },
            other => ValueDeserializer::new(other).deserialize_any(visitor),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 u8 u16 u32 f32 f64 char str string
        bytes byte_buf unit unit_struct newtype_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}
