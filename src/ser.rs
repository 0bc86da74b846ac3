//! TOON serialization.
//!
//! The serializer works in two stages, never duplicating the encoder's formatting rules:
//!
//! 1. [`ToonValueSerializer`] walks a `Serialize` implementor and builds a [`crate::Value`]
//!    tree — the same tree [`crate::parser::decode`] produces and the same tree the `toon!`
//!    macro builds by hand. This is the only place struct/seq/map/enum shapes get turned into
//!    `Value`.
//! 2. [`crate::encode::encode`] turns that tree into TOON text. Shape selection (tabular vs.
//!    inline vs. list), quoting, and indentation live there and only there.
//!
//! [`Serializer`] is a thin convenience wrapper pairing [`crate::options::EncodeOptions`] with
//! this two-stage pipeline, for callers who want an object to hold onto rather than threading
//! options through every call.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_toon::{to_string, to_string_with_options, EncodeOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { x: i32, y: i32 }
//!
//! let data = Data { x: 1, y: 2 };
//!
//! let compact = to_string(&data).unwrap();
//! let with_tabs = to_string_with_options(&data, EncodeOptions::new().with_indent(4)).unwrap();
//! ```

use crate::options::EncodeOptions;
use crate::{Error, Result, ToonMap, Value};
use serde::{ser, Serialize};

/// Pairs [`EncodeOptions`] with the serde bridge, for callers who want to reuse one
/// configuration across several values rather than passing options to every call.
pub struct Serializer {
    options: EncodeOptions,
}

impl Serializer {
    #[must_use]
    pub fn new(options: EncodeOptions) -> Self {
        Serializer { options }
    }

    /// Serializes `value` to TOON text under this serializer's options.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be represented in the `Value` domain (e.g. a map
    /// with non-string keys, or an unsupported enum shape).
    pub fn to_string<T>(&self, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        let tree = to_toon_value(value)?;
        Ok(crate::encode::encode(&tree, &self.options))
    }
}

/// A `serde::Serializer` whose `Ok` type is [`Value`] rather than text. Every `Serialize`
/// implementor passes through this once; the resulting tree is what [`crate::encode::encode`]
/// formats and what [`crate::parser::decode`] would reconstruct from the formatted text.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToonValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeTupleVariant {
    variant: &'static str,
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: ToonMap,
    current_key: Option<String>,
}

pub struct SerializeStructVariant {
    variant: &'static str,
    map: ToonMap,
}

impl ser::Serializer for ToonValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::from_i128_normalized(v as i128))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(Value::from_i128_normalized(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::from_u128_normalized(v as u128))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(Value::from_u128_normalized(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::from_f64_normalized(v as f64))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::from_f64_normalized(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        let vec = v.iter().map(|&b| Value::Number(b as f64)).collect();
        Ok(Value::Array(vec))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let mut map = ToonMap::new();
        map.insert(variant.to_string(), to_toon_value(value)?);
        Ok(Value::Object(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec {
            vec: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec { vec: Vec::with_capacity(len) })
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec { vec: Vec::with_capacity(len) })
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            variant,
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap {
            map: ToonMap::new(),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap {
            map: ToonMap::new(),
            current_key: None,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            variant,
            map: ToonMap::new(),
        })
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_toon_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_toon_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_toon_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_toon_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut map = ToonMap::new();
        map.insert(self.variant.to_string(), Value::Array(self.vec));
        Ok(Value::Object(map))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_toon_value(key)? {
            Value::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            other => {
                // Non-string map keys still need a textual key; stringify scalars the way
                // `§4.1` requires for non-string map sources, reject structural values.
                match other {
                    Value::Number(n) => {
                        self.current_key = Some(crate::quoting::format_number(n));
                        Ok(())
                    }
                    Value::Bool(b) => {
                        self.current_key = Some(b.to_string());
                        Ok(())
                    }
                    _ => Err(Error::custom("map keys must stringify to a scalar")),
                }
            }
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_toon_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_toon_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_toon_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut outer = ToonMap::new();
        outer.insert(self.variant.to_string(), Value::Object(self.map));
        Ok(Value::Object(outer))
    }
}

pub(crate) fn to_toon_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ToonValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    enum Shape {
        Unit,
        Newtype(i32),
        Tuple(i32, i32),
        Struct { x: i32, y: i32 },
    }

    #[test]
    fn unit_variant_serializes_as_bare_string() {
        assert_eq!(to_toon_value(&Shape::Unit).unwrap(), Value::String("Unit".to_string()));
    }

    #[test]
    fn newtype_variant_serializes_as_key_value() {
        let mut expected = ToonMap::new();
        expected.insert("Newtype".to_string(), Value::Number(5.0));
        assert_eq!(to_toon_value(&Shape::Newtype(5)).unwrap(), Value::Object(expected));
    }

    #[test]
    fn tuple_variant_serializes_as_nested_array() {
        let mut expected = ToonMap::new();
        expected.insert(
            "Tuple".to_string(),
            Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]),
        );
        assert_eq!(to_toon_value(&Shape::Tuple(1, 2)).unwrap(), Value::Object(expected));
    }

    #[test]
    fn struct_variant_serializes_as_nested_object() {
        let mut inner = ToonMap::new();
        inner.insert("x".to_string(), Value::Number(1.0));
        inner.insert("y".to_string(), Value::Number(2.0));
        let mut expected = ToonMap::new();
        expected.insert("Struct".to_string(), Value::Object(inner));
        assert_eq!(to_toon_value(&Shape::Struct { x: 1, y: 2 }).unwrap(), Value::Object(expected));
    }

    #[test]
    fn big_u64_stays_exact_as_number_within_safe_range() {
        assert_eq!(to_toon_value(&42u64).unwrap(), Value::Number(42.0));
    }

    #[test]
    fn serializer_to_string_uses_options() {
        use crate::options::Delimiter;
        let ser = Serializer::new(EncodeOptions::new().with_delimiter(Delimiter::Pipe));
        let out = ser.to_string(&vec!["a", "b"]).unwrap();
        assert_eq!(out, "[2|]: a|b");
    }
}
