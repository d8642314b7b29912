//! JSON codec.
//!
//! Scalars map to JSON numbers and booleans, text to strings,
//! sequences / sets / tuples to arrays, maps / pairs / records to
//! objects and absent nullables to `null`. Enums travel as their
//! ordinal number. Map keys render as strings even when the map's key
//! type is an integer; [`decode`] parses them back.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;
use tracing::warn;
use triform_value::{CategoryMut, CategoryRef, Marshal, ScalarValue};

use crate::error::{Format, MarshalError};

/// Encodes `value` as compact JSON text.
///
/// # Examples
///
/// ```
/// use triform_codec::json;
///
/// assert_eq!(json::stringify(&vec![1_i32, 2, 3]), "[1,2,3]");
/// assert_eq!(json::stringify(&None::<i32>), "null");
/// ```
pub fn stringify<T: Marshal>(value: &T) -> String {
    encode(value).to_string()
}

/// Encodes `value` as indented JSON text.
pub fn stringify_pretty<T: Marshal>(value: &T) -> String {
    serde_json::to_string_pretty(&encode(value)).unwrap_or_default()
}

/// Decodes JSON text into a fresh `T`.
///
/// Returns [`MarshalError::Parse`] when `text` is not well formed.
/// Inside a well formed document the decode is best effort: members
/// that are missing, unknown or of the wrong shape are skipped and the
/// affected slots keep their default.
pub fn parse<T: Marshal + Default>(text: &str) -> Result<T, MarshalError> {
    let node: Value = serde_json::from_str(text).map_err(|err| {
        warn!(error = %err, "JSON parse failed");
        MarshalError::Parse {
            format: Format::Json,
            message: err.to_string(),
        }
    })?;
    let mut value = T::default();
    decode(&node, &mut value);
    Ok(value)
}

/// Writes `value` to `path` as indented JSON.
pub fn to_file<T: Marshal>(value: &T, path: impl AsRef<Path>) -> Result<(), MarshalError> {
    let file = fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &encode(value))
        .map_err(|err| MarshalError::Io(io::Error::other(err)))
}

/// Reads the file at `path` and decodes it like [`parse`].
pub fn from_file<T: Marshal + Default>(path: impl AsRef<Path>) -> Result<T, MarshalError> {
    let text = fs::read_to_string(path)
        .inspect_err(|err| warn!(error = %err, "cannot open JSON file"))?;
    parse(&text)
}

/// Encodes any marshalable value into a JSON tree.
pub fn encode(value: &dyn Marshal) -> Value {
    match value.category_ref() {
        CategoryRef::Scalar(slot) => match slot.get() {
            ScalarValue::Bool(v) => Value::Bool(v),
            ScalarValue::Int(v) => Value::from(v),
            ScalarValue::UInt(v) => Value::from(v),
            ScalarValue::Float(v) => serde_json::Number::from_f64(v)
                .map(Value::Number)
                .unwrap_or(Value::Null),
        },
        CategoryRef::Text(slot) => Value::String(slot.get().to_owned()),
        CategoryRef::Enum(slot) => Value::from(slot.ordinal()),
        CategoryRef::Nullable(slot) => slot.inner().map_or(Value::Null, encode),
        CategoryRef::Sequence(seq) => Value::Array(seq.iter().map(encode).collect()),
        CategoryRef::Set(set) => Value::Array(set.iter().map(encode).collect()),
        CategoryRef::Map(map) => {
            let mut object = serde_json::Map::new();
            for (key, entry) in map.iter() {
                object.insert(key, encode(entry));
            }
            Value::Object(object)
        }
        CategoryRef::Pair(pair) => {
            let mut object = serde_json::Map::new();
            object.insert("first".to_owned(), encode(pair.first()));
            object.insert("second".to_owned(), encode(pair.second()));
            Value::Object(object)
        }
        CategoryRef::Tuple(tuple) => Value::Array(
            (0..tuple.len())
                .filter_map(|index| tuple.slot(index))
                .map(encode)
                .collect(),
        ),
        CategoryRef::Sum(sum) => encode(sum.active()),
        CategoryRef::Record(record) => {
            let mut object = serde_json::Map::new();
            for name in record.schema().field_names {
                if let Some(field) = record.field(name) {
                    object.insert((*name).to_owned(), encode(field));
                }
            }
            Value::Object(object)
        }
    }
}

/// Decodes a JSON tree into `target`, best effort.
pub fn decode(node: &Value, target: &mut dyn Marshal) {
    match target.category_mut() {
        CategoryMut::Scalar(slot) => match node {
            Value::Bool(v) => slot.set(ScalarValue::Bool(*v)),
            Value::Number(number) => {
                if let Some(v) = number.as_i64() {
                    slot.set(ScalarValue::Int(v));
                } else if let Some(v) = number.as_u64() {
                    slot.set(ScalarValue::UInt(v));
                } else if let Some(v) = number.as_f64() {
                    slot.set(ScalarValue::Float(v));
                }
            }
            _ => {}
        },
        CategoryMut::Text(slot) => {
            if let Value::String(v) = node {
                slot.set(v);
            }
        }
        CategoryMut::Enum(slot) => {
            if let Some(ordinal) = node.as_i64() {
                if !slot.set_ordinal(ordinal) {
                    warn!(ordinal, "no enum variant with this ordinal");
                }
            }
        }
        CategoryMut::Nullable(slot) => {
            if node.is_null() {
                slot.clear();
            } else {
                slot.init_with(&mut |inner| decode(node, inner));
            }
        }
        CategoryMut::Sequence(seq) => {
            if let Value::Array(items) = node {
                seq.clear();
                for item in items {
                    seq.push_with(&mut |slot| decode(item, slot));
                }
            }
        }
        CategoryMut::Set(set) => {
            if let Value::Array(items) = node {
                set.clear();
                for item in items {
                    set.insert_with(&mut |slot| decode(item, slot));
                }
            }
        }
        CategoryMut::Map(map) => {
            if let Value::Object(entries) = node {
                map.clear();
                for (key, entry) in entries {
                    map.entry_with(key, &mut |slot| decode(entry, slot));
                }
            }
        }
        CategoryMut::Pair(pair) => {
            if let Value::Object(entries) = node {
                if let Some(member) = entries.get("first") {
                    decode(member, pair.first_mut());
                }
                if let Some(member) = entries.get("second") {
                    decode(member, pair.second_mut());
                }
            }
        }
        CategoryMut::Tuple(tuple) => {
            if let Value::Array(items) = node {
                for (index, item) in items.iter().enumerate() {
                    match tuple.slot_mut(index) {
                        Some(slot) => decode(item, slot),
                        None => break,
                    }
                }
            }
        }
        // Write-only: the encoded form carries no discriminant.
        CategoryMut::Sum(_) => {}
        CategoryMut::Record(record) => {
            if let Value::Object(entries) = node {
                for name in record.schema().field_names {
                    if let Some(member) = entries.get(*name) {
                        if let Some(field) = record.field_mut(name) {
                            decode(member, field);
                        }
                    }
                }
            }
        }
    }
}
