//! INI codec.
//!
//! INI is flat: one section, string keys, string values. The top-level
//! value decides the key layout of its section:
//!
//! * leaves sit under the single key `value`
//! * sequences / sets / tuples use `item0`, `item1`, ...
//! * maps use their rendered keys, records their field names, pairs
//!   `first` / `second`
//!
//! Values one level down must flatten to a single string. Nested
//! sequences and sets comma-join their leaves and split back on
//! decode, so text members containing commas will not survive the
//! trip. Deeper shapes (maps, records, pairs, tuples, sums) cannot be
//! flattened at all and degrade to an opaque placeholder; on decode a
//! placeholder clears a map and leaves everything else at its default.

use std::path::Path;

use ::ini::{Ini, Properties};
use tracing::warn;
use triform_value::{CategoryMut, CategoryRef, Marshal};

use crate::error::{Format, MarshalError};
use crate::scalar_text;

/// Encodes `value` as an INI document holding the single section
/// `section`.
///
/// # Examples
///
/// ```
/// use triform_codec::ini;
///
/// let text = ini::stringify(&42_i32, "n");
/// assert_eq!(ini::parse::<i32>(&text, "n").unwrap(), 42);
/// ```
pub fn stringify<T: Marshal>(value: &T, section: &str) -> String {
    let mut document = Ini::new();
    encode_section(
        value,
        document
            .entry(Some(section.to_owned()))
            .or_insert_with(Properties::new),
    );
    let mut buffer = Vec::new();
    if let Err(err) = document.write_to(&mut buffer) {
        warn!(error = %err, "INI write failed");
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Decodes the section `section` of an INI document.
///
/// Returns [`MarshalError::Parse`] for malformed text and
/// [`MarshalError::MissingSection`] when the section is absent.
/// Inside the section the decode is best effort, like the JSON
/// codec's.
pub fn parse<T: Marshal + Default>(text: &str, section: &str) -> Result<T, MarshalError> {
    let document = Ini::load_from_str(text).map_err(|err| {
        warn!(error = %err, "INI parse failed");
        MarshalError::Parse {
            format: Format::Ini,
            message: err.to_string(),
        }
    })?;
    decode_document(&document, section)
}

/// Writes `value` to `path` as an INI document holding `section`.
pub fn to_file<T: Marshal>(
    value: &T,
    path: impl AsRef<Path>,
    section: &str,
) -> Result<(), MarshalError> {
    let mut document = Ini::new();
    encode_section(
        value,
        document
            .entry(Some(section.to_owned()))
            .or_insert_with(Properties::new),
    );
    Ok(document.write_to_file(path)?)
}

/// Reads the file at `path` and decodes it like [`parse`].
pub fn from_file<T: Marshal + Default>(
    path: impl AsRef<Path>,
    section: &str,
) -> Result<T, MarshalError> {
    let document = Ini::load_from_file(path).map_err(|err| match err {
        ::ini::Error::Io(err) => {
            warn!(error = %err, "cannot open INI file");
            MarshalError::Io(err)
        }
        ::ini::Error::Parse(err) => {
            warn!(error = %err, "INI parse failed");
            MarshalError::Parse {
                format: Format::Ini,
                message: err.to_string(),
            }
        }
    })?;
    decode_document(&document, section)
}

fn decode_document<T: Marshal + Default>(
    document: &Ini,
    section: &str,
) -> Result<T, MarshalError> {
    let Some(properties) = document.section(Some(section)) else {
        warn!(section, "INI section not found");
        return Err(MarshalError::MissingSection {
            name: section.to_owned(),
        });
    };
    let mut value = T::default();
    decode_section(properties, &mut value);
    Ok(value)
}

/// Encodes any marshalable value into the keys of `section`.
pub fn encode_section(value: &dyn Marshal, section: &mut Properties) {
    match value.category_ref() {
        CategoryRef::Scalar(slot) => section.insert("value", slot.get().to_string()),
        CategoryRef::Text(slot) => section.insert("value", slot.get()),
        CategoryRef::Enum(slot) => section.insert("value", slot.ordinal().to_string()),
        CategoryRef::Nullable(slot) => {
            if let Some(inner) = slot.inner() {
                encode_section(inner, section);
            }
        }
        CategoryRef::Sequence(seq) => {
            for (index, item) in seq.iter().enumerate() {
                section.insert(format!("item{index}"), flatten(item));
            }
        }
        CategoryRef::Set(set) => {
            for (index, member) in set.iter().enumerate() {
                section.insert(format!("item{index}"), flatten(member));
            }
        }
        CategoryRef::Map(map) => {
            for (key, entry) in map.iter() {
                section.insert(key, flatten(entry));
            }
        }
        CategoryRef::Pair(pair) => {
            section.insert("first", flatten(pair.first()));
            section.insert("second", flatten(pair.second()));
        }
        CategoryRef::Tuple(tuple) => {
            for index in 0..tuple.len() {
                if let Some(slot) = tuple.slot(index) {
                    section.insert(format!("item{index}"), flatten(slot));
                }
            }
        }
        // No key layout can carry a bare alternative unambiguously.
        CategoryRef::Sum(_) => {}
        CategoryRef::Record(record) => {
            for name in record.schema().field_names {
                if let Some(field) = record.field(name) {
                    section.insert(*name, flatten(field));
                }
            }
        }
    }
}

/// Renders a nested value as a single key value.
fn flatten(value: &dyn Marshal) -> String {
    match value.category_ref() {
        CategoryRef::Scalar(slot) => slot.get().to_string(),
        CategoryRef::Text(slot) => slot.get().to_owned(),
        CategoryRef::Enum(slot) => slot.ordinal().to_string(),
        CategoryRef::Nullable(slot) => slot.inner().map(flatten).unwrap_or_default(),
        CategoryRef::Sequence(seq) => seq.iter().map(flatten).collect::<Vec<_>>().join(","),
        CategoryRef::Set(set) => set.iter().map(flatten).collect::<Vec<_>>().join(","),
        CategoryRef::Map(_) => "Map(...)".to_owned(),
        CategoryRef::Pair(_) => "Pair(...)".to_owned(),
        CategoryRef::Tuple(_) => "Tuple(...)".to_owned(),
        CategoryRef::Sum(_) => "Sum(...)".to_owned(),
        CategoryRef::Record(_) => "Record(...)".to_owned(),
    }
}

/// Decodes the keys of `section` into `target`, best effort.
pub fn decode_section(section: &Properties, target: &mut dyn Marshal) {
    match target.category_mut() {
        CategoryMut::Scalar(slot) => {
            if let Some(text) = section.get("value") {
                scalar_text::decode_scalar(slot, text);
            }
        }
        CategoryMut::Text(slot) => {
            if let Some(text) = section.get("value") {
                slot.set(text);
            }
        }
        CategoryMut::Enum(slot) => {
            if let Some(text) = section.get("value") {
                if let Ok(ordinal) = text.trim().parse::<i64>() {
                    if !slot.set_ordinal(ordinal) {
                        warn!(ordinal, "no enum variant with this ordinal");
                    }
                }
            }
        }
        CategoryMut::Nullable(slot) => {
            if section.iter().next().is_none() {
                slot.clear();
            } else {
                slot.init_with(&mut |inner| decode_section(section, inner));
            }
        }
        CategoryMut::Sequence(seq) => {
            seq.clear();
            let mut index = 0;
            while let Some(text) = section.get(format!("item{index}")) {
                seq.push_with(&mut |slot| unflatten(text, slot));
                index += 1;
            }
        }
        CategoryMut::Set(set) => {
            set.clear();
            let mut index = 0;
            while let Some(text) = section.get(format!("item{index}")) {
                set.insert_with(&mut |slot| unflatten(text, slot));
                index += 1;
            }
        }
        CategoryMut::Map(map) => {
            map.clear();
            for (key, text) in section.iter() {
                map.entry_with(key, &mut |slot| unflatten(text, slot));
            }
        }
        CategoryMut::Pair(pair) => {
            if let Some(text) = section.get("first") {
                unflatten(text, pair.first_mut());
            }
            if let Some(text) = section.get("second") {
                unflatten(text, pair.second_mut());
            }
        }
        CategoryMut::Tuple(tuple) => {
            let mut index = 0;
            while let Some(text) = section.get(format!("item{index}")) {
                match tuple.slot_mut(index) {
                    Some(slot) => unflatten(text, slot),
                    None => break,
                }
                index += 1;
            }
        }
        // Write-only: the encoded form carries no discriminant.
        CategoryMut::Sum(_) => {}
        CategoryMut::Record(record) => {
            for name in record.schema().field_names {
                if let Some(text) = section.get(*name) {
                    if let Some(field) = record.field_mut(name) {
                        unflatten(text, field);
                    }
                }
            }
        }
    }
}

/// Rebuilds a nested value from a flattened key value, as far as the
/// flat form allows.
fn unflatten(text: &str, target: &mut dyn Marshal) {
    match target.category_mut() {
        CategoryMut::Scalar(slot) => scalar_text::decode_scalar(slot, text),
        CategoryMut::Text(slot) => slot.set(text),
        CategoryMut::Enum(slot) => {
            if let Ok(ordinal) = text.trim().parse::<i64>() {
                if !slot.set_ordinal(ordinal) {
                    warn!(ordinal, "no enum variant with this ordinal");
                }
            }
        }
        CategoryMut::Nullable(slot) => {
            if text.is_empty() {
                slot.clear();
            } else {
                slot.init_with(&mut |inner| unflatten(text, inner));
            }
        }
        CategoryMut::Sequence(seq) => {
            seq.clear();
            if !text.is_empty() {
                for part in text.split(',') {
                    seq.push_with(&mut |slot| unflatten(part, slot));
                }
            }
        }
        CategoryMut::Set(set) => {
            set.clear();
            if !text.is_empty() {
                for part in text.split(',') {
                    set.insert_with(&mut |slot| unflatten(part, slot));
                }
            }
        }
        // The flat form kept no entries to rebuild.
        CategoryMut::Map(map) => map.clear(),
        CategoryMut::Pair(_)
        | CategoryMut::Tuple(_)
        | CategoryMut::Sum(_)
        | CategoryMut::Record(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{parse, stringify};

    #[test]
    fn scalar_sits_under_the_value_key() {
        let text = stringify(&42_i32, "n");
        assert!(text.contains("value=42"));
        assert_eq!(parse::<i32>(&text, "n").unwrap(), 42);
    }

    #[test]
    fn map_keys_become_section_keys() {
        let map = BTreeMap::from([("a".to_owned(), 1_i32), ("b".to_owned(), 2)]);
        let text = stringify(&map, "m");
        assert!(text.contains("[m]"));
        assert!(text.contains("a=1"));
        assert_eq!(parse::<BTreeMap<String, i32>>(&text, "m").unwrap(), map);
    }

    #[test]
    fn missing_section_is_an_error() {
        assert!(parse::<i32>("[other]\nvalue=1\n", "n").is_err());
    }

    #[test]
    fn nested_sequence_comma_joins() {
        let nested = vec![vec![1_i32, 2], vec![3]];
        let text = stringify(&nested, "grid");
        assert!(text.contains("item0=1,2"));
        assert!(text.contains("item1=3"));
        assert_eq!(parse::<Vec<Vec<i32>>>(&text, "grid").unwrap(), nested);
    }
}
