//! XML codec.
//!
//! A value encodes into the children of a caller-named root element.
//! Leaves become text content, sequence / set / tuple elements become
//! repeated `<item>` children, record fields and pair slots become
//! children named after the field, and map entries become children
//! named after the key. An absent nullable encodes as an empty
//! element.
//!
//! Map decoding takes every child element as an entry and its tag name
//! as the key. A record-shaped element therefore decodes into a map
//! without complaint, one entry per field; that is the flip side of
//! maps and records sharing the same element shape.

use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;
use triform_value::{CategoryMut, CategoryRef, Marshal};
use xmltree::{Element, EmitterConfig, XMLNode};

use crate::error::{Format, MarshalError};
use crate::scalar_text;

/// Encodes `value` as a compact XML document rooted at `root`.
///
/// # Examples
///
/// ```
/// use triform_codec::xml;
///
/// let text = xml::stringify(&vec![1_i32, 2, 3], "list");
/// assert_eq!(text, "<list><item>1</item><item>2</item><item>3</item></list>");
/// ```
pub fn stringify<T: Marshal>(value: &T, root: &str) -> String {
    let mut element = Element::new(root);
    encode_into(value, &mut element);
    write_compact(&element)
}

/// Decodes an XML document whose root element is named `root`.
///
/// Returns [`MarshalError::Parse`] for malformed text and
/// [`MarshalError::MissingRoot`] when the root element has another
/// name. Inside the document the decode is best effort, like the JSON
/// codec's.
pub fn parse<T: Marshal + Default>(text: &str, root: &str) -> Result<T, MarshalError> {
    let element = Element::parse(text.as_bytes()).map_err(|err| {
        warn!(error = %err, "XML parse failed");
        MarshalError::Parse {
            format: Format::Xml,
            message: err.to_string(),
        }
    })?;
    if element.name != root {
        warn!(expected = root, found = %element.name, "XML root element mismatch");
        return Err(MarshalError::MissingRoot {
            expected: root.to_owned(),
        });
    }
    let mut value = T::default();
    decode_from(&element, &mut value);
    Ok(value)
}

/// Writes `value` to `path` as an XML document rooted at `root`.
pub fn to_file<T: Marshal>(
    value: &T,
    path: impl AsRef<Path>,
    root: &str,
) -> Result<(), MarshalError> {
    let mut element = Element::new(root);
    encode_into(value, &mut element);
    let file = fs::File::create(path)?;
    element
        .write_with_config(file, emitter_config())
        .map_err(|err| MarshalError::Io(io::Error::other(err)))
}

/// Reads the file at `path` and decodes it like [`parse`].
pub fn from_file<T: Marshal + Default>(
    path: impl AsRef<Path>,
    root: &str,
) -> Result<T, MarshalError> {
    let text =
        fs::read_to_string(path).inspect_err(|err| warn!(error = %err, "cannot open XML file"))?;
    parse(&text, root)
}

fn emitter_config() -> EmitterConfig {
    EmitterConfig::new().write_document_declaration(false)
}

fn write_compact(element: &Element) -> String {
    let mut buffer = Vec::new();
    if let Err(err) = element.write_with_config(&mut buffer, emitter_config()) {
        warn!(error = %err, "XML write failed");
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Encodes any marshalable value into the children of `element`.
pub fn encode_into(value: &dyn Marshal, element: &mut Element) {
    match value.category_ref() {
        CategoryRef::Scalar(slot) => set_text(element, slot.get().to_string()),
        CategoryRef::Text(slot) => set_text(element, slot.get().to_owned()),
        CategoryRef::Enum(slot) => set_text(element, slot.ordinal().to_string()),
        CategoryRef::Nullable(slot) => {
            if let Some(inner) = slot.inner() {
                encode_into(inner, element);
            }
        }
        CategoryRef::Sequence(seq) => {
            for item in seq.iter() {
                push_child(element, "item", item);
            }
        }
        CategoryRef::Set(set) => {
            for member in set.iter() {
                push_child(element, "item", member);
            }
        }
        CategoryRef::Map(map) => {
            for (key, entry) in map.iter() {
                push_child(element, &key, entry);
            }
        }
        CategoryRef::Pair(pair) => {
            push_child(element, "first", pair.first());
            push_child(element, "second", pair.second());
        }
        CategoryRef::Tuple(tuple) => {
            for index in 0..tuple.len() {
                if let Some(slot) = tuple.slot(index) {
                    push_child(element, "item", slot);
                }
            }
        }
        CategoryRef::Sum(sum) => encode_into(sum.active(), element),
        CategoryRef::Record(record) => {
            for name in record.schema().field_names {
                if let Some(field) = record.field(name) {
                    push_child(element, name, field);
                }
            }
        }
    }
}

/// Decodes the children of `element` into `target`, best effort.
pub fn decode_from(element: &Element, target: &mut dyn Marshal) {
    match target.category_mut() {
        CategoryMut::Scalar(slot) => {
            if let Some(text) = element.get_text() {
                scalar_text::decode_scalar(slot, &text);
            }
        }
        CategoryMut::Text(slot) => {
            if let Some(text) = element.get_text() {
                slot.set(&text);
            }
        }
        CategoryMut::Enum(slot) => {
            if let Some(text) = element.get_text() {
                if let Ok(ordinal) = text.trim().parse::<i64>() {
                    if !slot.set_ordinal(ordinal) {
                        warn!(ordinal, "no enum variant with this ordinal");
                    }
                }
            }
        }
        CategoryMut::Nullable(slot) => {
            if is_empty(element) {
                slot.clear();
            } else {
                slot.init_with(&mut |inner| decode_from(element, inner));
            }
        }
        CategoryMut::Sequence(seq) => {
            seq.clear();
            for child in named_children(element, "item") {
                seq.push_with(&mut |slot| decode_from(child, slot));
            }
        }
        CategoryMut::Set(set) => {
            set.clear();
            for child in named_children(element, "item") {
                set.insert_with(&mut |slot| decode_from(child, slot));
            }
        }
        CategoryMut::Map(map) => {
            map.clear();
            for child in child_elements(element) {
                map.entry_with(&child.name, &mut |slot| decode_from(child, slot));
            }
        }
        CategoryMut::Pair(pair) => {
            if let Some(child) = element.get_child("first") {
                decode_from(child, pair.first_mut());
            }
            if let Some(child) = element.get_child("second") {
                decode_from(child, pair.second_mut());
            }
        }
        CategoryMut::Tuple(tuple) => {
            for (index, child) in named_children(element, "item").enumerate() {
                match tuple.slot_mut(index) {
                    Some(slot) => decode_from(child, slot),
                    None => break,
                }
            }
        }
        // Write-only: the encoded form carries no discriminant.
        CategoryMut::Sum(_) => {}
        CategoryMut::Record(record) => {
            for name in record.schema().field_names {
                if let Some(child) = element.get_child(*name) {
                    if let Some(field) = record.field_mut(name) {
                        decode_from(child, field);
                    }
                }
            }
        }
    }
}

fn set_text(element: &mut Element, text: String) {
    element.children.push(XMLNode::Text(text));
}

fn push_child(element: &mut Element, name: &str, value: &dyn Marshal) {
    let mut child = Element::new(name);
    encode_into(value, &mut child);
    element.children.push(XMLNode::Element(child));
}

fn child_elements(element: &Element) -> impl Iterator<Item = &Element> {
    element.children.iter().filter_map(XMLNode::as_element)
}

fn named_children<'a>(element: &'a Element, name: &'a str) -> impl Iterator<Item = &'a Element> {
    child_elements(element).filter(move |child| child.name == name)
}

fn is_empty(element: &Element) -> bool {
    child_elements(element).next().is_none()
        && element
            .get_text()
            .is_none_or(|text| text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::{parse, stringify};

    #[test]
    fn sequence_uses_item_elements() {
        let text = stringify(&vec![1_i32, 2, 3], "list");
        assert_eq!(
            text,
            "<list><item>1</item><item>2</item><item>3</item></list>"
        );
        assert_eq!(parse::<Vec<i32>>(&text, "list").unwrap(), [1, 2, 3]);
    }

    #[test]
    fn empty_element_decodes_to_none() {
        let text = stringify(&None::<i32>, "opt");
        assert_eq!(parse::<Option<i32>>(&text, "opt").unwrap(), None);
        assert_eq!(parse::<Option<i32>>("<opt>5</opt>", "opt").unwrap(), Some(5));
    }

    #[test]
    fn root_name_is_checked() {
        assert!(parse::<i32>("<n>1</n>", "other").is_err());
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(parse::<i32>("<n>1", "n").is_err());
    }
}
