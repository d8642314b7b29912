use crate::Marshal;

/// Key type usable by [`Map`] collections.
///
/// Textual encodings only carry string keys, so a key must render to a
/// string and parse back from one. Integer keys render in decimal; a
/// key that fails to parse makes the codec skip the entry.
pub trait MapKey {
    fn to_key(&self) -> String;

    fn parse_key(text: &str) -> Option<Self>
    where
        Self: Sized;
}

impl MapKey for String {
    fn to_key(&self) -> String {
        self.clone()
    }

    fn parse_key(text: &str) -> Option<Self> {
        Some(text.to_owned())
    }
}

macro_rules! impl_map_key_for_int {
    ($($ty:ty),* $(,)?) => {
        $(impl MapKey for $ty {
            fn to_key(&self) -> String {
                self.to_string()
            }

            fn parse_key(text: &str) -> Option<Self> {
                text.trim().parse().ok()
            }
        })*
    };
}

impl_map_key_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Operations of [`Category::Map`](crate::Category::Map) values.
pub trait Map: Marshal {
    fn len(&self) -> usize;

    /// Removes all entries.
    fn clear(&mut self);

    /// Iterates the entries with their keys rendered as strings.
    fn iter(&self) -> Box<dyn Iterator<Item = (String, &dyn Marshal)> + '_>;

    /// Hands the value under `key` to `fill`, inserting a default
    /// value first when the key is absent.
    ///
    /// A `key` the map's key type cannot parse is ignored.
    fn entry_with(&mut self, key: &str, fill: &mut dyn FnMut(&mut dyn Marshal));
}

#[cfg(test)]
mod tests {
    use super::MapKey;

    #[test]
    fn int_keys_render_decimal() {
        assert_eq!(7_i32.to_key(), "7");
        assert_eq!((-3_i64).to_key(), "-3");
        assert_eq!(i32::parse_key("42"), Some(42));
        assert_eq!(i32::parse_key(" 42 "), Some(42));
        assert_eq!(u8::parse_key("-1"), None);
        assert_eq!(i32::parse_key("name"), None);
    }

    #[test]
    fn string_keys_pass_through() {
        assert_eq!("leader".to_owned().to_key(), "leader");
        assert_eq!(String::parse_key("leader"), Some("leader".to_owned()));
    }
}
