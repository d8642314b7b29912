use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::marshal::impl_marshal_cast_fn;
use crate::ops::{Map, MapKey};
use crate::{Category, Classify, Marshal};

impl<K, V> Classify for HashMap<K, V>
where
    K: MapKey + Eq + Hash + 'static,
    V: Marshal + Default,
{
    const CATEGORY: Category = Category::Map;
}

impl<K, V> Marshal for HashMap<K, V>
where
    K: MapKey + Eq + Hash + 'static,
    V: Marshal + Default,
{
    impl_marshal_cast_fn!(Map);
}

impl<K, V> Map for HashMap<K, V>
where
    K: MapKey + Eq + Hash + 'static,
    V: Marshal + Default,
{
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn clear(&mut self) {
        HashMap::clear(self);
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (String, &dyn Marshal)> + '_> {
        Box::new(HashMap::iter(self).map(|(key, value)| (key.to_key(), value as &dyn Marshal)))
    }

    fn entry_with(&mut self, key: &str, fill: &mut dyn FnMut(&mut dyn Marshal)) {
        if let Some(key) = K::parse_key(key) {
            fill(self.entry(key).or_default());
        }
    }
}

impl<K, V> Classify for BTreeMap<K, V>
where
    K: MapKey + Ord + 'static,
    V: Marshal + Default,
{
    const CATEGORY: Category = Category::Map;
}

impl<K, V> Marshal for BTreeMap<K, V>
where
    K: MapKey + Ord + 'static,
    V: Marshal + Default,
{
    impl_marshal_cast_fn!(Map);
}

impl<K, V> Map for BTreeMap<K, V>
where
    K: MapKey + Ord + 'static,
    V: Marshal + Default,
{
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn clear(&mut self) {
        BTreeMap::clear(self);
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (String, &dyn Marshal)> + '_> {
        Box::new(BTreeMap::iter(self).map(|(key, value)| (key.to_key(), value as &dyn Marshal)))
    }

    fn entry_with(&mut self, key: &str, fill: &mut dyn FnMut(&mut dyn Marshal)) {
        if let Some(key) = K::parse_key(key) {
            fill(self.entry(key).or_default());
        }
    }
}
