use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

use crate::marshal::impl_marshal_cast_fn;
use crate::ops::Set;
use crate::{Category, Classify, Marshal};

impl<T> Classify for HashSet<T>
where
    T: Marshal + Default + Eq + Hash,
{
    const CATEGORY: Category = Category::Set;
}

impl<T> Marshal for HashSet<T>
where
    T: Marshal + Default + Eq + Hash,
{
    impl_marshal_cast_fn!(Set);
}

impl<T> Set for HashSet<T>
where
    T: Marshal + Default + Eq + Hash,
{
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Marshal> + '_> {
        Box::new(HashSet::iter(self).map(|member| member as &dyn Marshal))
    }

    fn insert_with(&mut self, fill: &mut dyn FnMut(&mut dyn Marshal)) {
        let mut member = T::default();
        fill(&mut member);
        self.replace(member);
    }
}

impl<T> Classify for BTreeSet<T>
where
    T: Marshal + Default + Ord,
{
    const CATEGORY: Category = Category::Set;
}

impl<T> Marshal for BTreeSet<T>
where
    T: Marshal + Default + Ord,
{
    impl_marshal_cast_fn!(Set);
}

impl<T> Set for BTreeSet<T>
where
    T: Marshal + Default + Ord,
{
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn clear(&mut self) {
        BTreeSet::clear(self);
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Marshal> + '_> {
        Box::new(BTreeSet::iter(self).map(|member| member as &dyn Marshal))
    }

    fn insert_with(&mut self, fill: &mut dyn FnMut(&mut dyn Marshal)) {
        let mut member = T::default();
        fill(&mut member);
        self.replace(member);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::ops::{ScalarValue, Set};
    use crate::{CategoryMut, Marshal};

    fn insert_int(set: &mut HashSet<i32>, value: i64) {
        Set::insert_with(set, &mut |slot| {
            if let CategoryMut::Scalar(scalar) = slot.category_mut() {
                scalar.set(ScalarValue::Int(value));
            }
        });
    }

    #[test]
    fn insert_with_deduplicates() {
        let mut set = HashSet::new();
        insert_int(&mut set, 1);
        insert_int(&mut set, 2);
        insert_int(&mut set, 1);
        assert_eq!(set, HashSet::from([1, 2]));
    }
}
