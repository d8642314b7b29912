use crate::marshal::impl_marshal_cast_fn;
use crate::ops::Nullable;
use crate::{Category, Classify, Marshal};

impl<T: Marshal + Default> Classify for Option<T> {
    const CATEGORY: Category = Category::Nullable;
}

impl<T: Marshal + Default> Marshal for Option<T> {
    impl_marshal_cast_fn!(Nullable);
}

impl<T: Marshal + Default> Nullable for Option<T> {
    fn inner(&self) -> Option<&dyn Marshal> {
        self.as_ref().map(|value| value as &dyn Marshal)
    }

    fn clear(&mut self) {
        *self = None;
    }

    fn init_with(&mut self, fill: &mut dyn FnMut(&mut dyn Marshal)) {
        fill(self.get_or_insert_with(T::default));
    }
}
