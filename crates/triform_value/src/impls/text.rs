use crate::marshal::impl_marshal_cast_fn;
use crate::ops::Text;
use crate::{Category, Classify, Marshal};

impl Classify for String {
    const CATEGORY: Category = Category::Text;
}

impl Marshal for String {
    impl_marshal_cast_fn!(Text);
}

impl Text for String {
    fn get(&self) -> &str {
        self
    }

    fn set(&mut self, value: &str) {
        value.clone_into(self);
    }
}
