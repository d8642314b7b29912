use std::collections::VecDeque;

use crate::marshal::impl_marshal_cast_fn;
use crate::ops::Sequence;
use crate::{Category, Classify, Marshal};

impl<T: Marshal + Default> Classify for Vec<T> {
    const CATEGORY: Category = Category::Sequence;
}

impl<T: Marshal + Default> Marshal for Vec<T> {
    impl_marshal_cast_fn!(Sequence);
}

impl<T: Marshal + Default> Sequence for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&dyn Marshal> {
        self.as_slice().get(index).map(|item| item as &dyn Marshal)
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn push_with(&mut self, fill: &mut dyn FnMut(&mut dyn Marshal)) {
        Vec::push(self, T::default());
        if let Some(item) = self.as_mut_slice().last_mut() {
            fill(item);
        }
    }
}

impl<T: Marshal + Default> Classify for VecDeque<T> {
    const CATEGORY: Category = Category::Sequence;
}

impl<T: Marshal + Default> Marshal for VecDeque<T> {
    impl_marshal_cast_fn!(Sequence);
}

impl<T: Marshal + Default> Sequence for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&dyn Marshal> {
        VecDeque::get(self, index).map(|item| item as &dyn Marshal)
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }

    fn push_with(&mut self, fill: &mut dyn FnMut(&mut dyn Marshal)) {
        VecDeque::push_back(self, T::default());
        if let Some(item) = VecDeque::back_mut(self) {
            fill(item);
        }
    }
}
