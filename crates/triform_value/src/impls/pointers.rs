//! Pointer wrappers are transparent: they marshal exactly as their
//! pointee does. Shared pointers go through `make_mut`, so a mutating
//! decode copies on write when the allocation is shared.

use std::rc::Rc;
use std::sync::Arc;

use crate::{Category, CategoryMut, CategoryRef, Classify, Marshal};

impl<T: Marshal + Classify> Classify for Box<T> {
    const CATEGORY: Category = T::CATEGORY;
}

impl<T: Marshal> Marshal for Box<T> {
    fn category(&self) -> Category {
        (**self).category()
    }

    fn category_ref(&self) -> CategoryRef<'_> {
        (**self).category_ref()
    }

    fn category_mut(&mut self) -> CategoryMut<'_> {
        (**self).category_mut()
    }
}

impl<T: Marshal + Clone + Classify> Classify for Rc<T> {
    const CATEGORY: Category = T::CATEGORY;
}

impl<T: Marshal + Clone> Marshal for Rc<T> {
    fn category(&self) -> Category {
        (**self).category()
    }

    fn category_ref(&self) -> CategoryRef<'_> {
        (**self).category_ref()
    }

    fn category_mut(&mut self) -> CategoryMut<'_> {
        Rc::make_mut(self).category_mut()
    }
}

impl<T: Marshal + Clone + Classify> Classify for Arc<T> {
    const CATEGORY: Category = T::CATEGORY;
}

impl<T: Marshal + Clone> Marshal for Arc<T> {
    fn category(&self) -> Category {
        (**self).category()
    }

    fn category_ref(&self) -> CategoryRef<'_> {
        (**self).category_ref()
    }

    fn category_mut(&mut self) -> CategoryMut<'_> {
        Arc::make_mut(self).category_mut()
    }
}
