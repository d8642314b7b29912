use crate::marshal::impl_marshal_cast_fn;
use crate::ops::Tuple;
use crate::{Category, Classify, Marshal};

macro_rules! impl_marshal_for_tuple {
    ($len:expr; $($idx:tt => $name:ident),+) => {
        impl<$($name: Marshal),+> Classify for ($($name,)+) {
            const CATEGORY: Category = Category::Tuple;
        }

        impl<$($name: Marshal),+> Marshal for ($($name,)+) {
            impl_marshal_cast_fn!(Tuple);
        }

        impl<$($name: Marshal),+> Tuple for ($($name,)+) {
            fn len(&self) -> usize {
                $len
            }

            fn slot(&self, index: usize) -> Option<&dyn Marshal> {
                match index {
                    $($idx => Some(&self.$idx as &dyn Marshal),)+
                    _ => None,
                }
            }

            fn slot_mut(&mut self, index: usize) -> Option<&mut dyn Marshal> {
                match index {
                    $($idx => Some(&mut self.$idx as &mut dyn Marshal),)+
                    _ => None,
                }
            }
        }
    };
}

impl_marshal_for_tuple!(1; 0 => A);
impl_marshal_for_tuple!(2; 0 => A, 1 => B);
impl_marshal_for_tuple!(3; 0 => A, 1 => B, 2 => C);
impl_marshal_for_tuple!(4; 0 => A, 1 => B, 2 => C, 3 => D);
impl_marshal_for_tuple!(5; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E);
impl_marshal_for_tuple!(6; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F);
impl_marshal_for_tuple!(7; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G);
impl_marshal_for_tuple!(8; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H);

#[cfg(test)]
mod tests {
    use crate::ops::Tuple;
    use crate::{Category, Marshal};

    #[test]
    fn slots_are_positional_and_heterogeneous() {
        let tuple = (1_i32, "two".to_owned(), 3.0_f64);
        assert_eq!(Tuple::len(&tuple), 3);

        let categories: Vec<_> = (0..3)
            .filter_map(|index| tuple.slot(index))
            .map(|slot| slot.category())
            .collect();
        assert_eq!(categories, [Category::Scalar, Category::Text, Category::Scalar]);
        assert!(tuple.slot(3).is_none());
    }
}
