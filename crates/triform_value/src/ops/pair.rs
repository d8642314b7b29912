use crate::Marshal;
use crate::marshal::impl_marshal_cast_fn;

/// Two heterogeneous slots that marshal under the names `first` and
/// `second`.
///
/// Native two-tuples marshal positionally as
/// [`Category::Tuple`](crate::Category::Tuple); use `Pair` when the
/// encoded form should carry the two names instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Pair<A, B> {
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

/// Operations of [`Category::Pair`](crate::Category::Pair) values.
pub trait PairSlots: Marshal {
    fn first(&self) -> &dyn Marshal;

    fn second(&self) -> &dyn Marshal;

    fn first_mut(&mut self) -> &mut dyn Marshal;

    fn second_mut(&mut self) -> &mut dyn Marshal;
}

impl<A: Marshal, B: Marshal> crate::Classify for Pair<A, B> {
    const CATEGORY: crate::Category = crate::Category::Pair;
}

impl<A: Marshal, B: Marshal> Marshal for Pair<A, B> {
    impl_marshal_cast_fn!(Pair);
}

impl<A: Marshal, B: Marshal> PairSlots for Pair<A, B> {
    fn first(&self) -> &dyn Marshal {
        &self.first
    }

    fn second(&self) -> &dyn Marshal {
        &self.second
    }

    fn first_mut(&mut self) -> &mut dyn Marshal {
        &mut self.first
    }

    fn second_mut(&mut self) -> &mut dyn Marshal {
        &mut self.second
    }
}
