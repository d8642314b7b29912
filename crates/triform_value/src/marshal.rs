use crate::Category;
use crate::ops::{
    Enumeration, Map, Nullable, PairSlots, Record, Scalar, Sequence, Set, Sum, Text, Tuple,
};

/// A value the codecs can traverse.
///
/// Implementors expose themselves through exactly one [`CategoryRef`] /
/// [`CategoryMut`] variant, matching [`Classify::CATEGORY`](crate::Classify)
/// for the type. Pointer wrappers delegate to their pointee instead.
///
/// Do not implement this by hand for user types; use
/// [`marshal_record!`](crate::marshal_record),
/// [`marshal_enum!`](crate::marshal_enum) or
/// [`marshal_sum!`](crate::marshal_sum).
pub trait Marshal: 'static {
    /// The category this value marshals as.
    fn category(&self) -> Category;

    /// Shared typed view of this value.
    fn category_ref(&self) -> CategoryRef<'_>;

    /// Mutable typed view of this value.
    fn category_mut(&mut self) -> CategoryMut<'_>;
}

/// Shared view of a [`Marshal`] value, one variant per [`Category`].
pub enum CategoryRef<'a> {
    Scalar(&'a dyn Scalar),
    Text(&'a dyn Text),
    Enum(&'a dyn Enumeration),
    Nullable(&'a dyn Nullable),
    Sequence(&'a dyn Sequence),
    Set(&'a dyn Set),
    Map(&'a dyn Map),
    Pair(&'a dyn PairSlots),
    Tuple(&'a dyn Tuple),
    Sum(&'a dyn Sum),
    Record(&'a dyn Record),
}

/// Mutable view of a [`Marshal`] value, one variant per [`Category`].
pub enum CategoryMut<'a> {
    Scalar(&'a mut dyn Scalar),
    Text(&'a mut dyn Text),
    Enum(&'a mut dyn Enumeration),
    Nullable(&'a mut dyn Nullable),
    Sequence(&'a mut dyn Sequence),
    Set(&'a mut dyn Set),
    Map(&'a mut dyn Map),
    Pair(&'a mut dyn PairSlots),
    Tuple(&'a mut dyn Tuple),
    Sum(&'a mut dyn Sum),
    Record(&'a mut dyn Record),
}

impl CategoryRef<'_> {
    pub fn category(&self) -> Category {
        match self {
            Self::Scalar(_) => Category::Scalar,
            Self::Text(_) => Category::Text,
            Self::Enum(_) => Category::Enum,
            Self::Nullable(_) => Category::Nullable,
            Self::Sequence(_) => Category::Sequence,
            Self::Set(_) => Category::Set,
            Self::Map(_) => Category::Map,
            Self::Pair(_) => Category::Pair,
            Self::Tuple(_) => Category::Tuple,
            Self::Sum(_) => Category::Sum,
            Self::Record(_) => Category::Record,
        }
    }
}

impl CategoryMut<'_> {
    pub fn category(&self) -> Category {
        match self {
            Self::Scalar(_) => Category::Scalar,
            Self::Text(_) => Category::Text,
            Self::Enum(_) => Category::Enum,
            Self::Nullable(_) => Category::Nullable,
            Self::Sequence(_) => Category::Sequence,
            Self::Set(_) => Category::Set,
            Self::Map(_) => Category::Map,
            Self::Pair(_) => Category::Pair,
            Self::Tuple(_) => Category::Tuple,
            Self::Sum(_) => Category::Sum,
            Self::Record(_) => Category::Record,
        }
    }
}

/// Stamps the three [`Marshal`] methods for a type whose view variant
/// is `$kind`.
macro_rules! impl_marshal_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn category(&self) -> $crate::Category {
            $crate::Category::$kind
        }

        #[inline]
        fn category_ref(&self) -> $crate::CategoryRef<'_> {
            $crate::CategoryRef::$kind(self)
        }

        #[inline]
        fn category_mut(&mut self) -> $crate::CategoryMut<'_> {
            $crate::CategoryMut::$kind(self)
        }
    };
}

pub(crate) use impl_marshal_cast_fn;
