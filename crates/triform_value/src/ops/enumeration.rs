use crate::Marshal;

/// Operations of [`Category::Enum`](crate::Category::Enum) values.
///
/// A C-like enum marshals as its integer discriminant, so renaming a
/// variant does not invalidate stored data but reordering does.
pub trait Enumeration: Marshal {
    /// The discriminant of the current variant.
    fn ordinal(&self) -> i64;

    /// Switches to the variant with discriminant `ordinal`.
    ///
    /// Returns `false` and leaves the value untouched when no variant
    /// has that discriminant.
    fn set_ordinal(&mut self, ordinal: i64) -> bool;
}
