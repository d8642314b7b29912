use crate::Marshal;

/// Operations of [`Category::Set`](crate::Category::Set) values.
///
/// Iteration order follows the backing collection, so `HashSet`
/// members come out in no particular order.
pub trait Set: Marshal {
    fn len(&self) -> usize;

    /// Removes all members.
    fn clear(&mut self);

    /// Iterates the members.
    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Marshal> + '_>;

    /// Builds a member from its default via `fill`, then inserts it.
    ///
    /// A member equal to one already present replaces it.
    fn insert_with(&mut self, fill: &mut dyn FnMut(&mut dyn Marshal));
}
