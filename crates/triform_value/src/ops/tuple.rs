use crate::Marshal;

/// Operations of [`Category::Tuple`](crate::Category::Tuple) values.
///
/// Slots are heterogeneous and the arity is fixed, so codecs address
/// them by position and stop at the first index past the end.
pub trait Tuple: Marshal {
    /// The arity.
    fn len(&self) -> usize;

    fn slot(&self, index: usize) -> Option<&dyn Marshal>;

    fn slot_mut(&mut self, index: usize) -> Option<&mut dyn Marshal>;
}
