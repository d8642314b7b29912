use crate::Marshal;

/// Operations of [`Category::Nullable`](crate::Category::Nullable) values.
pub trait Nullable: Marshal {
    /// The contained value, if present.
    fn inner(&self) -> Option<&dyn Marshal>;

    /// Empties the slot.
    fn clear(&mut self);

    /// Ensures a contained value exists, then hands it to `fill`.
    ///
    /// An absent value is replaced by the payload type's default before
    /// the callback runs.
    fn init_with(&mut self, fill: &mut dyn FnMut(&mut dyn Marshal));
}
