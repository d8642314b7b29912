use crate::Marshal;

/// Operations of [`Category::Sum`](crate::Category::Sum) values.
///
/// Sums are write-only: the encoded form carries the active
/// alternative bare, with no discriminant, so no codec can pick the
/// right alternative when reading back. Decoders leave sum slots at
/// their default.
pub trait Sum: Marshal {
    /// The payload of the active alternative.
    fn active(&self) -> &dyn Marshal;
}
