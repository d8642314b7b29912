use crate::Marshal;

/// Operations of [`Category::Sequence`](crate::Category::Sequence) values.
pub trait Sequence: Marshal {
    fn len(&self) -> usize;

    /// The element at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<&dyn Marshal>;

    /// Removes all elements.
    fn clear(&mut self);

    /// Appends a default element and hands it to `fill`.
    fn push_with(&mut self, fill: &mut dyn FnMut(&mut dyn Marshal));
}

impl dyn Sequence {
    /// Iterates the elements in order.
    pub fn iter(&self) -> SequenceIter<'_> {
        SequenceIter::new(self)
    }
}

/// Ordered iterator over the elements of a [`Sequence`].
pub struct SequenceIter<'a> {
    sequence: &'a dyn Sequence,
    index: usize,
}

impl<'a> SequenceIter<'a> {
    pub fn new(sequence: &'a dyn Sequence) -> Self {
        Self { sequence, index: 0 }
    }
}

impl<'a> Iterator for SequenceIter<'a> {
    type Item = &'a dyn Marshal;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.sequence.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sequence.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SequenceIter<'_> {}
