use core::iter::FusedIterator;
use core::slice;

use crate::core::Sequence;

/// Iterator over the items of a `Sequence`, front to back
///
/// This iterator implements `Clone`.
#[derive(Clone, Debug)]
pub struct SequenceIter<'a, T> {
    items: slice::Iter<'a, T>,
}

impl<'a, T> SequenceIter<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self {
            items: items.iter(),
        }
    }
}

impl<'a, T> Iterator for SequenceIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> DoubleEndedIterator for SequenceIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back()
    }
}

impl<T> ExactSizeIterator for SequenceIter<'_, T> {}

impl<T> FusedIterator for SequenceIter<'_, T> {}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = SequenceIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        SequenceIter::new(self.as_slice())
    }
}
