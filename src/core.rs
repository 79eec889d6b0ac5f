use alloc::boxed::Box;
use core::fmt;
use core::mem::MaybeUninit;
use core::ptr;
use core::slice;

use crate::error::{Result, SequenceError};
use crate::iter::SequenceIter;

/// Capacity used by `with_default_capacity` and `Default`.
pub const DEFAULT_CAPACITY: usize = 30;

/// Capacity a full buffer grows to: `floor(1.5 * capacity) + 1`.
pub(crate) const fn grown_capacity(capacity: usize) -> usize {
    capacity
        .saturating_add(capacity / 2)
        .saturating_add(1)
}

/// An ordered sequence with a cursor, stored in a manually managed buffer.
///
/// Only the slots `[0, used)` of the buffer are initialized. The cursor
/// `current_index` lies in `[0, used]`; `current_index == used` means there
/// is no current item.
pub struct Sequence<T> {
    buffer: Box<[MaybeUninit<T>]>,
    used: usize,
    current_index: usize,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence with room for `initial_capacity` items.
    ///
    /// A capacity of 0 is raised to 1.
    #[must_use]
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            buffer: Box::new_uninit_slice(initial_capacity.max(1)),
            used: 0,
            current_index: 0,
        }
    }

    /// Creates an empty sequence with `DEFAULT_CAPACITY` slots.
    #[must_use]
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Number of items in the sequence.
    #[must_use]
    pub fn size(&self) -> usize {
        self.used
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.used
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Reallocates the buffer to `max(1, requested_capacity, len)` slots.
    ///
    /// The items keep their order and the cursor keeps its position.
    pub fn resize(&mut self, requested_capacity: usize) {
        let capacity = requested_capacity.max(self.used).max(1);
        log::trace!(
            "resizing sequence buffer from {} to {} slots ({} used)",
            self.capacity(),
            capacity,
            self.used
        );

        let mut buffer = Box::<[T]>::new_uninit_slice(capacity);
        // SAFETY: the old buffer has `used` initialized slots and the new one
        // has at least `used` slots. The items are moved bitwise; dropping the
        // old `MaybeUninit` buffer does not drop them.
        unsafe {
            ptr::copy_nonoverlapping(self.buffer.as_ptr(), buffer.as_mut_ptr(), self.used);
        }
        self.buffer = buffer;
    }

    /// Moves the cursor to the first item. Leaves an empty sequence without
    /// a current item.
    pub fn start(&mut self) {
        self.current_index = 0;
    }

    /// Whether the cursor designates an item.
    #[must_use]
    pub fn is_item(&self) -> bool {
        self.current_index < self.used
    }

    /// Cursor index if there is a current item.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.is_item().then_some(self.current_index)
    }

    /// Moves the cursor to the next item. Advancing past the last item
    /// leaves the sequence without a current item.
    ///
    /// # Panics
    ///
    /// Panics if there is no current item.
    #[track_caller]
    pub fn advance(&mut self) {
        self.assert_item();
        self.current_index += 1;
    }

    /// Non-panicking variant of [`advance`](Self::advance).
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::NoCurrentItem` if there is no current item.
    pub fn try_advance(&mut self) -> Result<()> {
        self.check_item()?;
        self.current_index += 1;
        Ok(())
    }

    /// The current item.
    ///
    /// # Panics
    ///
    /// Panics if there is no current item.
    #[must_use]
    #[track_caller]
    pub fn current(&self) -> &T {
        self.assert_item();
        &self.as_slice()[self.current_index]
    }

    /// # Panics
    ///
    /// Panics if there is no current item.
    #[must_use]
    #[track_caller]
    pub fn current_mut(&mut self) -> &mut T {
        self.assert_item();
        let index = self.current_index;
        &mut self.live_mut()[index]
    }

    /// Non-panicking variant of [`current`](Self::current).
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::NoCurrentItem` if there is no current item.
    pub fn try_current(&self) -> Result<&T> {
        self.check_item()?;
        Ok(&self.as_slice()[self.current_index])
    }

    /// # Errors
    ///
    /// Returns `SequenceError::NoCurrentItem` if there is no current item.
    pub fn try_current_mut(&mut self) -> Result<&mut T> {
        self.check_item()?;
        let index = self.current_index;
        Ok(&mut self.live_mut()[index])
    }

    /// Inserts `entry` before the current item, or at the front if there is
    /// no current item. The new item becomes current.
    pub fn insert(&mut self, entry: T) {
        if !self.is_item() {
            self.current_index = 0;
        }
        self.place_at_cursor(entry);
    }

    /// Inserts `entry` after the current item, or at the back if there is
    /// no current item. The new item becomes current.
    pub fn attach(&mut self, entry: T) {
        if self.is_item() {
            self.current_index += 1;
        }
        self.place_at_cursor(entry);
    }

    /// Removes and returns the current item. The item that followed it, if
    /// any, becomes current.
    ///
    /// # Panics
    ///
    /// Panics if there is no current item.
    #[track_caller]
    pub fn remove_current(&mut self) -> T {
        self.assert_item();
        self.take_current()
    }

    /// Non-panicking variant of [`remove_current`](Self::remove_current).
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::NoCurrentItem` if there is no current item.
    pub fn try_remove_current(&mut self) -> Result<T> {
        self.check_item()?;
        Ok(self.take_current())
    }

    /// Drops all items and leaves the cursor without a current item. The
    /// capacity is kept.
    pub fn clear(&mut self) {
        let live: *mut [T] = self.live_mut();
        self.used = 0;
        self.current_index = 0;
        // SAFETY: `live` covered the initialized slots, which are now outside
        // `[0, used)` and will not be dropped again.
        unsafe {
            ptr::drop_in_place(live);
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// The items in order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots `[0, used)` are initialized.
        unsafe {
            slice::from_raw_parts(self.buffer.as_ptr().cast::<T>(), self.used)
        }
    }

    /// Returns an iterator over the items, front to back.
    #[must_use]
    pub fn iter(&self) -> SequenceIter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over the current item and every item after it.
    /// Empty when there is no current item.
    #[must_use]
    pub fn iter_from_current(&self) -> SequenceIter<'_, T> {
        SequenceIter::new(&self.as_slice()[self.current_index..])
    }

    fn live_mut(&mut self) -> &mut [T] {
        // SAFETY: slots `[0, used)` are initialized.
        unsafe {
            slice::from_raw_parts_mut(self.buffer.as_mut_ptr().cast::<T>(), self.used)
        }
    }

    fn check_item(&self) -> Result<()> {
        if self.is_item() {
            Ok(())
        } else {
            Err(SequenceError::NoCurrentItem {
                cursor: self.current_index,
                len: self.used,
            })
        }
    }

    #[track_caller]
    fn assert_item(&self) {
        if let Err(error) = self.check_item() {
            panic!("{error}");
        }
    }

    /// Shifts `[current_index, used)` one slot back and writes `entry` into
    /// the freed slot, growing the buffer first if it is full.
    fn place_at_cursor(&mut self, entry: T) {
        if self.used == self.capacity() {
            let capacity = grown_capacity(self.capacity());
            log::debug!(
                "sequence buffer full at {} items, growing to {}",
                self.used,
                capacity
            );
            self.resize(capacity);
        }

        let index = self.current_index;
        // SAFETY: `index <= used < capacity`. The initialized range
        // `[index, used)` moves to `[index + 1, used + 1)`, which is in bounds.
        unsafe {
            let base = self.buffer.as_mut_ptr();
            ptr::copy(base.add(index), base.add(index + 1), self.used - index);
        }
        self.buffer[index].write(entry);
        self.used += 1;
    }

    fn take_current(&mut self) -> T {
        let index = self.current_index;
        // SAFETY: `index < used`, so the slot is initialized. It is read out
        // exactly once and the hole is closed before `used` shrinks.
        unsafe {
            let base = self.buffer.as_mut_ptr();
            let removed = base.add(index).read().assume_init();
            ptr::copy(base.add(index + 1), base.add(index), self.used - index - 1);
            self.used -= 1;
            removed
        }
    }
}

impl<T> Drop for Sequence<T> {
    fn drop(&mut self) {
        // SAFETY: slots `[0, used)` are initialized and dropped once here.
        unsafe {
            ptr::drop_in_place(self.live_mut());
        }
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        let mut copy = Self {
            buffer: Box::new_uninit_slice(self.capacity()),
            used: 0,
            current_index: 0,
        };
        // `used` tracks progress so a panicking `T::clone` drops only what was written
        for (slot, item) in copy.buffer.iter_mut().zip(self.as_slice()) {
            slot.write(item.clone());
            copy.used += 1;
        }
        copy.current_index = self.current_index;
        copy
    }

    /// Replaces `self` with an independent copy of `source`, adopting its
    /// capacity, items and cursor. The old items are dropped.
    fn clone_from(&mut self, source: &Self) {
        *self = source.clone();
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("items", &self.as_slice())
            .field("capacity", &self.capacity())
            .field("current_index", &self.current_index)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.current_index == other.current_index && self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T> Extend<T> for Sequence<T> {
    /// Attaches each value in turn, so they end up in order after the
    /// current item (or at the back) and the last one becomes current.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for entry in iter {
            self.attach(entry);
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut sequence = Self::new(iter.size_hint().0);
        sequence.extend(iter);
        sequence
    }
}
