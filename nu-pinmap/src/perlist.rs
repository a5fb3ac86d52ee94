//! Peripheral candidate lists
//!
//! A [`PeripheralList`] holds up to `N` peripheral instances. Real entries are
//! packed at the front in insertion order and every remaining slot holds
//! [`Peripheral::NC`]. All mutating methods keep that layout, so a list is
//! well-formed at rest no matter how it was built.

use core::ops::{Bound, Index, RangeBounds};
use core::slice;

use crate::pin::Peripheral;

/// Fixed-capacity, `NC`-padded list of candidate peripheral instances.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PeripheralList<const N: usize> {
    slots: [Peripheral; N],
    len: usize,
}

impl<const N: usize> PeripheralList<N> {
    /// An empty list: every slot is `NC`.
    pub const fn new() -> Self {
        Self {
            slots: [Peripheral::NC; N],
            len: 0,
        }
    }

    /// Build a list from raw, `NC`-padded slots.
    ///
    /// Entries after the first `NC` are discarded.
    pub fn from_slots(slots: [Peripheral; N]) -> Self {
        let len = slots.iter().position(|p| p.is_nc()).unwrap_or(N);
        let mut list = Self { slots, len };
        list.fill_remaining();
        list
    }

    /// Number of slots.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of real entries.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// No real entry in the list. Same as [`is_all_nc`](Self::is_all_nc).
    pub fn is_empty(&self) -> bool {
        self.is_all_nc()
    }

    /// Every slot holds a real entry.
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Structural sanity check: the entry count fits the capacity.
    pub const fn is_valid(&self) -> bool {
        self.len <= N
    }

    /// The list holds no real entry.
    ///
    /// Entries are packed, so looking at the first slot is enough.
    pub fn is_all_nc(&self) -> bool {
        self.slots.first().map_or(true, |p| p.is_nc())
    }

    /// Append `peripheral`.
    ///
    /// Gives `peripheral` back if the list is full. Pushing `NC` does nothing.
    pub fn push(&mut self, peripheral: Peripheral) -> Result<(), Peripheral> {
        if peripheral.is_nc() {
            return Ok(());
        }
        match self.slots.get_mut(self.len) {
            Some(slot) => {
                *slot = peripheral;
                self.len += 1;
                Ok(())
            }
            None => Err(peripheral),
        }
    }

    /// Set every slot after the real entries to `NC`.
    pub fn fill_remaining(&mut self) {
        for slot in &mut self.slots[self.len..] {
            *slot = Peripheral::NC;
        }
    }

    /// Set the slots in `range` to `NC`.
    ///
    /// A range starting inside the real entries truncates the list at
    /// `range.start`, so entries past the range are dropped too. The range is
    /// clamped to the capacity.
    pub fn clear<R: RangeBounds<usize>>(&mut self, range: R) {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(N);
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => N,
        }
        .min(N);

        if start < end {
            for slot in &mut self.slots[start..end] {
                *slot = Peripheral::NC;
            }
        }
        if start < self.len {
            self.len = start;
            self.fill_remaining();
        }
    }

    /// Keep the first `len` entries and drop the rest.
    pub fn truncate(&mut self, len: usize) {
        self.clear(len..);
    }

    /// Replace the content with the leading entries of `src`.
    ///
    /// Copies as many entries as fit and pads the rest with `NC`. Surplus
    /// entries of `src` are dropped.
    pub fn truncated_copy_from<const M: usize>(&mut self, src: &PeripheralList<M>) {
        let n = src.len.min(N);
        self.slots[..n].copy_from_slice(&src.slots[..n]);
        self.len = n;
        self.fill_remaining();
    }

    /// The real entries.
    pub fn as_slice(&self) -> &[Peripheral] {
        &self.slots[..self.len]
    }

    /// All `N` slots, including `NC` padding.
    pub const fn slots(&self) -> &[Peripheral; N] {
        &self.slots
    }

    /// Iterate over the real entries.
    pub fn iter(&self) -> slice::Iter<'_, Peripheral> {
        self.as_slice().iter()
    }

    /// The first real entry, if any.
    pub fn first(&self) -> Option<Peripheral> {
        self.as_slice().first().copied()
    }

    /// Whether `peripheral` is one of the real entries.
    pub fn contains(&self, peripheral: Peripheral) -> bool {
        !peripheral.is_nc() && self.as_slice().contains(&peripheral)
    }
}

impl<const N: usize> Default for PeripheralList<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Indexes the slots; padding reads as `NC`.
impl<const N: usize> Index<usize> for PeripheralList<N> {
    type Output = Peripheral;

    fn index(&self, index: usize) -> &Peripheral {
        &self.slots[index]
    }
}

impl<'a, const N: usize> IntoIterator for &'a PeripheralList<N> {
    type Item = &'a Peripheral;
    type IntoIter = slice::Iter<'a, Peripheral>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
