use crate::traits::ErrorSink;
use crate::types::{ErrorVec, Violation};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered collection of reported items.
///
/// Wraps an [`ErrorVec`] so the driver and custom sinks share one
/// accumulation interface. `Accumulator<Violation>` is itself an
/// [`ErrorSink`], which is how a validation run collects its errors.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Accumulator<T> {
    items: ErrorVec<T>,
}

impl<T> Accumulator<T> {
    /// Creates a new empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self { items: ErrorVec::new() }
    }

    /// Adds a single item to the accumulator.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Extends the accumulator with items from an iterator.
    #[inline]
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the accumulator and returns the underlying `ErrorVec`.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<T> {
        self.items
    }
}

impl ErrorSink for Accumulator<Violation> {
    #[inline]
    fn report(&mut self, violation: Violation) {
        self.push(violation);
    }
}

impl<T> From<ErrorVec<T>> for Accumulator<T> {
    fn from(items: ErrorVec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Accumulator<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<T> IntoIterator for Accumulator<T> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
