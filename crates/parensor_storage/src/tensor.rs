//! Sparse tensor storage.
//!
//! A [`SparseTensor`] keeps only the positions that have been materialized,
//! in insertion order, alongside a per-axis dimension bound. The bound for an
//! axis is one more than the largest coordinate ever probed on it, and only
//! shrinks through [`SparseTensor::reset`].
//!
//! Lookup is a linear scan using zero-padded coordinate equality.

use std::fmt;
use std::marker::PhantomData;

use parensor_foundation::{Coordinates, Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A stored value and the exact coordinates it was created at.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Element<T> {
    value: T,
    coordinates: Coordinates,
}

/// Where a handle points.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    /// An existing element, by index.
    Resolved(usize),
    /// No element yet; these coordinates will be materialized on resolve.
    Pending(Coordinates),
}

/// Result of probing a [`SparseTensor`] for a position.
///
/// A handle is consumed by [`SparseTensor::resolve`]. It records the
/// tensor's reset generation, so resolving a handle after the tensor was
/// reset fails instead of touching the wrong element.
pub struct Handle<T> {
    slot: Slot,
    generation: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    fn new(slot: Slot, generation: u64) -> Self {
        Self {
            slot,
            generation,
            _marker: PhantomData,
        }
    }

    /// Returns true if the probed position already had an element.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self.slot, Slot::Resolved(_))
    }

    /// Returns true if resolving will create a default element.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.slot, Slot::Pending(_))
    }

    /// The tensor generation this handle was acquired at.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Resolved(index) => write!(f, "Handle(#{index}@{})", self.generation),
            Slot::Pending(coordinates) => {
                write!(f, "Handle(pending {coordinates}@{})", self.generation)
            }
        }
    }
}

/// Coordinate-addressed sparse storage with auto-expanding bounds.
///
/// A fresh tensor holds one default element at the origin and has bounds
/// `{1}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SparseTensor<T> {
    /// Per-axis bound: largest probed coordinate plus one, at least 1.
    dimensions: Vec<i64>,
    /// Materialized elements in insertion order.
    elements: Vec<Element<T>>,
    /// Incremented by every reset; stamps handles.
    generation: u64,
}

impl<T: Default> Default for SparseTensor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SparseTensor<T> {
    /// Returns the dimension bounds.
    #[must_use]
    pub fn dimensions(&self) -> &[i64] {
        &self.dimensions
    }

    /// Returns the number of materialized elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if no element is materialized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the reset generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Iterates over materialized elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Coordinates, &T)> + '_ {
        self.elements
            .iter()
            .map(|element| (&element.coordinates, &element.value))
    }

    /// Looks up a position without growing bounds or materializing it.
    #[must_use]
    pub fn peek(&self, coordinates: &Coordinates) -> Option<&T> {
        self.position(coordinates)
            .map(|index| &self.elements[index].value)
    }

    /// Probes a position.
    ///
    /// Grows the dimension bounds to cover `coordinates` whether or not an
    /// element exists there, then returns a resolved handle for an existing
    /// element or a pending handle carrying the coordinates.
    pub fn handle_at(&mut self, coordinates: &Coordinates) -> Handle<T> {
        self.grow_to_cover(coordinates);
        let slot = match self.position(coordinates) {
            Some(index) => Slot::Resolved(index),
            None => Slot::Pending(coordinates.clone()),
        };
        Handle::new(slot, self.generation)
    }

    fn grow_to_cover(&mut self, coordinates: &Coordinates) {
        if self.dimensions.len() < coordinates.len() {
            self.dimensions.resize(coordinates.len(), 1);
        }
        for (bound, value) in self.dimensions.iter_mut().zip(coordinates.iter()) {
            *bound = (*bound).max(value.saturating_add(1));
        }
    }

    fn position(&self, coordinates: &Coordinates) -> Option<usize> {
        self.elements
            .iter()
            .position(|element| Coordinates::equal(&element.coordinates, coordinates))
    }
}

impl<T: Default> SparseTensor<T> {
    /// Creates a tensor with one default element at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dimensions: vec![1],
            elements: vec![Element {
                value: T::default(),
                coordinates: Coordinates::origin(),
            }],
            generation: 0,
        }
    }

    /// Resolves a handle to a mutable reference.
    ///
    /// A pending handle appends a default element at its coordinates.
    ///
    /// # Errors
    /// Returns a stale handle error if the tensor was reset after the handle
    /// was acquired.
    pub fn resolve(&mut self, handle: Handle<T>) -> Result<&mut T> {
        if handle.generation != self.generation {
            return Err(Error::stale_handle(handle.generation, self.generation));
        }

        let generation = self.generation;
        let index = self.claim(handle.slot);

        self.elements
            .get_mut(index)
            .map(|element| &mut element.value)
            .ok_or_else(|| Error::stale_handle(handle.generation, generation))
    }

    /// Returns the value at `coordinates`, materializing a default one if
    /// needed. Grows bounds like [`SparseTensor::handle_at`].
    pub fn get_mut(&mut self, coordinates: &Coordinates) -> &mut T {
        // A handle taken here cannot outlive a reset, so it never goes stale.
        let handle = self.handle_at(coordinates);
        let index = self.claim(handle.slot);
        &mut self.elements[index].value
    }

    /// Stores `value` at `coordinates`.
    pub fn set(&mut self, coordinates: &Coordinates, value: T) {
        *self.get_mut(coordinates) = value;
    }

    /// Returns the tensor to its freshly created state.
    ///
    /// Outstanding handles become stale.
    pub fn reset(&mut self) {
        self.elements.clear();
        self.elements.push(Element {
            value: T::default(),
            coordinates: Coordinates::origin(),
        });
        self.dimensions.clear();
        self.dimensions.push(1);
        self.generation += 1;
    }

    fn claim(&mut self, slot: Slot) -> usize {
        match slot {
            Slot::Resolved(index) => index,
            Slot::Pending(coordinates) => self.materialize(coordinates),
        }
    }

    fn materialize(&mut self, coordinates: Coordinates) -> usize {
        self.elements.push(Element {
            value: T::default(),
            coordinates,
        });
        self.elements.len() - 1
    }
}
