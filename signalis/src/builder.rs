//! Builder for [`Signal`].

use crate::signal::Signal;
use signalis_std::Discard;
use std::marker::PhantomData;

/// Configures a [`Signal`] before any slot is registered.
///
/// # Example
/// ```rust,ignore
/// let signal: Signal<dyn FnMut(&str) -> usize, Collect<usize>> = Signal::builder()
///     .combiner(Collect::with_capacity(8))
///     .capacity(8)
///     .build();
/// ```
pub struct SignalBuilder<S: ?Sized, C = Discard> {
    combiner: C,
    capacity: usize,
    _signature: PhantomData<fn() -> Box<S>>,
}

impl<S: ?Sized> SignalBuilder<S> {
    /// Create a builder using the [`Discard`] combiner.
    pub fn new() -> Self {
        Self {
            combiner: Discard,
            capacity: 0,
            _signature: PhantomData,
        }
    }
}

impl<S: ?Sized> Default for SignalBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized, C> SignalBuilder<S, C> {
    /// Set the combiner, replacing the current one.
    pub fn combiner<D>(self, combiner: D) -> SignalBuilder<S, D> {
        SignalBuilder {
            combiner,
            capacity: self.capacity,
            _signature: PhantomData,
        }
    }

    /// Reserve room for `capacity` slots.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Build the signal.
    pub fn build(self) -> Signal<S, C> {
        Signal::with_capacity_and_combiner(self.capacity, self.combiner)
    }
}
