//! # Signal
//!
//! A [`Signal`] owns an insertion-ordered set of slots sharing one call
//! signature, plus one [`Combiner`] that folds their return values.
//!
//! # Ordering
//!
//! Slots run in registration order. Removing a slot never reorders the
//! others, and ids are never reused, so ascending id order and invocation
//! order agree.
//!
//! # Argument Fan-out
//!
//! Arguments are passed as a tuple and forwarded as described in
//! [`Signature`]. A `&mut` argument is shared by every slot in turn, so each
//! slot observes the writes of the slots before it. By-value arguments are
//! cloned for every slot but the last; a move-only argument can only reach a
//! single slot, so signals taking one go through [`Signal::invoke_with`].
//!
//! # Failures
//!
//! A panicking slot unwinds straight through [`Signal::invoke`]. Slots that
//! already ran keep their side effects, the slot table is left as it was, and
//! the combiner is reset when the next invocation starts. Slots returning
//! `Result` can use [`Signal::try_invoke`] to stop at the first error instead.

use crate::builder::SignalBuilder;
use indexmap::IndexMap;
use signalis_core::{Combiner, IntoSlot, Signature, SlotId};
use signalis_std::Discard;
use std::fmt;

/// A typed signal with an ordered set of slots.
///
/// `S` is the slot trait object, e.g. `dyn FnMut(&mut i32) -> bool`, and `C`
/// the combiner deciding what [`invoke`](Signal::invoke) returns.
///
/// # Example
///
/// ```rust,ignore
/// use signalis::{Collect, Signal};
///
/// let mut signal: Signal<dyn FnMut(i32) -> i32, Collect<i32>> = Signal::new();
/// signal.register(|x: i32| x + 1);
/// let doubled = signal.register(|x: i32| x * 2);
///
/// assert_eq!(signal.invoke((10,)), vec![11, 20]);
///
/// signal.unregister(doubled);
/// assert_eq!(signal.invoke((10,)), vec![11]);
/// ```
///
/// Mutating the slot table from inside a running slot is not possible:
/// `invoke` holds `&mut self` for the whole traversal.
pub struct Signal<S: ?Sized, C = Discard> {
    slots: IndexMap<SlotId, Box<S>>,
    combiner: C,
    next_id: Option<SlotId>,
}

impl<S: ?Sized> Signal<S> {
    /// Start configuring a signal.
    pub fn builder() -> SignalBuilder<S> {
        SignalBuilder::new()
    }
}

impl<S: ?Sized, C: Default> Signal<S, C> {
    /// Create an empty signal with a default combiner.
    pub fn new() -> Self {
        Self::with_combiner(C::default())
    }
}

impl<S: ?Sized, C> Signal<S, C> {
    /// Create an empty signal using the given combiner.
    pub fn with_combiner(combiner: C) -> Self {
        Self::with_capacity_and_combiner(0, combiner)
    }

    pub(crate) fn with_capacity_and_combiner(capacity: usize, combiner: C) -> Self {
        Self {
            slots: IndexMap::with_capacity(capacity),
            combiner,
            next_id: Some(SlotId::FIRST),
        }
    }

    /// Register a slot and return its id.
    ///
    /// The slot runs after every slot registered before it.
    ///
    /// # Panics
    ///
    /// Panics once every `u64` id has been handed out, since any further id
    /// would repeat an earlier one.
    pub fn register<F>(&mut self, slot: F) -> SlotId
    where
        F: IntoSlot<S>,
    {
        let Some(id) = self.next_id else {
            panic!("slot ids exhausted for this signal");
        };
        self.next_id = id.next();
        self.slots.insert(id, slot.into_slot());

        #[cfg(feature = "tracing")]
        tracing::trace!(%id, slots = self.slots.len(), "slot registered");

        id
    }

    /// Remove a slot.
    ///
    /// Unknown or already removed ids are ignored. Returns whether a slot was
    /// removed.
    pub fn unregister(&mut self, id: SlotId) -> bool {
        let removed = self.slots.shift_remove(&id).is_some();

        #[cfg(feature = "tracing")]
        tracing::trace!(%id, removed, slots = self.slots.len(), "slot unregistered");

        removed
    }

    /// Remove every slot. Ids handed out so far stay retired.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Get the number of registered slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the signal has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Check if `id` names a registered slot.
    pub fn contains(&self, id: SlotId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Ids of the registered slots, in invocation order.
    pub fn ids(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.slots.keys().copied()
    }

    /// Get the combiner.
    pub fn combiner(&self) -> &C {
        &self.combiner
    }

    /// Call every slot with `args` and return the combined result.
    ///
    /// With no slots registered the combiner is still finalized, so the result
    /// is whatever it produces when empty.
    pub fn invoke<Args>(&mut self, mut args: Args) -> C::Output
    where
        S: Signature<Args>,
        C: Combiner<<S as Signature<Args>>::Output>,
    {
        self.combiner.reset();

        #[cfg(feature = "tracing")]
        tracing::trace!(slots = self.slots.len(), "invoking signal");

        let mut slots = self.slots.values_mut();
        if let Some(last) = slots.next_back() {
            for slot in slots {
                self.combiner.combine(slot.forward(&mut args));
            }
            self.combiner.combine(last.consume(args));
        }
        self.combiner.result()
    }

    /// Call every slot through `call` and return the combined result.
    ///
    /// `call` receives each slot in registration order and decides how to
    /// invoke it. Use this when arguments cannot be cloned, building a fresh
    /// value for every slot.
    ///
    /// ```rust,ignore
    /// let mut signal: Signal<dyn FnMut(File) -> usize, Collect<usize>> = Signal::new();
    /// let sizes = signal.invoke_with(|slot| slot(File::open("log.txt").unwrap()));
    /// ```
    pub fn invoke_with<T, F>(&mut self, mut call: F) -> C::Output
    where
        F: FnMut(&mut S) -> T,
        C: Combiner<T>,
    {
        self.combiner.reset();

        #[cfg(feature = "tracing")]
        tracing::trace!(slots = self.slots.len(), "invoking signal");

        for slot in self.slots.values_mut() {
            self.combiner.combine(call(&mut **slot));
        }
        self.combiner.result()
    }

    /// Call every slot with `args`, stopping at the first slot error.
    ///
    /// Slots must return `Result<T, E>`; the `Ok` values are combined. The
    /// first `Err` is returned as is and the remaining slots do not run.
    /// Slots that ran before it keep their side effects.
    pub fn try_invoke<Args, T, E>(&mut self, mut args: Args) -> Result<C::Output, E>
    where
        S: Signature<Args, Output = Result<T, E>>,
        C: Combiner<T>,
    {
        self.combiner.reset();

        #[cfg(feature = "tracing")]
        tracing::trace!(slots = self.slots.len(), "invoking signal");

        let mut slots = self.slots.iter_mut();
        if let Some((last_id, last)) = slots.next_back() {
            for (id, slot) in slots {
                let item = slot.forward(&mut args).inspect_err(|_| slot_failed(*id))?;
                self.combiner.combine(item);
            }
            let item = last.consume(args).inspect_err(|_| slot_failed(*last_id))?;
            self.combiner.combine(item);
        }
        Ok(self.combiner.result())
    }
}

fn slot_failed(id: SlotId) {
    #[cfg(feature = "tracing")]
    tracing::debug!(%id, "slot failed, invocation aborted");

    #[cfg(not(feature = "tracing"))]
    let _ = id;
}

impl<S: ?Sized, C: Default> Default for Signal<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized, C> fmt::Debug for Signal<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("slots", &self.slots.keys().collect::<Vec<_>>())
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}
