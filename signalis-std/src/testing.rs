//! Testing utilities for signalis.
//!
//! - [`CallLog`]: a shared, append-only record of what slots observed
//! - [`Tracked`]: a move-only payload that counts how often it was dropped
//!
//! Signals are single-threaded, so both helpers use `Rc` rather than `Arc`.

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

// ============================================================================
// Call Log
// ============================================================================

/// A cloneable handle to a shared log of slot calls.
///
/// # Example
///
/// ```rust,ignore
/// let log = CallLog::new();
/// for index in 0..3 {
///     let log = log.clone();
///     signal.register(move || log.record(index));
/// }
/// signal.invoke(());
/// assert_eq!(log.entries(), vec![0, 1, 2]);
/// ```
pub struct CallLog<T> {
    entries: Rc<RefCell<Vec<T>>>,
}

impl<T> CallLog<T> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            entries: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Append an entry.
    pub fn record(&self, entry: T) {
        self.entries.borrow_mut().push(entry);
    }

    /// Get the number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Remove and return every recorded entry.
    pub fn take(&self) -> Vec<T> {
        self.entries.take()
    }
}

impl<T: Clone> CallLog<T> {
    /// Get a copy of the recorded entries.
    pub fn entries(&self) -> Vec<T> {
        self.entries.borrow().clone()
    }
}

impl<T> Default for CallLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CallLog<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CallLog<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.borrow().iter()).finish()
    }
}

// ============================================================================
// Move-only payload
// ============================================================================

/// Counts drops of [`Tracked`] values.
#[derive(Debug, Clone, Default)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked values dropped so far.
    pub fn dropped(&self) -> usize {
        self.0.get()
    }

    /// Wrap `value` in a payload reporting to this counter.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        Tracked {
            value,
            counter: self.clone(),
        }
    }
}

/// A payload that is deliberately not `Clone`.
///
/// Passing one through a signal proves no copy is made on the way; the drop
/// count proves none was lost either.
#[derive(Debug)]
pub struct Tracked<T> {
    value: T,
    counter: DropCounter,
}

impl<T> Tracked<T> {
    /// Borrow the wrapped value.
    pub fn get(&self) -> &T {
        &self.value
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        let dropped = &self.counter.0;
        dropped.set(dropped.get() + 1);
    }
}
