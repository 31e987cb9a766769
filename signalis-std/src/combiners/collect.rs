use signalis_core::{Combiner, Void};

/// Collects every slot result, in registration order.
///
/// An invocation without slots yields an empty `Vec`.
///
/// A combiner made with [`with_capacity`](Collect::with_capacity) reserves
/// that room again after handing out each result, so every invocation starts
/// with a presized buffer.
#[derive(Debug, Clone)]
pub struct Collect<T> {
    items: Vec<T>,
    reserve: usize,
}

impl<T> Collect<T> {
    /// Create an empty combiner.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a combiner that reserves room for `capacity` results per
    /// invocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            reserve: capacity,
        }
    }

    /// Room available for results before the buffer has to grow.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }
}

impl<T> Default for Collect<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Combiner<T> for Collect<T> {
    type Output = Vec<T>;

    fn combine(&mut self, item: T) {
        self.items.push(item);
    }

    fn result(&mut self) -> Vec<T> {
        std::mem::replace(&mut self.items, Vec::with_capacity(self.reserve))
    }

    fn reset(&mut self) {
        self.items.clear();
    }
}

impl Combiner<()> for Collect<Void> {
    type Output = ();

    #[inline]
    fn combine(&mut self, (): ()) {}

    #[inline]
    fn result(&mut self) {}
}
