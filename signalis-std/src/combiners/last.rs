use signalis_core::{Combiner, EmptyResult, Void};

/// Keeps the value returned by the last slot to run.
///
/// Each item overwrites the previous one. Finalizing without any item yields
/// [`EmptyResult`].
#[derive(Debug, Clone)]
pub struct Last<T> {
    last: Option<T>,
}

impl<T> Last<T> {
    /// Create an empty combiner.
    pub fn new() -> Self {
        Self { last: None }
    }
}

impl<T> Default for Last<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Combiner<T> for Last<T> {
    type Output = Result<T, EmptyResult>;

    fn combine(&mut self, item: T) {
        self.last = Some(item);
    }

    fn result(&mut self) -> Self::Output {
        self.last.take().ok_or(EmptyResult)
    }

    fn reset(&mut self) {
        self.last = None;
    }
}

impl Combiner<()> for Last<Void> {
    type Output = ();

    #[inline]
    fn combine(&mut self, (): ()) {}

    #[inline]
    fn result(&mut self) {}
}
