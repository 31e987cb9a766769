use signalis_core::{Combiner, EmptyResult, Void};

/// Keeps the value returned by the first slot to run.
///
/// Later items are dropped. Finalizing without any item yields
/// [`EmptyResult`].
#[derive(Debug, Clone)]
pub struct First<T> {
    first: Option<T>,
}

impl<T> First<T> {
    /// Create an empty combiner.
    pub fn new() -> Self {
        Self { first: None }
    }
}

impl<T> Default for First<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Combiner<T> for First<T> {
    type Output = Result<T, EmptyResult>;

    fn combine(&mut self, item: T) {
        if self.first.is_none() {
            self.first = Some(item);
        }
    }

    fn result(&mut self) -> Self::Output {
        self.first.take().ok_or(EmptyResult)
    }

    fn reset(&mut self) {
        self.first = None;
    }
}

impl Combiner<()> for First<Void> {
    type Output = ();

    #[inline]
    fn combine(&mut self, (): ()) {}

    #[inline]
    fn result(&mut self) {}
}
