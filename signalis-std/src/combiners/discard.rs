use signalis_core::Combiner;

/// Ignores every slot result. The default combiner of a signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl<T> Combiner<T> for Discard {
    type Output = ();

    #[inline]
    fn combine(&mut self, _item: T) {}

    #[inline]
    fn result(&mut self) {}
}
