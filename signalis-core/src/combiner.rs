//! Result folding across the slots of one invocation.

/// Folds the values returned by the slots of one invocation into one result.
///
/// A signal calls [`reset`](Combiner::reset) before the first slot runs,
/// [`combine`](Combiner::combine) once per slot in registration order, and
/// [`result`](Combiner::result) after the last slot returned. Items are moved
/// in and the final value is moved out, so `T` never needs to be `Clone`.
///
/// # Implementing
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct Sum(i64);
///
/// impl Combiner<i64> for Sum {
///     type Output = i64;
///
///     fn combine(&mut self, item: i64) {
///         self.0 += item;
///     }
///
///     fn result(&mut self) -> i64 {
///         std::mem::take(&mut self.0)
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot combine slot results of type `{T}`",
    label = "missing `Combiner<{T}>` implementation",
    note = "Slots returning nothing need a `Void` combiner such as `Last<Void>`, or `Discard`."
)]
pub trait Combiner<T> {
    /// The value produced at the end of an invocation.
    type Output;

    /// Accumulates the result of one slot.
    fn combine(&mut self, item: T);

    /// Finalizes the invocation and relinquishes the accumulated state.
    fn result(&mut self) -> Self::Output;

    /// Discards any state left over from an interrupted invocation.
    ///
    /// Combiners whose `result` already leaves them empty only need this when
    /// a slot can fail halfway through an invocation.
    fn reset(&mut self) {}
}

/// Item marker for slots that return nothing.
///
/// `Last<Void>`, `First<Void>` and `Collect<Void>` combine the `()` returned by
/// side-effect-only slots and produce `()` themselves, so the same `invoke`
/// call serves both kinds of signature. The type is uninhabited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Void {}
