//! Standard combiners.
//!
//! | Combiner | Result | With no slots |
//! |---|---|---|
//! | [`Discard`] | `()` | `()` |
//! | [`Last<T>`] | `Result<T, EmptyResult>`, newest value | `Err(EmptyResult)` |
//! | [`First<T>`] | `Result<T, EmptyResult>`, oldest value | `Err(EmptyResult)` |
//! | [`Collect<T>`] | `Vec<T>` in registration order | empty `Vec` |
//!
//! `Last<Void>`, `First<Void>` and `Collect<Void>` are the variants for slots
//! that return nothing; they behave like [`Discard`].
//!
//! [`EmptyResult`]: signalis_core::EmptyResult

mod collect;
mod discard;
mod first;
mod last;

pub use collect::Collect;
pub use discard::Discard;
pub use first::First;
pub use last::Last;
