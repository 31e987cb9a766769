//! # signalis - Typed Signal/Slot Dispatcher
//!
//! `signalis` connects any number of callables ("slots") to one typed
//! [`Signal`]. Invoking the signal calls every slot in registration order and
//! folds their return values through a [`Combiner`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use signalis::{Last, Signal};
//!
//! // Slots take a `&mut i32` and return an `i32`; keep the last result.
//! let mut signal: Signal<dyn FnMut(&mut i32) -> i32, Last<i32>> = Signal::new();
//!
//! signal.register(|x: &mut i32| { *x *= 2; *x });
//! let id = signal.register(|x: &mut i32| { *x += 1; *x });
//!
//! let mut value = 5;
//! assert_eq!(signal.invoke((&mut value,)), Ok(11));
//!
//! signal.unregister(id);
//! assert_eq!(signal.invoke((&mut value,)), Ok(22));
//! ```
//!
//! ## Combiners
//!
//! | Combiner | `invoke` returns |
//! |---|---|
//! | [`Discard`] (default) | `()` |
//! | [`Last<T>`] | `Result<T, EmptyResult>` |
//! | [`First<T>`] | `Result<T, EmptyResult>` |
//! | [`Collect<T>`] | `Vec<T>` |
//!
//! Use `Last<Void>`, `First<Void>` or `Collect<Void>` with slots that return
//! nothing. Custom policies implement [`Combiner`].
//!
//! ## Threading
//!
//! Signals are single-threaded: slots need not be `Send`, and `invoke` takes
//! `&mut self`. Share a signal across threads by wrapping it in a lock.
//!
//! ## Features
//!
//! - `tracing` (default): emit `trace!`/`debug!` events for registration and
//!   invocation.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod builder;
mod signal;

pub use builder::SignalBuilder;
pub use signal::Signal;

pub use signalis_core::{
    // Error types
    BoxError,
    // Combiner contract
    Combiner,
    EmptyResult,
    // Slot call contract
    IntoSlot,
    SignalError,
    Signature,
    // Identity
    SlotId,
    Void,
};

pub use signalis_std::{Collect, Discard, First, Last};

/// Standard combiners.
pub mod combiners {
    pub use signalis_std::combiners::{Collect, Discard, First, Last};
}

/// Testing utilities.
pub mod testing {
    pub use signalis_std::testing::{CallLog, DropCounter, Tracked};
}

/// Prelude module - common imports for signalis.
///
/// # Usage
///
/// ```rust,ignore
/// use signalis::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Collect, Combiner, Discard, EmptyResult, First, Last, Signal, SignalError, SlotId, Void,
    };
}
