//! # signalis-core
//!
//! Core contracts for the signalis signal/slot dispatcher.
//!
//! This crate only carries the vocabulary shared by every signal: it has no
//! storage and no dispatch loop of its own, so third-party combiners can
//! depend on it without pulling in the full `signalis` facade.
//!
//! # Building Blocks
//!
//! ## Slot call contract ([`Signature`], [`IntoSlot`])
//!
//! A signal is parameterized by a trait-object type such as
//! `dyn FnMut(i32, char) -> bool`. [`IntoSlot`] turns any matching callable
//! (free function, closure, boxed closure) into that erased form, and
//! [`Signature`] knows how to hand one argument tuple to every slot in turn:
//!
//! - by-value arguments are cloned for every slot except the last one;
//! - `&T` arguments are shared;
//! - `&mut T` arguments are reborrowed, so later slots see earlier writes.
//!
//! ## Result folding ([`Combiner`])
//!
//! A [`Combiner`] accumulates the value returned by each slot and yields one
//! result when the invocation ends. Signatures without a return value select
//! the no-return specialization through the [`Void`] marker.
//!
//! ## Identity ([`SlotId`])
//!
//! Every registration receives a [`SlotId`] drawn from a monotonic counter.
//!
//! # Error Types
//!
//! - [`EmptyResult`] - a keep-one combiner was finalized with no slot results
//! - [`SignalError`] - umbrella error for callers mixing slot and combiner failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod combiner;
mod error;
mod signature;
mod slot;

// Re-exports
pub use combiner::{Combiner, Void};
pub use error::{BoxError, EmptyResult, SignalError};
pub use signature::{IntoSlot, Signature};
pub use slot::SlotId;
