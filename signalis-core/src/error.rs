//! Error types for signalis.
//!
//! - [`EmptyResult`] - raised by keep-one combiners that saw no slot results
//! - [`SignalError`] - top-level error for callers that want a single type
//!
//! Registration and removal never fail, and a slot's own error is handed back
//! to the caller untouched, so the dispatcher has no error type of its own.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A keep-one combiner was finalized without receiving any slot result.
///
/// Returned instead of a default value so that "no slot ran" can never be
/// confused with "a slot returned the default".
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[error("no slot produced a result for this invocation")]
pub struct EmptyResult;

/// Top-level error type for signal invocations.
#[derive(Error, Debug)]
pub enum SignalError {
    /// The combiner had nothing to return.
    #[error(transparent)]
    Empty(#[from] EmptyResult),

    /// A slot reported a failure.
    #[error("slot failed")]
    Slot(#[source] BoxError),
}

impl From<BoxError> for SignalError {
    fn from(err: BoxError) -> Self {
        SignalError::Slot(err)
    }
}
