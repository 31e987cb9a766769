//! # signalis-std
//!
//! Standard implementations for the signalis signal/slot dispatcher.
//!
//! This crate provides:
//! - **Combiners**: [`Discard`], [`Last`], [`First`], [`Collect`]
//! - **Testing helpers**: call-order recording and move-only payloads

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use signalis_core;

// Modules
pub mod combiners;
pub mod testing;

pub use combiners::{Collect, Discard, First, Last};
