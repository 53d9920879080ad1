//! Explicit presence and outcome wrappers.
//!
//! [`Maybe`] makes absence of a value explicit and [`Outcome`] makes failure
//! of an operation explicit, so calling code composes and branches on those
//! states through a small closed set of combinators instead of null checks.
//! Both are pure, immutable value types: no IO, no async, no shared state.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Every error is a WrapperError contract violation

mod error;
mod maybe;
mod outcome;

pub use error::WrapperError;
pub use maybe::Maybe;
pub use outcome::Outcome;
