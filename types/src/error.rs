//! Contract violations raised by the wrapper types.
//!
//! Both kinds signal programmer misuse at the call site. They are created in
//! one place so every violation is reported the same way before it is handed
//! back to the caller.

use thiserror::Error;

/// Misuse of a [`Maybe`](crate::Maybe) or [`Outcome`](crate::Outcome) contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WrapperError {
    /// A checked constructor was handed an absent value.
    #[error("absent value passed to {constructor}()")]
    InvalidConstruction { constructor: &'static str },
    /// An accessor was called on the wrong side of a wrapper.
    #[error("{accessor}() called on {found}")]
    InvalidState {
        accessor: &'static str,
        found: &'static str,
    },
}

impl WrapperError {
    pub(crate) fn invalid_construction(constructor: &'static str) -> Self {
        tracing::debug!(constructor, "rejected absent payload");
        Self::InvalidConstruction { constructor }
    }

    pub(crate) fn invalid_state(accessor: &'static str, found: &'static str) -> Self {
        tracing::debug!(accessor, found, "accessor called in wrong state");
        Self::InvalidState { accessor, found }
    }

    #[must_use]
    pub fn is_invalid_construction(&self) -> bool {
        matches!(self, Self::InvalidConstruction { .. })
    }

    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }
}
