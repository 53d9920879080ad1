//! A value that may or may not be present.
//!
//! `Maybe<T>` holds a single slot that is either a `T` or nothing. It is built
//! only through [`Maybe::some`], [`Maybe::none`] and [`Maybe::wrap`] (or the
//! checked [`Maybe::try_some`] at a nullable boundary) and is never mutated:
//! every combinator consumes the receiver and returns a new instance.

use std::fmt;
use std::option;

use crate::error::WrapperError;
use crate::outcome::Outcome;

/// A `T`, or nothing.
///
/// The slot is private, so an instance can only come from one of the
/// constructors:
///
/// ```compile_fail
/// use optres_types::Maybe;
///
/// let forged = Maybe(Some(1));
/// ```
///
/// # Invariants
///
/// - Absence is the same whether it came from [`Maybe::none`] or from
///   wrapping a missing input with [`Maybe::wrap`].
/// - A present slot always holds a real `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Maybe<T>(Option<T>);

impl<T> Maybe<T> {
    /// A present value.
    #[must_use]
    pub const fn some(value: T) -> Self {
        Self(Some(value))
    }

    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }

    /// Wrap a possibly-missing foreign value. Never fails.
    #[must_use]
    pub fn wrap(value: Option<T>) -> Self {
        Self(value)
    }

    /// Checked form of [`Maybe::some`] for values arriving from a nullable
    /// boundary, where the caller asserts the value is there.
    pub fn try_some(value: Option<T>) -> Result<Self, WrapperError> {
        Self::present(value, "Maybe::try_some")
    }

    fn present(value: Option<T>, constructor: &'static str) -> Result<Self, WrapperError> {
        match value {
            Some(value) => Ok(Self::some(value)),
            None => Err(WrapperError::invalid_construction(constructor)),
        }
    }

    #[must_use]
    pub const fn is_some(&self) -> bool {
        self.0.is_some()
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Borrow the payload.
    ///
    /// Only call this once [`Maybe::is_some`] has been established; an absent
    /// instance yields [`WrapperError::InvalidState`].
    pub fn get(&self) -> Result<&T, WrapperError> {
        self.0
            .as_ref()
            .ok_or_else(|| WrapperError::invalid_state("Maybe::get", "an absent Maybe"))
    }

    /// Owned counterpart of [`Maybe::get`].
    pub fn into_value(self) -> Result<T, WrapperError> {
        self.0
            .ok_or_else(|| WrapperError::invalid_state("Maybe::into_value", "an absent Maybe"))
    }

    /// The payload, or `default` unchanged when absent.
    #[must_use]
    pub fn or(self, default: T) -> T {
        self.0.unwrap_or(default)
    }

    /// The payload, or whatever `supplier` returns when absent.
    ///
    /// `supplier` runs at most once, and only on an absent instance.
    pub fn or_else(self, supplier: impl FnOnce() -> T) -> T {
        match self.0 {
            Some(value) => value,
            None => supplier(),
        }
    }

    /// Keep the payload only if `predicate` accepts it.
    ///
    /// `predicate` is never invoked on an absent instance.
    #[must_use]
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self.0 {
            Some(value) if predicate(&value) => Self::some(value),
            _ => Self::none(),
        }
    }

    pub fn map<U>(self, transform: impl FnOnce(T) -> U) -> Maybe<U> {
        match self.0 {
            Some(value) => Maybe::some(transform(value)),
            None => Maybe::none(),
        }
    }

    /// Like [`Maybe::map`] for transforms that hand back a nullable value.
    ///
    /// A transform that yields `None` on a present instance is a contract
    /// violation; use [`Maybe::flat_map`] when "no value" is a legitimate
    /// answer.
    pub fn try_map<U>(
        self,
        transform: impl FnOnce(T) -> Option<U>,
    ) -> Result<Maybe<U>, WrapperError> {
        match self.0 {
            Some(value) => Maybe::present(transform(value), "Maybe::try_map"),
            None => Ok(Maybe::none()),
        }
    }

    pub fn flat_map<U>(self, transform: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        match self.0 {
            Some(value) => transform(value),
            None => Maybe::none(),
        }
    }

    /// Success with the payload, or failure with `error` when absent.
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self.0 {
            Some(value) => Outcome::ok(value),
            None => Outcome::err(error),
        }
    }

    /// Like [`Maybe::ok_or`], calling `error` at most once and only when absent.
    pub fn ok_or_else<E>(self, error: impl FnOnce() -> E) -> Outcome<T, E> {
        match self.0 {
            Some(value) => Outcome::ok(value),
            None => Outcome::err(error()),
        }
    }

    #[must_use]
    pub fn as_ref(&self) -> Maybe<&T> {
        Maybe(self.0.as_ref())
    }

    pub fn iter(&self) -> option::Iter<'_, T> {
        self.0.iter()
    }

    /// Zero or one element, in a fresh vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.0.iter().cloned().collect()
    }

    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::wrap(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.0
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = option::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "Some({value})"),
            None => f.write_str("None()"),
        }
    }
}
