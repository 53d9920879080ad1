//! The result of an operation that may fail.

use std::fmt;

use crate::error::WrapperError;
use crate::maybe::Maybe;

/// Either a success payload `R` or an error payload `E`, never both and
/// never neither.
///
/// Like [`Maybe`], the slot is private and only [`Outcome::ok`] and
/// [`Outcome::err`] (or their checked forms) can produce one:
///
/// ```compile_fail
/// use optres_types::Outcome;
///
/// let forged: Outcome<u8, ()> = Outcome(Ok(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome<R, E>(Result<R, E>);

impl<R, E> Outcome<R, E> {
    #[must_use]
    pub const fn ok(value: R) -> Self {
        Self(Ok(value))
    }

    #[must_use]
    pub const fn err(error: E) -> Self {
        Self(Err(error))
    }

    /// Checked success constructor for a value arriving from a nullable
    /// boundary.
    pub fn try_ok(value: Option<R>) -> Result<Self, WrapperError> {
        Self::success(value, "Outcome::try_ok")
    }

    /// Checked error constructor for an error arriving from a nullable
    /// boundary.
    pub fn try_err(error: Option<E>) -> Result<Self, WrapperError> {
        Self::failure(error, "Outcome::try_err")
    }

    fn success(value: Option<R>, constructor: &'static str) -> Result<Self, WrapperError> {
        value
            .map(Self::ok)
            .ok_or_else(|| WrapperError::invalid_construction(constructor))
    }

    fn failure(error: Option<E>, constructor: &'static str) -> Result<Self, WrapperError> {
        error
            .map(Self::err)
            .ok_or_else(|| WrapperError::invalid_construction(constructor))
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.0.is_ok()
    }

    #[must_use]
    pub const fn is_err(&self) -> bool {
        self.0.is_err()
    }

    /// Borrow the success payload. Fails with [`WrapperError::InvalidState`]
    /// on an error outcome.
    pub fn get_result(&self) -> Result<&R, WrapperError> {
        match &self.0 {
            Ok(value) => Ok(value),
            Err(_) => Err(WrapperError::invalid_state(
                "Outcome::get_result",
                "an error outcome",
            )),
        }
    }

    /// Borrow the error payload. Fails with [`WrapperError::InvalidState`]
    /// on a success outcome.
    pub fn get_error(&self) -> Result<&E, WrapperError> {
        match &self.0 {
            Err(error) => Ok(error),
            Ok(_) => Err(WrapperError::invalid_state(
                "Outcome::get_error",
                "a success outcome",
            )),
        }
    }

    pub fn into_result(self) -> Result<R, WrapperError> {
        match self.0 {
            Ok(value) => Ok(value),
            Err(_) => Err(WrapperError::invalid_state(
                "Outcome::into_result",
                "an error outcome",
            )),
        }
    }

    pub fn into_error(self) -> Result<E, WrapperError> {
        match self.0 {
            Err(error) => Ok(error),
            Ok(_) => Err(WrapperError::invalid_state(
                "Outcome::into_error",
                "a success outcome",
            )),
        }
    }

    /// The success side as a [`Maybe`], absent for an error outcome.
    #[must_use]
    pub fn ok_value(self) -> Maybe<R> {
        Maybe::wrap(self.0.ok())
    }

    /// The error side as a [`Maybe`], absent for a success outcome.
    #[must_use]
    pub fn err_value(self) -> Maybe<E> {
        Maybe::wrap(self.0.err())
    }

    /// Transform the success payload; an error outcome is passed through and
    /// `transform` is not called.
    pub fn map<U>(self, transform: impl FnOnce(R) -> U) -> Outcome<U, E> {
        match self.0 {
            Ok(value) => Outcome::ok(transform(value)),
            Err(error) => Outcome::err(error),
        }
    }

    pub fn map_err<O>(self, transform: impl FnOnce(E) -> O) -> Outcome<R, O> {
        match self.0 {
            Ok(value) => Outcome::ok(value),
            Err(error) => Outcome::err(transform(error)),
        }
    }

    /// [`Outcome::map`] for transforms that hand back a nullable value. A
    /// `None` from `transform` is rejected as an invalid construction.
    pub fn try_map<U>(
        self,
        transform: impl FnOnce(R) -> Option<U>,
    ) -> Result<Outcome<U, E>, WrapperError> {
        match self.0 {
            Ok(value) => Outcome::success(transform(value), "Outcome::try_map"),
            Err(error) => Ok(Outcome::err(error)),
        }
    }

    pub fn try_map_err<O>(
        self,
        transform: impl FnOnce(E) -> Option<O>,
    ) -> Result<Outcome<R, O>, WrapperError> {
        match self.0 {
            Ok(value) => Ok(Outcome::ok(value)),
            Err(error) => Outcome::failure(transform(error), "Outcome::try_map_err"),
        }
    }

    #[must_use]
    pub fn as_ref(&self) -> Outcome<&R, &E> {
        Outcome(self.0.as_ref())
    }

    pub fn into_std(self) -> Result<R, E> {
        self.0
    }
}

impl<R, E> From<Result<R, E>> for Outcome<R, E> {
    fn from(value: Result<R, E>) -> Self {
        Self(value)
    }
}

impl<R, E> From<Outcome<R, E>> for Result<R, E> {
    fn from(value: Outcome<R, E>) -> Self {
        value.0
    }
}

impl<R: fmt::Display, E: fmt::Display> fmt::Display for Outcome<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Ok(value) => write!(f, "Ok({value})"),
            Err(error) => write!(f, "Err({error})"),
        }
    }
}
