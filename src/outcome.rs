//! The two-case sum type at the center of the crate, with variant queries,
//! optional-style accessors and std interop. The combinator families live in
//! [crate::transform] and [crate::consume].

use std::fmt;

use never::Never;

/// The outcome of an operation that either succeeded with an `S` or failed
/// with an `F`. Exactly one side is ever active, and no operation mutates an
/// existing value in place; combinators consume it and hand back either the
/// same value or a fresh one.
///
/// The variant tag alone decides which side is active. The payload may well
/// be `()`, `None` or an empty string; a success holding an "empty" value is
/// still a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<S, F> {
  /// The operation produced a value
  Success(S),
  /// The operation produced a diagnostic
  Failure(F),
}

impl<S, F> Outcome<S, F> {
  /// Whether the success side is active. Always the negation of
  /// [Outcome::is_failure]
  pub fn is_success(&self) -> bool { matches!(self, Self::Success(_)) }
  /// Whether the failure side is active. Always the negation of
  /// [Outcome::is_success]
  pub fn is_failure(&self) -> bool { matches!(self, Self::Failure(_)) }
  /// The success value if that side is active. Querying the wrong side
  /// yields [None], never a panic
  pub fn success(&self) -> Option<&S> {
    match self {
      Self::Success(v) => Some(v),
      Self::Failure(_) => None,
    }
  }
  /// The failure diagnostic if that side is active, [None] otherwise
  pub fn failure(&self) -> Option<&F> {
    match self {
      Self::Success(_) => None,
      Self::Failure(e) => Some(e),
    }
  }
  /// Owned variant of [Outcome::success]
  pub fn into_success(self) -> Option<S> {
    match self {
      Self::Success(v) => Some(v),
      Self::Failure(_) => None,
    }
  }
  /// Owned variant of [Outcome::failure]
  pub fn into_failure(self) -> Option<F> {
    match self {
      Self::Success(_) => None,
      Self::Failure(e) => Some(e),
    }
  }
  /// Borrow both sides, so combinators that consume their receiver can be
  /// applied without giving up the original
  pub fn as_ref(&self) -> Outcome<&S, &F> {
    match self {
      Self::Success(v) => Outcome::Success(v),
      Self::Failure(e) => Outcome::Failure(e),
    }
  }
  /// Convert into the standard library's equivalent sum type
  pub fn into_result(self) -> Result<S, F> { self.into() }
}

impl<S> Outcome<S, Never> {
  /// Extract the success value of an outcome whose failure side is
  /// uninhabited
  pub fn never_fails(self) -> S {
    match self {
      Self::Success(v) => v,
      Self::Failure(e) => match e {},
    }
  }
}

impl<F> Outcome<Never, F> {
  /// Extract the diagnostic of an outcome whose success side is uninhabited
  pub fn never_succeeds(self) -> F {
    match self {
      Self::Success(v) => match v {},
      Self::Failure(e) => e,
    }
  }
}

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
  fn from(result: Result<S, F>) -> Self {
    match result {
      Ok(v) => Self::Success(v),
      Err(e) => Self::Failure(e),
    }
  }
}

impl<S, F> From<Outcome<S, F>> for Result<S, F> {
  fn from(outcome: Outcome<S, F>) -> Self {
    match outcome {
      Outcome::Success(v) => Ok(v),
      Outcome::Failure(e) => Err(e),
    }
  }
}

impl<S, F> IntoIterator for Outcome<S, F> {
  type Item = S;
  type IntoIter = std::option::IntoIter<S>;
  fn into_iter(self) -> Self::IntoIter { self.into_success().into_iter() }
}

impl<'a, S, F> IntoIterator for &'a Outcome<S, F> {
  type Item = &'a S;
  type IntoIter = std::option::IntoIter<&'a S>;
  fn into_iter(self) -> Self::IntoIter { self.success().into_iter() }
}

impl<S: fmt::Display, F: fmt::Display> fmt::Display for Outcome<S, F> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Success(v) => write!(f, "Success({v})"),
      Self::Failure(e) => write!(f, "Failure({e})"),
    }
  }
}
