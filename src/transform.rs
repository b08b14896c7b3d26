//! Combinators that derive a new [Outcome] from an existing one. Each is
//! defined per side; on the inactive side it forwards the payload untouched
//! without running any caller closure, so failures short-circuit through a
//! success pipeline and vice versa. [Outcome::filter] and [Outcome::recover]
//! are the only two operations that cross from one side to the other.

use crate::outcome::Outcome;

impl<S, F> Outcome<S, F> {
  /// Apply a function to the success value, forwarding a failure untouched
  pub fn map_success<S2>(self, f: impl FnOnce(S) -> S2) -> Outcome<S2, F> {
    match self {
      Self::Success(v) => Outcome::Success(f(v)),
      Self::Failure(e) => Outcome::Failure(e),
    }
  }
  /// Apply a function to the failure diagnostic, forwarding a success
  /// untouched
  pub fn map_failure<F2>(self, f: impl FnOnce(F) -> F2) -> Outcome<S, F2> {
    match self {
      Self::Success(v) => Outcome::Success(v),
      Self::Failure(e) => Outcome::Failure(f(e)),
    }
  }
  /// Transform both sides at once. Exactly one of the two functions runs,
  /// the one matching the active side.
  pub fn map<S2, F2>(
    self,
    on_success: impl FnOnce(S) -> S2,
    on_failure: impl FnOnce(F) -> F2,
  ) -> Outcome<S2, F2> {
    match self {
      Self::Success(v) => Outcome::Success(on_success(v)),
      Self::Failure(e) => Outcome::Failure(on_failure(e)),
    }
  }
  /// Chain an operation that can itself fail. The outcome it returns is
  /// passed through verbatim, never re-wrapped. A failure short-circuits
  /// without invoking the closure.
  pub fn flat_map_success<S2>(self, f: impl FnOnce(S) -> Outcome<S2, F>) -> Outcome<S2, F> {
    match self {
      Self::Success(v) => f(v),
      Self::Failure(e) => Outcome::Failure(e),
    }
  }
  /// Chain a recovery strategy that can itself fail, forwarding a success
  /// untouched
  pub fn flat_map_failure<F2>(self, f: impl FnOnce(F) -> Outcome<S, F2>) -> Outcome<S, F2> {
    match self {
      Self::Success(v) => Outcome::Success(v),
      Self::Failure(e) => f(e),
    }
  }
  /// Chain either side through an outcome-returning function. Exactly one of
  /// the two runs and its outcome is returned directly.
  pub fn flat_map<S2, F2>(
    self,
    on_success: impl FnOnce(S) -> Outcome<S2, F2>,
    on_failure: impl FnOnce(F) -> Outcome<S2, F2>,
  ) -> Outcome<S2, F2> {
    match self {
      Self::Success(v) => on_success(v),
      Self::Failure(e) => on_failure(e),
    }
  }
  /// Demote a success whose value fails a post-hoc check. A success that
  /// passes the predicate and any failure are forwarded untouched;
  /// `fail_with` turns the rejected value into a diagnostic.
  pub fn filter(self, predicate: impl FnOnce(&S) -> bool, fail_with: impl FnOnce(S) -> F) -> Self {
    match self {
      Self::Success(v) if predicate(&v) => Self::Success(v),
      Self::Success(v) => Self::Failure(fail_with(v)),
      Self::Failure(e) => Self::Failure(e),
    }
  }
  /// Promote a recognized failure to a success. Failures the predicate
  /// rejects keep propagating, as does an existing success.
  pub fn recover(self, predicate: impl FnOnce(&F) -> bool, rescue: impl FnOnce(F) -> S) -> Self {
    match self {
      Self::Failure(e) if predicate(&e) => Self::Success(rescue(e)),
      other => other,
    }
  }
}
