//! Free functions that lift plain, optional and fallible values into
//! [Outcome].

use crate::outcome::Outcome;

/// Wrap a value as a success. This succeeds unconditionally; a payload that
/// is empty in its own domain, such as `()` or [None], still sits on the
/// success side.
pub fn success<S, F>(value: S) -> Outcome<S, F> { Outcome::Success(value) }

/// Wrap a diagnostic as a failure, unconditionally
pub fn failure<S, F>(error: F) -> Outcome<S, F> { Outcome::Failure(error) }

/// Lift an optional value: success of the contained value if present,
/// failure of the fallback diagnostic otherwise. Presence alone drives the
/// branch.
pub fn of_option<S, F>(value: Option<S>, if_empty: F) -> Outcome<S, F> {
  match value {
    Some(v) => Outcome::Success(v),
    None => Outcome::Failure(if_empty),
  }
}

/// Run a fallible computation exactly once, converting its error into the
/// failure side. Only this one invocation is guarded; panics raised inside
/// the closure propagate to the caller unchanged, as do panics from closures
/// passed to any other combinator in this crate.
pub fn of_fn<S, F>(f: impl FnOnce() -> Result<S, F>) -> Outcome<S, F> { f().into() }
