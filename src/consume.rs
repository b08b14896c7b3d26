//! Combinators that end a chain by turning an [Outcome] into a side effect,
//! a plain value or a lazy sequence. The conditional actions hand the
//! receiver back untouched so chains can keep going after observing a side.

use crate::boxed_iter::{box_empty, box_once, BoxedIter};
use crate::outcome::Outcome;
use crate::sequence::Sequence;

impl<S, F> Outcome<S, F> {
  /// Run a consumer on the success value for its side effect, then hand the
  /// outcome back for further chaining. No-op on a failure.
  pub fn if_success(self, f: impl FnOnce(&S)) -> Self {
    if let Self::Success(v) = &self {
      f(v)
    }
    self
  }
  /// Run a consumer on the failure diagnostic, then hand the outcome back.
  /// No-op on a success.
  pub fn if_failure(self, f: impl FnOnce(&F)) -> Self {
    if let Self::Failure(e) = &self {
      f(e)
    }
    self
  }
  /// Run exactly one of the two consumers, the one matching the active side,
  /// then hand the outcome back unchanged
  pub fn if_success_or_else(self, on_success: impl FnOnce(&S), on_failure: impl FnOnce(&F)) -> Self {
    match &self {
      Self::Success(v) => on_success(v),
      Self::Failure(e) => on_failure(e),
    }
    self
  }
  /// The success value, or an eagerly supplied default on failure
  pub fn unwrap_or(self, default: S) -> S {
    match self {
      Self::Success(v) => v,
      Self::Failure(_) => default,
    }
  }
  /// The success value, or a fallback computed lazily from the diagnostic.
  /// Unlike [Outcome::unwrap_or] the fallback sees the failure payload and
  /// only runs when needed.
  pub fn unwrap_or_else(self, f: impl FnOnce(F) -> S) -> S {
    match self {
      Self::Success(v) => v,
      Self::Failure(e) => f(e),
    }
  }
  /// Iterator over the success side, yielding one element on a success and
  /// none on a failure
  pub fn iter_success(&self) -> BoxedIter<'_, &S> {
    match self {
      Self::Success(v) => box_once(v),
      Self::Failure(_) => box_empty(),
    }
  }
  /// Iterator over the failure side, yielding one element on a failure and
  /// none on a success
  pub fn iter_failure(&self) -> BoxedIter<'_, &F> {
    match self {
      Self::Failure(e) => box_once(e),
      Self::Success(_) => box_empty(),
    }
  }
  /// Restartable lazy view of the success side with the same 0-or-1
  /// cardinality as [Outcome::iter_success]
  pub fn stream_success(&self) -> Sequence<'_, &S> { Sequence::new(move || self.success()) }
  /// Restartable lazy view of the failure side
  pub fn stream_failure(&self) -> Sequence<'_, &F> { Sequence::new(move || self.failure()) }
}

#[cfg(test)]
mod test {
  use std::cell::RefCell;

  use itertools::Itertools;

  use crate::{failure, success, Outcome};

  #[test]
  fn conditional_actions_match_the_active_side() {
    let seen = RefCell::new(Vec::new());
    let win = success::<_, &str>(123).if_success(|v| seen.borrow_mut().push(*v));
    assert_eq!(win, success(123), "receiver handed back unchanged");
    let lose = failure::<i32, _>("down").if_success(|_| panic!("ran on a failure"));
    let lose = lose.if_failure(|e| seen.borrow_mut().push(e.len() as i32));
    assert_eq!(lose, failure("down"));
    assert_eq!(*seen.borrow(), vec![123, 4]);
  }

  #[test]
  fn if_success_or_else_runs_exactly_one_consumer() {
    let log = RefCell::new(Vec::new());
    let win = success::<_, String>("Server refreshed")
      .if_success_or_else(|m| log.borrow_mut().push(format!("info: {m}")), |e| {
        log.borrow_mut().push(format!("error: {e}"))
      });
    assert_eq!(win, success("Server refreshed"), "chaining continues from the original");
    let _ = failure::<&str, _>("Connection error".to_string())
      .if_success_or_else(|m| log.borrow_mut().push(format!("info: {m}")), |e| {
        log.borrow_mut().push(format!("error: {e}"))
      });
    assert_eq!(*log.borrow(), vec!["info: Server refreshed", "error: Connection error"]);
  }

  #[test]
  fn unwrap_or_is_eager_and_unwrap_or_else_is_lazy() {
    assert_eq!(success::<_, i32>("OK").unwrap_or("X"), "OK");
    assert_eq!(failure::<&str, i32>(0).unwrap_or("X"), "X");
    let sign = |x: i32| if x > 0 { "HI" } else { "LO" };
    assert_eq!(failure::<&str, _>(1024).unwrap_or_else(sign), "HI");
    assert_eq!(failure::<&str, _>(-256).unwrap_or_else(sign), "LO");
    let out = success::<_, i32>("kept").unwrap_or_else(|_| panic!("fallback ran on a success"));
    assert_eq!(out, "kept");
  }

  #[test]
  fn iterators_have_zero_or_one_elements() {
    let win = success::<_, &str>(7);
    assert_eq!(win.iter_success().collect_vec(), vec![&7]);
    assert_eq!(win.iter_failure().count(), 0);
    let lose = failure::<i32, _>("gone");
    assert_eq!(lose.iter_failure().collect_vec(), vec![&"gone"]);
    assert_eq!(lose.iter_success().count(), 0);
  }

  #[test]
  fn streams_restart_at_full_cardinality() {
    let win = success::<_, &str>(7);
    let stream = win.stream_success();
    assert_eq!(stream.iter().collect_vec(), vec![&7]);
    assert_eq!(stream.iter().collect_vec(), vec![&7], "a fresh pass yields the element again");
    assert_eq!(win.stream_failure().iter().count(), 0);
    let lose = failure::<i32, _>("gone");
    assert_eq!(lose.stream_failure().iter().collect_vec(), vec![&"gone"]);
    assert_eq!(lose.stream_success().iter().count(), 0);
  }

  // The refresh-a-server scenario that motivates railway chains: observe
  // both sides, then reduce to a plain uptime figure.
  #[test]
  fn railway_chain_end_to_end() {
    struct Server {
      uptime: i32,
    }
    fn connect(fail: bool) -> Outcome<Server, &'static str> {
      if fail { failure("Connection error") } else { success(Server { uptime: 123 }) }
    }
    let report = |fail: bool, log: &RefCell<Vec<String>>| {
      connect(fail)
        .if_success_or_else(
          |_| log.borrow_mut().push("Server refreshed".to_string()),
          |e| log.borrow_mut().push(e.to_string()),
        )
        .map_success(|s| s.uptime)
        .unwrap_or(-1)
    };
    let log = RefCell::new(Vec::new());
    assert_eq!(report(false, &log), 123);
    assert_eq!(report(true, &log), -1);
    assert_eq!(*log.borrow(), vec!["Server refreshed", "Connection error"]);
  }
}
