//! A restartable lazy iterable, a [Fn] that builds an iterator. The stream
//! accessors on [crate::Outcome] hand these out so outcomes can participate
//! in larger lazy pipelines.

use dyn_clone::{clone_box, DynClone};
use trait_set::trait_set;

use crate::boxed_iter::BoxedIter;

trait_set! {
  trait Produce<'a, T> = DynClone + Fn() -> BoxedIter<'a, T> + 'a;
}

/// Dynamic iterator building callback. Every call to [Sequence::iter] starts
/// a fresh pass over the same elements.
pub struct Sequence<'a, T: 'a>(Box<dyn Produce<'a, T>>);
impl<'a, T: 'a> Sequence<'a, T> {
  /// Construct from a concrete function returning a concrete iterable
  pub fn new<I: IntoIterator<Item = T> + 'a>(f: impl Fn() -> I + 'a + Clone) -> Self {
    Self(Box::new(move || Box::new(f().into_iter())))
  }
  /// Start a pass over the elements
  pub fn iter(&self) -> impl Iterator<Item = T> + '_ { (self.0)() }
}
impl<'a, T: 'a> Clone for Sequence<'a, T> {
  fn clone(&self) -> Self { Self(clone_box(&*self.0)) }
}
