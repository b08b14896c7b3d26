//! Alias for iterators with an erased concrete type, which would otherwise
//! make signatures tedious

use std::iter;

/// An iterator of `T` with its concrete type boxed away
pub type BoxedIter<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// [BoxedIter] of a single element
pub fn box_once<'a, T: 'a>(t: T) -> BoxedIter<'a, T> { Box::new(iter::once(t)) }

/// [BoxedIter] of no elements
pub fn box_empty<'a, T: 'a>() -> BoxedIter<'a, T> { Box::new(iter::empty()) }
