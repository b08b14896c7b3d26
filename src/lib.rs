#![warn(missing_docs)]
//! An explicit success-or-failure value. [Outcome] is a two-case sum type
//! carrying either a success value or a failure diagnostic, with a combinator
//! surface for inspecting, transforming, chaining and consuming either side
//! without exceptions or panicking control flow. Both cases are acknowledged
//! at the type level; callers pick a side with a combinator, never by
//! catching.

pub mod boxed_iter;
pub mod construct;
pub mod consume;
pub mod outcome;
pub mod sequence;
pub mod transform;

pub use construct::{failure, of_fn, of_option, success};
pub use outcome::Outcome;
pub use sequence::Sequence;
