//! A generic container for a value that may or may not be present
//!
//! [`Maybe<T>`] is modeled after the type of the same name in Haskell. It
//! holds either exactly one owned value of type `T` or nothing at all, and
//! it is meant for situations where the absence of a value is an ordinary
//! state, not an error. Check for presence with [`Maybe::is_just`] before
//! extracting; extracting from an empty `Maybe` is a contract violation
//! and panics with an [`EmptyMaybeError`].
//!
//! ```
//! use maybe::{Maybe, Nothing};
//!
//! let mut with_value = Maybe::just(10);
//! let without_value: Maybe<i32> = Maybe::nothing();
//!
//! if with_value.is_just() {
//!     // There is a value, extracting it is safe.
//!     assert_eq!(*with_value.value(), 10);
//! }
//!
//! // The fallible accessors report the absence instead of panicking.
//! assert!(without_value.try_value().is_err());
//!
//! // Assign directly from a value...
//! with_value.set(20);
//! assert_eq!(with_value, Maybe::just(20));
//!
//! // ...or from the explicit no-value marker.
//! with_value = Nothing.into();
//! assert!(with_value.is_nothing());
//! ```

mod error;
mod maybe;

pub use error::EmptyMaybeError;
pub use maybe::{Maybe, Nothing};
