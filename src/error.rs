/// The error produced when a value is extracted from an empty
/// [`Maybe`](crate::Maybe)
///
/// This signals a violated precondition on the caller's side, not a
/// recoverable condition: callers are expected to guard extraction with
/// [`Maybe::is_just`](crate::Maybe::is_just). The panicking accessors
/// raise it as their panic message and the `try_` accessors return it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyMaybeError;

impl std::fmt::Display for EmptyMaybeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "attempt to take the value out of an empty Maybe")
    }
}

impl std::error::Error for EmptyMaybeError {}
