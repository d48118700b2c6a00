//! Shared helpers for the integration tests.

use std::cell::Cell;
use std::rc::Rc;

/// Handle to the live-instance count shared by every [`Tracked`] value
/// created from the same counter.
#[derive(Clone, Default)]
pub struct Counter(Rc<Cell<i64>>);

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked values currently alive.
    pub fn live(&self) -> i64 {
        self.0.get()
    }

    /// Create a tracked value carrying `value`.
    pub fn track(&self, value: i32) -> Tracked {
        self.0.set(self.0.get() + 1);
        Tracked {
            counter: self.clone(),
            value,
        }
    }
}

/// Test double whose constructions and drops are tallied, so that tests
/// can assert that every construction is released exactly once.
pub struct Tracked {
    counter: Counter,
    pub value: i32,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.counter.track(self.value)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.counter.0.set(self.counter.0.get() - 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl std::fmt::Debug for Tracked {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}
