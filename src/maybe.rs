//! Defines the [`Maybe`] container and its [`Nothing`] marker

use std::mem::MaybeUninit;

use crate::error::EmptyMaybeError;

/// Explicit marker for the absence of a value
///
/// Converting it into a [`Maybe`] produces an empty container, so absence
/// can be assigned the same way a value can:
///
/// ```
/// use maybe::{Maybe, Nothing};
///
/// let mut x = Maybe::just(10);
/// x = Nothing.into();
/// assert!(x.is_nothing());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Nothing;

/// A value of type `T` that may or may not be present
///
/// The value, when present, is stored inline and owned exclusively by this
/// container: cloning a `Maybe` clones the value, and dropping a `Maybe`
/// drops it. Presence is queried with [`Maybe::is_just`]; the accessors
/// ([`Maybe::value`] and friends) panic on an empty `Maybe`, while their
/// `try_` counterparts return an [`EmptyMaybeError`] instead.
///
/// Two `Maybe`s may be compared whenever their element types may be, even
/// when those types differ:
///
/// ```
/// use maybe::Maybe;
///
/// let owned = Maybe::just(String::from("ten"));
/// let borrowed = Maybe::just("ten");
/// assert!(owned == borrowed);
/// ```
pub struct Maybe<T> {
    /// Whether `slot` currently holds a value.
    ///
    /// The following must hold: `slot` is initialized if and only if
    /// `present` is true. Every flip of `present` is therefore paired
    /// with exactly one write, read-out or drop of the slot.
    present: bool,
    slot: MaybeUninit<T>,
}

impl<T> Maybe<T> {
    /// Create an empty `Maybe`
    pub const fn nothing() -> Self {
        Self {
            present: false,
            slot: MaybeUninit::uninit(),
        }
    }

    /// Create a `Maybe` holding `value`
    ///
    /// The value is moved directly into the container; no separate
    /// allocation is made.
    pub const fn just(value: T) -> Self {
        Self {
            present: true,
            slot: MaybeUninit::new(value),
        }
    }

    /// Whether this `Maybe` holds a value
    pub const fn is_just(&self) -> bool {
        self.present
    }

    /// Whether this `Maybe` is empty
    pub const fn is_nothing(&self) -> bool {
        !self.present
    }

    /// A reference to the held value, or an error if there is none
    pub fn try_value(&self) -> Result<&T, EmptyMaybeError> {
        if self.present {
            Ok(unsafe { self.slot.assume_init_ref() })
        } else {
            Err(EmptyMaybeError)
        }
    }

    /// A mutable reference to the held value, or an error if there is none
    pub fn try_value_mut(&mut self) -> Result<&mut T, EmptyMaybeError> {
        if self.present {
            Ok(unsafe { self.slot.assume_init_mut() })
        } else {
            Err(EmptyMaybeError)
        }
    }

    /// The held value itself, or an error if there is none
    ///
    /// Consumes the `Maybe` either way.
    pub fn try_into_value(mut self) -> Result<T, EmptyMaybeError> {
        if self.present {
            // Lower the flag first: `Drop` must not touch the slot after
            // the value has been read out of it.
            self.present = false;
            Ok(unsafe { self.slot.assume_init_read() })
        } else {
            Err(EmptyMaybeError)
        }
    }

    /// A reference to the held value
    ///
    /// Panics with an [`EmptyMaybeError`] if the `Maybe` is empty. Guard
    /// with [`Maybe::is_just`], or use [`Maybe::try_value`].
    pub fn value(&self) -> &T {
        match self.try_value() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// A mutable reference to the held value
    ///
    /// Panics with an [`EmptyMaybeError`] if the `Maybe` is empty.
    pub fn value_mut(&mut self) -> &mut T {
        match self.try_value_mut() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// The held value itself, consuming the `Maybe`
    ///
    /// Panics with an [`EmptyMaybeError`] if the `Maybe` is empty.
    pub fn into_value(self) -> T {
        match self.try_into_value() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Assign `value`, dropping any previously held value
    ///
    /// When a value is already present the new one is assigned into its
    /// slot rather than the slot being torn down and rebuilt. The new
    /// value is swapped in before the old one is dropped, so a panicking
    /// `T::drop` cannot leave the slot half-initialized.
    pub fn set(&mut self, value: T) {
        if self.present {
            let old = std::mem::replace(unsafe { self.slot.assume_init_mut() }, value);
            drop(old);
        } else {
            self.slot.write(value);
            self.present = true;
        }
    }

    /// Assign anything `T` can be converted from
    ///
    /// Same storage discipline as [`Maybe::set`].
    pub fn set_from(&mut self, value: impl Into<T>) {
        self.set(value.into());
    }

    /// Drop the held value, if any, leaving the `Maybe` empty
    ///
    /// Idempotent; clearing an empty `Maybe` does nothing.
    pub fn clear(&mut self) {
        if self.present {
            // Lower the flag before dropping, so a panicking `T::drop`
            // cannot lead to the same value being dropped again.
            self.present = false;
            unsafe { self.slot.assume_init_drop() };
        }
    }

    /// Move the held value out, leaving this `Maybe` empty
    ///
    /// The value is transferred, not copied. Taking from an empty `Maybe`
    /// yields an empty `Maybe`.
    pub fn take(&mut self) -> Maybe<T> {
        if self.present {
            self.present = false;
            Maybe::just(unsafe { self.slot.assume_init_read() })
        } else {
            Maybe::nothing()
        }
    }
}

impl<T> Drop for Maybe<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::nothing()
    }
}

impl<T: Clone> Clone for Maybe<T> {
    fn clone(&self) -> Self {
        match self.try_value() {
            Ok(value) => Self::just(value.clone()),
            Err(_) => Self::nothing(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        match (self.present, source.present) {
            // Clone into the held value so its storage is reused.
            (true, true) => unsafe {
                self.slot
                    .assume_init_mut()
                    .clone_from(source.slot.assume_init_ref());
            },
            (false, true) => {
                // Clone before raising the flag: if the clone panics the
                // slot must still count as uninitialized.
                let value = unsafe { source.slot.assume_init_ref() }.clone();
                self.slot.write(value);
                self.present = true;
            }
            (_, false) => self.clear(),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.try_value() {
            Ok(value) => f.debug_tuple("Just").field(value).finish(),
            Err(_) => f.write_str("Nothing"),
        }
    }
}

/// Equality between `Maybe`s of any two comparable element types
///
/// Empty compares equal only to empty, and held values are compared with
/// the `PartialEq` relation between the element types. Element types with
/// no such relation cannot be compared at all; that restriction is part
/// of the type, not a runtime condition.
impl<T, OT> PartialEq<Maybe<OT>> for Maybe<T>
where
    T: PartialEq<OT>,
{
    fn eq(&self, other: &Maybe<OT>) -> bool {
        match (self.try_value(), other.try_value()) {
            (Ok(lhs), Ok(rhs)) => lhs == rhs,
            (Err(_), Err(_)) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Maybe<T> {}

impl<T> From<Nothing> for Maybe<T> {
    fn from(_: Nothing) -> Self {
        Self::nothing()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(x) => Self::just(x),
            None => Self::nothing(),
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.try_into_value().ok()
    }
}
