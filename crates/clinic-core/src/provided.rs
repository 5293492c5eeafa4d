//! The "value provided" predicate.
//!
//! A numeric zero is never a real measurement: `0` and `0.0` mean the user
//! left the field empty. Every classifier, flag rule and summary line goes
//! through [`Provided`] (usually via [`provided`]) before reading a value.

/// Whether a raw value counts as supplied by the user.
pub trait Provided {
    fn is_provided(&self) -> bool;
}

impl Provided for u16 {
    fn is_provided(&self) -> bool {
        *self != 0
    }
}

impl Provided for f64 {
    fn is_provided(&self) -> bool {
        // -0.0 compares equal to 0.0
        *self != 0.0
    }
}

impl Provided for str {
    fn is_provided(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl Provided for String {
    fn is_provided(&self) -> bool {
        self.as_str().is_provided()
    }
}

impl<T: Provided> Provided for Option<T> {
    fn is_provided(&self) -> bool {
        self.as_ref().is_some_and(Provided::is_provided)
    }
}

/// Filter an optional value through the predicate, so `Some(0)` collapses to `None`.
pub fn provided<T: Provided>(value: Option<T>) -> Option<T> {
    value.filter(Provided::is_provided)
}
