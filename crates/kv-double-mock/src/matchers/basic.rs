//! Value matchers: exact, any-of-type, anything, absent.

use std::fmt;
use std::marker::PhantomData;

use super::Matcher;
use crate::render::Render;

/// Structural equality with an expected value.
///
/// Uses the value's own `PartialEq`. Number key parts follow the total order,
/// so `-0.0` does not match `0.0` and `NaN` matches `NaN`; number values
/// (`KvValue`) use ordinary float equality.
pub struct Exact<T> {
    expected: T,
}

impl<T> Exact<T> {
    pub fn new(expected: T) -> Self {
        Self { expected }
    }
}

impl<T: PartialEq + Render + Send + Sync> Matcher<T> for Exact<T> {
    fn matches(&self, candidate: Option<&T>) -> bool {
        candidate.is_some_and(|c| *c == self.expected)
    }
}

impl<T: Render> fmt::Display for Exact<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expected.render())
    }
}

/// Any present value passing a runtime shape check.
pub struct AnyOfType<T> {
    type_name: &'static str,
    shape: fn(&T) -> bool,
}

impl<T> AnyOfType<T> {
    pub fn new(type_name: &'static str, shape: fn(&T) -> bool) -> Self {
        Self { type_name, shape }
    }
}

impl<T: Send + Sync> Matcher<T> for AnyOfType<T> {
    fn matches(&self, candidate: Option<&T>) -> bool {
        candidate.is_some_and(|c| (self.shape)(c))
    }
}

impl<T> fmt::Display for AnyOfType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<any {}>", self.type_name)
    }
}

/// Accepts every value, including a missing one.
pub struct Anything<T>(PhantomData<fn() -> T>);

impl<T> Anything<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Anything<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Matcher<T> for Anything<T> {
    fn matches(&self, _candidate: Option<&T>) -> bool {
        true
    }
}

impl<T> fmt::Display for Anything<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<anything>")
    }
}

/// Accepts only a missing value.
pub struct Absent<T>(PhantomData<fn() -> T>);

impl<T> Absent<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Absent<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Matcher<T> for Absent<T> {
    fn matches(&self, candidate: Option<&T>) -> bool {
        candidate.is_none()
    }

    fn accepts_only_absent(&self) -> bool {
        true
    }
}

impl<T> fmt::Display for Absent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<absent>")
    }
}
