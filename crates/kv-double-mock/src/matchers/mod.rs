//! Argument matchers.
//!
//! A matcher is a total predicate over an optional argument value. `None`
//! means the caller supplied no value for that position; only [`Absent`] and
//! [`Anything`] accept it. Shape mismatches are plain `false`, never errors.
//!
//! Every argument position of a stub or verification is an [`Arg`]: either a
//! literal (compared with [`Exact`]) or a matcher. The literal/matcher choice
//! is made by the type the caller passes, once, when the call is built.
//!
//! | Matcher | Accepts |
//! |---------|---------|
//! | [`Exact`] | structurally equal value |
//! | [`AnyOfType`] | any present value of the right runtime shape |
//! | [`KeyShape`] | keys of exactly N parts, each part matched positionally |
//! | [`MultiKey`] | key lists of exactly N keys, matched positionally |
//! | [`SelectorShape`] | list selectors with exactly the expected field set |
//! | [`ObjectShape`] | option objects with exactly the expected field set |
//! | [`Anything`] / [`Absent`] | everything / only a missing value |

mod basic;
mod shape;
#[cfg(test)]
mod tests;

use std::fmt;
use std::sync::Arc;

use kv_double_core::{Key, KeyPart, KvValue, ListSelector};
use serde::Serialize;

use crate::render::Render;

pub use basic::{Absent, AnyOfType, Anything, Exact};
pub use shape::{KeyShape, MultiKey, ObjectShape, SelectorShape};

/// Predicate over an optional argument value.
pub trait Matcher<T>: fmt::Display + Send + Sync {
    fn matches(&self, candidate: Option<&T>) -> bool;

    /// True for matchers that accept nothing but a missing value.
    fn accepts_only_absent(&self) -> bool {
        false
    }
}

/// Shared, type-erased matcher.
pub type ArgMatcher<T> = Arc<dyn Matcher<T>>;

/// One argument position: a literal value or a matcher.
#[derive(Clone)]
pub enum Arg<T> {
    Literal(T),
    Matcher(ArgMatcher<T>),
}

impl<T> From<T> for Arg<T> {
    fn from(value: T) -> Self {
        Self::Literal(value)
    }
}

impl<T> Arg<T>
where
    T: PartialEq + Render + Send + Sync + 'static,
{
    pub fn matching(matcher: impl Matcher<T> + 'static) -> Self {
        Self::Matcher(Arc::new(matcher))
    }

    /// Resolve to a matcher; literals become [`Exact`].
    pub fn into_matcher(self) -> ArgMatcher<T> {
        match self {
            Self::Literal(value) => Arc::new(Exact::new(value)),
            Self::Matcher(matcher) => matcher,
        }
    }
}

impl<T> fmt::Debug for Arg<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Matcher(matcher) => f.debug_tuple("Matcher").field(&matcher.to_string()).finish(),
        }
    }
}

// ==================== Constructors ====================

/// Any present value of `T`.
pub fn any<T: Send + Sync + 'static>() -> Arg<T>
where
    T: PartialEq + Render,
{
    Arg::matching(AnyOfType::<T>::new("value", |_| true))
}

/// Any value, present or missing.
pub fn anything<T: PartialEq + Render + Send + Sync + 'static>() -> Arg<T> {
    Arg::matching(Anything::new())
}

/// Only a missing value.
pub fn absent<T: PartialEq + Render + Send + Sync + 'static>() -> Arg<T> {
    Arg::matching(Absent::new())
}

pub fn any_key() -> Arg<Key> {
    Arg::matching(AnyOfType::new("key", |_: &Key| true))
}

pub fn any_part() -> Arg<KeyPart> {
    Arg::matching(AnyOfType::new("key part", |_: &KeyPart| true))
}

pub fn any_string_part() -> Arg<KeyPart> {
    Arg::matching(AnyOfType::new("string part", |p: &KeyPart| {
        matches!(p, KeyPart::String(_))
    }))
}

pub fn any_int_part() -> Arg<KeyPart> {
    Arg::matching(AnyOfType::new("int part", |p: &KeyPart| matches!(p, KeyPart::Int(_))))
}

pub fn any_value() -> Arg<KvValue> {
    Arg::matching(AnyOfType::new("value", |_: &KvValue| true))
}

pub fn any_string() -> Arg<KvValue> {
    Arg::matching(AnyOfType::new("string", KvValue::is_string))
}

pub fn any_number() -> Arg<KvValue> {
    Arg::matching(AnyOfType::new("number", KvValue::is_number))
}

pub fn any_bool() -> Arg<KvValue> {
    Arg::matching(AnyOfType::new("bool", KvValue::is_boolean))
}

pub fn any_object() -> Arg<KvValue> {
    Arg::matching(AnyOfType::new("object", KvValue::is_object))
}

pub fn any_array() -> Arg<KvValue> {
    Arg::matching(AnyOfType::new("array", KvValue::is_array))
}

/// Keys with exactly these parts, matched positionally.
pub fn key_shape(parts: impl IntoIterator<Item = Arg<KeyPart>>) -> Arg<Key> {
    Arg::matching(KeyShape::new(parts))
}

/// Any key with exactly `len` parts.
pub fn key_of_len(len: usize) -> Arg<Key> {
    key_shape((0..len).map(|_| any_part()))
}

/// Key lists with exactly these keys, matched positionally.
pub fn multi_key(keys: impl IntoIterator<Item = Arg<Key>>) -> Arg<Vec<Key>> {
    Arg::matching(MultiKey::new(keys))
}

/// Selectors with exactly the fields set on `shape`.
pub fn selector_shape(shape: SelectorShape) -> Arg<ListSelector> {
    Arg::matching(shape)
}

/// Option objects with exactly these fields.
pub fn object_shape<'f, T>(fields: impl IntoIterator<Item = (&'f str, Arg<KvValue>)>) -> Arg<T>
where
    T: Serialize + PartialEq + Render + Send + Sync + 'static,
{
    Arg::matching(ObjectShape::new(fields))
}

/// Evaluate an [`ArgMatcher`] against a present value.
#[inline]
pub(crate) fn accepts<T>(matcher: &ArgMatcher<T>, value: &T) -> bool {
    matcher.matches(Some(value))
}
