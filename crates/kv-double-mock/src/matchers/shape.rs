//! Structural matchers for composite arguments.
//!
//! All of them fail fast on cardinality: a key of the wrong length, a key list
//! of the wrong size, or an options object with a different field count never
//! matches, even if every present element would.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use kv_double_core::{Key, KeyPart, KvValue, ListSelector};
use serde::Serialize;

use super::{accepts, Arg, ArgMatcher, Matcher};

fn join<T>(matchers: &[ArgMatcher<T>]) -> String {
    matchers
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Positional match over the parts of a key.
pub struct KeyShape {
    parts: Vec<ArgMatcher<KeyPart>>,
}

impl KeyShape {
    pub fn new(parts: impl IntoIterator<Item = Arg<KeyPart>>) -> Self {
        Self {
            parts: parts.into_iter().map(Arg::into_matcher).collect(),
        }
    }

    pub fn arity(&self) -> usize {
        self.parts.len()
    }
}

impl Matcher<Key> for KeyShape {
    fn matches(&self, candidate: Option<&Key>) -> bool {
        let Some(key) = candidate else {
            return false;
        };
        key.len() == self.parts.len()
            && self
                .parts
                .iter()
                .zip(key.parts())
                .all(|(m, part)| accepts(m, part))
    }
}

impl fmt::Display for KeyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", join(&self.parts))
    }
}

/// Positional match over a list of keys.
pub struct MultiKey {
    keys: Vec<ArgMatcher<Key>>,
}

impl MultiKey {
    pub fn new(keys: impl IntoIterator<Item = Arg<Key>>) -> Self {
        Self {
            keys: keys.into_iter().map(Arg::into_matcher).collect(),
        }
    }
}

impl Matcher<Vec<Key>> for MultiKey {
    fn matches(&self, candidate: Option<&Vec<Key>>) -> bool {
        let Some(keys) = candidate else {
            return false;
        };
        keys.len() == self.keys.len()
            && self.keys.iter().zip(keys).all(|(m, key)| accepts(m, key))
    }
}

impl fmt::Display for MultiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", join(&self.keys))
    }
}

/// Field-wise match over a list selector.
#[derive(Default)]
pub struct SelectorShape {
    prefix: Option<ArgMatcher<Key>>,
    start: Option<ArgMatcher<Key>>,
    end: Option<ArgMatcher<Key>>,
}

impl SelectorShape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefix(mut self, prefix: impl Into<Arg<Key>>) -> Self {
        self.prefix = Some(prefix.into().into_matcher());
        self
    }

    pub fn start(mut self, start: impl Into<Arg<Key>>) -> Self {
        self.start = Some(start.into().into_matcher());
        self
    }

    pub fn end(mut self, end: impl Into<Arg<Key>>) -> Self {
        self.end = Some(end.into().into_matcher());
        self
    }

    fn fields(&self) -> [(&'static str, &Option<ArgMatcher<Key>>); 3] {
        [("prefix", &self.prefix), ("start", &self.start), ("end", &self.end)]
    }
}

fn field_matches(expected: &Option<ArgMatcher<Key>>, actual: &Option<Key>) -> bool {
    match (expected, actual) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(m), Some(key)) => accepts(m, key),
    }
}

impl Matcher<ListSelector> for SelectorShape {
    fn matches(&self, candidate: Option<&ListSelector>) -> bool {
        let Some(selector) = candidate else {
            return false;
        };
        let expected_fields = self.fields().iter().filter(|(_, m)| m.is_some()).count();
        selector.field_count() == expected_fields
            && field_matches(&self.prefix, &selector.prefix)
            && field_matches(&self.start, &selector.start)
            && field_matches(&self.end, &selector.end)
    }
}

impl fmt::Display for SelectorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self
            .fields()
            .iter()
            .filter_map(|&(name, m)| m.as_ref().map(|m| format!("{name}: {m}")))
            .collect();
        write!(f, "{{{}}}", fields.join(", "))
    }
}

/// Field-wise match over any serializable options object.
///
/// The candidate is serialized; its present fields must be exactly the
/// expected field names, each accepted by its matcher.
pub struct ObjectShape<T> {
    fields: BTreeMap<String, ArgMatcher<KvValue>>,
    _target: PhantomData<fn(&T)>,
}

impl<T> ObjectShape<T> {
    pub fn new<'f>(fields: impl IntoIterator<Item = (&'f str, Arg<KvValue>)>) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|(name, arg)| (name.to_string(), arg.into_matcher()))
                .collect(),
            _target: PhantomData,
        }
    }
}

impl<T: Serialize> Matcher<T> for ObjectShape<T> {
    fn matches(&self, candidate: Option<&T>) -> bool {
        let Some(value) = candidate else {
            return false;
        };
        let Ok(KvValue::Object(present)) = serde_json::to_value(value) else {
            return false;
        };
        present.len() == self.fields.len()
            && self.fields.iter().all(|(name, m)| match present.get(name) {
                Some(field) => accepts(m, field),
                None => false,
            })
    }
}

impl<T> fmt::Display for ObjectShape<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self
            .fields
            .iter()
            .map(|(name, m)| format!("{name}: {m}"))
            .collect();
        write!(f, "{{{}}}", fields.join(", "))
    }
}
