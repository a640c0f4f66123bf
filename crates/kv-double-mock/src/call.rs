//! Recorded calls and the matchers that select them.

use std::fmt;

use kv_double_core::{
    AbsentOptionsPolicy, EnqueueOptions, Key, KvValue, ListOptions, ListSelector, QueueHandler,
    ReadOptions,
};

use crate::matchers::{accepts, Arg, ArgMatcher};
use crate::render::Render;

/// The fixed operation set of the store contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    Get,
    GetMany,
    Set,
    Delete,
    List,
    Enqueue,
    ListenQueue,
    Close,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Self::Get,
        Self::GetMany,
        Self::Set,
        Self::Delete,
        Self::List,
        Self::Enqueue,
        Self::ListenQueue,
        Self::Close,
    ];

    /// Stable name used in logs and assertion messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::GetMany => "getMany",
            Self::Set => "set",
            Self::Delete => "delete",
            Self::List => "list",
            Self::Enqueue => "enqueue",
            Self::ListenQueue => "listenQueue",
            Self::Close => "close",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arguments of one call made against the double.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get {
        key: Key,
        options: Option<ReadOptions>,
    },
    GetMany {
        keys: Vec<Key>,
        options: Option<ReadOptions>,
    },
    Set {
        key: Key,
        value: KvValue,
    },
    Delete {
        key: Key,
    },
    List {
        selector: ListSelector,
        options: Option<ListOptions>,
    },
    Enqueue {
        value: KvValue,
        options: Option<EnqueueOptions>,
    },
    ListenQueue {
        handler: QueueHandler,
    },
    Close,
}

impl Call {
    pub fn operation(&self) -> Operation {
        match self {
            Self::Get { .. } => Operation::Get,
            Self::GetMany { .. } => Operation::GetMany,
            Self::Set { .. } => Operation::Set,
            Self::Delete { .. } => Operation::Delete,
            Self::List { .. } => Operation::List,
            Self::Enqueue { .. } => Operation::Enqueue,
            Self::ListenQueue { .. } => Operation::ListenQueue,
            Self::Close => Operation::Close,
        }
    }

    fn rendered_args(&self) -> Vec<String> {
        fn optional<T: Render>(args: &mut Vec<String>, value: &Option<T>) {
            if let Some(v) = value {
                args.push(v.render());
            }
        }

        let mut args = Vec::new();
        match self {
            Self::Get { key, options } => {
                args.push(key.render());
                optional(&mut args, options);
            }
            Self::GetMany { keys, options } => {
                args.push(keys.render());
                optional(&mut args, options);
            }
            Self::Set { key, value } => {
                args.push(key.render());
                args.push(value.render());
            }
            Self::Delete { key } => args.push(key.render()),
            Self::List { selector, options } => {
                args.push(selector.render());
                optional(&mut args, options);
            }
            Self::Enqueue { value, options } => {
                args.push(value.render());
                optional(&mut args, options);
            }
            Self::ListenQueue { handler } => args.push(handler.render()),
            Self::Close => {}
        }
        args
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.operation(), self.rendered_args().join(", "))
    }
}

/// Matches an optional argument under the configured absence policy.
fn optional_matches<T>(
    matcher: &ArgMatcher<T>,
    candidate: Option<&T>,
    policy: AbsentOptionsPolicy,
) -> bool {
    match (candidate, policy) {
        (None, AbsentOptionsPolicy::Lenient) => true,
        _ => matcher.matches(candidate),
    }
}

/// Per-position matchers for one operation.
#[derive(Clone)]
pub enum CallMatcher {
    Get {
        key: ArgMatcher<Key>,
        options: ArgMatcher<ReadOptions>,
    },
    GetMany {
        keys: ArgMatcher<Vec<Key>>,
        options: ArgMatcher<ReadOptions>,
    },
    Set {
        key: ArgMatcher<Key>,
        value: ArgMatcher<KvValue>,
    },
    Delete {
        key: ArgMatcher<Key>,
    },
    List {
        selector: ArgMatcher<ListSelector>,
        options: ArgMatcher<ListOptions>,
    },
    Enqueue {
        value: ArgMatcher<KvValue>,
        options: ArgMatcher<EnqueueOptions>,
    },
    ListenQueue {
        handler: ArgMatcher<QueueHandler>,
    },
    Close,
}

impl CallMatcher {
    pub fn get(key: impl Into<Arg<Key>>, options: impl Into<Arg<ReadOptions>>) -> Self {
        Self::Get {
            key: key.into().into_matcher(),
            options: options.into().into_matcher(),
        }
    }

    pub fn get_many(keys: impl Into<Arg<Vec<Key>>>, options: impl Into<Arg<ReadOptions>>) -> Self {
        Self::GetMany {
            keys: keys.into().into_matcher(),
            options: options.into().into_matcher(),
        }
    }

    pub fn set(key: impl Into<Arg<Key>>, value: impl Into<Arg<KvValue>>) -> Self {
        Self::Set {
            key: key.into().into_matcher(),
            value: value.into().into_matcher(),
        }
    }

    pub fn delete(key: impl Into<Arg<Key>>) -> Self {
        Self::Delete {
            key: key.into().into_matcher(),
        }
    }

    pub fn list(
        selector: impl Into<Arg<ListSelector>>,
        options: impl Into<Arg<ListOptions>>,
    ) -> Self {
        Self::List {
            selector: selector.into().into_matcher(),
            options: options.into().into_matcher(),
        }
    }

    pub fn enqueue(value: impl Into<Arg<KvValue>>, options: impl Into<Arg<EnqueueOptions>>) -> Self {
        Self::Enqueue {
            value: value.into().into_matcher(),
            options: options.into().into_matcher(),
        }
    }

    pub fn listen_queue(handler: impl Into<Arg<QueueHandler>>) -> Self {
        Self::ListenQueue {
            handler: handler.into().into_matcher(),
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Self::Get { .. } => Operation::Get,
            Self::GetMany { .. } => Operation::GetMany,
            Self::Set { .. } => Operation::Set,
            Self::Delete { .. } => Operation::Delete,
            Self::List { .. } => Operation::List,
            Self::Enqueue { .. } => Operation::Enqueue,
            Self::ListenQueue { .. } => Operation::ListenQueue,
            Self::Close => Operation::Close,
        }
    }

    /// Whether `call` is accepted. Calls of another operation never are.
    pub fn matches(&self, call: &Call, policy: AbsentOptionsPolicy) -> bool {
        match (self, call) {
            (Self::Get { key, options }, Call::Get { key: k, options: o }) => {
                accepts(key, k) && optional_matches(options, o.as_ref(), policy)
            }
            (Self::GetMany { keys, options }, Call::GetMany { keys: ks, options: o }) => {
                accepts(keys, ks) && optional_matches(options, o.as_ref(), policy)
            }
            (Self::Set { key, value }, Call::Set { key: k, value: v }) => {
                accepts(key, k) && accepts(value, v)
            }
            (Self::Delete { key }, Call::Delete { key: k }) => accepts(key, k),
            (Self::List { selector, options }, Call::List { selector: s, options: o }) => {
                accepts(selector, s) && optional_matches(options, o.as_ref(), policy)
            }
            (Self::Enqueue { value, options }, Call::Enqueue { value: v, options: o }) => {
                accepts(value, v) && optional_matches(options, o.as_ref(), policy)
            }
            (Self::ListenQueue { handler }, Call::ListenQueue { handler: h }) => {
                accepts(handler, h)
            }
            (Self::Close, Call::Close) => true,
            _ => false,
        }
    }

    fn rendered_args(&self) -> Vec<String> {
        fn optional<T>(args: &mut Vec<String>, matcher: &ArgMatcher<T>) {
            if !matcher.accepts_only_absent() {
                args.push(matcher.to_string());
            }
        }

        let mut args = Vec::new();
        match self {
            Self::Get { key, options } => {
                args.push(key.to_string());
                optional(&mut args, options);
            }
            Self::GetMany { keys, options } => {
                args.push(keys.to_string());
                optional(&mut args, options);
            }
            Self::Set { key, value } => {
                args.push(key.to_string());
                args.push(value.to_string());
            }
            Self::Delete { key } => args.push(key.to_string()),
            Self::List { selector, options } => {
                args.push(selector.to_string());
                optional(&mut args, options);
            }
            Self::Enqueue { value, options } => {
                args.push(value.to_string());
                optional(&mut args, options);
            }
            Self::ListenQueue { handler } => args.push(handler.to_string()),
            Self::Close => {}
        }
        args
    }
}

impl fmt::Display for CallMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.operation(), self.rendered_args().join(", "))
    }
}

impl fmt::Debug for CallMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CallMatcher({self})")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::matchers::{absent, any_key, any_value, anything};

    #[test]
    fn test_call_display() {
        let call = Call::Set {
            key: Key::from(["k"]),
            value: json!("v"),
        };
        assert_eq!(call.to_string(), r#"set(["k"], "v")"#);
        assert_eq!(Call::Close.to_string(), "close()");

        let call = Call::Get {
            key: Key::from(["x"]),
            options: Some(ReadOptions::default()),
        };
        assert_eq!(call.to_string(), r#"get(["x"], {})"#);
    }

    #[test]
    fn test_matcher_display_hides_absent_options() {
        let m = CallMatcher::get(Key::from(["x"]), absent::<ReadOptions>());
        assert_eq!(m.to_string(), r#"get(["x"])"#);
        let m = CallMatcher::set(any_key(), any_value());
        assert_eq!(m.to_string(), "set(<any key>, <any value>)");
    }

    #[test]
    fn test_other_operation_never_matches() {
        let m = CallMatcher::delete(any_key());
        let call = Call::Get {
            key: Key::from(["x"]),
            options: None,
        };
        assert!(!m.matches(&call, AbsentOptionsPolicy::Lenient));
        assert_eq!(m.operation(), Operation::Delete);
    }

    #[test]
    fn test_absent_options_policy() {
        let strong = ReadOptions::with_consistency(kv_double_core::Consistency::Strong);
        let m = CallMatcher::get(Key::from(["x"]), strong);
        let bare = Call::Get {
            key: Key::from(["x"]),
            options: None,
        };
        assert!(!m.matches(&bare, AbsentOptionsPolicy::Strict));
        assert!(m.matches(&bare, AbsentOptionsPolicy::Lenient));

        let wildcard = CallMatcher::get(Key::from(["x"]), anything::<ReadOptions>());
        assert!(wildcard.matches(&bare, AbsentOptionsPolicy::Strict));
    }
}
