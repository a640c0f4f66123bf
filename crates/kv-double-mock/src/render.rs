//! Human-readable rendering of call arguments for assertion messages.

use kv_double_core::{
    EnqueueOptions, Key, KeyPart, KvValue, ListOptions, ListSelector, QueueHandler, ReadOptions,
};

/// Compact, single-line rendering of an argument value.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Key {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Render for KeyPart {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Render for KvValue {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Render for Vec<Key> {
    fn render(&self) -> String {
        let keys: Vec<String> = self.iter().map(Key::to_string).collect();
        format!("[{}]", keys.join(", "))
    }
}

impl Render for ListSelector {
    fn render(&self) -> String {
        let fields: Vec<String> = [("prefix", &self.prefix), ("start", &self.start), ("end", &self.end)]
            .into_iter()
            .filter_map(|(name, key)| key.as_ref().map(|k| format!("{name}: {k}")))
            .collect();
        format!("{{{}}}", fields.join(", "))
    }
}

impl Render for QueueHandler {
    fn render(&self) -> String {
        self.to_string()
    }
}

macro_rules! render_as_json {
    ($($ty:ty),*) => {
        $(
            impl Render for $ty {
                fn render(&self) -> String {
                    serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
                }
            }
        )*
    };
}

render_as_json!(ReadOptions, ListOptions, EnqueueOptions);
