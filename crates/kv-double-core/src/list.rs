//! Async list iterator.
//!
//! Every `list` call produces its own [`KvListIterator`]. The iterator yields
//! entries one per step and exposes, after each step, a cursor that resumes a
//! later `list` call right after the last yielded key.

use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;

use crate::error::{KvError, KvResult};
use crate::types::{Entry, Key};

/// Encode a cursor pointing just past `key`.
pub fn encode_cursor(key: &Key) -> KvResult<String> {
    serde_json::to_vec(key)
        .map(hex::encode)
        .map_err(|e| KvError::InvalidCursor(format!("cannot encode {key}: {e}")))
}

/// Decode a cursor produced by [`encode_cursor`].
pub fn decode_cursor(cursor: &str) -> KvResult<Key> {
    let bytes = hex::decode(cursor)
        .map_err(|e| KvError::InvalidCursor(format!("{cursor:?} is not hex: {e}")))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| KvError::InvalidCursor(format!("{cursor:?} does not hold a key: {e}")))
}

/// Stream of list results plus the cursor after the latest step.
#[derive(Debug, Default)]
pub struct KvListIterator {
    pending: VecDeque<Entry>,
    failure: Option<KvError>,
    cursor: String,
}

impl KvListIterator {
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        Self {
            pending: entries.into_iter().collect(),
            failure: None,
            cursor: String::new(),
        }
    }

    /// Iterator whose first step yields `error`.
    pub fn failed(error: KvError) -> Self {
        Self {
            pending: VecDeque::new(),
            failure: Some(error),
            cursor: String::new(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Cursor after the most recent step; empty before the first entry.
    pub fn cursor(&self) -> &str {
        &self.cursor
    }

    /// Entries not yet yielded.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl Stream for KvListIterator {
    type Item = KvResult<Entry>;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if let Some(error) = this.failure.take() {
            return Poll::Ready(Some(Err(error)));
        }
        let Some(entry) = this.pending.pop_front() else {
            return Poll::Ready(None);
        };
        match encode_cursor(&entry.key) {
            Ok(cursor) => {
                this.cursor = cursor;
                Poll::Ready(Some(Ok(entry)))
            }
            Err(e) => Poll::Ready(Some(Err(e))),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let extra = usize::from(self.failure.is_some());
        let n = self.pending.len() + extra;
        (n, Some(n))
    }
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;
    use serde_json::json;

    use super::*;
    use crate::types::Versionstamp;

    fn entry(name: &str) -> Entry {
        Entry::new(Key::from(["items", name]), json!(name), Versionstamp::default())
    }

    #[tokio::test]
    async fn test_cursor_tracks_last_yielded_key() {
        let mut iter = KvListIterator::from_entries(vec![entry("a"), entry("b")]);
        assert_eq!(iter.cursor(), "");

        let first = iter.next().await.unwrap().unwrap();
        assert_eq!(decode_cursor(iter.cursor()).unwrap(), first.key);

        let second = iter.next().await.unwrap().unwrap();
        assert_eq!(decode_cursor(iter.cursor()).unwrap(), second.key);

        assert!(iter.next().await.is_none());
        assert_eq!(decode_cursor(iter.cursor()).unwrap(), second.key);
    }

    #[tokio::test]
    async fn test_failed_iterator_yields_error_then_ends() {
        let mut iter = KvListIterator::failed(KvError::programmed("list down"));
        let err = iter.next().await.unwrap().unwrap_err();
        assert_eq!(err, KvError::programmed("list down"));
        assert!(iter.next().await.is_none());
        assert_eq!(iter.cursor(), "");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode_cursor("xyz"), Err(KvError::InvalidCursor(_))));
        assert!(matches!(
            decode_cursor(&hex::encode("not json")),
            Err(KvError::InvalidCursor(_))
        ));
    }
}
