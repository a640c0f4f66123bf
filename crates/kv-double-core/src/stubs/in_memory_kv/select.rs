//! Key selection for `list`.

use std::collections::BTreeMap;

use super::StoredValue;
use crate::error::KvResult;
use crate::list::decode_cursor;
use crate::types::{Entry, Key, ListOptions, ListSelector};

/// Entries chosen by `selector` and `options`, in iteration order.
pub(crate) fn select_entries(
    data: &BTreeMap<Key, StoredValue>,
    selector: &ListSelector,
    options: &ListOptions,
) -> KvResult<Vec<Entry>> {
    selector.validate()?;
    let reverse = options.reverse.unwrap_or(false);
    let resume_after = options.cursor.as_deref().map(decode_cursor).transpose()?;

    let in_range = |key: &Key| -> bool {
        if let Some(prefix) = &selector.prefix {
            if !key.has_strict_prefix(prefix) {
                return false;
            }
        }
        if let Some(start) = &selector.start {
            if key < start {
                return false;
            }
        }
        if let Some(end) = &selector.end {
            if key >= end {
                return false;
            }
        }
        match &resume_after {
            Some(after) if reverse => key < after,
            Some(after) => key > after,
            None => true,
        }
    };

    let to_entry = |(key, stored): (&Key, &StoredValue)| {
        Entry::new(key.clone(), stored.value.clone(), stored.versionstamp.clone())
    };
    let limit = options.limit.unwrap_or(usize::MAX);

    let entries = if reverse {
        data.iter()
            .rev()
            .filter(|(k, _)| in_range(*k))
            .take(limit)
            .map(to_entry)
            .collect()
    } else {
        data.iter()
            .filter(|(k, _)| in_range(*k))
            .take(limit)
            .map(to_entry)
            .collect()
    };
    Ok(entries)
}
