//! Tests for InMemoryKv.

use std::sync::Arc;

use futures::StreamExt;
use parking_lot::Mutex;
use serde_json::json;

use super::InMemoryKv;
use crate::error::KvError;
use crate::list::KvListIterator;
use crate::traits::{KvStore, QueueHandler};
use crate::types::{Entry, Key, ListOptions, ListSelector, Versionstamp};

async fn drain(mut iter: KvListIterator) -> Vec<Entry> {
    let mut out = Vec::new();
    while let Some(item) = iter.next().await {
        out.push(item.unwrap());
    }
    out
}

async fn seeded() -> InMemoryKv {
    let kv = InMemoryKv::new();
    for (name, age) in [("ada", 36), ("bob", 41), ("cy", 29)] {
        kv.set(&Key::from(["users", name]), json!({ "age": age }))
            .await
            .unwrap();
    }
    kv.set(&Key::from(["posts", "p1"]), json!("hello")).await.unwrap();
    kv
}

fn names(entries: &[Entry]) -> Vec<String> {
    entries.iter().map(|e| e.key.parts()[1].to_string()).collect()
}

#[tokio::test]
async fn test_set_and_get() {
    let kv = InMemoryKv::new();
    let key = Key::from(["k"]);
    let commit = kv.set(&key, json!("v")).await.unwrap();
    assert!(commit.ok);
    assert_eq!(commit.versionstamp, Versionstamp::from_sequence(1));

    let entry = kv.get(&key, None).await.unwrap();
    assert_eq!(entry.value, Some(json!("v")));
    assert_eq!(entry.versionstamp, Some(commit.versionstamp));
}

#[tokio::test]
async fn test_get_missing_and_get_many_order() {
    let kv = seeded().await;
    let keys = [Key::from(["users", "cy"]), Key::from(["nope"]), Key::from(["users", "ada"])];
    let entries = kv.get_many(&keys, None).await.unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].key, keys[0]);
    assert!(!entries[1].is_present());
    assert_eq!(entries[1], Entry::missing(Key::from(["nope"])));
    assert_eq!(entries[2].value, Some(json!({ "age": 36 })));
}

#[tokio::test]
async fn test_empty_key_rejected() {
    let kv = InMemoryKv::new();
    let err = kv.set(&Key::default(), json!(1)).await.unwrap_err();
    assert!(matches!(err, KvError::InvalidKey(_)));
}

#[tokio::test]
async fn test_delete() {
    let kv = seeded().await;
    kv.delete(&Key::from(["users", "bob"])).await.unwrap();
    kv.delete(&Key::from(["users", "bob"])).await.unwrap();
    assert_eq!(kv.len(), 3);
}

#[tokio::test]
async fn test_list_prefix_limit_reverse() {
    let kv = seeded().await;
    let all = drain(kv.list(ListSelector::prefix(Key::from(["users"])), None)).await;
    assert_eq!(names(&all), ["\"ada\"", "\"bob\"", "\"cy\""]);

    let limited = drain(kv.list(
        ListSelector::prefix(Key::from(["users"])),
        Some(ListOptions::default().with_limit(2).reversed()),
    ))
    .await;
    assert_eq!(names(&limited), ["\"cy\"", "\"bob\""]);
}

#[tokio::test]
async fn test_list_range_is_half_open() {
    let kv = seeded().await;
    let entries = drain(kv.list(
        ListSelector::range(Key::from(["users", "ada"]), Key::from(["users", "cy"])),
        None,
    ))
    .await;
    assert_eq!(names(&entries), ["\"ada\"", "\"bob\""]);
}

#[tokio::test]
async fn test_list_cursor_resumes_after_last_key() {
    let kv = seeded().await;
    let selector = ListSelector::prefix(Key::from(["users"]));
    let mut first_page = kv.list(selector.clone(), Some(ListOptions::default().with_limit(1)));
    let first = first_page.next().await.unwrap().unwrap();
    assert_eq!(first.key, Key::from(["users", "ada"]));
    let cursor = first_page.cursor().to_string();

    let rest = drain(kv.list(selector, Some(ListOptions::default().with_cursor(cursor)))).await;
    assert_eq!(names(&rest), ["\"bob\"", "\"cy\""]);
}

#[tokio::test]
async fn test_list_invalid_selector_fails_on_first_step() {
    let kv = seeded().await;
    let mut iter = kv.list(ListSelector::default(), None);
    let err = iter.next().await.unwrap().unwrap_err();
    assert!(matches!(err, KvError::InvalidSelector(_)));
}

#[tokio::test]
async fn test_queue_backlog_flushes_to_first_listener() {
    let kv = InMemoryKv::new();
    kv.enqueue(json!("early"), None).await.unwrap();

    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&received);
    kv.listen_queue(QueueHandler::new(move |msg| sink.lock().push(msg)))
        .await
        .unwrap();
    kv.enqueue(json!("late"), None).await.unwrap();

    assert_eq!(*received.lock(), vec![json!("early"), json!("late")]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_no_message_lost_when_listener_registers_concurrently() {
    for round in 0..50 {
        let kv = Arc::new(InMemoryKv::new());
        let received = Arc::new(Mutex::new(Vec::new()));

        let producer = {
            let kv = Arc::clone(&kv);
            tokio::spawn(async move {
                for i in 0..20 {
                    kv.enqueue(json!(i), None).await.unwrap();
                }
            })
        };
        let sink = Arc::clone(&received);
        kv.listen_queue(QueueHandler::new(move |msg| sink.lock().push(msg)))
            .await
            .unwrap();
        producer.await.unwrap();

        assert_eq!(received.lock().len(), 20, "round {round} lost messages");
        assert!(kv.backlog.lock().is_empty());
    }
}

#[tokio::test]
async fn test_closed_store_rejects_operations() {
    let kv = seeded().await;
    kv.close();
    kv.close();
    assert!(kv.is_closed());
    assert_eq!(kv.get(&Key::from(["x"]), None).await.unwrap_err(), KvError::Closed);
    let mut iter = kv.list(ListSelector::prefix(Key::from(["users"])), None);
    assert_eq!(iter.next().await.unwrap().unwrap_err(), KvError::Closed);
}
