//! End-to-end paging through a store reached via a `KvSlot`.

use std::sync::Arc;

use futures::StreamExt;
use kv_double_core::stubs::InMemoryKv;
use kv_double_core::{Key, KvError, KvSlot, ListOptions, ListSelector};
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .with_test_writer()
        .try_init();
}

#[tokio::test]
async fn pages_resume_from_cursor() {
    init_tracing();
    let slot = KvSlot::new(Arc::new(InMemoryKv::new()));
    let store = slot.active();
    for name in ["ada", "bob", "cy", "dee", "eve"] {
        store.set(&Key::from(["users", name]), json!(name)).await.unwrap();
    }
    store.set(&Key::from(["orders", "1"]), json!(1)).await.unwrap();

    let mut seen = Vec::new();
    let mut cursor: Option<String> = None;
    loop {
        let mut options = ListOptions::default().with_limit(2);
        if let Some(c) = cursor.take() {
            options = options.with_cursor(c);
        }
        let mut iter = store.list(ListSelector::prefix(Key::from(["users"])), Some(options));
        let mut page = 0;
        while let Some(entry) = iter.next().await {
            seen.push(entry.unwrap().value.unwrap());
            page += 1;
        }
        println!("STATE: page of {page}, cursor={:?}", iter.cursor());
        if page < 2 {
            break;
        }
        cursor = Some(iter.cursor().to_string());
    }

    assert_eq!(seen, vec![json!("ada"), json!("bob"), json!("cy"), json!("dee"), json!("eve")]);
}

#[tokio::test]
async fn closed_store_stays_closed_across_slot_handles() {
    init_tracing();
    let slot = KvSlot::new(Arc::new(InMemoryKv::new()));
    slot.active().close();
    let err = slot.active().get(&Key::from(["x"]), None).await.unwrap_err();
    assert_eq!(err.code(), KvError::Closed.code());
}
