//! Store behavior tests driven through the mock transport: state transitions for all
//! five operations, envelope handling, and the documented last-settled-wins race.

use remote_store::mock::MockTransport;
use remote_store::{ListFilter, Resource, ResourceKey, ResourceStore, TransportError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Widget {
    id: u64,
    slug: String,
    title: String,
}

#[derive(Debug, Serialize)]
struct WidgetCreate {
    title: String,
}

#[derive(Debug, Serialize)]
struct WidgetUpdate {
    title: String,
}

impl Resource for Widget {
    type Create = WidgetCreate;
    type Update = WidgetUpdate;
    const NAME: &'static str = "widget";
    const COLLECTION: &'static str = "admin/widgets";

    fn key(&self) -> ResourceKey {
        ResourceKey::with_slug(self.id, self.slug.clone())
    }
}

fn widget_json(id: u64, title: &str) -> Value {
    json!({ "id": id, "slug": format!("widget-{id}"), "title": title })
}

fn seeded_store(transport: &Arc<MockTransport>, titles: &[(u64, &str)]) -> ResourceStore<Widget> {
    let payload: Vec<Value> = titles.iter().map(|(id, t)| widget_json(*id, t)).collect();
    transport
        .expect_get("admin/widgets")
        .return_json(json!(payload));
    ResourceStore::new(Arc::clone(transport) as Arc<dyn remote_store::ApiTransport>)
}

#[tokio::test]
async fn list_replaces_items_and_reads_meta_pagination() {
    let transport = Arc::new(MockTransport::new());
    transport.expect_get("admin/widgets").return_json(json!({
        "data": [widget_json(1, "First")],
        "meta": { "total": 1, "current_page": 1, "per_page": 10, "last_page": 1 }
    }));

    let store = ResourceStore::<Widget>::new(transport.clone());
    store.list(&ListFilter::new()).await.unwrap();

    let state = store.state();
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].title, "First");
    assert_eq!(state.pagination.total, 1);
    transport.verify();
}

#[tokio::test]
async fn list_failure_leaves_items_and_sets_error() {
    let transport = Arc::new(MockTransport::new());
    let store = seeded_store(&transport, &[(1, "Kept")]);
    store.list(&ListFilter::new()).await.unwrap();

    transport
        .expect_get("admin/widgets")
        .return_err(TransportError::Network("connection refused".into()));
    let result = store.list(&ListFilter::new()).await;

    assert!(result.is_err());
    let state = store.state();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].title, "Kept");
    assert_eq!(state.error.as_deref(), Some("connection refused"));
    assert!(!state.loading);
}

#[tokio::test]
async fn list_failure_with_empty_message_uses_fallback() {
    let transport = Arc::new(MockTransport::new());
    transport
        .expect_get("admin/widgets")
        .return_err(TransportError::Network(String::new()));

    let store = ResourceStore::<Widget>::new(transport);
    let err = store.list(&ListFilter::new()).await.unwrap_err();
    assert_eq!(err.0, "Failed to fetch widgets");
}

#[tokio::test]
async fn list_sends_filter_params() {
    let transport = Arc::new(MockTransport::new());
    transport.expect_get("admin/widgets").return_json(json!([]));

    let store = ResourceStore::<Widget>::new(transport.clone());
    let filter = ListFilter::new().search("rust").page(3);
    store.list(&filter).await.unwrap();

    let calls = transport.calls();
    assert_eq!(
        calls[0].query,
        vec![
            ("search".to_string(), "rust".to_string()),
            ("page".to_string(), "3".to_string()),
        ]
    );
}

#[tokio::test]
async fn get_one_sets_current_item_without_touching_items() {
    let transport = Arc::new(MockTransport::new());
    let store = seeded_store(&transport, &[(1, "Listed")]);
    store.list(&ListFilter::new()).await.unwrap();

    transport
        .expect_get("admin/widgets/widget-1")
        .return_json(json!({ "data": widget_json(1, "Fresh detail") }));
    store.get_one("widget-1").await.unwrap();

    let state = store.state();
    assert_eq!(state.current_item.as_ref().unwrap().title, "Fresh detail");
    // the list counterpart stays stale on purpose
    assert_eq!(state.items[0].title, "Listed");
}

#[tokio::test]
async fn get_one_failure_keeps_prior_current_item() {
    let transport = Arc::new(MockTransport::new());
    transport
        .expect_get("admin/widgets/1")
        .return_json(widget_json(1, "Loaded"));
    let store = ResourceStore::<Widget>::new(transport.clone());
    store.get_one(1u64).await.unwrap();

    transport.expect_get("admin/widgets/2").return_err(TransportError::Rejected {
        status: 404,
        message: "Widget not found".into(),
    });
    assert!(store.get_one(2u64).await.is_err());

    let state = store.state();
    assert_eq!(state.current_item.as_ref().unwrap().id, 1);
    assert_eq!(state.error.as_deref(), Some("Widget not found"));
}

#[tokio::test]
async fn create_prepends_entity_and_sets_one_shot_success() {
    let transport = Arc::new(MockTransport::new());
    let store = seeded_store(&transport, &[(1, "Existing")]);
    store.list(&ListFilter::new()).await.unwrap();

    transport.expect_post("admin/widgets").return_json(json!({
        "message": "created",
        "widget": widget_json(2, "Brand new")
    }));
    store
        .create(&WidgetCreate { title: "Brand new".into() })
        .await
        .unwrap();

    let state = store.state();
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].id, 2, "created entity must land at items[0]");
    assert!(state.success);

    // success does not auto-reset across reads; only an explicit clear resets it
    assert!(store.state().success);
    store.clear_success();
    assert!(!store.state().success);
}

#[tokio::test]
async fn create_failure_sets_error_and_clears_success() {
    let transport = Arc::new(MockTransport::new());
    transport.expect_post("admin/widgets").return_err(TransportError::Rejected {
        status: 422,
        message: "Title is required".into(),
    });

    let store = ResourceStore::<Widget>::new(transport);
    let err = store
        .create(&WidgetCreate { title: String::new() })
        .await
        .unwrap_err();

    assert_eq!(err.0, "Title is required");
    let state = store.state();
    assert!(!state.success);
    assert!(state.items.is_empty());
    assert_eq!(state.error.as_deref(), Some("Title is required"));
}

#[tokio::test]
async fn update_replaces_matching_element_in_place() {
    let transport = Arc::new(MockTransport::new());
    let store = seeded_store(&transport, &[(1, "One"), (2, "Two"), (3, "Three")]);
    store.list(&ListFilter::new()).await.unwrap();

    transport
        .expect_put("admin/widgets/2")
        .return_json(widget_json(2, "Two renamed"));
    store
        .update(2u64, &WidgetUpdate { title: "Two renamed".into() })
        .await
        .unwrap();

    let state = store.state();
    assert_eq!(state.items.len(), 3);
    assert_eq!(state.items[1].title, "Two renamed");
    assert_eq!(state.items[0].title, "One");
    assert_eq!(state.items[2].title, "Three");
    assert_eq!(state.current_item.as_ref().unwrap().id, 2);
    assert!(state.success);
}

#[tokio::test]
async fn update_with_absent_target_leaves_items_unchanged() {
    let transport = Arc::new(MockTransport::new());
    let store = seeded_store(&transport, &[(1, "One")]);
    store.list(&ListFilter::new()).await.unwrap();

    transport
        .expect_put("admin/widgets/9")
        .return_json(widget_json(9, "Ghost"));
    store
        .update(9u64, &WidgetUpdate { title: "Ghost".into() })
        .await
        .unwrap();

    let state = store.state();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, 1);
    // the fulfilled response still drives current_item and success
    assert_eq!(state.current_item.as_ref().unwrap().id, 9);
    assert!(state.success);
}

#[tokio::test]
async fn delete_removes_matching_element() {
    let transport = Arc::new(MockTransport::new());
    let store = seeded_store(&transport, &[(1, "One"), (2, "Two")]);
    store.list(&ListFilter::new()).await.unwrap();

    transport
        .expect_delete("admin/widgets/widget-1")
        .return_json(Value::Null);
    store.delete("widget-1").await.unwrap();

    let state = store.state();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, 2);
}

#[tokio::test]
async fn delete_of_absent_identifier_is_idempotent() {
    let transport = Arc::new(MockTransport::new());
    let store = seeded_store(&transport, &[(1, "One")]);
    store.list(&ListFilter::new()).await.unwrap();

    transport
        .expect_delete("admin/widgets/99")
        .return_json(Value::Null);
    store.delete(99u64).await.unwrap();

    assert_eq!(store.state().items.len(), 1);
}

#[tokio::test]
async fn delete_invalidates_matching_current_item() {
    let transport = Arc::new(MockTransport::new());
    transport
        .expect_get("admin/widgets/1")
        .return_json(widget_json(1, "Loaded"));
    let store = ResourceStore::<Widget>::new(transport.clone());
    store.get_one(1u64).await.unwrap();
    assert!(store.state().current_item.is_some());

    transport
        .expect_delete("admin/widgets/1")
        .return_json(Value::Null);
    store.delete(1u64).await.unwrap();

    assert!(store.state().current_item.is_none());
}

/// Two rapid list invocations where the first settles last: the final state reflects
/// the stale first response. This pins the documented last-settled-wins limitation.
#[tokio::test]
async fn concurrent_lists_settle_last_write_wins() {
    let transport = Arc::new(MockTransport::new());
    let stale_gate = transport
        .expect_get("admin/widgets")
        .gate_json(json!([widget_json(1, "Stale")]));
    let fresh_gate = transport
        .expect_get("admin/widgets")
        .gate_json(json!([widget_json(2, "Fresh")]));

    let store = ResourceStore::<Widget>::new(transport.clone());

    let first = {
        let store = store.clone();
        tokio::spawn(async move { store.list(&ListFilter::new()).await })
    };
    while transport.calls().is_empty() {
        tokio::task::yield_now().await;
    }

    let second = {
        let store = store.clone();
        tokio::spawn(async move { store.list(&ListFilter::new()).await })
    };
    while transport.calls().len() < 2 {
        tokio::task::yield_now().await;
    }

    // the second (fresh) request settles first, then the stale one overwrites it
    fresh_gate.release();
    second.await.unwrap().unwrap();
    assert_eq!(store.state().items[0].title, "Fresh");

    stale_gate.release();
    first.await.unwrap().unwrap();
    assert_eq!(store.state().items[0].title, "Stale");
    transport.verify();
}
