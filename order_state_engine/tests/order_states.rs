use std::collections::BTreeSet;

use order_state_engine::{
    db_types::{OrderStateId, StateName},
    OrderStateApi,
    OrderStateApiError,
};
use tokio::runtime::Runtime;

mod support;

use support::{prepare_test_env, random_db_path};

#[test]
fn create_fetch_and_delete() {
    let sys = Runtime::new().unwrap();
    sys.block_on(async move {
        let url = random_db_path();
        let db = prepare_test_env(&url).await;
        let api = OrderStateApi::new(db);

        let created = api.create_order_state("CONFIRMED").await.expect("Error creating order state");
        assert_eq!(created.state, "CONFIRMED");
        assert!(!created.id.as_str().is_empty());

        let fetched = api
            .order_state_by_id(&created.id)
            .await
            .expect("Error fetching order state")
            .expect("Created record should be fetchable");
        assert_eq!(fetched, created);

        let removed = api
            .delete_order_state(&created.id)
            .await
            .expect("Error deleting order state")
            .expect("Created record should be removable");
        assert_eq!(removed, created);

        // The record is gone, so both a fetch and a second delete come back empty
        assert!(api.order_state_by_id(&created.id).await.unwrap().is_none());
        assert!(api.delete_order_state(&created.id).await.unwrap().is_none());
    });
}

#[test]
fn created_ids_are_unique() {
    let sys = Runtime::new().unwrap();
    sys.block_on(async move {
        let url = random_db_path();
        let db = prepare_test_env(&url).await;
        let api = OrderStateApi::new(db);

        let mut ids = BTreeSet::new();
        for _ in 0..10 {
            let created = api.create_order_state("DONE").await.expect("Error creating order state");
            assert!(ids.insert(created.id.0), "Store assigned a duplicate id");
        }

        let all = api.order_states().await.expect("Error listing order states");
        assert_eq!(all.len(), 10);
    });
}

#[test]
fn listing_reflects_store_content() {
    let sys = Runtime::new().unwrap();
    sys.block_on(async move {
        let url = random_db_path();
        let db = prepare_test_env(&url).await;
        let api = OrderStateApi::new(db);

        assert!(api.order_states().await.expect("Error listing order states").is_empty());

        let a = api.create_order_state("CONFIRMED").await.expect("Error creating order state");
        let b = api.create_order_state("CANCELLED").await.expect("Error creating order state");

        let all = api.order_states().await.expect("Error listing order states");
        assert_eq!(all.len(), 2);
        assert!(all.contains(&a));
        assert!(all.contains(&b));
    });
}

#[test]
fn fetching_unknown_id_returns_none() {
    let sys = Runtime::new().unwrap();
    sys.block_on(async move {
        let url = random_db_path();
        let db = prepare_test_env(&url).await;
        let api = OrderStateApi::new(db);

        let id = OrderStateId("nonexistent".to_string());
        assert!(api.order_state_by_id(&id).await.expect("Error fetching order state").is_none());
    });
}

#[test]
fn seeding_is_idempotent() {
    let sys = Runtime::new().unwrap();
    sys.block_on(async move {
        let url = random_db_path();
        let db = prepare_test_env(&url).await;
        let api = OrderStateApi::new(db);

        let inserted = api.seed_default_states().await;
        assert_eq!(inserted, 4);

        let states = canonical_states(&api).await;
        let expected =
            StateName::ALL.iter().map(|name| name.as_str().to_string()).collect::<BTreeSet<String>>();
        assert_eq!(states, expected);

        // A second run finds all four labels present and inserts nothing
        let inserted = api.seed_default_states().await;
        assert_eq!(inserted, 0);
        assert_eq!(canonical_states(&api).await.len(), 4);
        assert_eq!(api.order_states().await.unwrap().len(), 4);
    });
}

#[test]
fn seeding_fills_in_missing_states_only() {
    let sys = Runtime::new().unwrap();
    sys.block_on(async move {
        let url = random_db_path();
        let db = prepare_test_env(&url).await;
        let api = OrderStateApi::new(db);

        let existing = api.create_order_state("CONFIRMED").await.expect("Error creating order state");
        let inserted = api.seed_default_states().await;
        assert_eq!(inserted, 3);

        // The pre-existing CONFIRMED record was left untouched
        let fetched = api.order_state_by_id(&existing.id).await.unwrap().expect("Record should still exist");
        assert_eq!(fetched, existing);
        assert_eq!(api.order_states().await.unwrap().len(), 4);
    });
}

#[test]
fn schema_validation_rejects_empty_state() {
    let sys = Runtime::new().unwrap();
    sys.block_on(async move {
        let url = random_db_path();
        let db = prepare_test_env(&url).await;
        let api = OrderStateApi::new(db);

        let err = api.create_order_state("").await.expect_err("Empty state should fail schema validation");
        assert!(matches!(err, OrderStateApiError::ValidationError(_)));
        assert!(api.order_states().await.unwrap().is_empty());
    });
}

#[test]
fn non_canonical_states_are_stored_verbatim() {
    let sys = Runtime::new().unwrap();
    sys.block_on(async move {
        let url = random_db_path();
        let db = prepare_test_env(&url).await;
        let api = OrderStateApi::new(db);

        let created = api.create_order_state("ARCHIVED").await.expect("Error creating order state");
        assert_eq!(created.state, "ARCHIVED");
    });
}

async fn canonical_states<B>(api: &OrderStateApi<B>) -> BTreeSet<String>
where B: order_state_engine::traits::OrderStateManagement {
    api.order_states()
        .await
        .expect("Error listing order states")
        .into_iter()
        .map(|os| os.state)
        .collect()
}
