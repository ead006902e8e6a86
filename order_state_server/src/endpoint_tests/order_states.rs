use actix_web::{http::StatusCode, web, web::ServiceConfig};
use order_state_engine::{
    db_types::{OrderState, OrderStateId},
    OrderStateApi,
    OrderStateApiError,
};
use serde_json::json;

use super::{
    helpers::{delete_request, get_request, post_request},
    mocks::MockOrderStateDb,
};
use crate::{
    config::PublicUrl,
    routes::{CreateOrderStateRoute, DeleteOrderStateRoute, OrderStateByIdRoute, OrderStatesRoute},
};

const CONFIRMED_ID: &str = "5b2a4257-cf5a-41b6-8e84-2afcfc2df936";
const CANCELLED_ID: &str = "9c1de0cf-6f4b-4a83-9d9f-52f1c0a2be6d";

#[actix_web::test]
async fn create_order_state_returns_created_record() {
    let _ = env_logger::try_init();
    fn configure(cfg: &mut ServiceConfig) {
        let mut db = MockOrderStateDb::new();
        db.expect_insert_order_state()
            .returning(|new_state| Ok(OrderState { id: OrderStateId(CONFIRMED_ID.into()), state: new_state.state }));
        install(db, cfg);
    }
    let (status, body) =
        post_request("/status", json!({"state": "CONFIRMED"}), configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, CREATED_JSON);
}

#[actix_web::test]
async fn create_order_state_rejects_empty_state() {
    let _ = env_logger::try_init();
    // No expectations are installed: the schema check must reject the record before the store is touched
    fn configure(cfg: &mut ServiceConfig) {
        install(MockOrderStateDb::new(), cfg);
    }
    let (status, body) = post_request("/status", json!({"state": ""}), configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_str(&body).expect("Body should be JSON");
    assert_eq!(body["message"], "Order state failed schema validation.");
    assert_eq!(body["errors"]["state"], "Path `state` is required.");
}

#[actix_web::test]
async fn create_order_state_maps_store_failure_to_server_error() {
    let _ = env_logger::try_init();
    fn configure(cfg: &mut ServiceConfig) {
        let mut db = MockOrderStateDb::new();
        db.expect_insert_order_state()
            .returning(|_| Err(OrderStateApiError::DatabaseError("connection reset".to_string())));
        install(db, cfg);
    }
    let err = post_request("/status", json!({"state": "CONFIRMED"}), configure).await.expect_err("Expected error");
    assert_eq!(err, "An error occurred on the backend of the server. Database error: connection reset");
}

#[actix_web::test]
async fn list_order_states() {
    let _ = env_logger::try_init();
    fn configure(cfg: &mut ServiceConfig) {
        let mut db = MockOrderStateDb::new();
        db.expect_fetch_order_states().returning(|| Ok(order_states_response()));
        install(db, cfg);
    }
    let (status, body) = get_request("/status", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, ORDER_STATES_JSON);
}

#[actix_web::test]
async fn list_order_states_on_empty_store_is_not_found() {
    let _ = env_logger::try_init();
    fn configure(cfg: &mut ServiceConfig) {
        let mut db = MockOrderStateDb::new();
        db.expect_fetch_order_states().returning(|| Ok(vec![]));
        install(db, cfg);
    }
    let (status, body) = get_request("/status", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"message":"No records for order states were found in the database."}"#);
}

#[actix_web::test]
async fn fetch_order_state_by_id() {
    let _ = env_logger::try_init();
    fn configure(cfg: &mut ServiceConfig) {
        let mut db = MockOrderStateDb::new();
        db.expect_fetch_order_state_by_id()
            .returning(|id| Ok(Some(OrderState { id: id.clone(), state: "CONFIRMED".to_string() })));
        install(db, cfg);
    }
    let (status, body) = get_request(&format!("/status/{CONFIRMED_ID}"), configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, format!(r#"{{"id":"{CONFIRMED_ID}","state":"CONFIRMED"}}"#));
}

#[actix_web::test]
async fn fetch_unknown_order_state_is_not_found() {
    let _ = env_logger::try_init();
    fn configure(cfg: &mut ServiceConfig) {
        let mut db = MockOrderStateDb::new();
        db.expect_fetch_order_state_by_id().returning(|_| Ok(None));
        install(db, cfg);
    }
    let (status, body) = get_request("/status/nonexistent", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        r#"{"message":"Order state record with id equal to nonexistent could not be found in the database."}"#
    );
}

#[actix_web::test]
async fn delete_order_state() {
    let _ = env_logger::try_init();
    fn configure(cfg: &mut ServiceConfig) {
        let mut db = MockOrderStateDb::new();
        db.expect_delete_order_state()
            .returning(|id| Ok(Some(OrderState { id: id.clone(), state: "CANCELLED".to_string() })));
        install(db, cfg);
    }
    let (status, body) = delete_request(&format!("/status/{CANCELLED_ID}"), configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, REMOVED_JSON);
}

#[actix_web::test]
async fn delete_unknown_order_state_is_not_found() {
    let _ = env_logger::try_init();
    fn configure(cfg: &mut ServiceConfig) {
        let mut db = MockOrderStateDb::new();
        db.expect_delete_order_state().returning(|_| Ok(None));
        install(db, cfg);
    }
    let (status, body) = delete_request("/status/nonexistent", configure).await.expect("Request failed");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"message":"There is no order state record with id equal to nonexistent in the database."}"#);
}

fn install(db: MockOrderStateDb, cfg: &mut ServiceConfig) {
    let api = OrderStateApi::new(db);
    cfg.service(CreateOrderStateRoute::<MockOrderStateDb>::new())
        .service(OrderStatesRoute::<MockOrderStateDb>::new())
        .service(OrderStateByIdRoute::<MockOrderStateDb>::new())
        .service(DeleteOrderStateRoute::<MockOrderStateDb>::new())
        .app_data(web::Data::new(api))
        .app_data(web::Data::new(PublicUrl::new("http://localhost:8080")));
}

// Mock response to `fetch_order_states` call
fn order_states_response() -> Vec<OrderState> {
    vec![
        OrderState { id: OrderStateId(CONFIRMED_ID.into()), state: "CONFIRMED".to_string() },
        OrderState { id: OrderStateId(CANCELLED_ID.into()), state: "CANCELLED".to_string() },
    ]
}

const CREATED_JSON: &str = r#"{"newOrderState":{"id":"5b2a4257-cf5a-41b6-8e84-2afcfc2df936","state":"CONFIRMED"},"request":{"description":"HTTP request for getting details of created order state.","method":"GET","url":"http://localhost:8080/status/5b2a4257-cf5a-41b6-8e84-2afcfc2df936"}}"#;

const ORDER_STATES_JSON: &str = r#"{"count":2,"orderStates":[{"orderState":{"id":"5b2a4257-cf5a-41b6-8e84-2afcfc2df936","state":"CONFIRMED"},"request":{"description":"HTTP request for getting certain order state details.","method":"GET","url":"http://localhost:8080/status/5b2a4257-cf5a-41b6-8e84-2afcfc2df936"}},{"orderState":{"id":"9c1de0cf-6f4b-4a83-9d9f-52f1c0a2be6d","state":"CANCELLED"},"request":{"description":"HTTP request for getting certain order state details.","method":"GET","url":"http://localhost:8080/status/9c1de0cf-6f4b-4a83-9d9f-52f1c0a2be6d"}}]}"#;

const REMOVED_JSON: &str = r#"{"message":"Order state record with id: 9c1de0cf-6f4b-4a83-9d9f-52f1c0a2be6d was deleted successfully from the database.","removedOrderState":{"id":"9c1de0cf-6f4b-4a83-9d9f-52f1c0a2be6d","state":"CANCELLED"}}"#;
