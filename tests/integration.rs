//! Integration tests for the receipt points service.
//!
//! This test suite drives the HTTP router end to end and covers:
//! - The four reference receipts and their expected points
//! - Submit then fetch round trips
//! - Rule isolation through the public API
//! - Validation, not-found and calculation error responses
//! - Concurrent submissions
//! - Property tests for the rule engine

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tower::ServiceExt;

use receipt_points::api::{AppState, create_router, start_background_server};
use receipt_points::audit::TracingAuditSink;
use receipt_points::calculation::{calculate_breakdown, calculate_points};
use receipt_points::config::ServerSettings;
use receipt_points::models::{Item, Receipt};
use receipt_points::store::InMemoryReceiptStore;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    create_router(AppState::in_memory())
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_receipt(router: Router, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn get_points(router: Router, id: &str) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("GET")
            .uri(format!("/receipts/{}/points", id))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

/// Submits a receipt and fetches its points through the same router.
async fn submit_and_fetch(router: Router, body: Value) -> u64 {
    let (status, submitted) = post_receipt(router.clone(), body).await;
    assert_eq!(status, StatusCode::OK, "submit failed: {}", submitted);

    let id = submitted["id"].as_str().unwrap().to_string();
    let (status, fetched) = get_points(router, &id).await;
    assert_eq!(status, StatusCode::OK, "fetch failed: {}", fetched);

    fetched["points"].as_u64().unwrap()
}

fn create_receipt(retailer: &str, date: &str, time: &str, total: &str, items: Vec<Value>) -> Value {
    json!({
        "retailer": retailer,
        "purchaseDate": date,
        "purchaseTime": time,
        "items": items,
        "total": total
    })
}

fn create_item(description: &str, price: &str) -> Value {
    json!({ "shortDescription": description, "price": price })
}

fn target_receipt() -> Value {
    create_receipt(
        "Target",
        "2022-01-01",
        "13:01",
        "35.35",
        vec![
            create_item("Mountain Dew 12PK", "6.49"),
            create_item("Emils Cheese Pizza", "12.25"),
            create_item("Knorr Creamy Chicken", "1.26"),
            create_item("Doritos Nacho Cheese", "3.35"),
            create_item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
    )
}

fn mm_corner_market_receipt() -> Value {
    create_receipt(
        "M&M Corner Market",
        "2022-03-20",
        "14:33",
        "9.00",
        vec![
            create_item("Gatorade", "2.25"),
            create_item("Gatorade", "2.25"),
            create_item("Gatorade", "2.25"),
            create_item("Gatorade", "2.25"),
        ],
    )
}

fn walgreens_receipt() -> Value {
    create_receipt(
        "Walgreens",
        "2022-01-02",
        "08:13",
        "2.65",
        vec![
            create_item("Pepsi - 12-oz", "1.25"),
            create_item("Dasani", "1.40"),
        ],
    )
}

fn target_single_item_receipt() -> Value {
    create_receipt(
        "Target",
        "2022-01-02",
        "13:13",
        "1.25",
        vec![create_item("Pepsi - 12-oz", "1.25")],
    )
}

/// "AB" on an even morning with one 4-character item: scores 2.
fn baseline_receipt() -> Value {
    create_receipt(
        "AB",
        "2022-01-02",
        "10:00",
        "1.10",
        vec![create_item("Soda", "1.10")],
    )
}

// =============================================================================
// Reference receipts
// =============================================================================

#[tokio::test]
async fn test_target_five_items_scores_28() {
    assert_eq!(submit_and_fetch(create_router_for_test(), target_receipt()).await, 28);
}

#[tokio::test]
async fn test_mm_corner_market_scores_109() {
    assert_eq!(
        submit_and_fetch(create_router_for_test(), mm_corner_market_receipt()).await,
        109
    );
}

#[tokio::test]
async fn test_walgreens_scores_15() {
    assert_eq!(submit_and_fetch(create_router_for_test(), walgreens_receipt()).await, 15);
}

#[tokio::test]
async fn test_target_single_item_scores_31() {
    assert_eq!(
        submit_and_fetch(create_router_for_test(), target_single_item_receipt()).await,
        31
    );
}

// =============================================================================
// Round trips
// =============================================================================

#[tokio::test]
async fn test_same_receipt_twice_gets_distinct_ids_same_points() {
    let router = create_router_for_test();

    let (_, first) = post_receipt(router.clone(), walgreens_receipt()).await;
    let (_, second) = post_receipt(router.clone(), walgreens_receipt()).await;
    assert_ne!(first["id"], second["id"]);

    for id in [&first["id"], &second["id"]] {
        let (status, fetched) = get_points(router.clone(), id.as_str().unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["points"], 15);
    }
}

#[tokio::test]
async fn test_repeated_fetch_does_not_drift() {
    let router = create_router_for_test();
    let (_, submitted) = post_receipt(router.clone(), target_receipt()).await;
    let id = submitted["id"].as_str().unwrap();

    for _ in 0..5 {
        let (_, fetched) = get_points(router.clone(), id).await;
        assert_eq!(fetched["points"], 28);
    }
}

#[tokio::test]
async fn test_concurrent_submissions_are_all_recorded() {
    let store = Arc::new(InMemoryReceiptStore::new());
    let router = create_router(AppState::new(store.clone(), Arc::new(TracingAuditSink)));

    let mut handles = Vec::new();
    for _ in 0..32 {
        let router = router.clone();
        handles.push(tokio::spawn(async move {
            post_receipt(router, mm_corner_market_receipt()).await
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        ids.push(body["id"].as_str().unwrap().to_string());
    }

    assert_eq!(store.len().await, 32);
    for id in ids {
        let (_, fetched) = get_points(router.clone(), &id).await;
        assert_eq!(fetched["points"], 109);
    }
}

// =============================================================================
// Rule isolation
// =============================================================================

#[tokio::test]
async fn test_baseline_scores_retailer_characters_only() {
    assert_eq!(submit_and_fetch(create_router_for_test(), baseline_receipt()).await, 2);
}

#[tokio::test]
async fn test_round_total_also_hits_quarter_rule() {
    let mut receipt = baseline_receipt();
    receipt["total"] = json!("9.00");
    assert_eq!(submit_and_fetch(create_router_for_test(), receipt).await, 2 + 75);
}

#[tokio::test]
async fn test_nine_ten_total_hits_neither_total_rule() {
    let mut receipt = baseline_receipt();
    receipt["total"] = json!("9.10");
    assert_eq!(submit_and_fetch(create_router_for_test(), receipt).await, 2);
}

#[tokio::test]
async fn test_quarter_total_only() {
    let mut receipt = baseline_receipt();
    receipt["total"] = json!("0.75");
    assert_eq!(submit_and_fetch(create_router_for_test(), receipt).await, 2 + 25);
}

#[tokio::test]
async fn test_item_pairs_only() {
    let mut receipt = baseline_receipt();
    receipt["items"] = json!([
        create_item("Soda", "1.10"),
        create_item("Soda", "1.10"),
        create_item("Soda", "1.10"),
    ]);
    assert_eq!(submit_and_fetch(create_router_for_test(), receipt).await, 2 + 5);
}

#[tokio::test]
async fn test_description_length_only() {
    let mut receipt = baseline_receipt();
    receipt["items"] = json!([create_item("  Tea  ", "10.01")]);
    // ceil(10.01 * 0.2) = ceil(2.002) = 3
    assert_eq!(submit_and_fetch(create_router_for_test(), receipt).await, 2 + 3);
}

#[tokio::test]
async fn test_odd_day_only() {
    let mut receipt = baseline_receipt();
    receipt["purchaseDate"] = json!("2022-01-31");
    assert_eq!(submit_and_fetch(create_router_for_test(), receipt).await, 2 + 6);
}

#[tokio::test]
async fn test_afternoon_window_bounds() {
    for (time, expected) in [("13:59", 2), ("14:00", 12), ("15:59", 12), ("16:00", 2)] {
        let mut receipt = baseline_receipt();
        receipt["purchaseTime"] = json!(time);
        assert_eq!(
            submit_and_fetch(create_router_for_test(), receipt).await,
            expected,
            "purchase time {}",
            time
        );
    }
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_error_unknown_id_is_not_found() {
    let (status, body) = get_points(create_router_for_test(), "7fb1377b-b223-49d9-a31a-5a02701dd310").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "RECEIPT_NOT_FOUND");
    assert_eq!(body["message"], "No receipt found for that ID.");
    assert!(body.get("points").is_none());
}

#[tokio::test]
async fn test_error_validation_reports_every_field() {
    let body = json!({
        "retailer": "Target!",
        "purchaseDate": "01/02/2022",
        "purchaseTime": "1:13",
        "items": [{ "shortDescription": "Pepsi", "price": "1.2" }],
        "total": "1.25"
    });

    let (status, error) = post_receipt(create_router_for_test(), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert_eq!(error["message"], "Invalid input data. Please verify input.");

    let fields: Vec<&str> = error["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect();
    assert_eq!(
        fields,
        vec!["retailer", "purchaseDate", "purchaseTime", "items[0].price"]
    );
}

#[tokio::test]
async fn test_error_wrong_types_reported_alongside_pattern_violations() {
    let body = json!({
        "retailer": "Target!",
        "purchaseDate": "2022-01-02",
        "purchaseTime": "13:13",
        "items": [{ "shortDescription": "Pepsi", "price": 1.25 }],
        "total": 1.25
    });

    let (status, error) = post_receipt(create_router_for_test(), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let violations = error["violations"].as_array().unwrap();
    let fields: Vec<&str> = violations
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["retailer", "total", "items[0].price"]);
    assert_eq!(violations[1]["message"], "must be a string");
    assert_eq!(violations[2]["message"], "must be a string");
}

#[tokio::test]
async fn test_error_huge_prices_do_not_crash_the_service() {
    let store = Arc::new(InMemoryReceiptStore::new());
    let router = create_router(AppState::new(store.clone(), Arc::new(TracingAuditSink)));

    let mut receipt = baseline_receipt();
    receipt["items"] = json!([
        { "shortDescription": "Abc", "price": "92000000000000000000.00" },
        { "shortDescription": "Abc", "price": "92000000000000000000.00" }
    ]);

    let (status, error) = post_receipt(router.clone(), receipt).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error["code"], "CALCULATION_ERROR");
    assert!(store.is_empty().await);

    // The service keeps answering after the failed calculation
    let points = submit_and_fetch(router, baseline_receipt()).await;
    assert!(points > 0);
}

#[tokio::test]
async fn test_error_missing_items() {
    let mut receipt = baseline_receipt();
    receipt.as_object_mut().unwrap().remove("items");

    let (status, error) = post_receipt(create_router_for_test(), receipt).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["violations"][0]["field"], "items");
    assert_eq!(error["violations"][0]["message"], "field required");
}

#[tokio::test]
async fn test_error_empty_items() {
    let mut receipt = baseline_receipt();
    receipt["items"] = json!([]);

    let (status, error) = post_receipt(create_router_for_test(), receipt).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["violations"][0]["field"], "items");
}

#[tokio::test]
async fn test_error_impossible_time_is_internal_error() {
    let store = Arc::new(InMemoryReceiptStore::new());
    let router = create_router(AppState::new(store.clone(), Arc::new(TracingAuditSink)));

    let mut receipt = baseline_receipt();
    receipt["purchaseTime"] = json!("24:30");

    let (status, error) = post_receipt(router, receipt).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error["code"], "CALCULATION_ERROR");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_error_validation_and_not_found_are_distinguishable() {
    let router = create_router_for_test();
    let (validation_status, validation) = post_receipt(router.clone(), json!({})).await;
    let (missing_status, missing) = get_points(router, "nope").await;

    assert_ne!(validation_status, missing_status);
    assert_ne!(validation["code"], missing["code"]);
}

// =============================================================================
// Live server
// =============================================================================

#[tokio::test]
async fn test_background_server_serves_http() {
    let settings = ServerSettings {
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    let addr = start_background_server(&settings, AppState::in_memory())
        .await
        .unwrap();

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(
            b"GET /receipts/unknown/points HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await
        .unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 404"), "got: {}", response);
    assert!(response.contains("RECEIPT_NOT_FOUND"));
}

// =============================================================================
// Property tests
// =============================================================================

fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn item() -> impl Strategy<Value = Item> {
    ("[A-Za-z0-9 -]{1,30}", amount()).prop_map(|(description, price)| Item::new(description, price))
}

fn receipt() -> impl Strategy<Value = Receipt> {
    (
        "[A-Za-z0-9 &-]{1,30}",
        2000i32..2030,
        1u32..13,
        1u32..29,
        0u32..24,
        0u32..60,
        prop::collection::vec(item(), 1..12),
        amount(),
    )
        .prop_map(|(retailer, year, month, day, hour, minute, items, total)| Receipt {
            retailer,
            purchase_date: format!("{:04}-{:02}-{:02}", year, month, day),
            purchase_time: format!("{:02}:{:02}", hour, minute),
            items,
            total,
        })
}

proptest! {
    #[test]
    fn prop_points_are_deterministic(receipt in receipt()) {
        let first = calculate_points(&receipt).unwrap();
        prop_assert_eq!(calculate_points(&receipt).unwrap(), first);
    }

    #[test]
    fn prop_total_is_sum_of_breakdown(receipt in receipt()) {
        let breakdown = calculate_breakdown(&receipt).unwrap();
        let sum: u64 = breakdown.steps.iter().map(|s| s.points).sum();
        prop_assert_eq!(breakdown.total_points, sum);
        prop_assert_eq!(breakdown.steps.len(), 7);
    }

    #[test]
    fn prop_points_at_least_retailer_and_pairs(receipt in receipt()) {
        let alphanumeric = receipt.retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64;
        let pairs = (receipt.items.len() / 2) as u64 * 5;
        prop_assert!(calculate_points(&receipt).unwrap() >= alphanumeric + pairs);
    }
}
