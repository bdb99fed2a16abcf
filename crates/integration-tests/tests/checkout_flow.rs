//! Checkout payment-session flow tests against the mock backend.
//!
//! Countdown behavior is exercised with short validity windows; the flow
//! logic is identical at 180 seconds.

use std::time::Duration;

use serde_json::json;

use sphaerostyle_integration_tests::{OrderMode, PurchaseMode, TestContext};

/// Open a checkout with the default address and select ABA PAY.
async fn open_and_select(ctx: &TestContext) -> serde_json::Value {
    let response = ctx.post_json("/checkout", &json!({ "address_id": 1 })).await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let response = ctx
        .post_json("/checkout/method", &json!({ "method": "abapay" }))
        .await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    response.json().await.unwrap()
}

#[tokio::test]
async fn checkout_without_address_is_blocked_before_any_backend_call() {
    let ctx = TestContext::new().await;
    ctx.login_shopper().await;

    let response = ctx.post_json("/checkout", &json!({})).await;

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Please select a delivery address before checkout.");
    // The guard fires before the controller touches the backend at all.
    assert_eq!(ctx.backend.hit_count(), 0);
}

#[tokio::test]
async fn open_locks_the_total_and_lists_the_method_catalog() {
    let ctx = TestContext::new().await;
    ctx.login_shopper().await;

    let response = ctx.post_json("/checkout", &json!({ "address_id": 1 })).await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let summary: serde_json::Value = response.json().await.unwrap();

    assert!((summary["subtotal"].as_f64().unwrap() - 18.0).abs() < 1e-9);
    assert!((summary["total"].as_f64().unwrap() - 20.0).abs() < 1e-9);

    let methods: Vec<&str> = summary["methods"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["value"].as_str().unwrap())
        .collect();
    assert_eq!(methods, vec!["abapay", "cards", "khqr", "alipay", "wechat"]);
}

#[tokio::test]
async fn selecting_aba_pay_issues_a_qr_session_with_the_full_window() {
    let ctx = TestContext::new().await;
    ctx.login_shopper().await;

    let outcome = open_and_select(&ctx).await;

    assert_eq!(outcome["kind"], "qr_session");
    assert_eq!(outcome["qr_image"], "data:image/png;base64,qr-1");
    assert_eq!(outcome["tran_id"], "tran-1");
    assert_eq!(outcome["expires_in_secs"], 180);
    assert_eq!(ctx.backend.purchase_calls(), 1);

    let status = ctx.get_json("/checkout/session").await;
    assert_eq!(status["state"], "session_active");
    assert!(status["remaining_secs"].as_u64().unwrap() <= 180);
}

#[tokio::test]
async fn selecting_a_non_qr_method_hands_off_and_ends_the_flow() {
    let ctx = TestContext::new().await;
    ctx.login_shopper().await;

    let response = ctx.post_json("/checkout", &json!({ "address_id": 1 })).await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let response = ctx
        .post_json("/checkout/method", &json!({ "method": "cards" }))
        .await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let outcome: serde_json::Value = response.json().await.unwrap();
    assert_eq!(outcome["kind"], "handoff");
    assert_eq!(outcome["label"], "Credit/Debit Card");

    // No gateway call, and the controller is back to idle.
    assert_eq!(ctx.backend.purchase_calls(), 0);
    let status = ctx.get_json("/checkout/session").await;
    assert_eq!(status["state"], "idle");
}

#[tokio::test]
async fn expiry_triggers_exactly_one_refresh_and_resets_the_window() {
    let ctx = TestContext::with_payment_window(Duration::from_secs(1)).await;
    ctx.login_shopper().await;

    open_and_select(&ctx).await;
    assert_eq!(ctx.backend.purchase_calls(), 1);

    // Let the window lapse once: exactly one refresh call, session renewed.
    tokio::time::sleep(Duration::from_millis(1600)).await;
    assert_eq!(ctx.backend.purchase_calls(), 2);

    let status = ctx.get_json("/checkout/session").await;
    assert_eq!(status["state"], "session_active");
    assert_eq!(status["qr_image"], "data:image/png;base64,qr-2");
    assert_eq!(status["tran_id"], "tran-2");
}

#[tokio::test]
async fn refresh_failure_discards_the_session_and_stops_the_timer() {
    let ctx = TestContext::with_payment_window(Duration::from_millis(500)).await;
    ctx.login_shopper().await;
    ctx.backend.set_purchase_mode(PurchaseMode::FailAfter(1));

    open_and_select(&ctx).await;
    assert_eq!(ctx.backend.purchase_calls(), 1);

    // The refresh fails; the flow must be gone.
    tokio::time::sleep(Duration::from_millis(900)).await;
    assert_eq!(ctx.backend.purchase_calls(), 2);
    let status = ctx.get_json("/checkout/session").await;
    assert_eq!(status["state"], "idle");

    // And no further tick may fire afterwards.
    tokio::time::sleep(Duration::from_millis(1200)).await;
    assert_eq!(ctx.backend.purchase_calls(), 2);
}

#[tokio::test]
async fn closing_the_popup_discards_the_session_without_a_gateway_call() {
    let ctx = TestContext::with_payment_window(Duration::from_millis(500)).await;
    ctx.login_shopper().await;

    open_and_select(&ctx).await;
    let response = ctx.delete("/checkout").await;
    assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);

    let status = ctx.get_json("/checkout/session").await;
    assert_eq!(status["state"], "idle");

    // The watcher died with the flow: the lapsed window refreshes nothing.
    tokio::time::sleep(Duration::from_millis(1200)).await;
    assert_eq!(ctx.backend.purchase_calls(), 1);
}

#[tokio::test]
async fn pay_submits_the_snapshotted_order_and_redirects_once() {
    let ctx = TestContext::new().await;
    ctx.login_shopper().await;

    open_and_select(&ctx).await;

    let response = ctx.post_json("/checkout/pay", &json!({})).await;
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    let receipt: serde_json::Value = response.json().await.unwrap();
    assert_eq!(receipt["redirect"], "/successfully");

    // Exactly one POST /api/orders, carrying the snapshotted payload.
    let orders = ctx.backend.orders();
    assert_eq!(orders.len(), 1);
    let (key, body) = &orders[0];
    assert!(key.is_some(), "order POST carries an idempotency key");
    assert_eq!(body["user_address"], "A, 1, X, Y, Cambodia");
    assert_eq!(body["payment_method"], "ABA PAY");
    assert!((body["total"].as_f64().unwrap() - 20.0).abs() < 1e-9);

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["product_id"], 7);
    assert_eq!(items[0]["quantity"], 2);
    assert!((items[0]["price"].as_f64().unwrap() - 10.0).abs() < 1e-9);
    assert!((items[0]["discount"].as_f64().unwrap() - 10.0).abs() < 1e-9);

    // The flow is torn down after success.
    let status = ctx.get_json("/checkout/session").await;
    assert_eq!(status["state"], "idle");
}

#[tokio::test]
async fn failed_submission_keeps_the_session_and_reuses_the_idempotency_key() {
    let ctx = TestContext::new().await;
    ctx.login_shopper().await;
    ctx.backend.set_order_mode(OrderMode::Fail);

    open_and_select(&ctx).await;

    // First attempt fails; the error is surfaced and the QR survives.
    let response = ctx.post_json("/checkout/pay", &json!({})).await;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(
        body["error"].as_str().unwrap().contains("order store unavailable"),
        "backend message is surfaced verbatim"
    );

    let status = ctx.get_json("/checkout/session").await;
    assert_eq!(status["state"], "session_active");
    assert_eq!(status["qr_image"], "data:image/png;base64,qr-1");

    // Retry succeeds and reuses the same idempotency key.
    ctx.backend.set_order_mode(OrderMode::Created);
    let response = ctx.post_json("/checkout/pay", &json!({})).await;
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);

    let orders = ctx.backend.orders();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].0, orders[1].0, "retry reuses the flow's key");
}

#[tokio::test]
async fn pay_without_an_open_checkout_is_rejected() {
    let ctx = TestContext::new().await;
    ctx.login_shopper().await;

    let response = ctx.post_json("/checkout/pay", &json!({})).await;
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    assert!(ctx.backend.orders().is_empty());
}
