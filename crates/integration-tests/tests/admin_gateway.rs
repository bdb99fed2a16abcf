//! Admin gateway tests against the mock backend.

use serde_json::json;

use sphaerostyle_integration_tests::{AdminContext, SHOPPER_EMAIL, STAFF_EMAIL};

#[tokio::test]
async fn only_staff_accounts_may_sign_in() {
    let ctx = AdminContext::new().await;

    let response = ctx.login(SHOPPER_EMAIL).await;
    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Staff access only.");

    let response = ctx.login(STAFF_EMAIL).await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn management_routes_require_a_staff_session() {
    let ctx = AdminContext::new().await;

    let response = ctx
        .client
        .get(format!("{}/orders", ctx.admin_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn staff_can_list_orders_and_move_their_status() {
    let ctx = AdminContext::new().await;
    ctx.login(STAFF_EMAIL).await;

    let orders: serde_json::Value = ctx
        .client
        .get(format!("{}/orders", ctx.admin_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(orders[0]["order_id"], 3);
    assert_eq!(orders[0]["status"], "Pending");

    let response = ctx
        .client
        .patch(format!("{}/orders/3/status", ctx.admin_url))
        .json(&json!({ "status": "Shipped" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    assert_eq!(
        ctx.backend.status_updates(),
        vec![(3, "Shipped".to_string())]
    );
}

#[tokio::test]
async fn unknown_order_statuses_are_rejected_before_the_backend() {
    let ctx = AdminContext::new().await;
    ctx.login(STAFF_EMAIL).await;
    ctx.backend.reset_hits();

    let response = ctx
        .client
        .patch(format!("{}/orders/3/status", ctx.admin_url))
        .json(&json!({ "status": "Lost" }))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    assert!(ctx.backend.status_updates().is_empty());
}

#[tokio::test]
async fn upload_rejects_non_image_files() {
    let ctx = AdminContext::new().await;
    ctx.login(STAFF_EMAIL).await;

    let part = reqwest::multipart::Part::text("not an image")
        .file_name("notes.txt")
        .mime_str("text/plain")
        .unwrap();
    let form = reqwest::multipart::Form::new().part("images", part);

    let response = ctx
        .client
        .post(format!("{}/upload", ctx.admin_url))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Only image files can be uploaded.");
}
