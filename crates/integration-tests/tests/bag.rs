//! Bag assembly tests against the mock backend.

use sphaerostyle_integration_tests::TestContext;

#[tokio::test]
async fn bag_totals_follow_the_discount_formula() {
    // One line: price 10, discount 10%, quantity 2.
    let ctx = TestContext::new().await;
    ctx.login_shopper().await;

    let bag = ctx.get_json("/bag").await;

    assert_eq!(bag["lines"].as_array().map(Vec::len), Some(1));
    let line = &bag["lines"][0];
    assert_eq!(line["name"], "Linen Shirt");
    assert_eq!(line["color_name"], "#12372A");
    assert_eq!(line["size_name"], "M");
    assert!((line["unit_price"].as_f64().unwrap() - 9.0).abs() < 1e-9);
    assert!((line["line_total"].as_f64().unwrap() - 18.0).abs() < 1e-9);

    assert!((bag["subtotal"].as_f64().unwrap() - 18.0).abs() < 1e-9);
    assert!((bag["delivery_fee"].as_f64().unwrap() - 2.0).abs() < 1e-9);
    assert!((bag["total"].as_f64().unwrap() - 20.0).abs() < 1e-9);
}

#[tokio::test]
async fn bag_requires_a_session_and_issues_no_backend_calls_without_one() {
    let ctx = TestContext::new().await;

    let response = ctx
        .client
        .get(format!("{}/bag", ctx.storefront_url))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
    assert_eq!(ctx.backend.hit_count(), 0);
}

#[tokio::test]
async fn bag_image_comes_from_the_first_product_detail() {
    let ctx = TestContext::new().await;
    ctx.login_shopper().await;

    let bag = ctx.get_json("/bag").await;
    assert_eq!(bag["lines"][0]["image"], "https://img.example/linen-1.jpg");
}
