//! Integration test harness for Sphaerostyle.
//!
//! Spins the storefront (or admin) gateway against an in-process mock of the
//! commerce REST backend, then drives the gateway over real HTTP with a
//! cookie-holding client.
//!
//! # Example
//!
//! ```rust,ignore
//! let ctx = TestContext::new().await;
//! ctx.login_shopper().await;
//!
//! let bag: serde_json::Value = ctx.get_json("/bag").await;
//! assert_eq!(bag["total"], 20.0);
//! ```

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use secrecy::SecretString;
use serde_json::{Value, json};

/// Password every mock account accepts.
pub const PASSWORD: &str = "pa55w0rd!";
/// Shopper account (role 2).
pub const SHOPPER_EMAIL: &str = "shopper@example.com";
/// Staff account (role 1).
pub const STAFF_EMAIL: &str = "staff@example.com";

/// High-entropy session secret for test configs (never validated, but the
/// signing key needs 64+ bytes).
const TEST_SESSION_SECRET: &str =
    "k9#Qw2$Vx7!Zr4@Tn8%Lm1&Jp5*Hd3(Fb6)Gc0+Ys9-Ua2=Ie7_Ox4~Wq1^Mz8kQ";

// =============================================================================
// Mock commerce backend
// =============================================================================

/// How the mock payment gateway answers purchase requests.
#[derive(Debug, Clone, Copy)]
pub enum PurchaseMode {
    /// Always issue a session.
    Succeed,
    /// Issue sessions for the first `n` calls, then answer 500.
    FailAfter(u32),
}

/// How the mock backend answers order creation.
#[derive(Debug, Clone, Copy)]
pub enum OrderMode {
    /// Answer 201 Created.
    Created,
    /// Answer 500 with a message.
    Fail,
}

struct MockInner {
    purchase_calls: u32,
    purchase_mode: PurchaseMode,
    order_mode: OrderMode,
    /// Captured order bodies with their idempotency keys.
    orders: Vec<(Option<String>, Value)>,
    /// Captured order status updates as `(order_id, status)`.
    status_updates: Vec<(i32, String)>,
    /// Every request path seen.
    hits: Vec<String>,
}

/// Shared handle onto the mock backend's state.
#[derive(Clone)]
pub struct MockBackend {
    inner: Arc<Mutex<MockInner>>,
}

impl MockBackend {
    fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockInner {
                purchase_calls: 0,
                purchase_mode: PurchaseMode::Succeed,
                order_mode: OrderMode::Created,
                orders: Vec::new(),
                status_updates: Vec::new(),
                hits: Vec::new(),
            })),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockInner> {
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn record(&self, path: &str) {
        self.lock().hits.push(path.to_string());
    }

    /// Number of purchase (QR session) calls seen so far.
    #[must_use]
    pub fn purchase_calls(&self) -> u32 {
        self.lock().purchase_calls
    }

    /// Captured `(idempotency_key, body)` pairs for every order POST.
    #[must_use]
    pub fn orders(&self) -> Vec<(Option<String>, Value)> {
        self.lock().orders.clone()
    }

    /// Captured order status updates.
    #[must_use]
    pub fn status_updates(&self) -> Vec<(i32, String)> {
        self.lock().status_updates.clone()
    }

    /// Total number of backend requests seen since the last reset.
    #[must_use]
    pub fn hit_count(&self) -> usize {
        self.lock().hits.len()
    }

    /// Forget recorded hits (e.g. after login).
    pub fn reset_hits(&self) {
        self.lock().hits.clear();
    }

    /// Change how the payment gateway behaves.
    pub fn set_purchase_mode(&self, mode: PurchaseMode) {
        self.lock().purchase_mode = mode;
    }

    /// Change how order creation behaves.
    pub fn set_order_mode(&self, mode: OrderMode) {
        self.lock().order_mode = mode;
    }
}

fn bearer_present(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("Bearer "))
}

async fn mock_auth(State(mock): State<MockBackend>, Json(body): Json<Value>) -> Response {
    mock.record("/auth");
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    if password != PASSWORD {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid credentials" })),
        )
            .into_response();
    }

    let role_id = if email == STAFF_EMAIL { 1 } else { 2 };
    Json(json!({
        "user": {
            "user_id": 1,
            "first_name": "Test",
            "last_name": "User",
            "email": email,
            "role_id": role_id,
        },
        "accessToken": format!("test-token-{role_id}"),
    }))
    .into_response()
}

async fn mock_cart(State(mock): State<MockBackend>, headers: HeaderMap) -> Response {
    mock.record("/api/add-to-carts");
    if !bearer_present(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Authentication required" })),
        )
            .into_response();
    }
    Json(json!([{
        "product_id": 7,
        "product_accessory_id": 1,
        "size_id": 2,
        "color_id": 3,
        "quantity": 2,
        "price": 10,
    }]))
    .into_response()
}

async fn mock_products(State(mock): State<MockBackend>) -> Json<Value> {
    mock.record("/api/products");
    Json(json!([{
        "product_id": 7,
        "product_name": "Linen Shirt",
        "price": 10,
        "discount": 10,
        "sub_category_id": 1,
    }]))
}

async fn mock_product_details(State(mock): State<MockBackend>) -> Json<Value> {
    mock.record("/api/product-details");
    Json(json!([{
        "product_detail_id": 1,
        "product_id": 7,
        "color_id": 3,
        "size_id": 2,
        "price": 10,
        "quantity": 4,
        "image_urls": ["https://img.example/linen-1.jpg"],
    }]))
}

async fn mock_colors(State(mock): State<MockBackend>) -> Json<Value> {
    mock.record("/api/colors");
    Json(json!([{ "color_id": 3, "color_name": "#12372A" }]))
}

async fn mock_sizes(State(mock): State<MockBackend>) -> Json<Value> {
    mock.record("/api/sizes");
    Json(json!([{ "size_id": 2, "size_name": "M" }]))
}

async fn mock_addresses(
    State(mock): State<MockBackend>,
    Path(user_id): Path<i32>,
) -> Json<Value> {
    mock.record("/api/user-addresses");
    Json(json!([{
        "user_address_id": 1,
        "user_id": user_id,
        "username": "A",
        "phone_number": "1",
        "address": "X",
        "city": "Y",
        "country": "Cambodia",
        "status": "default",
    }]))
}

async fn mock_purchase(State(mock): State<MockBackend>, Json(_body): Json<Value>) -> Response {
    let calls = {
        let mut inner = mock.lock();
        inner.hits.push("/api/payway/purchase".to_string());
        inner.purchase_calls += 1;
        inner.purchase_calls
    };

    let mode = mock.lock().purchase_mode;
    let failed = matches!(mode, PurchaseMode::FailAfter(n) if calls > n);
    if failed {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "gateway unavailable" })),
        )
            .into_response();
    }

    Json(json!({
        "qrImage": format!("data:image/png;base64,qr-{calls}"),
        "tran_id": format!("tran-{calls}"),
        "status": { "code": "00", "message": "success" },
    }))
    .into_response()
}

async fn mock_create_order(
    State(mock): State<MockBackend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    mock.record("/api/orders");
    if !bearer_present(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Authentication required" })),
        )
            .into_response();
    }

    let key = headers
        .get("idempotency-key")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let mode = {
        let mut inner = mock.lock();
        inner.orders.push((key, body));
        inner.order_mode
    };

    match mode {
        OrderMode::Created => {
            (StatusCode::CREATED, Json(json!({ "message": "Order created" }))).into_response()
        }
        OrderMode::Fail => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "order store unavailable" })),
        )
            .into_response(),
    }
}

async fn mock_admin_orders(State(mock): State<MockBackend>, headers: HeaderMap) -> Response {
    mock.record("/api/orders/admin/all");
    if !bearer_present(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!([{
        "order_id": 3,
        "user_id": 1,
        "user_address": "A, 1, X, Y, Cambodia",
        "total": 20,
        "payment_method": "ABA PAY",
        "status": "Pending",
        "items": [],
    }]))
    .into_response()
}

async fn mock_order_status(
    State(mock): State<MockBackend>,
    Path(order_id): Path<i32>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let status = body["status"].as_str().unwrap_or_default().to_string();
    {
        let mut inner = mock.lock();
        inner.hits.push("/api/orders/status".to_string());
        inner.status_updates.push((order_id, status));
    }
    Json(json!({ "message": "Status updated" }))
}

fn mock_router(mock: MockBackend) -> Router {
    Router::new()
        .route("/auth", post(mock_auth))
        .route("/api/add-to-carts", get(mock_cart))
        .route("/api/products", get(mock_products))
        .route("/api/product-details", get(mock_product_details))
        .route("/api/colors", get(mock_colors))
        .route("/api/sizes", get(mock_sizes))
        .route("/api/user-addresses/{user_id}", get(mock_addresses))
        .route("/api/payway/purchase", post(mock_purchase))
        .route("/api/orders", post(mock_create_order))
        .route("/api/orders/admin/all", get(mock_admin_orders))
        .route("/api/orders/{id}/status", patch(mock_order_status))
        .with_state(mock)
}

/// Bind a router on an ephemeral local port and serve it in the background.
async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    addr
}

// =============================================================================
// Storefront test context
// =============================================================================

/// A running storefront gateway wired to a fresh mock backend.
pub struct TestContext {
    /// Handle onto the mock backend's recorded state.
    pub backend: MockBackend,
    /// Base URL of the storefront gateway.
    pub storefront_url: String,
    /// Cookie-holding HTTP client.
    pub client: reqwest::Client,
}

impl TestContext {
    /// Start a context with the production payment window (180 s).
    pub async fn new() -> Self {
        Self::with_payment_window(Duration::from_secs(180)).await
    }

    /// Start a context with a custom QR validity window (short windows make
    /// the countdown tests fast).
    pub async fn with_payment_window(window: Duration) -> Self {
        let backend = MockBackend::new();
        let backend_addr = serve(mock_router(backend.clone())).await;

        let config = sphaerostyle_storefront::config::StorefrontConfig {
            backend_api_url: format!("http://{backend_addr}")
                .parse()
                .expect("backend url"),
            host: "127.0.0.1".parse().expect("host"),
            port: 0,
            base_url: "http://localhost:3000".to_string(),
            session_secret: SecretString::from(TEST_SESSION_SECRET),
            payment_window: window,
            sentry: sphaerostyle_storefront::config::SentryConfig::default(),
        };

        let state = sphaerostyle_storefront::state::AppState::new(config);
        let app = sphaerostyle_storefront::app(state).expect("build storefront app");
        let addr = serve(app).await;

        Self {
            backend,
            storefront_url: format!("http://{addr}"),
            client: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .expect("client"),
        }
    }

    /// Sign in as the shopper account and forget the hits it caused.
    pub async fn login_shopper(&self) {
        let response = self
            .client
            .post(format!("{}/auth/login", self.storefront_url))
            .json(&json!({ "email": SHOPPER_EMAIL, "password": PASSWORD }))
            .send()
            .await
            .expect("login request");
        assert_eq!(response.status(), reqwest::StatusCode::OK, "login failed");
        self.backend.reset_hits();
    }

    /// GET a path and decode the JSON body.
    pub async fn get_json(&self, path: &str) -> Value {
        self.client
            .get(format!("{}{path}", self.storefront_url))
            .send()
            .await
            .expect("request")
            .json()
            .await
            .expect("json body")
    }

    /// POST a JSON body and return the raw response.
    pub async fn post_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}{path}", self.storefront_url))
            .json(body)
            .send()
            .await
            .expect("request")
    }

    /// DELETE a path and return the raw response.
    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.client
            .delete(format!("{}{path}", self.storefront_url))
            .send()
            .await
            .expect("request")
    }
}

// =============================================================================
// Admin test context
// =============================================================================

/// A running admin gateway wired to a fresh mock backend.
pub struct AdminContext {
    /// Handle onto the mock backend's recorded state.
    pub backend: MockBackend,
    /// Base URL of the admin gateway.
    pub admin_url: String,
    /// Cookie-holding HTTP client.
    pub client: reqwest::Client,
}

impl AdminContext {
    /// Start an admin gateway against a fresh mock backend.
    pub async fn new() -> Self {
        let backend = MockBackend::new();
        let backend_addr = serve(mock_router(backend.clone())).await;

        let config = sphaerostyle_admin::config::AdminConfig {
            backend_api_url: format!("http://{backend_addr}")
                .parse()
                .expect("backend url"),
            host: "127.0.0.1".parse().expect("host"),
            port: 0,
            base_url: "http://localhost:3001".to_string(),
            session_secret: SecretString::from(TEST_SESSION_SECRET),
            sentry_dsn: None,
            sentry_environment: None,
        };

        let state = sphaerostyle_admin::state::AppState::new(config);
        let app = sphaerostyle_admin::app(state).expect("build admin app");
        let addr = serve(app).await;

        Self {
            backend,
            admin_url: format!("http://{addr}"),
            client: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .expect("client"),
        }
    }

    /// Attempt a sign-in; returns the raw response.
    pub async fn login(&self, email: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/auth/login", self.admin_url))
            .json(&json!({ "email": email, "password": PASSWORD }))
            .send()
            .await
            .expect("login request")
    }
}
