//! HTTP route handlers for the storefront gateway.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Liveness check
//!
//! # Catalog (anonymous)
//! GET  /products                   - Product listing
//! GET  /products/with-details      - Products joined with variants
//! GET  /products/{id}              - Product detail with variants
//! GET  /categories                 - Category listing
//! GET  /subcategories              - Subcategory listing
//! GET  /colors                     - Color attribute listing
//! GET  /sizes                      - Size attribute listing
//!
//! # Bag (requires auth)
//! GET    /bag                      - Assembled bag with totals
//! POST   /bag/items                - Add a line
//! PUT    /bag/items                - Set a line's quantity
//! DELETE /bag/items                - Remove a line
//! GET    /bag/contains/{id}        - Membership check by product
//!
//! # Favorites (requires auth)
//! GET    /favorites                - List favorites
//! POST   /favorites                - Add favorite
//! DELETE /favorites                - Remove favorite
//! GET    /favorites/contains/{id}  - Membership check by product
//!
//! # Checkout (requires auth)
//! POST   /checkout                 - Open flow (address required, total locked)
//! POST   /checkout/method          - Choose payment method / request QR session
//! GET    /checkout/session         - Flow state and countdown
//! POST   /checkout/pay             - Submit the order (201 on success)
//! DELETE /checkout                 - Close flow, discard session
//!
//! # Account (requires auth)
//! GET    /account/addresses        - Address list
//! POST   /account/addresses        - Create address
//! PUT    /account/addresses/{id}   - Update address
//! DELETE /account/addresses/{id}   - Delete address
//! PATCH  /account/addresses/{id}/default - Flag as default
//! GET    /account/orders           - Order history
//! PUT    /account/profile          - Update profile
//!
//! # Auth (rate limited)
//! POST /auth/login                 - Sign in, open session
//! POST /auth/register              - Register account
//! POST /auth/logout                - Clear session
//! ```

pub mod account;
pub mod addresses;
pub mod auth;
pub mod bag;
pub mod catalog;
pub mod checkout;
pub mod favorites;

use axum::{
    Router,
    routing::{get, patch, post, put},
};

use crate::middleware::auth_rate_limiter;
use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(catalog::index))
        .route("/products/with-details", get(catalog::with_details))
        .route("/products/{id}", get(catalog::show))
        .route("/categories", get(catalog::categories))
        .route("/subcategories", get(catalog::subcategories))
        .route("/colors", get(catalog::colors))
        .route("/sizes", get(catalog::sizes))
}

/// Create the bag routes router.
pub fn bag_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(bag::show))
        .route(
            "/items",
            post(bag::add).put(bag::update).delete(bag::remove),
        )
        .route("/contains/{id}", get(bag::contains))
}

/// Create the favorites routes router.
pub fn favorites_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(favorites::list)
                .post(favorites::add)
                .delete(favorites::remove),
        )
        .route("/contains/{id}", get(favorites::contains))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(checkout::open).delete(checkout::close))
        .route("/method", post(checkout::select_method))
        .route("/session", get(checkout::session))
        .route("/pay", post(checkout::pay))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/addresses",
            get(addresses::list).post(addresses::create),
        )
        .route(
            "/addresses/{id}",
            put(addresses::update).delete(addresses::delete),
        )
        .route("/addresses/{id}/default", patch(addresses::set_default))
        .route("/orders", get(account::orders))
        .route("/profile", put(account::update_profile))
}

/// Create the auth routes router, rate limited per client IP.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/logout", post(auth::logout))
        .layer(auth_rate_limiter())
}

/// Create all routes for the storefront gateway.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(catalog_routes())
        .nest("/bag", bag_routes())
        .nest("/favorites", favorites_routes())
        .nest("/checkout", checkout_routes())
        .nest("/account", account_routes())
        .nest("/auth", auth_routes())
}
