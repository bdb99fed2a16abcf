//! HTTP route handlers for the admin gateway.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                       - Liveness check
//!
//! # Auth
//! POST /auth/login                   - Staff sign-in (staff role required)
//! POST /auth/logout                  - Clear session
//!
//! # Catalog management (requires staff session)
//! GET/POST        /products          - List / create products
//! PUT/DELETE      /products/{id}     - Update / delete a product
//! GET/POST        /categories        - List / create categories
//! PUT/DELETE      /categories/{id}
//! GET/POST        /subcategories
//! PUT/DELETE      /subcategories/{id}
//! GET/POST        /colors
//! PUT/DELETE      /colors/{id}
//! GET/POST        /sizes
//! PUT/DELETE      /sizes/{id}
//! GET/POST        /product-details
//! GET             /product-details/product/{id}
//! PUT/DELETE      /product-details/{id}
//!
//! # Staff accounts
//! GET/POST        /staff
//! PUT/DELETE      /staff/{id}
//!
//! # Orders
//! GET             /orders            - Every order in the shop
//! PATCH           /orders/{id}/status
//!
//! # Uploads
//! POST            /upload            - Multipart image upload, returns URLs
//! ```

pub mod attributes;
pub mod auth;
pub mod details;
pub mod orders;
pub mod products;
pub mod staff;
pub mod upload;

use axum::{
    Router,
    routing::{get, patch, post, put},
};

use crate::state::AppState;

/// Create all routes for the admin gateway.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/{id}",
            put(products::update).delete(products::delete),
        )
        .route(
            "/categories",
            get(attributes::list_categories).post(attributes::create_category),
        )
        .route(
            "/categories/{id}",
            put(attributes::update_category).delete(attributes::delete_category),
        )
        .route(
            "/subcategories",
            get(attributes::list_subcategories).post(attributes::create_subcategory),
        )
        .route(
            "/subcategories/{id}",
            put(attributes::update_subcategory).delete(attributes::delete_subcategory),
        )
        .route(
            "/colors",
            get(attributes::list_colors).post(attributes::create_color),
        )
        .route(
            "/colors/{id}",
            put(attributes::update_color).delete(attributes::delete_color),
        )
        .route(
            "/sizes",
            get(attributes::list_sizes).post(attributes::create_size),
        )
        .route(
            "/sizes/{id}",
            put(attributes::update_size).delete(attributes::delete_size),
        )
        .route(
            "/product-details",
            get(details::list).post(details::create),
        )
        .route(
            "/product-details/product/{id}",
            get(details::list_for_product),
        )
        .route(
            "/product-details/{id}",
            put(details::update).delete(details::delete),
        )
        .route("/staff", get(staff::list).post(staff::create))
        .route("/staff/{id}", put(staff::update).delete(staff::delete))
        .route("/orders", get(orders::list))
        .route("/orders/{id}/status", patch(orders::update_status))
        .route("/upload", post(upload::upload))
}
