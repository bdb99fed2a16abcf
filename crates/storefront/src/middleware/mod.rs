//! Middleware: sessions, authentication extractors, rate limiting.

pub mod auth;
pub mod rate_limit;
pub mod session;

pub use auth::{OptionalAuth, RequireAuth, clear_current_user, set_current_user};
pub use rate_limit::auth_rate_limiter;
pub use session::create_session_layer;
