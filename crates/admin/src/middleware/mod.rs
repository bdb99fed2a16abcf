//! Middleware: sessions and the staff auth extractor.

pub mod auth;
pub mod session;

pub use auth::{RequireStaff, clear_current_staff, set_current_staff};
pub use session::create_session_layer;
