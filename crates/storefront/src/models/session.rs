//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use sphaerostyle_core::UserId;

use crate::commerce::types::LoginResponse;

/// Session-stored user identity.
///
/// Created at login/register success, cleared at logout, read-only
/// everywhere else. Carries the bearer token every authenticated backend
/// call is signed with; there is no refresh-token flow.
#[derive(Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Backend role; 1 is back-office staff.
    pub role_id: i32,
    /// Bearer token for authenticated backend calls.
    pub access_token: String,
}

impl std::fmt::Debug for CurrentUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrentUser")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("role_id", &self.role_id)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl From<LoginResponse> for CurrentUser {
    fn from(response: LoginResponse) -> Self {
        Self {
            user_id: response.user.user_id,
            email: response.user.email,
            first_name: response.user.first_name,
            last_name: response.user.last_name,
            role_id: response.user.role_id,
            access_token: response.access_token,
        }
    }
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let user = CurrentUser {
            user_id: UserId::new(1),
            email: "a@b.c".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            role_id: 2,
            access_token: "very-secret-token".to_string(),
        };
        let debug = format!("{user:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("very-secret-token"));
    }
}
