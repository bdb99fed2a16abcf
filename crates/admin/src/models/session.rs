//! Session-stored staff identity.

use serde::{Deserialize, Serialize};

use sphaerostyle_core::UserId;

/// Backend role id granted back-office access.
pub const STAFF_ROLE_ID: i32 = 1;

/// The signed-in staff member.
///
/// Created at login (only accounts with the staff role may sign in here),
/// cleared at logout.
#[derive(Clone, Serialize, Deserialize)]
pub struct CurrentStaff {
    pub user_id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Bearer token for back-office backend calls.
    pub access_token: String,
}

impl std::fmt::Debug for CurrentStaff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrentStaff")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the signed-in staff member.
    pub const CURRENT_STAFF: &str = "current_staff";
}
