//! Session Store
//!
//! Holds the current user and bearer token. Constructed on successful
//! login/register or restored from the local store at startup; torn down
//! explicitly on logout. Authentication state is derived purely from the
//! presence of a session.

use serde::{Deserialize, Serialize};

use crate::shared::model::{AuthResponse, User};

/// The authenticated session: opaque bearer token plus user identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    /// Build a session from a successful auth response
    pub fn from_auth(response: &AuthResponse) -> Self {
        Self {
            token: response.token.clone(),
            user: response.user(),
        }
    }
}
