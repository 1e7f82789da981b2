//! User and authentication wire types

use serde::{Deserialize, Serialize};

/// The authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Login request body for `POST /api/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request body for `POST /api/auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Authentication response from the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub id: i64,
    pub token: String,
    /// Token scheme, e.g. "Bearer"
    #[serde(rename = "type", default)]
    pub token_type: String,
    pub name: String,
    pub email: String,
}

impl AuthResponse {
    /// Extract the user identity carried by the response
    pub fn user(&self) -> User {
        User {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}
