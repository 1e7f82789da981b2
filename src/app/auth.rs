//! Authentication Module
//!
//! Handles authentication state and the HTTP calls for login/register.

use crate::app::api::ApiClient;
use crate::app::config::Config;
use crate::app::session::Session;
use crate::shared::error::AppError;
use crate::shared::model::{AuthResponse, LoginRequest, RegisterRequest};

/// Authentication state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub error: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derived purely from the presence of a session
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }
}

/// Login with email and password
pub fn login(config: &Config, email: String, password: String) -> Result<AuthResponse, AppError> {
    let api = ApiClient::new(config.clone());
    let request = LoginRequest { email, password };
    api.post("/api/auth/login", &request)
}

/// Register a new user account
pub fn register(
    config: &Config,
    name: String,
    email: String,
    password: String,
) -> Result<AuthResponse, AppError> {
    let api = ApiClient::new(config.clone());
    let request = RegisterRequest {
        name,
        email,
        password,
    };
    api.post("/api/auth/register", &request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::model::User;

    fn sample_session() -> Session {
        Session {
            token: "t".to_string(),
            user: User {
                id: 1,
                name: "Ana".to_string(),
                email: "ana@email.com".to_string(),
            },
        }
    }

    #[test]
    fn test_auth_state_new() {
        let state = AuthState::new();
        assert!(!state.is_authenticated());
        assert!(state.session.is_none());
        assert!(state.error.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn test_authenticated_with_session() {
        let state = AuthState {
            session: Some(sample_session()),
            ..Default::default()
        };
        assert!(state.is_authenticated());
    }

    #[test]
    fn test_auth_state_error_handling() {
        let mut state = AuthState::new();
        state.set_error("Credenciais inválidas".to_string());
        assert_eq!(state.error.as_deref(), Some("Credenciais inválidas"));

        state.clear_error();
        assert!(state.error.is_none());
    }
}
