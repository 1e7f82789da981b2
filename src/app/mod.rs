//! egui Native Desktop App Module
//!
//! This module provides the native desktop application using egui/eframe
//! that talks to the campaign backend, OpenAI and the outbound webhook.
//!
//! # Architecture
//!
//! The app module is organized into focused submodules:
//!
//! - **`config`** - Configuration management (server URL)
//! - **`storage`** - Local key-value store (session + settings files)
//! - **`session`** - Session type: bearer token plus user identity
//! - **`auth`** - Authentication state and API client functions
//! - **`api`** - Backend HTTP client wrapper (bearer token handling)
//! - **`clients_api`** - Client registry CRUD and CSV import
//! - **`ai`** - OpenAI chat-completions call
//! - **`webhook`** - Fire-and-forget campaign dispatch
//! - **`table`** - Generic data table (search/sort/actions)
//! - **`forms`** - Declarative form fields, masks and validators
//! - **`notify`** - Transient toast notifications
//! - **`state`** - Central `AppState`
//! - **`views`** - Screen render functions and router
//! - **`theme`** - Palette and style helpers

pub mod ai;
pub mod api;
pub mod auth;
pub mod clients_api;
pub mod config;
pub mod forms;
pub mod notify;
pub mod session;
pub mod state;
pub mod storage;
pub mod table;
pub mod theme;
pub mod types;
pub mod views;
pub mod webhook;

// Re-export commonly used types
pub use auth::{login, register, AuthState};
pub use config::Config;
pub use session::Session;
pub use state::AppState;
pub use types::AppView;
