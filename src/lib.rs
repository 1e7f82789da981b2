//! CampanhasPro - Main Library
//!
//! CampanhasPro is a native desktop client for managing a small business's
//! promotional-campaign workflow. It is a thin presentation layer over a
//! REST backend plus a local per-user key-value store; the heavy lifting
//! (password hashing, CSV parsing, campaign delivery) lives elsewhere.
//!
//! # Overview
//!
//! The application provides:
//! - Authentication (login/register) against the backend API
//! - A customer registry with search, sorting and CSV bulk import
//! - An AI-assisted campaign composer that posts payloads to a
//!   user-configured webhook
//! - A settings screen for the OpenAI key and webhook URL
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Platform-agnostic domain types
//!   - User, client and campaign models
//!   - Error types
//!   - Configuration types
//!
//! - **`app`** - Native desktop app (egui/eframe)
//!   - Authentication UI and session persistence
//!   - Client registry screens and CSV import
//!   - Campaign composer and settings
//!   - HTTP clients for the backend API, OpenAI and the webhook
//!
//! # Concurrency
//!
//! egui is a single-threaded immediate mode GUI. All HTTP work runs on
//! short-lived worker threads that report back through `std::sync::mpsc`
//! channels polled once per frame; there is no request coordination,
//! queueing or cancellation.

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
pub mod app;
