//! WebReporter - Report Collection and Query Service
//!
//! This library provides the core functionality for the WebReporter
//! backend, a service that stores reports and serves them through
//! dynamically filtered queries.
//!
//! # Features
//!
//! - Report CRUD over a PostgreSQL store
//! - Dynamic `<field>.<operator>` filter criteria compiled into composite
//!   query predicates
//! - Paginated and counted listings
//! - Transport objects that project the owning user down to id and login
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic and entity/DTO mapping
//! - **Repositories**: Database access
//! - **Criteria / Predicates**: Typed filters and their SQL rendering
//! - **Models**: Domain models

pub mod config;
pub mod constants;
pub mod criteria;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
