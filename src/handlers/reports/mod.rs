//! Report management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};

use crate::state::AppState;

/// Report routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_reports))
        .route("/", post(handler::create_report))
        .route("/count", get(handler::count_reports))
        .route("/{id}", get(handler::get_report))
        .route("/{id}", put(handler::update_report))
        .route("/{id}", patch(handler::patch_report))
        .route("/{id}", delete(handler::delete_report))
}
