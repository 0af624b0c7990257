pub mod health_handler;
pub mod hook_handler;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};

use crate::app_state::AppState;

pub use health_handler::health_handler;
pub use hook_handler::hook_handler;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/hook", post(hook_handler))
        .route("/health", get(health_handler))
        .layer(Extension(state))
}
