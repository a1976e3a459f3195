use axum::{
    routing::{get, patch},
    Router,
};

use crate::state::AppState;

pub mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(handlers::get_me))
        .route("/users", patch(handlers::edit_user))
}
