use axum::{routing::get, Router};

use crate::state::AppState;

pub mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", get(handlers::list_bookmarks).post(handlers::create_bookmark))
        .route(
            "/bookmarks/:id",
            get(handlers::get_bookmark)
                .patch(handlers::edit_bookmark)
                .delete(handlers::delete_bookmark),
        )
}
