pub mod app;
pub mod auth;
pub mod bookmarks;
pub mod categories;
pub mod config;
pub mod error;
pub mod state;
pub mod transactions;
pub mod users;
