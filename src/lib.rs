//! Library Ledger
//!
//! An HTTP service that registers library members, lists books with copies
//! on the shelf, and records rentals and returns while keeping each book's
//! availability count consistent with its open rentals.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
