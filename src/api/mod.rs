//! API handlers for the library ledger endpoints

pub mod books;
pub mod health;
pub mod members;
pub mod openapi;
pub mod params;
pub mod rentals;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let ledger = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Mutations also answer GET with query-string parameters
        // Members
        .route("/AddMember", post(members::add_member).get(members::add_member))
        .route("/ListMembers", get(members::list_members))
        // Books
        .route("/ListAvailableBooks", get(books::list_available_books))
        // Rentals
        .route("/RentBook", post(rentals::rent_book).get(rentals::rent_book))
        .route("/ReturnBook", post(rentals::return_book).get(rentals::return_book))
        .with_state(state);

    Router::new()
        .merge(ledger)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
