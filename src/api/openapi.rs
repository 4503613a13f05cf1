//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, members, rentals};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Ledger API",
        version = "0.1.0",
        description = "Member registration, book availability and rentals",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Members
        members::add_member,
        members::list_members,
        // Books
        books::list_available_books,
        // Rentals
        rentals::rent_book,
        rentals::return_book,
    ),
    components(
        schemas(
            crate::models::member::Member,
            crate::models::book::AvailableBook,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "members", description = "Member registration"),
        (name = "books", description = "Book availability"),
        (name = "rentals", description = "Book rentals and returns")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
