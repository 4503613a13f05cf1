//! Book catalog endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::book::AvailableBook, AppState};

/// List books with at least one copy available
#[utoipa::path(
    get,
    path = "/ListAvailableBooks",
    tag = "books",
    responses(
        (status = 200, description = "Available books", body = Vec<AvailableBook>),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_available_books(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AvailableBook>>> {
    let books = state.services.ledger.list_available_books().await?;
    Ok(Json(books))
}
