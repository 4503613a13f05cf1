//! Rent and return endpoints

use axum::{extract::State, http::StatusCode};

use crate::{
    error::{AppError, AppResult},
    AppState,
};

use super::params::{parse_id, RequestParams};

/// Rent a book to a member
#[utoipa::path(
    post,
    path = "/RentBook",
    tag = "rentals",
    params(
        ("memberId" = i32, Query, description = "Member ID"),
        ("bookId" = i32, Query, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book rented"),
        (status = 400, description = "Missing or malformed parameters", body = crate::error::ErrorResponse),
        (status = 409, description = "No copy available", body = crate::error::ErrorResponse),
        (status = 500, description = "Unknown member or store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn rent_book(
    State(state): State<AppState>,
    params: RequestParams,
) -> AppResult<StatusCode> {
    let [member_id, book_id] = params.require(["memberId", "bookId"])?;
    let member_id = parse_id("memberId", member_id)?;
    let book_id = parse_id("bookId", book_id)?;

    state.services.ledger.rent_book(member_id, book_id).await?;

    Ok(StatusCode::OK)
}

/// Return a rented book
#[utoipa::path(
    post,
    path = "/ReturnBook",
    tag = "rentals",
    params(
        ("rentalId" = i32, Query, description = "Rental ID (`rentId` is accepted too)")
    ),
    responses(
        (status = 200, description = "Book returned, or rental already closed"),
        (status = 400, description = "Missing or malformed parameters", body = crate::error::ErrorResponse),
        (status = 500, description = "Unknown rental or store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    params: RequestParams,
) -> AppResult<StatusCode> {
    let rental_id = params
        .get("rentalId")
        .or_else(|| params.get("rentId"))
        .ok_or_else(|| AppError::missing(["rentalId"]))?;
    let rental_id = parse_id("rentalId", rental_id)?;

    state.services.ledger.return_book(rental_id).await?;

    Ok(StatusCode::OK)
}
