//! Member endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{error::AppResult, models::member::Member, AppState};

use super::params::RequestParams;

/// Register a new member
#[utoipa::path(
    post,
    path = "/AddMember",
    tag = "members",
    params(
        ("firstName" = String, Query, description = "First name (query string or form body)"),
        ("lastName" = String, Query, description = "Last name (query string or form body)")
    ),
    responses(
        (status = 200, description = "Member registered"),
        (status = 400, description = "Missing parameters", body = crate::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_member(
    State(state): State<AppState>,
    params: RequestParams,
) -> AppResult<StatusCode> {
    let [first_name, last_name] = params.require(["firstName", "lastName"])?;

    state
        .services
        .ledger
        .register_member(first_name, last_name)
        .await?;

    Ok(StatusCode::OK)
}

/// List all members
#[utoipa::path(
    get,
    path = "/ListMembers",
    tag = "members",
    responses(
        (status = 200, description = "All members", body = Vec<Member>),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_members(State(state): State<AppState>) -> AppResult<Json<Vec<Member>>> {
    let members = state.services.ledger.list_members().await?;
    Ok(Json(members))
}
