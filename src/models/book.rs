//! Book catalog model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book joined with its current availability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailableBook {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub year: i32,
    /// Copies currently not on loan
    pub available_amount: i32,
}
