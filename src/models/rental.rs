//! Book rental model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Rental record from database
///
/// A rental with no `returned_at` holds one copy of its book.
#[derive(Debug, Clone, FromRow)]
pub struct Rental {
    pub id: i32,
    pub member_id: i32,
    pub book_id: i32,
    #[sqlx(rename = "time")]
    pub rented_at: DateTime<Utc>,
    #[sqlx(rename = "time_return")]
    pub returned_at: Option<DateTime<Utc>>,
}

impl Rental {
    pub fn is_open(&self) -> bool {
        self.returned_at.is_none()
    }
}

/// Result of a return request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOutcome {
    /// The rental was open and its copy went back on the shelf
    Returned { book_id: i32 },
    /// The rental had already been closed; nothing changed
    AlreadyReturned,
}
