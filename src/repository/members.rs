//! Members repository for database operations

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::member::Member};

#[derive(Clone)]
pub struct MembersRepository {
    pool: Pool<Postgres>,
}

impl MembersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new member and return its id
    pub async fn create(&self, first_name: &str, last_name: &str) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO member (first_name, last_name) VALUES ($1, $2) RETURNING id",
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// List all members
    pub async fn list(&self) -> AppResult<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(
            "SELECT id, first_name, last_name FROM member ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }
}
