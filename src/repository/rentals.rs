//! Rentals repository: the rent/return transactions
//!
//! Every change to `availability.amount` happens in the same transaction as
//! the rental row it accounts for, so `amount + open rentals` stays equal to
//! the number of copies owned.

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::rental::{Rental, ReturnOutcome},
};

#[derive(Clone)]
pub struct RentalsRepository {
    pool: Pool<Postgres>,
}

impl RentalsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get rental by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Rental>> {
        let rental = sqlx::query_as::<_, Rental>(
            "SELECT id, member_id, book_id, time, time_return FROM rent WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(rental)
    }

    /// Rent one copy of a book to a member, returning the new rental id
    pub async fn rent(&self, member_id: i32, book_id: i32) -> AppResult<i32> {
        let mut tx = self.pool.begin().await?;

        // Conditional decrement: the row lock serializes concurrent renters and
        // `amount > 0` is re-checked once a competing transaction commits.
        let taken = sqlx::query(
            "UPDATE availability SET amount = amount - 1 WHERE book_id = $1 AND amount > 0",
        )
        .bind(book_id)
        .execute(&mut *tx)
        .await?;

        if taken.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::BookUnavailable(book_id));
        }

        let rental_id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO rent (member_id, book_id, time) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(member_id)
        .bind(book_id)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                AppError::MemberNotFound(member_id)
            }
            e => AppError::Database(e),
        })?;

        tx.commit().await?;

        Ok(rental_id)
    }

    /// Close an open rental and put its copy back on the shelf
    ///
    /// Closing an already closed rental changes nothing.
    pub async fn return_rental(&self, rental_id: i32) -> AppResult<ReturnOutcome> {
        let mut tx = self.pool.begin().await?;

        let closed = sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE rent SET time_return = $2
            WHERE id = $1 AND time_return IS NULL
            RETURNING book_id
            "#,
        )
        .bind(rental_id)
        .bind(Utc::now())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(book_id) = closed else {
            let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM rent WHERE id = $1)")
                .bind(rental_id)
                .fetch_one(&mut *tx)
                .await?;
            tx.rollback().await?;

            return if exists {
                Ok(ReturnOutcome::AlreadyReturned)
            } else {
                Err(AppError::RentalNotFound(rental_id))
            };
        };

        sqlx::query("UPDATE availability SET amount = amount + 1 WHERE book_id = $1")
            .bind(book_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(ReturnOutcome::Returned { book_id })
    }

    /// Count open rentals for a book
    pub async fn count_open(&self, book_id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM rent WHERE book_id = $1 AND time_return IS NULL",
        )
        .bind(book_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
