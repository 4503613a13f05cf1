//! Books repository for database operations

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::book::AvailableBook};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List books that have at least one copy on the shelf
    pub async fn list_available(&self) -> AppResult<Vec<AvailableBook>> {
        let books = sqlx::query_as::<_, AvailableBook>(
            r#"
            SELECT b.id, b.title, b.author, b.year, a.amount AS available_amount
            FROM book b
            JOIN availability a ON b.id = a.book_id
            WHERE a.amount > 0
            ORDER BY b.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Current shelf count for a book, if it has an availability row
    pub async fn available_amount(&self, book_id: i32) -> AppResult<Option<i32>> {
        let amount = sqlx::query_scalar::<_, i32>(
            "SELECT amount FROM availability WHERE book_id = $1",
        )
        .bind(book_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(amount)
    }
}
