//! Shared fixtures for tests that need a PostgreSQL database
//!
//! Point `DATABASE_URL` at a disposable database and run with
//! `cargo test -- --ignored`.

#![allow(dead_code)]

use sqlx::{postgres::PgPoolOptions, PgPool};

pub async fn pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for database tests");
    let pool = PgPoolOptions::new()
        .max_connections(20)
        .connect(&url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    pool
}

/// Insert a book with the given number of copies on the shelf
pub async fn seed_book(pool: &PgPool, title: &str, copies: i32) -> i32 {
    let book_id: i32 = sqlx::query_scalar(
        "INSERT INTO book (title, author, year) VALUES ($1, 'Test Author', 1843) RETURNING id",
    )
    .bind(title)
    .fetch_one(pool)
    .await
    .expect("Failed to insert book");

    sqlx::query("INSERT INTO availability (book_id, amount) VALUES ($1, $2)")
        .bind(book_id)
        .bind(copies)
        .execute(pool)
        .await
        .expect("Failed to insert availability");

    book_id
}

/// Insert a book that has no availability row at all
pub async fn seed_book_without_availability(pool: &PgPool) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO book (title, author, year) VALUES ('Unshelved', 'Test Author', 1900) RETURNING id",
    )
    .fetch_one(pool)
    .await
    .expect("Failed to insert book")
}

pub async fn rental_count(pool: &PgPool, book_id: i32) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM rent WHERE book_id = $1")
        .bind(book_id)
        .fetch_one(pool)
        .await
        .expect("Failed to count rentals")
}
