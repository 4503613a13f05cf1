//! Repository layer for database operations

pub mod books;
pub mod members;
pub mod rentals;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{AvailableBook, Member, ReturnOutcome},
};

/// Operations of the inventory ledger against its backing store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LedgerStore: Send + Sync {
    async fn register_member(&self, first_name: &str, last_name: &str) -> AppResult<i32>;
    async fn list_members(&self) -> AppResult<Vec<Member>>;
    async fn list_available_books(&self) -> AppResult<Vec<AvailableBook>>;
    async fn rent_book(&self, member_id: i32, book_id: i32) -> AppResult<i32>;
    async fn return_book(&self, rental_id: i32) -> AppResult<ReturnOutcome>;
    /// Liveness of the store connection; never fails
    async fn ping(&self) -> bool;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub members: members::MembersRepository,
    pub books: books::BooksRepository,
    pub rentals: rentals::RentalsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            members: members::MembersRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            rentals: rentals::RentalsRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl LedgerStore for Repository {
    async fn register_member(&self, first_name: &str, last_name: &str) -> AppResult<i32> {
        self.members.create(first_name, last_name).await
    }

    async fn list_members(&self) -> AppResult<Vec<Member>> {
        self.members.list().await
    }

    async fn list_available_books(&self) -> AppResult<Vec<AvailableBook>> {
        self.books.list_available().await
    }

    async fn rent_book(&self, member_id: i32, book_id: i32) -> AppResult<i32> {
        self.rentals.rent(member_id, book_id).await
    }

    async fn return_book(&self, rental_id: i32) -> AppResult<ReturnOutcome> {
        self.rentals.return_rental(rental_id).await
    }

    async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}
