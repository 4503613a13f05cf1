//! Inventory ledger service: members, availability and rentals

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{AvailableBook, Member, ReturnOutcome},
    repository::LedgerStore,
};

#[derive(Clone)]
pub struct LedgerService {
    store: Arc<dyn LedgerStore>,
}

impl LedgerService {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Register a new member
    pub async fn register_member(&self, first_name: &str, last_name: &str) -> AppResult<i32> {
        let id = self.store.register_member(first_name, last_name).await?;
        tracing::info!(member_id = id, "Member registered");
        Ok(id)
    }

    pub async fn list_members(&self) -> AppResult<Vec<Member>> {
        self.store.list_members().await
    }

    pub async fn list_available_books(&self) -> AppResult<Vec<AvailableBook>> {
        self.store.list_available_books().await
    }

    /// Rent one copy of a book
    pub async fn rent_book(&self, member_id: i32, book_id: i32) -> AppResult<i32> {
        match self.store.rent_book(member_id, book_id).await {
            Ok(rental_id) => {
                tracing::info!(member_id, book_id, rental_id, "Book rented");
                Ok(rental_id)
            }
            Err(e @ (AppError::BookUnavailable(_) | AppError::MemberNotFound(_))) => {
                tracing::warn!(member_id, book_id, "Rental refused: {}", e);
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Return a rented copy; returning twice is not an error
    pub async fn return_book(&self, rental_id: i32) -> AppResult<ReturnOutcome> {
        let outcome = self.store.return_book(rental_id).await?;
        match outcome {
            ReturnOutcome::Returned { book_id } => {
                tracing::info!(rental_id, book_id, "Book returned");
            }
            ReturnOutcome::AlreadyReturned => {
                tracing::debug!(rental_id, "Rental already closed");
            }
        }
        Ok(outcome)
    }

    /// Whether the store is reachable
    pub async fn ping(&self) -> bool {
        let healthy = self.store.ping().await;
        if !healthy {
            tracing::warn!("Store ping failed");
        }
        healthy
    }
}
