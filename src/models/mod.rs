//! Data models for the library ledger

pub mod book;
pub mod member;
pub mod rental;

// Re-export commonly used types
pub use book::AvailableBook;
pub use member::Member;
pub use rental::{Rental, ReturnOutcome};
