//! Rent/return transaction tests against a real PostgreSQL database

mod common;

use library_ledger::{
    error::AppError,
    models::ReturnOutcome,
    repository::{LedgerStore, Repository},
};

async fn setup() -> Repository {
    Repository::new(common::pool().await)
}

async fn amount(repo: &Repository, book_id: i32) -> i32 {
    repo.books
        .available_amount(book_id)
        .await
        .expect("Failed to read availability")
        .expect("Book has no availability row")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_rent_decrements_and_opens_rental() {
    let repo = setup().await;
    let book_id = common::seed_book(&repo.pool, "Rent Once", 2).await;
    let member_id = repo.register_member("Ada", "Lovelace").await.unwrap();

    let rental_id = repo.rent_book(member_id, book_id).await.unwrap();

    assert_eq!(amount(&repo, book_id).await, 1);
    assert_eq!(repo.rentals.count_open(book_id).await.unwrap(), 1);
    let rental = repo.rentals.get_by_id(rental_id).await.unwrap().unwrap();
    assert_eq!(rental.member_id, member_id);
    assert_eq!(rental.book_id, book_id);
    assert!(rental.is_open());
}

#[tokio::test]
#[ignore]
async fn test_rent_unavailable_leaves_rentals_unchanged() {
    let repo = setup().await;
    let book_id = common::seed_book(&repo.pool, "Out On Loan", 0).await;
    let member_id = repo.register_member("Charles", "Babbage").await.unwrap();

    let err = repo.rent_book(member_id, book_id).await.unwrap_err();

    assert!(matches!(err, AppError::BookUnavailable(id) if id == book_id));
    assert_eq!(common::rental_count(&repo.pool, book_id).await, 0);
    assert_eq!(amount(&repo, book_id).await, 0);
}

#[tokio::test]
#[ignore]
async fn test_rent_without_availability_row_is_unavailable() {
    let repo = setup().await;
    let book_id = common::seed_book_without_availability(&repo.pool).await;
    let member_id = repo.register_member("Mary", "Somerville").await.unwrap();

    let err = repo.rent_book(member_id, book_id).await.unwrap_err();

    assert!(matches!(err, AppError::BookUnavailable(_)));
    assert_eq!(common::rental_count(&repo.pool, book_id).await, 0);
}

#[tokio::test]
#[ignore]
async fn test_rent_for_unknown_member_rolls_back() {
    let repo = setup().await;
    let book_id = common::seed_book(&repo.pool, "Nobody Home", 1).await;

    let err = repo.rent_book(i32::MAX, book_id).await.unwrap_err();

    assert!(matches!(err, AppError::MemberNotFound(id) if id == i32::MAX));
    assert_eq!(amount(&repo, book_id).await, 1);
    assert_eq!(common::rental_count(&repo.pool, book_id).await, 0);
}

#[tokio::test]
#[ignore]
async fn test_return_increments_exactly_once() {
    let repo = setup().await;
    let book_id = common::seed_book(&repo.pool, "Return Twice", 1).await;
    let member_id = repo.register_member("Ada", "Lovelace").await.unwrap();
    let rental_id = repo.rent_book(member_id, book_id).await.unwrap();
    assert_eq!(amount(&repo, book_id).await, 0);

    let first = repo.return_book(rental_id).await.unwrap();
    assert_eq!(first, ReturnOutcome::Returned { book_id });
    assert_eq!(amount(&repo, book_id).await, 1);

    let second = repo.return_book(rental_id).await.unwrap();
    assert_eq!(second, ReturnOutcome::AlreadyReturned);
    assert_eq!(amount(&repo, book_id).await, 1);

    let rental = repo.rentals.get_by_id(rental_id).await.unwrap().unwrap();
    assert!(rental.returned_at.is_some());
}

#[tokio::test]
#[ignore]
async fn test_return_unknown_rental_is_not_found() {
    let repo = setup().await;

    let err = repo.return_book(i32::MAX).await.unwrap_err();

    assert!(matches!(err, AppError::RentalNotFound(id) if id == i32::MAX));
}

#[tokio::test]
#[ignore]
async fn test_rent_then_return_restores_amount() {
    let repo = setup().await;
    let book_id = common::seed_book(&repo.pool, "Round Trip", 4).await;
    let member_id = repo.register_member("Grace", "Hopper").await.unwrap();

    let before = amount(&repo, book_id).await;
    let rental_id = repo.rent_book(member_id, book_id).await.unwrap();
    repo.return_book(rental_id).await.unwrap();

    assert_eq!(amount(&repo, book_id).await, before);
    assert_eq!(repo.rentals.count_open(book_id).await.unwrap(), 0);
}

#[tokio::test]
#[ignore]
async fn test_concurrent_rents_of_last_copy() {
    const RENTERS: usize = 10;

    let repo = setup().await;
    let book_id = common::seed_book(&repo.pool, "Last Copy", 1).await;
    let member_id = repo.register_member("Ada", "Lovelace").await.unwrap();

    let handles: Vec<_> = (0..RENTERS)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.rent_book(member_id, book_id).await })
        })
        .collect();

    let mut successes = 0;
    let mut refusals = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(AppError::BookUnavailable(_)) => refusals += 1,
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(refusals, RENTERS - 1);
    assert_eq!(amount(&repo, book_id).await, 0);
    assert_eq!(repo.rentals.count_open(book_id).await.unwrap(), 1);
}

#[tokio::test]
#[ignore]
async fn test_concurrent_returns_increment_once() {
    let repo = setup().await;
    let book_id = common::seed_book(&repo.pool, "Double Return", 1).await;
    let member_id = repo.register_member("Ada", "Lovelace").await.unwrap();
    let rental_id = repo.rent_book(member_id, book_id).await.unwrap();

    let handles: Vec<_> = (0..5)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.return_book(rental_id).await })
        })
        .collect();

    let mut returned = 0;
    for handle in handles {
        if let ReturnOutcome::Returned { .. } = handle.await.unwrap().unwrap() {
            returned += 1;
        }
    }

    assert_eq!(returned, 1);
    assert_eq!(amount(&repo, book_id).await, 1);
}

#[tokio::test]
#[ignore]
async fn test_list_available_books_hides_empty_shelves() {
    let repo = setup().await;
    let on_shelf = common::seed_book(&repo.pool, "On Shelf", 3).await;
    let empty = common::seed_book(&repo.pool, "Empty Shelf", 0).await;

    let books = repo.list_available_books().await.unwrap();

    let listed = books.iter().find(|b| b.id == on_shelf).expect("book with copies is listed");
    assert_eq!(listed.available_amount, 3);
    assert_eq!(listed.title, "On Shelf");
    assert!(books.iter().all(|b| b.id != empty));
    assert!(books.iter().all(|b| b.available_amount > 0));
}

#[tokio::test]
#[ignore]
async fn test_members_are_listed_after_registration() {
    let repo = setup().await;

    let id = repo.register_member("Hedy", "Lamarr").await.unwrap();
    let members = repo.list_members().await.unwrap();

    let member = members.iter().find(|m| m.id == id).expect("registered member is listed");
    assert_eq!(member.first_name, "Hedy");
    assert_eq!(member.last_name, "Lamarr");
}

#[tokio::test]
#[ignore]
async fn test_ping() {
    let repo = setup().await;
    assert!(repo.ping().await);

    repo.pool.close().await;
    assert!(!repo.ping().await);
}
