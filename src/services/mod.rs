//! Business logic services

pub mod ledger;

use std::sync::Arc;

use crate::repository::LedgerStore;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub ledger: ledger::LedgerService,
}

impl Services {
    /// Create all services on top of the given store
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self {
            ledger: ledger::LedgerService::new(store),
        }
    }
}
