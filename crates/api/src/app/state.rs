use std::sync::{Arc, RwLock};

use stowage_ledger::Ledger;

/// Ledger handle shared across concurrently running handlers.
///
/// Axum serves requests concurrently, so every mutation (add, consume,
/// delete) must hold the write lock to preserve the id-uniqueness and
/// bounded-usage invariants; reads take the read lock.
pub type SharedLedger = Arc<RwLock<Ledger>>;

pub fn shared_ledger() -> SharedLedger {
    Arc::new(RwLock::new(Ledger::new()))
}
