//! Inventory ledger domain.
//!
//! This crate contains the business rules for stowage tracking, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no terminal).

pub mod error;
pub mod item;
pub mod ledger;

pub use error::{LedgerError, LedgerResult};
pub use item::{ItemId, ItemRecord, ItemState, NewItem, UsageOutcome, SENSOR_NOMINAL};
pub use ledger::{Ledger, PlacementPlan, StorageSummary, PLACEMENT_NOTE};
