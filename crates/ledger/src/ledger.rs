use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};
use crate::item::{ItemId, ItemRecord, NewItem, UsageOutcome};

/// Fixed advisory attached to every placement plan. Static text, not
/// computed from the data.
pub const PLACEMENT_NOTE: &str =
    "Place high-usage items in easily accessible locations for efficiency.";

/// Aggregate view over the whole ledger: occupied volume (cm³) and stored
/// mass (kg).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StorageSummary {
    pub total_volume: f64,
    pub total_mass: f64,
}

/// Grouping suggestion: item names keyed by their exact category string
/// (case-sensitive), plus the fixed advisory note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementPlan {
    pub groups: BTreeMap<String, Vec<String>>,
    pub note: &'static str,
}

/// The in-memory collection of item records and the operations over it.
///
/// Owns every record for the lifetime of the process; there is no
/// persistence and no ambient/static instance. Listings are id-ordered.
#[derive(Debug, Default)]
pub struct Ledger {
    items: BTreeMap<ItemId, ItemRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a new item.
    ///
    /// Rejects a pre-existing id with `DuplicateId` (the existing record is
    /// untouched) and invalid numeric fields with `InvalidField` naming the
    /// offending field.
    pub fn add(&mut self, new_item: NewItem, recorded_at: DateTime<Utc>) -> LedgerResult<&ItemRecord> {
        if self.items.contains_key(&new_item.id) {
            return Err(LedgerError::duplicate_id(new_item.id.as_str()));
        }
        let record = ItemRecord::admit(new_item, recorded_at)?;
        let id = record.id().clone();
        Ok(self.items.entry(id).or_insert(record))
    }

    /// Consume one use of an item.
    ///
    /// `NotFound` if the id is absent, `Exhausted` if no uses remain (the
    /// counter is not decremented further).
    pub fn consume_use(&mut self, id: &ItemId) -> LedgerResult<UsageOutcome> {
        let record = self
            .items
            .get_mut(id)
            .ok_or_else(|| LedgerError::not_found(id.as_str()))?;
        record.consume_use()
    }

    pub fn get(&self, id: &ItemId) -> Option<&ItemRecord> {
        self.items.get(id)
    }

    /// Remove an item, returning the deleted record.
    pub fn remove(&mut self, id: &ItemId) -> LedgerResult<ItemRecord> {
        self.items
            .remove(id)
            .ok_or_else(|| LedgerError::not_found(id.as_str()))
    }

    /// All current records in id order. An empty ledger yields an empty
    /// listing, which is a normal state rather than an error.
    pub fn items(&self) -> Vec<&ItemRecord> {
        self.items.values().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum volume and mass across all records. `(0, 0)` on an empty ledger.
    pub fn storage_summary(&self) -> StorageSummary {
        let total_volume = self.items.values().map(ItemRecord::volume).sum();
        let total_mass = self.items.values().map(ItemRecord::mass).sum();
        StorageSummary {
            total_volume,
            total_mass,
        }
    }

    /// Group item names by their exact category string.
    pub fn placement_plan(&self) -> PlacementPlan {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for record in self.items.values() {
            groups
                .entry(record.category().to_string())
                .or_default()
                .push(record.name().to_string());
        }
        PlacementPlan {
            groups,
            note: PLACEMENT_NOTE,
        }
    }
}
