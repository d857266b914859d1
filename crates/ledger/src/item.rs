use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// Placeholder sensor reading stamped on every record at admission.
///
/// Physical-sensor integration is out of scope; the field exists so the
/// record shape matches what downstream tooling expects.
pub const SENSOR_NOMINAL: &str = "Nominal";

/// Item identifier, supplied by the caller (e.g. `"itm-1"`).
///
/// Free-form, but unique within a ledger for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Admission request: everything the caller supplies for a new item.
///
/// Dimensions are centimeters, mass is kilograms. A `height` of exactly
/// zero marks a 2D/cylindrical approximation and changes the volume
/// formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub location: String,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub mass: f64,
    pub usage_limit: u32,
}

impl NewItem {
    fn validate(&self) -> LedgerResult<()> {
        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
            ("mass", self.mass),
        ] {
            if !value.is_finite() {
                return Err(LedgerError::invalid_field(field, "must be a finite number"));
            }
            if value < 0.0 {
                return Err(LedgerError::invalid_field(field, "must not be negative"));
            }
        }
        if self.usage_limit == 0 {
            return Err(LedgerError::invalid_field(
                "usage_limit",
                "must be a positive integer",
            ));
        }
        Ok(())
    }

    fn volume(&self) -> f64 {
        if self.height > 0.0 {
            self.width * self.height * self.depth
        } else {
            self.width * self.depth
        }
    }
}

/// Lifecycle state of a record, derived from `remaining_uses`.
///
/// There is no transition out of `Exhausted`; no refill operation exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemState {
    Active,
    Exhausted,
}

/// One tracked inventory item.
///
/// Fields are private so the invariants hold by construction:
/// `0 <= remaining_uses <= usage_limit`, and `volume` is computed once at
/// admission and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRecord {
    id: ItemId,
    name: String,
    category: String,
    location: String,
    width: f64,
    height: f64,
    depth: f64,
    mass: f64,
    usage_limit: u32,
    remaining_uses: u32,
    volume: f64,
    sensor_status: &'static str,
    recorded_at: DateTime<Utc>,
}

impl ItemRecord {
    /// Validate an admission request and build the record.
    ///
    /// `recorded_at` is passed in from the edge so domain code stays
    /// deterministic.
    pub fn admit(new_item: NewItem, recorded_at: DateTime<Utc>) -> LedgerResult<Self> {
        new_item.validate()?;
        let volume = new_item.volume();
        Ok(Self {
            id: new_item.id,
            name: new_item.name,
            category: new_item.category,
            location: new_item.location,
            width: new_item.width,
            height: new_item.height,
            depth: new_item.depth,
            mass: new_item.mass,
            usage_limit: new_item.usage_limit,
            remaining_uses: new_item.usage_limit,
            volume,
            sensor_status: SENSOR_NOMINAL,
            recorded_at,
        })
    }

    /// Consume one use.
    ///
    /// Fails with `Exhausted` when `remaining_uses` is already zero; the
    /// counter never goes below zero. The low-usage alert fires when the new
    /// count is at or below 10% of the limit (inclusive), including the
    /// consume that lands on exactly zero.
    pub fn consume_use(&mut self) -> LedgerResult<UsageOutcome> {
        if self.remaining_uses == 0 {
            return Err(LedgerError::exhausted(self.id.as_str(), &self.name));
        }
        self.remaining_uses -= 1;

        let low_usage_alert = u64::from(self.remaining_uses) * 10 <= u64::from(self.usage_limit);

        Ok(UsageOutcome {
            id: self.id.clone(),
            name: self.name.clone(),
            remaining_uses: self.remaining_uses,
            low_usage_alert,
        })
    }

    pub fn state(&self) -> ItemState {
        if self.remaining_uses > 0 {
            ItemState::Active
        } else {
            ItemState::Exhausted
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn usage_limit(&self) -> u32 {
        self.usage_limit
    }

    pub fn remaining_uses(&self) -> u32 {
        self.remaining_uses
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn sensor_status(&self) -> &str {
        self.sensor_status
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

/// Result of a successful consume: the new count plus the advisory flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageOutcome {
    pub id: ItemId,
    pub name: String,
    pub remaining_uses: u32,
    pub low_usage_alert: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrench_item() -> NewItem {
        NewItem {
            id: ItemId::new("itm-1"),
            name: "Wrench".to_string(),
            category: "Tool".to_string(),
            location: "A-1".to_string(),
            width: 10.0,
            height: 0.0,
            depth: 5.0,
            mass: 2.0,
            usage_limit: 5,
        }
    }

    #[test]
    fn volume_uses_three_dimensions_when_height_positive() {
        let item = NewItem {
            height: 4.0,
            ..wrench_item()
        };
        let rec = ItemRecord::admit(item, Utc::now()).unwrap();
        assert_eq!(rec.volume(), 10.0 * 4.0 * 5.0);
    }

    #[test]
    fn zero_height_falls_back_to_footprint_area() {
        let rec = ItemRecord::admit(wrench_item(), Utc::now()).unwrap();
        assert_eq!(rec.volume(), 50.0);
    }

    #[test]
    fn negative_dimension_is_rejected_naming_the_field() {
        let item = NewItem {
            depth: -1.0,
            ..wrench_item()
        };
        let err = ItemRecord::admit(item, Utc::now()).unwrap_err();
        assert_eq!(
            err,
            LedgerError::invalid_field("depth", "must not be negative")
        );
    }

    #[test]
    fn non_finite_mass_is_rejected() {
        let item = NewItem {
            mass: f64::NAN,
            ..wrench_item()
        };
        let err = ItemRecord::admit(item, Utc::now()).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidField { field: "mass", .. }));
    }

    #[test]
    fn zero_usage_limit_is_rejected() {
        let item = NewItem {
            usage_limit: 0,
            ..wrench_item()
        };
        let err = ItemRecord::admit(item, Utc::now()).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::InvalidField {
                field: "usage_limit",
                ..
            }
        ));
    }

    #[test]
    fn alert_fires_at_ten_percent_inclusive() {
        let item = NewItem {
            usage_limit: 10,
            ..wrench_item()
        };
        let mut rec = ItemRecord::admit(item, Utc::now()).unwrap();

        // 10 -> 2: above the boundary, no alert yet.
        for expected in (2..10).rev() {
            let out = rec.consume_use().unwrap();
            assert_eq!(out.remaining_uses, expected);
            assert!(!out.low_usage_alert, "no alert expected at {expected}/10");
        }

        // 2 -> 1: exactly 10% of the limit, alert fires.
        let out = rec.consume_use().unwrap();
        assert_eq!(out.remaining_uses, 1);
        assert!(out.low_usage_alert);
    }

    #[test]
    fn exhaustion_is_a_distinct_error_and_never_goes_negative() {
        let mut rec = ItemRecord::admit(wrench_item(), Utc::now()).unwrap();
        for _ in 0..5 {
            rec.consume_use().unwrap();
        }
        assert_eq!(rec.remaining_uses(), 0);
        assert_eq!(rec.state(), ItemState::Exhausted);

        let err = rec.consume_use().unwrap_err();
        assert_eq!(err, LedgerError::exhausted("itm-1", "Wrench"));
        assert_eq!(rec.remaining_uses(), 0);
    }

    #[test]
    fn final_consume_reports_the_alert() {
        let mut rec = ItemRecord::admit(wrench_item(), Utc::now()).unwrap();
        let mut last = None;
        for _ in 0..5 {
            last = Some(rec.consume_use().unwrap());
        }
        let last = last.unwrap();
        assert_eq!(last.remaining_uses, 0);
        assert!(last.low_usage_alert);
    }
}
