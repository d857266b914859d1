use serde::Deserialize;

use stowage_ledger::{ItemRecord, PlacementPlan, StorageSummary, UsageOutcome};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub id: String,
    pub name: String,
    pub category: String,
    pub location: String,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub mass: f64,
    pub usage_limit: u32,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn item_to_json(record: &ItemRecord) -> serde_json::Value {
    serde_json::json!({
        "id": record.id().as_str(),
        "name": record.name(),
        "category": record.category(),
        "location": record.location(),
        "width": record.width(),
        "height": record.height(),
        "depth": record.depth(),
        "mass": record.mass(),
        "usage_limit": record.usage_limit(),
        "remaining_uses": record.remaining_uses(),
        "volume": record.volume(),
        "sensor_status": record.sensor_status(),
        "recorded_at": record.recorded_at().to_rfc3339(),
    })
}

pub fn usage_to_json(outcome: &UsageOutcome) -> serde_json::Value {
    let alert = outcome.low_usage_alert.then(|| {
        format!(
            "'{}' is nearing its usage limit; consider restocking or maintenance",
            outcome.name
        )
    });
    serde_json::json!({
        "id": outcome.id.as_str(),
        "name": outcome.name,
        "remaining_uses": outcome.remaining_uses,
        "alert": alert,
    })
}

pub fn summary_to_json(summary: &StorageSummary) -> serde_json::Value {
    serde_json::json!({
        "total_volume": summary.total_volume,
        "total_mass": summary.total_mass,
    })
}

pub fn plan_to_json(plan: &PlacementPlan) -> serde_json::Value {
    serde_json::json!({
        "groups": plan.groups,
        "note": plan.note,
    })
}
