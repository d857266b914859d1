use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use stowage_ledger::{ItemId, NewItem};

use crate::app::state::SharedLedger;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_item).get(list_items))
        .route("/summary", get(storage_summary))
        .route("/optimize", get(optimize_storage))
        .route("/:id/use", post(consume_use))
        .route("/:id", get(get_item).delete(delete_item))
}

pub async fn create_item(
    Extension(ledger): Extension<SharedLedger>,
    Json(body): Json<dto::CreateItemRequest>,
) -> axum::response::Response {
    let new_item = NewItem {
        id: ItemId::new(body.id),
        name: body.name,
        category: body.category,
        location: body.location,
        width: body.width,
        height: body.height,
        depth: body.depth,
        mass: body.mass,
        usage_limit: body.usage_limit,
    };

    let mut guard = ledger.write().unwrap();
    match guard.add(new_item, Utc::now()) {
        Ok(record) => (StatusCode::CREATED, Json(dto::item_to_json(record))).into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

pub async fn consume_use(
    Extension(ledger): Extension<SharedLedger>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = ItemId::new(id);

    let mut guard = ledger.write().unwrap();
    match guard.consume_use(&id) {
        Ok(outcome) => (StatusCode::OK, Json(dto::usage_to_json(&outcome))).into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

pub async fn list_items(Extension(ledger): Extension<SharedLedger>) -> axum::response::Response {
    let guard = ledger.read().unwrap();
    let items: Vec<serde_json::Value> = guard.items().into_iter().map(dto::item_to_json).collect();
    (StatusCode::OK, Json(items)).into_response()
}

pub async fn get_item(
    Extension(ledger): Extension<SharedLedger>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = ItemId::new(id);

    let guard = ledger.read().unwrap();
    match guard.get(&id) {
        Some(record) => (StatusCode::OK, Json(dto::item_to_json(record))).into_response(),
        None => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("item '{id}' not found"),
        ),
    }
}

pub async fn storage_summary(
    Extension(ledger): Extension<SharedLedger>,
) -> axum::response::Response {
    let guard = ledger.read().unwrap();
    let summary = guard.storage_summary();
    (StatusCode::OK, Json(dto::summary_to_json(&summary))).into_response()
}

pub async fn optimize_storage(
    Extension(ledger): Extension<SharedLedger>,
) -> axum::response::Response {
    let guard = ledger.read().unwrap();
    let plan = guard.placement_plan();
    (StatusCode::OK, Json(dto::plan_to_json(&plan))).into_response()
}

pub async fn delete_item(
    Extension(ledger): Extension<SharedLedger>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = ItemId::new(id);

    let mut guard = ledger.write().unwrap();
    match guard.remove(&id) {
        Ok(record) => (StatusCode::OK, Json(dto::item_to_json(&record))).into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}
