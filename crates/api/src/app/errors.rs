use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stowage_ledger::LedgerError;

/// Map a ledger error to its HTTP representation.
///
/// Duplicate ids and invalid fields are client errors on the create path
/// (400); a consume on an exhausted item conflicts with the record's state
/// (409).
pub fn ledger_error_to_response(err: LedgerError) -> axum::response::Response {
    match &err {
        LedgerError::DuplicateId(_) => {
            json_error(StatusCode::BAD_REQUEST, "duplicate_id", err.to_string())
        }
        LedgerError::InvalidField { .. } => {
            json_error(StatusCode::BAD_REQUEST, "invalid_field", err.to_string())
        }
        LedgerError::NotFound(_) => json_error(StatusCode::NOT_FOUND, "not_found", err.to_string()),
        LedgerError::Exhausted { .. } => {
            json_error(StatusCode::CONFLICT, "exhausted", err.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
