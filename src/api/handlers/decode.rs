//! Handlers for direct link decoding.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::decode::{
    BatchDecodeRequest, BatchDecodeResponse, BatchSummary, DecodeItem, DecodeQuery,
    DecodeResultItem, LinkContextResponse,
};
use crate::domain::link::{LinkCategory, LinkCode};
use crate::error::AppError;
use crate::state::AppState;

/// Decodes a single direct link code.
///
/// # Endpoint
///
/// `GET /api/links/{category}/{code}?load=true`
///
/// # Response
///
/// Always 200 for a known category, whatever the link status:
///
/// ```json
/// {
///   "category": "order",
///   "code": "0123456789ABCDEF0123456789ABCDEF",
///   "status": "valid",
///   "is_registered": true,
///   "owner": { "id": 42, "name": "Acme" },
///   "order": { "id": 7, "number": "A-0007", "created_at": "2026-01-01T00:00:00Z" }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an unknown category.
/// Returns 503 Service Unavailable if the store cannot be reached.
pub async fn decode_handler(
    Path((category, code)): Path<(String, String)>,
    Query(query): Query<DecodeQuery>,
    State(state): State<AppState>,
) -> Result<Json<LinkContextResponse>, AppError> {
    let category = parse_category(&category)?;

    let decoded = state
        .decoding_service
        .decode(category, &LinkCode::new(code), query.load.unwrap_or(false))
        .await?;

    Ok(Json(LinkContextResponse::from(&decoded)))
}

/// Decodes several direct link codes in one request.
///
/// # Endpoint
///
/// `POST /api/links/decode`
///
/// # Request Body
///
/// ```json
/// {
///   "links": [
///     { "category": "invoice", "code": "0123ABCD-4567-89AB-CDEF-0123456789AB", "load": true }
///   ]
/// }
/// ```
///
/// # Batch Processing
///
/// Items are decoded independently. An unknown category or an unavailable
/// store fails only the affected item; other items still decode.
///
/// # Errors
///
/// Returns 400 Bad Request if the batch is empty or larger than 100 items.
pub async fn batch_decode_handler(
    State(state): State<AppState>,
    Json(payload): Json<BatchDecodeRequest>,
) -> Result<Json<BatchDecodeResponse>, AppError> {
    payload.validate()?;

    let total = payload.links.len();
    let mut items = Vec::with_capacity(total);
    let mut decoded = 0;
    let mut failed = 0;

    for item in payload.links {
        match decode_single(&state, &item).await {
            Ok(response) => {
                decoded += 1;
                items.push(DecodeResultItem::Decoded(response));
            }
            Err(err) => {
                failed += 1;
                items.push(DecodeResultItem::Error {
                    category: item.category,
                    code: item.code,
                    error: err.to_error_info(),
                });
            }
        }
    }

    Ok(Json(BatchDecodeResponse {
        summary: BatchSummary {
            total,
            decoded,
            failed,
        },
        items,
    }))
}

async fn decode_single(
    state: &AppState,
    item: &DecodeItem,
) -> Result<LinkContextResponse, AppError> {
    let category = parse_category(&item.category)?;

    let decoded = state
        .decoding_service
        .decode(category, &LinkCode::new(item.code.as_str()), item.load)
        .await?;

    Ok(LinkContextResponse::from(&decoded))
}

fn parse_category(raw: &str) -> Result<LinkCategory, AppError> {
    raw.parse::<LinkCategory>().map_err(|e| {
        AppError::bad_request(
            "Unknown link category",
            json!({ "category": raw, "reason": e.to_string() }),
        )
    })
}
