//! DTOs for direct link decoding endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{Invoice, Order, Owner};
use crate::domain::link::{DecodedLink, LinkCategory, LinkCode, LinkStatus};
use crate::error::ErrorInfo;

/// Query parameters of the single decode endpoint.
///
/// Uses `serde_with` to parse `load=true|false` from the query string.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct DecodeQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub load: Option<bool>,
}

/// Request to decode several links at once.
#[derive(Debug, Deserialize, Validate)]
pub struct BatchDecodeRequest {
    #[validate(length(min = 1, max = 100, message = "Between 1 and 100 links per request"))]
    pub links: Vec<DecodeItem>,
}

/// Individual link to decode.
///
/// `category` stays a string so an unknown category fails only its own item.
#[derive(Debug, Deserialize, Serialize)]
pub struct DecodeItem {
    pub category: String,
    pub code: String,
    #[serde(default)]
    pub load: bool,
}

/// Decoded link as returned to API clients.
///
/// `owner` is present for valid links; `order` or `invoice` only when the
/// caller asked for the target to be loaded.
#[derive(Debug, Serialize)]
pub struct LinkContextResponse {
    pub category: LinkCategory,
    pub code: LinkCode,
    pub status: LinkStatus,
    pub is_registered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice: Option<InvoiceDto>,
}

#[derive(Debug, Serialize)]
pub struct OwnerDto {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct OrderDto {
    pub id: i64,
    pub number: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceDto {
    pub id: Uuid,
    pub amount_minor: i64,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Owner> for OwnerDto {
    fn from(owner: &Owner) -> Self {
        Self {
            id: owner.id,
            name: owner.name.clone(),
        }
    }
}

impl From<&Order> for OrderDto {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            number: order.number.clone(),
            created_at: order.created_at,
        }
    }
}

impl From<&Invoice> for InvoiceDto {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id,
            amount_minor: invoice.amount_minor,
            currency: invoice.currency.clone(),
            created_at: invoice.created_at,
        }
    }
}

impl From<&DecodedLink> for LinkContextResponse {
    fn from(decoded: &DecodedLink) -> Self {
        let (order, invoice) = match decoded {
            DecodedLink::Order(ctx) => (ctx.target().map(OrderDto::from), None),
            DecodedLink::Invoice(ctx) => (None, ctx.target().map(InvoiceDto::from)),
        };

        Self {
            category: decoded.category(),
            code: decoded.code().clone(),
            status: decoded.status(),
            is_registered: decoded.is_registered(),
            owner: decoded.owner().map(OwnerDto::from),
            order,
            invoice,
        }
    }
}

/// Response containing batch decode results.
#[derive(Debug, Serialize)]
pub struct BatchDecodeResponse {
    pub summary: BatchSummary,
    pub items: Vec<DecodeResultItem>,
}

/// Individual result for a link in the batch.
///
/// Uses untagged enum for cleaner JSON structure (no discriminator field).
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DecodeResultItem {
    Decoded(LinkContextResponse),
    Error {
        category: String,
        code: String,
        error: ErrorInfo,
    },
}

/// Summary statistics for batch processing.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub decoded: usize,
    pub failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::link::OrderLinkContext;

    #[test]
    fn test_decode_query_parses_load_flag() {
        let q: DecodeQuery = serde_json::from_str(r#"{"load": "true"}"#).unwrap();
        assert_eq!(q.load, Some(true));

        let q: DecodeQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.load, None);

        assert!(serde_json::from_str::<DecodeQuery>(r#"{"load": "maybe"}"#).is_err());
    }

    #[test]
    fn test_batch_request_bounds() {
        let empty = BatchDecodeRequest { links: vec![] };
        assert!(empty.validate().is_err());

        let one = BatchDecodeRequest {
            links: vec![DecodeItem {
                category: "order".to_string(),
                code: "x".to_string(),
                load: false,
            }],
        };
        assert!(one.validate().is_ok());
    }

    #[test]
    fn test_response_omits_absent_entities() {
        let decoded = DecodedLink::from(OrderLinkContext::expired(LinkCode::new("C"), true));
        let json = serde_json::to_value(LinkContextResponse::from(&decoded)).unwrap();

        assert_eq!(json["category"], "order");
        assert_eq!(json["status"], "expired");
        assert_eq!(json["is_registered"], true);
        assert!(json.get("owner").is_none());
        assert!(json.get("order").is_none());
        assert!(json.get("invoice").is_none());
    }
}
