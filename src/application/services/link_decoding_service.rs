//! Entry point for decoding direct links of any category.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::application::services::invoice_link_resolver::InvoiceLinkResolver;
use crate::application::services::link_resolver::LinkResolver;
use crate::application::services::order_link_resolver::OrderLinkResolver;
use crate::domain::link::{
    DecodedLink, InvoiceLinkContext, LinkCategory, LinkCode, LinkStatus, OrderLinkContext,
};
use crate::domain::repositories::{InvoiceRepository, OrderRepository, OwnerRepository};
use crate::error::AppError;

/// Dispatches a code to the resolver of its category.
///
/// Holds no mutable state; a single instance can serve any number of
/// concurrent decode calls.
pub struct LinkDecodingService {
    order_resolver: OrderLinkResolver,
    invoice_resolver: InvoiceLinkResolver,
}

impl LinkDecodingService {
    /// Creates a new decoding service over the given repositories.
    pub fn new(
        owner_repository: Arc<dyn OwnerRepository>,
        order_repository: Arc<dyn OrderRepository>,
        invoice_repository: Arc<dyn InvoiceRepository>,
    ) -> Self {
        Self {
            order_resolver: OrderLinkResolver::new(owner_repository.clone(), order_repository),
            invoice_resolver: InvoiceLinkResolver::new(invoice_repository, owner_repository),
        }
    }

    /// Applies a deadline to every store call made by either resolver.
    pub fn with_lookup_timeout(self, lookup_timeout: Option<Duration>) -> Self {
        Self {
            order_resolver: self.order_resolver.with_lookup_timeout(lookup_timeout),
            invoice_resolver: self.invoice_resolver.with_lookup_timeout(lookup_timeout),
        }
    }

    /// Decodes `code` as a link of `category`.
    ///
    /// # Arguments
    ///
    /// - `category` - Link category chosen by the caller
    /// - `code` - Raw code extracted from the URL
    /// - `load_target` - Whether a valid link should carry its order or invoice
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the store cannot be reached. Every
    /// other outcome, including malformed codes, is a status in the result.
    pub async fn decode(
        &self,
        category: LinkCategory,
        code: &LinkCode,
        load_target: bool,
    ) -> Result<DecodedLink, AppError> {
        match category {
            LinkCategory::Order => self
                .decode_order(code, load_target)
                .await
                .map(DecodedLink::from),
            LinkCategory::Invoice => self
                .decode_invoice(code, load_target)
                .await
                .map(DecodedLink::from),
        }
    }

    /// Decodes an order link, keeping the concrete context type.
    pub async fn decode_order(
        &self,
        code: &LinkCode,
        load_target: bool,
    ) -> Result<OrderLinkContext, AppError> {
        let result = self.order_resolver.resolve(code, load_target).await;
        record_outcome(
            self.order_resolver.category(),
            result.as_ref().map(|ctx| ctx.status()),
            load_target,
        );
        result
    }

    /// Decodes an invoice link, keeping the concrete context type.
    pub async fn decode_invoice(
        &self,
        code: &LinkCode,
        load_target: bool,
    ) -> Result<InvoiceLinkContext, AppError> {
        let result = self.invoice_resolver.resolve(code, load_target).await;
        record_outcome(
            self.invoice_resolver.category(),
            result.as_ref().map(|ctx| ctx.status()),
            load_target,
        );
        result
    }
}

/// Logs a decode outcome and bumps the per-status counter.
fn record_outcome(
    category: LinkCategory,
    outcome: Result<LinkStatus, &AppError>,
    load_target: bool,
) {
    let status = match outcome {
        Ok(status) => {
            info!(
                category = %category,
                status = %status,
                load_target,
                "Direct link decoded"
            );
            status.as_str()
        }
        Err(e) if e.is_unavailable() => {
            warn!(category = %category, "Direct link store unavailable: {}", e);
            "unavailable"
        }
        Err(e) => {
            error!(category = %category, "Direct link decode failed: {}", e);
            "error"
        }
    };

    metrics::counter!(
        "direct_link_decodes_total",
        "category" => category.as_str(),
        "status" => status
    )
    .increment(1);
}
