//! Resolver for invoice direct links.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::application::services::link_resolver::LinkResolver;
use crate::application::services::lookup::with_deadline;
use crate::domain::entities::Invoice;
use crate::domain::link::{InvoiceLinkContext, LinkCategory, LinkCode};
use crate::domain::repositories::{InvoiceRepository, OwnerRepository};
use crate::error::AppError;
use crate::utils::link_format::parse_invoice_code;

/// Resolves UUID invoice codes.
///
/// Invoices have no expiry, so only `Invalid`, `NotExist` and `Valid` are
/// reachable here.
pub struct InvoiceLinkResolver {
    invoice_repository: Arc<dyn InvoiceRepository>,
    owner_repository: Arc<dyn OwnerRepository>,
    lookup_timeout: Option<Duration>,
}

impl InvoiceLinkResolver {
    /// Creates a new invoice link resolver without a lookup deadline.
    pub fn new(
        invoice_repository: Arc<dyn InvoiceRepository>,
        owner_repository: Arc<dyn OwnerRepository>,
    ) -> Self {
        Self {
            invoice_repository,
            owner_repository,
            lookup_timeout: None,
        }
    }

    /// Sets the deadline applied to each store call.
    pub fn with_lookup_timeout(mut self, lookup_timeout: Option<Duration>) -> Self {
        self.lookup_timeout = lookup_timeout;
        self
    }
}

#[async_trait]
impl LinkResolver for InvoiceLinkResolver {
    type Target = Invoice;

    fn category(&self) -> LinkCategory {
        LinkCategory::Invoice
    }

    async fn resolve(
        &self,
        code: &LinkCode,
        load_target: bool,
    ) -> Result<InvoiceLinkContext, AppError> {
        let Some(invoice_id) = parse_invoice_code(code.as_str()) else {
            debug!(code = %code, "Malformed invoice link code");
            return Ok(InvoiceLinkContext::invalid(code.clone()));
        };

        let invoice = with_deadline(
            self.lookup_timeout,
            "find_invoice",
            self.invoice_repository.find_by_code(invoice_id),
        )
        .await?;

        let Some(invoice) = invoice else {
            debug!(code = %code, "Invoice link not found");
            return Ok(InvoiceLinkContext::not_exist(code.clone()));
        };

        let owner = with_deadline(
            self.lookup_timeout,
            "find_owner_by_invoice",
            self.owner_repository.find_by_invoice(&invoice),
        )
        .await?;

        debug!(code = %code, owner_id = owner.id, "Invoice link resolved");
        Ok(InvoiceLinkContext::valid(
            code.clone(),
            owner,
            load_target.then_some(invoice),
        ))
    }
}
