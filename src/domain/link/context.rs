//! Result of decoding a direct link.

use crate::domain::entities::{Invoice, Order, Owner};
use crate::domain::link::{LinkCategory, LinkCode, LinkStatus};

/// Decoded direct link with its classification.
///
/// Built only through the status constructors, which keep the fields
/// consistent with the status:
///
/// - `target` is present only for [`LinkStatus::Valid`] when loading was requested
/// - `owner` is present only for [`LinkStatus::Valid`] or [`LinkStatus::Expired`]
/// - [`LinkStatus::Invalid`] and [`LinkStatus::NotExist`] carry neither
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkContext<T> {
    code: LinkCode,
    status: LinkStatus,
    owner: Option<Owner>,
    target: Option<T>,
    is_registered: bool,
}

pub type OrderLinkContext = LinkContext<Order>;
pub type InvoiceLinkContext = LinkContext<Invoice>;

impl<T> LinkContext<T> {
    /// Code failed the format check.
    pub fn invalid(code: LinkCode) -> Self {
        Self::empty(code, LinkStatus::Invalid, false)
    }

    /// Well-formed code with no matching entity.
    pub fn not_exist(code: LinkCode) -> Self {
        Self::empty(code, LinkStatus::NotExist, false)
    }

    /// Expired link. Registration comes from the store, not from an owner record.
    pub fn expired(code: LinkCode, is_registered: bool) -> Self {
        Self::empty(code, LinkStatus::Expired, is_registered)
    }

    /// Live link resolved to `owner`; `target` is `Some` only when loading was requested.
    pub fn valid(code: LinkCode, owner: Owner, target: Option<T>) -> Self {
        let is_registered = owner.is_registered();
        Self {
            code,
            status: LinkStatus::Valid,
            owner: Some(owner),
            target,
            is_registered,
        }
    }

    fn empty(code: LinkCode, status: LinkStatus, is_registered: bool) -> Self {
        Self {
            code,
            status,
            owner: None,
            target: None,
            is_registered,
        }
    }

    pub fn code(&self) -> &LinkCode {
        &self.code
    }

    pub fn status(&self) -> LinkStatus {
        self.status
    }

    pub fn owner(&self) -> Option<&Owner> {
        self.owner.as_ref()
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    pub fn is_registered(&self) -> bool {
        self.is_registered
    }
}

/// A decoded link of any category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedLink {
    Order(OrderLinkContext),
    Invoice(InvoiceLinkContext),
}

impl DecodedLink {
    pub fn category(&self) -> LinkCategory {
        match self {
            DecodedLink::Order(_) => LinkCategory::Order,
            DecodedLink::Invoice(_) => LinkCategory::Invoice,
        }
    }

    pub fn code(&self) -> &LinkCode {
        match self {
            DecodedLink::Order(ctx) => ctx.code(),
            DecodedLink::Invoice(ctx) => ctx.code(),
        }
    }

    pub fn status(&self) -> LinkStatus {
        match self {
            DecodedLink::Order(ctx) => ctx.status(),
            DecodedLink::Invoice(ctx) => ctx.status(),
        }
    }

    pub fn owner(&self) -> Option<&Owner> {
        match self {
            DecodedLink::Order(ctx) => ctx.owner(),
            DecodedLink::Invoice(ctx) => ctx.owner(),
        }
    }

    pub fn is_registered(&self) -> bool {
        match self {
            DecodedLink::Order(ctx) => ctx.is_registered(),
            DecodedLink::Invoice(ctx) => ctx.is_registered(),
        }
    }

    pub fn has_target(&self) -> bool {
        match self {
            DecodedLink::Order(ctx) => ctx.target().is_some(),
            DecodedLink::Invoice(ctx) => ctx.target().is_some(),
        }
    }

    pub fn as_order(&self) -> Option<&OrderLinkContext> {
        match self {
            DecodedLink::Order(ctx) => Some(ctx),
            DecodedLink::Invoice(_) => None,
        }
    }

    pub fn as_invoice(&self) -> Option<&InvoiceLinkContext> {
        match self {
            DecodedLink::Invoice(ctx) => Some(ctx),
            DecodedLink::Order(_) => None,
        }
    }
}

impl From<OrderLinkContext> for DecodedLink {
    fn from(ctx: OrderLinkContext) -> Self {
        DecodedLink::Order(ctx)
    }
}

impl From<InvoiceLinkContext> for DecodedLink {
    fn from(ctx: InvoiceLinkContext) -> Self {
        DecodedLink::Invoice(ctx)
    }
}
