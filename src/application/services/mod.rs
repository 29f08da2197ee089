//! Business logic services for the application layer.

pub mod invoice_link_resolver;
pub mod link_decoding_service;
pub mod link_resolver;
pub mod lookup;
pub mod order_link_resolver;

pub use invoice_link_resolver::InvoiceLinkResolver;
pub use link_decoding_service::LinkDecodingService;
pub use link_resolver::LinkResolver;
pub use order_link_resolver::OrderLinkResolver;
