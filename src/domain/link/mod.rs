//! Direct link model: codes, categories, statuses, and decode results.
//!
//! # Decode Flow
//!
//! 1. Caller extracts a [`LinkCode`] from a URL and picks a [`LinkCategory`]
//! 2. The code is checked against the category's shape
//! 3. Well-formed codes are looked up in the store
//! 4. The outcome is classified into a [`LinkStatus`] inside a [`LinkContext`]

pub mod category;
pub mod code;
pub mod context;
pub mod status;
pub mod unpacked;

pub use category::{LinkCategory, ParseCategoryError};
pub use code::LinkCode;
pub use context::{DecodedLink, InvoiceLinkContext, LinkContext, OrderLinkContext};
pub use status::LinkStatus;
pub use unpacked::UnpackedOrderLink;
