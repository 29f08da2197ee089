//! Entities referenced by direct links.
//!
//! These records are owned by the surrounding system; this crate only reads them.
//!
//! # Entity Types
//!
//! - [`Owner`] - The client account a link belongs to
//! - [`Order`] - Target of order links
//! - [`Invoice`] - Target of invoice links

pub mod invoice;
pub mod order;
pub mod owner;

pub use invoice::Invoice;
pub use order::Order;
pub use owner::Owner;
