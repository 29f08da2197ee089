//! HTTP request handlers for API endpoints.

pub mod decode;
pub mod health;

pub use decode::{batch_decode_handler, decode_handler};
pub use health::health_handler;
