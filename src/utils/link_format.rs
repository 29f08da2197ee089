//! Shape checks for direct link codes.
//!
//! Checks are pure and total: malformed input yields `false`, never an error.
//!
//! - Order codes: exactly 32 uppercase hex characters
//! - Invoice codes: a parseable UUID whose hyphen-stripped text is also an
//!   order-shaped code

use crate::domain::link::LinkCategory;
use regex::Regex;
use std::sync::LazyLock;
use uuid::Uuid;

/// Compiled regex for the 32 character uppercase hex shape.
static HEX_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-F0-9]{32}$").unwrap());

/// Returns true if `code` has the shape expected for `category`.
///
/// # Examples
///
/// ```ignore
/// assert!(is_well_formed("0123456789ABCDEF0123456789ABCDEF", LinkCategory::Order));
/// assert!(is_well_formed("0123ABCD-4567-89AB-CDEF-0123456789AB", LinkCategory::Invoice));
/// assert!(!is_well_formed("0123abcd-4567-89ab-cdef-0123456789ab", LinkCategory::Invoice));
/// ```
pub fn is_well_formed(code: &str, category: LinkCategory) -> bool {
    match category {
        LinkCategory::Order => is_hex_code(code),
        LinkCategory::Invoice => parse_invoice_code(code).is_some(),
    }
}

/// Returns true for exactly 32 characters from `[A-F0-9]`.
pub fn is_hex_code(code: &str) -> bool {
    !code.is_empty() && HEX_CODE_REGEX.is_match(code)
}

/// Parses an invoice code, returning its UUID only if both checks pass.
///
/// The hex check runs on the input with hyphens removed, so lowercase or
/// braced UUID spellings are rejected even though they parse.
pub fn parse_invoice_code(code: &str) -> Option<Uuid> {
    let uuid = Uuid::try_parse(code).ok()?;
    let stripped: String = code.chars().filter(|c| *c != '-').collect();

    is_hex_code(&stripped).then_some(uuid)
}
