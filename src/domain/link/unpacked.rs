//! Typed result of the store-side order code unpack call.

/// Outcome of mapping an order link code to its owner and order.
///
/// The store answers with a raw `(owner, order, registered)` triple in which
/// negative owner ids are classification codes. Repository implementations
/// convert that triple with [`UnpackedOrderLink::from_raw`] so nothing past the
/// repository boundary inspects magic numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnpackedOrderLink {
    Found { owner_id: i64, order_id: i64 },
    NotFound,
    Expired { registered: bool },
}

impl UnpackedOrderLink {
    /// Owner and order sentinel for "no such link".
    pub const NOT_FOUND: i64 = -1;
    /// Owner sentinel for "link expired".
    pub const EXPIRED: i64 = -2;

    /// Classifies the raw triple returned by the unpack call.
    ///
    /// Any other negative id is treated as not found rather than looked up.
    /// This is stricter than checking the two sentinels alone, which would
    /// hand a half-negative pair such as `(42, -1)` to the owner and order
    /// loaders as if it were a live link.
    pub fn from_raw(owner_id: i64, order_id: i64, registered_flag: i32) -> Self {
        if owner_id == Self::NOT_FOUND && order_id == Self::NOT_FOUND {
            UnpackedOrderLink::NotFound
        } else if owner_id == Self::EXPIRED {
            UnpackedOrderLink::Expired {
                registered: registered_flag == 1,
            }
        } else if owner_id < 0 || order_id < 0 {
            UnpackedOrderLink::NotFound
        } else {
            UnpackedOrderLink::Found { owner_id, order_id }
        }
    }
}
