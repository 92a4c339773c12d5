use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::CartId;

use crate::cart::CheckedOut;

/// Confirmation returned by a simulated checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub cart_id: CartId,
    /// Number of cart lines at the moment of checkout.
    pub item_count: usize,
    pub placed_at: DateTime<Utc>,
}

impl Receipt {
    pub fn is_empty_order(&self) -> bool {
        self.item_count == 0
    }
}

impl From<&CheckedOut> for Receipt {
    fn from(event: &CheckedOut) -> Self {
        Self {
            cart_id: event.cart_id,
            item_count: event.item_count,
            placed_at: event.occurred_at,
        }
    }
}

impl core::fmt::Display for Receipt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let noun = if self.item_count == 1 { "item" } else { "items" };
        write!(
            f,
            "Order Placed Successfully! Thank you for shopping. ({} {noun})",
            self.item_count
        )
    }
}
