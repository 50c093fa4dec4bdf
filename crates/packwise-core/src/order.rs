//! Order records.

use std::fmt;

use crate::plan::FulfillmentPlan;

/// Stable identifier of an order, assigned at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OrderId(u64);

impl OrderId {
    #[inline]
    pub const fn new(raw: u64) -> Self {
        OrderId(raw)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An order: a requested item count plus the plan that fulfills it.
///
/// Orders are immutable snapshots. The plan is computed once, at
/// creation, against the catalog as it existed at that instant, and is
/// never recomputed if the catalog later changes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    /// Stable identifier, assigned at creation.
    pub id: OrderId,
    /// Requested item quantity, always positive.
    pub items_count: u64,
    /// The fulfillment plan computed at creation time.
    pub pack_setup: FulfillmentPlan,
}

impl Order {
    /// Creates an order record.
    pub fn new(id: OrderId, items_count: u64, pack_setup: FulfillmentPlan) -> Self {
        Self {
            id,
            items_count,
            pack_setup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_carries_its_plan() {
        let plan = FulfillmentPlan::from_entries([(500, 1), (250, 1)]);
        let order = Order::new(OrderId::new(1), 501, plan.clone());
        assert_eq!(order.items_count, 501);
        assert_eq!(order.pack_setup, plan);
        assert!(order.pack_setup.total_items() >= order.items_count);
    }
}
