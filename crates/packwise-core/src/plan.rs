//! Fulfillment plans - the output of the allocator.

use std::collections::BTreeMap;
use std::fmt;

/// A fulfillment plan: how many packs of each denomination satisfy an
/// order.
///
/// Maps pack size to the count of packs of that size. All stored counts
/// are positive; adding zero packs of a size is a no-op.
///
/// # Examples
///
/// ```
/// use packwise_core::FulfillmentPlan;
///
/// let mut plan = FulfillmentPlan::new();
/// plan.add_packs(5000, 2);
/// plan.add_packs(250, 1);
///
/// assert_eq!(plan.total_items(), 10_250);
/// assert_eq!(plan.pack_count(), 3);
/// assert_eq!(plan.to_string(), "5000x2, 250x1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FulfillmentPlan {
    packs: BTreeMap<u64, u64>,
}

impl FulfillmentPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a plan from `(size, count)` entries.
    ///
    /// Entries with the same size accumulate; zero counts are dropped.
    pub fn from_entries(entries: impl IntoIterator<Item = (u64, u64)>) -> Self {
        let mut plan = Self::new();
        for (size, count) in entries {
            plan.add_packs(size, count);
        }
        plan
    }

    /// Adds `count` packs of `size` to the plan.
    pub fn add_packs(&mut self, size: u64, count: u64) {
        if count > 0 {
            *self.packs.entry(size).or_insert(0) += count;
        }
    }

    /// Total items shipped by this plan (sum of size times count).
    pub fn total_items(&self) -> u64 {
        self.packs.iter().map(|(size, count)| size * count).sum()
    }

    /// Number of physical packs in the plan.
    pub fn pack_count(&self) -> u64 {
        self.packs.values().sum()
    }

    /// Number of distinct denominations used.
    pub fn distinct_sizes(&self) -> usize {
        self.packs.len()
    }

    /// Count of packs of the given size, zero if the size is unused.
    pub fn count_of(&self, size: u64) -> u64 {
        self.packs.get(&size).copied().unwrap_or(0)
    }

    /// Items shipped beyond the requested count.
    ///
    /// Zero when the plan exactly matches the request; never reports a
    /// shortfall because valid plans never under-fulfill.
    pub fn overshoot(&self, requested: u64) -> u64 {
        self.total_items().saturating_sub(requested)
    }

    /// True if the plan uses no packs at all.
    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    /// Iterates over `(size, count)` entries in ascending size order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.packs.iter().map(|(&size, &count)| (size, count))
    }
}

impl fmt::Display for FulfillmentPlan {
    /// Renders largest denominations first, e.g. `"5000x2, 2000x1, 250x1"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (size, count) in self.packs.iter().rev() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{size}x{count}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromIterator<(u64, u64)> for FulfillmentPlan {
    fn from_iter<I: IntoIterator<Item = (u64, u64)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}
