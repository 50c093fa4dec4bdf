//! The pack allocator.
//!
//! Allocation is a bounded integer optimization, not a greedy reduction:
//! greedy largest-pack-first over-ships when denominations are not
//! multiples of each other (for sizes {4, 6, 9} and 11 requested items it
//! ships 13 where 12 is attainable). The allocator instead runs a dense
//! dynamic program over attainable totals, picks the smallest reachable
//! total at or above the request, then the fewest packs for that total.

use std::collections::BTreeSet;

use packwise_config::AllocatorConfig;
use packwise_core::{FulfillmentPlan, PackwiseError, Result};
use tracing::{debug, trace};

/// Sentinel for totals no pack combination attains.
const UNREACHABLE: u32 = u32::MAX;

/// Pure allocation engine.
///
/// Stateless between calls; the only "state" is the catalog snapshot the
/// caller passes in, so a single instance can serve any number of threads.
///
/// # Examples
///
/// ```
/// use packwise_allocator::Allocator;
///
/// let allocator = Allocator::default();
/// let plan = allocator.allocate(&[250, 500, 1000, 2000, 5000], 12_001).unwrap();
///
/// assert_eq!(plan.total_items(), 12_250);
/// assert_eq!(plan.pack_count(), 4);
/// assert_eq!(plan.to_string(), "5000x2, 2000x1, 250x1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Allocator {
    config: AllocatorConfig,
}

impl Allocator {
    /// Creates an allocator with the given search bounds.
    pub fn new(config: AllocatorConfig) -> Self {
        Self { config }
    }

    /// Returns the configured search bounds.
    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// Computes the fulfillment plan for `items_count` over the given
    /// catalog snapshot.
    ///
    /// Duplicate sizes merge into one unbounded-supply denomination, so
    /// the order and multiplicity of `sizes` never changes the result.
    ///
    /// Policy, in priority order:
    /// 1. Never ship fewer items than requested.
    /// 2. Minimize total items shipped.
    /// 3. Minimize the number of physical packs.
    /// 4. On remaining ties, prefer larger denominations at every
    ///    reconstruction step, which keeps plans deterministic and biased
    ///    toward fewer distinct sizes.
    ///
    /// # Errors
    ///
    /// - [`PackwiseError::InvalidRequest`] when `items_count` is zero
    /// - [`PackwiseError::InvalidSize`] when any size is zero
    /// - [`PackwiseError::NoPacksAvailable`] when `sizes` is empty
    /// - [`PackwiseError::LimitExceeded`] when the search would need more
    ///   cells than `max_dp_cells`
    pub fn allocate(&self, sizes: &[u64], items_count: u64) -> Result<FulfillmentPlan> {
        if items_count == 0 {
            return Err(PackwiseError::InvalidRequest(0));
        }
        if sizes.is_empty() {
            return Err(PackwiseError::NoPacksAvailable);
        }
        let mut denominations = BTreeSet::new();
        for &size in sizes {
            if size == 0 {
                return Err(PackwiseError::InvalidSize(0));
            }
            denominations.insert(size);
        }
        let Some(&min_size) = denominations.iter().next() else {
            return Err(PackwiseError::NoPacksAvailable);
        };

        // A plan of all-smallest packs totals less than items_count +
        // min_size, so the optimal total lies within that horizon and the
        // DP needs exactly items_count + min_size cells (totals 0..=horizon).
        let limit = self.config.max_dp_cells;
        let cells = items_count
            .checked_add(min_size)
            .ok_or(PackwiseError::LimitExceeded {
                required: u64::MAX,
                limit,
            })?;
        if cells > limit {
            return Err(PackwiseError::LimitExceeded {
                required: cells,
                limit,
            });
        }
        let horizon = cells - 1;

        // Any denomination beyond the horizon is dominated: one such pack
        // already overshoots more than the all-smallest plan.
        let descending: Vec<u64> = denominations
            .iter()
            .rev()
            .copied()
            .filter(|&size| size <= horizon)
            .collect();
        debug!(
            items_count,
            denominations = descending.len(),
            horizon,
            "allocating"
        );

        let plan = self.solve(&descending, items_count, cells as usize)?;
        debug!(
            total = plan.total_items(),
            packs = plan.pack_count(),
            overshoot = plan.overshoot(items_count),
            "plan computed"
        );
        Ok(plan)
    }

    /// Dense DP over totals `0..cells`, then reconstruction.
    ///
    /// `packs[t]` is the fewest packs attaining exactly `t` items;
    /// `last_pack[t]` records the denomination last added to reach `t`.
    /// Denominations are visited largest-first with strict improvement
    /// only, so on equal pack counts the larger denomination is kept.
    fn solve(&self, descending: &[u64], items_count: u64, cells: usize) -> Result<FulfillmentPlan> {
        // Pack counts never exceed the cell count, which the configured
        // limit keeps far below the u32 sentinel.
        let mut packs = vec![UNREACHABLE; cells];
        let mut last_pack = vec![0u64; cells];
        packs[0] = 0;

        for total in 1..cells {
            let mut best = UNREACHABLE;
            let mut chosen = 0u64;
            for &size in descending {
                let size = size as usize;
                if size > total {
                    continue;
                }
                let prev = packs[total - size];
                if prev != UNREACHABLE && prev + 1 < best {
                    best = prev + 1;
                    chosen = size as u64;
                }
            }
            packs[total] = best;
            last_pack[total] = chosen;
        }

        let first_wanted = items_count as usize;
        let total = (first_wanted..cells)
            .find(|&t| packs[t] != UNREACHABLE)
            .ok_or_else(|| {
                PackwiseError::Internal("no attainable total within horizon".to_string())
            })?;
        trace!(total, packs = packs[total], "first reachable total found");

        let mut plan = FulfillmentPlan::new();
        let mut remaining = total;
        while remaining > 0 {
            let size = last_pack[remaining];
            plan.add_packs(size, 1);
            remaining -= size as usize;
        }
        Ok(plan)
    }
}
