//! Exhaustive-search reference for allocation optima.
//!
//! Derives the optimal `(total_items, pack_count)` pair by enumeration
//! rather than dynamic programming, so allocator tests can check the
//! engine's answers against an independently computed optimum. Only
//! suitable for small inputs; the search is exponential in the number of
//! denominations.

use std::collections::BTreeSet;

use packwise_core::FulfillmentPlan;

/// Returns the optimal `(total_items, pack_count)` for the request, or
/// `None` when no plan exists (empty catalog or zero request).
///
/// The optimum is defined exactly as the engine's policy: smallest
/// attainable total at or above `items_count`, then fewest packs
/// achieving that total.
///
/// # Example
///
/// ```
/// use packwise_test::reference_allocate;
///
/// assert_eq!(reference_allocate(&[250, 500], 501), Some((750, 2)));
/// assert_eq!(reference_allocate(&[], 10), None);
/// ```
pub fn reference_allocate(sizes: &[u64], items_count: u64) -> Option<(u64, u64)> {
    if items_count == 0 {
        return None;
    }
    let denominations: BTreeSet<u64> = sizes.iter().copied().filter(|&s| s > 0).collect();
    let min_size = *denominations.iter().next()?;
    let descending: Vec<u64> = denominations.iter().rev().copied().collect();

    // The all-smallest-packs plan proves the minimal attainable total
    // lies below items_count + min_size.
    for total in items_count..items_count + min_size {
        if let Some(packs) = fewest_packs_exact(&descending, total) {
            return Some((total, packs));
        }
    }
    None
}

/// Fewest packs summing to exactly `total`, by enumerating counts of
/// each denomination in turn.
fn fewest_packs_exact(denominations: &[u64], total: u64) -> Option<u64> {
    if total == 0 {
        return Some(0);
    }
    let (&first, rest) = denominations.split_first()?;
    let mut best: Option<u64> = None;
    for count in 0..=total / first {
        if let Some(packs) = fewest_packs_exact(rest, total - count * first) {
            let candidate = packs + count;
            best = Some(best.map_or(candidate, |b| b.min(candidate)));
        }
    }
    best
}

/// Asserts that `plan` is a well-formed optimal answer for the request:
/// only catalog sizes, no under-fulfillment, and totals matching the
/// reference optimum.
///
/// # Panics
///
/// Panics with a descriptive message when any property fails.
pub fn assert_valid_plan(plan: &FulfillmentPlan, sizes: &[u64], items_count: u64) {
    for (size, count) in plan.iter() {
        assert!(
            sizes.contains(&size),
            "plan uses size {size} not present in catalog {sizes:?}"
        );
        assert!(count > 0, "plan stores a zero count for size {size}");
    }
    assert!(
        plan.total_items() >= items_count,
        "plan under-fulfills: {} < {items_count}",
        plan.total_items()
    );

    let (optimal_total, optimal_packs) = reference_allocate(sizes, items_count)
        .unwrap_or_else(|| panic!("reference found no plan for {items_count} over {sizes:?}"));
    assert_eq!(
        plan.total_items(),
        optimal_total,
        "plan total is not the minimal overshoot for {items_count} over {sizes:?}"
    );
    assert_eq!(
        plan.pack_count(),
        optimal_packs,
        "plan uses more packs than necessary for {items_count} over {sizes:?}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogs::{AWKWARD_CATALOG, STANDARD_CATALOG};

    #[test]
    fn exact_match_single_pack() {
        assert_eq!(reference_allocate(&STANDARD_CATALOG, 250), Some((250, 1)));
    }

    #[test]
    fn tie_on_total_resolved_by_pack_count() {
        // 500x1 and 250x2 both total 500; one pack wins.
        assert_eq!(reference_allocate(&STANDARD_CATALOG, 251), Some((500, 1)));
    }

    #[test]
    fn awkward_sizes_beat_greedy() {
        // Greedy largest-first gives 9+4 = 13 items; 6+6 = 12 is optimal.
        assert_eq!(reference_allocate(&AWKWARD_CATALOG, 11), Some((12, 2)));
    }

    #[test]
    fn duplicates_and_zeros_are_ignored() {
        assert_eq!(reference_allocate(&[250, 250, 0], 300), Some((500, 2)));
    }

    #[test]
    fn no_plan_for_degenerate_inputs() {
        assert_eq!(reference_allocate(&[], 10), None);
        assert_eq!(reference_allocate(&[0], 10), None);
        assert_eq!(reference_allocate(&STANDARD_CATALOG, 0), None);
    }
}
