//! Tests for the allocation engine.

use packwise_config::AllocatorConfig;
use packwise_core::{FulfillmentPlan, PackwiseError};
use packwise_test::{
    assert_valid_plan, reference_allocate, AWKWARD_CATALOG, PRIME_CATALOG, STANDARD_CATALOG,
};

use crate::Allocator;

fn plan_of(entries: &[(u64, u64)]) -> FulfillmentPlan {
    FulfillmentPlan::from_entries(entries.iter().copied())
}

#[test]
fn one_item_ships_the_smallest_pack() {
    let plan = Allocator::default()
        .allocate(&STANDARD_CATALOG, 1)
        .unwrap();
    assert_eq!(plan, plan_of(&[(250, 1)]));
}

#[test]
fn exact_request_ships_exactly() {
    let plan = Allocator::default()
        .allocate(&STANDARD_CATALOG, 250)
        .unwrap();
    assert_eq!(plan, plan_of(&[(250, 1)]));
    assert_eq!(plan.overshoot(250), 0);
}

#[test]
fn tie_on_total_prefers_fewer_packs() {
    // 500x1 and 250x2 both total 500; the single pack wins.
    let plan = Allocator::default()
        .allocate(&STANDARD_CATALOG, 251)
        .unwrap();
    assert_eq!(plan, plan_of(&[(500, 1)]));
}

#[test]
fn minimal_overshoot_beats_single_larger_pack() {
    // 1000x1 overshoots to 1000; 500+250 reaches 750.
    let plan = Allocator::default()
        .allocate(&STANDARD_CATALOG, 501)
        .unwrap();
    assert_eq!(plan, plan_of(&[(500, 1), (250, 1)]));
}

#[test]
fn multi_denomination_composition() {
    let plan = Allocator::default()
        .allocate(&STANDARD_CATALOG, 12_001)
        .unwrap();
    assert_eq!(plan, plan_of(&[(5000, 2), (2000, 1), (250, 1)]));
    assert_valid_plan(&plan, &STANDARD_CATALOG, 12_001);
}

#[test]
fn awkward_sizes_where_greedy_fails() {
    // Greedy largest-first ships 9+4 = 13 items; the optimum is 6+6 = 12.
    let plan = Allocator::default().allocate(&AWKWARD_CATALOG, 11).unwrap();
    assert_eq!(plan, plan_of(&[(6, 2)]));
}

#[test]
fn single_oversized_pack_covers_small_request() {
    let plan = Allocator::default().allocate(&[5000], 1).unwrap();
    assert_eq!(plan, plan_of(&[(5000, 1)]));
}

#[test]
fn tertiary_tie_break_prefers_larger_denominations() {
    // 4+4 and 5+3 both total 8 with two packs; the plan containing the
    // larger denomination is returned.
    let plan = Allocator::default().allocate(&[3, 4, 5], 8).unwrap();
    assert_eq!(plan, plan_of(&[(5, 1), (3, 1)]));
}

#[test]
fn duplicates_merge_into_one_denomination() {
    let allocator = Allocator::default();
    let deduped = allocator.allocate(&[500, 250], 501).unwrap();
    let duplicated = allocator.allocate(&[250, 500, 500, 250, 250], 501).unwrap();
    assert_eq!(deduped, duplicated);
}

#[test]
fn input_order_does_not_change_the_result() {
    let allocator = Allocator::default();
    let forward = allocator.allocate(&STANDARD_CATALOG, 12_001).unwrap();
    let reversed: Vec<u64> = STANDARD_CATALOG.iter().rev().copied().collect();
    assert_eq!(allocator.allocate(&reversed, 12_001).unwrap(), forward);
}

#[test]
fn allocation_is_deterministic() {
    let allocator = Allocator::default();
    let first = allocator.allocate(&AWKWARD_CATALOG, 37).unwrap();
    for _ in 0..10 {
        assert_eq!(allocator.allocate(&AWKWARD_CATALOG, 37).unwrap(), first);
    }
}

#[test]
fn zero_items_is_invalid() {
    let err = Allocator::default()
        .allocate(&STANDARD_CATALOG, 0)
        .unwrap_err();
    assert_eq!(err, PackwiseError::InvalidRequest(0));
}

#[test]
fn empty_catalog_has_no_plan() {
    let err = Allocator::default().allocate(&[], 100).unwrap_err();
    assert_eq!(err, PackwiseError::NoPacksAvailable);
}

#[test]
fn zero_size_is_invalid() {
    let err = Allocator::default().allocate(&[250, 0], 100).unwrap_err();
    assert_eq!(err, PackwiseError::InvalidSize(0));
}

#[test]
fn search_bound_is_enforced() {
    let allocator = Allocator::new(AllocatorConfig { max_dp_cells: 100 });
    let err = allocator.allocate(&[250], 500).unwrap_err();
    assert_eq!(
        err,
        PackwiseError::LimitExceeded {
            required: 750,
            limit: 100
        }
    );
    // The same request passes once the bound allows it.
    let allocator = Allocator::new(AllocatorConfig { max_dp_cells: 750 });
    assert!(allocator.allocate(&[250], 500).is_ok());
}

#[test]
fn matches_reference_exhaustively_on_small_catalogs() {
    let allocator = Allocator::default();
    let catalogs: [&[u64]; 4] = [&AWKWARD_CATALOG, &PRIME_CATALOG, &[2, 3], &[1, 6, 10]];
    for catalog in catalogs {
        for items_count in 1..=60 {
            let plan = allocator.allocate(catalog, items_count).unwrap();
            assert_valid_plan(&plan, catalog, items_count);
        }
    }
}

#[test]
fn matches_reference_on_the_standard_catalog() {
    let allocator = Allocator::default();
    for items_count in [1, 249, 250, 251, 499, 500, 501, 750, 751, 1000, 12_001] {
        let plan = allocator.allocate(&STANDARD_CATALOG, items_count).unwrap();
        assert_valid_plan(&plan, &STANDARD_CATALOG, items_count);
    }
}

#[test]
fn no_attainable_total_between_request_and_plan() {
    // Minimal overshoot restated directly: for every total strictly
    // between the request and the returned total, the reference finds no
    // exact combination.
    let allocator = Allocator::default();
    for items_count in 1..=40 {
        let plan = allocator.allocate(&AWKWARD_CATALOG, items_count).unwrap();
        let (optimal_total, _) = reference_allocate(&AWKWARD_CATALOG, items_count).unwrap();
        assert_eq!(plan.total_items(), optimal_total);
    }
}
