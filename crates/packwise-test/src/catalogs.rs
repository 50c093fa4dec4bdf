//! Standard pack-size catalogs used across test suites.

/// The catalog the original inventory system shipped with.
pub const STANDARD_CATALOG: [u64; 5] = [250, 500, 1000, 2000, 5000];

/// Sizes that are not multiples of each other; greedy largest-first
/// produces wrong answers here (e.g. 11 items: greedy ships 9+4=13,
/// the optimum ships 6+6=12).
pub const AWKWARD_CATALOG: [u64; 3] = [4, 6, 9];

/// Coprime sizes with many near-misses, useful for exhaustive sweeps.
pub const PRIME_CATALOG: [u64; 3] = [3, 5, 7];
