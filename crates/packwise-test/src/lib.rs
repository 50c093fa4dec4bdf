//! Shared test fixtures for Packwise crates.
//!
//! This crate provides catalogs and a brute-force reference allocator for
//! testing. It does NOT depend on `packwise-allocator`, so allocator tests
//! can compare against it without a circular dependency.
//!
//! - [`catalogs`] - Standard pack-size catalogs used across test suites
//! - [`reference`] - Exhaustive-search reference for allocation optima
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! packwise-test = { workspace = true }
//! ```

pub mod catalogs;
pub mod reference;

pub use catalogs::{AWKWARD_CATALOG, PRIME_CATALOG, STANDARD_CATALOG};
pub use reference::{assert_valid_plan, reference_allocate};
