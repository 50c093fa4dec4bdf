//! Order-management service for Packwise.
//!
//! This crate owns the two stateful collections of the system:
//! - [`CatalogStore`]: the pack sizes on offer, mutation serialized
//!   through a single mutex so every snapshot is fully applied
//! - [`InventoryService`]: catalog plus order log plus the pure
//!   allocator, implementing the external call contract (list pack
//!   sizes, add/update a pack size, create an order, list orders)
//!
//! Logging levels:
//! - **INFO**: Order creation with its computed plan
//! - **DEBUG**: Catalog mutations

pub mod catalog;
pub mod service;

pub use catalog::CatalogStore;
pub use service::InventoryService;
