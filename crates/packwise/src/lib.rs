//! Packwise - pack allocation for order management.
//!
//! Given a catalog of pack sizes and a requested item count, Packwise
//! computes the fulfillment plan that never under-ships, minimizes items
//! shipped, and then minimizes the number of packs.
//!
//! # Example
//!
//! ```rust
//! use packwise::prelude::*;
//!
//! let service = InventoryService::new(EngineConfig::default());
//! for size in [250, 500, 1000, 2000, 5000] {
//!     service.add_pack_size(size).unwrap();
//! }
//!
//! let order = service.create_order(501).unwrap();
//! assert_eq!(order.pack_setup.total_items(), 750);
//! assert_eq!(order.pack_setup.to_string(), "500x1, 250x1");
//! ```
//!
//! The engine alone, without the stateful service:
//!
//! ```rust
//! use packwise::Allocator;
//!
//! let plan = Allocator::default().allocate(&[250, 500], 251).unwrap();
//! assert_eq!(plan.to_string(), "500x1");
//! ```

// Core types
pub use packwise_core::{FulfillmentPlan, Order, OrderId, PackId, PackSize, PackwiseError, Result};

// Pure allocation engine
pub use packwise_allocator::Allocator;

// Stateful service layer
pub use packwise_service::{CatalogStore, InventoryService};

// Configuration
pub use packwise_config::{AllocatorConfig, CatalogConfig, ConfigError, EngineConfig};

pub mod prelude {
    pub use super::{
        Allocator, CatalogStore, EngineConfig, FulfillmentPlan, InventoryService, Order, PackId,
        PackSize, PackwiseError,
    };
}
