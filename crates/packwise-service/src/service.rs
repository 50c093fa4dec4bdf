//! The order-management service.

use std::sync::{Arc, Mutex};

use packwise_allocator::Allocator;
use packwise_config::EngineConfig;
use packwise_core::{Order, OrderId, PackId, PackSize, PackwiseError, Result};
use tracing::info;

use crate::catalog::CatalogStore;

#[derive(Debug, Default)]
struct OrderLog {
    orders: Vec<Order>,
    next_id: u64,
}

/// The surrounding service the allocator is consumed by: owns the
/// catalog, the order log, and a pure [`Allocator`].
///
/// Orders are immutable once created; the allocator runs against a
/// catalog snapshot taken under one lock acquisition and no lock is held
/// while it computes. Cloning shares the underlying state.
///
/// # Examples
///
/// ```
/// use packwise_config::EngineConfig;
/// use packwise_service::InventoryService;
///
/// let service = InventoryService::new(EngineConfig::default());
/// for size in [250, 500, 1000, 2000, 5000] {
///     service.add_pack_size(size).unwrap();
/// }
///
/// let order = service.create_order(12_001).unwrap();
/// assert_eq!(order.pack_setup.to_string(), "5000x2, 2000x1, 250x1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InventoryService {
    catalog: CatalogStore,
    orders: Arc<Mutex<OrderLog>>,
    allocator: Allocator,
}

impl InventoryService {
    /// Creates an empty service from an engine configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            catalog: CatalogStore::new(config.catalog),
            orders: Arc::new(Mutex::new(OrderLog::default())),
            allocator: Allocator::new(config.allocator),
        }
    }

    /// The underlying catalog store.
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Lists all pack sizes in insertion order.
    pub fn list_pack_sizes(&self) -> Vec<PackSize> {
        self.catalog.list()
    }

    /// Adds a pack size to the catalog.
    pub fn add_pack_size(&self, size: i64) -> Result<PackSize> {
        self.catalog.add(size)
    }

    /// Resizes an existing pack size.
    pub fn update_pack_size(&self, id: PackId, new_size: i64) -> Result<PackSize> {
        self.catalog.update(id, new_size)
    }

    /// Creates an order: allocates packs for `items_count` against the
    /// current catalog snapshot, persists the order, and returns it.
    ///
    /// A failed allocation leaves both the catalog and the order log
    /// untouched.
    ///
    /// # Errors
    ///
    /// - [`PackwiseError::InvalidRequest`] when `items_count <= 0`
    /// - Any allocation error from [`Allocator::allocate`]
    pub fn create_order(&self, items_count: i64) -> Result<Order> {
        if items_count <= 0 {
            return Err(PackwiseError::InvalidRequest(items_count));
        }
        let items_count = items_count as u64;

        let sizes = self.catalog.snapshot_sizes();
        let plan = self.allocator.allocate(&sizes, items_count)?;

        let mut log = self.orders.lock().unwrap();
        let order = Order::new(OrderId::new(log.next_id), items_count, plan);
        log.next_id += 1;
        log.orders.push(order.clone());
        info!(id = %order.id, items_count, pack_setup = %order.pack_setup, "order created");
        Ok(order)
    }

    /// Lists all orders in creation order.
    pub fn list_orders(&self) -> Vec<Order> {
        self.orders.lock().unwrap().orders.clone()
    }
}
