//! The pack-size catalog store.

use std::sync::{Arc, Mutex};

use packwise_config::CatalogConfig;
use packwise_core::{PackId, PackSize, PackwiseError, Result};
use tracing::debug;

#[derive(Debug, Default)]
struct CatalogInner {
    packs: Vec<PackSize>,
    next_id: u64,
}

/// Insertion-ordered store of the denominations currently on offer.
///
/// All mutation goes through one mutex, so `list` and `snapshot_sizes`
/// always observe a fully applied state and an in-flight allocation is
/// computed against one consistent catalog. Ids are assigned
/// monotonically and never reused. Cloning the store shares the
/// underlying state.
///
/// # Examples
///
/// ```
/// use packwise_config::CatalogConfig;
/// use packwise_service::CatalogStore;
///
/// let catalog = CatalogStore::new(CatalogConfig::default());
/// let pack = catalog.add(250).unwrap();
/// assert_eq!(pack.size, 250);
/// assert_eq!(catalog.snapshot_sizes(), vec![250]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    inner: Arc<Mutex<CatalogInner>>,
    config: CatalogConfig,
}

impl CatalogStore {
    /// Creates an empty store with the given behaviour switches.
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CatalogInner::default())),
            config,
        }
    }

    /// Adds a denomination and returns the stored entry.
    ///
    /// # Errors
    ///
    /// - [`PackwiseError::InvalidSize`] when `size <= 0`
    /// - [`PackwiseError::DuplicateSize`] when uniqueness is enforced and
    ///   the value already exists
    /// - [`PackwiseError::LimitExceeded`] when the configured entry cap
    ///   is reached
    ///
    /// On error the store is left unchanged.
    pub fn add(&self, size: i64) -> Result<PackSize> {
        if size <= 0 {
            return Err(PackwiseError::InvalidSize(size));
        }
        let size = size as u64;
        let mut inner = self.inner.lock().unwrap();
        if let Some(limit) = self.config.max_pack_sizes {
            let required = inner.packs.len() as u64 + 1;
            if required > limit {
                return Err(PackwiseError::LimitExceeded { required, limit });
            }
        }
        if self.config.enforce_unique_sizes && inner.packs.iter().any(|p| p.size == size) {
            return Err(PackwiseError::DuplicateSize(size));
        }
        let pack = PackSize::new(PackId::new(inner.next_id), size);
        inner.next_id += 1;
        inner.packs.push(pack);
        debug!(id = %pack.id, size, "pack size added");
        Ok(pack)
    }

    /// Resizes an existing denomination in place; the id stays put.
    ///
    /// # Errors
    ///
    /// - [`PackwiseError::InvalidSize`] when `new_size <= 0`
    /// - [`PackwiseError::NotFound`] when no entry has the given id
    /// - [`PackwiseError::DuplicateSize`] when uniqueness is enforced and
    ///   another entry already has the value
    ///
    /// On error the store is left unchanged.
    pub fn update(&self, id: PackId, new_size: i64) -> Result<PackSize> {
        if new_size <= 0 {
            return Err(PackwiseError::InvalidSize(new_size));
        }
        let new_size = new_size as u64;
        let mut inner = self.inner.lock().unwrap();
        if self.config.enforce_unique_sizes
            && inner.packs.iter().any(|p| p.id != id && p.size == new_size)
        {
            return Err(PackwiseError::DuplicateSize(new_size));
        }
        let pack = inner
            .packs
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PackwiseError::NotFound(id))?;
        pack.size = new_size;
        let updated = *pack;
        debug!(id = %updated.id, size = updated.size, "pack size updated");
        Ok(updated)
    }

    /// All entries in insertion order, as one consistent snapshot.
    pub fn list(&self) -> Vec<PackSize> {
        self.inner.lock().unwrap().packs.clone()
    }

    /// The size values only, in insertion order, taken under a single
    /// lock acquisition.
    pub fn snapshot_sizes(&self) -> Vec<u64> {
        self.inner.lock().unwrap().packs.iter().map(|p| p.size).collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().packs.len()
    }

    /// True when the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
