//! Pack size catalog entries.

use std::fmt;

/// Stable identifier of a catalog entry.
///
/// Assigned monotonically by the owning store at creation and never
/// reused, even after a pack size is resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PackId(u64);

impl PackId {
    /// Creates an id from its raw value.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        PackId(raw)
    }

    /// Returns the raw id value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A denomination offered by the catalog: one indivisible pack holding
/// `size` items.
///
/// Invariant: `size > 0`, enforced by the catalog at creation and update.
/// The id is immutable; only the size can change.
///
/// # Example
///
/// ```
/// use packwise_core::{PackId, PackSize};
///
/// let pack = PackSize::new(PackId::new(1), 250);
/// assert_eq!(pack.size, 250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackSize {
    /// Stable identifier, assigned at creation.
    pub id: PackId,
    /// Number of items one pack of this kind holds.
    pub size: u64,
}

impl PackSize {
    /// Creates a new catalog entry.
    pub fn new(id: PackId, size: u64) -> Self {
        Self { id, size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_id_display_and_value() {
        let id = PackId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn pack_size_fields() {
        let pack = PackSize::new(PackId::new(3), 500);
        assert_eq!(pack.id, PackId::new(3));
        assert_eq!(pack.size, 500);
    }
}
