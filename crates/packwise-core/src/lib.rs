//! Packwise Core - Core types for the pack-allocation engine
//!
//! This crate provides the fundamental types shared by the Packwise crates:
//! - Identifier newtypes and catalog entries (`PackId`, `PackSize`)
//! - Order records (`OrderId`, `Order`)
//! - Fulfillment plans mapping denominations to pack counts
//! - The error taxonomy for allocation and catalog operations

pub mod error;
pub mod order;
pub mod pack;
pub mod plan;

pub use error::{PackwiseError, Result};
pub use order::{Order, OrderId};
pub use pack::{PackId, PackSize};
pub use plan::FulfillmentPlan;
