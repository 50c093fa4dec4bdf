//! End-to-end walkthrough: seed a catalog, create orders, resize a pack.
//!
//! Run with logging enabled:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example quickstart
//! ```

use packwise::prelude::*;

fn main() -> Result<(), PackwiseError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let service = InventoryService::new(EngineConfig::default());
    for size in [250, 500, 1000, 2000, 5000] {
        service.add_pack_size(size)?;
    }

    for items_count in [1, 250, 251, 501, 12_001] {
        let order = service.create_order(items_count)?;
        println!(
            "order #{}: {} items -> {} (total {}, overshoot {})",
            order.id,
            order.items_count,
            order.pack_setup,
            order.pack_setup.total_items(),
            order.pack_setup.overshoot(order.items_count),
        );
    }

    // Resize the smallest pack; existing orders keep their plans.
    let smallest = service
        .list_pack_sizes()
        .into_iter()
        .min_by_key(|p| p.size)
        .expect("catalog was just seeded");
    service.update_pack_size(smallest.id, 300)?;
    let order = service.create_order(251)?;
    println!(
        "after resize, 251 items -> {} (total {})",
        order.pack_setup,
        order.pack_setup.total_items(),
    );

    Ok(())
}
