//! Record counts per collection.

use tracing::info;

use dresshaus_core::{Order, OtpRecord, Product, User, UserCart};
use dresshaus_server::store::JsonStore;

use super::CliError;

/// Print record counts for every collection in the data directory.
///
/// # Errors
///
/// Returns a store error if the data directory cannot be created.
pub fn collections(data_dir: &str) -> Result<(), CliError> {
    let store = JsonStore::new(data_dir);
    store.ensure_data_dir()?;

    let users: Vec<User> = store.load();
    let products: Vec<Product> = store.load();
    let carts: Vec<UserCart> = store.load();
    let orders: Vec<Order> = store.load();
    let otps: Vec<OtpRecord> = store.load();

    let cart_items: usize = carts.iter().map(|c| c.items.len()).sum();

    info!("Collection statistics ({data_dir})");
    info!("  users:    {}", users.len());
    info!("  products: {}", products.len());
    info!("  carts:    {} ({cart_items} items)", carts.len());
    info!("  orders:   {}", orders.len());
    info!("  otps:     {}", otps.len());

    Ok(())
}
