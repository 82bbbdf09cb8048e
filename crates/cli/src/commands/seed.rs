//! Seed the product catalog with demo data.

use tracing::info;

use dresshaus_core::{Category, Product};
use dresshaus_server::services::{CatalogService, NewProduct};
use dresshaus_server::store::JsonStore;

use super::CliError;

/// Seed the catalog with demo products.
///
/// Refuses to touch a non-empty catalog unless `force` is set, in which
/// case the collection is replaced wholesale.
///
/// # Errors
///
/// Returns `CliError::NotEmpty` if products exist and `force` is false, or
/// a store error if the data directory cannot be written.
pub fn catalog(data_dir: &str, force: bool) -> Result<(), CliError> {
    let store = JsonStore::new(data_dir);
    store.ensure_data_dir()?;

    let existing: Vec<Product> = store.load();
    if !existing.is_empty() {
        if !force {
            return Err(CliError::NotEmpty("products", existing.len()));
        }
        info!(count = existing.len(), "replacing existing products");
        store.save::<Product>(&[])?;
    }

    let catalog = CatalogService::new(&store);
    let products = demo_products();
    let count = products.len();

    for fields in products {
        let product = catalog.create(fields)?;
        info!(id = %product.id, name = %product.name, "seeded product");
    }

    info!(count, data_dir, "catalog seeded");
    Ok(())
}

fn demo_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "Floral Midi Dress".to_owned(),
            category: Category::Women,
            price: 59.99,
            description: "Lightweight floral print midi with a tiered skirt.".to_owned(),
            color: "blue".to_owned(),
            size: vec!["S".to_owned(), "M".to_owned(), "L".to_owned()],
            image: "/images/floral-midi.jpg".to_owned(),
            stock: 25,
        },
        NewProduct {
            name: "Classic Linen Shirt".to_owned(),
            category: Category::Men,
            price: 39.99,
            description: "Breathable linen shirt with a relaxed fit.".to_owned(),
            color: "white".to_owned(),
            size: vec!["M".to_owned(), "L".to_owned(), "XL".to_owned()],
            image: "/images/linen-shirt.jpg".to_owned(),
            stock: 40,
        },
        NewProduct {
            name: "Twirl Party Frock".to_owned(),
            category: Category::Children,
            price: 24.99,
            description: "Full-circle frock that twirls, with a satin bow.".to_owned(),
            color: "pink".to_owned(),
            size: vec!["2-3Y".to_owned(), "4-5Y".to_owned(), "6-7Y".to_owned()],
            image: "/images/party-frock.jpg".to_owned(),
            stock: 18,
        },
        NewProduct {
            name: "Evening Wrap Dress".to_owned(),
            category: Category::Women,
            price: 89.99,
            description: "Satin wrap dress with a self-tie waist.".to_owned(),
            color: "emerald".to_owned(),
            size: vec!["XS".to_owned(), "S".to_owned(), "M".to_owned(), "L".to_owned()],
            image: "/images/evening-wrap.jpg".to_owned(),
            stock: 12,
        },
        NewProduct {
            name: "Everyday Denim Pinafore".to_owned(),
            category: Category::Children,
            price: 29.99,
            description: "Sturdy denim pinafore with adjustable straps.".to_owned(),
            color: "indigo".to_owned(),
            size: vec!["4-5Y".to_owned(), "6-7Y".to_owned(), "8-9Y".to_owned()],
            image: "/images/denim-pinafore.jpg".to_owned(),
            stock: 30,
        },
    ]
}
