//! Product catalog service.
//!
//! CRUD over the `products` collection. New products get sequential
//! `p<N>` ids where `N` is one past the highest numeric suffix currently in
//! the catalog; deleting the highest-numbered product therefore lets the id
//! be reassigned to a later insert. Deletes never cascade to cart or order
//! items that reference the product.

use thiserror::Error;

use dresshaus_core::{Category, Product, ProductId};

use crate::store::{JsonStore, StoreError};

/// Errors from catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product with the requested id.
    #[error("Product not found")]
    NotFound,

    /// Persistence failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Fields for creating a product. All fields are required.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub description: String,
    pub color: String,
    pub size: Vec<String>,
    pub image: String,
    pub stock: u32,
}

/// Partial update; only supplied fields are applied.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub size: Option<Vec<String>>,
    pub image: Option<String>,
    pub stock: Option<u32>,
}

/// Service for product catalog operations.
pub struct CatalogService<'a> {
    store: &'a JsonStore,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Full catalog, unfiltered. Filtering is a client concern.
    #[must_use]
    pub fn list(&self) -> Vec<Product> {
        self.store.load()
    }

    /// Get a single product by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no product has the id.
    pub fn get(&self, id: &ProductId) -> Result<Product, CatalogError> {
        let products: Vec<Product> = self.store.load();
        products
            .into_iter()
            .find(|p| &p.id == id)
            .ok_or(CatalogError::NotFound)
    }

    /// Create a product with the next sequential id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Store` if the collection cannot be saved.
    pub fn create(&self, fields: NewProduct) -> Result<Product, CatalogError> {
        let mut products: Vec<Product> = self.store.load();

        let max_id = products.iter().filter_map(Product::id_number).max().unwrap_or(0);
        let product = Product {
            id: ProductId::new(format!("p{}", max_id + 1)),
            category: fields.category,
            name: fields.name,
            price: fields.price,
            image: fields.image,
            description: fields.description,
            color: fields.color,
            size: fields.size,
            stock: fields.stock,
        };

        products.push(product.clone());
        self.store.save(&products)?;

        Ok(product)
    }

    /// Apply a partial update to a product.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no product has the id.
    pub fn update(&self, id: &ProductId, patch: ProductPatch) -> Result<Product, CatalogError> {
        let mut products: Vec<Product> = self.store.load();
        let product = products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or(CatalogError::NotFound)?;

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(color) = patch.color {
            product.color = color;
        }
        if let Some(size) = patch.size {
            product.size = size;
        }
        if let Some(image) = patch.image {
            product.image = image;
        }
        if let Some(stock) = patch.stock {
            product.stock = stock;
        }

        let updated = product.clone();
        self.store.save(&products)?;

        Ok(updated)
    }

    /// Delete a product. No cascade: existing cart and order items keep
    /// their snapshot of it.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no product has the id.
    pub fn delete(&self, id: &ProductId) -> Result<Product, CatalogError> {
        let mut products: Vec<Product> = self.store.load();
        let position = products
            .iter()
            .position(|p| &p.id == id)
            .ok_or(CatalogError::NotFound)?;

        let removed = products.remove(position);
        self.store.save(&products)?;

        Ok(removed)
    }

    /// Replace a product's stock count.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no product has the id.
    pub fn set_stock(&self, id: &ProductId, stock: u32) -> Result<Product, CatalogError> {
        self.update(
            id,
            ProductPatch {
                stock: Some(stock),
                ..ProductPatch::default()
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_owned(),
            category: Category::Women,
            price: 49.0,
            description: "A dress".to_owned(),
            color: "blue".to_owned(),
            size: vec!["M".to_owned()],
            image: "/images/x.jpg".to_owned(),
            stock: 5,
        }
    }

    fn service_in(dir: &tempfile::TempDir) -> JsonStore {
        JsonStore::new(dir.path())
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = service_in(&dir);
        let catalog = CatalogService::new(&store);

        let first = catalog.create(new_product("First")).unwrap();
        let second = catalog.create(new_product("Second")).unwrap();

        assert_eq!(first.id.as_str(), "p1");
        assert_eq!(second.id.as_str(), "p2");
    }

    #[test]
    fn test_create_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = service_in(&dir);
        let catalog = CatalogService::new(&store);

        let created = catalog.create(new_product("Round Trip")).unwrap();
        let fetched = catalog.get(&created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_id_reused_after_deleting_highest() {
        let dir = tempfile::tempdir().unwrap();
        let store = service_in(&dir);
        let catalog = CatalogService::new(&store);

        catalog.create(new_product("One")).unwrap();
        let second = catalog.create(new_product("Two")).unwrap();
        catalog.delete(&second.id).unwrap();

        let third = catalog.create(new_product("Three")).unwrap();
        assert_eq!(third.id.as_str(), "p2");
    }

    #[test]
    fn test_update_applies_only_supplied_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = service_in(&dir);
        let catalog = CatalogService::new(&store);

        let created = catalog.create(new_product("Original")).unwrap();
        let updated = catalog
            .update(
                &created.id,
                ProductPatch {
                    price: Some(99.5),
                    ..ProductPatch::default()
                },
            )
            .unwrap();

        assert!((updated.price - 99.5).abs() < f64::EPSILON);
        assert_eq!(updated.name, "Original");
        assert_eq!(updated.stock, 5);
    }

    #[test]
    fn test_double_delete_returns_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = service_in(&dir);
        let catalog = CatalogService::new(&store);

        let created = catalog.create(new_product("Doomed")).unwrap();
        assert!(catalog.delete(&created.id).is_ok());
        assert!(matches!(
            catalog.delete(&created.id),
            Err(CatalogError::NotFound)
        ));
    }

    #[test]
    fn test_set_stock() {
        let dir = tempfile::tempdir().unwrap();
        let store = service_in(&dir);
        let catalog = CatalogService::new(&store);

        let created = catalog.create(new_product("Stocked")).unwrap();
        let updated = catalog.set_stock(&created.id, 0).unwrap();
        assert_eq!(updated.stock, 0);
        assert_eq!(catalog.get(&created.id).unwrap().stock, 0);
    }
}
