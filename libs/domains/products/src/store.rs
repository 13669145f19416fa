//! Ordered in-memory product collection.
//!
//! The store itself is not synchronized; [`crate::InMemoryProductRepository`]
//! puts it behind a lock.

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};

#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Vec<Product>,
    /// Highest id ever handed out or loaded, so deleted ids are not reused
    last_id: u64,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing records. Ids are expected to be unique.
    pub fn with_products(products: Vec<Product>) -> Self {
        let last_id = products.iter().map(|p| p.id).max().unwrap_or(0);
        Self { products, last_id }
    }

    /// Snapshot of all products in insertion order.
    pub fn list(&self) -> Vec<Product> {
        self.products.clone()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get_by_id(&self, id: u64) -> ProductResult<Product> {
        let index = self.position(id)?;
        Ok(self.products[index].clone())
    }

    /// Appends a product under a fresh id and returns the stored record.
    pub fn add(&mut self, input: ProductInput) -> Product {
        let product = Product::from_input(self.next_id(), input);
        self.products.push(product.clone());
        product
    }

    /// Replaces every field except the id. The product keeps its position.
    pub fn update(&mut self, id: u64, input: ProductInput) -> ProductResult<Product> {
        let index = self.position(id)?;
        let product = Product::from_input(id, input);
        self.products[index] = product.clone();
        Ok(product)
    }

    /// Removes the product, keeping the relative order of the rest.
    pub fn delete(&mut self, id: u64) -> ProductResult<()> {
        let index = self.position(id)?;
        self.products.remove(index);
        Ok(())
    }

    fn position(&self, id: u64) -> ProductResult<usize> {
        self.products
            .iter()
            .position(|p| p.id == id)
            .ok_or(ProductError::NotFound(id))
    }

    fn next_id(&mut self) -> u64 {
        let max_existing = self.products.iter().map(|p| p.id).max().unwrap_or(0);
        self.last_id = self.last_id.max(max_existing) + 1;
        self.last_id
    }
}

/// The two demo records loaded when seeding is enabled.
///
/// Their SKUs do not satisfy the SKU rule; seeded records are inserted
/// directly and never validated.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Latte".to_string(),
            description: "Frothy milky coffee".to_string(),
            price: 2.45,
            sku: "abc323".to_string(),
        },
        Product {
            id: 2,
            name: "Espresso".to_string(),
            description: "Short and strong coffee without milk".to_string(),
            price: 1.99,
            sku: "fjd34".to_string(),
        },
    ]
}
