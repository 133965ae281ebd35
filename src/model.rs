//! Core domain types for the inventory ledger.

use crate::Money;

/// A tracked product: quantity on hand plus its unit prices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique product name, the catalog key.
    pub name: String,
    /// Units on hand. Never goes negative.
    pub quantity: u32,
    /// Unit cost to acquire stock.
    pub purchase_price: Money,
    /// Unit price charged to customers.
    pub sale_price: Money,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        purchase_price: Money,
        sale_price: Money,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            purchase_price,
            sale_price,
        }
    }
}

/// The set of tracked products, unique by name.
///
/// Backed by a `Vec` rather than a map so snapshots preserve insertion
/// order, the way the persisted sheet preserves row order. Catalogs are
/// shop-sized, so name lookups are linear scans.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.name == name)
    }

    /// Appends a product. Callers ensure the name is not already present.
    pub fn insert(&mut self, product: Product) {
        debug_assert!(self.get(&product.name).is_none());
        self.products.push(product);
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
