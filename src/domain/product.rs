use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A sellable product with its remaining stock.
///
/// `supplier_id` points at the owning supplier; the reference is checked
/// for existence when the product is registered and never enforced after
/// that.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub unit_price: f64,
    pub stock: u32,
    pub supplier_id: u32,
}

impl Record for Product {
    const COLLECTION: &'static str = "products";

    fn id(&self) -> u32 {
        self.id
    }
}

/// Sparse field overrides for updating a product. `None` keeps the
/// current value.
#[derive(Debug, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub unit_price: Option<f64>,
    pub stock: Option<u32>,
    pub supplier_id: Option<u32>,
}

impl ProductPatch {
    /// Apply the present fields onto an existing record.
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(unit_price) = self.unit_price {
            product.unit_price = unit_price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(supplier_id) = self.supplier_id {
            product.supplier_id = supplier_id;
        }
    }
}
