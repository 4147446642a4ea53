//! Checkout - recording a sale, the one workflow that touches two
//! collections under a correctness constraint.
//!
//! The requested quantity is bounded by the product's remaining stock, and
//! the stock decrement lands in the same commit as the new sale record, so
//! the store can never hold one without the other.

use std::fmt;

use tracing::info;

use crate::commit::CommitExt;
use crate::domain::{Client, Product, Sale};
use crate::store::{next_id, RecordsExt, Store, StoreError};

/// Outcome summary of a recorded sale, for the confirmation message.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleReceipt {
    pub sale: Sale,
    pub client_name: String,
    pub product_name: String,
}

/// Why a sale could not be recorded.
#[derive(Debug, Clone, PartialEq)]
pub enum SaleError {
    UnknownClient(u32),
    UnknownProduct(u32),
    ZeroQuantity,
    InsufficientStock { requested: u32, available: u32 },
    Store(StoreError),
}

impl fmt::Display for SaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaleError::UnknownClient(id) => write!(f, "no client with id {}", id),
            SaleError::UnknownProduct(id) => write!(f, "no product with id {}", id),
            SaleError::ZeroQuantity => write!(f, "quantity must be at least 1"),
            SaleError::InsufficientStock {
                requested,
                available,
            } => write!(
                f,
                "only {} in stock (requested {})",
                available, requested
            ),
            SaleError::Store(err) => write!(f, "store error: {}", err),
        }
    }
}

impl std::error::Error for SaleError {}

impl From<StoreError> for SaleError {
    fn from(err: StoreError) -> Self {
        SaleError::Store(err)
    }
}

/// Record a sale: cross-check the client and product references, bound the
/// quantity by the remaining stock, then land the stock decrement and the
/// new sale record in one commit.
///
/// Any failed validation leaves both collections untouched.
pub fn record_sale<S: Store>(
    store: &S,
    client_id: u32,
    product_id: u32,
    quantity: u32,
) -> Result<SaleReceipt, SaleError> {
    let clients = store.records::<Client>().load()?;
    let client = clients
        .iter()
        .find(|client| client.id == client_id)
        .ok_or(SaleError::UnknownClient(client_id))?;

    let mut products = store.records::<Product>().load()?;
    let product = products
        .iter_mut()
        .find(|product| product.id == product_id)
        .ok_or(SaleError::UnknownProduct(product_id))?;

    if quantity == 0 {
        return Err(SaleError::ZeroQuantity);
    }
    if quantity > product.stock {
        return Err(SaleError::InsufficientStock {
            requested: quantity,
            available: product.stock,
        });
    }

    let mut sales = store.records::<Sale>().load()?;
    let sale = Sale {
        id: next_id(&sales),
        client_id,
        product_id,
        quantity,
        unit_price: product.unit_price,
        total: product.unit_price * f64::from(quantity),
    };
    product.stock -= quantity;

    let receipt = SaleReceipt {
        sale: sale.clone(),
        client_name: client.name.clone(),
        product_name: product.name.clone(),
    };
    sales.push(sale);

    store
        .commit()
        .collection(&products)?
        .collection(&sales)?
        .write()?;

    info!(
        sale = receipt.sale.id,
        client = client_id,
        product = product_id,
        quantity,
        total = receipt.sale.total,
        "sale recorded"
    );

    Ok(receipt)
}
