//! Domain records - the four collections the business keeps.

mod client;
mod product;
mod sale;
mod supplier;

pub use client::{Client, ClientPatch};
pub use product::{Product, ProductPatch};
pub use sale::Sale;
pub use supplier::{Supplier, SupplierPatch};
