mod checkout;
mod commit;
mod domain;
pub mod menu;
mod store;
mod validate;

pub use checkout::{record_sale, SaleError, SaleReceipt};
pub use commit::{CommitBuilder, CommitExt};
pub use domain::{Client, ClientPatch, Product, ProductPatch, Sale, Supplier, SupplierPatch};
pub use menu::Console;
pub use store::{
    next_id, InMemoryStore, JsonFileStore, Record, Records, RecordsExt, Store, StoreError,
};
pub use validate::{
    normalize_email, normalize_text, valid_business_tax_id, valid_email, valid_personal_tax_id,
    valid_phone,
};
