use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A recorded sale.
///
/// `unit_price` is a snapshot of the product price at the time of sale;
/// `total` is always `unit_price * quantity`. Client and product ids are
/// lookups, not enforced references: deleting either side later leaves the
/// sale pointing at nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: u32,
    pub client_id: u32,
    pub product_id: u32,
    pub quantity: u32,
    pub unit_price: f64,
    pub total: f64,
}

impl Record for Sale {
    const COLLECTION: &'static str = "sales";

    fn id(&self) -> u32 {
        self.id
    }
}
