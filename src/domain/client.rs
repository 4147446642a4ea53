use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A client, keyed by an 11-digit personal tax id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: u32,
    pub name: String,
    pub tax_id: String,
    pub phone: String,
    pub email: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub district: String,
    pub street: String,
}

impl Record for Client {
    const COLLECTION: &'static str = "clients";

    fn id(&self) -> u32 {
        self.id
    }
}

/// Sparse field overrides for updating a client. `None` keeps the
/// current value.
#[derive(Debug, Default)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub tax_id: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub street: Option<String>,
}

impl ClientPatch {
    /// Apply the present fields onto an existing record.
    pub fn apply(self, client: &mut Client) {
        if let Some(name) = self.name {
            client.name = name;
        }
        if let Some(tax_id) = self.tax_id {
            client.tax_id = tax_id;
        }
        if let Some(phone) = self.phone {
            client.phone = phone;
        }
        if let Some(email) = self.email {
            client.email = email;
        }
        if let Some(country) = self.country {
            client.country = country;
        }
        if let Some(state) = self.state {
            client.state = state;
        }
        if let Some(city) = self.city {
            client.city = city;
        }
        if let Some(district) = self.district {
            client.district = district;
        }
        if let Some(street) = self.street {
            client.street = street;
        }
    }
}
