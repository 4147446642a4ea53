use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A goods supplier, keyed by a 14-digit business tax id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
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

impl Record for Supplier {
    const COLLECTION: &'static str = "suppliers";

    fn id(&self) -> u32 {
        self.id
    }
}

/// Sparse field overrides for updating a supplier. `None` keeps the
/// current value.
#[derive(Debug, Default)]
pub struct SupplierPatch {
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

impl SupplierPatch {
    /// Apply the present fields onto an existing record.
    pub fn apply(self, supplier: &mut Supplier) {
        if let Some(name) = self.name {
            supplier.name = name;
        }
        if let Some(tax_id) = self.tax_id {
            supplier.tax_id = tax_id;
        }
        if let Some(phone) = self.phone {
            supplier.phone = phone;
        }
        if let Some(email) = self.email {
            supplier.email = email;
        }
        if let Some(country) = self.country {
            supplier.country = country;
        }
        if let Some(state) = self.state {
            supplier.state = state;
        }
        if let Some(city) = self.city {
            supplier.city = city;
        }
        if let Some(district) = self.district {
            supplier.district = district;
        }
        if let Some(street) = self.street {
            supplier.street = street;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Supplier {
        Supplier {
            id: 1,
            name: "ACME SUPPLIES".to_string(),
            tax_id: "12.345.678/0001-95".to_string(),
            phone: "(11) 4002-8922".to_string(),
            email: "sales@acme.example".to_string(),
            country: "BRAZIL".to_string(),
            state: "SP".to_string(),
            city: "SAO PAULO".to_string(),
            district: "CENTRO".to_string(),
            street: "RUA UM, 100".to_string(),
        }
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let mut supplier = sample();
        let patch = SupplierPatch {
            phone: Some("(11) 98888-0000".to_string()),
            city: Some("CAMPINAS".to_string()),
            ..Default::default()
        };

        patch.apply(&mut supplier);

        assert_eq!(supplier.phone, "(11) 98888-0000");
        assert_eq!(supplier.city, "CAMPINAS");
        assert_eq!(supplier.name, "ACME SUPPLIES");
        assert_eq!(supplier.email, "sales@acme.example");
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut supplier = sample();
        SupplierPatch::default().apply(&mut supplier);
        assert_eq!(supplier, sample());
    }
}
