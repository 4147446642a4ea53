//! Shared record builders for integration tests.

#![allow(dead_code)]

use stockbook::{Client, Product, Supplier};

pub fn supplier(id: u32, name: &str) -> Supplier {
    Supplier {
        id,
        name: name.to_string(),
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

pub fn client(id: u32, name: &str) -> Client {
    Client {
        id,
        name: name.to_string(),
        tax_id: "123.456.789-09".to_string(),
        phone: "(11) 98888-0000".to_string(),
        email: "ana@example.com".to_string(),
        country: "BRAZIL".to_string(),
        state: "SP".to_string(),
        city: "SAO PAULO".to_string(),
        district: "CENTRO".to_string(),
        street: "RUA DOIS, 200".to_string(),
    }
}

pub fn product(id: u32, name: &str, unit_price: f64, stock: u32) -> Product {
    Product {
        id,
        name: name.to_string(),
        unit_price,
        stock,
        supplier_id: 1,
    }
}
