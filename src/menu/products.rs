//! Product menu - register, list, update, delete.
//!
//! Registration checks that the owning supplier exists; nothing enforces
//! the reference after that.

use std::io::{self, BufRead, Write};

use crate::domain::{Product, ProductPatch, Supplier};
use crate::menu::prompt::Console;
use crate::store::{next_id, RecordsExt, Store};

const MENU: &str = "
========== PRODUCTS ==========
1 - Register product
2 - List products
3 - Update product
4 - Delete product
5 - Back
==============================";

pub(crate) fn run<S, R, W>(store: &S, console: &mut Console<R, W>) -> io::Result<()>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    let mut products = match store.records::<Product>().load() {
        Ok(products) => products,
        Err(err) => {
            console.say(&format!("Could not load products: {}", err))?;
            return Ok(());
        }
    };

    loop {
        console.say(MENU)?;
        match console.ask("Choose an option: ")?.as_str() {
            "1" => register(store, console, &mut products)?,
            "2" => list(console, &products)?,
            "3" => update(store, console, &mut products)?,
            "4" => delete(store, console, &mut products)?,
            "5" => {
                console.say("Saving products...")?;
                persist(store, console, &products)?;
                return Ok(());
            }
            _ => console.say("Invalid option, try again.")?,
        }
    }
}

fn persist<S, R, W>(
    store: &S,
    console: &mut Console<R, W>,
    products: &[Product],
) -> io::Result<bool>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    match store.records::<Product>().save(products) {
        Ok(()) => Ok(true),
        Err(err) => {
            console.say(&format!("Could not save products: {}", err))?;
            Ok(false)
        }
    }
}

fn register<S, R, W>(
    store: &S,
    console: &mut Console<R, W>,
    products: &mut Vec<Product>,
) -> io::Result<()>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    let suppliers = match store.records::<Supplier>().load() {
        Ok(suppliers) => suppliers,
        Err(err) => {
            console.say(&format!("Could not load suppliers: {}", err))?;
            return Ok(());
        }
    };
    if suppliers.is_empty() {
        return console.say("Register a supplier before registering products.");
    }

    console.say("\n--- Register product ---")?;
    let name = console.ask_text("Name: ")?;
    let unit_price = console.ask_price("Unit price: ")?;
    let stock = console.ask_u32("Stock quantity: ")?;
    let supplier_id = console.ask_until(
        "Supplier id: ",
        "No supplier with that id.",
        |answer| {
            answer
                .parse::<u32>()
                .ok()
                .filter(|id| suppliers.iter().any(|supplier| supplier.id == *id))
        },
    )?;

    let id = next_id(products);
    products.push(Product {
        id,
        name,
        unit_price,
        stock,
        supplier_id,
    });

    if persist(store, console, products)? {
        console.say(&format!("Product registered with id {}.", id))?;
    }
    Ok(())
}

fn list<R, W>(console: &mut Console<R, W>, products: &[Product]) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    console.say("\n--- Products ---")?;
    if products.is_empty() {
        return console.say("No products on file.");
    }
    for product in products {
        console.say(&format!(
            "ID: {} | Name: {} | Price: {:.2} | Stock: {} | Supplier: {}",
            product.id, product.name, product.unit_price, product.stock, product.supplier_id
        ))?;
    }
    Ok(())
}

fn update<S, R, W>(
    store: &S,
    console: &mut Console<R, W>,
    products: &mut Vec<Product>,
) -> io::Result<()>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    list(console, products)?;
    let Ok(id) = console.ask("Id of the product to update: ")?.parse::<u32>() else {
        return console.say("Invalid id.");
    };
    let Some(product) = products.iter_mut().find(|product| product.id == id) else {
        return console.say("Product not found.");
    };

    console.say(&format!("\nEditing product: {}", product.name))?;
    console.say("Leave a field blank to keep the current value.")?;
    let patch = ProductPatch {
        name: console.ask_optional_text(&format!("New name ({}): ", product.name))?,
        unit_price: console.ask_optional_until(
            &format!("New unit price ({:.2}): ", product.unit_price),
            "Invalid amount.",
            |answer| answer.parse::<f64>().ok().filter(|value| *value >= 0.0),
        )?,
        stock: console.ask_optional_until(
            &format!("New stock quantity ({}): ", product.stock),
            "Invalid number.",
            |answer| answer.parse::<u32>().ok(),
        )?,
        supplier_id: console.ask_optional_until(
            &format!("New supplier id ({}): ", product.supplier_id),
            "Invalid number.",
            |answer| answer.parse::<u32>().ok(),
        )?,
    };
    patch.apply(product);

    if persist(store, console, products)? {
        console.say("Product updated.")?;
    }
    Ok(())
}

fn delete<S, R, W>(
    store: &S,
    console: &mut Console<R, W>,
    products: &mut Vec<Product>,
) -> io::Result<()>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    list(console, products)?;
    let Ok(id) = console.ask("Id of the product to delete: ")?.parse::<u32>() else {
        return console.say("Invalid id.");
    };
    let Some(index) = products.iter().position(|product| product.id == id) else {
        return console.say("Product not found.");
    };

    products.remove(index);
    if persist(store, console, products)? {
        console.say("Product deleted.")?;
    }
    Ok(())
}
