//! Sales menu - record, list, delete.
//!
//! Recording goes through the checkout workflow; list and delete work on
//! the sale collection alone. Deleting a sale does not restock the
//! product, the same way deleting a client leaves its sales dangling.

use std::io::{self, BufRead, Write};

use crate::checkout::record_sale;
use crate::domain::{Client, Product, Sale};
use crate::menu::prompt::Console;
use crate::store::{RecordsExt, Store};

const MENU: &str = "
========== SALES ==========
1 - Record sale
2 - List sales
3 - Delete sale
0 - Back
===========================";

pub(crate) fn run<S, R, W>(store: &S, console: &mut Console<R, W>) -> io::Result<()>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    loop {
        console.say(MENU)?;
        match console.ask("Choose an option: ")?.as_str() {
            "1" => record(store, console)?,
            "2" => list(store, console)?,
            "3" => delete(store, console)?,
            "0" => return Ok(()),
            _ => console.say("Invalid option, try again.")?,
        }
    }
}

fn record<S, R, W>(store: &S, console: &mut Console<R, W>) -> io::Result<()>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    let clients = match store.records::<Client>().load() {
        Ok(clients) => clients,
        Err(err) => {
            console.say(&format!("Could not load clients: {}", err))?;
            return Ok(());
        }
    };
    if clients.is_empty() {
        return console.say("Register a client before recording sales.");
    }

    let products = match store.records::<Product>().load() {
        Ok(products) => products,
        Err(err) => {
            console.say(&format!("Could not load products: {}", err))?;
            return Ok(());
        }
    };
    if products.is_empty() {
        return console.say("Register a product before recording sales.");
    }

    console.say("\n--- Record sale ---")?;
    for client in &clients {
        console.say(&format!("ID: {} | Name: {}", client.id, client.name))?;
    }
    let client_id = console.ask_until("Client id: ", "No client with that id.", |answer| {
        answer
            .parse::<u32>()
            .ok()
            .filter(|id| clients.iter().any(|client| client.id == *id))
    })?;

    for product in &products {
        console.say(&format!(
            "ID: {} | Name: {} | Price: {:.2} | Stock: {}",
            product.id, product.name, product.unit_price, product.stock
        ))?;
    }
    let product_id = console.ask_until("Product id: ", "No product with that id.", |answer| {
        answer
            .parse::<u32>()
            .ok()
            .filter(|id| products.iter().any(|product| product.id == *id))
    })?;
    let Some(product) = products.iter().find(|product| product.id == product_id) else {
        return console.say("Product not found.");
    };

    let quantity = loop {
        let answer = console.ask("Quantity: ")?;
        match answer.parse::<u32>() {
            Err(_) => console.say("Invalid number.")?,
            Ok(0) => console.say("Quantity must be at least 1.")?,
            Ok(quantity) if quantity > product.stock => {
                console.say(&format!("Only {} in stock.", product.stock))?
            }
            Ok(quantity) => break quantity,
        }
    };

    match record_sale(store, client_id, product_id, quantity) {
        Ok(receipt) => {
            console.say("Sale recorded.")?;
            console.say(&format!(
                "Client: {} | Product: {} | Unit price: {:.2} | Quantity: {} | Total: {:.2}",
                receipt.client_name,
                receipt.product_name,
                receipt.sale.unit_price,
                receipt.sale.quantity,
                receipt.sale.total
            ))?;
        }
        Err(err) => console.say(&format!("Could not record sale: {}", err))?,
    }
    Ok(())
}

fn list<S, R, W>(store: &S, console: &mut Console<R, W>) -> io::Result<()>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    let sales = match store.records::<Sale>().load() {
        Ok(sales) => sales,
        Err(err) => {
            console.say(&format!("Could not load sales: {}", err))?;
            return Ok(());
        }
    };

    console.say("\n--- Sales ---")?;
    if sales.is_empty() {
        return console.say("No sales on file.");
    }
    for sale in &sales {
        console.say(&format!(
            "ID: {} | Client: {} | Product: {} | Qty: {} | Unit: {:.2} | Total: {:.2}",
            sale.id, sale.client_id, sale.product_id, sale.quantity, sale.unit_price, sale.total
        ))?;
    }
    Ok(())
}

fn delete<S, R, W>(store: &S, console: &mut Console<R, W>) -> io::Result<()>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    let mut sales = match store.records::<Sale>().load() {
        Ok(sales) => sales,
        Err(err) => {
            console.say(&format!("Could not load sales: {}", err))?;
            return Ok(());
        }
    };

    list(store, console)?;
    let Ok(id) = console.ask("Id of the sale to delete: ")?.parse::<u32>() else {
        return console.say("Invalid id.");
    };
    let Some(index) = sales.iter().position(|sale| sale.id == id) else {
        return console.say("Sale not found.");
    };

    sales.remove(index);
    match store.records::<Sale>().save(&sales) {
        Ok(()) => console.say("Sale deleted."),
        Err(err) => console.say(&format!("Could not save sales: {}", err)),
    }
}
