//! Supplier menu - register, list, update, delete.

use std::io::{self, BufRead, Write};

use crate::domain::{Supplier, SupplierPatch};
use crate::menu::prompt::Console;
use crate::store::{next_id, RecordsExt, Store};
use crate::validate;

const MENU: &str = "
========== SUPPLIERS ==========
1 - Register supplier
2 - List suppliers
3 - Update supplier
4 - Delete supplier
5 - Back
===============================";

const TAX_ID_ERROR: &str = "Invalid business tax id, 14 digits expected.";
const PHONE_ERROR: &str = "Invalid phone, use (XX) XXXX-XXXX or (XX) XXXXX-XXXX.";
const EMAIL_ERROR: &str = "Invalid email address.";

pub(crate) fn run<S, R, W>(store: &S, console: &mut Console<R, W>) -> io::Result<()>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    let mut suppliers = match store.records::<Supplier>().load() {
        Ok(suppliers) => suppliers,
        Err(err) => {
            console.say(&format!("Could not load suppliers: {}", err))?;
            return Ok(());
        }
    };

    loop {
        console.say(MENU)?;
        match console.ask("Choose an option: ")?.as_str() {
            "1" => register(store, console, &mut suppliers)?,
            "2" => list(console, &suppliers)?,
            "3" => update(store, console, &mut suppliers)?,
            "4" => delete(store, console, &mut suppliers)?,
            "5" => {
                console.say("Saving suppliers...")?;
                persist(store, console, &suppliers)?;
                return Ok(());
            }
            _ => console.say("Invalid option, try again.")?,
        }
    }
}

fn persist<S, R, W>(
    store: &S,
    console: &mut Console<R, W>,
    suppliers: &[Supplier],
) -> io::Result<bool>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    match store.records::<Supplier>().save(suppliers) {
        Ok(()) => Ok(true),
        Err(err) => {
            console.say(&format!("Could not save suppliers: {}", err))?;
            Ok(false)
        }
    }
}

fn register<S, R, W>(
    store: &S,
    console: &mut Console<R, W>,
    suppliers: &mut Vec<Supplier>,
) -> io::Result<()>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    console.say("\n--- Register supplier ---")?;
    let name = console.ask_text("Name: ")?;
    let tax_id = console.ask_until("Business tax id: ", TAX_ID_ERROR, |answer| {
        validate::valid_business_tax_id(answer).then(|| answer.to_string())
    })?;
    let phone = console.ask_until("Phone: ", PHONE_ERROR, |answer| {
        validate::valid_phone(answer).then(|| answer.to_string())
    })?;
    let email = console.ask_until("Email: ", EMAIL_ERROR, |answer| {
        let value = validate::normalize_email(answer);
        validate::valid_email(&value).then_some(value)
    })?;
    let country = console.ask_text("Country: ")?;
    let state = console.ask_text("State: ")?;
    let city = console.ask_text("City: ")?;
    let district = console.ask_text("District: ")?;
    let street = console.ask_text("Street and number: ")?;

    suppliers.push(Supplier {
        id: next_id(suppliers),
        name,
        tax_id,
        phone,
        email,
        country,
        state,
        city,
        district,
        street,
    });

    if persist(store, console, suppliers)? {
        console.say("Supplier registered.")?;
    }
    Ok(())
}

fn list<R, W>(console: &mut Console<R, W>, suppliers: &[Supplier]) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    console.say("\n--- Suppliers ---")?;
    if suppliers.is_empty() {
        return console.say("No suppliers on file.");
    }
    for supplier in suppliers {
        console.say(&format!(
            "ID: {} | Name: {} | Tax id: {} | Phone: {} | Email: {} | Country: {} | State: {}",
            supplier.id,
            supplier.name,
            supplier.tax_id,
            supplier.phone,
            supplier.email,
            supplier.country,
            supplier.state
        ))?;
    }
    Ok(())
}

fn update<S, R, W>(
    store: &S,
    console: &mut Console<R, W>,
    suppliers: &mut Vec<Supplier>,
) -> io::Result<()>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    list(console, suppliers)?;
    let Ok(id) = console.ask("Id of the supplier to update: ")?.parse::<u32>() else {
        return console.say("Invalid id.");
    };
    let Some(supplier) = suppliers.iter_mut().find(|supplier| supplier.id == id) else {
        return console.say("Supplier not found.");
    };

    console.say(&format!("\nEditing supplier: {}", supplier.name))?;
    console.say("Leave a field blank to keep the current value.")?;
    let patch = SupplierPatch {
        name: console.ask_optional_text(&format!("New name ({}): ", supplier.name))?,
        tax_id: console.ask_optional_until(
            &format!("New business tax id ({}): ", supplier.tax_id),
            TAX_ID_ERROR,
            |answer| validate::valid_business_tax_id(answer).then(|| answer.to_string()),
        )?,
        phone: console.ask_optional_until(
            &format!("New phone ({}): ", supplier.phone),
            PHONE_ERROR,
            |answer| validate::valid_phone(answer).then(|| answer.to_string()),
        )?,
        email: console.ask_optional_until(
            &format!("New email ({}): ", supplier.email),
            EMAIL_ERROR,
            |answer| {
                let value = validate::normalize_email(answer);
                validate::valid_email(&value).then_some(value)
            },
        )?,
        country: console.ask_optional_text(&format!("New country ({}): ", supplier.country))?,
        state: console.ask_optional_text(&format!("New state ({}): ", supplier.state))?,
        city: console.ask_optional_text(&format!("New city ({}): ", supplier.city))?,
        district: console.ask_optional_text(&format!("New district ({}): ", supplier.district))?,
        street: console.ask_optional_text(&format!("New street ({}): ", supplier.street))?,
    };
    patch.apply(supplier);

    if persist(store, console, suppliers)? {
        console.say("Supplier updated.")?;
    }
    Ok(())
}

fn delete<S, R, W>(
    store: &S,
    console: &mut Console<R, W>,
    suppliers: &mut Vec<Supplier>,
) -> io::Result<()>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    list(console, suppliers)?;
    let Ok(id) = console.ask("Id of the supplier to delete: ")?.parse::<u32>() else {
        return console.say("Invalid id.");
    };
    let Some(index) = suppliers.iter().position(|supplier| supplier.id == id) else {
        return console.say("Supplier not found.");
    };

    let question = format!("Really delete supplier {}? (y/n): ", suppliers[index].name);
    if console.ask(&question)?.to_lowercase() != "y" {
        return console.say("Deletion cancelled.");
    }

    suppliers.remove(index);
    if persist(store, console, suppliers)? {
        console.say("Supplier deleted.")?;
    }
    Ok(())
}
