//! Client menu - register, list, update, delete.

use std::io::{self, BufRead, Write};

use crate::domain::{Client, ClientPatch};
use crate::menu::prompt::Console;
use crate::store::{next_id, RecordsExt, Store};
use crate::validate;

const MENU: &str = "
========== CLIENTS ==========
1 - Register client
2 - List clients
3 - Update client
4 - Delete client
5 - Back
=============================";

const TAX_ID_ERROR: &str = "Invalid personal tax id, 11 digits expected.";
const PHONE_ERROR: &str = "Invalid phone, use (XX) XXXX-XXXX or (XX) XXXXX-XXXX.";
const EMAIL_ERROR: &str = "Invalid email address.";

pub(crate) fn run<S, R, W>(store: &S, console: &mut Console<R, W>) -> io::Result<()>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    let mut clients = match store.records::<Client>().load() {
        Ok(clients) => clients,
        Err(err) => {
            console.say(&format!("Could not load clients: {}", err))?;
            return Ok(());
        }
    };

    loop {
        console.say(MENU)?;
        match console.ask("Choose an option: ")?.as_str() {
            "1" => register(store, console, &mut clients)?,
            "2" => list(console, &clients)?,
            "3" => update(store, console, &mut clients)?,
            "4" => delete(store, console, &mut clients)?,
            "5" => {
                console.say("Saving clients...")?;
                persist(store, console, &clients)?;
                return Ok(());
            }
            _ => console.say("Invalid option, try again.")?,
        }
    }
}

fn persist<S, R, W>(store: &S, console: &mut Console<R, W>, clients: &[Client]) -> io::Result<bool>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    match store.records::<Client>().save(clients) {
        Ok(()) => Ok(true),
        Err(err) => {
            console.say(&format!("Could not save clients: {}", err))?;
            Ok(false)
        }
    }
}

fn register<S, R, W>(
    store: &S,
    console: &mut Console<R, W>,
    clients: &mut Vec<Client>,
) -> io::Result<()>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    console.say("\n--- Register client ---")?;
    let name = console.ask_text("Name: ")?;
    let tax_id = console.ask_until("Personal tax id: ", TAX_ID_ERROR, |answer| {
        validate::valid_personal_tax_id(answer).then(|| answer.to_string())
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

    clients.push(Client {
        id: next_id(clients),
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

    if persist(store, console, clients)? {
        console.say("Client registered.")?;
    }
    Ok(())
}

fn list<R, W>(console: &mut Console<R, W>, clients: &[Client]) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    console.say("\n--- Clients ---")?;
    if clients.is_empty() {
        return console.say("No clients on file.");
    }
    for client in clients {
        console.say(&format!(
            "ID: {} | Name: {} | Tax id: {} | Phone: {} | Email: {} | {} - {} ({})",
            client.id,
            client.name,
            client.tax_id,
            client.phone,
            client.email,
            client.city,
            client.state,
            client.country
        ))?;
    }
    Ok(())
}

fn update<S, R, W>(
    store: &S,
    console: &mut Console<R, W>,
    clients: &mut Vec<Client>,
) -> io::Result<()>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    list(console, clients)?;
    let Ok(id) = console.ask("Id of the client to update: ")?.parse::<u32>() else {
        return console.say("Invalid id.");
    };
    let Some(client) = clients.iter_mut().find(|client| client.id == id) else {
        return console.say("Client not found.");
    };

    console.say(&format!("\nEditing client: {}", client.name))?;
    console.say("Leave a field blank to keep the current value.")?;
    let patch = ClientPatch {
        name: console.ask_optional_text(&format!("New name ({}): ", client.name))?,
        tax_id: console.ask_optional_until(
            &format!("New personal tax id ({}): ", client.tax_id),
            TAX_ID_ERROR,
            |answer| validate::valid_personal_tax_id(answer).then(|| answer.to_string()),
        )?,
        phone: console.ask_optional_until(
            &format!("New phone ({}): ", client.phone),
            PHONE_ERROR,
            |answer| validate::valid_phone(answer).then(|| answer.to_string()),
        )?,
        email: console.ask_optional_until(
            &format!("New email ({}): ", client.email),
            EMAIL_ERROR,
            |answer| {
                let value = validate::normalize_email(answer);
                validate::valid_email(&value).then_some(value)
            },
        )?,
        country: console.ask_optional_text(&format!("New country ({}): ", client.country))?,
        state: console.ask_optional_text(&format!("New state ({}): ", client.state))?,
        city: console.ask_optional_text(&format!("New city ({}): ", client.city))?,
        district: console.ask_optional_text(&format!("New district ({}): ", client.district))?,
        street: console.ask_optional_text(&format!("New street ({}): ", client.street))?,
    };
    patch.apply(client);

    if persist(store, console, clients)? {
        console.say("Client updated.")?;
    }
    Ok(())
}

fn delete<S, R, W>(
    store: &S,
    console: &mut Console<R, W>,
    clients: &mut Vec<Client>,
) -> io::Result<()>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    list(console, clients)?;
    let Ok(id) = console.ask("Id of the client to delete: ")?.parse::<u32>() else {
        return console.say("Invalid id.");
    };
    let Some(index) = clients.iter().position(|client| client.id == id) else {
        return console.say("Client not found.");
    };

    clients.remove(index);
    if persist(store, console, clients)? {
        console.say("Client deleted.")?;
    }
    Ok(())
}
