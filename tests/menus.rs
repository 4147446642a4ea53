mod support;

use std::io::Cursor;

use pretty_assertions::assert_eq;
use stockbook::{menu, Client, Console, InMemoryStore, Product, RecordsExt, Sale, Supplier};
use support::{client, product, supplier};

/// Drive a full menu session from a script, one answer per line, and
/// return the transcript the operator would have seen.
fn run_session(store: &InMemoryStore, script: &str) -> String {
    let mut output = Vec::new();
    let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), &mut output);
    menu::run(store, &mut console).expect("script covers the whole session");
    drop(console);
    String::from_utf8(output).expect("transcript is utf8")
}

#[test]
fn quit_prints_a_farewell() {
    let store = InMemoryStore::new();
    let transcript = run_session(&store, "0\n");
    assert!(transcript.contains("MAIN MENU"));
    assert!(transcript.contains("Goodbye!"));
}

#[test]
fn unknown_option_reprompts_the_main_menu() {
    let store = InMemoryStore::new();
    let transcript = run_session(&store, "9\n0\n");
    assert!(transcript.contains("Invalid option, try again."));
}

#[test]
fn reports_are_a_stub() {
    let store = InMemoryStore::new();
    let transcript = run_session(&store, "5\n0\n");
    assert!(transcript.contains("Reports are not implemented yet."));
}

#[test]
fn register_supplier_through_the_menu() {
    let store = InMemoryStore::new();
    let script = "1\n1\nAcme Supplies\n12.345.678/0001-95\n(11) 4002-8922\nSales@Acme.example\nBrazil\nSP\nSao Paulo\nCentro\nRua Um, 100\n5\n0\n";

    let transcript = run_session(&store, script);
    assert!(transcript.contains("Supplier registered."));

    let suppliers = store.records::<Supplier>().load().unwrap();
    assert_eq!(suppliers.len(), 1);
    assert_eq!(suppliers[0].id, 1);
    assert_eq!(suppliers[0].name, "ACME SUPPLIES");
    assert_eq!(suppliers[0].tax_id, "12.345.678/0001-95");
    assert_eq!(suppliers[0].email, "sales@acme.example");
    assert_eq!(suppliers[0].street, "RUA UM, 100");
}

#[test]
fn invalid_fields_reprompt_until_valid() {
    let store = InMemoryStore::new();
    // Bad tax id, then bad phone, then bad email, each followed by a
    // valid answer.
    let script = "3\n1\nAna Maria\n123\n123.456.789-09\n4002-8922\n(11) 4002-8922\nana@example\nana@example.com\nBrazil\nSP\nSao Paulo\nCentro\nRua Dois, 200\n5\n0\n";

    let transcript = run_session(&store, script);
    assert!(transcript.contains("Invalid personal tax id, 11 digits expected."));
    assert!(transcript.contains("Invalid phone, use (XX) XXXX-XXXX or (XX) XXXXX-XXXX."));
    assert!(transcript.contains("Invalid email address."));
    assert!(transcript.contains("Client registered."));

    let clients = store.records::<Client>().load().unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].tax_id, "123.456.789-09");
    assert_eq!(clients[0].phone, "(11) 4002-8922");
    assert_eq!(clients[0].email, "ana@example.com");
}

#[test]
fn update_keeps_fields_left_blank() {
    let store = InMemoryStore::new();
    store.records().save(&[client(1, "ANA")]).unwrap();

    // Update client 1: new name, everything else blank.
    let script = "3\n3\n1\nAna Beatriz\n\n\n\n\n\n\n\n\n5\n0\n";
    let transcript = run_session(&store, script);
    assert!(transcript.contains("Client updated."));

    let clients = store.records::<Client>().load().unwrap();
    assert_eq!(clients[0].name, "ANA BEATRIZ");
    assert_eq!(clients[0].phone, client(1, "ANA").phone);
    assert_eq!(clients[0].email, client(1, "ANA").email);
    assert_eq!(clients[0].city, client(1, "ANA").city);
}

#[test]
fn deleting_an_unknown_id_reports_not_found() {
    let store = InMemoryStore::new();
    store.records().save(&[client(1, "ANA")]).unwrap();

    let transcript = run_session(&store, "3\n4\n99\n5\n0\n");
    assert!(transcript.contains("Client not found."));
    assert_eq!(store.records::<Client>().load().unwrap().len(), 1);
}

#[test]
fn deleting_a_client_removes_exactly_that_record() {
    let store = InMemoryStore::new();
    store
        .records()
        .save(&[client(1, "ANA"), client(2, "BRUNO")])
        .unwrap();

    let transcript = run_session(&store, "3\n4\n1\n5\n0\n");
    assert!(transcript.contains("Client deleted."));

    let clients = store.records::<Client>().load().unwrap();
    assert_eq!(clients, vec![client(2, "BRUNO")]);
}

#[test]
fn supplier_delete_asks_for_confirmation() {
    let store = InMemoryStore::new();
    store.records().save(&[supplier(1, "ACME")]).unwrap();

    // Answer "n" to the confirmation: nothing is deleted.
    let transcript = run_session(&store, "1\n4\n1\nn\n5\n0\n");
    assert!(transcript.contains("Deletion cancelled."));
    assert_eq!(store.records::<Supplier>().load().unwrap().len(), 1);

    // Answer "y": the supplier goes away.
    let transcript = run_session(&store, "1\n4\n1\ny\n5\n0\n");
    assert!(transcript.contains("Supplier deleted."));
    assert!(store.records::<Supplier>().load().unwrap().is_empty());
}

#[test]
fn product_registration_requires_a_supplier_on_file() {
    let store = InMemoryStore::new();

    let transcript = run_session(&store, "2\n1\n5\n0\n");
    assert!(transcript.contains("Register a supplier before registering products."));
    assert!(store.records::<Product>().load().unwrap().is_empty());
}

#[test]
fn product_registration_reprompts_unknown_supplier_ids() {
    let store = InMemoryStore::new();
    store.records().save(&[supplier(1, "ACME")]).unwrap();

    let script = "2\n1\nWidget\n10.0\n5\n7\n1\n5\n0\n";
    let transcript = run_session(&store, script);
    assert!(transcript.contains("No supplier with that id."));
    assert!(transcript.contains("Product registered with id 1."));

    let products = store.records::<Product>().load().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "WIDGET");
    assert_eq!(products[0].supplier_id, 1);
}

#[test]
fn sale_recorded_end_to_end_through_the_menu() {
    let store = InMemoryStore::new();
    store.records().save(&[client(1, "ANA")]).unwrap();
    store
        .records()
        .save(&[product(1, "WIDGET", 10.0, 5)])
        .unwrap();

    let transcript = run_session(&store, "4\n1\n1\n1\n3\n0\n0\n");
    assert!(transcript.contains("Sale recorded."));
    assert!(transcript.contains("Total: 30.00"));

    assert_eq!(store.records::<Product>().get(1).unwrap().unwrap().stock, 2);
    let sales = store.records::<Sale>().load().unwrap();
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].quantity, 3);
    assert_eq!(sales[0].total, 30.0);
}

#[test]
fn sale_menu_names_the_available_stock_on_oversell() {
    let store = InMemoryStore::new();
    store.records().save(&[client(1, "ANA")]).unwrap();
    store
        .records()
        .save(&[product(1, "WIDGET", 10.0, 5)])
        .unwrap();

    // Ask for 9, get told only 5 remain, settle for 2.
    let transcript = run_session(&store, "4\n1\n1\n1\n9\n2\n0\n0\n");
    assert!(transcript.contains("Only 5 in stock."));
    assert!(transcript.contains("Sale recorded."));
    assert_eq!(store.records::<Product>().get(1).unwrap().unwrap().stock, 3);
}

#[test]
fn sale_menu_reprompts_unknown_client_and_product_ids() {
    let store = InMemoryStore::new();
    store.records().save(&[client(1, "ANA")]).unwrap();
    store
        .records()
        .save(&[product(1, "WIDGET", 10.0, 5)])
        .unwrap();

    let transcript = run_session(&store, "4\n1\n9\n1\nx\n1\n1\n0\n0\n");
    assert!(transcript.contains("No client with that id."));
    assert!(transcript.contains("No product with that id."));
    assert!(transcript.contains("Sale recorded."));
}

#[test]
fn deleting_a_sale_does_not_restock_the_product() {
    let store = InMemoryStore::new();
    store.records().save(&[client(1, "ANA")]).unwrap();
    store
        .records()
        .save(&[product(1, "WIDGET", 10.0, 5)])
        .unwrap();

    run_session(&store, "4\n1\n1\n1\n3\n0\n0\n");
    let transcript = run_session(&store, "4\n3\n1\n0\n0\n");
    assert!(transcript.contains("Sale deleted."));

    assert!(store.records::<Sale>().load().unwrap().is_empty());
    assert_eq!(store.records::<Product>().get(1).unwrap().unwrap().stock, 2);
}

#[test]
fn listing_an_empty_collection_says_so() {
    let store = InMemoryStore::new();
    let transcript = run_session(&store, "3\n2\n5\n0\n");
    assert!(transcript.contains("No clients on file."));
}
