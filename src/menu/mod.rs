//! Console menus - the operator-facing surface.
//!
//! A nested numbered menu tree over a [`Store`]: one submenu per entity
//! kind plus the sale workflow. Every prompt re-asks on invalid input and
//! no store error ever leaves the loop; control always returns to the
//! operator.

mod clients;
mod products;
mod prompt;
mod sales;
mod suppliers;

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::store::Store;

pub use prompt::Console;

const MAIN_MENU: &str = "
================= MAIN MENU =================
1 - Suppliers
2 - Products
3 - Clients
4 - Sales
5 - Reports
0 - Quit
=============================================";

/// Run the main menu loop until the operator quits.
pub fn run<S, R, W>(store: &S, console: &mut Console<R, W>) -> io::Result<()>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    info!("session started");
    loop {
        console.say(MAIN_MENU)?;
        match console.ask("Choose an option: ")?.as_str() {
            "1" => suppliers::run(store, console)?,
            "2" => products::run(store, console)?,
            "3" => clients::run(store, console)?,
            "4" => sales::run(store, console)?,
            "5" => console.say("Reports are not implemented yet.")?,
            "0" => {
                console.say("Goodbye!")?;
                info!("session ended");
                return Ok(());
            }
            _ => console.say("Invalid option, try again.")?,
        }
    }
}
