use std::io;

use tracing_subscriber::EnvFilter;

use stockbook::{Console, JsonFileStore};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let store = JsonFileStore::new("data");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    stockbook::menu::run(&store, &mut console)
}
