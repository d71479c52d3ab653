// Entrypoint for the CLI application.
// - Keeps `main` small: set up logging, build the store and hand it to the
//   menu loop.
// - Diagnostics go to stderr and default to warnings; set `RUST_LOG` for more.

use shoe_inventory::{config::Config, store::InventoryStore, ui::main_menu};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = Config::default();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.default_log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let store = InventoryStore::new(&config.inventory_path);

    // Blocks until the user picks "Exit".
    main_menu(store)?;
    Ok(())
}
