// Runtime configuration. The tracker reads no behavior-changing
// environment; the only knob outside this struct is `RUST_LOG`, which
// overrides `default_log_filter` for diagnostics.

use std::path::PathBuf;

/// Backing file name, resolved against the working directory.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.txt";

#[derive(Debug, Clone)]
pub struct Config {
    pub inventory_path: PathBuf,
    pub default_log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            inventory_path: PathBuf::from(DEFAULT_INVENTORY_FILE),
            default_log_filter: "warn".into(),
        }
    }
}
